// Dweve JWRAP - JSON Wrapper Abstraction Layer
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Resource limits applied when parsing JSON text.

/// Default maximum input size in bytes (64 MB).
pub const DEFAULT_MAX_INPUT_SIZE: usize = 64 * 1024 * 1024;

/// Default maximum nesting depth of arrays and objects.
///
/// Equal to the deepest nesting serde_json decodes (its recursion limit
/// rejects depth 128), so the default is the effective ceiling.
pub const DEFAULT_MAX_DEPTH: usize = 127;

/// Default maximum number of keys in a single object.
pub const DEFAULT_MAX_OBJECT_KEYS: usize = 100_000;

/// Configurable limits for `parse`.
///
/// These bound the resources a single parse may consume. Setters are never
/// limited: a caller building a document key by key already owns the memory.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    /// Maximum input size in bytes (default: 64MB).
    pub max_input_size: usize,
    /// Maximum nesting depth, arrays and objects both counting (default: 127).
    ///
    /// Adapters may cap this at the depth their engine can decode.
    pub max_depth: usize,
    /// Maximum number of keys in a single object (default: 100k).
    pub max_object_keys: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            max_object_keys: DEFAULT_MAX_OBJECT_KEYS,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_depth: usize::MAX,
            max_object_keys: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_input_size, 64 * 1024 * 1024);
        assert_eq!(limits.max_depth, 127);
        assert_eq!(limits.max_object_keys, 100_000);
    }

    #[test]
    fn test_unlimited() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_input_size, usize::MAX);
        assert_eq!(limits.max_depth, usize::MAX);
        assert_eq!(limits.max_object_keys, usize::MAX);
    }

    #[test]
    fn test_custom_limits() {
        let limits = Limits {
            max_input_size: 100,
            max_depth: 5,
            max_object_keys: 10,
        };
        assert_ne!(limits, Limits::default());
        assert_eq!(limits.clone(), limits);
    }

    #[test]
    fn test_limits_debug() {
        let debug = format!("{:?}", Limits::default());
        assert!(debug.contains("max_input_size"));
        assert!(debug.contains("max_depth"));
        assert!(debug.contains("max_object_keys"));
    }
}
