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

//! Configuration for the serde_json adapter

use jwrap_core::Limits;
use serde::{Deserialize, Serialize};

/// Default number of input bytes shown in log messages
pub const DEFAULT_LOG_PREVIEW_LEN: usize = 64;

/// Configuration for [`SerdeJsonWrapper`](crate::SerdeJsonWrapper)
///
/// Documents created from another document (`get_object`,
/// `get_empty_object`) inherit its configuration.
///
/// # Examples
///
/// ```rust
/// use jwrap_serde::SerdeJsonConfig;
///
/// // Default limits
/// let config = SerdeJsonConfig::default();
///
/// // Strict limits for untrusted input
/// let strict = SerdeJsonConfig::builder()
///     .max_input_size(64 * 1024)
///     .max_depth(16)
///     .max_object_keys(256)
///     .build();
/// assert_eq!(strict.limits.max_depth, 16);
/// ```
///
/// Missing fields take their defaults when deserializing, so a partial
/// settings file is enough:
///
/// ```rust
/// use jwrap_serde::SerdeJsonConfig;
///
/// let config: SerdeJsonConfig =
///     serde_json::from_str(r#"{"limits":{"max_depth":8}}"#).unwrap();
/// assert_eq!(config.limits.max_depth, 8);
/// assert_eq!(config.limits.max_object_keys, 100_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerdeJsonConfig {
    /// Limits enforced by `parse`
    pub limits: Limits,

    /// Maximum number of input bytes echoed into log messages (default: 64)
    pub log_preview_len: usize,
}

impl Default for SerdeJsonConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            log_preview_len: DEFAULT_LOG_PREVIEW_LEN,
        }
    }
}

impl SerdeJsonConfig {
    /// Create a new builder
    pub fn builder() -> SerdeJsonConfigBuilder {
        SerdeJsonConfigBuilder::default()
    }
}

/// Builder for `SerdeJsonConfig`
#[derive(Debug, Clone, Default)]
pub struct SerdeJsonConfigBuilder {
    config: SerdeJsonConfig,
}

impl SerdeJsonConfigBuilder {
    /// Replace all limits at once
    pub fn limits(mut self, limits: Limits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Set the maximum input size in bytes
    pub fn max_input_size(mut self, limit: usize) -> Self {
        self.config.limits.max_input_size = limit;
        self
    }

    /// Set the maximum nesting depth
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.config.limits.max_depth = limit;
        self
    }

    /// Set the maximum number of keys per object
    pub fn max_object_keys(mut self, limit: usize) -> Self {
        self.config.limits.max_object_keys = limit;
        self
    }

    /// Disable all limits (only for trusted input)
    ///
    /// Nesting depth stays capped at [`DEFAULT_MAX_DEPTH`](jwrap_core::DEFAULT_MAX_DEPTH),
    /// the deepest input serde_json decodes.
    pub fn unlimited(mut self) -> Self {
        self.config.limits = Limits::unlimited();
        self
    }

    /// Set how many input bytes appear in log messages
    pub fn log_preview_len(mut self, len: usize) -> Self {
        self.config.log_preview_len = len;
        self
    }

    /// Build the configuration
    pub fn build(self) -> SerdeJsonConfig {
        self.config
    }
}
