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

//! Error context helpers.
//!
//! Extension trait for `JsonResult<T>` that annotates errors as they
//! propagate, without touching the original message or reason.
//!
//! # Examples
//!
//! ```rust
//! use jwrap::{new_document, JsonResultExt, JsonWrapper, SerializationError};
//!
//! fn load_settings(text: &str) -> Result<i64, SerializationError> {
//!     let mut doc = new_document();
//!     doc.parse(text).context("while parsing settings")?;
//!     doc.get_int("timeout")
//!         .with_context(|| format!("reading timeout from {} bytes", text.len()))
//! }
//!
//! let err = load_settings(r#"{"retries":3}"#).unwrap_err();
//! assert_eq!(err.context.as_deref(), Some("reading timeout from 13 bytes"));
//! ```

use crate::SerializationError;
use std::fmt;

/// Extension trait for adding context to `Result<T, SerializationError>`.
///
/// Context accumulates: each call appends to what earlier layers added.
pub trait JsonResultExt<T> {
    /// Add context to an error.
    ///
    /// For context that is expensive to build, prefer [`with_context`].
    ///
    /// [`with_context`]: JsonResultExt::with_context
    fn context<C>(self, context: C) -> Result<T, SerializationError>
    where
        C: fmt::Display;

    /// Add context to an error, computing it only on the error path.
    fn with_context<C, F>(self, f: F) -> Result<T, SerializationError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T> JsonResultExt<T> for Result<T, SerializationError> {
    fn context<C>(self, context: C) -> Result<T, SerializationError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, SerializationError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context(e, f().to_string()))
    }
}

// Empty context is dropped rather than leaving a dangling separator
fn add_context(error: SerializationError, context: String) -> SerializationError {
    if context.is_empty() {
        error
    } else {
        error.with_context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorReason;

    // ==================== context() tests ====================

    #[test]
    fn test_context_on_ok_is_noop() {
        let result: Result<i32, SerializationError> = Ok(7);
        assert_eq!(result.context("unused").unwrap(), 7);
    }

    #[test]
    fn test_context_preserves_error_fields() {
        let original = SerializationError::missing_key("Integer");
        let err = Err::<(), _>(original).context("loading").unwrap_err();

        assert_eq!(err.reason, ErrorReason::MissingKey);
        assert_eq!(err.message, "Key not found");
        assert_eq!(err.key.as_deref(), Some("Integer"));
        assert_eq!(err.context.as_deref(), Some("loading"));
    }

    #[test]
    fn test_context_chains() {
        let err = Err::<(), _>(SerializationError::syntax("bad"))
            .context("inner")
            .context("outer")
            .unwrap_err();
        assert_eq!(err.context.as_deref(), Some("inner; outer"));
    }

    #[test]
    fn test_context_empty_string() {
        let err = Err::<(), _>(SerializationError::syntax("bad"))
            .context("")
            .unwrap_err();
        assert_eq!(err.context, None);
    }

    // ==================== with_context() tests ====================

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut evaluated = false;
        let result: Result<i32, SerializationError> = Ok(1);
        let value = result
            .with_context(|| {
                evaluated = true;
                "never built"
            })
            .unwrap();

        assert_eq!(value, 1);
        assert!(!evaluated);
    }

    #[test]
    fn test_with_context_on_error() {
        let err = Err::<(), _>(SerializationError::encoding("bad byte"))
            .with_context(|| format!("chunk {}", 3))
            .unwrap_err();
        assert_eq!(err.context.as_deref(), Some("chunk 3"));
        assert_eq!(err.reason, ErrorReason::Encoding);
    }
}
