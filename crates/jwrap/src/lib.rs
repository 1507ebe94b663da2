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

//! # JWRAP - JSON Wrapper Abstraction Layer
//!
//! A small, engine-independent interface for building, querying, parsing
//! and serializing JSON documents. Application code is written against the
//! [`JsonWrapper`] trait object; the engine behind it is chosen once, here.
//!
//! ## Quick Start
//!
//! ```rust
//! use jwrap::{new_document, JsonWrapper};
//!
//! let mut doc = new_document();
//! doc.set_string("name", "json").unwrap();
//! doc.set_bool("happy", true).unwrap();
//!
//! let mut inner = doc.get_empty_object().unwrap();
//! inner.set_int("everything", 42).unwrap();
//! doc.set_object("answer", &*inner).unwrap();
//!
//! assert_eq!(
//!     doc.to_json_string().unwrap(),
//!     r#"{"answer":{"everything":42},"happy":true,"name":"json"}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`coerce`]: the numeric conversion rules shared by all adapters
//! - [`serde`](mod@serde): the serde_json adapter and its configuration
//!
//! Errors are always [`SerializationError`]; see [`JsonResultExt`] for
//! attaching context while they propagate.

// Re-export the contract
pub use jwrap_core::{
    coerce,
    DocumentKind,
    // Errors
    ErrorReason,
    JsonResult,
    JsonWrapper,
    // Parse limits
    Limits,
    SerializationError,
    DEFAULT_MAX_DEPTH,
    DEFAULT_MAX_INPUT_SIZE,
    DEFAULT_MAX_OBJECT_KEYS,
};

// Error handling extensions
mod error_ext;
pub use error_ext::JsonResultExt;

// Re-export the serde_json adapter
pub mod serde {
    //! serde_json adapter
    pub use jwrap_serde::{
        SerdeJsonConfig, SerdeJsonConfigBuilder, SerdeJsonWrapper, DEFAULT_LOG_PREVIEW_LEN,
    };
}

pub use jwrap_serde::{SerdeJsonConfig, SerdeJsonWrapper};

/// The adapter behind [`new_document`].
pub type DefaultWrapper = SerdeJsonWrapper;

/// Create an empty (`null`) document with the default adapter.
pub fn new_document() -> Box<dyn JsonWrapper> {
    Box::new(DefaultWrapper::new())
}

/// Create an empty document with the default adapter and custom limits.
///
/// # Examples
///
/// ```rust
/// use jwrap::{new_document_with_config, ErrorReason, SerdeJsonConfig};
///
/// let config = SerdeJsonConfig::builder().max_input_size(16).build();
/// let mut doc = new_document_with_config(config);
///
/// let err = doc.parse(r#"{"too":"long for the limit"}"#).unwrap_err();
/// assert_eq!(err.reason, ErrorReason::LimitExceeded);
/// ```
pub fn new_document_with_config(config: SerdeJsonConfig) -> Box<dyn JsonWrapper> {
    Box::new(DefaultWrapper::with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_null() {
        let doc = new_document();
        assert_eq!(doc.kind(), DocumentKind::Null);
        assert_eq!(doc.to_json_string().unwrap(), "null");
    }

    #[test]
    fn test_new_document_uses_default_adapter() {
        let doc = new_document();
        assert!(doc.as_any().downcast_ref::<DefaultWrapper>().is_some());
    }

    #[test]
    fn test_new_document_with_config_keeps_config() {
        let config = SerdeJsonConfig::builder().max_depth(2).build();
        let doc = new_document_with_config(config.clone());
        let adapter = doc.as_any().downcast_ref::<DefaultWrapper>().unwrap();
        assert_eq!(adapter.config(), &config);
    }
}
