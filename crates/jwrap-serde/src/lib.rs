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

//! JWRAP adapter backed by serde_json
//!
//! [`SerdeJsonWrapper`] implements the [`JsonWrapper`](jwrap_core::JsonWrapper)
//! contract on top of `serde_json::Value`. serde_json supplies parsing with
//! UTF-8 validation, typed access, compact serialization and key lookup;
//! this crate adds the contract's coercion rules, sorted-key output, parse
//! limits, and the translation of every serde_json failure into
//! [`SerializationError`](jwrap_core::SerializationError).
//!
//! # Examples
//!
//! ```rust
//! use jwrap_core::JsonWrapper;
//! use jwrap_serde::SerdeJsonWrapper;
//!
//! let mut doc = SerdeJsonWrapper::new();
//! doc.parse(r#"{"name": "json", "answer": {"everything": 42}}"#).unwrap();
//!
//! let answer = doc.get_object("answer").unwrap();
//! assert_eq!(answer.get_int("everything").unwrap(), 42);
//! assert_eq!(
//!     doc.to_json_string().unwrap(),
//!     r#"{"answer":{"everything":42},"name":"json"}"#
//! );
//! ```
//!
//! ## Limits
//!
//! ```rust
//! use jwrap_core::{ErrorReason, JsonWrapper};
//! use jwrap_serde::{SerdeJsonConfig, SerdeJsonWrapper};
//!
//! let config = SerdeJsonConfig::builder().max_depth(1).build();
//! let mut doc = SerdeJsonWrapper::with_config(config);
//!
//! let err = doc.parse(r#"{"a":{"b":1}}"#).unwrap_err();
//! assert_eq!(err.reason, ErrorReason::LimitExceeded);
//! ```

mod canonical;
mod config;
mod limits;
mod wrapper;

pub use config::{SerdeJsonConfig, SerdeJsonConfigBuilder, DEFAULT_LOG_PREVIEW_LEN};
pub use wrapper::SerdeJsonWrapper;
