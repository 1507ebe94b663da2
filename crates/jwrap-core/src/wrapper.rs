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

//! The JSON wrapper contract.
//!
//! [`JsonWrapper`] is the complete operation surface every adapter provides.
//! Callers hold `Box<dyn JsonWrapper>` or `&mut dyn JsonWrapper` and never
//! see the engine behind it.
//!
//! # Default State
//!
//! A fresh document is `null`, not `{}`. The first setter call turns it into
//! an object. An empty object has to be requested with
//! [`JsonWrapper::get_empty_object`].
//!
//! # Nested Objects
//!
//! Nested documents are copied in and copied out. Nothing returned by a
//! getter aliases the parent, and nothing passed to
//! [`JsonWrapper::set_object`] stays linked to the stored value.
//!
//! # Arrays
//!
//! Arrays have no accessors. They are accepted by `parse`, preserved
//! verbatim by `to_json_string`, and can be copied out whole with
//! `get_object`.

use crate::error::JsonResult;
use std::any::Any;
use std::fmt;

/// Top-level state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocumentKind {
    /// The null literal. Every fresh document starts here.
    Null,
    /// A key/value mapping.
    Object,
    /// An opaque array, reachable only through `parse`.
    Array,
    /// A bare number, boolean or string, reachable only through `parse`.
    Scalar,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Object => write!(f, "object"),
            Self::Array => write!(f, "array"),
            Self::Scalar => write!(f, "scalar"),
        }
    }
}

/// JSON wrapper contract for simple JSON types.
///
/// All operations address a top-level key. Setters overwrite whatever is at
/// the key, including values of a different type. Getters coerce the stored
/// value following [`crate::coerce`].
///
/// Every failure is reported as a
/// [`SerializationError`](crate::SerializationError).
pub trait JsonWrapper: Any + fmt::Debug + Send {
    // Setters

    /// Set a signed integer value.
    fn set_int(&mut self, key: &str, value: i64) -> JsonResult<()>;

    /// Set an unsigned integer value.
    fn set_unsigned(&mut self, key: &str, value: u64) -> JsonResult<()>;

    /// Set a double value.
    ///
    /// Non-finite values have no JSON representation and are rejected.
    fn set_double(&mut self, key: &str, value: f64) -> JsonResult<()>;

    /// Set a boolean value.
    fn set_bool(&mut self, key: &str, value: bool) -> JsonResult<()>;

    /// Set a string value.
    fn set_string(&mut self, key: &str, value: &str) -> JsonResult<()>;

    /// Store a deep copy of `value` at `key`.
    ///
    /// `value` must come from the same adapter; anything else fails with
    /// [`ErrorReason::IncompatibleObject`](crate::ErrorReason::IncompatibleObject).
    fn set_object(&mut self, key: &str, value: &dyn JsonWrapper) -> JsonResult<()>;

    /// Set the null literal.
    fn set_null(&mut self, key: &str) -> JsonResult<()>;

    // Getters

    /// Get the value at `key` as a signed integer.
    fn get_int(&self, key: &str) -> JsonResult<i64>;

    /// Get the value at `key` as an unsigned integer.
    fn get_unsigned(&self, key: &str) -> JsonResult<u64>;

    /// Get the value at `key` as a double.
    fn get_double(&self, key: &str) -> JsonResult<f64>;

    /// Get the value at `key` as a boolean.
    fn get_bool(&self, key: &str) -> JsonResult<bool>;

    /// Get the value at `key` as a string.
    fn get_string(&self, key: &str) -> JsonResult<String>;

    /// Get an independent copy of the value stored at `key`.
    fn get_object(&self, key: &str) -> JsonResult<Box<dyn JsonWrapper>>;

    /// Check whether the value at `key` is the null literal.
    ///
    /// Fails if the key does not exist.
    fn is_null(&self, key: &str) -> JsonResult<bool>;

    /// Check whether `key` is present. Never fails.
    fn has_key(&self, key: &str) -> bool;

    /// Create a new, independent `{}` document from the same adapter.
    fn get_empty_object(&self) -> JsonResult<Box<dyn JsonWrapper>>;

    /// Top-level state of this document.
    fn kind(&self) -> DocumentKind;

    // Serialization

    /// Replace the content by decoding `input`.
    ///
    /// Invalid UTF-8 anywhere in the input fails, as does any grammar error.
    /// On failure the previous content is left intact.
    fn parse_bytes(&mut self, input: &[u8]) -> JsonResult<()>;

    /// Replace the content by decoding `input`.
    fn parse(&mut self, input: &str) -> JsonResult<()> {
        self.parse_bytes(input.as_bytes())
    }

    /// Canonical serialized form: compact, object keys in ascending order.
    fn to_json_string(&self) -> JsonResult<String>;

    /// Upcast for adapter compatibility checks in `set_object`.
    fn as_any(&self) -> &dyn Any;
}
