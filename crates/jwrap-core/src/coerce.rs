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

//! Scalar coercion rules shared by every adapter.
//!
//! Adapters describe a stored value as a [`ValueRef`] and ask this module to
//! convert it. Conversions follow the host numeric model exactly: integer
//! conversions reinterpret bits (`-1` read as unsigned is `u64::MAX`), float
//! to integer conversions truncate toward zero and saturate, and booleans
//! read as numbers give `0` or `1`. Nothing is range checked.
//!
//! # Examples
//!
//! ```rust
//! use jwrap_core::coerce::{to_unsigned, ValueRef};
//!
//! assert_eq!(to_unsigned(ValueRef::Int(-1)), Some(u64::MAX));
//! assert_eq!(to_unsigned(ValueRef::Str("1")), None);
//! ```

/// Engine-independent view of one stored JSON value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Unsigned(u64),
    Float(f64),
    Str(&'a str),
    /// An object; contents are not needed for scalar coercion.
    Object,
    /// An opaque array.
    Array,
}

impl ValueRef<'_> {
    /// Name of the stored type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Unsigned(_) => "unsigned integer",
            Self::Float(_) => "double",
            Self::Str(_) => "string",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

/// Coerce to a signed 64-bit integer.
pub fn to_int(value: ValueRef<'_>) -> Option<i64> {
    match value {
        ValueRef::Int(i) => Some(i),
        ValueRef::Unsigned(u) => Some(u as i64),
        ValueRef::Float(f) => Some(f as i64),
        ValueRef::Bool(b) => Some(i64::from(b)),
        _ => None,
    }
}

/// Coerce to an unsigned 64-bit integer.
pub fn to_unsigned(value: ValueRef<'_>) -> Option<u64> {
    match value {
        ValueRef::Int(i) => Some(i as u64),
        ValueRef::Unsigned(u) => Some(u),
        ValueRef::Float(f) => Some(f as u64),
        ValueRef::Bool(b) => Some(u64::from(b)),
        _ => None,
    }
}

/// Coerce to an IEEE-754 double.
pub fn to_double(value: ValueRef<'_>) -> Option<f64> {
    match value {
        ValueRef::Int(i) => Some(i as f64),
        ValueRef::Unsigned(u) => Some(u as f64),
        ValueRef::Float(f) => Some(f),
        ValueRef::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Coerce to a boolean. Only booleans qualify.
pub fn to_bool(value: ValueRef<'_>) -> Option<bool> {
    match value {
        ValueRef::Bool(b) => Some(b),
        _ => None,
    }
}

/// Coerce to a string slice. Only strings qualify.
pub fn to_str(value: ValueRef<'_>) -> Option<&str> {
    match value {
        ValueRef::Str(s) => Some(s),
        _ => None,
    }
}
