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

//! `JsonWrapper` implementation backed by `serde_json::Value`

use crate::canonical::to_canonical_string;
use crate::config::SerdeJsonConfig;
use crate::limits::check_structure;
use jwrap_core::coerce::{self, ValueRef};
use jwrap_core::{DocumentKind, ErrorReason, JsonResult, JsonWrapper, SerializationError};
use serde_json::{Map, Number, Value};
use std::any::Any;
use tracing::{debug, trace, warn};

/// JSON document backed by serde_json.
///
/// # Examples
///
/// ```rust
/// use jwrap_core::JsonWrapper;
/// use jwrap_serde::SerdeJsonWrapper;
///
/// let mut doc = SerdeJsonWrapper::new();
/// assert_eq!(doc.to_json_string().unwrap(), "null");
///
/// doc.set_int("b", 1).unwrap();
/// doc.set_int("a", 2).unwrap();
/// assert_eq!(doc.to_json_string().unwrap(), r#"{"a":2,"b":1}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SerdeJsonWrapper {
    value: Value,
    config: SerdeJsonConfig,
}

impl SerdeJsonWrapper {
    /// Create a `null` document with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `null` document with a custom configuration
    pub fn with_config(config: SerdeJsonConfig) -> Self {
        Self {
            value: Value::Null,
            config,
        }
    }

    /// The configuration this document was created with
    pub fn config(&self) -> &SerdeJsonConfig {
        &self.config
    }

    /// Derive a document that shares this one's configuration
    fn sibling(&self, value: Value) -> Self {
        Self {
            value,
            config: self.config.clone(),
        }
    }

    /// Object map for writing `key`, upgrading `null` to `{}` first
    fn object_mut(&mut self, key: &str, what: &str) -> JsonResult<&mut Map<String, Value>> {
        if self.value.is_null() {
            self.value = Value::Object(Map::new());
        }
        let kind = kind_of(&self.value);
        match self.value {
            Value::Object(ref mut map) => Ok(map),
            _ => {
                warn!("Rejected set of {}: document is {}", what, kind);
                Err(SerializationError::not_an_object(format!(
                    "Failed to set {}: document is {}, not an object",
                    what, kind
                ))
                .with_key(key))
            }
        }
    }

    fn insert(&mut self, key: &str, what: &str, value: Value) -> JsonResult<()> {
        trace!("Setting {} at key {:?}", what, key);
        self.object_mut(key, what)?.insert(key.to_string(), value);
        Ok(())
    }

    fn lookup(&self, key: &str, what: &str) -> JsonResult<&Value> {
        self.value
            .as_object()
            .and_then(|map| map.get(key))
            .ok_or_else(|| {
                trace!("Key {:?} not found while getting {}", key, what);
                SerializationError::new(
                    ErrorReason::MissingKey,
                    format!("Failed to get {} value: key not found", what),
                )
                .with_key(key)
            })
    }

    /// Look up `key` and convert it with one of the shared coercion rules
    fn coerced<'a, T>(
        &'a self,
        key: &str,
        what: &str,
        convert: impl FnOnce(ValueRef<'a>) -> Option<T>,
    ) -> JsonResult<T> {
        let stored = value_ref(self.lookup(key, what)?);
        convert(stored).ok_or_else(|| {
            SerializationError::type_mismatch(format!(
                "Failed to get {} value: found {}",
                what,
                stored.type_name()
            ))
            .with_key(key)
        })
    }
}

impl JsonWrapper for SerdeJsonWrapper {
    fn set_int(&mut self, key: &str, value: i64) -> JsonResult<()> {
        self.insert(key, "Integer", Value::from(value))
    }

    fn set_unsigned(&mut self, key: &str, value: u64) -> JsonResult<()> {
        self.insert(key, "Unsigned Integer", Value::from(value))
    }

    fn set_double(&mut self, key: &str, value: f64) -> JsonResult<()> {
        let number = Number::from_f64(value).ok_or_else(|| {
            SerializationError::unrepresentable(format!(
                "Failed to set Double: {} has no JSON representation",
                value
            ))
            .with_key(key)
        })?;
        self.insert(key, "Double", Value::Number(number))
    }

    fn set_bool(&mut self, key: &str, value: bool) -> JsonResult<()> {
        self.insert(key, "Boolean", Value::Bool(value))
    }

    fn set_string(&mut self, key: &str, value: &str) -> JsonResult<()> {
        let mut owned = String::new();
        owned.try_reserve_exact(value.len()).map_err(|e| {
            SerializationError::allocation(format!("Failed to set String: {}", e)).with_key(key)
        })?;
        owned.push_str(value);
        self.insert(key, "String", Value::String(owned))
    }

    fn set_object(&mut self, key: &str, value: &dyn JsonWrapper) -> JsonResult<()> {
        let inner = match value.as_any().downcast_ref::<Self>() {
            Some(inner) => inner,
            None => {
                warn!("Rejected inner object of foreign adapter at key {:?}", key);
                return Err(SerializationError::incompatible_object().with_key(key));
            }
        };
        let copy = inner.value.clone();
        self.insert(key, "Inner Object", copy)
    }

    fn set_null(&mut self, key: &str) -> JsonResult<()> {
        self.insert(key, "null", Value::Null)
    }

    fn get_int(&self, key: &str) -> JsonResult<i64> {
        self.coerced(key, "Integer", coerce::to_int)
    }

    fn get_unsigned(&self, key: &str) -> JsonResult<u64> {
        self.coerced(key, "Unsigned Integer", coerce::to_unsigned)
    }

    fn get_double(&self, key: &str) -> JsonResult<f64> {
        self.coerced(key, "Double", coerce::to_double)
    }

    fn get_bool(&self, key: &str) -> JsonResult<bool> {
        self.coerced(key, "Boolean", coerce::to_bool)
    }

    fn get_string(&self, key: &str) -> JsonResult<String> {
        self.coerced(key, "String", |v| coerce::to_str(v).map(str::to_owned))
    }

    fn get_object(&self, key: &str) -> JsonResult<Box<dyn JsonWrapper>> {
        let stored = self.lookup(key, "Inner Object")?;
        Ok(Box::new(self.sibling(stored.clone())))
    }

    fn is_null(&self, key: &str) -> JsonResult<bool> {
        self.value
            .as_object()
            .and_then(|map| map.get(key))
            .map(Value::is_null)
            .ok_or_else(|| {
                SerializationError::new(
                    ErrorReason::MissingKey,
                    "Failed to check nullability of the value.",
                )
                .with_key(key)
            })
    }

    fn has_key(&self, key: &str) -> bool {
        self.value
            .as_object()
            .map_or(false, |map| map.contains_key(key))
    }

    fn get_empty_object(&self) -> JsonResult<Box<dyn JsonWrapper>> {
        Ok(Box::new(self.sibling(Value::Object(Map::new()))))
    }

    fn kind(&self) -> DocumentKind {
        kind_of(&self.value)
    }

    fn parse_bytes(&mut self, input: &[u8]) -> JsonResult<()> {
        let limits = &self.config.limits;
        let preview_len = self.config.log_preview_len;

        if input.len() > limits.max_input_size {
            warn!(
                "Rejected JSON input of {} bytes (limit {})",
                input.len(),
                limits.max_input_size
            );
            return Err(SerializationError::limit_exceeded(format!(
                "Failed to parse JSON: input is {} bytes, limit is {}",
                input.len(),
                limits.max_input_size
            )));
        }

        let text = std::str::from_utf8(input).map_err(|e| {
            warn!(
                "Rejected JSON input with invalid UTF-8 at byte {}: {}",
                e.valid_up_to(),
                preview(input, preview_len)
            );
            SerializationError::encoding(format!(
                "Failed to parse JSON: invalid UTF-8 sequence at byte {}",
                e.valid_up_to()
            ))
        })?;

        let value: Value = serde_json::from_str(text).map_err(|e| {
            let err = translate_parse_error(&e);
            warn!(
                "JSON parse failed at line {} column {}: {} (input {})",
                e.line(),
                e.column(),
                e,
                preview(input, preview_len)
            );
            err
        })?;

        check_structure(&value, limits).map_err(|e| {
            warn!("{}", e.message);
            e
        })?;

        debug!(
            "Parsed JSON document: {} bytes, top level {}",
            input.len(),
            kind_of(&value)
        );
        self.value = value;
        Ok(())
    }

    fn to_json_string(&self) -> JsonResult<String> {
        let out = to_canonical_string(&self.value).map_err(|e| {
            warn!("JSON serialization failed: {}", e);
            SerializationError::unrepresentable(format!(
                "Failed to convert JSON object to String. Verify if it's UTF-8 encoded: {}",
                e
            ))
        })?;
        debug!("Serialized {} document: {} bytes", self.kind(), out.len());
        Ok(out)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn kind_of(value: &Value) -> DocumentKind {
    match value {
        Value::Null => DocumentKind::Null,
        Value::Object(_) => DocumentKind::Object,
        Value::Array(_) => DocumentKind::Array,
        Value::Bool(_) | Value::Number(_) | Value::String(_) => DocumentKind::Scalar,
    }
}

fn value_ref(value: &Value) -> ValueRef<'_> {
    match value {
        Value::Null => ValueRef::Null,
        Value::Bool(b) => ValueRef::Bool(*b),
        Value::Number(n) => n
            .as_u64()
            .map(ValueRef::Unsigned)
            .or_else(|| n.as_i64().map(ValueRef::Int))
            .or_else(|| n.as_f64().map(ValueRef::Float))
            .unwrap_or(ValueRef::Null),
        Value::String(s) => ValueRef::Str(s),
        Value::Object(_) => ValueRef::Object,
        Value::Array(_) => ValueRef::Array,
    }
}

/// Map a serde_json failure onto the wrapper error
fn translate_parse_error(err: &serde_json::Error) -> SerializationError {
    let detail = err.to_string();
    let reason = if is_depth_error(&detail) {
        ErrorReason::LimitExceeded
    } else if is_encoding_error(&detail) {
        ErrorReason::Encoding
    } else {
        ErrorReason::Syntax
    };
    SerializationError::new(reason, format!("Failed to parse JSON: {}", detail))
}

// serde_json classifies all of these as `Category::Syntax`, so the reason is
// read from the Display text. Markers cover its messages
// "invalid escape", "invalid unicode code point",
// "lone leading surrogate in hex escape" and
// "unexpected end of hex escape".
fn is_encoding_error(detail: &str) -> bool {
    ["unicode", "surrogate", "escape"]
        .iter()
        .any(|marker| detail.contains(marker))
}

// serde_json's "recursion limit exceeded", raised at depth 128
fn is_depth_error(detail: &str) -> bool {
    detail.contains("recursion limit exceeded")
}

/// Truncated, debug-quoted view of raw input for log lines
fn preview(input: &[u8], max_len: usize) -> String {
    if input.len() <= max_len {
        format!("{:?}", String::from_utf8_lossy(input))
    } else {
        format!(
            "{:?}... ({} bytes total)",
            String::from_utf8_lossy(&input[..max_len]),
            input.len()
        )
    }
}
