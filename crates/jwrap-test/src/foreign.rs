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

//! A wrapper that belongs to no real adapter family.
//!
//! Passed to `set_object` of a real adapter it must be rejected. It holds
//! no data: every setter, parse and `get_empty_object` fails, and every
//! getter reports a missing key.

use jwrap_core::{DocumentKind, JsonResult, JsonWrapper, SerializationError};
use std::any::Any;

/// Inert wrapper used to exercise adapter compatibility checks.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForeignWrapper;

fn unsupported<T>(operation: &str) -> JsonResult<T> {
    Err(SerializationError::not_an_object(format!(
        "ForeignWrapper does not support {}",
        operation
    )))
}

impl JsonWrapper for ForeignWrapper {
    fn set_int(&mut self, _key: &str, _value: i64) -> JsonResult<()> {
        unsupported("set_int")
    }

    fn set_unsigned(&mut self, _key: &str, _value: u64) -> JsonResult<()> {
        unsupported("set_unsigned")
    }

    fn set_double(&mut self, _key: &str, _value: f64) -> JsonResult<()> {
        unsupported("set_double")
    }

    fn set_bool(&mut self, _key: &str, _value: bool) -> JsonResult<()> {
        unsupported("set_bool")
    }

    fn set_string(&mut self, _key: &str, _value: &str) -> JsonResult<()> {
        unsupported("set_string")
    }

    fn set_object(&mut self, _key: &str, _value: &dyn JsonWrapper) -> JsonResult<()> {
        unsupported("set_object")
    }

    fn set_null(&mut self, _key: &str) -> JsonResult<()> {
        unsupported("set_null")
    }

    fn get_int(&self, key: &str) -> JsonResult<i64> {
        Err(SerializationError::missing_key(key))
    }

    fn get_unsigned(&self, key: &str) -> JsonResult<u64> {
        Err(SerializationError::missing_key(key))
    }

    fn get_double(&self, key: &str) -> JsonResult<f64> {
        Err(SerializationError::missing_key(key))
    }

    fn get_bool(&self, key: &str) -> JsonResult<bool> {
        Err(SerializationError::missing_key(key))
    }

    fn get_string(&self, key: &str) -> JsonResult<String> {
        Err(SerializationError::missing_key(key))
    }

    fn get_object(&self, key: &str) -> JsonResult<Box<dyn JsonWrapper>> {
        Err(SerializationError::missing_key(key))
    }

    fn is_null(&self, key: &str) -> JsonResult<bool> {
        Err(SerializationError::missing_key(key))
    }

    fn has_key(&self, _key: &str) -> bool {
        false
    }

    fn get_empty_object(&self) -> JsonResult<Box<dyn JsonWrapper>> {
        unsupported("get_empty_object")
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::Null
    }

    fn parse_bytes(&mut self, _input: &[u8]) -> JsonResult<()> {
        unsupported("parse")
    }

    fn to_json_string(&self) -> JsonResult<String> {
        Ok("null".to_string())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_is_inert() {
        let mut foreign = ForeignWrapper;
        assert!(foreign.set_int("a", 1).is_err());
        assert!(foreign.parse("{}").is_err());
        assert!(!foreign.has_key("a"));
        assert_eq!(foreign.to_json_string().unwrap(), "null");
    }

    #[test]
    fn test_foreign_has_no_empty_object() {
        let err = ForeignWrapper.get_empty_object().unwrap_err();
        assert_eq!(err.reason, jwrap_core::ErrorReason::NotAnObject);
        assert!(err.message.contains("get_empty_object"));
    }
}
