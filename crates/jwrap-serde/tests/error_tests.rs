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

//! Error reporting and parse limit tests for the serde_json adapter.

use jwrap_core::{
    DocumentKind, ErrorReason, JsonWrapper, Limits, SerializationError, DEFAULT_MAX_DEPTH,
};
use jwrap_serde::{SerdeJsonConfig, SerdeJsonWrapper};

fn nested_arrays(depth: usize) -> String {
    format!("{}{}", "[".repeat(depth), "]".repeat(depth))
}

fn object_with_keys(count: usize) -> String {
    let body: Vec<String> = (0..count).map(|i| format!("\"k{}\":{}", i, i)).collect();
    format!("{{{}}}", body.join(","))
}

// ==================== Error shape ====================

#[test]
fn test_error_display_names_the_kind() {
    let doc = SerdeJsonWrapper::new();
    let err = doc.get_int("Integer").unwrap_err();
    assert_eq!(
        err.to_string(),
        "SerializationError: Failed to get Integer value: key not found (key \"Integer\")"
    );
}

#[test]
fn test_error_is_std_error() {
    fn boxed() -> Result<(), Box<dyn std::error::Error>> {
        let mut doc = SerdeJsonWrapper::new();
        doc.parse("{")?;
        Ok(())
    }
    let err = boxed().unwrap_err();
    assert!(err.to_string().starts_with("SerializationError: Failed to parse JSON"));
}

#[test]
fn test_context_is_appended() {
    let mut doc = SerdeJsonWrapper::new();
    let err = doc
        .parse("nope")
        .map_err(|e| e.with_context("loading settings"))
        .unwrap_err();
    assert_eq!(err.reason, ErrorReason::Syntax);
    assert_eq!(err.context.as_deref(), Some("loading settings"));
    assert!(err.to_string().ends_with("[loading settings]"));
}

#[test]
fn test_errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<SerializationError>();
}

#[test]
fn test_non_finite_double_is_unrepresentable() {
    let mut doc = SerdeJsonWrapper::new();
    let err = doc.set_double("nan", f64::NAN).unwrap_err();
    assert_eq!(err.reason, ErrorReason::Unrepresentable);
    assert_eq!(err.key.as_deref(), Some("nan"));
    assert_eq!(doc.to_json_string().unwrap(), "null");
}

#[test]
fn test_get_empty_object_never_fails() {
    let mut doc = SerdeJsonWrapper::new();
    doc.parse("[1]").unwrap();
    let empty = doc.get_empty_object().unwrap();
    assert_eq!(empty.to_json_string().unwrap(), "{}");
}

// ==================== Size limit ====================

#[test]
fn test_input_at_size_limit_is_accepted() {
    let text = object_with_keys(3);
    let config = SerdeJsonConfig::builder().max_input_size(text.len()).build();
    let mut doc = SerdeJsonWrapper::with_config(config);
    assert!(doc.parse(&text).is_ok());
}

#[test]
fn test_input_over_size_limit_is_rejected_before_parsing() {
    let config = SerdeJsonConfig::builder().max_input_size(8).build();
    let mut doc = SerdeJsonWrapper::with_config(config);

    // Would be a syntax error if it were parsed
    let err = doc.parse("{{{{{{{{{{").unwrap_err();
    assert_eq!(err.reason, ErrorReason::LimitExceeded);
    assert!(err.message.contains("10 bytes"));
}

// ==================== Depth limit ====================

#[test]
fn test_default_depth_accepts_moderate_nesting() {
    let mut doc = SerdeJsonWrapper::new();
    doc.parse(&nested_arrays(100)).unwrap();
    assert_eq!(doc.to_json_string().unwrap(), nested_arrays(100));
}

#[test]
fn test_default_depth_boundary() {
    let mut doc = SerdeJsonWrapper::new();
    doc.parse(&nested_arrays(DEFAULT_MAX_DEPTH)).unwrap();
    assert_eq!(doc.kind(), DocumentKind::Array);

    let mut doc = SerdeJsonWrapper::new();
    let err = doc.parse(&nested_arrays(DEFAULT_MAX_DEPTH + 1)).unwrap_err();
    assert_eq!(err.reason, ErrorReason::LimitExceeded);
    assert_eq!(doc.to_json_string().unwrap(), "null");
}

#[test]
fn test_default_depth_boundary_for_objects() {
    let nested = |depth: usize| format!("{}1{}", r#"{"a":"#.repeat(depth), "}".repeat(depth));

    let mut doc = SerdeJsonWrapper::new();
    doc.parse(&nested(DEFAULT_MAX_DEPTH)).unwrap();

    let err = doc.parse(&nested(DEFAULT_MAX_DEPTH + 1)).unwrap_err();
    assert_eq!(err.reason, ErrorReason::LimitExceeded);
}

#[test]
fn test_deep_nesting_is_rejected() {
    let mut doc = SerdeJsonWrapper::new();
    let err = doc.parse(&nested_arrays(500)).unwrap_err();
    assert_eq!(err.reason, ErrorReason::LimitExceeded);
    assert_eq!(doc.to_json_string().unwrap(), "null");
}

#[test]
fn test_depth_above_default_is_capped() {
    let config = SerdeJsonConfig::builder().max_depth(200).build();
    let mut doc = SerdeJsonWrapper::with_config(config);

    let err = doc.parse(&nested_arrays(150)).unwrap_err();
    assert_eq!(err.reason, ErrorReason::LimitExceeded);

    let config = SerdeJsonConfig::builder().unlimited().build();
    let mut doc = SerdeJsonWrapper::with_config(config);
    let err = doc.parse(&nested_arrays(DEFAULT_MAX_DEPTH + 1)).unwrap_err();
    assert_eq!(err.reason, ErrorReason::LimitExceeded);
}

#[test]
fn test_custom_depth_limit() {
    let config = SerdeJsonConfig::builder().max_depth(3).build();
    let mut doc = SerdeJsonWrapper::with_config(config);

    assert!(doc.parse(&nested_arrays(3)).is_ok());
    let err = doc.parse(&nested_arrays(4)).unwrap_err();
    assert_eq!(err.reason, ErrorReason::LimitExceeded);
    assert_eq!(doc.to_json_string().unwrap(), "[[[]]]");
}

#[test]
fn test_custom_depth_boundary_below_engine_cap() {
    let config = SerdeJsonConfig::builder().max_depth(100).build();
    let mut doc = SerdeJsonWrapper::with_config(config);

    assert!(doc.parse(&nested_arrays(100)).is_ok());
    let err = doc.parse(&nested_arrays(101)).unwrap_err();
    assert_eq!(err.reason, ErrorReason::LimitExceeded);
    assert!(err.message.contains("depth exceeds limit of 100"));
}

// ==================== Object key limit ====================

#[test]
fn test_object_key_limit() {
    let config = SerdeJsonConfig::builder().max_object_keys(5).build();
    let mut doc = SerdeJsonWrapper::with_config(config);

    assert!(doc.parse(&object_with_keys(5)).is_ok());
    let err = doc.parse(&object_with_keys(6)).unwrap_err();
    assert_eq!(err.reason, ErrorReason::LimitExceeded);
}

#[test]
fn test_setters_ignore_limits() {
    let config = SerdeJsonConfig::builder().max_object_keys(2).build();
    let mut doc = SerdeJsonWrapper::with_config(config);
    for i in 0..10 {
        doc.set_int(&format!("k{}", i), i).unwrap();
    }
    assert!(doc.has_key("k9"));
}

#[test]
fn test_unlimited_config() {
    let config = SerdeJsonConfig::builder().unlimited().build();
    assert_eq!(config.limits, Limits::unlimited());

    let mut doc = SerdeJsonWrapper::with_config(config);
    assert!(doc.parse(&object_with_keys(1_000)).is_ok());
}
