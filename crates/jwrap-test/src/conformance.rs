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

//! Conformance checks every `JsonWrapper` adapter must pass.
//!
//! Each check is generic over the adapter type, builds its own documents
//! with `W::default()`, drives them through `&mut dyn JsonWrapper`, and
//! panics on the first violation. Use [`conformance_suite!`] to turn them
//! into one `#[test]` each, or [`run_all`] to run them in sequence.
//!
//! [`conformance_suite!`]: crate::conformance_suite

use crate::fixtures;
use crate::foreign::ForeignWrapper;
use jwrap_core::{DocumentKind, ErrorReason, JsonResult, JsonWrapper};

/// Named list of checks instantiated for one adapter.
pub type CheckList = Vec<(&'static str, fn())>;

fn serialized(json: &dyn JsonWrapper) -> String {
    json.to_json_string()
        .unwrap_or_else(|e| panic!("to_json_string failed: {}", e))
}

fn assert_fails<T: std::fmt::Debug>(result: JsonResult<T>, reason: ErrorReason, what: &str) {
    match result {
        Ok(value) => panic!("{} should fail, got {:?}", what, value),
        Err(err) => assert_eq!(err.reason, reason, "{}: unexpected error {}", what, err),
    }
}

// =============================================================================
// Default State
// =============================================================================

/// A fresh document serializes as `null`.
pub fn fresh_document_is_null<W: JsonWrapper + Default>() {
    let doc = W::default();
    let json: &dyn JsonWrapper = &doc;

    assert_eq!(json.kind(), DocumentKind::Null);
    assert_eq!(serialized(json), "null");
}

/// `get_empty_object` yields `{}`, independent of the producing document.
pub fn empty_object_is_braces<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    let mut empty = json.get_empty_object().unwrap();
    assert_eq!(empty.kind(), DocumentKind::Object);
    assert_eq!(serialized(empty.as_ref()), "{}");
    assert_eq!(serialized(json), "null");

    empty.set_int("k", 1).unwrap();
    assert_eq!(serialized(json), "null");

    json.set_int("parent", 2).unwrap();
    assert_eq!(serialized(empty.as_ref()), r#"{"k":1}"#);
}

// =============================================================================
// Scalar Values
// =============================================================================

pub fn integer_value<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    json.set_int("Integer", 10).unwrap();

    assert_eq!(serialized(json), r#"{"Integer":10}"#);
    assert_eq!(json.get_int("Integer").unwrap(), 10);
    assert!(json.has_key("Integer"));
}

pub fn integer_extremes<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    json.set_int("min", i64::MIN).unwrap();
    json.set_int("max", i64::MAX).unwrap();

    assert_eq!(
        serialized(json),
        r#"{"max":9223372036854775807,"min":-9223372036854775808}"#
    );
    assert_eq!(json.get_int("min").unwrap(), i64::MIN);
    assert_eq!(json.get_int("max").unwrap(), i64::MAX);
}

pub fn unsigned_value<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    json.set_unsigned("Unsigned", u64::MAX).unwrap();

    assert_eq!(serialized(json), r#"{"Unsigned":18446744073709551615}"#);
    assert_eq!(json.get_unsigned("Unsigned").unwrap(), u64::MAX);
    assert!(json.has_key("Unsigned"));
}

/// Signed `-1` read back as unsigned reinterprets to `u64::MAX`.
pub fn negative_one_as_unsigned_is_max<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    json.set_int("Unsigned", -1).unwrap();

    assert_eq!(json.get_unsigned("Unsigned").unwrap(), u64::MAX);
    assert_eq!(json.get_int("Unsigned").unwrap(), -1);
}

pub fn double_value<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    json.set_double("Double", 3.14).unwrap();

    assert_eq!(serialized(json), r#"{"Double":3.14}"#);
    assert_eq!(json.get_double("Double").unwrap(), 3.14);
    assert!(json.has_key("Double"));
}

pub fn boolean_value<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    json.set_bool("FalseKey", false).unwrap();
    json.set_bool("TrueKey", true).unwrap();

    assert_eq!(serialized(json), r#"{"FalseKey":false,"TrueKey":true}"#);
    assert!(json.has_key("TrueKey"));
    assert!(json.get_bool("TrueKey").unwrap());
    assert!(!json.get_bool("FalseKey").unwrap());
    assert!(json.has_key("FalseKey"));
}

pub fn null_value<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    json.set_null("Null").unwrap();
    json.set_int("NotNull", 0).unwrap();

    assert_eq!(serialized(json), r#"{"NotNull":0,"Null":null}"#);
    assert!(json.is_null("Null").unwrap());
    assert!(!json.is_null("NotNull").unwrap());
    assert!(json.has_key("Null"));
}

pub fn string_value<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    json.set_string("String", "string_value").unwrap();

    assert_eq!(serialized(json), r#"{"String":"string_value"}"#);
    assert_eq!(json.get_string("String").unwrap(), "string_value");
    assert!(json.has_key("String"));
}

/// Quotes, backslashes and control characters are escaped; other
/// Unicode is written as-is.
pub fn string_escaping<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    let value = "say \"hi\"\\\n\tüñí 🎉";
    json.set_string("s", value).unwrap();

    assert_eq!(
        serialized(json),
        "{\"s\":\"say \\\"hi\\\"\\\\\\n\\tüñí 🎉\"}"
    );
    assert_eq!(json.get_string("s").unwrap(), value);
}

// =============================================================================
// Overwrites and Ordering
// =============================================================================

/// Setting a key replaces the previous value, including its type.
pub fn overwrite_changes_type<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    json.set_int("key", 1).unwrap();
    json.set_string("key", "now a string").unwrap();

    assert_eq!(serialized(json), r#"{"key":"now a string"}"#);
    assert_fails(json.get_int("key"), ErrorReason::TypeMismatch, "get_int");

    json.set_null("key").unwrap();
    assert!(json.is_null("key").unwrap());
}

/// Output order is lexicographic regardless of insertion order.
pub fn keys_sorted_regardless_of_insertion<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    json.set_int("b", 1).unwrap();
    json.set_int("a", 2).unwrap();
    json.set_bool("C", true).unwrap();
    json.set_null("aa").unwrap();

    assert_eq!(serialized(json), r#"{"C":true,"a":2,"aa":null,"b":1}"#);

    let mut parsed = W::default();
    parsed.parse(r#"{"b":1,"a":2}"#).unwrap();
    assert_eq!(serialized(&parsed), r#"{"a":2,"b":1}"#);
}

// =============================================================================
// Inner Objects
// =============================================================================

pub fn inner_object<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    let mut inner = W::default();
    inner.set_string("InnerKey", "InnerValue").unwrap();
    json.set_object("InnerObject", &inner).unwrap();

    assert_eq!(
        serialized(json),
        r#"{"InnerObject":{"InnerKey":"InnerValue"}}"#
    );
    assert!(json.has_key("InnerObject"));

    let inner_copy = json.get_object("InnerObject").unwrap();
    assert_eq!(serialized(inner_copy.as_ref()), r#"{"InnerKey":"InnerValue"}"#);
    assert_eq!(inner_copy.get_string("InnerKey").unwrap(), "InnerValue");
    assert!(inner_copy.has_key("InnerKey"));
}

/// The stored copy does not follow later changes to the argument.
pub fn inner_object_is_copied_in<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    let mut inner = W::default();
    inner.set_int("n", 1).unwrap();
    json.set_object("inner", &inner).unwrap();
    let at_set_time = serialized(&inner);

    inner.set_int("n", 2).unwrap();
    inner.set_bool("extra", true).unwrap();

    let stored = json.get_object("inner").unwrap();
    assert_eq!(serialized(stored.as_ref()), at_set_time);
    assert_eq!(serialized(json), r#"{"inner":{"n":1}}"#);
}

/// A returned copy and its parent evolve independently.
pub fn inner_object_is_copied_out<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    let mut inner = W::default();
    inner.set_int("n", 1).unwrap();
    json.set_object("inner", &inner).unwrap();

    let mut copy = json.get_object("inner").unwrap();
    copy.set_int("n", 99).unwrap();
    assert_eq!(serialized(json), r#"{"inner":{"n":1}}"#);

    let second = json.get_object("inner").unwrap();
    json.set_int("inner", 5).unwrap();
    assert_eq!(serialized(second.as_ref()), r#"{"n":1}"#);
    assert_eq!(serialized(copy.as_ref()), r#"{"n":99}"#);
}

/// `set_object` followed by `get_object` round-trips documents of any kind.
pub fn inner_object_of_any_kind<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    let fresh = W::default();
    json.set_object("fresh", &fresh).unwrap();
    assert!(json.is_null("fresh").unwrap());

    for (name, text) in fixtures::non_object_documents() {
        let mut inner = W::default();
        inner.parse(text).unwrap();
        json.set_object(name, &inner).unwrap();

        let copy = json.get_object(name).unwrap();
        assert_eq!(serialized(copy.as_ref()), text, "inner document {}", name);
    }
}

/// Nested objects produced by another adapter are rejected.
pub fn set_object_rejects_foreign_adapter<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    assert_fails(
        json.set_object("inner", &ForeignWrapper),
        ErrorReason::IncompatibleObject,
        "set_object with foreign adapter",
    );
    assert!(!json.has_key("inner"));
    assert_eq!(serialized(json), "null");
}

// =============================================================================
// Absent Keys and Type Mismatches
// =============================================================================

/// Every getter fails on an absent key and `has_key` reports absence.
pub fn absent_keys_fail<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    for populated in [false, true] {
        if populated {
            json.set_int("present", 1).unwrap();
        }

        assert_fails(json.get_int("IntegerKey"), ErrorReason::MissingKey, "get_int");
        assert_fails(json.get_unsigned("UnsignedKey"), ErrorReason::MissingKey, "get_unsigned");
        assert_fails(json.get_double("DoubleKey"), ErrorReason::MissingKey, "get_double");
        assert_fails(json.get_bool("BooleanKey"), ErrorReason::MissingKey, "get_bool");
        assert_fails(json.get_string("StringKey"), ErrorReason::MissingKey, "get_string");
        assert_fails(json.get_object("InnerObjectKey"), ErrorReason::MissingKey, "get_object");
        assert_fails(json.is_null("NullKey"), ErrorReason::MissingKey, "is_null");

        for key in [
            "IntegerKey",
            "UnsignedKey",
            "DoubleKey",
            "BooleanKey",
            "StringKey",
            "InnerObjectKey",
            "NullKey",
        ] {
            assert!(!json.has_key(key), "{} should be absent", key);
        }
    }
}

pub fn type_mismatches_fail<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    json.set_string("string", "10").unwrap();
    json.set_int("int", 1).unwrap();
    json.set_null("null").unwrap();
    let empty = json.get_empty_object().unwrap();
    json.set_object("object", empty.as_ref()).unwrap();

    assert_fails(json.get_int("string"), ErrorReason::TypeMismatch, "get_int on string");
    assert_fails(json.get_unsigned("string"), ErrorReason::TypeMismatch, "get_unsigned on string");
    assert_fails(json.get_double("string"), ErrorReason::TypeMismatch, "get_double on string");
    assert_fails(json.get_bool("int"), ErrorReason::TypeMismatch, "get_bool on int");
    assert_fails(json.get_string("int"), ErrorReason::TypeMismatch, "get_string on int");
    assert_fails(json.get_int("null"), ErrorReason::TypeMismatch, "get_int on null");
    assert_fails(json.get_string("null"), ErrorReason::TypeMismatch, "get_string on null");
    assert_fails(json.get_int("object"), ErrorReason::TypeMismatch, "get_int on object");
}

/// Numeric getters follow the shared coercion rules.
pub fn numeric_coercions<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    json.set_int("int", -3).unwrap();
    json.set_double("double", -3.75).unwrap();
    json.set_bool("bool", true).unwrap();
    json.set_unsigned("big", u64::MAX).unwrap();

    assert_eq!(json.get_double("int").unwrap(), -3.0);
    assert_eq!(json.get_int("double").unwrap(), -3);
    assert_eq!(json.get_int("bool").unwrap(), 1);
    assert_eq!(json.get_unsigned("bool").unwrap(), 1);
    assert_eq!(json.get_double("bool").unwrap(), 1.0);
    assert_eq!(json.get_int("big").unwrap(), -1);
    assert_eq!(json.get_double("big").unwrap(), u64::MAX as f64);
}

// =============================================================================
// Parsing
// =============================================================================

pub fn parse_missing_closing_brace_fails<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    assert_fails(
        json.parse(r#"{"key":"value""#),
        ErrorReason::Syntax,
        "parse without closing brace",
    );
}

pub fn parse_invalid_json_fails<W: JsonWrapper + Default>() {
    for (name, text) in fixtures::invalid_json_samples() {
        let mut doc = W::default();
        let json: &mut dyn JsonWrapper = &mut doc;

        assert!(json.parse(text).is_err(), "{} should not parse", name);
        assert_eq!(serialized(json), "null", "{} changed the document", name);
    }
}

pub fn parse_invalid_utf8_fails<W: JsonWrapper + Default>() {
    for (name, bytes) in fixtures::invalid_utf8_samples() {
        let mut doc = W::default();
        let json: &mut dyn JsonWrapper = &mut doc;

        assert_fails(json.parse_bytes(&bytes), ErrorReason::Encoding, name);
    }
}

pub fn parse_invalid_escape_fails<W: JsonWrapper + Default>() {
    for (name, text) in fixtures::invalid_escape_samples() {
        let mut doc = W::default();
        let json: &mut dyn JsonWrapper = &mut doc;

        assert_fails(json.parse(text), ErrorReason::Encoding, name);
    }
}

/// Parse replaces content wholesale and leaves it intact on failure.
pub fn parse_replaces_content<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    json.set_int("old", 1).unwrap();
    json.parse(r#"{"new":2}"#).unwrap();
    assert!(!json.has_key("old"));
    assert_eq!(json.get_int("new").unwrap(), 2);

    assert!(json.parse("{").is_err());
    assert_eq!(serialized(json), r#"{"new":2}"#);

    json.parse("null").unwrap();
    assert_eq!(json.kind(), DocumentKind::Null);
    json.set_int("again", 3).unwrap();
    assert_eq!(serialized(json), r#"{"again":3}"#);
}

/// Documents this interface cannot build survive parse and serialize.
pub fn non_object_documents_round_trip<W: JsonWrapper + Default>() {
    for (name, text) in fixtures::non_object_documents() {
        let mut doc = W::default();
        let json: &mut dyn JsonWrapper = &mut doc;

        json.parse(text).unwrap();
        assert_eq!(serialized(json), text, "round trip of {}", name);
        assert!(!json.has_key("0"), "{} reported a key", name);
        assert_fails(json.get_int("0"), ErrorReason::MissingKey, name);
    }
}

pub fn parsed_document_kinds<W: JsonWrapper + Default>() {
    let cases = [
        ("null", DocumentKind::Null),
        ("{}", DocumentKind::Object),
        ("[]", DocumentKind::Array),
        ("1", DocumentKind::Scalar),
        (r#""s""#, DocumentKind::Scalar),
        ("false", DocumentKind::Scalar),
    ];
    for (text, kind) in cases {
        let mut doc = W::default();
        doc.parse(text).unwrap();
        assert_eq!(doc.kind(), kind, "kind of {}", text);
    }
}

/// Setters refuse to turn a parsed scalar or array into an object.
pub fn set_on_non_object_fails<W: JsonWrapper + Default>() {
    for text in ["7", "[1]", r#""s""#] {
        let mut doc = W::default();
        let json: &mut dyn JsonWrapper = &mut doc;

        json.parse(text).unwrap();
        assert_fails(json.set_int("k", 1), ErrorReason::NotAnObject, text);
        assert_eq!(serialized(json), text);
    }
}

// =============================================================================
// End to End
// =============================================================================

pub fn sample_document_round_trip<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    let json: &mut dyn JsonWrapper = &mut doc;

    json.parse(fixtures::SAMPLE_DOCUMENT).unwrap();

    let out = serialized(json);
    assert_eq!(out, fixtures::SAMPLE_CANONICAL);
    assert!(out.contains(r#""list":[1,0,2]"#));

    let mut last = 0;
    for key in fixtures::SAMPLE_KEY_ORDER {
        let position = out
            .find(&format!("\"{}\":", key))
            .unwrap_or_else(|| panic!("{} missing from output", key));
        assert!(position >= last, "{} out of order", key);
        last = position;
    }

    assert_eq!(json.get_double("pi").unwrap(), 3.141);
    assert!(json.get_bool("happy").unwrap());
    assert_eq!(json.get_string("name").unwrap(), "json");
    assert!(json.is_null("nothing").unwrap());

    let answer = json.get_object("answer").unwrap();
    assert_eq!(answer.get_int("everything").unwrap(), 42);

    let object = json.get_object("object").unwrap();
    assert_eq!(object.get_string("currency").unwrap(), "USD");
    assert_eq!(object.get_double("value").unwrap(), 42.99);

    let list = json.get_object("list").unwrap();
    assert_eq!(list.kind(), DocumentKind::Array);
    assert_eq!(serialized(list.as_ref()), "[1,0,2]");
}

/// Output of `to_json_string` parses back to the same output.
pub fn canonical_output_is_stable<W: JsonWrapper + Default>() {
    let mut doc = W::default();
    doc.set_string("z", "last").unwrap();
    doc.set_double("m", 0.5).unwrap();
    doc.set_int("a", -1).unwrap();
    let first = serialized(&doc);

    let mut reparsed = W::default();
    reparsed.parse(&first).unwrap();
    assert_eq!(serialized(&reparsed), first);
}

// =============================================================================
// Registry
// =============================================================================

/// All checks, instantiated for `W`.
pub fn checks<W: JsonWrapper + Default>() -> CheckList {
    vec![
        ("fresh_document_is_null", fresh_document_is_null::<W> as fn()),
        ("empty_object_is_braces", empty_object_is_braces::<W>),
        ("integer_value", integer_value::<W>),
        ("integer_extremes", integer_extremes::<W>),
        ("unsigned_value", unsigned_value::<W>),
        ("negative_one_as_unsigned_is_max", negative_one_as_unsigned_is_max::<W>),
        ("double_value", double_value::<W>),
        ("boolean_value", boolean_value::<W>),
        ("null_value", null_value::<W>),
        ("string_value", string_value::<W>),
        ("string_escaping", string_escaping::<W>),
        ("overwrite_changes_type", overwrite_changes_type::<W>),
        ("keys_sorted_regardless_of_insertion", keys_sorted_regardless_of_insertion::<W>),
        ("inner_object", inner_object::<W>),
        ("inner_object_is_copied_in", inner_object_is_copied_in::<W>),
        ("inner_object_is_copied_out", inner_object_is_copied_out::<W>),
        ("inner_object_of_any_kind", inner_object_of_any_kind::<W>),
        ("set_object_rejects_foreign_adapter", set_object_rejects_foreign_adapter::<W>),
        ("absent_keys_fail", absent_keys_fail::<W>),
        ("type_mismatches_fail", type_mismatches_fail::<W>),
        ("numeric_coercions", numeric_coercions::<W>),
        ("parse_missing_closing_brace_fails", parse_missing_closing_brace_fails::<W>),
        ("parse_invalid_json_fails", parse_invalid_json_fails::<W>),
        ("parse_invalid_utf8_fails", parse_invalid_utf8_fails::<W>),
        ("parse_invalid_escape_fails", parse_invalid_escape_fails::<W>),
        ("parse_replaces_content", parse_replaces_content::<W>),
        ("non_object_documents_round_trip", non_object_documents_round_trip::<W>),
        ("parsed_document_kinds", parsed_document_kinds::<W>),
        ("set_on_non_object_fails", set_on_non_object_fails::<W>),
        ("sample_document_round_trip", sample_document_round_trip::<W>),
        ("canonical_output_is_stable", canonical_output_is_stable::<W>),
    ]
}

/// Run every check for `W`, panicking on the first failure.
pub fn run_all<W: JsonWrapper + Default>() {
    for (_name, check) in checks::<W>() {
        check();
    }
}
