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

//! Integration tests for the facade: trait-object usage end to end.

use jwrap::{
    new_document, new_document_with_config, DocumentKind, ErrorReason, JsonResultExt,
    JsonWrapper, SerdeJsonConfig, SerializationError,
};
use jwrap_test::fixtures;
use proptest::prelude::*;

/// Builds the sample document key by key, the way application code would.
fn build_sample() -> Result<Box<dyn JsonWrapper>, SerializationError> {
    let mut doc = new_document();
    doc.set_double("pi", 3.141)?;
    doc.set_bool("happy", true)?;
    doc.set_string("name", "json")?;
    doc.set_null("nothing")?;

    let mut answer = doc.get_empty_object()?;
    answer.set_int("everything", 42)?;
    doc.set_object("answer", &*answer)?;

    let mut list = new_document();
    list.parse("[1,0,2]").context("building list")?;
    doc.set_object("list", &*list)?;

    let mut object = doc.get_empty_object()?;
    object.set_string("currency", "USD")?;
    object.set_double("value", 42.99)?;
    doc.set_object("object", &*object)?;

    Ok(doc)
}

// ==================== Conformance ====================

mod conformance {
    jwrap_test::conformance_suite!(jwrap::DefaultWrapper);
}

// ==================== End to end ====================

#[test]
fn test_built_sample_matches_parsed_sample() {
    let built = build_sample().unwrap();

    let mut parsed = new_document();
    parsed.parse(fixtures::SAMPLE_DOCUMENT).unwrap();

    assert_eq!(built.to_json_string().unwrap(), fixtures::SAMPLE_CANONICAL);
    assert_eq!(
        built.to_json_string().unwrap(),
        parsed.to_json_string().unwrap()
    );
}

#[test]
fn test_documents_are_send() {
    let doc = build_sample().unwrap();
    let handle = std::thread::spawn(move || doc.to_json_string().unwrap());
    assert_eq!(handle.join().unwrap(), fixtures::SAMPLE_CANONICAL);
}

#[test]
fn test_documents_from_different_calls_share_adapter() {
    let mut outer = new_document();
    let inner = new_document_with_config(SerdeJsonConfig::builder().max_depth(4).build());
    outer.set_object("inner", &*inner).unwrap();
    assert!(outer.is_null("inner").unwrap());
}

#[test]
fn test_nested_array_is_opaque() {
    let doc = build_sample().unwrap();
    let list = doc.get_object("list").unwrap();

    assert_eq!(list.kind(), DocumentKind::Array);
    assert!(!list.has_key("0"));
    assert_eq!(list.get_int("0").unwrap_err().reason, ErrorReason::MissingKey);
}

// ==================== Error context ====================

#[test]
fn test_context_travels_with_question_mark() {
    fn read_port(text: &str) -> Result<u64, SerializationError> {
        let mut doc = new_document();
        doc.parse(text).context("parsing server config")?;
        let server = doc.get_object("server").context("reading [server]")?;
        server.get_unsigned("port").context("reading port")
    }

    assert_eq!(read_port(r#"{"server":{"port":8080}}"#).unwrap(), 8080);

    let err = read_port(r#"{"server":{}}"#).unwrap_err();
    assert_eq!(err.reason, ErrorReason::MissingKey);
    assert_eq!(err.context.as_deref(), Some("reading port"));

    let err = read_port("{").unwrap_err();
    assert_eq!(err.reason, ErrorReason::Syntax);
    assert!(err.to_string().contains("[parsing server config]"));
}

// ==================== Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_boxed_documents_round_trip_text(
        entries in prop::collection::btree_map("[a-z]{1,8}", "\\PC{0,12}", 0..8)
    ) {
        let mut doc = new_document();
        for (key, value) in &entries {
            doc.set_string(key, value).unwrap();
        }

        let mut copy = new_document();
        copy.parse(&doc.to_json_string().unwrap()).unwrap();
        for (key, value) in &entries {
            prop_assert_eq!(copy.get_string(key).unwrap(), value.clone());
        }
    }
}
