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

//! Tests for the conformance registry itself, run against the serde_json adapter.

use jwrap_core::{JsonWrapper, SerializationError};
use jwrap_serde::SerdeJsonWrapper;
use jwrap_test::{checks, fixtures, run_all, ForeignWrapper};
use std::collections::HashSet;

#[test]
fn test_check_names_are_unique() {
    let list = checks::<SerdeJsonWrapper>();
    let names: HashSet<&str> = list.iter().map(|(name, _)| *name).collect();
    assert_eq!(names.len(), list.len());
}

#[test]
fn test_run_all_passes_for_serde_adapter() {
    run_all::<SerdeJsonWrapper>();
}

#[test]
fn test_checks_run_individually() {
    for (name, check) in checks::<SerdeJsonWrapper>() {
        let outcome = std::panic::catch_unwind(check);
        assert!(outcome.is_ok(), "check {} failed", name);
    }
}

#[test]
fn test_foreign_wrapper_rejected_by_serde_adapter() {
    let mut doc = SerdeJsonWrapper::new();
    let err: SerializationError = doc.set_object("x", &ForeignWrapper).unwrap_err();
    assert_eq!(err.message, "Invalid JSON object to set.");
    assert_eq!(err.key.as_deref(), Some("x"));
}

#[test]
fn test_sample_document_parses() {
    let mut doc = SerdeJsonWrapper::new();
    doc.parse(fixtures::SAMPLE_DOCUMENT).unwrap();
    assert_eq!(doc.to_json_string().unwrap(), fixtures::SAMPLE_CANONICAL);
}

// The suite must also pass when generated through the macro.
mod generated {
    jwrap_test::conformance_suite!(jwrap_serde::SerdeJsonWrapper);
}
