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

//! Shared fixtures and the conformance suite for JWRAP adapters.
//!
//! Every adapter of the `JsonWrapper` contract must pass the same
//! behavioural checks. This crate holds them so that adapters cannot drift
//! apart:
//!
//! - [`fixtures`]: canonical JSON inputs, valid and invalid
//! - [`conformance`]: generic checks, one function per behaviour
//! - [`ForeignWrapper`]: a wrapper from no real adapter family
//!
//! # Quick Start
//!
//! ```rust,ignore
//! // tests/conformance.rs of an adapter crate
//! jwrap_test::conformance_suite!(my_adapter::MyWrapper);
//! ```
//!
//! Or run the whole list by hand:
//!
//! ```rust,ignore
//! for (name, check) in jwrap_test::conformance::checks::<MyWrapper>() {
//!     check();
//! }
//! ```

pub mod conformance;
pub mod fixtures;
mod foreign;

pub use conformance::{checks, run_all, CheckList};
pub use foreign::ForeignWrapper;

/// Generate one `#[test]` per conformance check for an adapter type.
///
/// The type must implement `JsonWrapper + Default`.
#[macro_export]
macro_rules! conformance_suite {
    (@tests $wrapper:ty; $($check:ident),+ $(,)?) => {
        $(
            #[test]
            fn $check() {
                $crate::conformance::$check::<$wrapper>();
            }
        )+
    };
    ($wrapper:ty) => {
        $crate::conformance_suite!(@tests $wrapper;
            fresh_document_is_null,
            empty_object_is_braces,
            integer_value,
            integer_extremes,
            unsigned_value,
            negative_one_as_unsigned_is_max,
            double_value,
            boolean_value,
            null_value,
            string_value,
            string_escaping,
            overwrite_changes_type,
            keys_sorted_regardless_of_insertion,
            inner_object,
            inner_object_is_copied_in,
            inner_object_is_copied_out,
            inner_object_of_any_kind,
            set_object_rejects_foreign_adapter,
            absent_keys_fail,
            type_mismatches_fail,
            numeric_coercions,
            parse_missing_closing_brace_fails,
            parse_invalid_json_fails,
            parse_invalid_utf8_fails,
            parse_invalid_escape_fails,
            parse_replaces_content,
            non_object_documents_round_trip,
            parsed_document_kinds,
            set_on_non_object_fails,
            sample_document_round_trip,
            canonical_output_is_stable,
        );
    };
}
