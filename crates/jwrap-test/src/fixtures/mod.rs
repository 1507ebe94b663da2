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

//! Canonical JSON inputs shared by adapter tests.

/// Mixed document used by the end-to-end round-trip check.
pub const SAMPLE_DOCUMENT: &str = r#"{"pi":3.141,"happy":true,"name":"json","nothing":null,"answer":{"everything":42},"list":[1,0,2],"object":{"currency":"USD","value":42.99}}"#;

/// Canonical serialization of [`SAMPLE_DOCUMENT`].
pub const SAMPLE_CANONICAL: &str = r#"{"answer":{"everything":42},"happy":true,"list":[1,0,2],"name":"json","nothing":null,"object":{"currency":"USD","value":42.99},"pi":3.141}"#;

/// Top-level keys of [`SAMPLE_DOCUMENT`] in canonical order.
pub const SAMPLE_KEY_ORDER: [&str; 7] = [
    "answer", "happy", "list", "name", "nothing", "object", "pi",
];

/// Documents whose top level is not an object. Each is already canonical.
pub fn non_object_documents() -> Vec<(&'static str, &'static str)> {
    vec![
        ("null", "null"),
        ("integer", "42"),
        ("negative", "-7"),
        ("double", "2.5"),
        ("boolean", "true"),
        ("string", r#""text""#),
        ("array", "[1,0,2]"),
        ("nested_array", r#"[[],{"a":[null]}]"#),
    ]
}

/// Syntactically invalid JSON text.
pub fn invalid_json_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("missing_closing_brace", r#"{"key":"value""#),
        ("missing_closing_bracket", "[1,2"),
        ("trailing_comma", r#"{"a":1,}"#),
        ("unquoted_key", "{a:1}"),
        ("single_quotes", "{'a':1}"),
        ("missing_colon", r#"{"a" 1}"#),
        ("bare_word", "nil"),
        ("empty", ""),
        ("whitespace_only", "   "),
        ("trailing_garbage", r#"{"a":1}x"#),
        ("leading_zero", r#"{"a":01}"#),
        ("unterminated_string", r#"{"a":"b}"#),
    ]
}

/// Inputs that are invalid only because of their encoding.
pub fn invalid_utf8_samples() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("lone_continuation_byte", b"{\"k\":\"\x80\"}".to_vec()),
        ("invalid_lead_byte", b"{\"k\":\"\xff\"}".to_vec()),
        ("truncated_sequence", b"{\"k\":\"\xe2\x82\"}".to_vec()),
        ("overlong_encoding", b"{\"k\":\"\xc0\xaf\"}".to_vec()),
        ("encoded_surrogate", b"{\"k\":\"\xed\xa0\x80\"}".to_vec()),
        ("invalid_byte_in_key", b"{\"\xfe\":1}".to_vec()),
    ]
}

/// Escape sequences that do not decode to valid Unicode scalar values.
pub fn invalid_escape_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("lone_leading_surrogate", r#"{"k":"\ud800"}"#),
        ("lone_trailing_surrogate", r#"{"k":"\udc00"}"#),
        ("unknown_escape", r#"{"k":"\x41"}"#),
        ("short_unicode_escape", r#"{"k":"\u12"}"#),
    ]
}
