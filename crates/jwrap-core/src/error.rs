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

//! The single error type raised by every wrapper operation.
//!
//! Adapters translate every engine-native failure into a
//! [`SerializationError`] before it crosses the [`JsonWrapper`] boundary.
//! The [`ErrorReason`] is diagnostic detail; callers that only care about
//! success or failure match on the error type alone.
//!
//! [`JsonWrapper`]: crate::JsonWrapper

use std::fmt;
use thiserror::Error;

/// Why an operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorReason {
    /// The requested key is not present.
    MissingKey,
    /// The stored value cannot be coerced to the requested type.
    TypeMismatch,
    /// Input text is not syntactically valid JSON.
    Syntax,
    /// Input contains invalid UTF-8 bytes or escape sequences.
    Encoding,
    /// The inner document passed to `set_object` comes from another adapter.
    IncompatibleObject,
    /// A key operation was attempted on a scalar or array document.
    NotAnObject,
    /// The value cannot be represented in JSON text (e.g. NaN).
    Unrepresentable,
    /// A configured parse limit was exceeded.
    LimitExceeded,
    /// Memory could not be allocated for the result.
    Allocation,
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey => write!(f, "missing key"),
            Self::TypeMismatch => write!(f, "type mismatch"),
            Self::Syntax => write!(f, "syntax"),
            Self::Encoding => write!(f, "encoding"),
            Self::IncompatibleObject => write!(f, "incompatible object"),
            Self::NotAnObject => write!(f, "not an object"),
            Self::Unrepresentable => write!(f, "unrepresentable value"),
            Self::LimitExceeded => write!(f, "limit exceeded"),
            Self::Allocation => write!(f, "allocation"),
        }
    }
}

/// Error raised on any JSON (de)serialization or access failure.
#[derive(Debug, Clone, Error)]
#[error("SerializationError: {message}{}{}", key_suffix(.key), context_suffix(.context))]
pub struct SerializationError {
    /// Why the operation failed.
    pub reason: ErrorReason,
    /// Human-readable error message.
    pub message: String,
    /// The key the failing operation addressed, if any.
    pub key: Option<String>,
    /// Additional context added while the error propagated.
    pub context: Option<String>,
}

fn key_suffix(key: &Option<String>) -> String {
    match key {
        Some(k) => format!(" (key {:?})", k),
        None => String::new(),
    }
}

fn context_suffix(context: &Option<String>) -> String {
    match context {
        Some(c) => format!(" [{}]", c),
        None => String::new(),
    }
}

impl SerializationError {
    /// Create a new error.
    pub fn new(reason: ErrorReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
            key: None,
            context: None,
        }
    }

    /// Attach the key the failing operation addressed.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add context information.
    ///
    /// Context already present is kept; the new entry is appended after it.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        let context = context.into();
        self.context = Some(match self.context.take() {
            Some(existing) => format!("{}; {}", existing, context),
            None => context,
        });
        self
    }

    // Convenience constructors for each reason
    pub fn missing_key(key: &str) -> Self {
        Self::new(ErrorReason::MissingKey, "Key not found").with_key(key)
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorReason::TypeMismatch, message)
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(ErrorReason::Syntax, message)
    }

    pub fn encoding(message: impl Into<String>) -> Self {
        Self::new(ErrorReason::Encoding, message)
    }

    pub fn incompatible_object() -> Self {
        Self::new(ErrorReason::IncompatibleObject, "Invalid JSON object to set.")
    }

    pub fn not_an_object(message: impl Into<String>) -> Self {
        Self::new(ErrorReason::NotAnObject, message)
    }

    pub fn unrepresentable(message: impl Into<String>) -> Self {
        Self::new(ErrorReason::Unrepresentable, message)
    }

    pub fn limit_exceeded(message: impl Into<String>) -> Self {
        Self::new(ErrorReason::LimitExceeded, message)
    }

    pub fn allocation(message: impl Into<String>) -> Self {
        Self::new(ErrorReason::Allocation, message)
    }
}

/// Result type for wrapper operations.
pub type JsonResult<T> = Result<T, SerializationError>;
