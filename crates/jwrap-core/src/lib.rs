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

//! Contract crate for the JWRAP JSON wrapper.
//!
//! This crate defines what every JSON engine adapter must provide and
//! nothing else. It has no engine code.
//!
//! - [`JsonWrapper`]: the object-safe operation surface
//! - [`SerializationError`]: the one error every operation reports
//! - [`coerce`]: the numeric model every adapter shares
//! - [`Limits`]: parse resource limits
//!
//! Adapters live in their own crates (`jwrap-serde`), and the conformance
//! suite they must pass lives in `jwrap-test`.

pub mod coerce;
mod error;
mod limits;
mod wrapper;

pub use error::{ErrorReason, JsonResult, SerializationError};
pub use limits::{Limits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_SIZE, DEFAULT_MAX_OBJECT_KEYS};
pub use wrapper::{DocumentKind, JsonWrapper};
