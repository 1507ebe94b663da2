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

//! Structural limit checks on a decoded tree.

use jwrap_core::{JsonResult, Limits, SerializationError};
use serde_json::Value;

/// Walk `value` and fail on the first depth or object-size violation.
///
/// Iterative so that the check itself cannot overflow the stack.
pub(crate) fn check_structure(value: &Value, limits: &Limits) -> JsonResult<()> {
    let mut stack: Vec<(&Value, usize)> = vec![(value, 0)];

    while let Some((node, depth)) = stack.pop() {
        match node {
            Value::Object(map) => {
                let depth = depth + 1;
                if depth > limits.max_depth {
                    return Err(depth_exceeded(limits.max_depth));
                }
                if map.len() > limits.max_object_keys {
                    return Err(SerializationError::limit_exceeded(format!(
                        "Failed to parse JSON: object has {} keys, limit is {}",
                        map.len(),
                        limits.max_object_keys
                    )));
                }
                stack.extend(map.values().map(|child| (child, depth)));
            }
            Value::Array(items) => {
                let depth = depth + 1;
                if depth > limits.max_depth {
                    return Err(depth_exceeded(limits.max_depth));
                }
                stack.extend(items.iter().map(|child| (child, depth)));
            }
            _ => {}
        }
    }

    Ok(())
}

fn depth_exceeded(max_depth: usize) -> SerializationError {
    SerializationError::limit_exceeded(format!(
        "Failed to parse JSON: nesting depth exceeds limit of {}",
        max_depth
    ))
}
