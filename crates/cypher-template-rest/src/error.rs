// Dweve Cypher Template - Safe Cypher statement assembly
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

//! Error types for request encoding and response decoding.

use thiserror::Error;

/// Error type for the REST body layer.
#[derive(Debug, Error)]
pub enum RestError {
    /// A float parameter is NaN or infinite and has no JSON representation.
    #[error("parameter '{namespace}.{key}' is not a finite number")]
    NonFiniteNumber {
        /// Namespace holding the value.
        namespace: String,
        /// Key (dotted path for nested values).
        key: String,
    },

    /// The server reported an error for the transaction.
    #[error("server error {code}: {message}")]
    Server {
        /// Status code, e.g. `Neo.ClientError.Statement.SyntaxError`.
        code: String,
        /// Human-readable message.
        message: String,
    },

    /// Serialization error from serde_json.
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for REST body operations.
pub type Result<T> = std::result::Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_server() {
        let err = RestError::Server {
            code: "Neo.ClientError.Statement.SyntaxError".to_string(),
            message: "Invalid input".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("SyntaxError"));
        assert!(msg.contains("Invalid input"));
    }

    #[test]
    fn test_error_display_non_finite() {
        let err = RestError::NonFiniteNumber {
            namespace: "props".to_string(),
            key: "score".to_string(),
        };
        assert!(err.to_string().contains("props.score"));
    }

    #[test]
    fn test_error_from_json_error() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: RestError = json_err.into();
        assert!(matches!(err, RestError::JsonError(_)));
    }
}
