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

//! Response bodies from the transactional endpoint.

use crate::error::{RestError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Counters returned when a statement was sent with `includeStats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryStats {
    /// Whether the statement changed the graph.
    pub contains_updates: bool,
    /// Nodes created.
    pub nodes_created: u64,
    /// Nodes deleted.
    pub nodes_deleted: u64,
    /// Properties set.
    pub properties_set: u64,
    /// Relationships created.
    pub relationships_created: u64,
    /// Relationships deleted.
    #[serde(alias = "relationship_deleted")]
    pub relationships_deleted: u64,
    /// Labels added.
    pub labels_added: u64,
    /// Labels removed.
    pub labels_removed: u64,
    /// Indexes added.
    pub indexes_added: u64,
    /// Indexes removed.
    pub indexes_removed: u64,
    /// Constraints added.
    pub constraints_added: u64,
    /// Constraints removed.
    pub constraints_removed: u64,
}

/// One result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Column values in column order.
    pub row: Vec<serde_json::Value>,
}

/// Result of one statement in the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementResult {
    /// Column names.
    pub columns: Vec<String>,
    /// Rows.
    #[serde(default)]
    pub data: Vec<Row>,
    /// Present when statistics were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<QueryStats>,
}

impl StatementResult {
    /// Position of a column by name.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Value of `column` in row `row`.
    pub fn get(&self, row: usize, column: &str) -> Option<&serde_json::Value> {
        let idx = self.column_index(column)?;
        self.data.get(row)?.row.get(idx)
    }

    /// Iterate rows as value slices.
    pub fn rows(&self) -> impl Iterator<Item = &[serde_json::Value]> {
        self.data.iter().map(|r| r.row.as_slice())
    }
}

/// An error reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerError {
    /// Status code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Body of a transactional endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    /// One result per statement, in request order.
    #[serde(default)]
    pub results: Vec<StatementResult>,
    /// Errors; a non-empty list means the transaction failed.
    #[serde(default)]
    pub errors: Vec<ServerError>,
}

impl TransactionResponse {
    /// Decode a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        let response: Self = serde_json::from_str(body).map_err(|e| {
            debug!("Failed to decode transaction response: {}", e);
            e
        })?;
        Ok(response)
    }

    /// Check if the server reported errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The results, or the first server error.
    pub fn into_result(self) -> Result<Vec<StatementResult>> {
        match self.errors.into_iter().next() {
            Some(err) => Err(RestError::Server {
                code: err.code,
                message: err.message,
            }),
            None => Ok(self.results),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const OK_BODY: &str = r#"{
        "results": [{
            "columns": ["n.name", "n.age"],
            "data": [{"row": ["Alice", 30]}, {"row": ["Bob", 25]}],
            "stats": {"contains_updates": true, "nodes_created": 2, "properties_set": 4}
        }],
        "errors": []
    }"#;

    #[test]
    fn test_decode_success() {
        let response = TransactionResponse::from_json(OK_BODY).unwrap();
        assert!(!response.has_errors());
        let results = response.into_result().unwrap();
        assert_eq!(results.len(), 1);

        let result = &results[0];
        assert_eq!(result.column_index("n.age"), Some(1));
        assert_eq!(result.get(0, "n.name"), Some(&json!("Alice")));
        assert_eq!(result.get(1, "n.age"), Some(&json!(25)));
        assert_eq!(result.get(2, "n.age"), None);
        assert_eq!(result.get(0, "missing"), None);
        assert_eq!(result.rows().count(), 2);

        let stats = result.stats.as_ref().unwrap();
        assert!(stats.contains_updates);
        assert_eq!(stats.nodes_created, 2);
        assert_eq!(stats.properties_set, 4);
        assert_eq!(stats.labels_added, 0);
    }

    #[test]
    fn test_decode_server_error() {
        let body = r#"{
            "results": [],
            "errors": [{"code": "Neo.ClientError.Statement.SyntaxError", "message": "Invalid input"}]
        }"#;
        let response = TransactionResponse::from_json(body).unwrap();
        assert!(response.has_errors());
        match response.into_result().unwrap_err() {
            RestError::Server { code, message } => {
                assert_eq!(code, "Neo.ClientError.Statement.SyntaxError");
                assert_eq!(message, "Invalid input");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_missing_sections() {
        let response = TransactionResponse::from_json("{}").unwrap();
        assert_eq!(response, TransactionResponse::default());

        let result: StatementResult = serde_json::from_str(r#"{"columns": ["x"]}"#).unwrap();
        assert!(result.data.is_empty());
        assert!(result.stats.is_none());
    }

    #[test]
    fn test_decode_malformed() {
        let err = TransactionResponse::from_json("not json").unwrap_err();
        assert!(matches!(err, RestError::JsonError(_)));
    }

    #[test]
    fn test_legacy_relationship_deleted_key() {
        let stats: QueryStats = serde_json::from_str(r#"{"relationship_deleted": 3}"#).unwrap();
        assert_eq!(stats.relationships_deleted, 3);
    }
}
