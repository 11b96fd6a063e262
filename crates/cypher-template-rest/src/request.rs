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

//! Request bodies for the transactional endpoint.
//!
//! One statement encodes as
//! `{"statement": ..., "parameters": {...}, "includeStats": ...}` and a
//! transaction wraps a list of them as `{"statements": [...]}`.

use crate::error::{RestError, Result};
use cypher_template::{Props, Statement, Value};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Reject NaN and infinities, which JSON cannot represent.
fn check_finite(namespace: &str, path: &str, value: &Value) -> Result<()> {
    match value {
        Value::Float(f) if !f.is_finite() => Err(RestError::NonFiniteNumber {
            namespace: namespace.to_string(),
            key: path.to_string(),
        }),
        Value::List(items) => items
            .iter()
            .try_for_each(|item| check_finite(namespace, path, item)),
        Value::Map(props) => props
            .iter()
            .try_for_each(|(k, v)| check_finite(namespace, &format!("{}.{}", path, k), v)),
        _ => Ok(()),
    }
}

/// Wire form of one statement, borrowing from it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementRequest<'a> {
    statement: &'a str,
    parameters: &'a BTreeMap<String, Props>,
    include_stats: bool,
}

impl<'a> StatementRequest<'a> {
    /// Borrow a statement for encoding, rejecting non-finite numbers.
    pub fn new(statement: &'a Statement) -> Result<Self> {
        for (namespace, props) in statement.parameters() {
            for (key, value) in props.iter() {
                check_finite(namespace, key, value)?;
            }
        }
        Ok(Self {
            statement: statement.template(),
            parameters: statement.parameters(),
            include_stats: statement.include_stats(),
        })
    }

    /// Encode this statement on its own.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A batch of statements sent in one request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionRequest<'a> {
    statements: Vec<StatementRequest<'a>>,
}

impl<'a> TransactionRequest<'a> {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a batch from statements, in order.
    pub fn from_statements<I>(statements: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Statement>,
    {
        let mut request = Self::new();
        for statement in statements {
            request.push(statement)?;
        }
        Ok(request)
    }

    /// Append a statement.
    pub fn push(&mut self, statement: &'a Statement) -> Result<()> {
        self.statements.push(StatementRequest::new(statement)?);
        Ok(())
    }

    /// Number of statements in the batch.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Encode as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        let body = serde_json::to_string(self)?;
        debug!(
            "Encoded transaction request: {} statements, {} bytes",
            self.statements.len(),
            body.len()
        );
        Ok(body)
    }

    /// Encode as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Encode as a JSON value tree.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Encode a single statement as a one-statement transaction body.
///
/// # Examples
///
/// ```
/// use cypher_template::{Namespace, StatementBuilder};
/// use cypher_template_rest::encode_statement;
///
/// let props = Namespace::new("props").unwrap();
/// let stmt = StatementBuilder::new()
///     .text("MATCH (n) WHERE n.id = ")
///     .field(&props, "id", 1)
///     .text(" RETURN n")
///     .build()
///     .unwrap();
///
/// let body = encode_statement(&stmt).unwrap();
/// assert_eq!(
///     body,
///     r#"{"statements":[{"statement":"MATCH (n) WHERE n.id = {props}.id RETURN n","parameters":{"props":{"id":1}},"includeStats":false}]}"#
/// );
/// ```
pub fn encode_statement(statement: &Statement) -> Result<String> {
    TransactionRequest::from_statements([statement])?.to_json()
}
