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

//! Error types for statement validation and assembly.

use crate::config::ParameterSyntax;
use std::fmt;
use thiserror::Error;

/// Error type for fragment validation and statement assembly.
///
/// Every variant is a data error: it is a deterministic function of the input
/// text, so retrying with the same input always reproduces it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Identifier text does not match `^[A-Za-z][A-Za-z0-9_]*$`.
    #[error("invalid identifier format: '{0}'")]
    IdentifierInvalidFormat(String),

    /// Label text does not match `^[A-Za-z0-9_]+$`.
    #[error("invalid label format: '{0}'")]
    LabelInvalidFormat(String),

    /// Two fragments contributed different values for the same key under the
    /// same parameter namespace.
    #[error("parameter namespace conflict: '{namespace}.{key}' declared with different values")]
    ParameterNamespaceConflict {
        /// The namespace both fragments wrote into.
        namespace: String,
        /// The key whose values disagree.
        key: String,
    },

    /// A nested statement writes its placeholders in a different syntax from
    /// the statement it is embedded in.
    #[error("parameter syntax mismatch: expected {expected:?}, nested statement uses {found:?}")]
    ParameterSyntaxMismatch {
        /// Syntax of the enclosing assembly.
        expected: ParameterSyntax,
        /// Syntax the nested statement was assembled with.
        found: ParameterSyntax,
    },

    /// Assembled template exceeds the configured maximum length.
    #[error("template length {length} exceeds maximum allowed length {max_length}")]
    TemplateLengthExceeded {
        /// Length of the assembled template in bytes.
        length: usize,
        /// Configured limit.
        max_length: usize,
    },
}

impl TemplateError {
    /// Build a namespace conflict error.
    pub fn conflict(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        TemplateError::ParameterNamespaceConflict {
            namespace: namespace.into(),
            key: key.into(),
        }
    }

    /// The offending input text, for format errors.
    pub fn input(&self) -> Option<&str> {
        match self {
            TemplateError::IdentifierInvalidFormat(s) | TemplateError::LabelInvalidFormat(s) => {
                Some(s)
            }
            _ => None,
        }
    }
}

/// Result type alias for validating constructors and assembly.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Every error collected from a batch of validations.
///
/// Returned by [`validate_all`] so callers can report all malformed inputs at
/// once rather than only the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<TemplateError>,
}

impl ValidationErrors {
    /// The collected errors, in input order.
    pub fn errors(&self) -> &[TemplateError] {
        &self.errors
    }

    /// Number of collected errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always false for a value returned by [`validate_all`].
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume into the underlying list.
    pub fn into_inner(self) -> Vec<TemplateError> {
        self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.errors.len())?;
        for err in &self.errors {
            write!(f, "; {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = TemplateError;
    type IntoIter = std::vec::IntoIter<TemplateError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Run a batch of validations and keep every failure.
///
/// Returns all values when every result is `Ok`, otherwise every error in
/// input order.
///
/// # Examples
///
/// ```
/// use cypher_template::{validate_all, Identifier};
///
/// let names = ["user", "9lives", "post", "bad-name"];
/// let err = validate_all(names.iter().map(|n| Identifier::new(n))).unwrap_err();
/// assert_eq!(err.len(), 2);
/// ```
pub fn validate_all<T, I>(results: I) -> std::result::Result<Vec<T>, ValidationErrors>
where
    I: IntoIterator<Item = Result<T>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(v) => values.push(v),
            Err(e) => errors.push(e),
        }
    }
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(ValidationErrors { errors })
    }
}
