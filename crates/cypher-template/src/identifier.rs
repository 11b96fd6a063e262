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

//! Validated identifiers for nodes, relationships and paths.

use crate::error::{Result, TemplateError};
use std::fmt;

/// Check if a string is a valid identifier.
///
/// Valid identifiers start with an ASCII letter and contain only ASCII
/// letters, digits and underscores: `^[A-Za-z][A-Za-z0-9_]*$`.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };

    if !first.is_ascii_alphabetic() {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A name that is safe to inline into query text.
///
/// The only way to obtain one is [`Identifier::new`], so holding an
/// `Identifier` is proof that its text passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Validate `text` and wrap it.
    ///
    /// # Examples
    ///
    /// ```
    /// use cypher_template::{Identifier, TemplateError};
    ///
    /// let n = Identifier::new("user").unwrap();
    /// assert_eq!(n.as_str(), "user");
    ///
    /// let err = Identifier::new("user) DETACH DELETE (x").unwrap_err();
    /// assert!(matches!(err, TemplateError::IdentifierInvalidFormat(_)));
    /// ```
    pub fn new(text: &str) -> Result<Self> {
        if is_valid_identifier(text) {
            Ok(Identifier(text.to_string()))
        } else {
            Err(TemplateError::IdentifierInvalidFormat(text.to_string()))
        }
    }

    /// Wrap text the caller has already proven valid.
    pub(crate) fn new_unchecked(text: String) -> Self {
        debug_assert!(is_valid_identifier(&text), "invalid identifier: {text:?}");
        Identifier(text)
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Template text: the name verbatim.
    pub fn template(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = TemplateError;

    fn try_from(value: &str) -> Result<Self> {
        Identifier::new(value)
    }
}

/// Validate an identifier. Free-function form of [`Identifier::new`].
pub fn make_identifier(text: &str) -> Result<Identifier> {
    Identifier::new(text)
}
