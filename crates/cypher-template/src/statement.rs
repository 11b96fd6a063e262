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

//! The assembled statement.

use crate::config::ParameterSyntax;
use crate::value::Props;
use std::collections::BTreeMap;
use std::fmt;

/// An assembled query: template text plus the parameters it references.
///
/// Only the assembler creates statements, so every placeholder in
/// `template` has an entry in `parameters` and no namespace holds
/// conflicting values.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    template: String,
    parameters: BTreeMap<String, Props>,
    include_stats: bool,
    parameter_syntax: ParameterSyntax,
}

impl Statement {
    pub(crate) fn new(
        template: String,
        parameters: BTreeMap<String, Props>,
        include_stats: bool,
        parameter_syntax: ParameterSyntax,
    ) -> Self {
        Self {
            template,
            parameters,
            include_stats,
            parameter_syntax,
        }
    }

    /// The query text sent to the server.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Parameters keyed by namespace.
    pub fn parameters(&self) -> &BTreeMap<String, Props> {
        &self.parameters
    }

    /// Whether the server should return execution statistics.
    pub fn include_stats(&self) -> bool {
        self.include_stats
    }

    /// Placeholder syntax the template was written in.
    pub fn parameter_syntax(&self) -> ParameterSyntax {
        self.parameter_syntax
    }

    /// Namespaces referenced by this statement, in sorted order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }

    /// Check if this statement carries parameters.
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Copy of this statement with a different statistics flag.
    pub fn with_include_stats(mut self, include: bool) -> Self {
        self.include_stats = include;
        self
    }

    /// Split into template, parameters and statistics flag.
    pub fn into_parts(self) -> (String, BTreeMap<String, Props>, bool) {
        (self.template, self.parameters, self.include_stats)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}
