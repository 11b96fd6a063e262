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

//! Configuration for statement assembly.

use serde::{Deserialize, Serialize};

/// How parameter placeholders are written into template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParameterSyntax {
    /// Brace placeholders: `{ns}.field` for a field and `{ ns }` for a whole object.
    #[default]
    Braces,
    /// Dollar placeholders: `$ns.field` for a field and `$ns` for a whole object.
    Dollar,
}

impl ParameterSyntax {
    /// Placeholder for one field of a namespace.
    ///
    /// ```
    /// use cypher_template::ParameterSyntax;
    ///
    /// assert_eq!(ParameterSyntax::Braces.field("props", "id"), "{props}.id");
    /// assert_eq!(ParameterSyntax::Dollar.field("props", "id"), "$props.id");
    /// ```
    pub fn field(&self, namespace: &str, field: &str) -> String {
        match self {
            ParameterSyntax::Braces => format!("{{{}}}.{}", namespace, field),
            ParameterSyntax::Dollar => format!("${}.{}", namespace, field),
        }
    }

    /// Placeholder for a whole namespace object.
    ///
    /// ```
    /// use cypher_template::ParameterSyntax;
    ///
    /// assert_eq!(ParameterSyntax::Braces.object("props"), "{ props }");
    /// assert_eq!(ParameterSyntax::Dollar.object("props"), "$props");
    /// ```
    pub fn object(&self, namespace: &str) -> String {
        match self {
            ParameterSyntax::Braces => format!("{{ {} }}", namespace),
            ParameterSyntax::Dollar => format!("${}", namespace),
        }
    }
}

/// Configuration for assembling statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblerConfig {
    /// Ask the server for execution statistics (default: false).
    ///
    /// Applies to the outer statement only; nested statements never change it.
    pub include_stats: bool,

    /// Placeholder syntax for parameter fragments (default: braces).
    pub parameter_syntax: ParameterSyntax,

    /// Maximum template length in bytes (default: None = unlimited).
    pub max_template_length: Option<usize>,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            include_stats: false,
            parameter_syntax: ParameterSyntax::Braces,
            max_template_length: None,
        }
    }
}

/// Builder for AssemblerConfig.
///
/// # Examples
///
/// ```
/// # use cypher_template::{AssemblerConfig, ParameterSyntax};
/// let config = AssemblerConfig::builder()
///     .include_stats(true)
///     .parameter_syntax(ParameterSyntax::Dollar)
///     .max_template_length(64 * 1024)
///     .build();
/// assert!(config.include_stats);
/// ```
#[derive(Default)]
pub struct AssemblerConfigBuilder {
    include_stats: Option<bool>,
    parameter_syntax: Option<ParameterSyntax>,
    max_template_length: Option<Option<usize>>,
}

impl AssemblerConfigBuilder {
    /// Create a new builder with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to request execution statistics.
    pub fn include_stats(mut self, include: bool) -> Self {
        self.include_stats = Some(include);
        self
    }

    /// Set the placeholder syntax.
    pub fn parameter_syntax(mut self, syntax: ParameterSyntax) -> Self {
        self.parameter_syntax = Some(syntax);
        self
    }

    /// Set the maximum template length.
    pub fn max_template_length(mut self, max: usize) -> Self {
        self.max_template_length = Some(Some(max));
        self
    }

    /// Remove the template length limit.
    pub fn no_template_length_limit(mut self) -> Self {
        self.max_template_length = Some(None);
        self
    }

    /// Build the AssemblerConfig instance.
    ///
    /// All unset fields will use their default values.
    pub fn build(self) -> AssemblerConfig {
        let defaults = AssemblerConfig::default();
        AssemblerConfig {
            include_stats: self.include_stats.unwrap_or(defaults.include_stats),
            parameter_syntax: self.parameter_syntax.unwrap_or(defaults.parameter_syntax),
            max_template_length: self
                .max_template_length
                .unwrap_or(defaults.max_template_length),
        }
    }
}

impl AssemblerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for AssemblerConfig.
    pub fn builder() -> AssemblerConfigBuilder {
        AssemblerConfigBuilder::default()
    }

    /// Request execution statistics.
    pub fn with_stats(mut self) -> Self {
        self.include_stats = true;
        self
    }

    /// Use `$name` placeholders.
    pub fn with_dollar_parameters(mut self) -> Self {
        self.parameter_syntax = ParameterSyntax::Dollar;
        self
    }

    /// Set maximum template length.
    pub fn with_max_template_length(mut self, max: usize) -> Self {
        self.max_template_length = Some(max);
        self
    }
}
