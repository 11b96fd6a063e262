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

//! Statement assembly.
//!
//! Literal segments and fragments interleave as
//! `segment, fragment, segment, ..., fragment, segment`. Templates are
//! concatenated strictly left to right. Parameter fragments and nested
//! statements are merged into one namespace-keyed map; a key declared twice
//! with equal values is kept once, with different values it is a conflict.

use crate::config::AssemblerConfig;
use crate::error::{Result, TemplateError};
use crate::fragment::Fragment;
use crate::identifier::Identifier;
use crate::label::LabelCache;
use crate::param::Namespace;
use crate::statement::Statement;
use crate::value::{Props, Value};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::debug;

/// Value equality for merging. Floats compare by value except that NaN
/// matches NaN, so re-declaring the same NaN is not a conflict.
fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Float(x), Value::Float(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::List(xs), Value::List(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| same_value(x, y))
        }
        (Value::Map(xs), Value::Map(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys.iter())
                    .all(|((kx, vx), (ky, vy))| kx == ky && same_value(vx, vy))
        }
        _ => a == b,
    }
}

/// Merge `contribution` into the props stored under `namespace`.
///
/// New keys are added, keys with an equal value are left alone, keys with a
/// different value fail with `ParameterNamespaceConflict`.
fn merge_namespace(
    parameters: &mut BTreeMap<String, Props>,
    namespace: &str,
    contribution: Props,
) -> Result<()> {
    let existing = match parameters.entry(namespace.to_string()) {
        Entry::Vacant(slot) => {
            slot.insert(contribution);
            return Ok(());
        }
        Entry::Occupied(slot) => slot.into_mut(),
    };

    for (key, value) in contribution {
        match existing.get(&key) {
            Some(current) if same_value(current, &value) => {}
            Some(_) => {
                debug!("Parameter conflict on {}.{}", namespace, key);
                return Err(TemplateError::conflict(namespace, key));
            }
            None => {
                existing.insert(key, value);
            }
        }
    }
    Ok(())
}

/// Assembles statements under one configuration.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    config: AssemblerConfig,
}

impl Assembler {
    /// Create an assembler with the given configuration.
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Assemble `segments` and `fragments` into one statement.
    ///
    /// # Errors
    ///
    /// Returns `ParameterNamespaceConflict` when two fragments (or nested
    /// statements) disagree on a namespace key, `ParameterSyntaxMismatch` when
    /// a nested statement with parameters uses another placeholder syntax, and
    /// `TemplateLengthExceeded` when the configured limit is exceeded. No
    /// statement is produced on error.
    ///
    /// # Panics
    ///
    /// Panics unless `segments.len() == fragments.len() + 1`. A mismatch is a
    /// bug in the calling code, never a property of the data.
    ///
    /// # Examples
    ///
    /// ```
    /// use cypher_template::{Assembler, Fragment, Identifier};
    ///
    /// let n = Fragment::from(Identifier::new("entity").unwrap());
    /// let stmt = Assembler::default()
    ///     .assemble(
    ///         &["MATCH (", ") WHERE ", ".id = 1 RETURN ", ""],
    ///         &[n.clone(), n.clone(), n],
    ///     )
    ///     .unwrap();
    /// assert_eq!(stmt.template(), "MATCH (entity) WHERE entity.id = 1 RETURN entity");
    /// ```
    pub fn assemble<S: AsRef<str>>(
        &self,
        segments: &[S],
        fragments: &[Fragment],
    ) -> Result<Statement> {
        assert!(
            segments.len() == fragments.len() + 1,
            "assembly arity mismatch: {} fragments need {} literal segments, got {}",
            fragments.len(),
            fragments.len() + 1,
            segments.len()
        );

        let syntax = self.config.parameter_syntax;
        let mut template = String::new();
        let mut parameters: BTreeMap<String, Props> = BTreeMap::new();

        for (segment, fragment) in segments.iter().zip(fragments) {
            template.push_str(segment.as_ref());
            template.push_str(&fragment.template(syntax));
        }
        if let Some(last) = segments.last() {
            template.push_str(last.as_ref());
        }

        for fragment in fragments {
            match fragment {
                Fragment::ParamField(field) => {
                    let namespace = field.namespace().as_str();
                    merge_namespace(&mut parameters, namespace, field.to_props())?;
                }
                Fragment::ParamObject(obj) => {
                    let namespace = obj.namespace().as_str();
                    merge_namespace(&mut parameters, namespace, obj.to_props())?;
                }
                Fragment::Statement(inner) => {
                    // without parameters there are no placeholders to disagree
                    if inner.has_parameters() && inner.parameter_syntax() != syntax {
                        debug!(
                            "Nested statement uses {:?} placeholders, expected {:?}",
                            inner.parameter_syntax(),
                            syntax
                        );
                        return Err(TemplateError::ParameterSyntaxMismatch {
                            expected: syntax,
                            found: inner.parameter_syntax(),
                        });
                    }
                    for (namespace, props) in inner.parameters() {
                        merge_namespace(&mut parameters, namespace, props.clone())?;
                    }
                }
                Fragment::Identifier(_) | Fragment::Label(_) => {}
            }
        }

        if let Some(max_length) = self.config.max_template_length {
            if template.len() > max_length {
                return Err(TemplateError::TemplateLengthExceeded {
                    length: template.len(),
                    max_length,
                });
            }
        }

        debug!(
            "Assembled statement: {} fragments, {} bytes, {} namespaces",
            fragments.len(),
            template.len(),
            parameters.len()
        );
        Ok(Statement::new(
            template,
            parameters,
            self.config.include_stats,
            syntax,
        ))
    }
}

/// Assemble with the default configuration.
///
/// # Panics
///
/// Panics unless `segments.len() == fragments.len() + 1`.
pub fn assemble<S: AsRef<str>>(segments: &[S], fragments: &[Fragment]) -> Result<Statement> {
    Assembler::default().assemble(segments, fragments)
}

/// Fluent statement construction.
///
/// Literal text and fragments are appended in order, so segment/fragment
/// arity always lines up. Convenience methods that validate input remember
/// the first failure and [`build`](StatementBuilder::build) returns it.
///
/// # Examples
///
/// ```
/// use cypher_template::{Namespace, StatementBuilder};
///
/// let props = Namespace::new("props").unwrap();
/// let stmt = StatementBuilder::new()
///     .text("MATCH (")
///     .identifier("n")
///     .label("Person")
///     .text(") WHERE n.id = ")
///     .field(&props, "id", 42)
///     .text(" RETURN n")
///     .build()
///     .unwrap();
///
/// assert_eq!(stmt.template(), "MATCH (n:Person) WHERE n.id = {props}.id RETURN n");
/// assert_eq!(stmt.parameters()["props"].get("id").and_then(|v| v.as_int()), Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    config: AssemblerConfig,
    segments: Vec<String>,
    fragments: Vec<Fragment>,
    error: Option<TemplateError>,
}

impl Default for StatementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementBuilder {
    /// Create an empty builder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(AssemblerConfig::default())
    }

    /// Create an empty builder with a custom configuration.
    pub fn with_config(config: AssemblerConfig) -> Self {
        Self {
            config,
            segments: vec![String::new()],
            fragments: Vec::new(),
            error: None,
        }
    }

    /// Append literal query text.
    pub fn text(mut self, text: &str) -> Self {
        if let Some(segment) = self.segments.last_mut() {
            segment.push_str(text);
        }
        self
    }

    /// Append an already-built fragment.
    pub fn fragment(mut self, fragment: impl Into<Fragment>) -> Self {
        self.fragments.push(fragment.into());
        self.segments.push(String::new());
        self
    }

    /// Append the outcome of a validation, remembering the error if any.
    pub fn try_fragment<F: Into<Fragment>>(mut self, fragment: Result<F>) -> Self {
        match fragment {
            Ok(f) => self.fragment(f),
            Err(e) => {
                if self.error.is_none() {
                    self.error = Some(e);
                }
                self
            }
        }
    }

    /// Append a validated identifier.
    pub fn identifier(self, name: &str) -> Self {
        self.try_fragment(Identifier::new(name))
    }

    /// Append a label validated through the process-wide cache.
    pub fn label(self, name: &str) -> Self {
        self.label_in(LabelCache::global(), name)
    }

    /// Append a label validated through `cache`.
    pub fn label_in(self, cache: &LabelCache, name: &str) -> Self {
        self.try_fragment(cache.label(name))
    }

    /// Append a `{namespace}.field` placeholder.
    pub fn field(self, namespace: &Namespace, field: &str, value: impl Into<Value>) -> Self {
        self.try_fragment(namespace.field(field, value))
    }

    /// Append a `{ namespace }` object placeholder.
    pub fn object(self, namespace: &Namespace, props: Props) -> Self {
        self.fragment(namespace.object(props))
    }

    /// Append a nested statement.
    pub fn statement(self, statement: Statement) -> Self {
        self.fragment(statement)
    }

    /// Set whether to request execution statistics.
    pub fn include_stats(mut self, include: bool) -> Self {
        self.config.include_stats = include;
        self
    }

    /// Assemble the statement.
    ///
    /// Returns the first validation error recorded while building, if any,
    /// without attempting assembly.
    pub fn build(self) -> Result<Statement> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Assembler::new(self.config).assemble(&self.segments, &self.fragments)
    }
}
