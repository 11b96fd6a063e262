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

//! Parameter namespaces and the fragments that reference them.
//!
//! A namespace is one entry of the statement's parameter map. Values stay in
//! that map; only the namespace and field names, both validated identifiers,
//! reach the template text.

use crate::config::ParameterSyntax;
use crate::error::Result;
use crate::identifier::Identifier;
use crate::value::{Props, Value};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A validated parameter namespace name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Namespace(Identifier);

impl Namespace {
    /// Validate a namespace name. Uses the identifier rule.
    pub fn new(name: &str) -> Result<Self> {
        Identifier::new(name).map(Namespace)
    }

    /// The namespace name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// One field of this namespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use cypher_template::{Namespace, ParameterSyntax};
    ///
    /// let ns = Namespace::new("props").unwrap();
    /// let field = ns.field("id", 1).unwrap();
    /// assert_eq!(field.template(ParameterSyntax::Braces), "{props}.id");
    /// ```
    pub fn field(&self, id: &str, value: impl Into<Value>) -> Result<ParamField> {
        Ok(ParamField {
            namespace: self.clone(),
            field: Identifier::new(id)?,
            value: value.into(),
        })
    }

    /// One field fragment per key of `props`, in insertion order.
    ///
    /// Fails on the first key that is not a valid identifier.
    pub fn fields(&self, props: &Props) -> Result<Vec<ParamField>> {
        props
            .iter()
            .map(|(k, v)| self.field(k, v.clone()))
            .collect()
    }

    /// The whole of `props` spliced in as one object.
    pub fn object(&self, props: Props) -> ParamObject {
        ParamObject {
            namespace: self.clone(),
            props,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single value referenced as `{namespace}.field`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamField {
    namespace: Namespace,
    field: Identifier,
    value: Value,
}

impl ParamField {
    /// The namespace this field belongs to.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The field name.
    pub fn field(&self) -> &Identifier {
        &self.field
    }

    /// The field value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Placeholder text for this field.
    pub fn template(&self, syntax: ParameterSyntax) -> String {
        syntax.field(self.namespace.as_str(), self.field.as_str())
    }

    /// Contribution to the parameter map: `{field -> value}`.
    pub fn to_props(&self) -> Props {
        Props::new().with(self.field.as_str(), self.value.clone())
    }
}

/// A whole props map referenced as `{ namespace }`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamObject {
    namespace: Namespace,
    props: Props,
}

impl ParamObject {
    /// The namespace holding the object.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The object fields.
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Placeholder text for the object.
    pub fn template(&self, syntax: ParameterSyntax) -> String {
        syntax.object(self.namespace.as_str())
    }

    /// Contribution to the parameter map: the full object.
    pub fn to_props(&self) -> Props {
        self.props.clone()
    }
}

/// Hands out fresh namespaces `<prefix>0`, `<prefix>1`, ...
///
/// Fragments built from one allocator never share a namespace by accident,
/// so their parameters cannot collide during assembly.
#[derive(Debug)]
pub struct NamespaceAllocator {
    prefix: Identifier,
    next: AtomicUsize,
}

impl NamespaceAllocator {
    /// Create an allocator with a custom prefix. The prefix must itself be a
    /// valid identifier.
    pub fn new(prefix: &str) -> Result<Self> {
        Ok(Self {
            prefix: Identifier::new(prefix)?,
            next: AtomicUsize::new(0),
        })
    }

    /// Allocate the next namespace.
    pub fn allocate(&self) -> Namespace {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        // prefix is a valid identifier and digits are allowed after the first char
        Namespace(Identifier::new_unchecked(format!("{}{}", self.prefix, n)))
    }

    /// Number of namespaces handed out so far.
    pub fn allocated(&self) -> usize {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for NamespaceAllocator {
    fn default() -> Self {
        Self {
            prefix: Identifier::new_unchecked("p".to_string()),
            next: AtomicUsize::new(0),
        }
    }
}
