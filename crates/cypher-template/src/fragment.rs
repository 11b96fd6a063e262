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

//! The closed set of fragments a statement is assembled from.

use crate::config::ParameterSyntax;
use crate::identifier::Identifier;
use crate::label::Label;
use crate::param::{Namespace, ParamField, ParamObject};
use crate::statement::Statement;
use crate::value::Props;
use std::borrow::Cow;

/// A typed piece of query text.
///
/// Identifiers and labels are inlined as validated text. Parameter fragments
/// inline only a placeholder and carry their values separately. A nested
/// statement inlines its template and brings its parameters along.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// A node, relationship or path name.
    Identifier(Identifier),
    /// A label, rendered with its leading colon.
    Label(Label),
    /// One field of a parameter namespace.
    ParamField(ParamField),
    /// A whole parameter namespace spliced in as an object.
    ParamObject(ParamObject),
    /// A previously assembled statement used as a sub-expression.
    Statement(Statement),
}

impl Fragment {
    /// Template text for this fragment.
    pub fn template(&self, syntax: ParameterSyntax) -> Cow<'_, str> {
        match self {
            Fragment::Identifier(id) => Cow::Borrowed(id.template()),
            Fragment::Label(label) => Cow::Owned(label.template()),
            Fragment::ParamField(field) => Cow::Owned(field.template(syntax)),
            Fragment::ParamObject(obj) => Cow::Owned(obj.template(syntax)),
            Fragment::Statement(stmt) => Cow::Borrowed(stmt.template()),
        }
    }

    /// The namespace of a parameter fragment.
    pub fn namespace(&self) -> Option<&Namespace> {
        match self {
            Fragment::ParamField(field) => Some(field.namespace()),
            Fragment::ParamObject(obj) => Some(obj.namespace()),
            _ => None,
        }
    }

    /// The props a parameter fragment contributes to its namespace.
    pub fn to_props(&self) -> Option<Props> {
        match self {
            Fragment::ParamField(field) => Some(field.to_props()),
            Fragment::ParamObject(obj) => Some(obj.to_props()),
            _ => None,
        }
    }

    /// Check if this fragment carries parameters of its own or nested ones.
    pub fn has_parameters(&self) -> bool {
        match self {
            Fragment::ParamField(_) | Fragment::ParamObject(_) => true,
            Fragment::Statement(stmt) => stmt.has_parameters(),
            Fragment::Identifier(_) | Fragment::Label(_) => false,
        }
    }
}

impl From<Identifier> for Fragment {
    fn from(v: Identifier) -> Self {
        Fragment::Identifier(v)
    }
}

impl From<Label> for Fragment {
    fn from(v: Label) -> Self {
        Fragment::Label(v)
    }
}

impl From<ParamField> for Fragment {
    fn from(v: ParamField) -> Self {
        Fragment::ParamField(v)
    }
}

impl From<ParamObject> for Fragment {
    fn from(v: ParamObject) -> Self {
        Fragment::ParamObject(v)
    }
}

impl From<Statement> for Fragment {
    fn from(v: Statement) -> Self {
        Fragment::Statement(v)
    }
}
