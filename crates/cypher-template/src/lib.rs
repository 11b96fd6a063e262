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

//! Injection-safe Cypher statement assembly.
//!
//! A statement is assembled from trusted literal text interleaved with typed
//! fragments. Only validated names ever become query text; every value
//! travels in a separate parameter map keyed by namespace.
//!
//! # Fragments
//!
//! | Fragment | Template text | Parameters |
//! |----------|---------------|------------|
//! | [`Identifier`] | `name` | none |
//! | [`Label`] | `:Name` | none |
//! | [`ParamField`] | `{ns}.field` | `ns -> {field: value}` |
//! | [`ParamObject`] | `{ ns }` | `ns -> props` |
//! | [`Statement`] | inner template | inner parameters, flattened |
//!
//! # Validation
//!
//! - Identifiers match `^[A-Za-z][A-Za-z0-9_]*$`
//! - Labels match `^[A-Za-z0-9_]+$` and are memoised in a [`LabelCache`]
//! - Namespaces and field names follow the identifier rule
//!
//! Validating constructors return [`Result`]; [`validate_all`] collects every
//! failure of a batch instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use cypher_template::{Fragment, Identifier, Label, Namespace, Props, StatementBuilder};
//!
//! fn example() -> cypher_template::Result<()> {
//!     let n = Identifier::new("n")?;
//!     let props = Namespace::new("props")?;
//!
//!     let create = StatementBuilder::new()
//!         .text("CREATE (")
//!         .fragment(n.clone())
//!         .fragment(Label::new("Person")?)
//!         .text(" ")
//!         .object(&props, Props::new().with("name", "Alice").with("age", 30))
//!         .text(") RETURN ")
//!         .fragment(n)
//!         .build()?;
//!
//!     assert_eq!(create.template(), "CREATE (n:Person { props }) RETURN n");
//!     assert_eq!(create.parameters()["props"].len(), 2);
//!
//!     // Statements nest; their parameters are flattened into the outer one.
//!     let who = Namespace::new("who")?;
//!     let filter = StatementBuilder::new()
//!         .text("n.name = ")
//!         .field(&who, "name", "Alice")
//!         .build()?;
//!     let query = StatementBuilder::new()
//!         .text("MATCH (n:Person) WHERE ")
//!         .fragment(Fragment::from(filter))
//!         .text(" RETURN n")
//!         .build()?;
//!
//!     assert_eq!(query.template(), "MATCH (n:Person) WHERE n.name = {who}.name RETURN n");
//!     assert!(query.parameters().contains_key("who"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Logging
//!
//! Label cache activity is logged at `trace` level and assembly results at
//! `debug` level through `tracing`. No subscriber is installed here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod assemble;
pub mod config;
pub mod error;
pub mod fragment;
pub mod identifier;
pub mod label;
pub mod param;
pub mod statement;
pub mod value;

// Re-export main types at crate root for convenience
pub use assemble::{assemble, Assembler, StatementBuilder};
pub use config::{AssemblerConfig, AssemblerConfigBuilder, ParameterSyntax};
pub use error::{validate_all, Result, TemplateError, ValidationErrors};
pub use fragment::Fragment;
pub use identifier::{is_valid_identifier, make_identifier, Identifier};
pub use label::{is_valid_label, make_label, Label, LabelCache, LabelCacheStats};
pub use param::{Namespace, NamespaceAllocator, ParamField, ParamObject};
pub use statement::Statement;
pub use value::{Props, Value};
