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

//! REST transaction bodies for assembled Cypher statements.
//!
//! This crate sits at the boundary between [`cypher_template`] and whatever
//! HTTP client sends the request. It produces and consumes JSON only.
//!
//! | Direction | Type | JSON |
//! |-----------|------|------|
//! | request | [`StatementRequest`] | `{"statement", "parameters", "includeStats"}` |
//! | request | [`TransactionRequest`] | `{"statements": [...]}` |
//! | response | [`TransactionResponse`] | `{"results": [...], "errors": [...]}` |
//!
//! # Example
//!
//! ```rust
//! use cypher_template::{Namespace, StatementBuilder};
//! use cypher_template_rest::{TransactionRequest, TransactionResponse};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let props = Namespace::new("props")?;
//!     let stmt = StatementBuilder::new()
//!         .text("MATCH (n:Person) WHERE n.name = ")
//!         .field(&props, "name", "Alice")
//!         .text(" RETURN n.age")
//!         .build()?;
//!
//!     let body = TransactionRequest::from_statements([&stmt])?.to_json()?;
//!     assert!(body.starts_with(r#"{"statements":[{"statement":"MATCH"#));
//!
//!     let reply = r#"{"results":[{"columns":["n.age"],"data":[{"row":[30]}]}],"errors":[]}"#;
//!     let results = TransactionResponse::from_json(reply)?.into_result()?;
//!     assert_eq!(results[0].get(0, "n.age"), Some(&serde_json::json!(30)));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod request;
pub mod response;

pub use error::{RestError, Result};
pub use request::{encode_statement, StatementRequest, TransactionRequest};
pub use response::{QueryStats, Row, ServerError, StatementResult, TransactionResponse};
