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

//! Example: assemble statements and print the transaction request body.
//!
//! Run with `RUST_LOG=debug` to see assembly and encoding logs.

use cypher_template::{
    AssemblerConfig, NamespaceAllocator, ParameterSyntax, Props, StatementBuilder,
};
use cypher_template_rest::TransactionRequest;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("cypher_template=info".parse()?)
                .add_directive("cypher_template_rest=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let namespaces = NamespaceAllocator::default();

    // 1. Brace placeholders (default)
    let person = namespaces.allocate();
    let create = StatementBuilder::new()
        .text("CREATE (n")
        .label("Person")
        .text(" ")
        .object(&person, Props::new().with("name", "Alice").with("age", 30))
        .text(") RETURN id(n)")
        .include_stats(true)
        .build()?;

    // 2. Dollar placeholders with a nested filter
    let config = AssemblerConfig::builder()
        .parameter_syntax(ParameterSyntax::Dollar)
        .build();
    let filter_ns = namespaces.allocate();
    let filter = StatementBuilder::with_config(config.clone())
        .text("n.age >= ")
        .field(&filter_ns, "min_age", 18)
        .build()?;
    let query = StatementBuilder::with_config(config)
        .text("MATCH (")
        .identifier("n")
        .label("Person")
        .text(") WHERE ")
        .statement(filter)
        .text(" RETURN n.name")
        .build()?;

    println!("=== Statements ===");
    println!("{}", create);
    println!("{}", query);
    println!();

    let request = TransactionRequest::from_statements([&create, &query])?;
    println!("=== Request body ===");
    println!("{}", request.to_json_pretty()?);

    Ok(())
}
