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

//! Integration tests for statement assembly.
//!
//! Test coverage:
//! - Left-to-right template concatenation
//! - Namespace merging, idempotent re-declaration and conflicts
//! - Nested statement flattening
//! - Configuration effects

use cypher_template::{
    assemble, Assembler, AssemblerConfig, Fragment, Identifier, LabelCache, Namespace,
    NamespaceAllocator, ParameterSyntax, Props, StatementBuilder, TemplateError, Value,
};

fn entity() -> Fragment {
    Fragment::from(Identifier::new("entity").unwrap())
}

fn field(ns: &str, id: &str, value: impl Into<Value>) -> Fragment {
    Fragment::from(Namespace::new(ns).unwrap().field(id, value).unwrap())
}

#[test]
fn test_identifier_only_statement() {
    let stmt = assemble(
        &["MATCH (", ") WHERE ", ".id = 1 RETURN ", ""],
        &[entity(), entity(), entity()],
    )
    .unwrap();
    assert_eq!(
        stmt.template(),
        "MATCH (entity) WHERE entity.id = 1 RETURN entity"
    );
    assert!(stmt.parameters().is_empty());
}

#[test]
fn test_arity_mismatch_is_a_panic() {
    let result = std::panic::catch_unwind(|| {
        assemble(
            &["MATCH (", ") WHERE ", ".id = 1 RETURN "],
            &[entity(), entity(), entity()],
        )
    });
    assert!(result.is_err());
}

#[test]
fn test_two_fields_one_namespace() {
    let stmt = assemble(
        &["MATCH (n) WHERE n.id = ", " AND n.name = ", " RETURN n"],
        &[field("props", "id", 1), field("props", "name", "x")],
    )
    .unwrap();
    assert_eq!(stmt.parameters().len(), 1);
    let props = &stmt.parameters()["props"];
    assert_eq!(props.get("id"), Some(&Value::Int(1)));
    assert_eq!(props.get("name"), Some(&Value::from("x")));
}

#[test]
fn test_conflicting_values_fail() {
    let err = assemble(
        &["", ",", ""],
        &[field("props", "id", 1), field("props", "id", 2)],
    )
    .unwrap_err();
    assert_eq!(
        err,
        TemplateError::ParameterNamespaceConflict {
            namespace: "props".to_string(),
            key: "id".to_string()
        }
    );
}

#[test]
fn test_distinct_namespaces_do_not_interact() {
    let stmt = assemble(
        &["", ",", ""],
        &[field("a", "id", 1), field("b", "id", 2)],
    )
    .unwrap();
    assert_eq!(stmt.namespaces().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_redeclaration_is_idempotent() {
    let stmt = assemble(
        &["", " ", ""],
        &[field("props", "id", 1), field("props", "id", 1)],
    )
    .unwrap();
    assert_eq!(stmt.parameters()["props"].len(), 1);
}

#[test]
fn test_nested_statement_embedding() {
    let inner = assemble(&["n.x = ", ""], &[field("inner", "x", 1)]).unwrap();
    let outer = assemble(
        &["MATCH (n) WHERE ", " RETURN n"],
        &[Fragment::from(inner.clone())],
    )
    .unwrap();

    assert_eq!(outer.parameters()["inner"], Props::new().with("x", 1));
    assert!(outer.template().contains(inner.template()));
    assert_eq!(outer.template(), "MATCH (n) WHERE n.x = {inner}.x RETURN n");
}

#[test]
fn test_deeply_nested_statements_flatten() {
    let level0 = assemble(&["", ""], &[field("l0", "v", 0)]).unwrap();
    let level1 = assemble(
        &["(", " OR ", ")"],
        &[Fragment::from(level0), field("l1", "v", 1)],
    )
    .unwrap();
    let level2 = assemble(
        &["WHERE ", " AND ", ""],
        &[Fragment::from(level1), field("l2", "v", 2)],
    )
    .unwrap();

    assert_eq!(level2.template(), "WHERE ({l0}.v OR {l1}.v) AND {l2}.v");
    assert_eq!(
        level2.namespaces().collect::<Vec<_>>(),
        vec!["l0", "l1", "l2"]
    );
}

#[test]
fn test_same_nested_statement_twice() {
    let inner = assemble(&["n.x = ", ""], &[field("inner", "x", 1)]).unwrap();
    let outer = assemble(
        &["", " OR ", ""],
        &[Fragment::from(inner.clone()), Fragment::from(inner)],
    )
    .unwrap();
    assert_eq!(outer.parameters()["inner"].len(), 1);
}

#[test]
fn test_object_then_field_merge() {
    let ns = Namespace::new("props").unwrap();
    let obj = Fragment::from(ns.object(Props::new().with("id", 7).with("name", "n")));
    let stmt = assemble(
        &["MERGE (n:Thing {id: ", "}) SET n += ", ""],
        &[field("props", "id", 7), obj],
    )
    .unwrap();
    assert_eq!(
        stmt.template(),
        "MERGE (n:Thing {id: {props}.id}) SET n += { props }"
    );
    assert_eq!(
        stmt.parameters()["props"].keys().collect::<Vec<_>>(),
        vec!["id", "name"]
    );
}

#[test]
fn test_values_never_inlined() {
    let hostile = "'}) DETACH DELETE n //";
    let stmt = assemble(
        &["MATCH (n) WHERE n.name = ", " RETURN n"],
        &[field("props", "name", hostile)],
    )
    .unwrap();
    assert!(!stmt.template().contains(hostile));
    assert_eq!(
        stmt.parameters()["props"].get("name").and_then(Value::as_str),
        Some(hostile)
    );
}

#[test]
fn test_include_stats_from_config() {
    let assembler = Assembler::new(AssemblerConfig::builder().include_stats(true).build());
    let stmt = assembler.assemble(&["RETURN 1"], &[]).unwrap();
    assert!(stmt.include_stats());
    assert!(!assemble(&["RETURN 1"], &[]).unwrap().include_stats());
}

#[test]
fn test_dollar_syntax_end_to_end() {
    let config = AssemblerConfig::builder()
        .parameter_syntax(ParameterSyntax::Dollar)
        .build();
    let ns = Namespace::new("row").unwrap();
    let stmt = StatementBuilder::with_config(config)
        .text("CREATE (n ")
        .object(&ns, Props::new().with("id", 1))
        .text(") SET n.seen = ")
        .field(&ns, "id", 1)
        .build()
        .unwrap();
    assert_eq!(stmt.template(), "CREATE (n $row) SET n.seen = $row.id");
}

#[test]
fn test_nested_statement_must_share_placeholder_syntax() {
    let dollar = AssemblerConfig::new().with_dollar_parameters();
    let inner = Assembler::new(dollar)
        .assemble(&["n.x = ", ""], &[field("inner", "x", 1)])
        .unwrap();
    let result = assemble(
        &["WHERE ", " AND n.y = ", ""],
        &[Fragment::from(inner), field("outer", "y", 2)],
    );
    assert_eq!(
        result,
        Err(TemplateError::ParameterSyntaxMismatch {
            expected: ParameterSyntax::Braces,
            found: ParameterSyntax::Dollar,
        })
    );
}

#[test]
fn test_allocator_namespaces_never_collide() {
    let alloc = NamespaceAllocator::default();
    let cache = LabelCache::new();
    let mut builder = StatementBuilder::new().text("UNWIND [");
    for i in 0..3 {
        if i > 0 {
            builder = builder.text(", ");
        }
        let ns = alloc.allocate();
        builder = builder.field(&ns, "id", i);
    }
    let stmt = builder
        .text("] AS id MERGE (n")
        .label_in(&cache, "Item")
        .text(" {id: id})")
        .build()
        .unwrap();
    assert_eq!(
        stmt.template(),
        "UNWIND [{p0}.id, {p1}.id, {p2}.id] AS id MERGE (n:Item {id: id})"
    );
    assert_eq!(stmt.parameters().len(), 3);
}

#[test]
fn test_template_length_guard() {
    let assembler = Assembler::new(AssemblerConfig::new().with_max_template_length(16));
    let err = assembler
        .assemble(&["MATCH (", ") RETURN ", ""], &[entity(), entity()])
        .unwrap_err();
    assert!(matches!(err, TemplateError::TemplateLengthExceeded { .. }));
}
