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

//! End-to-end tests: assemble statements, encode the request, decode a reply.

use cypher_template::{
    Assembler, AssemblerConfig, Fragment, Identifier, Namespace, Props, StatementBuilder,
};
use cypher_template_rest::{
    encode_statement, RestError, StatementRequest, TransactionRequest, TransactionResponse,
};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_request_body_matches_wire_shape() {
    init_tracing();
    let props = Namespace::new("props").unwrap();
    let stmt = StatementBuilder::new()
        .text("CREATE (n")
        .label("Person")
        .text(" ")
        .object(&props, Props::new().with("name", "Alice").with("age", 30))
        .text(") RETURN n")
        .include_stats(true)
        .build()
        .unwrap();

    let body: serde_json::Value =
        serde_json::from_str(&encode_statement(&stmt).unwrap()).unwrap();
    assert_eq!(
        body,
        json!({
            "statements": [{
                "statement": "CREATE (n:Person { props }) RETURN n",
                "parameters": {"props": {"name": "Alice", "age": 30}},
                "includeStats": true
            }]
        })
    );
}

#[test]
fn test_nested_parameters_reach_the_wire() {
    init_tracing();
    let inner_ns = Namespace::new("inner").unwrap();
    let inner = StatementBuilder::new()
        .text("n.x = ")
        .field(&inner_ns, "x", 1)
        .build()
        .unwrap();
    let n = Fragment::from(Identifier::new("n").unwrap());
    let outer = Assembler::new(AssemblerConfig::default())
        .assemble(
            &["MATCH (", ") WHERE ", " RETURN ", ""],
            &[n.clone(), Fragment::from(inner), n],
        )
        .unwrap();

    let value = TransactionRequest::from_statements([&outer])
        .unwrap()
        .to_value()
        .unwrap();
    let first = &value["statements"][0];
    assert_eq!(first["statement"], json!("MATCH (n) WHERE n.x = {inner}.x RETURN n"));
    assert_eq!(first["parameters"], json!({"inner": {"x": 1}}));
    assert_eq!(first["includeStats"], json!(false));
}

#[test]
fn test_parameter_field_order_preserved_on_wire() {
    let props = Namespace::new("p").unwrap();
    let stmt = StatementBuilder::new()
        .text("RETURN ")
        .object(&props, Props::new().with("z", 1).with("a", 2).with("m", 3))
        .build()
        .unwrap();
    let json = StatementRequest::new(&stmt).unwrap().to_json().unwrap();
    assert!(json.contains(r#"{"p":{"z":1,"a":2,"m":3}}"#));
}

#[test]
fn test_non_finite_number_blocks_request() {
    let props = Namespace::new("p").unwrap();
    let stmt = StatementBuilder::new()
        .text("RETURN ")
        .field(&props, "score", f64::NEG_INFINITY)
        .build()
        .unwrap();
    assert!(matches!(
        TransactionRequest::from_statements([&stmt]),
        Err(RestError::NonFiniteNumber { .. })
    ));
}

#[test]
fn test_round_trip_with_stats_reply() {
    init_tracing();
    let reply = r#"{
        "results": [
            {"columns": ["n"], "data": [{"row": [{"name": "Alice"}]}],
             "stats": {"contains_updates": true, "nodes_created": 1, "labels_added": 1}},
            {"columns": ["count"], "data": [{"row": [42]}]}
        ],
        "errors": []
    }"#;
    let results = TransactionResponse::from_json(reply)
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].get(0, "n"), Some(&json!({"name": "Alice"})));
    assert_eq!(results[0].stats.as_ref().map(|s| s.labels_added), Some(1));
    assert_eq!(results[1].get(0, "count"), Some(&json!(42)));
    assert!(results[1].stats.is_none());
}

#[test]
fn test_server_error_surfaces() {
    let reply = r#"{"results": [], "errors": [
        {"code": "Neo.ClientError.Schema.ConstraintValidationFailed", "message": "already exists"},
        {"code": "Neo.ClientError.Other", "message": "second"}
    ]}"#;
    let err = TransactionResponse::from_json(reply)
        .unwrap()
        .into_result()
        .unwrap_err();
    assert!(err.to_string().contains("ConstraintValidationFailed"));
}
