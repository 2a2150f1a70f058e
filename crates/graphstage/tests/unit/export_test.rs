//! Unit tests for JSON batch export.

use graphstage::export::{export_batches_json, export_rel_batch_json};
use graphstage::{MatchKeys, Node, Properties, Relationship, StructuredSubgraph, Subgraph};
use serde_json::{json, Value};

fn create_test_graph() -> Subgraph {
    let mut graph = Subgraph::new();
    let user = graph.add_node(Node::new(
        "User",
        Some(Properties::new().with("name", "john").with("role", "admin")),
    ));
    let inactive = graph.add_node(Node::with_labels(
        ["User", "InactiveUser"],
        Some(Properties::new().with("name", "jane")),
    ));
    let login = graph.add_node(Node::new(
        "Action",
        Some(Properties::new().with("kind", "login").with("timestamp", 100)),
    ));
    graph
        .add_rel(Relationship::new(
            "PERFORMED",
            user,
            login,
            Some(Properties::new().with("year", 2022)),
        ))
        .unwrap();
    graph
        .add_rel(Relationship::new("PERFORMED", inactive, login, None))
        .unwrap();
    graph
}

fn test_match_keys() -> MatchKeys {
    MatchKeys::new()
        .with("User", ["name"])
        .with("Action", ["kind", "timestamp"])
}

#[test]
fn test_export_batches_json() {
    let graph = create_test_graph();
    let match_keys = test_match_keys();
    let structured = StructuredSubgraph::from_subgraph(&graph, &match_keys).unwrap();

    let json = export_batches_json(&structured).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    let node_keys: Vec<&str> = value["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|batch| batch["key"].as_str().unwrap())
        .collect();
    assert_eq!(
        node_keys,
        vec!["Action:Action", "User:InactiveUser,User", "User:User"]
    );

    let inactive = &value["nodes"][1];
    assert_eq!(inactive["match_label"], "User");
    assert_eq!(inactive["labels"], json!(["InactiveUser", "User"]));
    assert_eq!(inactive["rows"], json!([{ "name": "jane" }]));

    let rels = value["relationships"].as_array().unwrap();
    assert_eq!(rels.len(), 1);
    assert_eq!(rels[0]["type"], "PERFORMED");
    assert_eq!(rels[0]["start_label"], "User");
    assert_eq!(rels[0]["end_label"], "Action");
    assert_eq!(rels[0]["rows"].as_array().unwrap().len(), 2);
}

#[test]
fn test_export_rel_batch_rows() {
    let graph = create_test_graph();
    let match_keys = test_match_keys();
    let structured = StructuredSubgraph::from_subgraph(&graph, &match_keys).unwrap();

    let batch = export_rel_batch_json(&structured, "PERFORMED,User,Action")
        .unwrap()
        .unwrap();

    assert_eq!(
        batch["rows"][0],
        json!({
            "props": { "year": 2022 },
            "start": { "name": "john", "role": "admin" },
            "end": { "kind": "login", "timestamp": 100 },
        })
    );
    assert_eq!(batch["rows"][1]["props"], json!({}));
}

#[test]
fn test_export_is_deterministic() {
    let graph = create_test_graph();
    let match_keys = test_match_keys();

    let first = {
        let structured = StructuredSubgraph::from_subgraph(&graph, &match_keys).unwrap();
        serde_json::from_str::<Value>(&export_batches_json(&structured).unwrap()).unwrap()
    };
    let second = {
        let structured = StructuredSubgraph::from_subgraph(&graph, &match_keys).unwrap();
        serde_json::from_str::<Value>(&export_batches_json(&structured).unwrap()).unwrap()
    };

    assert_eq!(first, second);
}
