//! Unit tests for Relationship creation and serialization.

use graphstage::{GraphError, Node, Properties, Relationship, SerializedRel, Subgraph};

fn user_and_action(graph: &mut Subgraph) -> (usize, usize) {
    let user = graph.add_node(Node::new("User", Some(Properties::new().with("name", "john"))));
    let action = graph.add_node(Node::new(
        "Action",
        Some(Properties::new().with("kind", "login").with("timestamp", 100)),
    ));
    (user, action)
}

#[test]
fn test_new_relationship() {
    let mut graph = Subgraph::new();
    let (user, action) = user_and_action(&mut graph);

    let rel = Relationship::new(
        "PERFORMED",
        user,
        action,
        Some(Properties::new().with("year", 2022)),
    );

    assert_eq!(rel.rel_type, "PERFORMED");
    assert_eq!(rel.start, user);
    assert_eq!(rel.end, action);
    assert_eq!(rel.props.get_int("year"), Some(2022));
}

#[test]
fn test_new_relationship_without_props() {
    let rel = Relationship::new("PERFORMED", 0, 1, None);
    assert!(rel.props.is_empty());
}

#[test]
fn test_relationship_serialize() {
    let mut graph = Subgraph::new();
    let (user, action) = user_and_action(&mut graph);
    let props = Properties::new().with("year", 2022);
    let rel_id = graph
        .add_rel(Relationship::new("PERFORMED", user, action, Some(props.clone())))
        .unwrap();

    let serialized = graph.serialize_rel(rel_id).unwrap();

    let start_props = Properties::new().with("name", "john");
    let end_props = Properties::new().with("kind", "login").with("timestamp", 100);
    assert_eq!(
        serialized,
        SerializedRel {
            props: &props,
            start: &start_props,
            end: &end_props,
        }
    );
}

#[test]
fn test_relationship_serialize_json_keys() {
    let mut graph = Subgraph::new();
    let (user, action) = user_and_action(&mut graph);
    let rel_id = graph
        .add_rel(Relationship::new("PERFORMED", user, action, None))
        .unwrap();

    let json = serde_json::to_value(graph.serialize_rel(rel_id).unwrap()).unwrap();
    let object = json.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["end", "props", "start"]);
    assert_eq!(json["start"]["name"], "john");
    assert_eq!(json["end"]["timestamp"], 100);
}

#[test]
fn test_serialize_reflects_node_updates() {
    let mut graph = Subgraph::new();
    let (user, action) = user_and_action(&mut graph);
    let rel_id = graph
        .add_rel(Relationship::new("PERFORMED", user, action, None))
        .unwrap();

    graph.get_node_mut(user).unwrap().set_property("name", "johnny");

    let serialized = graph.serialize_rel(rel_id).unwrap();
    assert_eq!(serialized.start.get_string("name"), Some("johnny"));
}

#[test]
fn test_serialize_dangling_endpoint() {
    let mut graph = Subgraph::new();
    let (user, _) = user_and_action(&mut graph);

    // Not added to the graph, so the endpoint is never validated
    let rel = Relationship::new("PERFORMED", user, 42, None);
    assert!(matches!(
        rel.serialize(&graph),
        Err(GraphError::NodeNotFound { .. })
    ));
}
