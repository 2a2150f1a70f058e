//! Unit tests for the shape key codec.

use graphstage::{
    create_node_sort_key, create_rel_sort_key, deserialize_node_key, deserialize_rel_key,
    GraphError, NodeShape, RelShape,
};

#[test]
fn test_create_node_sort_key() {
    let key = create_node_sort_key("User", &["User", "InactiveUser"]);
    assert_eq!(key, "User:InactiveUser,User");
}

#[test]
fn test_create_node_sort_key_single_label() {
    assert_eq!(create_node_sort_key("User", &["User"]), "User:User");
}

#[test]
fn test_create_rel_sort_key() {
    let key = create_rel_sort_key("PERFORMED", "User", "Action");
    assert_eq!(key, "PERFORMED,User,Action");
}

#[test]
fn test_deserialize_node_key() {
    let (match_label, labels) = deserialize_node_key("User:InactiveUser,User").unwrap();
    assert_eq!(match_label, "User");
    assert_eq!(labels, vec!["InactiveUser", "User"]);
}

#[test]
fn test_deserialize_node_key_invalid() {
    let result = deserialize_node_key("InvalidKey");
    assert!(matches!(result, Err(GraphError::InvalidNodeKey { ref key }) if key == "InvalidKey"));
}

#[test]
fn test_deserialize_rel_key() {
    let (rel_type, start_label, end_label) = deserialize_rel_key("PERFORMED,User,Action").unwrap();
    assert_eq!(rel_type, "PERFORMED");
    assert_eq!(start_label, "User");
    assert_eq!(end_label, "Action");
}

#[test]
fn test_deserialize_rel_key_invalid() {
    let result = deserialize_rel_key("InvalidKey");
    assert!(matches!(result, Err(GraphError::InvalidRelKey { ref key }) if key == "InvalidKey"));
}

#[test]
fn test_node_key_inverse() {
    let cases: [(&str, &[&str]); 3] = [
        ("User", &["User"]),
        ("User", &["User", "InactiveUser", "Admin"]),
        ("Action", &["Event", "Action"]),
    ];

    for (match_label, labels) in cases {
        let key = create_node_sort_key(match_label, labels);
        let (decoded_label, decoded_labels) = deserialize_node_key(&key).unwrap();

        let mut expected: Vec<&str> = labels.to_vec();
        expected.sort();
        assert_eq!(decoded_label, match_label);
        assert_eq!(decoded_labels, expected);
    }
}

#[test]
fn test_rel_key_inverse() {
    let key = create_rel_sort_key("KNOWS", "User", "User");
    assert_eq!(
        deserialize_rel_key(&key).unwrap(),
        ("KNOWS".to_string(), "User".to_string(), "User".to_string())
    );
}

#[test]
fn test_rel_shape_parse_and_display() {
    let shape: RelShape = "PERFORMED,User,Action".parse().unwrap();
    assert_eq!(shape.rel_type, "PERFORMED");
    assert_eq!(shape.to_string(), "PERFORMED,User,Action");
    assert!("PERFORMED".parse::<RelShape>().is_err());
}

#[test]
fn test_node_shape_parse_invalid() {
    assert!("InvalidKey".parse::<NodeShape>().is_err());
}
