//! Unit tests for the generic Set.

use graphstage::Set;

#[test]
fn test_set_display() {
    let set = Set::from_items(["apple", "banana", "carrot"]);
    assert_eq!(format!("{set}"), "Set{apple banana carrot}");
}

#[test]
fn test_new_set_contains_items() {
    let set = Set::from_items([1, 2, 3]);
    for item in [1, 2, 3] {
        assert!(set.contains(&item), "expected {item} in {set}");
    }
}

#[test]
fn test_set_add() {
    let mut set = Set::new();
    set.add(5);
    assert!(set.contains(&5));
}

#[test]
fn test_set_remove() {
    let mut set = Set::from_items([1, 2, 3]);
    assert!(set.remove(&2));
    assert!(!set.contains(&2));
    assert!(!set.remove(&2));
}

#[test]
fn test_contains_non_existing_item() {
    let set: Set<i32> = Set::new();
    assert!(!set.contains(&5));
    assert!(set.is_empty());
}

#[test]
fn test_to_vec() {
    let set = Set::from_items([1, 2, 3]);
    let mut items = set.to_vec();
    items.sort();
    assert_eq!(items, vec![1, 2, 3]);
}

#[test]
fn test_set_from_vec_round_trip() {
    let set = Set::from_items([1, 2, 3]);
    let copy = Set::from(set.to_vec());
    assert_eq!(copy, set);
}

#[test]
fn test_duplicates_collapse() {
    let set = Set::from_items(["User", "User", "Admin"]);
    assert_eq!(set.len(), 2);
    assert_eq!(set.sorted(), vec!["Admin", "User"]);
}

#[test]
fn test_set_json_is_a_list() {
    let set = Set::from_items(["User".to_string()]);
    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(json, serde_json::json!(["User"]));
}
