//! Basic usage example for graphstage
//!
//! This example demonstrates:
//! - Building a match key schema
//! - Adding nodes and relationships to a subgraph
//! - Grouping them by shape and exporting the batches

use graphstage::export::export_batches_json;
use graphstage::{MatchKeys, Node, Properties, Relationship, StructuredSubgraph, Subgraph};

fn main() -> graphstage::Result<()> {
    let schema = MatchKeys::new()
        .with("User", ["name"])
        .with("Action", ["kind", "timestamp"]);

    println!("Staging a small activity graph...\n");

    let mut graph = Subgraph::new();
    let john = graph.add_node(Node::new(
        "User",
        Some(Properties::new().with("name", "john").with("role", "admin")),
    ));
    let jane = graph.add_node(Node::with_labels(
        ["User", "InactiveUser"],
        Some(Properties::new().with("name", "jane")),
    ));
    println!("✓ Added users (IDs: {john}, {jane})");

    let login = graph.add_node(Node::new(
        "Action",
        Some(Properties::new().with("kind", "login").with("timestamp", 100)),
    ));
    let logout = graph.add_node(Node::new(
        "Action",
        Some(Properties::new().with("kind", "logout").with("timestamp", 200)),
    ));
    println!("✓ Added actions (IDs: {login}, {logout})");

    graph.add_rel(Relationship::new("PERFORMED", john, login, None))?;
    graph.add_rel(Relationship::new("PERFORMED", jane, logout, None))?;
    println!("✓ Added {} relationships\n", graph.rel_count());

    let structured = StructuredSubgraph::from_subgraph(&graph, &schema)?;
    for key in structured.node_keys() {
        println!("Node batch {key}: {} rows", structured.get_nodes(&key).len());
    }
    for key in structured.rel_keys() {
        println!("Relationship batch {key}: {} rows", structured.get_rels(&key).len());
    }

    println!("\n{}", export_batches_json(&structured)?);
    Ok(())
}
