//! # graphstage
//!
//! An in-memory staging model for labeled graph entities, grouped by shape
//! so they can be written to a property-graph store in uniform batches.
//!
//! ## Core Principles
//!
//! - **Deterministic Shapes**: The same schema and input always produce the same keys
//! - **Fail Fast**: Entities outside the schema never reach a bucket
//! - **Zero Magic**: Explicit over implicit, always
//! - **Producer Agnostic**: Bring your own reader, we handle the grouping
//!
//! ## Architecture
//!
//! graphstage is organized in layers:
//!
//! ```text
//! Producers (readers, parsers)
//!     ↓
//! Subgraph (flat node/relationship arena)
//!     ↓
//! StructuredSubgraph (shape buckets, driven by MatchKeys)
//!     ↓
//! Sort keys and batch export (downstream writers)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use graphstage::{MatchKeys, Node, Properties, Relationship, StructuredSubgraph, Subgraph};
//!
//! let schema = MatchKeys::new()
//!     .with("User", ["name"])
//!     .with("Action", ["kind", "timestamp"]);
//!
//! let mut graph = Subgraph::new();
//! let user = graph.add_node(Node::new("User", Some(Properties::new().with("name", "john"))));
//! let action = graph.add_node(Node::new(
//!     "Action",
//!     Some(Properties::new().with("kind", "login").with("timestamp", 100)),
//! ));
//! graph.add_rel(Relationship::new("PERFORMED", user, action, None)).unwrap();
//!
//! let grouped = StructuredSubgraph::from_subgraph(&graph, &schema).unwrap();
//! assert_eq!(grouped.rel_keys(), vec!["PERFORMED,User,Action".to_string()]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;
pub mod helpers;
pub mod schema;
pub mod set;

// Re-export main types
pub use error::{GraphError, Result};
pub use graph::{
    create_node_sort_key, create_rel_sort_key, deserialize_node_key, deserialize_rel_key,
    IdentityMatch, Node, NodeBatch, NodeId, NodeShape, Properties, PropertyValue, RelBatch,
    RelId, RelShape, Relationship, SerializedRel, StructuredSubgraph, Subgraph,
};
pub use schema::{MatchKeys, MatchKeysProvider};
pub use set::Set;
