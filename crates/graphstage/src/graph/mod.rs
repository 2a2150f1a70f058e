//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`]: Labeled entities with a property bag
//! - [`Relationship`]: Directed, typed links between nodes
//! - [`Subgraph`]: The flat node/relationship arena
//! - [`StructuredSubgraph`]: The arena grouped into shape buckets

mod property;
mod sort_key;
mod structured;
mod subgraph;
mod types;

pub use property::{Properties, PropertyValue};
pub use sort_key::{
    create_node_sort_key, create_rel_sort_key, deserialize_node_key, deserialize_rel_key,
    NodeShape, RelShape,
};
pub use structured::{NodeBatch, RelBatch, StructuredSubgraph};
pub use subgraph::Subgraph;
pub use types::{IdentityMatch, Node, NodeId, RelId, Relationship, SerializedRel};
