//! Flat, append-only arena of nodes and relationships.

use super::types::{Node, NodeId, RelId, Relationship, SerializedRel};
use crate::error::{GraphError, Result};
use log::{debug, trace};

/// Unstructured accumulator of nodes and relationships.
///
/// `Subgraph` owns its entities; ids are dense indices assigned on insertion
/// and never reused. Relationships refer to their endpoints by id, so
/// [`crate::StructuredSubgraph`] groups by borrowing a `Subgraph`.
#[derive(Debug, Clone, Default)]
pub struct Subgraph {
    nodes: Vec<Node>,
    rels: Vec<Relationship>,
}

impl Subgraph {
    /// Create an empty subgraph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            rels: Vec::new(),
        }
    }

    /// Append a node and return its id.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let node_id = self.nodes.len();
        trace!("Adding node: id={node_id}, labels={}", node.labels);
        self.nodes.push(node);
        node_id
    }

    /// Append a relationship and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the start or end node is not
    /// in this subgraph.
    pub fn add_rel(&mut self, rel: Relationship) -> Result<RelId> {
        debug!(
            "Adding relationship: start={}, end={}, type={}",
            rel.start, rel.end, rel.rel_type
        );
        // Verify nodes exist
        self.get_node(rel.start)?;
        self.get_node(rel.end)?;

        let rel_id = self.rels.len();
        self.rels.push(rel);
        Ok(rel_id)
    }

    /// Get a node by id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn get_node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or_else(|| GraphError::NodeNotFound {
            node_id: id.to_string(),
        })
    }

    /// Get a mutable reference to a node by id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn get_node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id).ok_or_else(|| GraphError::NodeNotFound {
            node_id: id.to_string(),
        })
    }

    /// Get a relationship by id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::RelationshipNotFound`] if it doesn't exist.
    pub fn get_rel(&self, id: RelId) -> Result<&Relationship> {
        self.rels.get(id).ok_or_else(|| GraphError::RelationshipNotFound {
            rel_id: id.to_string(),
        })
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All relationships, in insertion order.
    pub fn rels(&self) -> &[Relationship] {
        &self.rels
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of relationships.
    pub fn rel_count(&self) -> usize {
        self.rels.len()
    }

    /// Serialized view of a relationship.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::RelationshipNotFound`] for an unknown id.
    pub fn serialize_rel(&self, id: RelId) -> Result<SerializedRel<'_>> {
        self.get_rel(id)?.serialize(self)
    }
}
