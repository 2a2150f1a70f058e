//! Shape-keyed grouping of a [`Subgraph`].
//!
//! Every entity filed here was matched against the schema at insertion
//! time. Entities that fail to match are rejected with the matching error
//! and leave the buckets untouched, so a bucket is always uniform.

use super::property::Properties;
use super::sort_key::{
    create_node_sort_key, create_rel_sort_key, deserialize_node_key, deserialize_rel_key,
};
use super::subgraph::Subgraph;
use super::types::{Node, NodeId, RelId, Relationship, SerializedRel};
use crate::error::Result;
use crate::helpers::flatten;
use crate::schema::{MatchKeys, MatchKeysProvider};
use log::{debug, info};
use serde::Serialize;
use std::collections::HashMap;

/// One node bucket, decoded for a writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeBatch<'g> {
    /// Bucket sort key
    pub key: String,
    /// Matched identity label shared by every row
    pub match_label: String,
    /// Full sorted label set shared by every row
    pub labels: Vec<String>,
    /// Serialized nodes, in insertion order
    pub rows: Vec<&'g Properties>,
}

/// One relationship bucket, decoded for a writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelBatch<'g> {
    /// Bucket sort key
    pub key: String,
    /// Relationship type shared by every row
    #[serde(rename = "type")]
    pub rel_type: String,
    /// Matched label of every start node
    pub start_label: String,
    /// Matched label of every end node
    pub end_label: String,
    /// Serialized relationships, in insertion order
    pub rows: Vec<SerializedRel<'g>>,
}

/// Nodes and relationships of a [`Subgraph`] partitioned by shape.
///
/// Buckets hold ids into the borrowed subgraph; nothing is copied.
pub struct StructuredSubgraph<'g, P: MatchKeysProvider + ?Sized = MatchKeys> {
    graph: &'g Subgraph,
    nodes: HashMap<String, Vec<NodeId>>,
    rels: HashMap<String, Vec<RelId>>,
    match_provider: &'g P,
}

impl<'g, P: MatchKeysProvider + ?Sized> StructuredSubgraph<'g, P> {
    /// Create an empty grouping over `graph`, matching with `match_provider`.
    pub fn new(graph: &'g Subgraph, match_provider: &'g P) -> Self {
        Self {
            graph,
            nodes: HashMap::new(),
            rels: HashMap::new(),
            match_provider,
        }
    }

    /// Group every node and relationship of `graph`.
    ///
    /// # Errors
    ///
    /// Returns the first matching error; see [`StructuredSubgraph::add_node`].
    pub fn from_subgraph(graph: &'g Subgraph, match_provider: &'g P) -> Result<Self> {
        let mut structured = Self::new(graph, match_provider);

        for node_id in 0..graph.node_count() {
            structured.add_node(node_id)?;
        }
        for rel_id in 0..graph.rel_count() {
            structured.add_rel(rel_id)?;
        }

        info!(
            "Grouped {} nodes into {} buckets and {} relationships into {} buckets",
            structured.node_count(),
            structured.nodes.len(),
            structured.rel_count(),
            structured.rels.len()
        );
        Ok(structured)
    }

    /// The subgraph being grouped.
    pub fn graph(&self) -> &'g Subgraph {
        self.graph
    }

    /// The schema used for matching.
    pub fn match_provider(&self) -> &'g P {
        self.match_provider
    }

    /// File a node under its shape key.
    ///
    /// # Errors
    ///
    /// - [`crate::GraphError::NodeNotFound`] if `id` is not in the subgraph.
    /// - [`crate::GraphError::UnrecognizedLabel`] or
    ///   [`crate::GraphError::MissingIdentityProperty`] if the node does not
    ///   match the schema. The node is not filed.
    pub fn add_node(&mut self, id: NodeId) -> Result<()> {
        let node = self.graph.get_node(id)?;
        let matched = node.match_props(self.match_provider)?;
        let key = create_node_sort_key(&matched.label, &node.labels.to_vec());

        Self::file(&mut self.nodes, key, id, "node");
        Ok(())
    }

    /// File a relationship under its shape key.
    ///
    /// Start and end nodes are matched independently.
    ///
    /// # Errors
    ///
    /// - [`crate::GraphError::RelationshipNotFound`] if `id` is not in the subgraph.
    /// - Any matching error of the start or end node. The relationship is
    ///   not filed.
    pub fn add_rel(&mut self, id: RelId) -> Result<()> {
        let rel = self.graph.get_rel(id)?;
        let start = self.graph.get_node(rel.start)?.match_props(self.match_provider)?;
        let end = self.graph.get_node(rel.end)?.match_props(self.match_provider)?;
        let key = create_rel_sort_key(&rel.rel_type, &start.label, &end.label);

        Self::file(&mut self.rels, key, id, "relationship");
        Ok(())
    }

    fn file(buckets: &mut HashMap<String, Vec<usize>>, key: String, id: usize, kind: &str) {
        let bucket = buckets.entry(key).or_insert_with_key(|key| {
            debug!("Opening {kind} bucket {key}");
            Vec::new()
        });
        bucket.push(id);
        debug!("Filed {kind} {id} ({} in bucket)", bucket.len());
    }

    /// Node ids filed under `key`; empty if the key is unknown.
    pub fn get_nodes(&self, key: &str) -> &[NodeId] {
        self.nodes.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Relationship ids filed under `key`; empty if the key is unknown.
    pub fn get_rels(&self, key: &str) -> &[RelId] {
        self.rels.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes filed under `key`, resolved against the subgraph.
    pub fn nodes_for(&self, key: &str) -> Vec<&'g Node> {
        let graph = self.graph;
        self.get_nodes(key)
            .iter()
            .filter_map(|id| graph.get_node(*id).ok())
            .collect()
    }

    /// Relationships filed under `key`, resolved against the subgraph.
    pub fn rels_for(&self, key: &str) -> Vec<&'g Relationship> {
        let graph = self.graph;
        self.get_rels(key)
            .iter()
            .filter_map(|id| graph.get_rel(*id).ok())
            .collect()
    }

    /// Total number of filed nodes across all buckets.
    pub fn node_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }

    /// Total number of filed relationships across all buckets.
    pub fn rel_count(&self) -> usize {
        self.rels.values().map(Vec::len).sum()
    }

    /// Populated node bucket keys, sorted.
    pub fn node_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.nodes.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Populated relationship bucket keys, sorted.
    pub fn rel_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.rels.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Every filed node id, across buckets in unspecified order.
    pub fn all_node_ids(&self) -> Vec<NodeId> {
        flatten(&self.nodes)
    }

    /// Every filed relationship id, across buckets in unspecified order.
    pub fn all_rel_ids(&self) -> Vec<RelId> {
        flatten(&self.rels)
    }

    /// Node buckets decoded into batches, in sorted key order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidNodeKey`] if a key cannot be decoded.
    pub fn node_batches(&self) -> Result<Vec<NodeBatch<'g>>> {
        self.node_keys()
            .into_iter()
            .map(|key| -> Result<NodeBatch<'g>> {
                let (match_label, labels) = deserialize_node_key(&key)?;
                let rows = self
                    .nodes_for(&key)
                    .into_iter()
                    .map(Node::serialize)
                    .collect();
                Ok(NodeBatch {
                    key,
                    match_label,
                    labels,
                    rows,
                })
            })
            .collect()
    }

    /// Relationship buckets decoded into batches, in sorted key order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidRelKey`] for an undecodable key,
    /// or [`crate::GraphError::NodeNotFound`] for a dangling endpoint.
    pub fn rel_batches(&self) -> Result<Vec<RelBatch<'g>>> {
        let graph = self.graph;
        self.rel_keys()
            .into_iter()
            .map(|key| -> Result<RelBatch<'g>> {
                let (rel_type, start_label, end_label) = deserialize_rel_key(&key)?;
                let rows = self
                    .rels_for(&key)
                    .into_iter()
                    .map(|rel| rel.serialize(graph))
                    .collect::<Result<Vec<_>>>()?;
                Ok(RelBatch {
                    key,
                    rel_type,
                    start_label,
                    end_label,
                    rows,
                })
            })
            .collect()
    }
}

impl<P: MatchKeysProvider + ?Sized> std::fmt::Debug for StructuredSubgraph<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructuredSubgraph")
            .field("nodes", &self.nodes)
            .field("rels", &self.rels)
            .finish_non_exhaustive()
    }
}
