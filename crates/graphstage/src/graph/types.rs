//! Core graph types: nodes, relationships and their identifiers.

use super::property::{Properties, PropertyValue};
use super::subgraph::Subgraph;
use crate::error::{GraphError, Result};
use crate::schema::MatchKeysProvider;
use crate::set::Set;
use log::trace;
use serde::{Deserialize, Serialize};

/// Index of a node in its [`Subgraph`] (dense, monotonic).
pub type NodeId = usize;

/// Index of a relationship in its [`Subgraph`] (dense, monotonic).
pub type RelId = usize;

/// Result of matching a node against a [`MatchKeysProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityMatch {
    /// Label chosen as authoritative for identity
    pub label: String,
    /// Only the identity properties of that label, copied from the node
    pub props: Properties,
}

/// A labeled node.
///
/// Labels are carried in shape keys; the node's serialized form is its
/// property bag alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// All labels of the node
    pub labels: Set<String>,
    /// Property bag (never absent, possibly empty)
    pub props: Properties,
}

impl Node {
    /// Create a node with a single label.
    ///
    /// `None` properties become an empty bag.
    pub fn new(label: impl Into<String>, props: Option<Properties>) -> Self {
        let label: String = label.into();
        Self::with_labels([label], props)
    }

    /// Create a node with any number of labels.
    pub fn with_labels<I, S>(labels: I, props: Option<Properties>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            props: props.unwrap_or_default(),
        }
    }

    /// Check if the node carries `label`.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains_str(label)
    }

    /// All labels, sorted lexicographically.
    pub fn sorted_labels(&self) -> Vec<String> {
        self.labels.sorted()
    }

    /// Add or update a property.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.props.insert(key, value);
    }

    /// Get a property value.
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.props.get(key)
    }

    /// Resolve the node's identity label and identity properties.
    ///
    /// The matched label is the first of `provider.labels()` that the node
    /// carries, so the provider's order decides between several configured
    /// labels. Only that label's identity keys are copied.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnrecognizedLabel`] if no label of the node is configured.
    /// - [`GraphError::MissingIdentityProperty`] if any identity key of the
    ///   matched label is absent. No partial bag is returned.
    pub fn match_props<P>(&self, provider: &P) -> Result<IdentityMatch>
    where
        P: MatchKeysProvider + ?Sized,
    {
        let label = provider
            .labels()
            .into_iter()
            .find(|label| self.labels.contains_str(label))
            .ok_or_else(|| GraphError::UnrecognizedLabel {
                labels: self.labels.to_string(),
            })?;

        let keys = provider.keys(&label).unwrap_or_default();
        trace!("Node {} matched label {label} with keys {keys:?}", self.labels);

        let missing = self.props.missing_keys(keys);
        if !missing.is_empty() {
            return Err(GraphError::MissingIdentityProperty {
                label,
                keys: missing,
            });
        }

        Ok(IdentityMatch {
            props: self.props.restrict(keys),
            label,
        })
    }

    /// Serialized form of the node: its property bag, unchanged.
    pub fn serialize(&self) -> &Properties {
        &self.props
    }
}

/// A directed, typed relationship between two nodes of a [`Subgraph`].
///
/// Endpoints are indices into the owning subgraph, never owned copies, so
/// cycles are fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Relationship type (e.g. "PERFORMED")
    pub rel_type: String,
    /// Start node
    pub start: NodeId,
    /// End node
    pub end: NodeId,
    /// Property bag (never absent, possibly empty)
    pub props: Properties,
}

impl Relationship {
    /// Create a relationship. `None` properties become an empty bag.
    pub fn new(
        rel_type: impl Into<String>,
        start: NodeId,
        end: NodeId,
        props: Option<Properties>,
    ) -> Self {
        Self {
            rel_type: rel_type.into(),
            start,
            end,
            props: props.unwrap_or_default(),
        }
    }

    /// Add or update a property.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.props.insert(key, value);
    }

    /// Get a property value.
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.props.get(key)
    }

    /// Serialized view of the relationship with its endpoints' properties.
    ///
    /// The view borrows from `graph`; it is not a copy.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if an endpoint is not in `graph`.
    pub fn serialize<'g>(&'g self, graph: &'g Subgraph) -> Result<SerializedRel<'g>> {
        Ok(SerializedRel {
            props: &self.props,
            start: graph.get_node(self.start)?.serialize(),
            end: graph.get_node(self.end)?.serialize(),
        })
    }
}

/// Serialized relationship: exactly the keys `props`, `start` and `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SerializedRel<'g> {
    /// The relationship's own properties
    pub props: &'g Properties,
    /// The start node's properties
    pub start: &'g Properties,
    /// The end node's properties
    pub end: &'g Properties,
}
