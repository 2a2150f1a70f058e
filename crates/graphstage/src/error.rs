//! Error types for graphstage operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use thiserror::Error;

/// Result type alias for graphstage operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Comprehensive error type for matching, grouping and key decoding.
///
/// Matching errors are recoverable by the caller of [`crate::Node::match_props`].
/// The grouping layer returns them unchanged and never files the entity.
#[derive(Error, Debug)]
pub enum GraphError {
    /// None of the entity's labels is configured in the schema
    #[error("Unrecognized labels {labels}: none is known to the match key schema")]
    UnrecognizedLabel {
        /// Rendering of the entity's label set
        labels: String,
    },

    /// The matched label requires properties the entity does not carry
    #[error("Missing identity properties {keys:?} for label '{label}'")]
    MissingIdentityProperty {
        /// Matched label
        label: String,
        /// Every identity key absent from the property bag
        keys: Vec<String>,
    },

    /// Node sort key without the label separator
    #[error("Invalid node sort key '{key}': expected '<label>:<label>,<label>...'")]
    InvalidNodeKey {
        /// Offending key
        key: String,
    },

    /// Relationship sort key without exactly three parts
    #[error("Invalid relationship sort key '{key}': expected '<type>,<start>,<end>'")]
    InvalidRelKey {
        /// Offending key
        key: String,
    },

    /// Node not found in the subgraph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// ID of the missing node
        node_id: String,
    },

    /// Relationship not found in the subgraph
    #[error("Relationship not found: {rel_id}")]
    RelationshipNotFound {
        /// ID of the missing relationship
        rel_id: String,
    },

    /// Match key schema could not be loaded
    #[error("Schema error: {message}")]
    Schema {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a schema error from a message and optional source.
    pub fn schema<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Schema {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Whether this error came from matching an entity against the schema.
    pub fn is_match_error(&self) -> bool {
        matches!(
            self,
            GraphError::UnrecognizedLabel { .. } | GraphError::MissingIdentityProperty { .. }
        )
    }
}
