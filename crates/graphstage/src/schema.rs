//! Identity-key schema: which properties identify an entity of each label.
//!
//! The [`MatchKeysProvider`] trait is the only thing the grouping layer
//! depends on; [`MatchKeys`] is the concrete, serde-loadable schema.
//!
//! ## Schema file format
//!
//! ```json
//! { "keys": { "User": ["name"], "Action": ["kind", "timestamp"] } }
//! ```
//!
//! A bare `{ "User": ["name"] }` mapping is accepted as well.

use crate::error::{GraphError, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Source of identity keys per label.
pub trait MatchKeysProvider {
    /// All configured labels, sorted lexicographically.
    ///
    /// Label resolution picks the first of these present on a node, so the
    /// order must be stable for a given schema.
    fn labels(&self) -> Vec<String>;

    /// Ordered identity keys for `label`, or `None` if it is not configured.
    fn keys(&self, label: &str) -> Option<&[String]>;
}

/// Concrete label to identity-key schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchKeys {
    /// Identity keys by label
    pub keys: BTreeMap<String, Vec<String>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaDocument {
    Wrapped { keys: BTreeMap<String, Vec<String>> },
    Bare(BTreeMap<String, Vec<String>>),
}

impl MatchKeys {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self {
            keys: BTreeMap::new(),
        }
    }

    /// Builder pattern: configure the identity keys of a label.
    pub fn with<I, S>(mut self, label: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(label, keys);
        self
    }

    /// Configure the identity keys of a label, replacing any previous entry.
    pub fn insert<I, S>(&mut self, label: impl Into<String>, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys
            .insert(label.into(), keys.into_iter().map(Into::into).collect());
    }

    /// Number of configured labels.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if no label is configured.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Parse a schema from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Schema`] if the document is not a label to
    /// key-list mapping.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: SchemaDocument = serde_json::from_str(json)
            .map_err(|e| GraphError::schema("Failed to parse match key schema", Some(e)))?;

        let keys = match document {
            SchemaDocument::Wrapped { keys } => keys,
            SchemaDocument::Bare(keys) => keys,
        };

        for (label, label_keys) in &keys {
            if label_keys.is_empty() {
                warn!("Label {label} has no identity keys; every {label} node will share one identity");
            }
        }

        Ok(Self { keys })
    }

    /// Load a schema from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Schema`] if the file cannot be read or parsed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading match key schema from {}", path.display());

        let json = std::fs::read_to_string(path).map_err(|e| {
            GraphError::schema(
                format!("Failed to read match key schema: {}", path.display()),
                Some(e),
            )
        })?;

        let schema = Self::from_json_str(&json)?;
        info!("Loaded {} labels from {}", schema.len(), path.display());
        Ok(schema)
    }
}

impl MatchKeysProvider for MatchKeys {
    fn labels(&self) -> Vec<String> {
        // BTreeMap iteration is already lexicographic
        self.keys.keys().cloned().collect()
    }

    fn keys(&self, label: &str) -> Option<&[String]> {
        self.keys.get(label).map(Vec::as_slice)
    }
}
