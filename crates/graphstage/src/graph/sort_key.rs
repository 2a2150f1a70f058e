//! Shape keys: bucket identifiers that also describe the shape.
//!
//! - Node: `<matched label>:<label>,<label>,...` with the full label set sorted.
//! - Relationship: `<type>,<start matched label>,<end matched label>`.
//!
//! Keys are self-describing, so a writer can recover the labels and types
//! of a bucket from its key alone.

use crate::error::{GraphError, Result};
use std::fmt;
use std::str::FromStr;

const LABEL_SEPARATOR: char = ':';
const LIST_SEPARATOR: char = ',';

/// Build the sort key of a node from its matched label and full label set.
pub fn create_node_sort_key<S: AsRef<str>>(match_label: &str, labels: &[S]) -> String {
    let mut sorted: Vec<&str> = labels.iter().map(AsRef::<str>::as_ref).collect();
    sorted.sort_unstable();
    format!("{match_label}{LABEL_SEPARATOR}{}", sorted.join(","))
}

/// Build the sort key of a relationship.
pub fn create_rel_sort_key(rel_type: &str, start_label: &str, end_label: &str) -> String {
    format!("{rel_type}{LIST_SEPARATOR}{start_label}{LIST_SEPARATOR}{end_label}")
}

/// Split a node sort key into its matched label and sorted labels.
///
/// # Errors
///
/// Returns [`GraphError::InvalidNodeKey`] if the key has no `:`.
pub fn deserialize_node_key(key: &str) -> Result<(String, Vec<String>)> {
    let (match_label, labels) = key
        .split_once(LABEL_SEPARATOR)
        .ok_or_else(|| GraphError::InvalidNodeKey {
            key: key.to_string(),
        })?;

    let labels: Vec<String> = labels.split(LIST_SEPARATOR).map(str::to_string).collect();

    Ok((match_label.to_string(), labels))
}

/// Split a relationship sort key into type, start label and end label.
///
/// # Errors
///
/// Returns [`GraphError::InvalidRelKey`] unless the key has exactly three
/// comma-separated parts.
pub fn deserialize_rel_key(key: &str) -> Result<(String, String, String)> {
    let parts: Vec<&str> = key.split(LIST_SEPARATOR).collect();
    match parts.as_slice() {
        [rel_type, start_label, end_label] => Ok((
            rel_type.to_string(),
            start_label.to_string(),
            end_label.to_string(),
        )),
        _ => Err(GraphError::InvalidRelKey {
            key: key.to_string(),
        }),
    }
}

/// Decoded node sort key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeShape {
    /// Matched identity label
    pub match_label: String,
    /// Full label set, sorted
    pub labels: Vec<String>,
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&create_node_sort_key(&self.match_label, &self.labels))
    }
}

impl FromStr for NodeShape {
    type Err = GraphError;

    fn from_str(key: &str) -> Result<Self> {
        let (match_label, labels) = deserialize_node_key(key)?;
        Ok(Self {
            match_label,
            labels,
        })
    }
}

/// Decoded relationship sort key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelShape {
    /// Relationship type
    pub rel_type: String,
    /// Matched label of the start node
    pub start_label: String,
    /// Matched label of the end node
    pub end_label: String,
}

impl fmt::Display for RelShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&create_rel_sort_key(
            &self.rel_type,
            &self.start_label,
            &self.end_label,
        ))
    }
}

impl FromStr for RelShape {
    type Err = GraphError;

    fn from_str(key: &str) -> Result<Self> {
        let (rel_type, start_label, end_label) = deserialize_rel_key(key)?;
        Ok(Self {
            rel_type,
            start_label,
            end_label,
        })
    }
}
