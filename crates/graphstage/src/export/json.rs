//! JSON export of shape batches.
//!
//! Generates a document with "nodes" and "relationships" arrays, one entry
//! per bucket in sorted key order:
//!
//! ```json
//! {
//!   "nodes": [
//!     { "key": "User:User", "match_label": "User", "labels": ["User"], "rows": [{ "name": "john" }] }
//!   ],
//!   "relationships": [
//!     { "key": "PERFORMED,User,Action", "type": "PERFORMED", "start_label": "User",
//!       "end_label": "Action", "rows": [{ "props": {}, "start": {...}, "end": {...} }] }
//!   ]
//! }
//! ```

use crate::error::{GraphError, Result};
use crate::graph::StructuredSubgraph;
use crate::schema::MatchKeysProvider;
use log::debug;
use serde_json::{json, Value};

/// Export every batch of a grouped subgraph as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if encoding fails, or any error
/// from decoding the batches.
pub fn export_batches_json<P>(structured: &StructuredSubgraph<'_, P>) -> Result<String>
where
    P: MatchKeysProvider + ?Sized,
{
    let node_batches = structured.node_batches()?;
    let rel_batches = structured.rel_batches()?;
    debug!(
        "Exporting {} node batches and {} relationship batches",
        node_batches.len(),
        rel_batches.len()
    );

    let document = json!({
        "nodes": to_value(&node_batches)?,
        "relationships": to_value(&rel_batches)?,
    });

    serde_json::to_string_pretty(&document)
        .map_err(|e| GraphError::serialization("Failed to encode batch document", Some(e)))
}

/// Export the node batch stored under `key`, or `None` if the key is unknown.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if encoding fails.
pub fn export_node_batch_json<P>(
    structured: &StructuredSubgraph<'_, P>,
    key: &str,
) -> Result<Option<Value>>
where
    P: MatchKeysProvider + ?Sized,
{
    structured
        .node_batches()?
        .into_iter()
        .find(|batch| batch.key == key)
        .map(|batch| to_value(&batch))
        .transpose()
}

/// Export the relationship batch stored under `key`, or `None` if the key
/// is unknown.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if encoding fails.
pub fn export_rel_batch_json<P>(
    structured: &StructuredSubgraph<'_, P>,
    key: &str,
) -> Result<Option<Value>>
where
    P: MatchKeysProvider + ?Sized,
{
    structured
        .rel_batches()?
        .into_iter()
        .find(|batch| batch.key == key)
        .map(|batch| to_value(&batch))
        .transpose()
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|e| GraphError::serialization("Failed to encode batch", Some(e)))
}
