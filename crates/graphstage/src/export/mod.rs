//! Export module for handing grouped batches to downstream writers.
//!
//! Supported formats:
//! - **JSON**: One document listing every node and relationship batch

pub mod json;

pub use json::{export_batches_json, export_node_batch_json, export_rel_batch_json};
