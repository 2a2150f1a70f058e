//! Small collection helpers shared by the grouping layer.

use std::collections::HashMap;
use std::hash::Hash;

/// Concatenate every bucket of `mapping` into one vector.
///
/// Bucket order follows the map's iteration order, which is unspecified;
/// order within a bucket is preserved.
pub fn flatten<K, V>(mapping: &HashMap<K, Vec<V>>) -> Vec<V>
where
    K: Eq + Hash,
    V: Clone,
{
    mapping.values().flatten().cloned().collect()
}
