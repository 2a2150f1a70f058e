//! Generic unordered set with a deterministic rendering.
//!
//! Used for node label sets. Iteration order is unspecified; [`Set::sorted`]
//! and the [`Display`](std::fmt::Display) impl give stable output.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Unordered collection of unique values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(
        serialize = "T: Serialize + Eq + Hash",
        deserialize = "T: Deserialize<'de> + Eq + Hash"
    )
)]
pub struct Set<T> {
    inner: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self {
            inner: HashSet::new(),
        }
    }

    /// Create a set from any collection of items, dropping duplicates.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        items.into_iter().collect()
    }

    /// Add an item. Returns `false` if it was already present.
    pub fn add(&mut self, item: T) -> bool {
        self.inner.insert(item)
    }

    /// Remove an item. Returns `true` if it was present.
    pub fn remove(&mut self, item: &T) -> bool {
        self.inner.remove(item)
    }

    /// Check if an item is in the set.
    pub fn contains(&self, item: &T) -> bool {
        self.inner.contains(item)
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over the items in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.iter()
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Copy the items into a vector, in unspecified order.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.iter().cloned().collect()
    }
}

impl<T: Eq + Hash + Clone + Ord> Set<T> {
    /// Copy the items into a sorted vector.
    pub fn sorted(&self) -> Vec<T> {
        let mut items = self.to_vec();
        items.sort();
        items
    }
}

impl Set<String> {
    /// Membership test by string slice, without allocating.
    pub fn contains_str(&self, item: &str) -> bool {
        self.inner.contains(item)
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: HashSet::from_iter(iter),
        }
    }
}

impl<T: Eq + Hash> From<Vec<T>> for Set<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered: Vec<String> = self.inner.iter().map(|item| item.to_string()).collect();
        rendered.sort();
        write!(f, "Set{{{}}}", rendered.join(" "))
    }
}
