//! Sorted entry collections with an explicit deduplication key.

use std::fmt;

/// An entry that can be stored in a [`SortedEntries`] collection.
///
/// The key is both the ordering and the identity of the entry: two entries
/// with equal keys are the same entry. Keys must therefore cover every field
/// that distinguishes entries (a variant name keys on name *and* source).
pub trait Entry {
    /// Ordering and identity key.
    type Key: Ord;

    /// Compute the key for this entry.
    fn key(&self) -> Self::Key;
}

/// A sequence kept sorted and unique by [`Entry::key`].
///
/// Starts empty without allocating, so the many places that never receive
/// an entry of a given kind cost nothing beyond the empty vector.
#[derive(Clone, PartialEq)]
pub struct SortedEntries<T> {
    items: Vec<T>,
}

impl<T: Entry> SortedEntries<T> {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Insert an entry at its sorted position.
    ///
    /// Returns `false` (and keeps the existing entry) when an entry with the
    /// same key is already present.
    pub fn insert(&mut self, entry: T) -> bool {
        let key = entry.key();
        match self.items.binary_search_by(|e| e.key().cmp(&key)) {
            Ok(_) => false,
            Err(pos) => {
                self.items.insert(pos, entry);
                true
            }
        }
    }

    /// Check whether an entry with this entry's key is present.
    #[must_use]
    pub fn contains(&self, entry: &T) -> bool {
        let key = entry.key();
        self.items.binary_search_by(|e| e.key().cmp(&key)).is_ok()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the entries in key order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Entry> Default for SortedEntries<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedEntries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<'a, T: Entry> IntoIterator for &'a SortedEntries<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
