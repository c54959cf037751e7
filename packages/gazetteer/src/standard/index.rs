//! Secondary name indices.

use std::collections::{BTreeSet, HashMap};

use super::PlaceId;
use crate::place::Place;
use crate::standardize::standardize;

/// Map from name key to the places carrying that name.
#[derive(Debug, Default)]
pub(crate) struct NameIndex {
    entries: HashMap<String, BTreeSet<PlaceId>>,
}

impl NameIndex {
    /// Register `name` for `id`. Blank names are not indexed.
    pub(crate) fn insert(&mut self, name: &str, id: PlaceId) {
        if name.trim().is_empty() {
            return;
        }
        self.entries.entry(standardize(name)).or_default().insert(id);
    }

    /// Deregister `name` for `id`, dropping the key once no place uses it.
    pub(crate) fn remove(&mut self, name: &str, id: PlaceId) {
        if name.trim().is_empty() {
            return;
        }
        let key = standardize(name);
        if let Some(ids) = self.entries.get_mut(&key) {
            ids.remove(&id);
            if ids.is_empty() {
                self.entries.remove(&key);
            }
        }
    }

    /// Places whose name standardizes to the same key as `name`.
    pub(crate) fn get(&self, name: &str) -> impl Iterator<Item = PlaceId> + '_ {
        self.entries
            .get(&standardize(name))
            .into_iter()
            .flat_map(|ids| ids.iter().copied())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

/// The preferred and variant name indices, built together or not at all.
#[derive(Debug, Default)]
pub(crate) struct NameIndices {
    pub(crate) preferred: NameIndex,
    pub(crate) variant: NameIndex,
}

impl NameIndices {
    /// Register every indexed name of `place`.
    pub(crate) fn register(&mut self, place: &Place, id: PlaceId) {
        self.preferred.insert(place.preferred_name(), id);
        for variant in place.variant_names() {
            self.variant.insert(&variant.name, id);
        }
    }

    /// Deregister every indexed name of `place`.
    pub(crate) fn deregister(&mut self, place: &Place, id: PlaceId) {
        self.preferred.remove(place.preferred_name(), id);
        for variant in place.variant_names() {
            self.variant.remove(&variant.name, id);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.preferred.clear();
        self.variant.clear();
    }
}
