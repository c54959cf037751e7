//! The place standard: the registry of all places.
//!
//! The registry owns every registered [`Place`] and the indices over them:
//! - a title index keyed by [`standardize_title`], one place per key
//! - optional preferred-name and variant-name indices keyed by
//!   [`standardize`](crate::standardize::standardize)
//! - a literal redirect table (see [`PlaceStandard::add_redirect`])
//!
//! Index keys of a registered place only change through the registry's own
//! mutation methods, which deregister the old value before registering the
//! new one, so the indices never go stale.
//!
//! # Example
//!
//! ```
//! use gazetteer::{Place, PlaceStandard};
//!
//! let mut standard = PlaceStandard::new(true);
//! standard.add_place(Place::new("France").with_preferred_name("France")).unwrap();
//! standard
//!     .add_place(
//!         Place::new("Paris, France")
//!             .with_preferred_name("Paris")
//!             .with_parent("France"),
//!     )
//!     .unwrap();
//!
//! assert_eq!(standard.get_full_name("paris,_france").as_deref(), Some("Paris, France"));
//! assert_eq!(standard.get_place_level("Paris, France"), Some(1));
//! ```

mod hierarchy;
mod index;
mod redirect;
mod validity;

pub use validity::Defect;

use std::collections::HashMap;
use std::fmt;

use crate::error::{GazetteerError, Result};
use crate::place::{Place, VariantName};
use crate::standardize::standardize_title;
use index::NameIndices;

/// Handle to a place registered in a [`PlaceStandard`].
///
/// Handles are never reused within one registry, so a handle to a removed
/// place stays dead until [`PlaceStandard::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceId(usize);

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Registry of places with title, name and redirect indices.
#[derive(Debug, Default)]
pub struct PlaceStandard {
    /// Arena of registered places. Removed places leave an empty slot.
    slots: Vec<Option<Place>>,
    titles: HashMap<String, PlaceId>,
    names: Option<NameIndices>,
    redirects: HashMap<String, String>,
}

impl PlaceStandard {
    /// Create an empty registry.
    ///
    /// With `index_names` false the preferred and variant name indices are
    /// never built, and name queries fail with
    /// [`GazetteerError::NamesNotIndexed`].
    #[must_use]
    pub fn new(index_names: bool) -> Self {
        Self {
            slots: Vec::new(),
            titles: HashMap::new(),
            names: index_names.then(NameIndices::default),
            redirects: HashMap::new(),
        }
    }

    /// Whether the name indices are built.
    #[must_use]
    pub fn indexes_names(&self) -> bool {
        self.names.is_some()
    }

    /// Register a place.
    ///
    /// Fails with [`GazetteerError::DuplicateTitle`] when another place is
    /// already registered under the same canonical title; the first
    /// registration stays in place. Parent and see-also references are not
    /// checked here, see [`PlaceStandard::check_validity`].
    pub fn add_place(&mut self, place: Place) -> Result<PlaceId> {
        let key = standardize_title(place.title());
        if let Some(&existing) = self.titles.get(&key) {
            tracing::warn!(
                title = %place.title(),
                existing = %existing,
                "Place title already registered, keeping the first registration"
            );
            return Err(GazetteerError::DuplicateTitle(place.title().to_string()));
        }

        let id = PlaceId(self.slots.len());
        self.titles.insert(key, id);
        if let Some(names) = &mut self.names {
            names.register(&place, id);
        }
        self.slots.push(Some(place));
        Ok(id)
    }

    /// Deregister a place and hand it back.
    ///
    /// The returned place keeps all its fields but is no longer reachable
    /// through any index.
    pub fn remove_place(&mut self, id: PlaceId) -> Result<Place> {
        let place = self
            .slots
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or_else(|| GazetteerError::UnknownPlace(id.to_string()))?;

        let key = standardize_title(place.title());
        if self.titles.get(&key) == Some(&id) {
            self.titles.remove(&key);
        }
        if let Some(names) = &mut self.names {
            names.deregister(&place, id);
        }
        Ok(place)
    }

    /// Remove every place and redirect. Name indexing stays as configured.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.titles.clear();
        self.redirects.clear();
        if let Some(names) = &mut self.names {
            names.clear();
        }
    }

    /// Look up a registered place by handle.
    #[must_use]
    pub fn get(&self, id: PlaceId) -> Option<&Place> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Mutable access to the fields of a place that are not index keys.
    ///
    /// Title, preferred name and variant names are changed through
    /// [`set_title`](Self::set_title),
    /// [`set_preferred_name`](Self::set_preferred_name) and
    /// [`add_variant_name`](Self::add_variant_name).
    pub fn place_mut(&mut self, id: PlaceId) -> Option<&mut Place> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn require_mut(&mut self, id: PlaceId) -> Result<&mut Place> {
        self.place_mut(id)
            .ok_or_else(|| GazetteerError::UnknownPlace(id.to_string()))
    }

    /// Rename a registered place.
    ///
    /// Fails with [`GazetteerError::DuplicateTitle`] if the new title
    /// canonicalizes onto a different registered place.
    pub fn set_title(&mut self, id: PlaceId, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        let new_key = standardize_title(&title);
        match self.titles.get(&new_key) {
            Some(&other) if other != id => {
                tracing::warn!(title = %title, existing = %other, "Rename collides with a registered place");
                return Err(GazetteerError::DuplicateTitle(title));
            }
            _ => {}
        }

        let place = self.require_mut(id)?;
        let old_title = place.replace_title(title);
        self.titles.remove(&standardize_title(&old_title));
        self.titles.insert(new_key, id);
        Ok(())
    }

    /// Change the preferred name of a registered place.
    pub fn set_preferred_name(&mut self, id: PlaceId, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let place = self.require_mut(id)?;
        let old_name = place.replace_preferred_name(name.clone());

        if let Some(names) = &mut self.names {
            names.preferred.remove(&old_name, id);
            names.preferred.insert(&name, id);
        }
        Ok(())
    }

    /// Add a variant name to a registered place.
    ///
    /// Returns `Ok(false)` when the place already carries this name from the
    /// same source.
    pub fn add_variant_name(
        &mut self,
        id: PlaceId,
        name: impl Into<String>,
        source: Option<String>,
    ) -> Result<bool> {
        let variant = VariantName::new(name, source);
        let name_key = variant.name.clone();
        let place = self.require_mut(id)?;
        if !place.insert_variant_name(variant) {
            return Ok(false);
        }
        if let Some(names) = &mut self.names {
            names.variant.insert(&name_key, id);
        }
        Ok(true)
    }

    /// Places whose preferred name shares a name key with `name`.
    pub fn get_places_with_pref_name(&self, name: &str) -> Result<Vec<&Place>> {
        let names = self.names.as_ref().ok_or(GazetteerError::NamesNotIndexed)?;
        Ok(names.preferred.get(name).filter_map(|id| self.get(id)).collect())
    }

    /// Places with a variant name sharing a name key with `name`.
    pub fn get_places_with_variant_name(&self, name: &str) -> Result<Vec<&Place>> {
        let names = self.names.as_ref().ok_or(GazetteerError::NamesNotIndexed)?;
        Ok(names.variant.get(name).filter_map(|id| self.get(id)).collect())
    }

    /// Registered places with their handles, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PlaceId, &Place)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|place| (PlaceId(i), place)))
    }

    /// Registered places in registration order.
    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.slots.iter().flatten()
    }

    /// Number of registered places.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(places: &[&Place]) -> Vec<String> {
        places.iter().map(|p| p.title().to_string()).collect()
    }

    #[test]
    fn test_add_and_get_place() {
        let mut standard = PlaceStandard::new(false);
        let id = standard.add_place(Place::new("New York")).unwrap();

        assert_eq!(standard.get(id).map(Place::title), Some("New York"));
        assert_eq!(standard.get_place("new_york").map(Place::title), Some("New York"));
        assert_eq!(standard.len(), 1);
    }

    #[test]
    fn test_duplicate_title_is_rejected() {
        let mut standard = PlaceStandard::new(true);
        standard
            .add_place(Place::new("Paris, France").with_preferred_name("Paris"))
            .unwrap();

        let result = standard.add_place(Place::new("paris,_france").with_preferred_name("Lutèce"));
        assert!(matches!(result, Err(GazetteerError::DuplicateTitle(_))));

        let kept = standard.get_place("Paris, France").unwrap();
        assert_eq!(kept.preferred_name(), "Paris");
        assert_eq!(standard.get_places_with_pref_name("Lutèce").unwrap().len(), 0);
        assert_eq!(standard.len(), 1);
    }

    #[test]
    fn test_remove_place_unindexes() {
        let mut standard = PlaceStandard::new(true);
        let id = standard
            .add_place(
                Place::new("Paris, France")
                    .with_preferred_name("Paris")
                    .with_variant_name("Lutetia", None),
            )
            .unwrap();

        let removed = standard.remove_place(id).unwrap();
        assert_eq!(removed.title(), "Paris, France");
        assert_eq!(removed.variant_names().len(), 1);

        assert!(standard.get_place("Paris, France").is_none());
        assert!(standard.get(id).is_none());
        assert!(standard.get_places_with_pref_name("Paris").unwrap().is_empty());
        assert!(standard.get_places_with_variant_name("Lutetia").unwrap().is_empty());
        assert!(standard.is_empty());

        assert!(matches!(
            standard.remove_place(id),
            Err(GazetteerError::UnknownPlace(_))
        ));
    }

    #[test]
    fn test_removed_place_can_be_added_again() {
        let mut standard = PlaceStandard::new(true);
        let id = standard.add_place(Place::new("Kent")).unwrap();
        let place = standard.remove_place(id).unwrap();

        let new_id = standard.add_place(place).unwrap();
        assert_ne!(id, new_id);
        assert!(standard.get_place("Kent").is_some());
    }

    #[test]
    fn test_name_queries_fail_without_indices() {
        let mut standard = PlaceStandard::new(false);
        standard
            .add_place(Place::new("Paris, France").with_preferred_name("Paris"))
            .unwrap();

        assert!(!standard.indexes_names());
        assert!(matches!(
            standard.get_places_with_pref_name("Paris"),
            Err(GazetteerError::NamesNotIndexed)
        ));
        assert!(matches!(
            standard.get_places_with_variant_name("Paris"),
            Err(GazetteerError::NamesNotIndexed)
        ));
    }

    #[test]
    fn test_pref_name_index_is_lossy() {
        let mut standard = PlaceStandard::new(true);
        standard
            .add_place(Place::new("Kent County, Delaware").with_preferred_name("Kent County"))
            .unwrap();
        standard
            .add_place(Place::new("Kent, England").with_preferred_name("Kent"))
            .unwrap();

        let found = standard.get_places_with_pref_name("kent").unwrap();
        assert_eq!(
            titles(&found),
            vec!["Kent County, Delaware".to_string(), "Kent, England".to_string()]
        );
    }

    #[test]
    fn test_set_title_moves_index_entry() {
        let mut standard = PlaceStandard::new(false);
        let id = standard.add_place(Place::new("Bombay, India")).unwrap();

        standard.set_title(id, "Mumbai, India").unwrap();

        assert!(standard.get_place("Bombay, India").is_none());
        assert_eq!(
            standard.get_place("mumbai,_india").map(Place::title),
            Some("Mumbai, India")
        );
    }

    #[test]
    fn test_set_title_rejects_collision() {
        let mut standard = PlaceStandard::new(false);
        let a = standard.add_place(Place::new("A")).unwrap();
        standard.add_place(Place::new("B")).unwrap();

        assert!(matches!(
            standard.set_title(a, "b"),
            Err(GazetteerError::DuplicateTitle(_))
        ));
        assert_eq!(standard.get(a).map(Place::title), Some("A"));

        // Changing only the case of its own title is allowed
        standard.set_title(a, "a").unwrap();
        assert_eq!(standard.get(a).map(Place::title), Some("a"));
    }

    #[test]
    fn test_set_preferred_name_reindexes() {
        let mut standard = PlaceStandard::new(true);
        let id = standard
            .add_place(Place::new("Bombay, India").with_preferred_name("Bombay"))
            .unwrap();

        standard.set_preferred_name(id, "Mumbai").unwrap();

        assert!(standard.get_places_with_pref_name("Bombay").unwrap().is_empty());
        let found = standard.get_places_with_pref_name("Mumbai").unwrap();
        assert_eq!(titles(&found), vec!["Bombay, India".to_string()]);
    }

    #[test]
    fn test_add_variant_name_indexes() {
        let mut standard = PlaceStandard::new(true);
        let id = standard.add_place(Place::new("Mumbai, India")).unwrap();

        assert!(standard
            .add_variant_name(id, "Bombay", Some("colonial".to_string()))
            .unwrap());
        assert!(!standard
            .add_variant_name(id, "bombay", Some("Colonial".to_string()))
            .unwrap());
        assert!(standard.add_variant_name(id, "Bombay", None).unwrap());

        let found = standard.get_places_with_variant_name("BOMBAY").unwrap();
        assert_eq!(titles(&found), vec!["Mumbai, India".to_string()]);
        assert_eq!(standard.get(id).unwrap().variant_names().len(), 2);
    }

    #[test]
    fn test_unbound_place_mutation_touches_no_index() {
        let mut standard = PlaceStandard::new(true);
        let id = standard
            .add_place(Place::new("Kent").with_preferred_name("Kent"))
            .unwrap();
        let place = standard.remove_place(id).unwrap();

        let _renamed = place.with_preferred_name("Cantium");
        assert!(standard.get_places_with_pref_name("Cantium").unwrap().is_empty());
    }

    #[test]
    fn test_place_mut_edits_plain_fields() {
        let mut standard = PlaceStandard::new(false);
        let id = standard.add_place(Place::new("Paris, France")).unwrap();

        if let Some(place) = standard.place_mut(id) {
            place.parent_title = Some("France".to_string());
            place.latitude = Some(48.8566);
        }

        let place = standard.get(id).unwrap();
        assert_eq!(place.parent(), Some("France"));
        assert_eq!(place.latitude, Some(48.8566));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut standard = PlaceStandard::new(true);
        standard
            .add_place(Place::new("Paris").with_preferred_name("Paris"))
            .unwrap();
        standard.add_redirect("Lutetia", "Paris");

        standard.clear();

        assert!(standard.is_empty());
        assert_eq!(standard.redirect_count(), 0);
        assert!(standard.get_place("Lutetia").is_none());
        assert!(standard.indexes_names());
        assert!(standard.get_places_with_pref_name("Paris").unwrap().is_empty());
    }

    #[test]
    fn test_iter_skips_removed_slots() {
        let mut standard = PlaceStandard::new(false);
        let a = standard.add_place(Place::new("A")).unwrap();
        let b = standard.add_place(Place::new("B")).unwrap();
        standard.remove_place(a).unwrap();

        let ids: Vec<_> = standard.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![b]);
        assert_eq!(standard.places().count(), 1);
    }
}
