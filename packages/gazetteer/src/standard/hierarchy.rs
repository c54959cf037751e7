//! Read-only traversals over the parent hierarchy.
//!
//! Every traversal follows parent titles through [`PlaceStandard::get_place`]
//! and stops after [`MAX_HIERARCHY_DEPTH`] hops. Running into the bound
//! means the parent chain is cyclic; it is logged and the result truncated.

use std::collections::{BTreeSet, HashSet};

use super::{PlaceId, PlaceStandard};
use crate::config::{MAX_HIERARCHY_DEPTH, SORT_KEY_SEPARATOR, TOP_LEVEL_SENTINEL};
use crate::place::{ContainedPlace, Place};
use crate::standardize::standardize_title;

fn is_top_level_sentinel(title: &str) -> bool {
    standardize_title(title) == standardize_title(TOP_LEVEL_SENTINEL)
}

impl PlaceStandard {
    fn parent_of(&self, place: &Place) -> Option<&Place> {
        place.parent().and_then(|title| self.get_place(title))
    }

    /// Resolvable ancestors of `place`, nearest first.
    fn ancestor_chain<'a>(&'a self, place: &'a Place, operation: &'static str) -> Vec<&'a Place> {
        let mut chain = Vec::new();
        let mut current = place;
        while let Some(parent) = self.parent_of(current) {
            if chain.len() == MAX_HIERARCHY_DEPTH {
                tracing::error!(
                    title = %place.title(),
                    depth = MAX_HIERARCHY_DEPTH,
                    operation,
                    "Parent chain exceeds maximum depth, truncating"
                );
                break;
            }
            chain.push(parent);
            current = parent;
        }
        chain
    }

    /// Number of parent hops from the place to its topmost resolvable
    /// ancestor, or `None` if the title does not resolve.
    ///
    /// A place whose parent is [`TOP_LEVEL_SENTINEL`] counts as top-level,
    /// so states are leveled like countries.
    #[must_use]
    pub fn get_place_level(&self, title: &str) -> Option<usize> {
        let mut place = self.get_place(title)?;
        let mut level = 0;
        while let Some(parent_title) = place.parent() {
            if is_top_level_sentinel(parent_title) {
                break;
            }
            let Some(parent) = self.get_place(parent_title) else {
                break;
            };
            if level == MAX_HIERARCHY_DEPTH {
                tracing::error!(
                    title,
                    depth = MAX_HIERARCHY_DEPTH,
                    "Parent chain exceeds maximum depth while computing level"
                );
                break;
            }
            level += 1;
            place = parent;
        }
        Some(level)
    }

    /// Comma-joined preferred names from the place up to its topmost
    /// ancestor, e.g. "Paris, Île-de-France, France".
    ///
    /// Ancestors with an empty preferred name are skipped. Returns `None` if
    /// the title does not resolve.
    #[must_use]
    pub fn get_full_name(&self, title: &str) -> Option<String> {
        let place = self.get_place(title)?;
        let names: Vec<&str> = std::iter::once(place)
            .chain(self.ancestor_chain(place, "full name"))
            .map(Place::preferred_name)
            .filter(|name| !name.is_empty())
            .collect();
        Some(names.join(", "))
    }

    /// Names that should match the place in search.
    ///
    /// Starts with the place's preferred name (plus its variant names when
    /// `include_variants_of_self`), then walks every ancestor, fanning out
    /// over previous parents as well as the current parent, adding their
    /// preferred names (plus variants when `include_variants_of_ancestors`).
    /// Ancestor titles that do not resolve are added verbatim, and so is
    /// `title` itself when it does not resolve.
    #[must_use]
    pub fn compute_name_closure(
        &self,
        title: &str,
        include_variants_of_self: bool,
        include_variants_of_ancestors: bool,
    ) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        let Some(id) = self.find_id(title) else {
            names.insert(title.to_string());
            return names;
        };
        let Some(place) = self.get(id) else {
            return names;
        };

        collect_names(&mut names, place, include_variants_of_self);

        let mut visited: HashSet<PlaceId> = HashSet::from([id]);
        let mut frontier: BTreeSet<&str> = place.parent_titles().collect();
        let mut depth = 0;
        while !frontier.is_empty() {
            if depth == MAX_HIERARCHY_DEPTH {
                tracing::error!(
                    title,
                    depth,
                    "Ancestor closure exceeds maximum depth, truncating"
                );
                break;
            }
            depth += 1;

            let mut next = BTreeSet::new();
            for ancestor_title in frontier {
                let Some(ancestor_id) = self.find_id(ancestor_title) else {
                    names.insert(ancestor_title.to_string());
                    continue;
                };
                if !visited.insert(ancestor_id) {
                    continue;
                }
                if let Some(ancestor) = self.get(ancestor_id) {
                    collect_names(&mut names, ancestor, include_variants_of_ancestors);
                    next.extend(ancestor.parent_titles());
                }
            }
            frontier = next;
        }
        names
    }

    /// Hierarchical sort key for a place.
    ///
    /// Ancestor preferred names from the top down, joined by
    /// [`SORT_KEY_SEPARATOR`], then the place's own preferred name, a space
    /// and its title. The title makes keys of distinct places distinct, and
    /// all descendants of a place share its name prefix followed by the
    /// separator, which sorts below any name character. Sorting by this key
    /// therefore keeps each subtree contiguous, with descendants directly
    /// before the place they belong to.
    #[must_use]
    pub fn sort_key(&self, place: &Place) -> String {
        let mut key = String::new();
        for ancestor in self.ancestor_chain(place, "sort key").iter().rev() {
            key.push_str(ancestor.preferred_name());
            key.push_str(SORT_KEY_SEPARATOR);
        }
        key.push_str(place.preferred_name());
        key.push(' ');
        key.push_str(place.title());
        key
    }

    /// All registered places, either in registration order or in
    /// hierarchical order by [`sort_key`](Self::sort_key).
    #[must_use]
    pub fn get_places(&self, sorted: bool) -> Vec<&Place> {
        let mut places: Vec<&Place> = self.places().collect();
        if sorted {
            places.sort_by_cached_key(|place| self.sort_key(place));
        }
        places
    }

    /// Rebuild every place's contained places from the parent links.
    ///
    /// A child is listed under its current parent, and with `also` set under
    /// each of its previous parents. Parents that do not resolve are
    /// skipped.
    pub fn populate_contained_places(&mut self) {
        let mut edges: Vec<(PlaceId, ContainedPlace)> = Vec::new();
        for place in self.places() {
            if let Some(parent_id) = place.parent().and_then(|t| self.find_id(t)) {
                edges.push((
                    parent_id,
                    ContainedPlace::new(place.title(), place.place_type.clone(), false),
                ));
            }
            for previous in place.previous_parents() {
                if let Some(parent_id) = self.find_id(&previous.parent_title) {
                    edges.push((
                        parent_id,
                        ContainedPlace::new(place.title(), place.place_type.clone(), true),
                    ));
                }
            }
        }

        for slot in self.slots.iter_mut().flatten() {
            slot.clear_contained_places();
        }
        for (parent_id, contained) in edges {
            if let Some(parent) = self.place_mut(parent_id) {
                parent.add_contained_place(contained);
            }
        }
    }
}

fn collect_names(names: &mut BTreeSet<String>, place: &Place, include_variants: bool) {
    if !place.preferred_name().is_empty() {
        names.insert(place.preferred_name().to_string());
    }
    if include_variants {
        names.extend(place.variant_names().iter().map(|v| v.name.clone()));
    }
}
