//! Redirect table and title resolution.
//!
//! The title index is keyed canonically while redirects are keyed exactly as
//! the producer wrote them. Redirect hops are followed on literal titles and
//! only the lookup into the title index canonicalizes.

use super::{PlaceId, PlaceStandard};
use crate::config::MAX_REDIRECT_HOPS;
use crate::place::Place;
use crate::standardize::standardize_title;

impl PlaceStandard {
    /// Record that `old_title` redirects to `new_title`.
    ///
    /// Neither title needs to resolve. A later redirect from the same
    /// `old_title` replaces the earlier one.
    pub fn add_redirect(&mut self, old_title: impl Into<String>, new_title: impl Into<String>) {
        let old_title = old_title.into();
        let new_title = new_title.into();
        if let Some(previous) = self.redirects.get(&old_title) {
            tracing::debug!(
                from = %old_title,
                previous = %previous,
                to = %new_title,
                "Replacing redirect"
            );
        }
        self.redirects.insert(old_title, new_title);
    }

    /// Resolve a title to a place handle, following redirects.
    ///
    /// Returns `None` when the title does not resolve, including when the
    /// redirect chain is longer than [`MAX_REDIRECT_HOPS`] (which is logged
    /// as a probable loop).
    #[must_use]
    pub fn find_id(&self, title: &str) -> Option<PlaceId> {
        if let Some(&id) = self.titles.get(&standardize_title(title)) {
            return Some(id);
        }

        let mut current = title;
        let mut hops = 0;
        while let Some(target) = self.redirects.get(current) {
            hops += 1;
            if hops > MAX_REDIRECT_HOPS {
                tracing::error!(title, hops, "Redirect chain too long, probably a loop");
                return None;
            }
            if let Some(&id) = self.titles.get(&standardize_title(target)) {
                return Some(id);
            }
            current = target;
        }
        None
    }

    /// Resolve a title to a place, following redirects.
    #[must_use]
    pub fn get_place(&self, title: &str) -> Option<&Place> {
        self.find_id(title).and_then(|id| self.get(id))
    }

    /// The literal redirect target recorded for `title`, if any.
    #[must_use]
    pub fn redirect_target(&self, title: &str) -> Option<&str> {
        self.redirects.get(title).map(String::as_str)
    }

    /// All redirects as `(old_title, new_title)` pairs, sorted by old title.
    #[must_use]
    pub fn redirects(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = self
            .redirects
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    #[must_use]
    pub fn redirect_count(&self) -> usize {
        self.redirects.len()
    }
}
