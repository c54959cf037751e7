//! Reference checks over the whole registry.

use std::fmt;

use super::PlaceStandard;

/// A broken reference found by [`PlaceStandard::check_validity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    /// The place's parent title does not resolve.
    MissingParent { title: String, parent_title: String },
    /// A see-also target does not resolve.
    MissingSeeAlso { title: String, target: String },
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParent {
                title,
                parent_title,
            } => write!(f, "{title}: parent '{parent_title}' not found"),
            Self::MissingSeeAlso { title, target } => {
                write!(f, "{title}: see-also place '{target}' not found")
            }
        }
    }
}

impl PlaceStandard {
    /// Collect every unresolvable parent and see-also reference, in
    /// registration order.
    #[must_use]
    pub fn check_validity(&self) -> Vec<Defect> {
        let mut defects = Vec::new();
        for place in self.places() {
            if let Some(parent_title) = place.parent() {
                if self.find_id(parent_title).is_none() {
                    defects.push(Defect::MissingParent {
                        title: place.title().to_string(),
                        parent_title: parent_title.to_string(),
                    });
                }
            }
            for see_also in place.see_also_places() {
                if self.find_id(&see_also.place_title).is_none() {
                    defects.push(Defect::MissingSeeAlso {
                        title: place.title().to_string(),
                        target: see_also.place_title.clone(),
                    });
                }
            }
        }
        defects
    }

    /// Check every reference, logging each defect. Returns `true` when the
    /// graph is fully self-consistent.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let defects = self.check_validity();
        for defect in &defects {
            tracing::warn!(%defect, "Invalid place reference");
        }
        defects.is_empty()
    }
}
