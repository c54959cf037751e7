//! Entry types stored in a place's collections.

use serde::{Deserialize, Serialize};

use super::sorted::Entry;

/// A containment relationship the place had in the past.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousParent {
    /// Title of the former parent place.
    pub parent_title: String,
    pub from_year: Option<String>,
    pub to_year: Option<String>,
}

impl PreviousParent {
    #[must_use]
    pub fn new(parent_title: impl Into<String>) -> Self {
        Self {
            parent_title: parent_title.into(),
            from_year: None,
            to_year: None,
        }
    }

    /// Set the period during which the place belonged to this parent.
    #[must_use]
    pub fn with_period(mut self, from_year: Option<String>, to_year: Option<String>) -> Self {
        self.from_year = from_year;
        self.to_year = to_year;
        self
    }
}

impl Entry for PreviousParent {
    type Key = String;

    fn key(&self) -> String {
        self.parent_title.to_lowercase()
    }
}

/// An alternate name for a place, optionally attributed to a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantName {
    pub name: String,
    pub source: Option<String>,
}

impl VariantName {
    #[must_use]
    pub fn new(name: impl Into<String>, source: Option<String>) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }
}

impl Entry for VariantName {
    /// Name first, then source, with unattributed names before attributed
    /// ones. The same spelling from two sources is two entries.
    type Key = (String, Option<String>);

    fn key(&self) -> Self::Key {
        (
            self.name.to_lowercase(),
            self.source.as_deref().map(str::to_lowercase),
        )
    }
}

/// A cross-reference to a related place that is not a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeeAlsoPlace {
    pub place_title: String,
    pub reason: Option<String>,
}

impl SeeAlsoPlace {
    #[must_use]
    pub fn new(place_title: impl Into<String>, reason: Option<String>) -> Self {
        Self {
            place_title: place_title.into(),
            reason,
        }
    }
}

impl Entry for SeeAlsoPlace {
    type Key = String;

    fn key(&self) -> String {
        self.place_title.to_lowercase()
    }
}

/// A reverse containment edge, from a parent to one of its children.
///
/// `also` marks children that only list this place among their previous
/// parents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainedPlace {
    pub place_title: String,
    pub place_type: Option<String>,
    pub also: bool,
}

impl ContainedPlace {
    #[must_use]
    pub fn new(place_title: impl Into<String>, place_type: Option<String>, also: bool) -> Self {
        Self {
            place_title: place_title.into(),
            place_type,
            also,
        }
    }
}

impl Entry for ContainedPlace {
    type Key = String;

    fn key(&self) -> String {
        self.place_title.to_lowercase()
    }
}
