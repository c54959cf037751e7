//! The place entity.
//!
//! A [`Place`] is a plain record. Fields that key a registry index (title,
//! preferred name, variant names) can only be set through consuming builder
//! methods before registration, or through the [`PlaceStandard`] mutation
//! methods afterwards. Everything else is freely mutable.
//!
//! [`PlaceStandard`]: crate::standard::PlaceStandard

mod entries;
mod sorted;

pub use entries::{ContainedPlace, PreviousParent, SeeAlsoPlace, VariantName};
pub use sorted::{Entry, SortedEntries};

/// One gazetteer entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Place {
    title: String,
    preferred_name: String,
    variant_names: SortedEntries<VariantName>,

    /// Title of the containing place. Resolved by lookup, never validated
    /// on insert.
    pub parent_title: Option<String>,
    pub from_year: Option<String>,
    pub to_year: Option<String>,
    pub place_type: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub getty_id: Option<String>,
    pub fhlc_id: Option<String>,
    pub wikipedia_title: Option<String>,
    pub text: Option<String>,

    previous_parents: SortedEntries<PreviousParent>,
    see_also_places: SortedEntries<SeeAlsoPlace>,
    contained_places: SortedEntries<ContainedPlace>,
}

impl Place {
    /// Create a place with only a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the preferred name.
    #[must_use]
    pub fn with_preferred_name(mut self, name: impl Into<String>) -> Self {
        self.preferred_name = name.into();
        self
    }

    /// Add a variant name.
    #[must_use]
    pub fn with_variant_name(mut self, name: impl Into<String>, source: Option<String>) -> Self {
        self.variant_names.insert(VariantName::new(name, source));
        self
    }

    /// Set the parent title.
    #[must_use]
    pub fn with_parent(mut self, parent_title: impl Into<String>) -> Self {
        self.parent_title = Some(parent_title.into());
        self
    }

    /// Set the place type.
    #[must_use]
    pub fn with_type(mut self, place_type: impl Into<String>) -> Self {
        self.place_type = Some(place_type.into());
        self
    }

    /// Add a previous parent.
    #[must_use]
    pub fn with_previous_parent(mut self, previous: PreviousParent) -> Self {
        self.previous_parents.insert(previous);
        self
    }

    /// Add a see-also reference.
    #[must_use]
    pub fn with_see_also(mut self, place_title: impl Into<String>, reason: Option<String>) -> Self {
        self.see_also_places
            .insert(SeeAlsoPlace::new(place_title, reason));
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn preferred_name(&self) -> &str {
        &self.preferred_name
    }

    #[must_use]
    pub fn variant_names(&self) -> &[VariantName] {
        self.variant_names.as_slice()
    }

    /// The parent title, treating an empty string as no parent.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent_title.as_deref().filter(|p| !p.trim().is_empty())
    }

    #[must_use]
    pub fn previous_parents(&self) -> &[PreviousParent] {
        self.previous_parents.as_slice()
    }

    #[must_use]
    pub fn see_also_places(&self) -> &[SeeAlsoPlace] {
        self.see_also_places.as_slice()
    }

    /// Reverse containment edges, filled by
    /// [`PlaceStandard::populate_contained_places`].
    ///
    /// [`PlaceStandard::populate_contained_places`]: crate::standard::PlaceStandard::populate_contained_places
    #[must_use]
    pub fn contained_places(&self) -> &[ContainedPlace] {
        self.contained_places.as_slice()
    }

    /// Record a previous parent. Returns `false` if one with the same title
    /// is already present.
    pub fn add_previous_parent(&mut self, previous: PreviousParent) -> bool {
        self.previous_parents.insert(previous)
    }

    /// Record a see-also reference. Returns `false` if the target is already
    /// referenced.
    pub fn add_see_also_place(&mut self, see_also: SeeAlsoPlace) -> bool {
        self.see_also_places.insert(see_also)
    }

    /// Record a contained place. Returns `false` if the child is already
    /// listed.
    pub fn add_contained_place(&mut self, contained: ContainedPlace) -> bool {
        self.contained_places.insert(contained)
    }

    pub fn clear_contained_places(&mut self) {
        self.contained_places.clear();
    }

    /// Titles this place hangs under: the current parent followed by all
    /// previous parents.
    pub fn parent_titles(&self) -> impl Iterator<Item = &str> {
        self.parent().into_iter().chain(
            self.previous_parents
                .iter()
                .map(|p| p.parent_title.as_str())
                .filter(|t| !t.trim().is_empty()),
        )
    }

    // Index-key setters. Only the registry calls these, after it has
    // deregistered the old value.

    pub(crate) fn replace_title(&mut self, title: String) -> String {
        std::mem::replace(&mut self.title, title)
    }

    pub(crate) fn replace_preferred_name(&mut self, name: String) -> String {
        std::mem::replace(&mut self.preferred_name, name)
    }

    pub(crate) fn insert_variant_name(&mut self, variant: VariantName) -> bool {
        self.variant_names.insert(variant)
    }
}
