//! Gazetteer - the place standard for a genealogical wiki.
//!
//! This crate builds an in-memory, hierarchically organized registry of
//! places from extracted place pages. Places are keyed by canonical title,
//! with optional name indices, literal redirects, and traversals that
//! compute a place's level, full name, search-name closure and hierarchical
//! sort order.
//!
//! # Example
//!
//! ```
//! use gazetteer::{Place, PlaceStandard};
//!
//! let mut standard = PlaceStandard::new(true);
//! standard.add_place(Place::new("France").with_preferred_name("France")).unwrap();
//! standard
//!     .add_place(Place::new("Paris").with_preferred_name("Paris").with_parent("France"))
//!     .unwrap();
//! standard.add_redirect("Lutetia", "Paris");
//!
//! assert_eq!(standard.get_place("Lutetia").map(Place::title), Some("Paris"));
//! assert_eq!(standard.get_full_name("Paris").as_deref(), Some("Paris, France"));
//! assert!(standard.is_valid());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Traversal bounds and standardization vocabularies
//! - [`error`]: Error types and Result alias
//! - [`standardize`]: Title and name canonicalization
//! - [`place`]: The place entity and its entry collections
//! - [`standard`]: The registry, redirects, hierarchy algorithms and validity
//! - [`loader`]: YAML ingestion of place pages
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod place;
pub mod standard;
pub mod standardize;

// Re-export commonly used items
pub use error::{GazetteerError, Result};
pub use place::{ContainedPlace, Place, PreviousParent, SeeAlsoPlace, VariantName};
pub use standard::{Defect, PlaceId, PlaceStandard};
pub use standardize::{standardize, standardize_title};
