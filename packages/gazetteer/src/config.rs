//! Configuration constants for the place standard.
//!
//! Centralized values used throughout the gazetteer for:
//! - Traversal bounds (redirect chains, ancestor chains)
//! - The vocabularies that drive name standardization
//! - Sort key construction
//!
//! These are compile-time constants. The only runtime knob is whether the
//! registry builds its name indices, which is chosen at construction.

/// Maximum number of redirect hops followed by a single lookup.
///
/// A longer chain is treated as a loop: it is logged and abandoned.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum number of ancestor hops for level, full-name, closure and
/// sort-key traversals.
///
/// Real hierarchies are at most five levels deep (country, state, county,
/// town, neighbourhood). Going past this bound means the parent chain is
/// cyclic, so the traversal is truncated.
pub const MAX_HIERARCHY_DEPTH: usize = 6;

/// Parent title treated as the top-level grouping when computing levels.
///
/// Some datasets omit a registry entry for this country, so its first-order
/// subdivisions are leveled like countries elsewhere.
pub const TOP_LEVEL_SENTINEL: &str = "United States";

/// Separator between ancestor names in a hierarchical sort key.
///
/// Must sort below every character a name can contain, including the space
/// that ends a place's own segment. Otherwise a name that extends another
/// ("Francesca" after "France") sorts between a place and its descendants.
pub const SORT_KEY_SEPARATOR: &str = "\u{1}";

/// Administrative-unit type words stripped from names before indexing.
///
/// Matched as whole words against the lower-cased name.
pub const TYPE_WORDS: &[&str] = &[
    "borough",
    "canton",
    "city",
    "commune",
    "county",
    "department",
    "district",
    "duchy",
    "governorate",
    "kreis",
    "municipality",
    "oblast",
    "parish",
    "prefecture",
    "province",
    "region",
    "shire",
    "state",
    "territory",
    "township",
    "voivodeship",
];

/// Noise words removed from names before indexing.
pub const NOISE_WORDS: &[&str] = &["of", "&"];

/// Honorific abbreviations and their expansion.
///
/// Applied before type words are stripped, so "Ste. Marie" and
/// "Sainte-Marie" produce the same name key.
pub const HONORIFICS: &[(&str, &str)] = &[("ste.", "saint"), ("sainte", "saint"), ("st.", "saint")];
