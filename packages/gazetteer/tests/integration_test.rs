//! End-to-end tests for the place standard.
//!
//! Loads a small gazetteer fixture through the YAML loader and exercises
//! the query interface on it.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use gazetteer::loader::load_file;
use gazetteer::{Defect, GazetteerError, Place, PlaceStandard};
use pretty_assertions::assert_eq;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load(index_names: bool) -> PlaceStandard {
    let (standard, summary) = load_file(&fixture_path("places.yaml"), index_names)
        .unwrap_or_else(|e| panic!("Failed to load fixture: {e}"));
    assert!(summary.duplicates.is_empty());
    standard
}

fn names(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_fixture_counts() {
    let standard = load(true);
    assert_eq!(standard.len(), 10);
    assert_eq!(standard.redirect_count(), 3);
}

#[test]
fn test_lookup_is_canonicalization_insensitive() {
    let standard = load(false);
    let direct = standard.get_place("Paris, Île-de-France, France").unwrap();
    let folded = standard.get_place("paris,_ile-de-france,_france").unwrap();
    assert!(std::ptr::eq(direct, folded));
}

#[test]
fn test_redirect_chain() {
    let standard = load(false);
    // Lutetia -> Paris -> Paris, Île-de-France, France
    assert_eq!(
        standard.get_place("Lutetia").map(Place::title),
        Some("Paris, Île-de-France, France")
    );
    assert_eq!(
        standard.get_place("Strassburg").map(Place::title),
        Some("Strasbourg, Alsace, France")
    );
}

#[test]
fn test_full_names() {
    let standard = load(false);
    assert_eq!(
        standard.get_full_name("Paris").as_deref(),
        Some("Paris, Île-de-France, France")
    );
    assert_eq!(
        standard
            .get_full_name("Travis County, Texas, United States")
            .as_deref(),
        Some("Travis County, Texas")
    );
}

#[test]
fn test_levels() {
    let standard = load(false);
    assert_eq!(standard.get_place_level("France"), Some(0));
    assert_eq!(standard.get_place_level("Île-de-France, France"), Some(1));
    assert_eq!(standard.get_place_level("Lutetia"), Some(2));
    assert_eq!(standard.get_place_level("Texas, United States"), Some(0));
    assert_eq!(
        standard.get_place_level("Travis County, Texas, United States"),
        Some(1)
    );
    assert_eq!(standard.get_place_level("Atlantis"), None);
}

#[test]
fn test_closure_over_historical_parents() {
    let standard = load(false);
    assert_eq!(
        standard.compute_name_closure("Strassburg", true, false),
        names(&["Alsace", "Deutschland", "France", "Strasbourg", "Straßburg"])
    );
    assert_eq!(
        standard.compute_name_closure("Strassburg", false, true),
        names(&["Alsace", "Deutschland", "France", "Gaul", "Strasbourg"])
    );
}

#[test]
fn test_closure_keeps_unknown_ancestors_verbatim() {
    let standard = load(false);
    assert_eq!(
        standard.compute_name_closure("Sainte-Genevieve County, Missouri, United States", false, false),
        names(&["Missouri, United States", "Ste. Genevieve County"])
    );
}

#[test]
fn test_name_search() {
    let standard = load(true);

    let found: Vec<_> = standard
        .get_places_with_pref_name("Sainte Genevieve")
        .unwrap()
        .into_iter()
        .map(Place::title)
        .collect();
    assert_eq!(found, vec!["Sainte-Genevieve County, Missouri, United States"]);

    let found: Vec<_> = standard
        .get_places_with_variant_name("lutece")
        .unwrap()
        .into_iter()
        .map(Place::title)
        .collect();
    assert_eq!(found, vec!["Paris, Île-de-France, France"]);
}

#[test]
fn test_name_search_requires_indices() {
    let standard = load(false);
    assert!(matches!(
        standard.get_places_with_pref_name("Paris"),
        Err(GazetteerError::NamesNotIndexed)
    ));
}

#[test]
fn test_sorted_places_are_hierarchical() {
    let standard = load(false);
    let order: Vec<_> = standard
        .get_places(true)
        .into_iter()
        .map(Place::title)
        .collect();

    let position = |title: &str| {
        order
            .iter()
            .position(|t| *t == title)
            .unwrap_or_else(|| panic!("{title} missing from sorted list"))
    };

    // Descendants come directly before the place they belong to
    assert!(position("Strasbourg, Alsace, France") < position("Alsace, France"));
    assert!(position("Alsace, France") < position("France"));
    assert!(position("Paris, Île-de-France, France") < position("Île-de-France, France"));
    assert!(position("Île-de-France, France") < position("France"));

    // Everything under France is contiguous
    let france_range = position("Strasbourg, Alsace, France")..=position("France");
    for title in [
        "Alsace, France",
        "Paris, Île-de-France, France",
        "Île-de-France, France",
    ] {
        assert!(france_range.contains(&position(title)), "{title} outside France group");
    }
    assert!(!france_range.contains(&position("Kehl, Germany")));
    assert!(!france_range.contains(&position("Germany")));
}

#[test]
fn test_validity_reports_missing_parent() {
    let standard = load(false);
    assert!(!standard.is_valid());
    assert_eq!(
        standard.check_validity(),
        vec![
            Defect::MissingParent {
                title: "Texas, United States".to_string(),
                parent_title: "United States".to_string(),
            },
            Defect::MissingParent {
                title: "Sainte-Genevieve County, Missouri, United States".to_string(),
                parent_title: "Missouri, United States".to_string(),
            },
        ]
    );
}

#[test]
fn test_validity_after_repair() {
    let mut standard = load(false);
    standard.add_place(Place::new("United States")).unwrap();
    standard
        .add_place(Place::new("Missouri, United States").with_parent("United States"))
        .unwrap();
    assert!(standard.is_valid());
}

#[test]
fn test_contained_places() {
    let mut standard = load(false);
    standard.populate_contained_places();

    let germany = standard.get_place("Germany").unwrap();
    let children: Vec<_> = germany
        .contained_places()
        .iter()
        .map(|c| (c.place_title.as_str(), c.also))
        .collect();
    assert_eq!(
        children,
        vec![("Kehl, Germany", false), ("Strasbourg, Alsace, France", true)]
    );
}
