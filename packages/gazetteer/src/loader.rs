//! YAML ingestion of place pages.
//!
//! Stands in for the wiki dump reader: each place page has been reduced to
//! a record with the fixed place sub-fields, and each redirect page to an
//! `(from, to)` pair. Records are fed to the registry in document order.
//!
//! ```yaml
//! places:
//!   - title: Strasbourg, France
//!     name: Strasbourg
//!     located_in: France
//!     type: City
//!     previous_parents:
//!       - place: Germany
//!         from_year: 1871
//!         to_year: 1918
//!     alternate_names:
//!       - name: Straßburg
//!         source: German
//! redirects:
//!   - from: Strassburg
//!     to: Strasbourg, France
//! ```

use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{GazetteerError, Result};
use crate::place::{Place, PreviousParent, SeeAlsoPlace};
use crate::standard::PlaceStandard;

/// A complete input document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GazetteerDocument {
    pub places: Vec<PlaceRecord>,
    pub redirects: Vec<RedirectRecord>,
}

/// One place page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlaceRecord {
    pub title: String,
    /// Preferred name. Defaults to the first comma-separated part of the
    /// title.
    pub name: Option<String>,
    pub located_in: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(deserialize_with = "year")]
    pub from_year: Option<String>,
    #[serde(deserialize_with = "year")]
    pub to_year: Option<String>,
    pub previous_parents: Vec<PreviousParentRecord>,
    pub alternate_names: Vec<AlternateNameRecord>,
    pub see_also: Vec<SeeAlsoRecord>,
    pub getty_id: Option<String>,
    pub fhlc_id: Option<String>,
    pub wikipedia: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreviousParentRecord {
    pub place: String,
    #[serde(deserialize_with = "year")]
    pub from_year: Option<String>,
    #[serde(deserialize_with = "year")]
    pub to_year: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AlternateNameRecord {
    pub name: String,
    pub source: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeeAlsoRecord {
    pub place: String,
    pub reason: Option<String>,
}

/// One redirect page.
#[derive(Debug, Deserialize)]
pub struct RedirectRecord {
    pub from: String,
    pub to: String,
}

/// Years are free text, but YAML readers tend to write them unquoted.
fn year<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(i64),
        Text(String),
    }

    Ok(match Option::<Year>::deserialize(deserializer)? {
        Some(Year::Number(n)) => Some(n.to_string()),
        Some(Year::Text(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl PlaceRecord {
    /// Convert the record into an unregistered place.
    pub fn into_place(self) -> Place {
        let preferred_name = non_blank(self.name).unwrap_or_else(|| {
            self.title
                .split(',')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string()
        });

        let mut place = Place::new(self.title).with_preferred_name(preferred_name);
        for alternate in self.alternate_names {
            if !alternate.name.trim().is_empty() {
                place = place.with_variant_name(alternate.name, non_blank(alternate.source));
            }
        }

        place.parent_title = non_blank(self.located_in);
        place.place_type = non_blank(self.place_type);
        place.latitude = self.latitude;
        place.longitude = self.longitude;
        place.from_year = self.from_year;
        place.to_year = self.to_year;
        place.getty_id = non_blank(self.getty_id);
        place.fhlc_id = non_blank(self.fhlc_id);
        place.wikipedia_title = non_blank(self.wikipedia);
        place.text = non_blank(self.text);

        for previous in self.previous_parents {
            if previous.place.trim().is_empty() {
                continue;
            }
            place.add_previous_parent(
                PreviousParent::new(previous.place).with_period(previous.from_year, previous.to_year),
            );
        }
        for see_also in self.see_also {
            if see_also.place.trim().is_empty() {
                continue;
            }
            place.add_see_also_place(SeeAlsoPlace::new(see_also.place, non_blank(see_also.reason)));
        }
        place
    }
}

/// Counts from one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub places_added: usize,
    /// Titles rejected because their canonical title was already taken.
    pub duplicates: Vec<String>,
    pub redirects_added: usize,
}

/// Feed a parsed document into `standard`.
///
/// Duplicate titles are skipped (the registry logs them). A record without
/// a title is a malformed document and aborts ingestion.
pub fn ingest(standard: &mut PlaceStandard, document: GazetteerDocument) -> Result<IngestSummary> {
    let mut summary = IngestSummary::default();

    for (index, record) in document.places.into_iter().enumerate() {
        if record.title.trim().is_empty() {
            return Err(GazetteerError::InvalidRecord {
                index,
                reason: "missing title".to_string(),
            });
        }
        let title = record.title.clone();
        match standard.add_place(record.into_place()) {
            Ok(_) => summary.places_added += 1,
            Err(GazetteerError::DuplicateTitle(_)) => summary.duplicates.push(title),
            Err(e) => return Err(e),
        }
    }

    for redirect in document.redirects {
        standard.add_redirect(redirect.from, redirect.to);
        summary.redirects_added += 1;
    }

    tracing::debug!(
        places = summary.places_added,
        duplicates = summary.duplicates.len(),
        redirects = summary.redirects_added,
        "Ingestion finished"
    );
    Ok(summary)
}

/// Build a registry from a YAML string.
pub fn load_str(yaml: &str, index_names: bool) -> Result<(PlaceStandard, IngestSummary)> {
    let document: GazetteerDocument = serde_yaml_ng::from_str(yaml)?;
    let mut standard = PlaceStandard::new(index_names);
    let summary = ingest(&mut standard, document)?;
    Ok((standard, summary))
}

/// Build a registry from a YAML file.
pub fn load_file(path: &Path, index_names: bool) -> Result<(PlaceStandard, IngestSummary)> {
    let yaml = std::fs::read_to_string(path)?;
    load_str(&yaml, index_names)
}
