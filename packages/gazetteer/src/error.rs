//! Error types for the place standard.
//!
//! Only caller contract violations and I/O surface as errors. Data-quality
//! problems in the gazetteer itself (missing parents, redirect loops) are
//! logged and absorbed by the registry.

use thiserror::Error;

/// Main error type for the gazetteer library.
#[derive(Debug, Error)]
pub enum GazetteerError {
    /// A name query was made against a registry built without name indices.
    #[error("Name indices not built: construct the place standard with name indexing enabled")]
    NamesNotIndexed,

    /// Another place is already registered under the same canonical title.
    #[error("Duplicate place title: '{0}'")]
    DuplicateTitle(String),

    /// The handle or title does not refer to a registered place.
    #[error("Unknown place: '{0}'")]
    UnknownPlace(String),

    /// A place record in an input document is malformed.
    #[error("Invalid place record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// The loaded gazetteer has unresolvable references.
    #[error("Gazetteer has {0} invalid reference(s)")]
    InvalidReferences(usize),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error.
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for gazetteer operations.
pub type Result<T> = std::result::Result<T, GazetteerError>;
