//! Error types for the harvester.
//!
//! Uses the dual-error pattern: `HarvestError` for library consumers
//! with detailed error context, and a `Result` alias for internal use.

use thiserror::Error;

use crate::types::CompoundId;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to download the compound index.
    #[error("Failed to download the compound index: {source}")]
    IndexDownload {
        #[source]
        source: reqwest::Error,
    },

    /// Failed to download a compound's detail document.
    #[error("Failed to download detail for compound {id}: {source}")]
    DetailDownload {
        id: CompoundId,
        #[source]
        source: reqwest::Error,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// An index entry's text is not an integer identifier.
    #[error("Compound id is not an integer: '{text}'")]
    InvalidId {
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A categorical code has no entry in its code table.
    ///
    /// This signals an incomplete code table, not a transient condition.
    #[error("Unknown {field} code '{code}'")]
    UnresolvedCode { field: &'static str, code: String },

    /// Extraction of a single compound failed, with the failing id attached.
    #[error("Failed to extract compound {id}: {source}")]
    Extraction {
        id: CompoundId,
        #[source]
        source: Box<HarvestError>,
    },

    /// The index returned no entries, or export was invoked with no records.
    #[error("The compound catalog is empty; nothing to export")]
    EmptyCatalog,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writing failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvestError>;
