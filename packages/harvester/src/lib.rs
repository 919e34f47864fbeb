//! NuBBE Harvester - Export the NuBBE compound catalog as CSV.
//!
//! This crate downloads the natural-product compound catalog from the
//! NuBBE portal and flattens every entry into a uniform tabular record
//! for CSV export.
//!
//! # Example
//!
//! ```
//! use nubbe_harvester::config;
//!
//! let url = config::detail_url(config::PORTAL_BASE_URL, 1620, "42");
//! assert!(url.ends_with("service=21&id=1620"));
//! ```
//!
//! # Architecture
//!
//! The harvester is organized into several modules:
//!
//! - [`config`]: Portal constants and URL builders
//! - [`types`]: Core data types (CompoundId, CompoundRecord)
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP access to a portal instance
//! - [`index`]: Compound index fetching and parsing
//! - [`detail`]: Compound detail fetching
//! - [`fields`]: Output-column to source-tag field map
//! - [`codes`]: Categorical code tables
//! - [`extract`]: Flattening one detail document into a record
//! - [`xml`]: XML utilities
//! - [`export`]: CSV output
//! - [`cli`]: Command-line interface
//! - [`harvester`]: Main harvest pipeline

pub mod cli;
pub mod codes;
pub mod config;
pub mod detail;
pub mod error;
pub mod export;
pub mod extract;
pub mod fields;
pub mod harvester;
pub mod http;
pub mod index;
pub mod types;
pub mod xml;

// Re-export main functions
pub use harvester::harvest_catalog;

// Re-export commonly used items
pub use error::{HarvestError, Result};
pub use export::{export_csv, write_csv};
pub use extract::{extract_record, ExtractionSchema};
pub use http::Portal;
pub use types::{CompoundId, CompoundRecord};
