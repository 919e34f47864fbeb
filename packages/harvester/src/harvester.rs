//! Main harvest pipeline tying the fetchers and the extractor together.

use roxmltree::Document;

use crate::detail::fetch_compound_xml;
use crate::error::{HarvestError, Result};
use crate::extract::{extract_record, ExtractionSchema};
use crate::http::Portal;
use crate::index::fetch_compound_ids;
use crate::types::CompoundRecord;

/// Harvest the complete compound catalog, in index order.
///
/// Fetches the id list once, then for each id in order: reports progress
/// as `(current, total)` before the detail fetch, downloads the detail
/// document, and flattens it into a record. Strictly sequential, and
/// all-or-nothing: the first failure aborts the whole run, so either the
/// full catalog is returned or nothing is.
///
/// # Errors
/// `EmptyCatalog` when the index has no entries; otherwise the first
/// fetch, parse, or extraction error, with per-compound failures naming
/// the failing id.
pub fn harvest_catalog(
    portal: &Portal,
    schema: &ExtractionSchema,
    mut progress: impl FnMut(usize, usize),
) -> Result<Vec<CompoundRecord>> {
    let ids = fetch_compound_ids(portal)?;
    if ids.is_empty() {
        return Err(HarvestError::EmptyCatalog);
    }

    let total = ids.len();
    let mut catalog = Vec::with_capacity(total);

    for (current, &id) in ids.iter().enumerate() {
        progress(current, total);
        tracing::debug!(id, current, total, "extracting compound");

        let xml = fetch_compound_xml(portal, id)?;
        let doc = Document::parse(&xml).map_err(|e| HarvestError::Extraction {
            id,
            source: Box::new(HarvestError::XmlParse(e)),
        })?;
        let record = extract_record(&doc, schema).map_err(|e| HarvestError::Extraction {
            id,
            source: Box::new(e),
        })?;

        catalog.push(record);
    }

    tracing::info!(compounds = catalog.len(), "harvest complete");
    Ok(catalog)
}
