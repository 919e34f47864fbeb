//! Compound index fetching: the ordered set of catalog identifiers.

use roxmltree::Document;

use crate::config::{query_url, INDEX_SERVICE};
use crate::error::{HarvestError, Result};
use crate::http::Portal;
use crate::types::CompoundId;
use crate::xml::{elements_by_tag, get_text};

/// Fetch the full list of compound ids from the portal.
///
/// The index query is a form POST selecting the index service with an
/// empty type filter, which the portal answers with every catalog entry.
/// Response order is preserved: it becomes the export row order.
///
/// # Errors
/// `IndexDownload` on transport failure or non-success status,
/// `XmlParse`/`InvalidId` when the response is not a well-formed id list.
pub fn fetch_compound_ids(portal: &Portal) -> Result<Vec<CompoundId>> {
    let service = INDEX_SERVICE.to_string();
    let params = [("service", service.as_str()), ("tipo_1", "")];

    let body = portal
        .post_form(&query_url(portal.base_url()), &params)
        .map_err(|e| {
            if let HarvestError::Http(source) = e {
                HarvestError::IndexDownload { source }
            } else {
                e
            }
        })?;

    let ids = parse_compound_ids(&body)?;
    tracing::info!(count = ids.len(), "compound index fetched");
    Ok(ids)
}

/// Parse the index response body into an ordered id list.
///
/// Ids are the integer texts of all `id` elements, in document order.
pub fn parse_compound_ids(xml: &str) -> Result<Vec<CompoundId>> {
    let doc = Document::parse(xml)?;
    let mut ids = Vec::new();

    for node in elements_by_tag(&doc, "id") {
        let text = get_text(node);
        let id = text
            .parse::<CompoundId>()
            .map_err(|source| HarvestError::InvalidId {
                text: text.clone(),
                source,
            })?;
        ids.push(id);
    }

    Ok(ids)
}
