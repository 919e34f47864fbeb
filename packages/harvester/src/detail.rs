//! Compound detail fetching: one catalog entry's full XML document.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::detail_url;
use crate::error::{HarvestError, Result};
use crate::http::Portal;
use crate::types::CompoundId;

/// Monotonic sequence making every request token unique within a run.
static REQUEST_SEQ: AtomicU64 = AtomicU64::new(0);

/// Produce a fresh `reqid` token.
///
/// The portal (and any cache in front of it) must see every detail
/// request as distinct, so tokens combine the wall clock with a
/// per-process counter: unique across runs and within a run.
fn next_request_token() -> String {
    let seq = REQUEST_SEQ.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    format!("{nanos}.{seq}")
}

/// Fetch the raw detail XML for one compound.
///
/// Each call is an independent request scoped to one id; nothing is
/// shared or cached across calls.
///
/// # Errors
/// `DetailDownload` naming the id on transport failure or non-success
/// status.
pub fn fetch_compound_xml(portal: &Portal, id: CompoundId) -> Result<String> {
    let url = detail_url(portal.base_url(), id, &next_request_token());
    portal.get(&url).map_err(|e| {
        if let HarvestError::Http(source) = e {
            HarvestError::DetailDownload { id, source }
        } else {
            e
        }
    })
}
