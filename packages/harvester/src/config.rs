//! Configuration constants and URL builders for the NuBBE portal.

/// Base URL of the public NuBBE portal.
pub const PORTAL_BASE_URL: &str = "https://nubbe.iq.unesp.br/portal";

/// Query endpoint path shared by the index and detail services.
pub const QUERY_PATH: &str = "/do/Query";

/// Portal service selector for the compound index query.
pub const INDEX_SERVICE: u32 = 17;

/// Portal service selector for the compound detail query.
pub const DETAIL_SERVICE: u32 = 21;

/// HTTP timeout in seconds.
///
/// Set to 30 seconds to accommodate slow responses from the portal.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default output path for the exported catalog.
pub const DEFAULT_OUTPUT_PATH: &str = "molecule_structures.csv";

/// Build the query endpoint URL for a portal instance.
///
/// # Examples
/// ```
/// use nubbe_harvester::config::query_url;
///
/// assert_eq!(
///     query_url("https://nubbe.iq.unesp.br/portal"),
///     "https://nubbe.iq.unesp.br/portal/do/Query"
/// );
/// ```
pub fn query_url(base_url: &str) -> String {
    format!("{}{QUERY_PATH}", base_url.trim_end_matches('/'))
}

/// Build the detail URL for one compound.
///
/// The `reqid` token must be fresh per request so no cache layer between the
/// harvester and the portal can serve a stale document.
///
/// # Examples
/// ```
/// use nubbe_harvester::config::detail_url;
///
/// let url = detail_url("https://nubbe.iq.unesp.br/portal", 1620, "42");
/// assert_eq!(
///     url,
///     "https://nubbe.iq.unesp.br/portal/do/Query?reqid=42&service=21&id=1620"
/// );
/// ```
pub fn detail_url(base_url: &str, id: u32, reqid: &str) -> String {
    format!(
        "{}?reqid={reqid}&service={DETAIL_SERVICE}&id={id}",
        query_url(base_url)
    )
}
