//! HTTP access to a NuBBE portal instance.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::{HTTP_TIMEOUT_SECS, PORTAL_BASE_URL};
use crate::error::Result;

/// User agent string identifying this harvester.
const USER_AGENT: &str = concat!("nubbe-harvester/", env!("CARGO_PKG_VERSION"));

/// A portal endpoint plus the HTTP client used to reach it.
///
/// The base URL is configurable so tests can point the harvester at a
/// mock server; production use takes [`Portal::new`].
#[derive(Debug, Clone)]
pub struct Portal {
    client: Client,
    base_url: String,
}

impl Portal {
    /// Portal at the public NuBBE base URL.
    pub fn new() -> Result<Self> {
        Self::with_base_url(PORTAL_BASE_URL)
    }

    /// Portal at a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a form-encoded body and return the response text.
    ///
    /// No retries: a non-success status or transport failure aborts the
    /// caller's run.
    pub(crate) fn post_form(&self, url: &str, params: &[(&str, &str)]) -> Result<String> {
        tracing::debug!(url, "POST");
        let response = self
            .client
            .post(url)
            .header("accept", "*/*")
            .header("x-requested-with", "XMLHttpRequest")
            .form(params)
            .send()?
            .error_for_status()?;
        Ok(response.text()?)
    }

    /// GET a URL and return the response text. No retries.
    pub(crate) fn get(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .header("accept", "*/*")
            .send()?
            .error_for_status()?;
        Ok(response.text()?)
    }
}
