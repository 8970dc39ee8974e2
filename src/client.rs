//! Blocking HTTP client for the search service.
//!
//! The service reports failures with a 4xx/5xx status *and* a JSON envelope
//! (`{"success": false, "error": "..."}`), so the body is parsed regardless of
//! status. Only a body that is not a valid envelope is an error here.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info, warn};

use crate::config;
use crate::error::{PriceFinderError, Result};
use crate::models::{HealthStatus, SearchRequest, SearchResponse};
use crate::orchestrator::SearchBackend;

// ---------------------------------------------------------------------------
// SearchClientBuilder
// ---------------------------------------------------------------------------

/// Builder for a [`SearchClient`].
///
/// Use [`SearchClient::builder()`] to obtain one.
#[derive(Debug, Clone, Default)]
pub struct SearchClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl SearchClientBuilder {
    /// Set the service base URL, e.g. `http://localhost:5000`.
    ///
    /// Defaults to [`config::default_base_url()`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a request timeout.
    ///
    /// There is none by default: a search runs a scrape and an AI analysis
    /// upstream and may take a long time.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<SearchClient> {
        let base_url = self
            .base_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(config::default_base_url);
        if base_url.is_empty() {
            return Err(PriceFinderError::InvalidArgument(
                "base URL must not be empty".into(),
            ));
        }

        let client = Client::builder().timeout(self.timeout).build()?;
        Ok(SearchClient { base_url, client })
    }
}

// ---------------------------------------------------------------------------
// SearchClient
// ---------------------------------------------------------------------------

pub struct SearchClient {
    base_url: String,
    client: Client,
}

impl SearchClient {
    pub fn builder() -> SearchClientBuilder {
        SearchClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a search and return the service's envelope.
    ///
    /// A failure-flagged envelope is returned as `Ok`; it is up to the caller
    /// to inspect `success`.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        request.validate()?;

        let url = format!("{}{}", self.base_url, config::SEARCH_PATH);
        info!(product = %request.product_name, %url, "Submitting search");

        let resp = self.client.post(&url).json(request).send()?;
        let status = resp.status();
        let body = resp.text()?;

        match serde_json::from_str::<SearchResponse>(&body) {
            Ok(envelope) => {
                debug!(%status, success = envelope.success, "Search response received");
                Ok(envelope)
            }
            Err(e) if !status.is_success() => {
                warn!(%status, error = %e, "Search failed without a JSON envelope");
                Err(PriceFinderError::Transport(format!(
                    "server returned {status}"
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// GET the service health endpoint.
    pub fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}{}", self.base_url, config::HEALTH_PATH);
        let status: HealthStatus = self.client.get(&url).send()?.error_for_status()?.json()?;
        Ok(status)
    }
}

impl SearchBackend for SearchClient {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        SearchClient::search(self, request)
    }
}
