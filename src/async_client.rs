//! Async wrapper around [`SearchClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs the blocking client on [`tokio::task::spawn_blocking`], keeping the
//! event loop free while a search is in flight. Pair it with
//! [`SearchOrchestrator::begin`](crate::SearchOrchestrator::begin) and
//! [`SearchOrchestrator::complete`](crate::SearchOrchestrator::complete):
//!
//! ```no_run
//! # use pricefinder::{AsyncSearchClient, SearchOrchestrator, SearchRequest, Presenter};
//! # async fn example<P: Presenter>(orchestrator: &mut SearchOrchestrator<P>) -> pricefinder::Result<()> {
//! let client = AsyncSearchClient::builder().build().await?;
//! let request = SearchRequest::new("gemini-key", "scraper-key", "iPhone 15");
//!
//! let ticket = orchestrator.begin(&request)?;
//! let outcome = client.search(request).await;
//! orchestrator.complete(ticket, outcome);
//! # client.close().await
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::client::SearchClient;
use crate::error::{PriceFinderError, Result};
use crate::models::{HealthStatus, SearchRequest, SearchResponse};

// ---------------------------------------------------------------------------
// AsyncSearchClientBuilder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct AsyncSearchClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl AsyncSearchClientBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncSearchClient> {
        tokio::task::spawn_blocking(move || {
            let mut builder = SearchClient::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            Ok(AsyncSearchClient {
                inner: Arc::new(builder.build()?),
            })
        })
        .await
        .map_err(join_error)?
    }
}

// ---------------------------------------------------------------------------
// AsyncSearchClient
// ---------------------------------------------------------------------------

pub struct AsyncSearchClient {
    inner: Arc<SearchClient>,
}

impl AsyncSearchClient {
    pub fn builder() -> AsyncSearchClientBuilder {
        AsyncSearchClientBuilder::default()
    }

    /// Run a blocking client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&SearchClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(join_error)?
    }

    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        self.run(move |c| c.search(&request)).await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.run(|c| c.health()).await
    }

    /// Release the underlying blocking client off the async thread.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(join_error)
    }
}

fn join_error(e: tokio::task::JoinError) -> PriceFinderError {
    PriceFinderError::Transport(format!("task join error: {e}"))
}
