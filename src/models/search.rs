use serde::{Deserialize, Serialize};

use super::listing::Listing;
use crate::error::{PriceFinderError, Result};

// ---------------------------------------------------------------------------
// SearchRequest — Body of POST /api/search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Credential for the AI summarization provider.
    #[serde(rename = "gemini_api_key")]
    pub summary_api_key: String,
    /// Credential for the listing retrieval provider.
    #[serde(rename = "scraper_api_key")]
    pub listing_api_key: String,
    pub product_name: String,
}

impl SearchRequest {
    /// Build a request, trimming surrounding whitespace from every field.
    pub fn new(
        summary_api_key: impl AsRef<str>,
        listing_api_key: impl AsRef<str>,
        product_name: impl AsRef<str>,
    ) -> Self {
        Self {
            summary_api_key: summary_api_key.as_ref().trim().to_string(),
            listing_api_key: listing_api_key.as_ref().trim().to_string(),
            product_name: product_name.as_ref().trim().to_string(),
        }
    }

    /// All three fields are required.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("summary API key", &self.summary_api_key),
            ("listing API key", &self.listing_api_key),
            ("product name", &self.product_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PriceFinderError::InvalidArgument(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

// ---------------------------------------------------------------------------
// SearchResponse — Envelope returned by the search service
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<SearchData>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub insights: Option<Vec<String>>,
    #[serde(rename = "products", default)]
    pub listings: Vec<Listing>,
}

impl SearchResponse {
    pub fn ok(data: SearchData) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            error,
        }
    }

    /// Split the envelope on its success flag.
    ///
    /// A failure-flagged payload becomes [`PriceFinderError::Payload`] carrying
    /// the server message, or `fallback` when the server sent none. A
    /// success-flagged payload without `data` is treated as carrying no listings.
    pub fn into_data(self, fallback: &str) -> Result<SearchData> {
        if self.success {
            Ok(self.data.unwrap_or_default())
        } else {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string());
            Err(PriceFinderError::Payload(message))
        }
    }
}

// ---------------------------------------------------------------------------
// HealthStatus — GET /api/health
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
