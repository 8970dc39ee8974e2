pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const BASE_URL_ENV: &str = "PRICEFINDER_BASE_URL";

pub const SEARCH_PATH: &str = "/api/search";
pub const HEALTH_PATH: &str = "/api/health";

/// Stores the retrieval collaborator queries, in query order.
pub const TARGET_STORES: [&str; 5] = [
    "amazon.com",
    "walmart.com",
    "bestbuy.com",
    "ebay.com",
    "target.com",
];

/// Stores whose listings need an elevated-tier retrieval credential.
pub const PREMIUM_STORES: [&str; 3] = ["walmart.com", "bestbuy.com", "target.com"];

// ---------------------------------------------------------------------------
// User-facing messages
// ---------------------------------------------------------------------------

pub const CONNECTIVITY_ERROR_MESSAGE: &str =
    "Could not reach the search server. Check that it is running and try again.";
pub const PAYLOAD_ERROR_FALLBACK: &str = "Unknown error";
pub const NO_RESULTS_MESSAGE: &str =
    "No products were found. Try another search term or check your scraping API key.";

// ---------------------------------------------------------------------------
// Progress milestones
// ---------------------------------------------------------------------------

/// One step of the fixed progress sequence a search walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub percent: u8,
    pub message: &'static str,
}

pub const SUBMITTED: Milestone = Milestone {
    percent: 10,
    message: "Starting search...",
};
pub const CONNECTING: Milestone = Milestone {
    percent: 30,
    message: "Connecting to stores...",
};
pub const ANALYZING: Milestone = Milestone {
    percent: 60,
    message: "Analyzing listings with AI...",
};
pub const FINALIZING: Milestone = Milestone {
    percent: 90,
    message: "Preparing comparison...",
};
pub const COMPLETE: Milestone = Milestone {
    percent: 100,
    message: "Search complete",
};

/// Base URL of the search service, taken from `PRICEFINDER_BASE_URL` when set.
pub fn default_base_url() -> String {
    match std::env::var(BASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}
