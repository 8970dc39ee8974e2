#[derive(Debug, thiserror::Error)]
pub enum PriceFinderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Search failed: {0}")]
    Payload(String),

    #[error("No listings to aggregate")]
    EmptyInput,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, PriceFinderError>;
