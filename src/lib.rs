//! PriceFinder comparison engine.
//!
//! Turns the listings a product search returns from several online stores into
//! a ranked, annotated comparison: a display order, presentation tokens per
//! listing, summary statistics and a bar-chart dataset. A small state machine
//! drives one search at a time against the search service and hands the result
//! to a presentation layer.
//!
//! # Quick start
//!
//! ```no_run
//! use pricefinder::{SearchClient, SearchRequest, ViewModel};
//!
//! let client = SearchClient::builder()
//!     .base_url("http://localhost:5000")
//!     .build()
//!     .unwrap();
//!
//! let request = SearchRequest::new("gemini-key", "scraper-key", "Sony WH-1000XM5");
//! let data = client
//!     .search(&request)
//!     .unwrap()
//!     .into_data("Unknown error")
//!     .unwrap();
//!
//! let view = ViewModel::build(data).unwrap();
//! for row in &view.listings {
//!     println!("{} {} ${:.2}", row.store_meta.initials, row.display_name, row.listing.price);
//! }
//! ```
//!
//! To drive a UI, implement [`Presenter`] and feed searches through a
//! [`SearchOrchestrator`].

#[cfg(feature = "async")]
pub mod async_client;
pub mod chart;
pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod orchestrator;
pub mod ranking;
pub mod stats;
pub mod stores;
pub mod view;

#[cfg(feature = "async")]
pub use async_client::AsyncSearchClient;
pub use chart::{ChartDataset, ChartSurface};
pub use client::SearchClient;
pub use error::{PriceFinderError, Result};
pub use models::{Listing, SearchData, SearchRequest, SearchResponse};
pub use orchestrator::{
    FailureKind, Presenter, SearchBackend, SearchFailure, SearchOrchestrator, SearchPhase,
    SearchSession, SearchTicket,
};
pub use stats::Statistics;
pub use view::{ViewModel, ViewRecord};
