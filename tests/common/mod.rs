//! Shared fixtures for the PriceFinder integration tests.
//!
//! Provides sample listings, a scripted search backend and a presenter that
//! records every call it receives, including chart creation and teardown.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use pricefinder::config::Milestone;
use pricefinder::models::{Category, Condition, RecommendationTier};
use pricefinder::{
    ChartDataset, ChartSurface, Listing, PriceFinderError, Presenter, Result, SearchBackend,
    SearchData, SearchFailure, SearchRequest, SearchResponse, ViewModel,
};

/// A listing with only the required fields set.
pub fn listing(store: &str, price: f64, tier: &str) -> Listing {
    Listing {
        store: store.to_string(),
        raw_name: format!("{store} listing"),
        normalized_name: None,
        price,
        recommendation: RecommendationTier::parse(tier),
        condition: Condition::Unknown,
        category: Category::Different,
        value_score: None,
        price_delta: None,
        specifications: Vec::new(),
        reason: None,
        url: format!("https://www.{store}/item"),
        rating: None,
    }
}

/// Five listings across every current tier plus one unrecognized verdict.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing("target.com", 279.99, "❌ No Recomendado"),
        listing("amazon.com", 248.00, "🏆 Mejor Opción"),
        listing("ebay.com", 199.50, "Sin veredicto"),
        listing("bestbuy.com", 269.99, "⚠️ Considerar"),
        listing("walmart.com", 259.00, "✅ Buena Alternativa"),
    ]
}

pub fn sample_data() -> SearchData {
    SearchData {
        summary: "Amazon has the best price, 8% below average.".to_string(),
        insights: Some(vec![
            "Prices range from $199.50 to $279.99".to_string(),
            "The eBay listing is used".to_string(),
            "Amazon is the best value".to_string(),
            "Target is the most expensive".to_string(),
        ]),
        listings: sample_listings(),
    }
}

pub fn request() -> SearchRequest {
    SearchRequest::new("gemini-key", "scraper-key", "Sony WH-1000XM5")
}

// ---------------------------------------------------------------------------
// ScriptedBackend
// ---------------------------------------------------------------------------

/// Replays a queue of outcomes, one per search call.
pub struct ScriptedBackend {
    outcomes: RefCell<VecDeque<Result<SearchResponse>>>,
    pub calls: RefCell<usize>,
}

impl ScriptedBackend {
    pub fn new(outcomes: Vec<Result<SearchResponse>>) -> Self {
        Self {
            outcomes: RefCell::new(outcomes.into()),
            calls: RefCell::new(0),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(vec![Ok(SearchResponse::ok(sample_data()))])
    }

    pub fn unreachable() -> Self {
        Self::new(vec![Err(PriceFinderError::Transport(
            "connection refused".into(),
        ))])
    }
}

impl SearchBackend for ScriptedBackend {
    fn search(&self, _request: &SearchRequest) -> Result<SearchResponse> {
        *self.calls.borrow_mut() += 1;
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(PriceFinderError::Transport("no scripted outcome".into())))
    }
}

// ---------------------------------------------------------------------------
// RecordingPresenter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Progress(u8, &'static str),
    HideProgress,
    Clear,
    Results(usize),
    Error(String),
    CreateChart(u32),
    DestroyChart(u32),
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub events: Vec<Event>,
    pub live_charts: Vec<u32>,
    pub destroyed: usize,
    next_chart: u32,
}

impl RecordingPresenter {
    pub fn progress_percents(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Progress(p, _) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

/// Handle to a chart drawn by [`RecordingPresenter`].
#[derive(Debug, PartialEq, Eq)]
pub struct ChartId(pub u32);

impl ChartSurface for RecordingPresenter {
    type Chart = ChartId;

    fn create_chart(&mut self, _dataset: &ChartDataset) -> ChartId {
        self.next_chart += 1;
        self.live_charts.push(self.next_chart);
        self.events.push(Event::CreateChart(self.next_chart));
        ChartId(self.next_chart)
    }

    fn destroy_chart(&mut self, chart: ChartId) {
        self.live_charts.retain(|id| *id != chart.0);
        self.destroyed += 1;
        self.events.push(Event::DestroyChart(chart.0));
    }
}

impl Presenter for RecordingPresenter {
    fn progress(&mut self, milestone: Milestone) {
        self.events
            .push(Event::Progress(milestone.percent, milestone.message));
    }

    fn hide_progress(&mut self) {
        self.events.push(Event::HideProgress);
    }

    fn clear(&mut self) {
        self.events.push(Event::Clear);
    }

    fn show_results(&mut self, view: &ViewModel) {
        self.events.push(Event::Results(view.listings.len()));
    }

    fn show_error(&mut self, failure: &SearchFailure) {
        self.events.push(Event::Error(failure.message.clone()));
    }
}
