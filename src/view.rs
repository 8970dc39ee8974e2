//! Render-ready view records and the per-search view-model.

use serde::Serialize;
use tracing::warn;

use crate::chart::{self, ChartDataset, HasStore};
use crate::classify::{self, BadgeStyle, ConditionTag, InsightStyle};
use crate::error::Result;
use crate::format::{self, DeltaTone, StarRating, ValueScore};
use crate::models::{Listing, RecommendationTier, SearchData};
use crate::ranking::{self, Rankable};
use crate::stats::{StatCard, Statistics};
use crate::stores::{self, StoreMetadata};

// ---------------------------------------------------------------------------
// ViewRecord — One listing plus everything needed to draw its row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewRecord {
    #[serde(flatten)]
    pub listing: Listing,
    pub display_name: String,
    pub badge: BadgeStyle,
    pub badge_class: &'static str,
    pub condition_tag: ConditionTag,
    pub category_icon: &'static str,
    pub store_meta: StoreMetadata,
    pub value: ValueScore,
    pub delta_tone: DeltaTone,
    pub delta_class: &'static str,
    pub stars: Option<StarRating>,
}

impl ViewRecord {
    pub fn new(listing: Listing) -> Self {
        let badge = classify::badge_style(&listing.recommendation);
        let delta_tone = format::delta_tone(listing.price_delta());
        Self {
            display_name: listing.display_name().to_string(),
            badge,
            badge_class: badge.css_class(),
            condition_tag: classify::condition_tag(listing.condition),
            category_icon: classify::category_icon(&listing.category),
            store_meta: stores::resolve(&listing.store),
            value: format::value_score(listing.value_score()),
            delta_tone,
            delta_class: delta_tone.css_class(),
            stars: listing.rating.map(format::star_rating),
            listing,
        }
    }
}

impl Rankable for ViewRecord {
    fn tier(&self) -> &RecommendationTier {
        &self.listing.recommendation
    }

    fn price(&self) -> f64 {
        self.listing.price
    }
}

impl HasStore for ViewRecord {
    fn store(&self) -> &str {
        &self.listing.store
    }
}

// ---------------------------------------------------------------------------
// ViewModel — Everything the presentation layer draws for one search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightView {
    pub text: String,
    #[serde(flatten)]
    pub style: InsightStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub summary: String,
    pub insights: Vec<InsightView>,
    /// Listings in display order.
    pub listings: Vec<ViewRecord>,
    pub statistics: Statistics,
    pub stat_cards: Vec<StatCard>,
    pub chart: ChartDataset,
}

impl ViewModel {
    /// Derive the view-model from a successful search payload.
    ///
    /// Fails with [`PriceFinderError::EmptyInput`](crate::PriceFinderError::EmptyInput)
    /// when the payload carries no listings. Listings with a negative or
    /// non-finite price are dropped first.
    pub fn build(data: SearchData) -> Result<Self> {
        let (valid, dropped): (Vec<Listing>, Vec<Listing>) = data
            .listings
            .into_iter()
            .partition(Listing::has_valid_price);
        for listing in &dropped {
            warn!(
                store = %listing.store,
                price = listing.price,
                "Dropping listing with invalid price"
            );
        }

        let statistics = Statistics::from_listings(&valid)?;
        let records: Vec<ViewRecord> = valid.into_iter().map(ViewRecord::new).collect();
        let listings = ranking::rank(records)?;
        let chart = chart::build_dataset(&listings);

        let insights = data
            .insights
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, text)| InsightView {
                text,
                style: classify::insight_style(i),
            })
            .collect();

        Ok(Self {
            summary: data.summary,
            insights,
            listings,
            stat_cards: statistics.cards(),
            statistics,
            chart,
        })
    }
}
