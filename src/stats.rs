//! Summary statistics over a search's listings.

use serde::{Deserialize, Serialize};

use crate::error::{PriceFinderError, Result};
use crate::format::{format_price, round2};
use crate::models::{LegacyTier, Listing, RecommendationTier};

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Aggregates for one search. Prices are rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub average_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub price_range: f64,
    pub total_count: usize,
    pub best_count: usize,
    pub alternative_count: usize,
    pub not_recommended_count: usize,
}

impl Statistics {
    /// Compute statistics over `listings`.
    ///
    /// Order-independent. Listings whose price is negative or not finite are
    /// skipped. Returns [`PriceFinderError::EmptyInput`] when there is
    /// nothing left to aggregate.
    pub fn from_listings<'a, I>(listings: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut best_count = 0;
        let mut alternative_count = 0;
        let mut not_recommended_count = 0;

        for listing in listings.into_iter().filter(|l| l.has_valid_price()) {
            count += 1;
            sum += listing.price;
            min = min.min(listing.price);
            max = max.max(listing.price);

            match listing.recommendation {
                RecommendationTier::BestChoice
                | RecommendationTier::Legacy(LegacyTier::BestPrice) => best_count += 1,
                RecommendationTier::GoodAlternative
                | RecommendationTier::Legacy(LegacyTier::Alternative) => alternative_count += 1,
                RecommendationTier::NotRecommended
                | RecommendationTier::Legacy(LegacyTier::NotRecommended) => {
                    not_recommended_count += 1
                }
                _ => {}
            }
        }

        if count == 0 {
            return Err(PriceFinderError::EmptyInput);
        }

        Ok(Self {
            average_price: round2(sum / count as f64),
            min_price: round2(min),
            max_price: round2(max),
            price_range: round2(max - min),
            total_count: count,
            best_count,
            alternative_count,
            not_recommended_count,
        })
    }

    /// The four summary cards shown above the comparison table.
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                label: "Average Price",
                value: format_price(self.average_price),
                icon: "fa-dollar-sign",
                color: "blue",
            },
            StatCard {
                label: "Best Price",
                value: format_price(self.min_price),
                icon: "fa-arrow-down",
                color: "green",
            },
            StatCard {
                label: "Highest Price",
                value: format_price(self.max_price),
                icon: "fa-arrow-up",
                color: "red",
            },
            StatCard {
                label: "Total Listings",
                value: self.total_count.to_string(),
                icon: "fa-boxes",
                color: "purple",
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
    pub color: &'static str,
}
