//! Display order for listings.
//!
//! Listings are bucketed by recommendation tier, then ordered by price
//! ascending inside each bucket. A cheap listing never jumps ahead of a better
//! tier. Listings with equal tier and price have no defined relative order.

use std::cmp::Ordering;

use crate::error::{PriceFinderError, Result};
use crate::models::{Listing, RecommendationTier};

/// Anything that can be placed in the comparison table.
pub trait Rankable {
    fn tier(&self) -> &RecommendationTier;
    fn price(&self) -> f64;
}

impl Rankable for Listing {
    fn tier(&self) -> &RecommendationTier {
        &self.recommendation
    }

    fn price(&self) -> f64 {
        self.price
    }
}

/// Compare two listings for display.
///
/// 1. **Tier rank**, Best Choice (0) through Not Recommended (3), then
///    everything else (4).
/// 2. **Price**, ascending.
pub fn compare<T: Rankable + ?Sized>(a: &T, b: &T) -> Ordering {
    a.tier()
        .rank()
        .cmp(&b.tier().rank())
        .then_with(|| a.price().total_cmp(&b.price()))
}

/// Sort a collection into display order.
///
/// Returns [`PriceFinderError::EmptyInput`] for an empty collection so the
/// caller can show a "no results" state.
pub fn rank<T: Rankable>(mut items: Vec<T>) -> Result<Vec<T>> {
    if items.is_empty() {
        return Err(PriceFinderError::EmptyInput);
    }
    items.sort_unstable_by(compare);
    Ok(items)
}
