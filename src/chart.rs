//! Bar-chart dataset and chart lifecycle.
//!
//! The dataset is plain data. Drawing it is the job of a [`ChartSurface`],
//! which hands back an owned handle per chart. [`rebuild`] takes the previous
//! handle by value and destroys it before creating the next, so at most one
//! chart is alive per surface.

use serde::Serialize;

use crate::models::{LegacyTier, RecommendationTier};
use crate::ranking::Rankable;

pub const DATASET_LABEL: &str = "Price ($)";

const FILL_ALPHA: &str = "0.8";
const BORDER_ALPHA: &str = "1";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BEST_COLOR: Rgb = Rgb(34, 197, 94);
pub const ALTERNATIVE_COLOR: Rgb = Rgb(59, 130, 246);
pub const OTHER_COLOR: Rgb = Rgb(239, 68, 68);

impl Rgb {
    fn rgba(&self, alpha: &str) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

/// Chart coloring only tells best, alternative and everything else apart.
pub fn tier_color(tier: &RecommendationTier) -> Rgb {
    match tier {
        RecommendationTier::BestChoice | RecommendationTier::Legacy(LegacyTier::BestPrice) => {
            BEST_COLOR
        }
        RecommendationTier::GoodAlternative
        | RecommendationTier::Legacy(LegacyTier::Alternative) => ALTERNATIVE_COLOR,
        _ => OTHER_COLOR,
    }
}

// ---------------------------------------------------------------------------
// ChartDataset
// ---------------------------------------------------------------------------

/// One bar per listing, in display order. All sequences have equal length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub background_colors: Vec<String>,
    pub border_colors: Vec<String>,
}

impl ChartDataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Build the dataset from listings already in display order.
pub fn build_dataset<'a, T, I>(listings: I) -> ChartDataset
where
    T: Rankable + HasStore + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut dataset = ChartDataset {
        label: DATASET_LABEL,
        labels: Vec::new(),
        values: Vec::new(),
        background_colors: Vec::new(),
        border_colors: Vec::new(),
    };

    for listing in listings {
        let color = tier_color(listing.tier());
        dataset.labels.push(listing.store().to_string());
        dataset.values.push(listing.price());
        dataset.background_colors.push(color.rgba(FILL_ALPHA));
        dataset.border_colors.push(color.rgba(BORDER_ALPHA));
    }

    dataset
}

/// Gives the chart its bar labels.
pub trait HasStore {
    fn store(&self) -> &str;
}

impl HasStore for crate::models::Listing {
    fn store(&self) -> &str {
        &self.store
    }
}

// ---------------------------------------------------------------------------
// Chart lifecycle
// ---------------------------------------------------------------------------

/// Something that can draw a [`ChartDataset`].
pub trait ChartSurface {
    /// Owned handle to a live chart.
    type Chart;

    fn create_chart(&mut self, dataset: &ChartDataset) -> Self::Chart;
    fn destroy_chart(&mut self, chart: Self::Chart);
}

/// Replace `previous` with a chart for `dataset`.
///
/// The previous chart, if any, is destroyed before the new one is created.
pub fn rebuild<S: ChartSurface + ?Sized>(
    surface: &mut S,
    previous: Option<S::Chart>,
    dataset: &ChartDataset,
) -> S::Chart {
    if let Some(chart) = previous {
        surface.destroy_chart(chart);
    }
    surface.create_chart(dataset)
}
