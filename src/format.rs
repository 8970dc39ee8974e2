//! Display values for value scores, price deltas, prices and star ratings.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Value score
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueTier {
    Worst,
    Low,
    Mid,
    Best,
}

impl ValueTier {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            75..=u8::MAX => Self::Best,
            50..=74 => Self::Mid,
            25..=49 => Self::Low,
            _ => Self::Worst,
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            Self::Best => "bg-green-500",
            Self::Mid => "bg-blue-500",
            Self::Low => "bg-yellow-500",
            Self::Worst => "bg-red-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueScore {
    /// Clamped into `0..=100`; doubles as the bar width in percent.
    pub percent: u8,
    pub tier: ValueTier,
    pub label: String,
}

pub fn value_score(raw: i64) -> ValueScore {
    let percent = raw.clamp(0, 100) as u8;
    ValueScore {
        percent,
        tier: ValueTier::from_percent(percent),
        label: format!("{percent}/100"),
    }
}

// ---------------------------------------------------------------------------
// Price delta
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaTone {
    Favorable,
    Unfavorable,
}

impl DeltaTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Favorable => "text-green-600",
            Self::Unfavorable => "text-red-600",
        }
    }
}

/// Classify a pre-formatted delta such as `"-15%"`.
///
/// Only a leading `-` counts as favorable, so `"0%"` is unfavorable. This is a
/// check on the text, not on the number it spells.
pub fn delta_tone(delta: &str) -> DeltaTone {
    if delta.starts_with('-') {
        DeltaTone::Favorable
    } else {
        DeltaTone::Unfavorable
    }
}

// ---------------------------------------------------------------------------
// Prices
// ---------------------------------------------------------------------------

/// Round to cents.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

// ---------------------------------------------------------------------------
// Star rating
// ---------------------------------------------------------------------------

pub const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

/// Break a 0-5 rating into full, half and empty stars.
pub fn star_rating(rating: f64) -> StarRating {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, f64::from(MAX_STARS))
    } else {
        0.0
    };
    let full = rating.floor() as u8;
    let half = full < MAX_STARS && rating.fract() >= 0.5;
    StarRating {
        full,
        half,
        empty: MAX_STARS - full - u8::from(half),
    }
}
