//! Presentation tokens for a listing's tier, condition and category.
//!
//! Every mapping here is total: unrecognized input resolves to a neutral
//! token instead of an error.

use serde::Serialize;

use crate::models::{Category, Condition, LegacyTier, RecommendationTier};

// ---------------------------------------------------------------------------
// Recommendation badge
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeStyle {
    Success,
    Info,
    Warning,
    Danger,
    Neutral,
}

impl BadgeStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "bg-green-100 text-green-800 border border-green-300",
            Self::Info => "bg-blue-100 text-blue-800 border border-blue-300",
            Self::Warning => "bg-yellow-100 text-yellow-800 border border-yellow-300",
            Self::Danger => "bg-red-100 text-red-800 border border-red-300",
            Self::Neutral => "bg-gray-100 text-gray-800",
        }
    }
}

pub fn badge_style(tier: &RecommendationTier) -> BadgeStyle {
    match tier {
        RecommendationTier::BestChoice => BadgeStyle::Success,
        RecommendationTier::GoodAlternative => BadgeStyle::Info,
        RecommendationTier::Consider => BadgeStyle::Warning,
        RecommendationTier::NotRecommended => BadgeStyle::Danger,
        RecommendationTier::Legacy(legacy) => legacy_badge_style(*legacy),
        RecommendationTier::Unrecognized(_) => BadgeStyle::Neutral,
    }
}

fn legacy_badge_style(tier: LegacyTier) -> BadgeStyle {
    match tier {
        LegacyTier::BestPrice => BadgeStyle::Success,
        LegacyTier::Alternative => BadgeStyle::Info,
        LegacyTier::NotRecommended => BadgeStyle::Danger,
    }
}

// ---------------------------------------------------------------------------
// Condition tag
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionTag {
    pub label: &'static str,
    pub icon: &'static str,
    pub css_class: &'static str,
}

pub fn condition_tag(condition: Condition) -> ConditionTag {
    match condition {
        Condition::New => ConditionTag {
            label: "New",
            icon: "fa-box",
            css_class: "bg-green-100 text-green-700",
        },
        Condition::Refurbished => ConditionTag {
            label: "Refurbished",
            icon: "fa-tools",
            css_class: "bg-blue-100 text-blue-700",
        },
        Condition::Used => ConditionTag {
            label: "Used",
            icon: "fa-recycle",
            css_class: "bg-yellow-100 text-yellow-700",
        },
        Condition::Unknown => ConditionTag {
            label: "Unknown",
            icon: "fa-question",
            css_class: "bg-gray-100 text-gray-600",
        },
    }
}

// ---------------------------------------------------------------------------
// Category icon
// ---------------------------------------------------------------------------

pub const FALLBACK_CATEGORY_ICON: &str = "fa-question-circle";

pub fn category_icon(category: &Category) -> &'static str {
    match category {
        Category::Identical => "fa-check-circle",
        Category::Similar => "fa-equals",
        Category::Alternative => "fa-exchange-alt",
        Category::Different => "fa-not-equal",
        Category::Unrecognized(_) => FALLBACK_CATEGORY_ICON,
    }
}

// ---------------------------------------------------------------------------
// Insight styling
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsightStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

const INSIGHT_ROTATION: [InsightStyle; 3] = [
    InsightStyle {
        icon: "fa-lightbulb",
        color: "yellow",
    },
    InsightStyle {
        icon: "fa-chart-line",
        color: "blue",
    },
    InsightStyle {
        icon: "fa-star",
        color: "purple",
    },
];

/// Icon and color for the insight at `index`; the rotation repeats every three.
pub fn insight_style(index: usize) -> InsightStyle {
    INSIGHT_ROTATION[index % INSIGHT_ROTATION.len()]
}
