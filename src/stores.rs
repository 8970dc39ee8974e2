//! Store metadata: brand colors, initials and premium-tier membership.
//!
//! Lookups are case-insensitive exact matches on the store identifier (a
//! domain name such as `amazon.com`). Unknown stores get a neutral gray
//! gradient and initials derived from the identifier itself.

use serde::Serialize;

use crate::config;

/// Two-stop gradient used behind a store's avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandColors {
    pub from: &'static str,
    pub to: &'static str,
}

pub const NEUTRAL_COLORS: BrandColors = BrandColors {
    from: "#6B7280",
    to: "#9CA3AF",
};

/// Resolved presentation data for one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreMetadata {
    pub colors: BrandColors,
    pub initials: String,
    pub premium: bool,
}

const KNOWN_STORES: [(&str, BrandColors, &str); 5] = [
    (
        "amazon.com",
        BrandColors {
            from: "#FF9900",
            to: "#146EB4",
        },
        "AM",
    ),
    (
        "walmart.com",
        BrandColors {
            from: "#0071CE",
            to: "#FFC220",
        },
        "WM",
    ),
    (
        "ebay.com",
        BrandColors {
            from: "#E53238",
            to: "#0064D2",
        },
        "EB",
    ),
    (
        "bestbuy.com",
        BrandColors {
            from: "#0046BE",
            to: "#FFE000",
        },
        "BB",
    ),
    (
        "target.com",
        BrandColors {
            from: "#CC0000",
            to: "#FF4D4D",
        },
        "TG",
    ),
];

/// Resolve brand colors, initials and premium flag for a store identifier.
///
/// Matching is case-insensitive and ignores surrounding whitespace; anything
/// else must equal the known domain exactly.
pub fn resolve(store: &str) -> StoreMetadata {
    let key = store.trim().to_lowercase();
    let (colors, initials) = KNOWN_STORES
        .iter()
        .find(|(domain, _, _)| *domain == key)
        .map(|(_, colors, initials)| (*colors, initials.to_string()))
        .unwrap_or_else(|| (NEUTRAL_COLORS, fallback_initials(store)));

    StoreMetadata {
        colors,
        initials,
        premium: is_premium(store),
    }
}

/// Whether the store requires a premium-tier retrieval credential. Matches
/// the same way as [`resolve`].
pub fn is_premium(store: &str) -> bool {
    let key = store.trim().to_lowercase();
    config::PREMIUM_STORES.iter().any(|s| *s == key)
}

/// First two characters of the identifier, upper-cased.
fn fallback_initials(store: &str) -> String {
    store.trim().chars().take(2).collect::<String>().to_uppercase()
}
