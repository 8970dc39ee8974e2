use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RecommendationTier — the verdict attached to each listing upstream
// ---------------------------------------------------------------------------

/// Recommendation verdict for a listing.
///
/// The four-way vocabulary is the current one. Older analyses emitted a
/// three-value vocabulary, kept as [`LegacyTier`] so it can still be styled.
/// Anything else is preserved verbatim in [`RecommendationTier::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum RecommendationTier {
    BestChoice,
    GoodAlternative,
    Consider,
    NotRecommended,
    Legacy(LegacyTier),
    Unrecognized(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyTier {
    BestPrice,
    Alternative,
    NotRecommended,
}

impl RecommendationTier {
    /// Parse a wire label. Never fails; unknown labels are kept as-is.
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "🏆 Mejor Opción" | "Best Choice" => Self::BestChoice,
            "✅ Buena Alternativa" | "Good Alternative" => Self::GoodAlternative,
            "⚠️ Considerar" | "Consider" => Self::Consider,
            "❌ No Recomendado" | "Not Recommended" => Self::NotRecommended,
            "Mejor Precio" | "Best Price" => Self::Legacy(LegacyTier::BestPrice),
            "Alternativa" | "Alternative" => Self::Legacy(LegacyTier::Alternative),
            "No Recomendado" => Self::Legacy(LegacyTier::NotRecommended),
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The label as the analysis service spells it.
    pub fn label(&self) -> &str {
        match self {
            Self::BestChoice => "🏆 Mejor Opción",
            Self::GoodAlternative => "✅ Buena Alternativa",
            Self::Consider => "⚠️ Considerar",
            Self::NotRecommended => "❌ No Recomendado",
            Self::Legacy(LegacyTier::BestPrice) => "Mejor Precio",
            Self::Legacy(LegacyTier::Alternative) => "Alternativa",
            Self::Legacy(LegacyTier::NotRecommended) => "No Recomendado",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Sort precedence. Legacy and unrecognized tiers share the last slot.
    pub fn rank(&self) -> u8 {
        match self {
            Self::BestChoice => 0,
            Self::GoodAlternative => 1,
            Self::Consider => 2,
            Self::NotRecommended => 3,
            Self::Legacy(_) | Self::Unrecognized(_) => 4,
        }
    }
}

impl Default for RecommendationTier {
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl From<Option<String>> for RecommendationTier {
    fn from(label: Option<String>) -> Self {
        label.as_deref().map(Self::parse).unwrap_or_default()
    }
}

impl From<RecommendationTier> for String {
    fn from(tier: RecommendationTier) -> Self {
        match tier {
            RecommendationTier::Unrecognized(raw) => raw,
            other => other.label().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Condition {
    New,
    Refurbished,
    Used,
    #[default]
    Unknown,
}

impl Condition {
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "Nuevo" | "New" => Self::New,
            "Reacondicionado" | "Refurbished" => Self::Refurbished,
            "Usado" | "Used" => Self::Used,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "Nuevo",
            Self::Refurbished => "Reacondicionado",
            Self::Used => "Usado",
            Self::Unknown => "Desconocido",
        }
    }
}

impl From<Option<String>> for Condition {
    fn from(label: Option<String>) -> Self {
        label.as_deref().map(Self::parse).unwrap_or_default()
    }
}

impl From<Condition> for String {
    fn from(condition: Condition) -> Self {
        condition.label().to_string()
    }
}

// ---------------------------------------------------------------------------
// Category — how closely a listing matches the searched product
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Category {
    Identical,
    Similar,
    Alternative,
    Different,
    Unrecognized(String),
}

impl Category {
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "Idéntico" | "Identical" => Self::Identical,
            "Similar" => Self::Similar,
            "Alternativa" | "Alternative" => Self::Alternative,
            "Diferente" | "Different" => Self::Different,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Identical => "Idéntico",
            Self::Similar => "Similar",
            Self::Alternative => "Alternativa",
            Self::Different => "Diferente",
            Self::Unrecognized(raw) => raw,
        }
    }
}

/// A listing without a category is treated as a different product.
impl Default for Category {
    fn default() -> Self {
        Self::Different
    }
}

impl From<Option<String>> for Category {
    fn from(label: Option<String>) -> Self {
        label.as_deref().map(Self::parse).unwrap_or_default()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unrecognized(raw) => raw,
            other => other.label().to_string(),
        }
    }
}
