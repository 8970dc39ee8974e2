use serde::{Deserialize, Deserializer, Serialize};

use super::classification::{Category, Condition, RecommendationTier};

pub const DEFAULT_VALUE_SCORE: i64 = 50;
pub const DEFAULT_PRICE_DELTA: &str = "0%";

// ---------------------------------------------------------------------------
// Listing — One store's offer, as returned by the search service
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "tienda")]
    pub store: String,
    #[serde(rename = "nombre_crudo", default)]
    pub raw_name: String,
    #[serde(rename = "nombre_normalizado", default)]
    pub normalized_name: Option<String>,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "recomendacion", default)]
    pub recommendation: RecommendationTier,
    #[serde(rename = "condicion", default)]
    pub condition: Condition,
    #[serde(rename = "categoria", default)]
    pub category: Category,
    #[serde(
        rename = "valor_score",
        default,
        deserialize_with = "lenient_score"
    )]
    pub value_score: Option<i64>,
    #[serde(rename = "precio_vs_promedio", default)]
    pub price_delta: Option<String>,
    #[serde(rename = "especificaciones_detectadas", default)]
    pub specifications: Vec<String>,
    #[serde(rename = "razon", default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub url: String,
    /// Star rating out of 5, when the store exposes one.
    #[serde(rename = "reviews", default)]
    pub rating: Option<f64>,
}

impl Listing {
    /// Normalized name, or the raw name when the analysis did not provide one.
    pub fn display_name(&self) -> &str {
        match self.normalized_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.raw_name,
        }
    }

    /// Value score as sent, before clamping.
    pub fn value_score(&self) -> i64 {
        self.value_score.unwrap_or(DEFAULT_VALUE_SCORE)
    }

    /// Whether the price is usable for ranking and aggregation: finite and
    /// not negative.
    pub fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }

    pub fn price_delta(&self) -> &str {
        self.price_delta.as_deref().unwrap_or(DEFAULT_PRICE_DELTA)
    }
}

/// Accepts integer or float scores; floats are rounded.
fn lenient_score<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(value.and_then(|n| {
        n.as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64))
    }))
}
