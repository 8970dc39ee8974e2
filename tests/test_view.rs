//! View-model assembly from a search payload.

mod common;

use pricefinder::classify::BadgeStyle;
use pricefinder::format::{DeltaTone, ValueTier};
use pricefinder::{PriceFinderError, SearchData, ViewModel, ViewRecord};

#[test]
fn view_model_ranks_and_aggregates() {
    let view = ViewModel::build(common::sample_data()).unwrap();

    assert_eq!(view.listings.len(), 5);
    assert_eq!(view.listings[0].listing.store, "amazon.com");
    assert_eq!(view.statistics.total_count, 5);
    assert_eq!(view.statistics.min_price, 199.5);
    assert_eq!(view.stat_cards.len(), 4);
    assert_eq!(view.chart.labels[0], "amazon.com");
    assert!(view.summary.starts_with("Amazon"));
}

#[test]
fn insights_carry_rotating_styles() {
    let view = ViewModel::build(common::sample_data()).unwrap();

    assert_eq!(view.insights.len(), 4);
    assert_eq!(view.insights[0].style, view.insights[3].style);
    assert_ne!(view.insights[0].style, view.insights[1].style);
}

#[test]
fn missing_insights_produce_empty_list() {
    let mut data = common::sample_data();
    data.insights = None;
    let view = ViewModel::build(data).unwrap();
    assert!(view.insights.is_empty());
}

#[test]
fn empty_payload_is_empty_input() {
    let data = SearchData {
        summary: "nothing".into(),
        insights: None,
        listings: Vec::new(),
    };
    assert!(matches!(
        ViewModel::build(data),
        Err(PriceFinderError::EmptyInput)
    ));
}

#[test]
fn negative_price_listing_is_dropped_from_the_view() {
    let payload = serde_json::json!({
        "summary": "mixed",
        "products": [
            {"tienda": "amazon.com", "precio": -50.0, "recomendacion": "🏆 Mejor Opción"},
            {"tienda": "ebay.com", "precio": 30.0, "recomendacion": "🏆 Mejor Opción"}
        ]
    });
    let data: SearchData = serde_json::from_value(payload).unwrap();
    let view = ViewModel::build(data).unwrap();

    assert_eq!(view.listings.len(), 1);
    assert_eq!(view.listings[0].listing.store, "ebay.com");
    assert_eq!(view.statistics.average_price, 30.0);
    assert_eq!(view.statistics.min_price, 30.0);
    assert_eq!(view.chart.labels, vec!["ebay.com".to_string()]);
}

#[test]
fn payload_with_only_invalid_prices_is_empty_input() {
    let mut data = common::sample_data();
    for listing in &mut data.listings {
        listing.price = -listing.price;
    }
    assert!(matches!(
        ViewModel::build(data),
        Err(PriceFinderError::EmptyInput)
    ));
}

#[test]
fn view_record_resolves_every_token() {
    let mut listing = common::listing("WALMART.COM", 259.0, "✅ Buena Alternativa");
    listing.normalized_name = Some("Sony WH-1000XM5".into());
    listing.value_score = Some(150);
    listing.price_delta = Some("-4%".into());
    listing.rating = Some(4.5);

    let record = ViewRecord::new(listing);
    assert_eq!(record.display_name, "Sony WH-1000XM5");
    assert_eq!(record.badge, BadgeStyle::Info);
    assert_eq!(record.badge_class, BadgeStyle::Info.css_class());
    assert_eq!(record.store_meta.initials, "WM");
    assert!(record.store_meta.premium);
    assert_eq!(record.value.percent, 100);
    assert_eq!(record.value.tier, ValueTier::Best);
    assert_eq!(record.delta_tone, DeltaTone::Favorable);
    assert_eq!(record.condition_tag.label, "Unknown");
    assert!(record.stars.unwrap().half);
}

#[test]
fn view_record_defaults() {
    let record = ViewRecord::new(common::listing("foo.bar", 10.0, "?"));
    assert_eq!(record.value.percent, 50);
    assert_eq!(record.value.tier, ValueTier::Mid);
    assert_eq!(record.delta_tone, DeltaTone::Unfavorable);
    assert_eq!(record.badge, BadgeStyle::Neutral);
    assert!(record.stars.is_none());
}

#[test]
fn view_model_serializes_flat_listing_fields() {
    let view = ViewModel::build(common::sample_data()).unwrap();
    let json = serde_json::to_value(&view).unwrap();

    let first = &json["listings"][0];
    assert_eq!(first["tienda"], "amazon.com");
    assert_eq!(first["badge"], "success");
    assert_eq!(first["store_meta"]["initials"], "AM");
    assert_eq!(json["insights"][0]["icon"], "fa-lightbulb");
}
