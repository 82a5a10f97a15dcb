//! API parity tests — validates that response shapes match what the
//! frontend expects, using synthetic catalogs and direct calls into the
//! query engine (no HTTP server needed).

use jalan_catalog::{Catalog, PlaceRecord, PlaceType};
use jalan_query::predicates::parse_clock;
use jalan_query::{
    enrich_all, format_place, recommend, search, SearchCriteria, SubstringMatcher, UserProfile,
};

fn fixture() -> Catalog {
    Catalog::from_records(vec![
        PlaceRecord {
            name: "Batu Caves Temple".into(),
            place_type: PlaceType::TouristSpot,
            opening_hours: Some("06:00-21:00".into()),
            image_url: Some("https://example.com/batu.jpg".into()),
            ticket_price: Some("Free".into()),
            ..Default::default()
        },
        PlaceRecord {
            name: "Nasi Kandar Pelita".into(),
            place_type: PlaceType::Food,
            halal_status: Some("Halal".into()),
            opening_hours: Some("24/7".into()),
            price_range: Some("RM10-25".into()),
            ..Default::default()
        },
    ])
}

/// Verify the place view wire field names, exactly as the frontend's
/// Place interface reads them. Absent values must be explicit null.
#[test]
fn test_place_view_wire_names() {
    let catalog = fixture();
    let view = format_place(&catalog.records()[0], parse_clock("12:00").unwrap());
    let json = serde_json::to_value(&view).unwrap();

    for key in [
        "name",
        "type",
        "image_url",
        "category",
        "cuisine",
        "price_range",
        "halal_status",
        "address",
        "opening_hours",
        "is_open_now",
        "description",
        "accessibility_info",
        "is_wheelchair_accessible",
        "how_to_get_there",
        "contact",
        "famous_for",
        "ticket_price",
    ] {
        assert!(json.get(key).is_some(), "missing field {key}");
    }

    assert_eq!(json["type"], "Tourist Spot");
    assert!(json["address"].is_null());
    assert_eq!(json["is_open_now"], true);
    // reasoning only appears on recommendations
    assert!(json.get("reasoning").is_none());
}

/// Verify the search response shape: { results, total_count, filters_applied }.
#[test]
fn test_search_response_shape() {
    let catalog = fixture();
    let criteria = SearchCriteria::default();
    let results = search(&catalog, &criteria, parse_clock("12:00").unwrap());

    let response = serde_json::json!({
        "results": results,
        "total_count": results.len(),
        "filters_applied": criteria,
    });

    assert!(response["results"].is_array());
    assert_eq!(response["total_count"], 2);
    let filters = &response["filters_applied"];
    assert_eq!(filters["place_type"], "All");
    assert_eq!(filters["halal_status"], "No preference");
    assert_eq!(filters["filter_open_now"], false);
}

/// Verify criteria decode from the wire vocabulary.
#[test]
fn test_criteria_wire_vocabulary() {
    let criteria: SearchCriteria = serde_json::from_value(serde_json::json!({
        "place_type": "Tourist Spot",
        "price_range": "Budget",
        "halal_status": "Halal only",
        "accessibility": "Wheelchair-friendly",
        "search_query": "caves",
        "filter_open_now": true,
    }))
    .unwrap();

    assert_eq!(criteria.search_query, "caves");
    assert!(criteria.filter_open_now);

    // Unknown vocabulary is rejected, not silently defaulted
    let bad: Result<SearchCriteria, _> =
        serde_json::from_value(serde_json::json!({ "place_type": "Hotel" }));
    assert!(bad.is_err());
}

/// Verify the recommendations response shape and that reasoning is
/// attached while the internal score is not.
#[test]
fn test_recommendations_response_shape() {
    let catalog = fixture();
    let recommendations = recommend(
        &catalog,
        &UserProfile::default(),
        parse_clock("12:30").unwrap(),
        5,
    );

    let response = serde_json::json!({
        "recommendations": recommendations,
        "generated_at": "2026-01-01T12:30:00+00:00",
    });

    assert!(response["recommendations"].is_array());
    let first = &response["recommendations"][0];
    assert!(first["reasoning"].is_string());
    assert!(first.get("score").is_none());
    assert!(response["generated_at"].is_string());
}

/// Verify the enriched itinerary activity shape consumed by the trip
/// planner page.
#[test]
fn test_itinerary_activity_shape() {
    let catalog = fixture();
    let activities: Vec<jalan_query::ItineraryActivity> =
        serde_json::from_value(serde_json::json!([
            {
                "time": "09:00",
                "place": "Batu Caves",
                "type": "Tourist Spot",
                "reasoning": "Opens early"
            }
        ]))
        .unwrap();

    let enriched = enrich_all(
        &catalog,
        &SubstringMatcher,
        activities,
        parse_clock("09:00").unwrap(),
    );
    let json = serde_json::to_value(&enriched).unwrap();

    let activity = &json[0];
    assert_eq!(activity["time"], "09:00");
    assert_eq!(activity["place"], "Batu Caves");
    assert_eq!(activity["type"], "Tourist Spot");
    assert_eq!(activity["image_url"], "https://example.com/batu.jpg");
    assert!(activity["address"].is_null());
}
