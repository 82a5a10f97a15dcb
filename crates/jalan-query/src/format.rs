//! Response formatting — catalog record to external place view.

use chrono::NaiveTime;

use jalan_catalog::PlaceRecord;

use crate::predicates::{is_open_now, is_wheelchair_accessible};
use crate::types::PlaceView;

/// Map a catalog record onto the external representation, computing the
/// derived booleans at the supplied evaluation time.
pub fn format_place(record: &PlaceRecord, at: NaiveTime) -> PlaceView {
    PlaceView {
        name: record.name.clone(),
        place_type: record.place_type.label().to_string(),
        image_url: record.image_url.clone(),
        category: record.category.clone(),
        cuisine: record.cuisine.clone(),
        price_range: record.price_range.clone(),
        halal_status: record.halal_status.clone(),
        address: record.address.clone(),
        opening_hours: record.opening_hours.clone(),
        is_open_now: is_open_now(record.opening_hours.as_deref(), at),
        description: record.description.clone(),
        accessibility_info: record.accessibility_info.clone(),
        is_wheelchair_accessible: is_wheelchair_accessible(record.accessibility_info.as_deref()),
        how_to_get_there: record.how_to_get_there.clone(),
        contact: record.contact.clone(),
        famous_for: record.famous_for.clone(),
        ticket_price: record.ticket_price.clone(),
        reasoning: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::parse_clock;
    use jalan_catalog::PlaceType;

    #[test]
    fn test_format_full_record() {
        let record = PlaceRecord {
            name: "Central Market".into(),
            place_type: PlaceType::TouristSpot,
            opening_hours: Some("10:00-21:30".into()),
            accessibility_info: Some("Wheelchair accessible, lifts available".into()),
            address: Some("Jalan Hang Kasturi, KL".into()),
            ticket_price: Some("Free".into()),
            how_to_get_there: Some("LRT Pasar Seni".into()),
            ..Default::default()
        };

        let view = format_place(&record, parse_clock("12:00").unwrap());
        assert_eq!(view.place_type, "Tourist Spot");
        assert!(view.is_open_now);
        assert!(view.is_wheelchair_accessible);
        // Full field set is mapped, not a subset
        assert_eq!(view.address.as_deref(), Some("Jalan Hang Kasturi, KL"));
        assert_eq!(view.ticket_price.as_deref(), Some("Free"));
        assert_eq!(view.how_to_get_there.as_deref(), Some("LRT Pasar Seni"));
        assert_eq!(view.reasoning, None);
    }

    #[test]
    fn test_format_sparse_record_booleans_default_false() {
        let record = PlaceRecord {
            name: "Unknown Stall".into(),
            place_type: PlaceType::Food,
            ..Default::default()
        };

        let view = format_place(&record, parse_clock("12:00").unwrap());
        assert!(!view.is_open_now);
        assert!(!view.is_wheelchair_accessible);
        assert_eq!(view.opening_hours, None);

        // Absent values serialize as explicit null, not ""
        let json = serde_json::to_value(&view).unwrap();
        assert!(json["address"].is_null());
        assert_eq!(json["type"], "Food");
        assert_eq!(json.get("reasoning"), None);
    }
}
