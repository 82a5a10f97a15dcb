//! Recommendation scorer — profile filters plus a time-of-day heuristic.

use chrono::{NaiveTime, Timelike};

use jalan_catalog::{Catalog, PlaceRecord, PlaceType};

use crate::format::format_place;
use crate::predicates::{
    is_open_now, is_wheelchair_accessible, matches_accessibility_requirement,
    matches_halal_requirement,
};
use crate::types::{AccessibilityPreference, DietaryPreference, PlaceView, UserProfile};

/// Score and rank places for a profile at a point in time.
///
/// The numeric score is internal only; the returned views carry a
/// human-readable reasoning string instead. Ranking is deterministic: the
/// sort is stable and ties keep catalog order.
pub fn recommend(
    catalog: &Catalog,
    profile: &UserProfile,
    at: NaiveTime,
    top_n: usize,
) -> Vec<PlaceView> {
    let mut scored: Vec<(u32, PlaceView)> = catalog
        .iter()
        .filter(|r| matches_halal_requirement(r.halal_status.as_deref(), profile.dietary))
        .filter(|r| {
            matches_accessibility_requirement(r.accessibility_info.as_deref(), profile.accessibility)
        })
        .map(|r| score_place(r, profile, at))
        .collect();

    // Stable sort: equal scores keep catalog order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(top_n);

    scored.into_iter().map(|(_, view)| view).collect()
}

fn score_place(record: &PlaceRecord, profile: &UserProfile, at: NaiveTime) -> (u32, PlaceView) {
    let hour = at.hour();
    let mut score = 0u32;
    let mut reasons: Vec<&str> = Vec::new();

    if is_open_now(record.opening_hours.as_deref(), at) {
        score += 3;
        reasons.push("open now");
    }

    // Time-of-day relevance. The meal windows don't overlap, so at most
    // one of them fires for a Food record.
    if record.place_type == PlaceType::Food {
        if (11..=14).contains(&hour) {
            score += 2;
            reasons.push("good for lunch");
        }
        if (18..=21).contains(&hour) {
            score += 2;
            reasons.push("good for dinner");
        }
    } else if (9..=17).contains(&hour) {
        score += 1;
        reasons.push("good time to visit");
    }

    // Stricter than the filter on purpose: only a certified "Halal" status
    // earns the bonus, "Muslim-Friendly" does not.
    if profile.dietary == DietaryPreference::HalalOnly
        && record.halal_status.as_deref() == Some("Halal")
    {
        score += 1;
        reasons.push("halal certified");
    }

    // Every survivor of the accessibility filter gets this bonus when the
    // requirement is set; it cancels out of the ranking but stays in the
    // reasoning text.
    if profile.accessibility == AccessibilityPreference::Wheelchair
        && is_wheelchair_accessible(record.accessibility_info.as_deref())
    {
        score += 1;
        reasons.push("wheelchair accessible");
    }

    let mut view = format_place(record, at);
    view.reasoning = Some(if reasons.is_empty() {
        "Popular choice".to_string()
    } else {
        capitalize_first(&reasons.join(", "))
    });

    (score, view)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::parse_clock;

    fn at(text: &str) -> NaiveTime {
        parse_clock(text).unwrap()
    }

    fn food(name: &str, hours: &str, halal: &str) -> PlaceRecord {
        PlaceRecord {
            name: name.into(),
            place_type: PlaceType::Food,
            opening_hours: Some(hours.into()),
            halal_status: Some(halal.into()),
            ..Default::default()
        }
    }

    fn spot(name: &str, hours: Option<&str>) -> PlaceRecord {
        PlaceRecord {
            name: name.into(),
            place_type: PlaceType::TouristSpot,
            opening_hours: hours.map(Into::into),
            ..Default::default()
        }
    }

    #[test]
    fn test_halal_lunch_scenario() {
        let catalog = Catalog::from_records(vec![
            food("Lunch Spot", "11:00-15:00", "Halal"),
            food("Breakfast Spot", "08:00-10:00", "Non-Halal"),
        ]);
        let profile = UserProfile {
            dietary: DietaryPreference::HalalOnly,
            ..Default::default()
        };

        let results = recommend(&catalog, &profile, at("12:00"), 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Lunch Spot");

        let reasoning = results[0].reasoning.as_deref().unwrap();
        assert_eq!(reasoning, "Open now, good for lunch, halal certified");
    }

    #[test]
    fn test_sorted_by_non_increasing_score_with_stable_ties() {
        let catalog = Catalog::from_records(vec![
            spot("Closed Spot A", None),
            spot("Open Spot", Some("09:00-18:00")),
            spot("Closed Spot B", None),
        ]);

        let results = recommend(&catalog, &UserProfile::default(), at("10:00"), 5);
        let names: Vec<&str> = results.iter().map(|v| v.name.as_str()).collect();
        // Open Spot scores 3+1; the closed spots tie at 1 and keep catalog order
        assert_eq!(names, ["Open Spot", "Closed Spot A", "Closed Spot B"]);
    }

    #[test]
    fn test_deterministic_for_fixed_inputs() {
        let catalog = Catalog::from_records(vec![
            food("Mamak Corner", "24/7", "Halal"),
            food("Kopitiam Lama", "07:00-14:00", "Muslim-Friendly"),
            spot("Museum", Some("09:00-17:00")),
        ]);
        let profile = UserProfile {
            dietary: DietaryPreference::HalalOnly,
            ..Default::default()
        };

        let first = recommend(&catalog, &profile, at("13:00"), 3);
        let second = recommend(&catalog, &profile, at("13:00"), 3);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_dinner_window_and_fallback_reasoning() {
        let catalog = Catalog::from_records(vec![
            food("Dinner Place", "18:00-23:00", "N/A"),
            spot("Night Market", None),
        ]);

        let results = recommend(&catalog, &UserProfile::default(), at("19:00"), 5);
        assert_eq!(results[0].name, "Dinner Place");
        assert_eq!(
            results[0].reasoning.as_deref(),
            Some("Open now, good for dinner")
        );
        // No reason triggered outside visiting hours for a closed spot
        assert_eq!(results[1].reasoning.as_deref(), Some("Popular choice"));
    }

    #[test]
    fn test_muslim_friendly_passes_filter_but_misses_bonus() {
        let catalog = Catalog::from_records(vec![
            food("Certified", "11:00-15:00", "Muslim-Friendly"),
            food("Also Certified", "11:00-15:00", "Halal"),
        ]);
        let profile = UserProfile {
            dietary: DietaryPreference::HalalOnly,
            ..Default::default()
        };

        let results = recommend(&catalog, &profile, at("12:00"), 5);
        assert_eq!(results.len(), 2);
        // The strictly-Halal record outscores the Muslim-Friendly one
        assert_eq!(results[0].name, "Also Certified");
        assert!(results[0]
            .reasoning
            .as_deref()
            .unwrap()
            .contains("halal certified"));
        assert!(!results[1]
            .reasoning
            .as_deref()
            .unwrap()
            .contains("halal certified"));
    }

    #[test]
    fn test_top_n_truncates() {
        let records: Vec<PlaceRecord> = (0..10)
            .map(|i| spot(&format!("Spot {i}"), Some("09:00-17:00")))
            .collect();
        let catalog = Catalog::from_records(records);

        let results = recommend(&catalog, &UserProfile::default(), at("10:00"), 3);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].name, "Spot 0");
    }
}
