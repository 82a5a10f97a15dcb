//! Enrichment join — attaching catalog fields onto upstream activities.
//!
//! The upstream itinerary service returns little more than place names.
//! Enrichment is best-effort and must never fail the caller: an unmatched
//! name degrades to "no enrichment".

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use jalan_catalog::Catalog;

use crate::format::format_place;
use crate::matcher::NameMatcher;

/// One itinerary activity as produced upstream, plus the optional fields
/// the join fills in. Fields this service doesn't know about are kept in
/// `extra` and round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItineraryActivity {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(rename = "type", default)]
    pub activity_type: Option<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub halal_status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub accessibility_info: Option<String>,
    #[serde(default)]
    pub how_to_get_there: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Enrich one activity. The input is the baseline; nothing upstream
/// supplied is dropped. On a match, each enrichable field is overwritten
/// only when the catalog value is non-empty — catalog data wins over
/// whatever the activity carried, but emptiness never overwrites.
pub fn enrich(
    catalog: &Catalog,
    matcher: &dyn NameMatcher,
    mut activity: ItineraryActivity,
    at: NaiveTime,
) -> ItineraryActivity {
    let Some(name) = activity.place.clone().filter(|n| !n.trim().is_empty()) else {
        return activity;
    };
    let Some(record) = matcher.resolve(catalog, &name) else {
        return activity;
    };

    let view = format_place(record, at);
    overwrite(&mut activity.image_url, view.image_url);
    overwrite(&mut activity.address, view.address);
    overwrite(&mut activity.opening_hours, view.opening_hours);
    overwrite(&mut activity.price_range, view.price_range);
    overwrite(&mut activity.halal_status, view.halal_status);
    overwrite(&mut activity.description, view.description);
    overwrite(&mut activity.accessibility_info, view.accessibility_info);
    overwrite(&mut activity.how_to_get_there, view.how_to_get_there);

    activity
}

/// Element-wise enrichment of an itinerary.
pub fn enrich_all(
    catalog: &Catalog,
    matcher: &dyn NameMatcher,
    activities: Vec<ItineraryActivity>,
    at: NaiveTime,
) -> Vec<ItineraryActivity> {
    activities
        .into_iter()
        .map(|a| enrich(catalog, matcher, a, at))
        .collect()
}

fn overwrite(field: &mut Option<String>, catalog_value: Option<String>) {
    if catalog_value.is_some() {
        *field = catalog_value;
    }
}
