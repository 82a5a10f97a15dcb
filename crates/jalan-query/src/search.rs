//! Search pipeline — ordered, order-preserving filters over the catalog.

use chrono::NaiveTime;
use tracing::debug;

use jalan_catalog::{Catalog, PlaceRecord, PlaceType};

use crate::format::format_place;
use crate::predicates::{
    extract_min_price, is_open_now, matches_accessibility_requirement, matches_halal_requirement,
};
use crate::types::{PlaceTypeFilter, PlaceView, SearchCriteria};

/// Search and filter places. Filters never reorder; results come back in
/// catalog order.
pub fn search(catalog: &Catalog, criteria: &SearchCriteria, at: NaiveTime) -> Vec<PlaceView> {
    let results: Vec<PlaceView> = catalog
        .iter()
        .filter(|r| matches_type(r, criteria.place_type))
        .filter(|r| matches_halal_requirement(r.halal_status.as_deref(), criteria.halal_status))
        .filter(|r| {
            matches_accessibility_requirement(
                r.accessibility_info.as_deref(),
                criteria.accessibility,
            )
        })
        .filter(|r| matches_price_band(r, criteria))
        .filter(|r| !criteria.filter_open_now || is_open_now(r.opening_hours.as_deref(), at))
        .filter(|r| matches_query(r, &criteria.search_query))
        .map(|r| format_place(r, at))
        .collect();

    debug!(
        matched = results.len(),
        total = catalog.len(),
        "search filtered catalog"
    );
    results
}

fn matches_type(record: &PlaceRecord, filter: PlaceTypeFilter) -> bool {
    match filter {
        PlaceTypeFilter::All => true,
        PlaceTypeFilter::Food => record.place_type == PlaceType::Food,
        PlaceTypeFilter::TouristSpot => record.place_type == PlaceType::TouristSpot,
    }
}

fn matches_price_band(record: &PlaceRecord, criteria: &SearchCriteria) -> bool {
    match criteria.price_range.range() {
        None => true,
        Some((min, max)) => {
            let price = extract_min_price(record.price_range.as_deref());
            min <= price && price <= max
        }
    }
}

/// Case-insensitive substring match over the searchable text fields.
/// Missing fields simply don't match.
fn matches_query(record: &PlaceRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let mut fields = [
        Some(record.name.as_str()),
        record.description.as_deref(),
        record.category.as_deref(),
        record.cuisine.as_deref(),
        record.famous_for.as_deref(),
    ]
    .into_iter()
    .flatten();

    fields.any(|f| f.to_lowercase().contains(&needle))
}
