//! Catalog record types.

use serde::{Deserialize, Serialize};

/// Broad place classification carried by the `Type` source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceType {
    Food,
    TouristSpot,
}

impl PlaceType {
    /// Map a source label to a type. Anything that isn't "Food" is treated
    /// as a tourist spot rather than failing the row.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("food") {
            PlaceType::Food
        } else {
            PlaceType::TouristSpot
        }
    }

    /// The external label for this type.
    pub fn label(&self) -> &'static str {
        match self {
            PlaceType::Food => "Food",
            PlaceType::TouristSpot => "Tourist Spot",
        }
    }
}

impl std::fmt::Display for PlaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Default for PlaceType {
    fn default() -> Self {
        PlaceType::TouristSpot
    }
}

/// One row of the place catalog. Immutable after load.
///
/// Empty or whitespace-only source cells load as `None`; every optional
/// field here is free text owned by the dataset, not interpreted at load
/// time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub place_type: PlaceType,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub price_range: Option<String>,
    pub halal_status: Option<String>,
    pub address: Option<String>,
    pub opening_hours: Option<String>,
    pub description: Option<String>,
    pub accessibility_info: Option<String>,
    pub how_to_get_there: Option<String>,
    pub contact: Option<String>,
    pub famous_for: Option<String>,
    pub ticket_price: Option<String>,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_type_from_label() {
        assert_eq!(PlaceType::from_label("Food"), PlaceType::Food);
        assert_eq!(PlaceType::from_label(" food "), PlaceType::Food);
        assert_eq!(PlaceType::from_label("Tourist Spot"), PlaceType::TouristSpot);
        assert_eq!(PlaceType::from_label(""), PlaceType::TouristSpot);
    }

    #[test]
    fn test_place_type_label_round_trip() {
        assert_eq!(PlaceType::from_label(PlaceType::Food.label()), PlaceType::Food);
        assert_eq!(
            PlaceType::from_label(PlaceType::TouristSpot.label()),
            PlaceType::TouristSpot
        );
    }
}
