//! Request and response types for the query engine.
//!
//! Wire names (`"Halal only"`, `"Tourist Spot"`, ...) are fixed by the
//! published API surface and preserved verbatim via serde renames.

use serde::{Deserialize, Serialize};

/// Place type selector for search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaceTypeFilter {
    #[default]
    All,
    Food,
    #[serde(rename = "Tourist Spot")]
    TouristSpot,
}

/// Named inclusive price band over the extracted minimum price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceBand {
    #[default]
    All,
    Budget,
    Medium,
    Premium,
}

impl PriceBand {
    /// Inclusive `[min, max]` range, or `None` for `All`.
    pub fn range(&self) -> Option<(u32, u32)> {
        match self {
            PriceBand::All => None,
            PriceBand::Budget => Some((0, 30)),
            PriceBand::Medium => Some((30, 80)),
            PriceBand::Premium => Some((80, 9999)),
        }
    }
}

/// Dietary requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DietaryPreference {
    #[serde(rename = "Halal only")]
    HalalOnly,
    #[default]
    #[serde(rename = "No preference")]
    NoPreference,
}

/// Transport mode. Carried on the profile and forwarded upstream; not used
/// in filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransportMode {
    #[default]
    #[serde(rename = "Public transport")]
    Public,
    #[serde(rename = "Taxi/Grab")]
    Taxi,
    #[serde(rename = "Own vehicle")]
    OwnVehicle,
}

/// Accessibility requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibilityPreference {
    #[serde(rename = "Wheelchair-friendly")]
    Wheelchair,
    #[default]
    #[serde(rename = "No preference")]
    NoPreference,
}

/// Per-request search criteria. No identity; constructed per call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub place_type: PlaceTypeFilter,
    #[serde(default)]
    pub price_range: PriceBand,
    #[serde(default)]
    pub halal_status: DietaryPreference,
    #[serde(default)]
    pub accessibility: AccessibilityPreference,
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub filter_open_now: bool,
    /// Evaluation time as `"HH:MM"`. Defaults to the wall clock at the
    /// HTTP boundary; tests always supply it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_time: Option<String>,
}

/// User profile for recommendations.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub dietary: DietaryPreference,
    #[serde(default)]
    pub transport: TransportMode,
    #[serde(default)]
    pub accessibility: AccessibilityPreference,
}

/// Externally visible place representation.
///
/// Missing values serialize as explicit `null`, never `""`. The two
/// computed booleans are always present even when the source text is
/// absent. `reasoning` is attached only by the recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceView {
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub price_range: Option<String>,
    pub halal_status: Option<String>,
    pub address: Option<String>,
    pub opening_hours: Option<String>,
    pub is_open_now: bool,
    pub description: Option<String>,
    pub accessibility_info: Option<String>,
    pub is_wheelchair_accessible: bool,
    pub how_to_get_there: Option<String>,
    pub contact: Option<String>,
    pub famous_for: Option<String>,
    pub ticket_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}
