//! Planner request/response types.

use serde::{Deserialize, Serialize};

use jalan_query::{AccessibilityPreference, DietaryPreference, ItineraryActivity, TransportMode};

/// Columns streamed by the upstream action table, in pipeline order.
pub const STEP_COLUMNS: &[&str] = &[
    "step1_parse",
    "step2_breakfast",
    "step3_morning",
    "step4_lunch",
    "step5_afternoon",
    "step6_dinner",
    "step7_validate",
    "step8_final",
];

/// Request forwarded to the upstream itinerary table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryRequest {
    /// Day start as `"HH:MM"`.
    pub start_time: String,
    #[serde(default)]
    pub dietary: DietaryPreference,
    #[serde(default)]
    pub transport: TransportMode,
    #[serde(default)]
    pub accessibility: AccessibilityPreference,
}

/// Free-text intermediate steps returned by the upstream table. All
/// optional: the table may skip steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReasoningChain {
    pub step1_parse: Option<String>,
    pub step2_breakfast: Option<String>,
    pub step3_morning: Option<String>,
    pub step4_lunch: Option<String>,
    pub step5_afternoon: Option<String>,
    pub step6_dinner: Option<String>,
    pub step7_validate: Option<String>,
    pub step8_final: Option<String>,
}

impl ReasoningChain {
    /// Assemble the chain from accumulated per-column text. Empty columns
    /// stay `None`.
    pub fn from_columns(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let mut step = |name: &str| lookup(name).filter(|s| !s.is_empty());
        Self {
            step1_parse: step("step1_parse"),
            step2_breakfast: step("step2_breakfast"),
            step3_morning: step("step3_morning"),
            step4_lunch: step("step4_lunch"),
            step5_afternoon: step("step5_afternoon"),
            step6_dinner: step("step6_dinner"),
            step7_validate: step("step7_validate"),
            step8_final: step("step8_final"),
        }
    }
}

/// The structured payload the final step is expected to contain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItineraryPayload {
    #[serde(default)]
    pub itinerary: Vec<ItineraryActivity>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub transport_notes: Option<String>,
}

/// Outcome of parsing the upstream final step. Callers must handle the
/// malformed case explicitly; there is no default-valued fallback here.
#[derive(Debug, Clone)]
pub enum UpstreamOutcome {
    Parsed(ItineraryPayload),
    Malformed { raw: String },
}

/// Everything one upstream call produced.
#[derive(Debug, Clone)]
pub struct GeneratedItinerary {
    pub outcome: UpstreamOutcome,
    pub reasoning: ReasoningChain,
}

/// A single increment from the streaming call.
#[derive(Debug)]
pub enum PlannerChunk {
    /// Partial text for one named step column.
    Token { step: String, text: String },
    /// Stream finished; carries the assembled result.
    Done(Box<GeneratedItinerary>),
    /// Transport or protocol failure; the stream ends after this.
    Error(String),
}
