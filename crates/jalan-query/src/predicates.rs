//! Predicate library — pure, total functions over record text fields.
//!
//! Every function here is safe to call with absent or garbage input: a
//! value that cannot be interpreted yields the conservative default
//! (closed / inaccessible / unknown price), never an error.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{AccessibilityPreference, DietaryPreference};

/// Sentinel for prices that cannot be extracted. Large so unknown prices
/// sort last and fail every band check.
pub const PRICE_UNKNOWN: u32 = 999_999;

/// First `HH:MM - HH:MM` (or `HH:MM to HH:MM`) interval in free text.
static HOURS_INTERVAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,2}:\d{2})\s*(?:-|to)\s*(\d{1,2}:\d{2})").unwrap());

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Accessibility phrases that veto a positive match.
const NEGATIVE_ACCESS: &[&str] = &["not wheelchair", "no wheelchair", "stairs only", "no elevator"];

/// Accessibility keywords that count as a positive signal.
const POSITIVE_ACCESS: &[&str] = &["wheelchair", "ramp", "lift", "elevator", "accessible"];

/// Parse a clock string: 24-hour `HH:MM` first, 12-hour `H:MM AM/PM` as
/// fallback.
pub fn parse_clock(text: &str) -> Option<NaiveTime> {
    let trimmed = text.trim();
    if let Ok(t) = NaiveTime::parse_from_str(trimmed, "%H:%M") {
        return Some(t);
    }
    // chrono's %p wants an upper-case meridian
    NaiveTime::parse_from_str(&trimmed.to_uppercase(), "%I:%M %p").ok()
}

/// Whether a place is open at `at`, given its free-text opening hours.
///
/// A 24-hour marker is unconditionally open. Otherwise the first parseable
/// interval decides; `close < open` means the interval crosses midnight.
/// No interval, or an unparsable endpoint, is conservatively "not open".
pub fn is_open_now(opening_hours: Option<&str>, at: NaiveTime) -> bool {
    let Some(text) = opening_hours else {
        return false;
    };
    let text = text.trim();

    if text.contains("24/7") || text.to_lowercase().contains("24 hours") {
        return true;
    }

    let Some(caps) = HOURS_INTERVAL.captures(text) else {
        return false;
    };
    let (Some(open), Some(close)) = (parse_clock(&caps[1]), parse_clock(&caps[2])) else {
        return false;
    };

    if close < open {
        at >= open || at <= close
    } else {
        open <= at && at <= close
    }
}

/// Whether accessibility free text indicates wheelchair access.
/// Negative phrases veto positives even when both are present.
pub fn is_wheelchair_accessible(accessibility_info: Option<&str>) -> bool {
    let Some(text) = accessibility_info else {
        return false;
    };
    let lower = text.to_lowercase();
    if lower.trim().is_empty() {
        return false;
    }

    if NEGATIVE_ACCESS.iter().any(|kw| lower.contains(kw)) {
        return false;
    }
    POSITIVE_ACCESS.iter().any(|kw| lower.contains(kw))
}

/// Whether a halal status satisfies the requirement, or whether
/// `requirement` holds the predicate vacuously.
///
/// This normalized check (trim + case-fold against "halal" and
/// "muslim-friendly") is the single canonical halal predicate; the search
/// filter and the recommender both route through it.
pub fn matches_halal_requirement(
    halal_status: Option<&str>,
    requirement: DietaryPreference,
) -> bool {
    match requirement {
        DietaryPreference::NoPreference => true,
        DietaryPreference::HalalOnly => is_halal_friendly(halal_status),
    }
}

/// Normalized membership in the halal-acceptable set.
pub fn is_halal_friendly(halal_status: Option<&str>) -> bool {
    let Some(status) = halal_status else {
        return false;
    };
    let normalized = status.trim().to_lowercase();
    normalized == "halal" || normalized == "muslim-friendly"
}

/// Whether a record satisfies the accessibility requirement.
pub fn matches_accessibility_requirement(
    accessibility_info: Option<&str>,
    requirement: AccessibilityPreference,
) -> bool {
    match requirement {
        AccessibilityPreference::NoPreference => true,
        AccessibilityPreference::Wheelchair => is_wheelchair_accessible(accessibility_info),
    }
}

/// Extract the minimum price from free text like `"RM20-40"` or `"Free"`.
///
/// "Free" anywhere (any case) wins over digits. Otherwise the first run of
/// decimal digits; absent text, no digits, or an overflowing run yields
/// [`PRICE_UNKNOWN`].
pub fn extract_min_price(price_text: Option<&str>) -> u32 {
    let Some(text) = price_text else {
        return PRICE_UNKNOWN;
    };

    if text.to_lowercase().contains("free") {
        return 0;
    }

    DIGIT_RUN
        .find(text)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(PRICE_UNKNOWN)
}
