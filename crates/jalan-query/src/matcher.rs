//! Name matching — resolving upstream place names to catalog records.

use jalan_catalog::{Catalog, PlaceRecord};

/// Pluggable name-to-record resolver. The enrichment join is generic over
/// this so stricter algorithms (edit distance, token overlap) can replace
/// the default without touching callers.
pub trait NameMatcher: Send + Sync {
    fn resolve<'a>(&self, catalog: &'a Catalog, name: &str) -> Option<&'a PlaceRecord>;
}

/// Default matcher: exact case-insensitive equality first, then
/// one-directional containment (catalog name contains the query — the
/// reverse direction is deliberately not attempted). First catalog match
/// wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl NameMatcher for SubstringMatcher {
    fn resolve<'a>(&self, catalog: &'a Catalog, name: &str) -> Option<&'a PlaceRecord> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        if let Some(record) = catalog.iter().find(|r| r.name.to_lowercase() == needle) {
            return Some(record);
        }

        catalog.iter().find(|r| r.name.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jalan_catalog::PlaceType;

    fn named(name: &str) -> PlaceRecord {
        PlaceRecord {
            name: name.into(),
            place_type: PlaceType::TouristSpot,
            ..Default::default()
        }
    }

    fn fixture() -> Catalog {
        Catalog::from_records(vec![
            named("Batu Caves Temple"),
            named("Petronas Twin Towers"),
            named("Petronas Gallery"),
        ])
    }

    #[test]
    fn test_exact_match_case_insensitive() {
        let catalog = fixture();
        let hit = SubstringMatcher.resolve(&catalog, "petronas twin towers").unwrap();
        assert_eq!(hit.name, "Petronas Twin Towers");
    }

    #[test]
    fn test_substring_fallback() {
        let catalog = fixture();
        let hit = SubstringMatcher.resolve(&catalog, "Batu Caves").unwrap();
        assert_eq!(hit.name, "Batu Caves Temple");
    }

    #[test]
    fn test_first_match_wins_on_ambiguity() {
        let catalog = fixture();
        let hit = SubstringMatcher.resolve(&catalog, "Petronas").unwrap();
        assert_eq!(hit.name, "Petronas Twin Towers");
    }

    #[test]
    fn test_reverse_containment_not_attempted() {
        let catalog = fixture();
        // Query longer than the catalog name must not match
        assert!(SubstringMatcher
            .resolve(&catalog, "Batu Caves Temple and Ramayana Cave")
            .is_none());
    }

    #[test]
    fn test_no_match() {
        let catalog = fixture();
        assert!(SubstringMatcher.resolve(&catalog, "Nonexistent Place").is_none());
        assert!(SubstringMatcher.resolve(&catalog, "   ").is_none());
    }
}
