//! Historical search records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of search that produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchType {
    BudgetSearch,
    Planner,
    Destination,
    Nearby,
    #[serde(other)]
    Other,
}

impl SearchType {
    /// Whether searches of this kind count towards destination popularity.
    pub fn counts_for_popularity(&self) -> bool {
        matches!(
            self,
            SearchType::BudgetSearch | SearchType::Planner | SearchType::Destination
        )
    }
}

/// One recorded search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub user_id: String,
    pub search_type: SearchType,
    /// Destination names referenced by the search.
    #[serde(default)]
    pub destinations: Vec<String>,
    pub searched_at: DateTime<Utc>,
}

impl SearchHistoryEntry {
    pub fn new(
        user_id: impl Into<String>,
        search_type: SearchType,
        destinations: Vec<String>,
        searched_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            search_type,
            destinations,
            searched_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_type_tags() {
        let t: SearchType = serde_json::from_str("\"budget-search\"").unwrap();
        assert_eq!(t, SearchType::BudgetSearch);

        let t: SearchType = serde_json::from_str("\"itinerary-pdf\"").unwrap();
        assert_eq!(t, SearchType::Other);
    }

    #[test]
    fn popularity_allow_list() {
        assert!(SearchType::BudgetSearch.counts_for_popularity());
        assert!(SearchType::Planner.counts_for_popularity());
        assert!(SearchType::Destination.counts_for_popularity());
        assert!(!SearchType::Nearby.counts_for_popularity());
        assert!(!SearchType::Other.counts_for_popularity());
    }

    #[test]
    fn deserializes_entry() {
        let json = r#"{
            "user_id": "u1",
            "search_type": "planner",
            "destinations": ["Hunza", "Skardu"],
            "searched_at": "2026-10-01T09:30:00Z"
        }"#;
        let entry: SearchHistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.destinations.len(), 2);
        assert_eq!(entry.search_type, SearchType::Planner);
    }
}
