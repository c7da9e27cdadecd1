//! Destination popularity from historical searches.
//!
//! Only budget, planner and destination searches count. A search naming
//! several destinations counts once for each distinct destination. Names are
//! grouped case-insensitively; the first spelling seen is kept for display.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{SearchHistoryEntry, name_key};

use super::rank::top_n;

/// How often and how recently a destination was searched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popularity {
    /// Display name (first spelling seen).
    pub name: String,
    pub count: u32,
    pub last_searched_at: DateTime<Utc>,
}

/// Popularity keyed by lowercased destination name.
///
/// Backed by an ordered map so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopularityIndex {
    entries: BTreeMap<String, Popularity>,
}

impl PopularityIndex {
    /// Look up a destination by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Popularity> {
        self.entries.get(&name_key(name))
    }

    /// Search count for a destination, zero when never searched.
    pub fn count(&self, name: &str) -> u32 {
        self.get(name).map_or(0, |p| p.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Popularity)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn record(&mut self, name: &str, at: DateTime<Utc>) {
        self.entries
            .entry(name_key(name))
            .and_modify(|p| {
                p.count += 1;
                if at > p.last_searched_at {
                    p.last_searched_at = at;
                }
            })
            .or_insert_with(|| Popularity {
                name: name.trim().to_string(),
                count: 1,
                last_searched_at: at,
            });
    }
}

fn aggregate_entries<'a>(entries: impl Iterator<Item = &'a SearchHistoryEntry>) -> PopularityIndex {
    let mut index = PopularityIndex::default();

    for entry in entries.filter(|e| e.search_type.counts_for_popularity()) {
        let mut seen: Vec<String> = Vec::with_capacity(entry.destinations.len());
        for name in &entry.destinations {
            let key = name_key(name);
            if key.is_empty() || seen.contains(&key) {
                continue;
            }
            index.record(name, entry.searched_at);
            seen.push(key);
        }
    }

    index
}

/// Count searches per destination across all users.
pub fn aggregate(history: &[SearchHistoryEntry]) -> PopularityIndex {
    aggregate_entries(history.iter())
}

/// The requester's `n` most-searched destination names.
///
/// Ordered by search count, then most recent search; remaining ties fall
/// back to name order. Anonymous requesters (blank id) have no preferences.
pub fn user_preferences(history: &[SearchHistoryEntry], user_id: &str, n: usize) -> Vec<String> {
    if user_id.trim().is_empty() {
        return Vec::new();
    }

    let index = aggregate_entries(history.iter().filter(|e| e.user_id == user_id));
    let candidates: Vec<Popularity> = index.entries.into_values().collect();

    top_n(candidates, |p| (p.count, p.last_searched_at), n)
        .into_iter()
        .map(|p| p.name)
        .collect()
}
