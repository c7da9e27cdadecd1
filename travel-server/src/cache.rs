//! Caching layer for nearby suggestions.
//!
//! Nearby results depend only on the request, the catalog snapshot and the
//! search history, so repeated searches within the TTL reuse the ranked
//! result. Entries go stale when history changes; the TTL bounds that.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{EngineError, name_key};
use crate::engine::{EngineConfig, NearbyRequest, NearbySuggestions};

/// Cache key for nearby results.
///
/// The requester is part of the key because results flag the requester's
/// preferred destinations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuggestionKey {
    /// Normalised center: `name:<lowercase name>` or `at:<lat>,<lng>`,
    /// with `|name:<lowercase name>` appended when both are given.
    center: String,
    /// Effective radius in metres.
    radius_m: u64,
    limit: usize,
    requester: String,
}

impl SuggestionKey {
    /// Build the key for a request, applying the configured defaults.
    ///
    /// Fails with the same validation errors the engine would return.
    pub fn for_request(request: &NearbyRequest, config: &EngineConfig) -> Result<Self, EngineError> {
        let radius_km = request.radius(config)?;
        let limit = request.limit(config)?;

        let center = match (&request.center.coordinates, &request.center.name) {
            (Some(c), Some(name)) if !name.trim().is_empty() => {
                format!("at:{:.5},{:.5}|name:{}", c.lat, c.lng, name_key(name))
            }
            (Some(c), _) => format!("at:{:.5},{:.5}", c.lat, c.lng),
            (None, Some(name)) if !name.trim().is_empty() => format!("name:{}", name_key(name)),
            _ => {
                return Err(EngineError::validation(
                    "a destination name or coordinates are required",
                ));
            }
        };

        Ok(Self {
            center,
            radius_m: (radius_km * 1000.0).round() as u64,
            limit,
            requester: request.requester_id.trim().to_string(),
        })
    }
}

/// Cached nearby result.
type SuggestionEntry = Arc<NearbySuggestions>;

/// Configuration for the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Cache for nearby suggestion results.
pub struct SuggestionCache {
    entries: MokaCache<SuggestionKey, SuggestionEntry>,
}

impl SuggestionCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let entries = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { entries }
    }

    /// Get a cached result.
    pub async fn get(&self, key: &SuggestionKey) -> Option<SuggestionEntry> {
        self.entries.get(key).await
    }

    /// Insert a result into the cache.
    pub async fn insert(&self, key: SuggestionKey, entry: SuggestionEntry) {
        self.entries.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;
    use crate::engine::{CenterRef, ResolvedCenter};

    fn empty_result() -> SuggestionEntry {
        Arc::new(NearbySuggestions {
            center: ResolvedCenter {
                name: Some("Islamabad".to_string()),
                coordinates: Coordinates::new(33.6844, 73.0479),
            },
            radius_km: 300.0,
            total: 0,
            suggestions: vec![],
            user_preferences: vec![],
        })
    }

    fn key(name: &str, requester: &str) -> SuggestionKey {
        let request = NearbyRequest::new(CenterRef::named(name), requester);
        SuggestionKey::for_request(&request, &EngineConfig::default()).unwrap()
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.max_capacity, 1000);
    }

    #[test]
    fn key_normalises_names_and_applies_defaults() {
        assert_eq!(key("Islamabad", "u1"), key("  islamabad ", "u1"));
        assert_ne!(key("Islamabad", "u1"), key("Islamabad", "u2"));

        let explicit = NearbyRequest::new(CenterRef::named("Islamabad"), "u1")
            .with_radius(300.0)
            .with_limit(5);
        assert_eq!(
            SuggestionKey::for_request(&explicit, &EngineConfig::default()).unwrap(),
            key("Islamabad", "u1")
        );
    }

    #[test]
    fn named_coordinates_get_their_own_key() {
        let at = Coordinates::new(33.6844, 73.0479);
        let both = NearbyRequest::new(
            CenterRef {
                name: Some("Islamabad".to_string()),
                coordinates: Some(at),
            },
            "",
        );
        let only = NearbyRequest::new(CenterRef::at(at), "");
        let blank = NearbyRequest::new(
            CenterRef {
                name: Some("  ".to_string()),
                coordinates: Some(at),
            },
            "",
        );
        let config = EngineConfig::default();
        let only_key = SuggestionKey::for_request(&only, &config).unwrap();
        assert_ne!(SuggestionKey::for_request(&both, &config).unwrap(), only_key);
        assert_eq!(SuggestionKey::for_request(&blank, &config).unwrap(), only_key);
    }

    #[test]
    fn key_rejects_invalid_requests() {
        let config = EngineConfig::default();
        let no_center = NearbyRequest::new(CenterRef::default(), "");
        assert!(SuggestionKey::for_request(&no_center, &config).is_err());

        let too_far = NearbyRequest::new(CenterRef::named("Islamabad"), "").with_radius(5000.0);
        assert!(SuggestionKey::for_request(&too_far, &config).is_err());
    }

    #[tokio::test]
    async fn insert_and_get() {
        let cache = SuggestionCache::new(&CacheConfig::default());
        assert!(cache.get(&key("Islamabad", "")).await.is_none());

        cache.insert(key("Islamabad", ""), empty_result()).await;

        let cached = cache.get(&key("ISLAMABAD", "")).await.unwrap();
        assert_eq!(cached.radius_km, 300.0);
        assert!(cache.get(&key("Lahore", "")).await.is_none());
    }

    #[tokio::test]
    async fn invalidate_all_clears_entries() {
        let cache = SuggestionCache::new(&CacheConfig::default());
        cache.insert(key("Islamabad", ""), empty_result()).await;
        cache.invalidate_all();
        assert!(cache.get(&key("Islamabad", "")).await.is_none());
    }
}
