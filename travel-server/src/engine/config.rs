//! Tuning parameters for the recommendation engine.

use chrono::Duration;

/// Configuration parameters for both ranking pipelines.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of budget recommendations to return.
    pub max_recommendations: usize,

    /// Nearby search radius when the caller does not give one (km).
    pub default_radius_km: f64,

    /// Largest radius a caller may request (km).
    pub max_radius_km: f64,

    /// Number of nearby suggestions when the caller does not give a limit.
    pub default_limit: usize,

    /// Largest number of nearby suggestions a caller may request.
    pub max_limit: usize,

    /// How many of the requester's most-searched destinations count as preferences.
    pub preference_count: usize,

    /// Searches newer than this earn the full recency bonus (days).
    pub recent_window_days: i64,

    /// Searches newer than this earn the reduced recency bonus (days).
    pub stale_window_days: i64,
}

impl EngineConfig {
    /// Create a new configuration with the given parameters.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        max_recommendations: usize,
        default_radius_km: f64,
        max_radius_km: f64,
        default_limit: usize,
        max_limit: usize,
        preference_count: usize,
        recent_window_days: i64,
        stale_window_days: i64,
    ) -> Self {
        Self {
            max_recommendations,
            default_radius_km,
            max_radius_km,
            default_limit,
            max_limit,
            preference_count,
            recent_window_days,
            stale_window_days,
        }
    }

    /// Returns the full-bonus recency window as a Duration.
    pub fn recent_window(&self) -> Duration {
        Duration::days(self.recent_window_days)
    }

    /// Returns the reduced-bonus recency window as a Duration.
    pub fn stale_window(&self) -> Duration {
        Duration::days(self.stale_window_days)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_recommendations: 3,
            default_radius_km: 300.0,
            max_radius_km: 1000.0,
            default_limit: 5,
            max_limit: 50,
            preference_count: 3,
            recent_window_days: 7,
            stale_window_days: 30,
        }
    }
}
