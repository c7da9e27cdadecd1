//! "Explore nearby" suggestions around a center point.
//!
//! The center is given either as coordinates or as the name of a catalog
//! destination. Candidates inside the radius are scored on distance,
//! popularity and recency, and the best are returned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::domain::{Coordinates, Destination, EngineError, SearchHistoryEntry, name_key};

use super::config::EngineConfig;
use super::distance::{between, describe_distance};
use super::popularity::{aggregate, user_preferences};
use super::proximity;
use super::rank::top_n;

/// Where to search around: a destination name, coordinates, or both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CenterRef {
    pub name: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl CenterRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            coordinates: None,
        }
    }

    pub fn at(coordinates: Coordinates) -> Self {
        Self {
            name: None,
            coordinates: Some(coordinates),
        }
    }

    /// Trimmed name, `None` when absent or blank.
    fn name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

/// A nearby search.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyRequest {
    pub center: CenterRef,
    /// Defaults to the configured radius.
    pub radius_km: Option<f64>,
    /// Defaults to the configured limit.
    pub limit: Option<usize>,
    /// Used to flag the requester's preferred destinations; may be blank.
    pub requester_id: String,
}

impl NearbyRequest {
    pub fn new(center: CenterRef, requester_id: impl Into<String>) -> Self {
        Self {
            center,
            radius_km: None,
            limit: None,
            requester_id: requester_id.into(),
        }
    }

    pub fn with_radius(mut self, radius_km: f64) -> Self {
        self.radius_km = Some(radius_km);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Effective radius, validated against the configured bounds.
    pub fn radius(&self, config: &EngineConfig) -> Result<f64, EngineError> {
        let radius = self.radius_km.unwrap_or(config.default_radius_km);
        if !radius.is_finite() || radius <= 0.0 || radius > config.max_radius_km {
            return Err(EngineError::validation(format!(
                "radius must be between 0 and {} km",
                config.max_radius_km
            )));
        }
        Ok(radius)
    }

    /// Effective limit, validated against the configured bounds.
    pub fn limit(&self, config: &EngineConfig) -> Result<usize, EngineError> {
        let limit = self.limit.unwrap_or(config.default_limit);
        if limit < 1 || limit > config.max_limit {
            return Err(EngineError::validation(format!(
                "limit must be between 1 and {}",
                config.max_limit
            )));
        }
        Ok(limit)
    }
}

/// The center after resolution to coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedCenter {
    pub name: Option<String>,
    pub coordinates: Coordinates,
}

/// One nearby destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbySuggestion {
    pub name: String,
    pub region: String,
    pub rating: f64,
    pub coordinates: Coordinates,
    /// Distance from the center, rounded to 0.1 km.
    pub distance_km: f64,
    pub distance_text: String,
    pub search_count: u32,
    pub popularity_score: i64,
    pub matches_preference: bool,
}

/// Result of a nearby search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbySuggestions {
    pub center: ResolvedCenter,
    pub radius_km: f64,
    /// Candidates inside the radius, before the limit is applied.
    pub total: usize,
    /// Best suggestions first.
    pub suggestions: Vec<NearbySuggestion>,
    pub user_preferences: Vec<String>,
}

impl NearbySuggestions {
    /// Whether nothing usable was found.
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Resolve the center to coordinates.
///
/// Coordinates take precedence over the name. A name must match a catalog
/// destination that has coordinates.
pub fn resolve_center(
    center: &CenterRef,
    destinations: &[Destination],
) -> Result<ResolvedCenter, EngineError> {
    if let Some(coordinates) = center.coordinates {
        if !coordinates.is_valid() {
            return Err(EngineError::validation(format!(
                "coordinates ({}, {}) are out of range",
                coordinates.lat, coordinates.lng
            )));
        }
        return Ok(ResolvedCenter {
            name: center.name().map(str::to_string),
            coordinates,
        });
    }

    let name = center
        .name()
        .ok_or_else(|| EngineError::validation("a destination name or coordinates are required"))?;

    let destination = destinations
        .iter()
        .find(|d| d.is_named(name))
        .ok_or_else(|| EngineError::not_found(format!("destination {name} is not in the catalog")))?;

    let coordinates = destination.coordinates.ok_or_else(|| {
        EngineError::not_found(format!("destination {} has no coordinates", destination.name))
    })?;

    Ok(ResolvedCenter {
        name: Some(destination.name.clone()),
        coordinates,
    })
}

/// Suggest destinations near a center point.
///
/// Candidates without coordinates, at zero distance, outside the radius or
/// sharing the center's name are skipped. An empty result is not an error.
pub fn compute_nearby_suggestions(
    request: &NearbyRequest,
    destinations: &[Destination],
    history: &[SearchHistoryEntry],
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> Result<NearbySuggestions, EngineError> {
    let radius_km = request.radius(config)?;
    let limit = request.limit(config)?;
    let center = resolve_center(&request.center, destinations)?;
    let center_key = center.name.as_deref().map(name_key);

    let popularity = aggregate(history);
    let preferences = user_preferences(history, &request.requester_id, config.preference_count);
    let preference_keys: Vec<String> = preferences.iter().map(|p| name_key(p)).collect();

    let mut candidates = Vec::new();
    for destination in destinations {
        let Some(coordinates) = destination.coordinates else {
            trace!(name = %destination.name, "skipping destination without coordinates");
            continue;
        };

        let key = destination.key();
        if center_key.as_deref() == Some(key.as_str()) {
            continue;
        }

        let distance = between(&center.coordinates, &coordinates);
        if distance <= 0.0 || distance > radius_km {
            continue;
        }

        let popular = popularity.get(&destination.name);
        candidates.push(NearbySuggestion {
            name: destination.name.clone(),
            region: destination.region.clone(),
            rating: destination.rating,
            coordinates,
            distance_km: (distance * 10.0).round() / 10.0,
            distance_text: describe_distance(distance),
            search_count: popular.map_or(0, |p| p.count),
            popularity_score: proximity::score(distance, popular, now, config),
            matches_preference: preference_keys.contains(&key),
        });
    }

    let total = candidates.len();
    let suggestions = top_n(candidates, |s| s.popularity_score, limit);

    debug!(
        center = ?center.name,
        radius_km,
        total,
        returned = suggestions.len(),
        "ranked nearby suggestions"
    );

    Ok(NearbySuggestions {
        center,
        radius_km,
        total,
        suggestions,
        user_preferences: preferences,
    })
}
