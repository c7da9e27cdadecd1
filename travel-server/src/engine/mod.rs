//! Recommendation engine.
//!
//! Two pure pipelines over an in-memory catalog:
//! - budget recommendations: price every destination at three tiers and
//!   rank by suitability for the traveler's budget
//! - nearby suggestions: rank destinations around a center point by
//!   distance and search popularity
//!
//! Nothing here performs I/O; the caller supplies destinations, search
//! history and the current time.

mod budget;
mod config;
mod cost;
mod distance;
mod nearby;
mod popularity;
mod proximity;
mod rank;
mod score;

#[cfg(test)]
pub(crate) mod fixtures;

pub use budget::{
    Availability, BudgetRecommendations, DestinationScore, compute_budget_recommendations,
    score_destination,
};
pub use config::EngineConfig;
pub use cost::{compute_package, compute_packages, tier_multiplier};
pub use distance::{EARTH_RADIUS_KM, between, describe_distance, distance_km};
pub use nearby::{
    CenterRef, NearbyRequest, NearbySuggestion, NearbySuggestions, ResolvedCenter,
    compute_nearby_suggestions, resolve_center,
};
pub use popularity::{Popularity, PopularityIndex, aggregate, user_preferences};
pub use proximity::{recency_bonus, score as proximity_score};
pub use rank::top_n;
pub use score::{DEFAULT_TRAVEL_HOURS, compute_score, travel_hours_for_region};
