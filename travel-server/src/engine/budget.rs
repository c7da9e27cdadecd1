//! Budget-constrained destination recommendations.
//!
//! Every candidate is priced at three tiers, scored from its cheapest tier
//! and its attributes, and the best few are returned.

use serde::Serialize;
use tracing::debug;

use crate::domain::{BudgetRequest, Destination, EngineError, SeasonalWindow, TierPackages};

use super::config::EngineConfig;
use super::cost::compute_packages;
use super::rank::top_n;
use super::score::{compute_score, travel_hours_for_region};

/// Which tiers fit the traveler's budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub cheap: bool,
    pub moderate: bool,
    pub premium: bool,
}

impl From<&TierPackages> for Availability {
    fn from(packages: &TierPackages) -> Self {
        Self {
            cheap: packages.cheap.within_budget,
            moderate: packages.moderate.within_budget,
            premium: packages.premium.within_budget,
        }
    }
}

/// A scored destination with its priced packages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinationScore {
    pub name: String,
    pub region: String,
    /// Suitability, 0-100.
    pub score: u8,
    pub rating: f64,
    pub travel_hours: f64,
    pub packages: TierPackages,
    pub availability: Availability,
    pub season: SeasonalWindow,
}

/// Result of a budget search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRecommendations {
    pub input: BudgetRequest,
    /// Best destinations first.
    pub recommendations: Vec<DestinationScore>,
    pub total_cities_analyzed: usize,
}

/// Price and score a single destination.
pub fn score_destination(
    destination: &Destination,
    request: &BudgetRequest,
) -> Result<DestinationScore, EngineError> {
    let packages = compute_packages(destination, request.days, request.budget)?;
    let travel_hours = travel_hours_for_region(&destination.region);
    let score = compute_score(destination, &packages.cheap, request.budget, travel_hours);

    Ok(DestinationScore {
        name: destination.name.clone(),
        region: destination.region.clone(),
        score,
        rating: destination.rating,
        travel_hours,
        availability: Availability::from(&packages),
        packages,
        season: destination.season.clone(),
    })
}

/// Rank `destinations` for a budget request.
///
/// Fails with a validation error for an invalid request and with a
/// not-found error when there are no candidates.
pub fn compute_budget_recommendations(
    request: &BudgetRequest,
    destinations: &[Destination],
    config: &EngineConfig,
) -> Result<BudgetRecommendations, EngineError> {
    request.validate()?;

    if destinations.is_empty() {
        return Err(EngineError::not_found("no destinations available to analyze"));
    }

    let scored = destinations
        .iter()
        .map(|d| score_destination(d, request))
        .collect::<Result<Vec<_>, _>>()?;

    let recommendations = top_n(scored, |s| s.score, config.max_recommendations);

    debug!(
        budget = request.budget,
        days = request.days,
        travel_type = %request.travel_type,
        analyzed = destinations.len(),
        returned = recommendations.len(),
        "ranked budget recommendations"
    );

    Ok(BudgetRecommendations {
        input: request.clone(),
        recommendations,
        total_cities_analyzed: destinations.len(),
    })
}
