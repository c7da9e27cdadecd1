//! Per-destination trip pricing.
//!
//! A package is priced as travel + food + (local transport + activities)
//! scaled by the tier multiplier. Only the discretionary part scales, so
//! the tiers stay ordered for any destination and trip length.

use crate::domain::{CostBreakdown, Destination, EngineError, PackageOption, Tier, TierPackages};

/// Multiplier applied to local transport and activities, per tier.
const TIER_MULTIPLIERS: [(Tier, f64); 3] = [
    (Tier::Cheap, 0.9),
    (Tier::Moderate, 1.0),
    (Tier::Premium, 1.25),
];

/// Spending multiplier for a tier.
pub fn tier_multiplier(tier: Tier) -> f64 {
    TIER_MULTIPLIERS
        .iter()
        .find(|(t, _)| *t == tier)
        .map(|(_, m)| *m)
        .unwrap_or(1.0)
}

/// Price a trip of `days` days to `destination` at the given tier.
///
/// Fails with a validation error when `days` is zero, and with a
/// computation error if the baselines produce a non-finite total.
pub fn compute_package(
    destination: &Destination,
    days: u32,
    budget: f64,
    tier: Tier,
) -> Result<PackageOption, EngineError> {
    if days < 1 {
        return Err(EngineError::validation("days must be at least 1"));
    }

    let costs = &destination.costs;
    let days_f = f64::from(days);
    let multiplier = tier_multiplier(tier);

    let travel = costs.round_trip_fare * 2.0;
    let food = costs.food_per_day * days_f;
    let misc_base = (costs.local_transport_per_day + costs.activities_per_day) * days_f;
    let total_cost = travel + food + misc_base * multiplier;

    if !total_cost.is_finite() {
        return Err(EngineError::Computation(format!(
            "total cost for {} ({tier}) is not finite",
            destination.name
        )));
    }

    Ok(PackageOption {
        tier,
        total_cost,
        breakdown: CostBreakdown {
            travel,
            food,
            local_transport: costs.local_transport_per_day * days_f * multiplier,
            activities: costs.activities_per_day * days_f * multiplier,
        },
        daily_average: (total_cost / days_f).round() as i64,
        within_budget: total_cost <= budget,
    })
}

/// Price all three tiers.
pub fn compute_packages(
    destination: &Destination,
    days: u32,
    budget: f64,
) -> Result<TierPackages, EngineError> {
    Ok(TierPackages {
        cheap: compute_package(destination, days, budget, Tier::Cheap)?,
        moderate: compute_package(destination, days, budget, Tier::Moderate)?,
        premium: compute_package(destination, days, budget, Tier::Premium)?,
    })
}
