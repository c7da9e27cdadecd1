//! Composite suitability score for budget ranking.
//!
//! The score is a weighted sum of four sub-scores:
//!
//! | Signal       | Source                          | Weight |
//! |--------------|---------------------------------|--------|
//! | budget match | cheapest package vs. budget     | 0.5    |
//! | weather      | destination rating              | 0.2    |
//! | rating       | destination rating              | 0.2    |
//! | travel time  | region travel-hours estimate    | 0.1    |
//!
//! Weather and rating read the same `rating` field, so rating effectively
//! carries 0.4 of the weight. They are kept as two explicit applications of
//! one constant until a separate weather signal exists.

use crate::domain::{Destination, PackageOption};

const BUDGET_WEIGHT: f64 = 0.5;

/// Weight of each rating-derived signal (weather and overall rating).
const QUALITY_WEIGHT: f64 = 0.2;

const TRAVEL_TIME_WEIGHT: f64 = 0.1;

/// Estimated hours of travel to reach each region.
const REGION_TRAVEL_HOURS: [(&str, f64); 4] = [
    ("north", 10.0),
    ("central", 4.0),
    ("south", 6.0),
    ("west", 8.0),
];

/// Travel-hours estimate for regions missing from the table.
pub const DEFAULT_TRAVEL_HOURS: f64 = 6.0;

/// Travel-hours estimate for a region tag (case-insensitive).
pub fn travel_hours_for_region(region: &str) -> f64 {
    let region = region.trim();
    REGION_TRAVEL_HOURS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(region))
        .map(|(_, hours)| *hours)
        .unwrap_or(DEFAULT_TRAVEL_HOURS)
}

/// How closely the cheapest package matches the budget, 0-100.
fn budget_match(cheap: &PackageOption, budget: f64) -> f64 {
    (100.0 - (cheap.total_cost - budget).abs() / budget * 100.0).max(0.0)
}

/// Rating scaled to 0-50.
fn quality(destination: &Destination) -> f64 {
    destination.rating.clamp(0.0, 5.0) * 10.0
}

/// Shorter trips score higher, 0-10.
fn travel_time(travel_hours: f64) -> f64 {
    let penalty = (travel_hours / 2.0).round().min(10.0);
    (10.0 - penalty).max(0.0)
}

/// Composite 0-100 score for a destination given its cheapest package.
///
/// `budget` must be greater than zero; callers validate requests before
/// scoring.
pub fn compute_score(
    destination: &Destination,
    cheap: &PackageOption,
    budget: f64,
    travel_hours: f64,
) -> u8 {
    let quality = quality(destination);
    let weather_score = quality;
    let rating_score = quality;

    let total = budget_match(cheap, budget) * BUDGET_WEIGHT
        + weather_score * QUALITY_WEIGHT
        + rating_score * QUALITY_WEIGHT
        + travel_time(travel_hours) * TRAVEL_TIME_WEIGHT;

    total.round().clamp(0.0, 100.0) as u8
}
