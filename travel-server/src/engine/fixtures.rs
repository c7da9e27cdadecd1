//! Shared destination and history fixtures for engine tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::{
    Coordinates, CostBaseline, Destination, SearchHistoryEntry, SearchType, SeasonalWindow,
};

/// Fixed "now" so recency bonuses are reproducible.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

#[allow(clippy::too_many_arguments)]
fn make(
    name: &str,
    region: &str,
    fare: f64,
    food: f64,
    transport: f64,
    activities: f64,
    rating: f64,
    coords: Option<(f64, f64)>,
    best_months: &[u8],
) -> Destination {
    Destination {
        name: name.to_string(),
        region: region.to_string(),
        costs: CostBaseline {
            round_trip_fare: fare,
            food_per_day: food,
            local_transport_per_day: transport,
            activities_per_day: activities,
        },
        rating,
        coordinates: coords.map(|(lat, lng)| Coordinates::new(lat, lng)),
        season: SeasonalWindow {
            best_months: best_months.to_vec(),
            avoid_months: vec![],
        },
    }
}

/// A named fixture destination.
///
/// # Panics
/// Panics on an unknown name.
pub fn destination(name: &str) -> Destination {
    match name {
        "Murree" => make(
            "Murree",
            "north",
            600.0,
            1500.0,
            600.0,
            800.0,
            4.2,
            Some((33.9070, 73.3943)),
            &[4, 5, 6, 7, 8],
        ),
        "Islamabad" => make(
            "Islamabad",
            "central",
            1500.0,
            2000.0,
            800.0,
            1000.0,
            4.5,
            Some((33.6844, 73.0479)),
            &[3, 4, 10, 11],
        ),
        "Lahore" => make(
            "Lahore",
            "central",
            1000.0,
            1800.0,
            700.0,
            1200.0,
            4.6,
            Some((31.5204, 74.3587)),
            &[11, 12, 1, 2],
        ),
        "Hunza" => make(
            "Hunza",
            "north",
            4000.0,
            2500.0,
            1500.0,
            2000.0,
            4.8,
            Some((36.3167, 74.6500)),
            &[5, 6, 7, 8, 9],
        ),
        "Karachi" => make(
            "Karachi",
            "south",
            5000.0,
            2200.0,
            900.0,
            1500.0,
            4.0,
            Some((24.8607, 67.0011)),
            &[11, 12, 1, 2],
        ),
        other => panic!("no fixture destination named {other}"),
    }
}

/// The five-destination fixture set, in catalog order.
pub fn five_destinations() -> Vec<Destination> {
    ["Murree", "Islamabad", "Lahore", "Hunza", "Karachi"]
        .into_iter()
        .map(destination)
        .collect()
}

pub fn search(user: &str, kind: SearchType, names: &[&str], days: i64) -> SearchHistoryEntry {
    SearchHistoryEntry::new(
        user,
        kind,
        names.iter().map(|n| n.to_string()).collect(),
        days_ago(days),
    )
}
