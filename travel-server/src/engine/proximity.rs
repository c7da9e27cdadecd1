//! Ranking score for "explore nearby" suggestions.
//!
//! Blends three signals:
//! - search popularity: 10 points per search, capped at 100, weight 0.4
//! - distance: 100 minus a point per 3 km, floored at 0, weight 0.5
//! - recency: a flat bonus for destinations searched in the last week (20)
//!   or month (10)

use chrono::{DateTime, Utc};

use super::config::EngineConfig;
use super::popularity::Popularity;

const SEARCH_POINTS_PER_COUNT: f64 = 10.0;
const SEARCH_WEIGHT: f64 = 0.4;
const KM_PER_DISTANCE_POINT: f64 = 3.0;
const DISTANCE_WEIGHT: f64 = 0.5;
const RECENT_BONUS: i64 = 20;
const STALE_BONUS: i64 = 10;

/// Popularity sub-score, 0-100.
fn search_score(count: u32) -> f64 {
    (f64::from(count) * SEARCH_POINTS_PER_COUNT).min(100.0)
}

/// Distance sub-score, 0-100.
fn distance_score(distance_km: f64) -> f64 {
    (100.0 - distance_km / KM_PER_DISTANCE_POINT).max(0.0)
}

/// Bonus for recently searched destinations.
pub fn recency_bonus(
    last_searched_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> i64 {
    let Some(last) = last_searched_at else {
        return 0;
    };

    let age = now.signed_duration_since(last);
    if age <= config.recent_window() {
        RECENT_BONUS
    } else if age <= config.stale_window() {
        STALE_BONUS
    } else {
        0
    }
}

/// Proximity ranking score for a candidate `distance_km` away.
///
/// `popularity` is `None` for destinations that were never searched.
pub fn score(
    distance_km: f64,
    popularity: Option<&Popularity>,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> i64 {
    let count = popularity.map_or(0, |p| p.count);
    let bonus = recency_bonus(popularity.map(|p| p.last_searched_at), now, config);

    let blended = search_score(count) * SEARCH_WEIGHT + distance_score(distance_km) * DISTANCE_WEIGHT;
    (blended + bonus as f64).round() as i64
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn popularity(count: u32, days_ago: i64) -> Popularity {
        Popularity {
            name: "Generated".to_string(),
            count,
            last_searched_at: now() - Duration::days(days_ago),
        }
    }

    proptest! {
        #[test]
        fn non_decreasing_in_count(
            distance in 0.0f64..500.0,
            count in 0u32..50,
            extra in 0u32..50,
            days_ago in 0i64..60,
        ) {
            let config = EngineConfig::default();
            let fewer = popularity(count, days_ago);
            let more = popularity(count + extra, days_ago);
            prop_assert!(
                score(distance, Some(&fewer), now(), &config)
                    <= score(distance, Some(&more), now(), &config)
            );
        }

        #[test]
        fn non_increasing_in_distance(
            distance in 0.0f64..500.0,
            further in 0.0f64..500.0,
            count in 0u32..50,
            days_ago in 0i64..60,
        ) {
            let config = EngineConfig::default();
            let p = popularity(count, days_ago);
            prop_assert!(
                score(distance, Some(&p), now(), &config)
                    >= score(distance + further, Some(&p), now(), &config)
            );
        }
    }
}
