//! Destination types.

use serde::{Deserialize, Serialize};

use super::EngineError;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create a coordinate pair without range checks.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and inside the valid ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Per-destination cost baselines, in local currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBaseline {
    pub round_trip_fare: f64,
    pub food_per_day: f64,
    pub local_transport_per_day: f64,
    pub activities_per_day: f64,
}

impl CostBaseline {
    fn values(&self) -> [(&'static str, f64); 4] {
        [
            ("round_trip_fare", self.round_trip_fare),
            ("food_per_day", self.food_per_day),
            ("local_transport_per_day", self.local_transport_per_day),
            ("activities_per_day", self.activities_per_day),
        ]
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Months (1 = January) in which a destination is best visited or avoided.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonalWindow {
    #[serde(default)]
    pub best_months: Vec<u8>,
    #[serde(default)]
    pub avoid_months: Vec<u8>,
}

impl SeasonalWindow {
    /// Whether `month` (1-12) is one of the best months.
    pub fn is_best(&self, month: u8) -> bool {
        self.best_months.contains(&month)
    }

    /// Whether `month` (1-12) should be avoided.
    pub fn is_avoided(&self, month: u8) -> bool {
        self.avoid_months.contains(&month)
    }

    /// Best months as English names.
    pub fn best_month_names(&self) -> Vec<&'static str> {
        month_names(&self.best_months)
    }

    /// Months to avoid as English names.
    pub fn avoid_month_names(&self) -> Vec<&'static str> {
        month_names(&self.avoid_months)
    }

    fn validate(&self) -> Result<(), String> {
        let all = self.best_months.iter().chain(self.avoid_months.iter());
        for month in all {
            if !(1..=12).contains(month) {
                return Err(format!("month {month} is outside 1-12"));
            }
        }
        Ok(())
    }
}

/// English name of `month` (1 = January), or `""` outside 1-12.
pub fn month_name(month: u8) -> &'static str {
    usize::from(month)
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i))
        .copied()
        .unwrap_or_default()
}

fn month_names(months: &[u8]) -> Vec<&'static str> {
    months
        .iter()
        .filter_map(|m| MONTH_NAMES.get(usize::from(*m).checked_sub(1)?).copied())
        .collect()
}

/// A candidate destination as supplied by the catalog.
///
/// Immutable for the duration of one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,

    /// Region tag used for travel-time estimates (e.g. "north").
    pub region: String,

    pub costs: CostBaseline,

    /// Rating from 0 to 5.
    pub rating: f64,

    /// Missing coordinates exclude the destination from proximity ranking.
    #[serde(default)]
    pub coordinates: Option<Coordinates>,

    #[serde(default)]
    pub season: SeasonalWindow,
}

impl Destination {
    /// Case-insensitive name comparison, using the same folding as [`name_key`].
    pub fn is_named(&self, name: &str) -> bool {
        name_key(&self.name) == name_key(name)
    }

    /// Normalised key used for grouping by name.
    pub fn key(&self) -> String {
        name_key(&self.name)
    }

    /// Check that the record is usable by the engine.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.name.trim().is_empty() {
            return Err(EngineError::validation("destination name is empty"));
        }

        if !self.rating.is_finite() || !(0.0..=5.0).contains(&self.rating) {
            return Err(EngineError::validation(format!(
                "{}: rating {} is outside 0-5",
                self.name, self.rating
            )));
        }

        for (field, value) in self.costs.values() {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::validation(format!(
                    "{}: {field} must be a non-negative number",
                    self.name
                )));
            }
        }

        if let Some(coords) = &self.coordinates
            && !coords.is_valid()
        {
            return Err(EngineError::validation(format!(
                "{}: coordinates ({}, {}) are out of range",
                self.name, coords.lat, coords.lng
            )));
        }

        self.season
            .validate()
            .map_err(|reason| EngineError::validation(format!("{}: {reason}", self.name)))
    }
}

/// Lowercased, trimmed form of a destination name.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
