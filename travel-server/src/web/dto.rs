//! Data transfer objects for web requests and responses.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinates, Destination, EngineError, RawBudgetRequest};
use crate::engine::{CenterRef, NearbyRequest};

/// Body of `POST /api/budget`.
#[derive(Debug, Deserialize)]
pub struct BudgetSearchRequest {
    #[serde(flatten)]
    pub search: RawBudgetRequest,

    /// Requester, recorded in the search history when present
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Query string of `GET /api/nearby`.
///
/// Values arrive as strings so that blank form fields mean "not given".
#[derive(Debug, Default, Deserialize)]
pub struct NearbyQuery {
    /// Destination name to search around
    pub destination: Option<String>,

    /// Latitude of the center (requires `lng`)
    pub lat: Option<String>,

    /// Longitude of the center (requires `lat`)
    pub lng: Option<String>,

    /// Search radius in km
    pub radius: Option<String>,

    /// Maximum number of suggestions
    pub limit: Option<String>,

    /// Requester, for preference flags
    pub user_id: Option<String>,
}

impl NearbyQuery {
    /// Convert to an engine request, rejecting malformed numbers.
    pub fn to_request(&self) -> Result<NearbyRequest, EngineError> {
        let lat: Option<f64> = parse_optional("lat", self.lat.as_deref())?;
        let lng: Option<f64> = parse_optional("lng", self.lng.as_deref())?;

        let coordinates = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            (None, None) => None,
            _ => {
                return Err(EngineError::validation(
                    "lat and lng must be given together",
                ));
            }
        };

        let center = CenterRef {
            name: non_blank(self.destination.as_deref()).map(str::to_string),
            coordinates,
        };

        Ok(NearbyRequest {
            center,
            radius_km: parse_optional("radius", self.radius.as_deref())?,
            limit: parse_optional("limit", self.limit.as_deref())?,
            requester_id: self.requester(),
        })
    }

    /// Trimmed user id, empty when anonymous.
    pub fn requester(&self) -> String {
        non_blank(self.user_id.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_optional<T: FromStr>(field: &str, value: Option<&str>) -> Result<Option<T>, EngineError> {
    non_blank(value)
        .map(|v| {
            v.parse()
                .map_err(|_| EngineError::validation(format!("{field} must be numeric")))
        })
        .transpose()
}

/// A destination in the catalog listing.
#[derive(Debug, Serialize)]
pub struct DestinationSummary {
    pub name: String,
    pub region: String,
    pub rating: f64,
    pub coordinates: Option<Coordinates>,

    /// Best months to visit, by name
    pub best_months: Vec<&'static str>,
}

impl DestinationSummary {
    pub fn from_destination(destination: &Destination) -> Self {
        Self {
            name: destination.name.clone(),
            region: destination.region.clone(),
            rating: destination.rating,
            coordinates: destination.coordinates,
            best_months: destination.season.best_month_names(),
        }
    }
}

/// Response of `GET /api/destinations`.
#[derive(Debug, Serialize)]
pub struct DestinationListResponse {
    pub destinations: Vec<DestinationSummary>,
    pub total: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
