//! Great-circle distance between coordinates.

use crate::domain::Coordinates;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometers.
///
/// Symmetric in its arguments; identical points give 0.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` fractionally above 1 for antipodal points.
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Distance between two coordinate pairs, in kilometers.
pub fn between(from: &Coordinates, to: &Coordinates) -> f64 {
    distance_km(from.lat, from.lng, to.lat, to.lng)
}

impl Coordinates {
    /// Great-circle distance to `other`, in kilometers.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        between(self, other)
    }
}

/// Human-readable distance, e.g. "< 1 km", "4.2 km", "137 km".
pub fn describe_distance(km: f64) -> String {
    if km < 1.0 {
        "< 1 km".to_string()
    } else if km < 10.0 {
        format!("{km:.1} km")
    } else {
        format!("{km:.0} km")
    }
}
