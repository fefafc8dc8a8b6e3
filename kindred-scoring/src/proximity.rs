//! Distance-decayed proximity score.
//!
//! Great-circle distance (haversine) fed through an exponential decay
//! `e^(-distance / scale)`. Zero distance scores 1.0; the score approaches
//! but never reaches 0.0, so two located members never tie exactly with an
//! unlocated pair.

use kindred_core::models::GeoPoint;

/// Mean Earth radius (km).
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Proximity signal for one pair of (possibly absent) points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProximitySignal {
    Scored { score: f64, distance_km: f64 },
    /// Either side has no location. The aggregator excludes the proximity
    /// sub-score from the weighted sum instead of penalizing it.
    NoLocation,
}

impl ProximitySignal {
    pub fn score(&self) -> Option<f64> {
        match self {
            ProximitySignal::Scored { score, .. } => Some(*score),
            ProximitySignal::NoLocation => None,
        }
    }
}

/// Score proximity between two optional points.
pub fn score(a: Option<GeoPoint>, b: Option<GeoPoint>, scale_km: f64) -> ProximitySignal {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return ProximitySignal::NoLocation,
    };
    let distance_km = haversine_km(a, b);
    let score = (-distance_km / scale_km).exp().clamp(0.0, 1.0);
    ProximitySignal::Scored { score, distance_km }
}

/// Great-circle distance between two points, in kilometers.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
