use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point, clamping latitude to [-90, 90] and wrapping
    /// longitude into [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Self {
        let latitude = latitude.clamp(-90.0, 90.0);
        let mut longitude = longitude % 360.0;
        if longitude > 180.0 {
            longitude -= 360.0;
        } else if longitude < -180.0 {
            longitude += 360.0;
        }
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}
