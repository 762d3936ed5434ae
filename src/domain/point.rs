use serde::{Deserialize, Serialize};

/// A GPS fix in the raw datum (WGS-84), as reported by the receiver.
///
/// All geometry math in this crate operates on `GeoPoint`. Equality is
/// exact bitwise comparison and is only meaningful for identity checks;
/// proximity must go through `geometry::math::distance_meters`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A point in the display datum (GCJ-02), produced by `datum::to_display`.
///
/// Deliberately a distinct type from [`GeoPoint`]: display coordinates are
/// for rendering only and must never be fed back into distance, collision
/// or area computations. Keeping the two datums as separate types makes
/// that mistake a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayPoint {
    pub latitude: f64,
    pub longitude: f64,
}
