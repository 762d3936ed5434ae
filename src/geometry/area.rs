//! Polygon area via the shoelace formula in a locally flattened plane.
//!
//! The open design question of how to approximate ground area is resolved
//! with a local equirectangular projection centered on the polygon's mean
//! latitude: longitudes are scaled by cos(mean latitude), then the plain
//! planar shoelace sum applies. For loops a few hundred meters across the
//! error against a true geodesic area is far below the ±2% the game
//! tolerates.

use crate::domain::{ClosedPolygon, GeoPoint};
use crate::geometry::math::METERS_PER_DEGREE;

/// Shoelace sum over the vertices (implicit wrap edge), in m².
///
/// Positive for counter-clockwise winding, negative for clockwise. The
/// sign is only winding information; callers report the absolute value.
pub fn signed_area_m2(vertices: &[GeoPoint]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }

    let mean_lat =
        vertices.iter().map(|v| v.latitude).sum::<f64>() / vertices.len() as f64;
    let cos_lat = mean_lat.to_radians().cos();

    // Summing relative to the first vertex keeps the cross products at
    // loop scale instead of globe scale, which matters for the float
    // precision of a loop thousands of kilometers from (0, 0).
    let origin = vertices[0];
    let mut sum = 0.0;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];
        let ax = (a.longitude - origin.longitude) * cos_lat;
        let ay = a.latitude - origin.latitude;
        let bx = (b.longitude - origin.longitude) * cos_lat;
        let by = b.latitude - origin.latitude;
        sum += ax * by - bx * ay;
    }
    sum / 2.0 * METERS_PER_DEGREE * METERS_PER_DEGREE
}

/// Ground area of a closed polygon in m².
pub fn polygon_area_m2(polygon: &ClosedPolygon) -> f64 {
    signed_area_m2(polygon.vertices()).abs()
}
