//! Vector/segment primitives over raw-datum coordinates.
//!
//! Everything here works on WGS-84 lat/lon. Distances come out in meters.
//! Polygons that cross the antimeridian or contain a pole are not
//! supported; results there are undefined. The game operates on
//! city-block-scale loops, far from either.

use geo::{Distance, Haversine, Point};

use crate::domain::GeoPoint;

/// Meters per degree of latitude (and of longitude at the equator).
pub(crate) const METERS_PER_DEGREE: f64 = 111_320.0;

/// Great-circle distance between two points in meters (haversine).
///
/// Sub-meter accurate at the few-kilometer scale the warning thresholds
/// (25/50/100 m) are defined at.
#[inline]
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let pa = Point::new(a.longitude, a.latitude);
    let pb = Point::new(b.longitude, b.latitude);
    Haversine::distance(pa, pb)
}

/// Orientation of the ordered triple (a, b, c).
///
/// Positive = counter-clockwise, negative = clockwise, zero = collinear
/// (within a small tolerance to absorb floating-point noise at GPS
/// coordinate magnitudes).
fn orientation(a: GeoPoint, b: GeoPoint, c: GeoPoint) -> i8 {
    let cross = (b.longitude - a.longitude) * (c.latitude - a.latitude)
        - (b.latitude - a.latitude) * (c.longitude - a.longitude);
    const EPS: f64 = 1e-14;
    if cross > EPS {
        1
    } else if cross < -EPS {
        -1
    } else {
        0
    }
}

/// True if collinear point `p` lies within the bounding box of segment
/// `(a, b)`.
fn on_segment(a: GeoPoint, b: GeoPoint, p: GeoPoint) -> bool {
    p.longitude >= a.longitude.min(b.longitude)
        && p.longitude <= a.longitude.max(b.longitude)
        && p.latitude >= a.latitude.min(b.latitude)
        && p.latitude <= a.latitude.max(b.latitude)
}

/// Segment intersection test via the standard orientation method.
///
/// Handles collinear overlap. Callers are responsible for only testing
/// non-adjacent edge pairs: consecutive edges of the same path share an
/// endpoint and would always report as intersecting.
pub fn segments_intersect(a1: GeoPoint, a2: GeoPoint, b1: GeoPoint, b2: GeoPoint) -> bool {
    let o1 = orientation(a1, a2, b1);
    let o2 = orientation(a1, a2, b2);
    let o3 = orientation(b1, b2, a1);
    let o4 = orientation(b1, b2, a2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear cases: an endpoint of one segment lying on the other.
    (o1 == 0 && on_segment(a1, a2, b1))
        || (o2 == 0 && on_segment(a1, a2, b2))
        || (o3 == 0 && on_segment(b1, b2, a1))
        || (o4 == 0 && on_segment(b1, b2, a2))
}

/// Even-odd (ray casting) point-in-polygon test.
///
/// `vertices` is the polygon boundary with the first vertex stored once;
/// the closing edge back to the first vertex is implicit. The polygon is
/// assumed simple; `ClosedPolygon` validates that invariant before any
/// caller gets here.
pub fn point_in_polygon(p: GeoPoint, vertices: &[GeoPoint]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];
        // Cast a ray toward +longitude and count edge crossings.
        if (vi.latitude > p.latitude) != (vj.latitude > p.latitude) {
            let cross_lon = (vj.longitude - vi.longitude) * (p.latitude - vi.latitude)
                / (vj.latitude - vi.latitude)
                + vi.longitude;
            if p.longitude < cross_lon {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Project a point into a local planar frame (meters) centered on `origin`.
///
/// Equirectangular approximation with cosine-latitude scaling; accurate to
/// well under a meter over the few hundred meters a claim loop spans.
pub(crate) fn to_local_meters(origin: GeoPoint, p: GeoPoint) -> (f64, f64) {
    let cos_lat = origin.latitude.to_radians().cos();
    let x = (p.longitude - origin.longitude) * cos_lat * METERS_PER_DEGREE;
    let y = (p.latitude - origin.latitude) * METERS_PER_DEGREE;
    (x, y)
}

/// Distance in meters from point `p` to segment `(a, b)`.
///
/// Computed in the local planar frame centered on `p`, so the result is a
/// ground distance suitable for comparison against the warning thresholds.
pub fn point_to_segment_meters(p: GeoPoint, a: GeoPoint, b: GeoPoint) -> f64 {
    let (ax, ay) = to_local_meters(p, a);
    let (bx, by) = to_local_meters(p, b);
    // p projects to the local origin.
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return (ax * ax + ay * ay).sqrt();
    }
    let t = (-(ax * dx) - ay * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);
    let cx = ax + t * dx;
    let cy = ay + t * dy;
    (cx * cx + cy * cy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    #[test]
    fn test_distance_zero() {
        let a = p(31.2304, 121.4737);
        assert!(distance_meters(a, a) < 1e-9);
    }

    #[test]
    fn test_distance_one_degree_latitude() {
        // 1 degree of latitude is ~111.2 km everywhere.
        let d = distance_meters(p(30.0, 120.0), p(31.0, 120.0));
        assert!((d - 111_195.0).abs() < 200.0, "got {d}");
    }

    #[test]
    fn test_distance_100m_north() {
        let d = distance_meters(p(31.0, 121.0), p(31.0 + 100.0 / 111_195.0, 121.0));
        assert!((d - 100.0).abs() < 0.5, "got {d}");
    }

    #[test]
    fn test_segments_crossing() {
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
            p(1.0, 0.0),
        ));
    }

    #[test]
    fn test_segments_disjoint() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(0.0, 1.0),
            p(1.0, 0.0),
            p(1.0, 1.0),
        ));
    }

    #[test]
    fn test_segments_collinear_overlap() {
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(0.0, 2.0),
            p(0.0, 1.0),
            p(0.0, 3.0),
        ));
    }

    #[test]
    fn test_segments_collinear_disjoint() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(0.0, 1.0),
            p(0.0, 2.0),
            p(0.0, 3.0),
        ));
    }

    #[test]
    fn test_segments_touching_endpoint() {
        // Shared endpoint counts as intersecting; callers exclude
        // adjacent edges for exactly this reason.
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(1.0, 1.0),
            p(2.0, 0.0),
        ));
    }

    #[test]
    fn test_point_in_square() {
        let square = [p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert!(point_in_polygon(p(0.5, 0.5), &square));
        assert!(!point_in_polygon(p(1.5, 0.5), &square));
        assert!(!point_in_polygon(p(-0.5, 0.5), &square));
    }

    #[test]
    fn test_point_in_concave_polygon() {
        // A "U" shape: the notch between the arms is outside.
        let u = [
            p(0.0, 0.0),
            p(3.0, 0.0),
            p(3.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 2.0),
            p(3.0, 2.0),
            p(3.0, 3.0),
            p(0.0, 3.0),
        ];
        assert!(point_in_polygon(p(0.5, 1.5), &u));
        assert!(!point_in_polygon(p(2.0, 1.5), &u));
    }

    #[test]
    fn test_point_to_segment_perpendicular() {
        // 100 m east of a north-south segment.
        let lat = 31.0_f64;
        let lon_off = 100.0 / (111_320.0 * lat.to_radians().cos());
        let d = point_to_segment_meters(
            p(lat, 121.0 + lon_off),
            p(lat - 0.01, 121.0),
            p(lat + 0.01, 121.0),
        );
        assert!((d - 100.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn test_point_to_segment_beyond_endpoint() {
        // Closest approach is the endpoint, not the infinite line.
        let a = p(0.0, 0.0);
        let b = p(0.0, 0.001);
        let q = p(0.0, 0.002);
        let d = point_to_segment_meters(q, a, b);
        let expect = distance_meters(q, b);
        assert!((d - expect).abs() < 0.5, "got {d}, expected {expect}");
    }

    #[test]
    fn test_point_to_degenerate_segment() {
        let a = p(31.0, 121.0);
        let q = p(31.0, 121.001);
        let d = point_to_segment_meters(q, a, a);
        assert!((d - distance_meters(q, a)).abs() < 0.5);
    }
}
