//! Collision checks between the growing claim path and existing
//! territories.

use log::debug;

use crate::config::WarningThresholds;
use crate::domain::{CollisionResult, CollisionType, GeoPoint, Territory};
use crate::geometry::math;

/// Tests the newest accepted point (and the edge leading to it) against a
/// read-only territory snapshot.
///
/// Stateless apart from its thresholds; the caller supplies the snapshot
/// on every check and the engine neither caches nor mutates it. A check
/// never fails: an empty snapshot simply means no constraints.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionEngine {
    thresholds: WarningThresholds,
}

impl CollisionEngine {
    pub fn new(thresholds: WarningThresholds) -> Self {
        Self { thresholds }
    }

    /// Check the newest point against the snapshot.
    ///
    /// `prev` is the previously accepted point, when one exists; the edge
    /// `prev → point` is the only path edge tested, since all earlier
    /// edges were checked when their own endpoint arrived.
    ///
    /// Precedence: containment beats edge crossing beats proximity. When
    /// several territories are in range, the single nearest distance wins.
    pub fn check(
        &self,
        prev: Option<GeoPoint>,
        point: GeoPoint,
        territories: &[Territory],
    ) -> CollisionResult {
        for territory in territories {
            if territory.polygon.contains(point) {
                debug!("point inside territory {}", territory.id);
                return CollisionResult::violation(CollisionType::PointInTerritory);
            }
        }

        if let Some(prev) = prev {
            for territory in territories {
                for (a, b) in territory.polygon.edges() {
                    if math::segments_intersect(prev, point, a, b) {
                        debug!("edge crosses territory {}", territory.id);
                        return CollisionResult::violation(
                            CollisionType::PathCrossesTerritory,
                        );
                    }
                }
            }
        }

        let mut nearest: Option<f64> = None;
        for territory in territories {
            for (a, b) in territory.polygon.edges() {
                let d = math::point_to_segment_meters(point, a, b);
                nearest = Some(nearest.map_or(d, |n: f64| n.min(d)));
            }
        }

        match nearest {
            Some(d) => CollisionResult::proximity(d, self.thresholds.level_for(d)),
            None => CollisionResult::safe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClosedPolygon, WarningLevel};
    use crate::geometry::math::METERS_PER_DEGREE;

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    /// A square territory `side_m` meters on a side with its southwest
    /// corner at (lat0, lon0).
    fn square_territory(lat0: f64, lon0: f64, side_m: f64) -> Territory {
        let dlat = side_m / METERS_PER_DEGREE;
        let dlon = side_m / (METERS_PER_DEGREE * lat0.to_radians().cos());
        let polygon = ClosedPolygon::new(vec![
            p(lat0, lon0),
            p(lat0 + dlat, lon0),
            p(lat0 + dlat, lon0 + dlon),
            p(lat0, lon0 + dlon),
        ])
        .unwrap();
        Territory {
            id: "sq".to_string(),
            owner_id: "rival".to_string(),
            polygon,
            area_m2: side_m * side_m,
        }
    }

    #[test]
    fn test_empty_snapshot_is_safe() {
        let engine = CollisionEngine::default();
        let r = engine.check(None, p(31.0, 121.0), &[]);
        assert_eq!(r, CollisionResult::safe());
    }

    #[test]
    fn test_point_inside_territory() {
        let engine = CollisionEngine::default();
        let t = square_territory(31.0, 121.0, 200.0);
        let inside = p(31.0 + 100.0 / METERS_PER_DEGREE, 121.0 + 0.001);
        let r = engine.check(None, inside, std::slice::from_ref(&t));
        assert!(r.has_collision);
        assert_eq!(r.collision_type, Some(CollisionType::PointInTerritory));
        assert_eq!(r.warning_level, WarningLevel::Violation);
    }

    #[test]
    fn test_edge_crosses_territory() {
        let engine = CollisionEngine::default();
        let t = square_territory(31.0, 121.0, 100.0);
        // A long stride across the whole square: both endpoints outside,
        // the edge in between cuts two boundary edges.
        let before = p(31.0 + 50.0 / METERS_PER_DEGREE, 120.99);
        let after = p(31.0 + 50.0 / METERS_PER_DEGREE, 121.01);
        let r = engine.check(Some(before), after, std::slice::from_ref(&t));
        assert!(r.has_collision);
        assert_eq!(r.collision_type, Some(CollisionType::PathCrossesTerritory));
        assert_eq!(r.warning_level, WarningLevel::Violation);
    }

    #[test]
    fn test_proximity_levels() {
        let engine = CollisionEngine::default();
        let t = square_territory(31.0, 121.0, 100.0);
        // Approach the western boundary from due west at mid-height.
        let mid_lat = 31.0 + 50.0 / METERS_PER_DEGREE;
        let deg_per_m = 1.0 / (METERS_PER_DEGREE * 31.0_f64.to_radians().cos());
        let at = |meters_west: f64| p(mid_lat, 121.0 - meters_west * deg_per_m);

        let cases = [
            (150.0, WarningLevel::Safe),
            (80.0, WarningLevel::Caution),
            (40.0, WarningLevel::Warning),
            (10.0, WarningLevel::Danger),
        ];
        for (dist, expect) in cases {
            let r = engine.check(None, at(dist), std::slice::from_ref(&t));
            assert!(!r.has_collision);
            assert_eq!(r.warning_level, expect, "at {dist} m");
            let measured = r.nearest_distance_m.unwrap();
            assert!((measured - dist).abs() < 2.0, "measured {measured} at {dist}");
        }
    }

    #[test]
    fn test_nearest_of_several_territories() {
        let engine = CollisionEngine::default();
        let near = square_territory(31.0, 121.0, 100.0);
        let far = square_territory(31.0, 121.1, 100.0);
        let deg_per_m = 1.0 / (METERS_PER_DEGREE * 31.0_f64.to_radians().cos());
        let point = p(31.0 + 50.0 / METERS_PER_DEGREE, 121.0 - 30.0 * deg_per_m);
        let r = engine.check(None, point, &[far, near]);
        assert_eq!(r.warning_level, WarningLevel::Warning);
        assert!((r.nearest_distance_m.unwrap() - 30.0).abs() < 2.0);
    }
}
