use serde::{Deserialize, Serialize};

/// Graduated proximity classification driving UI feedback before an
/// illegal claim happens.
///
/// Ordered: `Safe < Caution < Warning < Danger < Violation`. The level is
/// monotonic in the distance to the nearest foreign territory boundary
/// (closer means higher), except `Violation`, which is reserved for an
/// actual detected collision regardless of distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WarningLevel {
    Safe,
    Caution,
    Warning,
    Danger,
    Violation,
}

/// What kind of collision a check detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionType {
    /// The newest point lies strictly inside an existing territory.
    PointInTerritory,
    /// The newest path edge crosses an existing territory's boundary.
    PathCrossesTerritory,
    /// The newest edge would cross the player's own path.
    SelfIntersection,
}

/// Outcome of a single collision check. Produced fresh on every accepted
/// point and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollisionResult {
    pub has_collision: bool,
    /// Set only when an actual violation occurred, `None` otherwise.
    pub collision_type: Option<CollisionType>,
    /// Distance from the newest point to the nearest foreign territory
    /// boundary. `None` when no territories were supplied or on a
    /// violation (where the distance is no longer meaningful).
    pub nearest_distance_m: Option<f64>,
    pub warning_level: WarningLevel,
}

impl CollisionResult {
    /// The result for a check with nothing nearby: no collision, no
    /// measurable distance, `Safe`.
    pub fn safe() -> Self {
        Self {
            has_collision: false,
            collision_type: None,
            nearest_distance_m: None,
            warning_level: WarningLevel::Safe,
        }
    }

    /// A violation of the given type.
    pub fn violation(collision_type: CollisionType) -> Self {
        Self {
            has_collision: true,
            collision_type: Some(collision_type),
            nearest_distance_m: None,
            warning_level: WarningLevel::Violation,
        }
    }

    /// A clean check that measured a nearest boundary distance.
    pub fn proximity(distance_m: f64, level: WarningLevel) -> Self {
        Self {
            has_collision: false,
            collision_type: None,
            nearest_distance_m: Some(distance_m),
            warning_level: level,
        }
    }
}
