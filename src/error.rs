//! Error taxonomy for the claim engine.
//!
//! Nothing here is fatal: every failure is local to a single call and the
//! caller recovers by feeding the next GPS fix. A detected territory
//! collision is not an error at all: it comes back as a `CollisionResult`
//! with `has_collision = true` and the caller decides whether to block.

use thiserror::Error;

use crate::domain::{CollisionResult, CollisionType};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClaimError {
    /// The fix landed closer to the last accepted point than the
    /// anti-jitter minimum. The path is unchanged.
    #[error("point rejected: {distance_m:.1} m from the last fix, below the {min_m:.1} m minimum")]
    TooClose { distance_m: f64, min_m: f64 },

    /// Accepting the fix would make the newest edge cross the existing
    /// path. The path is unchanged; the player can walk another way.
    #[error("point rejected: the new edge would cross the walked path")]
    WouldSelfIntersect,

    /// A closure attempt on geometry that cannot form a polygon.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),

    /// The tracker already produced its polygon; this session is over.
    #[error("claim session already closed")]
    SessionClosed,
}

impl ClaimError {
    /// Express a self-intersection rejection as a `CollisionResult` for
    /// the warning UI. Other variants have no collision representation.
    pub fn as_collision_result(&self) -> Option<CollisionResult> {
        match self {
            ClaimError::WouldSelfIntersect => {
                Some(CollisionResult::violation(CollisionType::SelfIntersection))
            }
            _ => None,
        }
    }
}
