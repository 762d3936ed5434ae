use log::{debug, trace};

use crate::collision::CollisionEngine;
use crate::config::TrackerConfig;
use crate::domain::{ClosedPolygon, CollisionResult, GeoPoint, Territory};
use crate::error::ClaimError;
use crate::geometry::{area, math};

use super::self_intersect;

/// Lifecycle of a claim attempt.
///
/// `Closed` is terminal; cancellation is simply dropping the tracker, so
/// it has no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    Empty,
    Tracking,
    Closed,
}

/// The finalized output of a successful closure: ownership passes to the
/// caller, which attaches metadata (owner, timestamps) and persists it.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedClaim {
    pub polygon: ClosedPolygon,
    pub area_m2: f64,
}

/// Accumulates a live GPS path into a candidate claim polygon.
///
/// One tracker per claim session, exclusively owned by whichever component
/// runs that session. Calls are synchronous and must be serialized by the
/// caller; the tracker holds no locks and performs no I/O. Territory
/// snapshots are passed into each call rather than read from any ambient
/// state, so a session is fully deterministic given its input stream.
#[derive(Debug, Clone)]
pub struct PathTracker {
    points: Vec<GeoPoint>,
    state: TrackerState,
    config: TrackerConfig,
    engine: CollisionEngine,
}

impl PathTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            points: Vec::new(),
            state: TrackerState::Empty,
            config,
            engine: CollisionEngine::new(config.thresholds),
        }
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// The accepted points so far, in chronological (= drawing) order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Feed one raw GPS fix into the path.
    ///
    /// On acceptance the point is appended and the newest edge/point is
    /// checked against the supplied territory snapshot; the returned
    /// [`CollisionResult`] drives the warning UI, and on a `Violation` the
    /// caller decides whether to block further growth.
    ///
    /// # Errors
    ///
    /// - [`ClaimError::TooClose`]: jitter filter; path unchanged.
    /// - [`ClaimError::WouldSelfIntersect`]: the new edge would cross the
    ///   walked path; path unchanged, the player can head elsewhere.
    /// - [`ClaimError::SessionClosed`]: the loop already closed.
    pub fn add_point(
        &mut self,
        raw: GeoPoint,
        territories: &[Territory],
    ) -> Result<CollisionResult, ClaimError> {
        if self.state == TrackerState::Closed {
            return Err(ClaimError::SessionClosed);
        }

        let prev = self.points.last().copied();
        if let Some(last) = prev {
            let distance_m = math::distance_meters(last, raw);
            if distance_m < self.config.min_separation_m {
                trace!("fix rejected, {distance_m:.1} m from previous");
                return Err(ClaimError::TooClose {
                    distance_m,
                    min_m: self.config.min_separation_m,
                });
            }
        }

        if self_intersect::edge_crosses_path(&self.points, raw) {
            debug!(
                "fix rejected, edge would cross path of {} points",
                self.points.len()
            );
            return Err(ClaimError::WouldSelfIntersect);
        }

        let result = self.engine.check(prev, raw, territories);
        self.points.push(raw);
        self.state = TrackerState::Tracking;
        trace!(
            "fix accepted ({} points), warning level {:?}",
            self.points.len(),
            result.warning_level
        );
        Ok(result)
    }

    /// Test whether `raw` closes the loop, and finalize if it does.
    ///
    /// `Ok(None)` means "not a closure": the fix is farther than the
    /// closure tolerance from the first point (the caller typically feeds
    /// it to [`add_point`](Self::add_point) next). A closure transitions
    /// the tracker to `Closed` and hands the polygon and its area to the
    /// caller; the closing fix itself is not appended, the wrap edge back
    /// to the first point is implicit.
    ///
    /// # Errors
    ///
    /// - [`ClaimError::DegenerateGeometry`]: within tolerance but fewer
    ///   than 3 points on the path.
    /// - [`ClaimError::WouldSelfIntersect`]: the wrap edge would cross
    ///   the path; tracking continues unchanged.
    /// - [`ClaimError::SessionClosed`]: already closed.
    pub fn try_close(&mut self, raw: GeoPoint) -> Result<Option<FinalizedClaim>, ClaimError> {
        if self.state == TrackerState::Closed {
            return Err(ClaimError::SessionClosed);
        }

        let Some(&first) = self.points.first() else {
            return Ok(None);
        };
        if math::distance_meters(first, raw) > self.config.closure_tolerance_m {
            return Ok(None);
        }

        if self.points.len() < 3 {
            return Err(ClaimError::DegenerateGeometry(
                "a loop needs at least 3 points to close",
            ));
        }
        if self_intersect::wrap_edge_crosses_path(&self.points) {
            debug!("closure rejected, wrap edge would cross path");
            return Err(ClaimError::WouldSelfIntersect);
        }

        // Closure revalidates through ClosedPolygon::new, the same path
        // deserialized polygons take. Validate before clearing so a
        // failure leaves the session intact.
        let polygon = ClosedPolygon::new(self.points.clone())?;
        self.points.clear();
        let area_m2 = area::polygon_area_m2(&polygon);
        self.state = TrackerState::Closed;
        debug!(
            "loop closed with {} vertices, {area_m2:.0} m²",
            polygon.len()
        );
        Ok(Some(FinalizedClaim { polygon, area_m2 }))
    }
}
