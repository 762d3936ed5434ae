//! loopclaim - territory geometry & collision engine for a walk-a-loop
//! land claim game
//!
//! A pure, synchronous, in-process library. The caller owns timing,
//! storage and rendering: it feeds raw GPS fixes into a [`PathTracker`],
//! reacts to the [`CollisionResult`] returned per accepted point, and on
//! closure receives a validated [`ClosedPolygon`] with its ground area.
//! Coordinate conversion to the display datum ([`datum`]) happens at the
//! render boundary only; all geometry math runs on the raw datum.

pub mod collision;
pub mod config;
pub mod datum;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod tracking;

pub use collision::CollisionEngine;
pub use config::{TrackerConfig, WarningThresholds};
pub use domain::{
    ClosedPolygon, CollisionResult, CollisionType, DisplayPoint, GeoPoint, Territory,
    WarningLevel,
};
pub use error::ClaimError;
pub use tracking::{FinalizedClaim, PathTracker, TrackerState};
