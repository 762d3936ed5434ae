pub mod self_intersect;
pub mod tracker;

pub use tracker::{FinalizedClaim, PathTracker, TrackerState};
