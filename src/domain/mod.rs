pub mod point;
pub mod polygon;
pub mod territory;
pub mod warning;

pub use point::{DisplayPoint, GeoPoint};
pub use polygon::ClosedPolygon;
pub use territory::Territory;
pub use warning::{CollisionResult, CollisionType, WarningLevel};
