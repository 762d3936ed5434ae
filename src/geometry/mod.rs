pub mod area;
pub mod math;

pub use area::{polygon_area_m2, signed_area_m2};
pub use math::{distance_meters, point_in_polygon, point_to_segment_meters, segments_intersect};
