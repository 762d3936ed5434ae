use serde::{Deserialize, Serialize};

use crate::error::ClaimError;
use crate::geometry::math;

use super::GeoPoint;

/// A validated simple polygon: at least 3 distinct vertices, no crossing
/// between non-adjacent edges. The first vertex is stored once; the edge
/// from the last vertex back to the first is implicit.
///
/// Construction is the only way to obtain one, so any `ClosedPolygon` in
/// the program satisfies the invariants, including those deserialized
/// from a persistence snapshot, which go through the same validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GeoPoint>", into = "Vec<GeoPoint>")]
pub struct ClosedPolygon {
    vertices: Vec<GeoPoint>,
}

impl ClosedPolygon {
    /// Validate and build a polygon from its vertex ring.
    ///
    /// # Errors
    ///
    /// `DegenerateGeometry` for fewer than 3 distinct vertices or a
    /// zero-length edge; `WouldSelfIntersect` when any pair of
    /// non-adjacent edges (implicit wrap edge included) crosses.
    pub fn new(vertices: Vec<GeoPoint>) -> Result<Self, ClaimError> {
        if vertices.len() < 3 {
            return Err(ClaimError::DegenerateGeometry(
                "a closed polygon needs at least 3 vertices",
            ));
        }

        let n = vertices.len();
        for i in 0..n {
            if vertices[i] == vertices[(i + 1) % n] {
                return Err(ClaimError::DegenerateGeometry("zero-length edge"));
            }
        }

        // Edge i runs from vertex i to vertex (i + 1) % n. Test every
        // non-adjacent pair; adjacent edges share an endpoint and are
        // skipped, as is the (0, n-1) pair which wraps around.
        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (a1, a2) = (vertices[i], vertices[(i + 1) % n]);
                let (b1, b2) = (vertices[j], vertices[(j + 1) % n]);
                if math::segments_intersect(a1, a2, b1, b2) {
                    return Err(ClaimError::WouldSelfIntersect);
                }
            }
        }

        Ok(Self { vertices })
    }

    /// The vertex ring, first vertex stored once.
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate the polygon's edges, wrap edge last.
    pub fn edges(&self) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Even-odd containment test for a raw-datum point.
    pub fn contains(&self, p: GeoPoint) -> bool {
        math::point_in_polygon(p, &self.vertices)
    }
}

impl TryFrom<Vec<GeoPoint>> for ClosedPolygon {
    type Error = ClaimError;

    fn try_from(vertices: Vec<GeoPoint>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

impl From<ClosedPolygon> for Vec<GeoPoint> {
    fn from(polygon: ClosedPolygon) -> Self {
        polygon.vertices
    }
}
