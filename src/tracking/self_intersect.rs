//! Incremental self-intersection checks for a growing path.
//!
//! The tracker maintains the invariant that a path in `Tracking` state has
//! no crossing between non-adjacent edges, so each new point only needs
//! its one candidate edge tested against the earlier edges, O(n) per fix
//! instead of revalidating the whole path.

use crate::domain::GeoPoint;
use crate::geometry::math;

/// Would the edge from the path's last point to `candidate` cross any
/// earlier edge?
///
/// The immediately preceding edge shares an endpoint with the new edge by
/// construction and is excluded; everything before it is tested. Paths
/// shorter than 3 points cannot self-intersect.
pub fn edge_crosses_path(path: &[GeoPoint], candidate: GeoPoint) -> bool {
    let n = path.len();
    if n < 3 {
        return false;
    }
    let last = path[n - 1];
    // Edges (path[i], path[i+1]) for i in 0 .. n-2; the edge ending at
    // `last` is index n-2 and is the adjacent one.
    (0..n - 2).any(|i| math::segments_intersect(path[i], path[i + 1], last, candidate))
}

/// Would the implicit wrap edge (last point back to the first) cross any
/// non-adjacent edge? Used once, at closure.
///
/// The first edge and the last edge both touch the wrap edge at a shared
/// vertex and are excluded.
pub fn wrap_edge_crosses_path(path: &[GeoPoint]) -> bool {
    let n = path.len();
    if n < 4 {
        // Triangle: every edge is adjacent to the wrap edge.
        return false;
    }
    let first = path[0];
    let last = path[n - 1];
    (1..n - 2).any(|i| math::segments_intersect(path[i], path[i + 1], last, first))
}
