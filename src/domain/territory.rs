use serde::{Deserialize, Serialize};

use super::ClosedPolygon;

/// An already-claimed territory, owned by the persistence layer.
///
/// The engine receives these as a read-only snapshot per collision check
/// and never mutates or caches them. Ownership comparison (`owner_id`) is
/// the caller's business; the engine treats every territory as foreign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Territory {
    pub id: String,
    pub owner_id: String,
    pub polygon: ClosedPolygon,
    /// Ground area in m², computed at claim time.
    pub area_m2: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPoint;

    #[test]
    fn test_snapshot_roundtrip() {
        let polygon = ClosedPolygon::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 0.0),
        ])
        .unwrap();
        let territory = Territory {
            id: "t-1".to_string(),
            owner_id: "player-9".to_string(),
            polygon,
            area_m2: 12_345.0,
        };
        let json = serde_json::to_string(&territory).unwrap();
        let back: Territory = serde_json::from_str(&json).unwrap();
        assert_eq!(territory, back);
    }
}
