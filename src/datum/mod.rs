//! Raw-datum (WGS-84) to display-datum (GCJ-02) conversion.
//!
//! Map tiles for mainland China are published in GCJ-02, a nonlinearly
//! offset version of WGS-84, so anything drawn from raw GPS fixes lands
//! visibly off the mapped streets unless converted. This module implements
//! the publicly documented forward transform. There is no exact inverse
//! and this crate does not ship an approximate one.
//!
//! The conversion belongs at the render boundary only: collision, distance
//! and area math all run on the raw datum, and the [`DisplayPoint`] return
//! type keeps converted coordinates from flowing back in.
//!
//! Points outside the transform's bounding box pass through unchanged, so
//! feeding an already-outside point in twice is a no-op both times.

use crate::domain::{DisplayPoint, GeoPoint};

/// Krasovsky 1940 ellipsoid semi-major axis, meters.
const A: f64 = 6_378_245.0;
/// Krasovsky 1940 first eccentricity squared.
const EE: f64 = 0.006_693_421_622_965_943;

/// Bounding box outside which the display datum equals the raw datum.
const LON_MIN: f64 = 72.004;
const LON_MAX: f64 = 137.8347;
const LAT_MIN: f64 = 0.8293;
const LAT_MAX: f64 = 55.8271;

/// True when the point falls outside the region the offset applies to.
fn outside_offset_region(p: GeoPoint) -> bool {
    p.longitude < LON_MIN
        || p.longitude > LON_MAX
        || p.latitude < LAT_MIN
        || p.latitude > LAT_MAX
}

fn transform_lat(x: f64, y: f64) -> f64 {
    use std::f64::consts::PI;
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y
        + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lon(x: f64, y: f64) -> f64 {
    use std::f64::consts::PI;
    let mut ret =
        300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// Convert a raw-datum point to the display datum.
///
/// Pure and stateless; call once per point per render frame. Outside the
/// offset region the coordinates pass through unchanged.
pub fn to_display(p: GeoPoint) -> DisplayPoint {
    use std::f64::consts::PI;

    if outside_offset_region(p) {
        return DisplayPoint {
            latitude: p.latitude,
            longitude: p.longitude,
        };
    }

    let d_lat = transform_lat(p.longitude - 105.0, p.latitude - 35.0);
    let d_lon = transform_lon(p.longitude - 105.0, p.latitude - 35.0);
    let rad_lat = p.latitude / 180.0 * PI;
    let magic = 1.0 - EE * rad_lat.sin() * rad_lat.sin();
    let sqrt_magic = magic.sqrt();
    let d_lat = (d_lat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrt_magic) * PI);
    let d_lon = (d_lon * 180.0) / (A / sqrt_magic * rad_lat.cos() * PI);

    DisplayPoint {
        latitude: p.latitude + d_lat,
        longitude: p.longitude + d_lon,
    }
}
