use serde::Deserialize;
use std::path::Path;

use crate::domain::WarningLevel;

fn default_min_separation_m() -> f64 {
    5.0
}
fn default_closure_tolerance_m() -> f64 {
    10.0
}
fn default_danger_m() -> f64 {
    25.0
}
fn default_warning_m() -> f64 {
    50.0
}
fn default_caution_m() -> f64 {
    100.0
}

/// Proximity thresholds, in meters, mapping nearest-boundary distance to a
/// [`WarningLevel`]. The defaults are the game's documented 25/50/100 m
/// bands.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WarningThresholds {
    #[serde(default = "default_danger_m")]
    pub danger_m: f64,
    #[serde(default = "default_warning_m")]
    pub warning_m: f64,
    #[serde(default = "default_caution_m")]
    pub caution_m: f64,
}

impl Default for WarningThresholds {
    fn default() -> Self {
        Self {
            danger_m: default_danger_m(),
            warning_m: default_warning_m(),
            caution_m: default_caution_m(),
        }
    }
}

impl WarningThresholds {
    /// Classify a nearest-boundary distance.
    ///
    /// Bands are half-open on the near side: `< 25 m` is `Danger`,
    /// `[25, 50)` is `Warning`, `[50, 100]` is `Caution`, beyond 100 m is
    /// `Safe`. `Violation` never comes from a distance; only an actual
    /// detected collision produces it.
    pub fn level_for(&self, distance_m: f64) -> WarningLevel {
        if distance_m < self.danger_m {
            WarningLevel::Danger
        } else if distance_m < self.warning_m {
            WarningLevel::Warning
        } else if distance_m <= self.caution_m {
            WarningLevel::Caution
        } else {
            WarningLevel::Safe
        }
    }
}

/// Tunables for an active claim session.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TrackerConfig {
    /// Minimum distance between consecutive accepted fixes. Filters GPS
    /// jitter while the player stands still.
    #[serde(default = "default_min_separation_m")]
    pub min_separation_m: f64,
    /// Maximum distance from the first point for a fix to close the loop.
    #[serde(default = "default_closure_tolerance_m")]
    pub closure_tolerance_m: f64,
    #[serde(default)]
    pub thresholds: WarningThresholds,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            min_separation_m: default_min_separation_m(),
            closure_tolerance_m: default_closure_tolerance_m(),
            thresholds: WarningThresholds::default(),
        }
    }
}

impl TrackerConfig {
    /// Load a config from a TOML file, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        if path.exists()
            && let Ok(contents) = std::fs::read_to_string(path)
        {
            match toml::from_str(&contents) {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                }
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = TrackerConfig::default();
        assert_eq!(c.min_separation_m, 5.0);
        assert_eq!(c.closure_tolerance_m, 10.0);
        assert_eq!(c.thresholds.danger_m, 25.0);
        assert_eq!(c.thresholds.warning_m, 50.0);
        assert_eq!(c.thresholds.caution_m, 100.0);
    }

    #[test]
    fn test_level_bands() {
        let t = WarningThresholds::default();
        assert_eq!(t.level_for(10.0), WarningLevel::Danger);
        assert_eq!(t.level_for(24.9), WarningLevel::Danger);
        assert_eq!(t.level_for(25.0), WarningLevel::Warning);
        assert_eq!(t.level_for(49.9), WarningLevel::Warning);
        assert_eq!(t.level_for(50.0), WarningLevel::Caution);
        assert_eq!(t.level_for(100.0), WarningLevel::Caution);
        assert_eq!(t.level_for(100.1), WarningLevel::Safe);
        assert_eq!(t.level_for(500.0), WarningLevel::Safe);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let c: TrackerConfig = toml::from_str("min_separation_m = 3.0").unwrap();
        assert_eq!(c.min_separation_m, 3.0);
        assert_eq!(c.closure_tolerance_m, 10.0);
        assert_eq!(c.thresholds.caution_m, 100.0);
    }
}
