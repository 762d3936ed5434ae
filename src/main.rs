use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use loopclaim::{
    ClaimError, CollisionType, GeoPoint, PathTracker, Territory, TrackerConfig,
    TrackerState, WarningLevel, datum,
};

/// Replay a recorded GPS track through the claim engine
///
/// Developer tool standing in for the mobile app's claim session loop:
/// feeds a recorded track (JSON array of points) into a PathTracker
/// against an optional territory snapshot and reports warning-level
/// transitions, rejected fixes and the finalized claim.
///
/// Examples:
///   # Replay a walk with no existing territories
///   loopclaim --track walk.json
///
///   # Replay against a territory snapshot with custom thresholds
///   loopclaim --track walk.json --territories snapshot.json --config session.toml
#[derive(Parser, Debug)]
#[command(name = "loopclaim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Recorded track: JSON array of {"latitude", "longitude"} objects
    #[arg(short, long)]
    track: PathBuf,

    /// Territory snapshot: JSON array of territories (optional)
    #[arg(short = 'T', long)]
    territories: Option<PathBuf>,

    /// Session config TOML (min separation, closure tolerance, thresholds)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the display-datum coordinates of each accepted point
    #[arg(short, long)]
    verbose: bool,
}

fn load_track(path: &PathBuf) -> Result<Vec<GeoPoint>> {
    let contents = std::fs::read_to_string(path)
        .context(format!("Failed to read track file: {:?}", path))?;
    serde_json::from_str(&contents).context("Failed to parse track file")
}

fn load_territories(path: &PathBuf) -> Result<Vec<Territory>> {
    let contents = std::fs::read_to_string(path)
        .context(format!("Failed to read territory snapshot: {:?}", path))?;
    serde_json::from_str(&contents).context("Failed to parse territory snapshot")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let track = load_track(&args.track)?;
    if track.is_empty() {
        bail!("Track is empty: {:?}", args.track);
    }

    let territories = match args.territories {
        Some(ref path) => load_territories(path)?,
        None => Vec::new(),
    };

    let config = match args.config {
        Some(ref path) => {
            if !path.exists() {
                bail!("Config file not found: {:?}", path);
            }
            TrackerConfig::load(path)
        }
        None => TrackerConfig::default(),
    };

    println!("loopclaim - Claim Session Replay");
    println!("================================");
    println!();
    println!("Track: {} fixes from {}", track.len(), args.track.display());
    println!("Territories: {}", territories.len());
    println!(
        "Session: min separation {}m, closure tolerance {}m",
        config.min_separation_m, config.closure_tolerance_m
    );
    println!();

    let mut tracker = PathTracker::new(config);
    let mut last_level = WarningLevel::Safe;
    let mut accepted = 0usize;
    let mut rejected_jitter = 0usize;
    let mut rejected_crossing = 0usize;

    for (i, &fix) in track.iter().enumerate() {
        // Fixes near the start only count as closure attempts once a loop
        // is possible; before that they are ordinary path points.
        if tracker.len() >= 3 {
            match tracker.try_close(fix) {
                Ok(Some(claim)) => {
                    println!();
                    println!(
                        "Fix {:>4}: loop closed with {} vertices",
                        i,
                        claim.polygon.len()
                    );
                    println!("Claimed area: {:.0} m²", claim.area_m2);
                    break;
                }
                Ok(None) => {}
                Err(ClaimError::WouldSelfIntersect) => {
                    println!("Fix {:>4}: closure rejected (wrap edge crosses path)", i);
                    continue;
                }
                Err(e) => bail!("Replay stopped at fix {}: {}", i, e),
            }
        }

        match tracker.add_point(fix, &territories) {
            Ok(result) => {
                accepted += 1;
                if result.warning_level != last_level {
                    let distance = result
                        .nearest_distance_m
                        .map(|d| format!(" ({d:.0} m to nearest boundary)"))
                        .unwrap_or_default();
                    println!(
                        "Fix {:>4}: {:?} -> {:?}{}",
                        i, last_level, result.warning_level, distance
                    );
                    last_level = result.warning_level;
                }
                if let Some(kind) = result.collision_type {
                    match kind {
                        CollisionType::PointInTerritory => {
                            println!("Fix {:>4}: VIOLATION - inside an existing territory", i)
                        }
                        CollisionType::PathCrossesTerritory => {
                            println!("Fix {:>4}: VIOLATION - crossed a territory boundary", i)
                        }
                        CollisionType::SelfIntersection => {
                            println!("Fix {:>4}: VIOLATION - path crossed itself", i)
                        }
                    }
                }
                if args.verbose {
                    let display = datum::to_display(fix);
                    println!(
                        "Fix {:>4}: accepted ({:.6}, {:.6}) -> display ({:.6}, {:.6})",
                        i, fix.latitude, fix.longitude, display.latitude, display.longitude
                    );
                }
            }
            Err(ClaimError::TooClose { .. }) => rejected_jitter += 1,
            Err(ClaimError::WouldSelfIntersect) => {
                rejected_crossing += 1;
                println!("Fix {:>4}: rejected, edge would cross the walked path", i);
            }
            Err(e) => bail!("Replay stopped at fix {}: {}", i, e),
        }
    }

    println!();
    println!("Replay complete:");
    println!("  Accepted points: {}", accepted);
    println!("  Jitter-filtered fixes: {}", rejected_jitter);
    println!("  Self-intersection rejections: {}", rejected_crossing);
    if tracker.state() != TrackerState::Closed {
        println!("  Loop did not close");
    }

    Ok(())
}
