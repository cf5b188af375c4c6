//! Show what a trajectory log contains.

use std::path::PathBuf;

use flightframe_common::FlightframeError;
use flightframe_trajectory_core::ingest::{self, TrajectoryLog};

pub fn run(log: PathBuf) -> anyhow::Result<()> {
    if !log.exists() {
        return Err(FlightframeError::FileNotFound { path: log }.into());
    }

    let bytes = std::fs::read(&log)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", log.display()))?;

    // Roll rate is optional in exports, so resolve without it first and
    // probe for it separately.
    let parsed = TrajectoryLog::parse(&bytes, false)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {e}", log.display()))?;
    let has_roll = TrajectoryLog::parse(&bytes, true).is_ok();

    println!("Log: {}", log.display());
    println!();

    println!("Header fields:");
    for (idx, field) in parsed.header_fields().iter().enumerate() {
        println!("  [{idx}] {field}");
    }
    println!();

    let columns = parsed.columns();
    println!("Resolved columns:");
    println!("  {}: {}", ingest::TIME_FIELD, columns.time);
    println!("  {}: {}", ingest::EAST_FIELD, columns.east);
    println!("  {}: {}", ingest::NORTH_FIELD, columns.north);
    println!("  {}: {}", ingest::ALTITUDE_FIELD, columns.altitude);
    println!(
        "  {}: {}",
        ingest::ROLL_RATE_FIELD,
        if has_roll { "present" } else { "absent" }
    );
    println!();

    let mut rows = parsed.rows();
    let mut accepted = 0usize;
    let mut first_time: Option<f64> = None;
    let mut last_time: Option<f64> = None;
    for row in rows.by_ref() {
        accepted += 1;
        if first_time.is_none() {
            first_time = Some(row.time);
        }
        last_time = Some(row.time);
    }

    println!("Rows:");
    println!("  Accepted: {accepted}");
    println!("  Skipped:  {}", rows.skipped());
    if let (Some(first), Some(last)) = (first_time, last_time) {
        println!("  Time range: {first}s .. {last}s");
    } else {
        println!("  Time range: (no usable rows)");
    }

    Ok(())
}
