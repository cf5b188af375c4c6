//! Convert a trajectory log into a timeline document.

use std::path::PathBuf;

use flightframe_anim_model::{AnimationDocument, CurveStore, SceneClock};
use flightframe_common::{AppConfig, FlightframeError};
use flightframe_trajectory_core::{KeyframeSynthesizer, SynthesisConfig, TrajectoryLog};

#[allow(clippy::too_many_arguments)]
pub fn run(
    log: PathBuf,
    output: Option<PathBuf>,
    name: String,
    fps: Option<f64>,
    frame_offset: Option<i64>,
    keyframe_step: Option<i64>,
    rotation: bool,
    linear: bool,
) -> anyhow::Result<()> {
    if !log.exists() {
        return Err(FlightframeError::FileNotFound { path: log }.into());
    }

    let defaults = AppConfig::load().conversion;
    let config = SynthesisConfig {
        fps: fps.unwrap_or(defaults.fps),
        frame_offset: frame_offset.unwrap_or(defaults.frame_offset),
        keyframe_step: keyframe_step.unwrap_or(defaults.keyframe_step),
        animate_rotation: rotation || defaults.animate_rotation,
    };

    println!("Converting: {}", log.display());

    let bytes = std::fs::read(&log)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", log.display()))?;
    let parsed = TrajectoryLog::parse(&bytes, config.animate_rotation)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {e}", log.display()))?;

    let synthesizer = KeyframeSynthesizer::new(config)?;
    let mut curves = CurveStore::new();
    let report = synthesizer.synthesize_log(&parsed, &mut curves);

    if report.skipped_rows > 0 {
        tracing::warn!(skipped = report.skipped_rows, "some rows were unusable");
    }
    if report.is_empty() {
        tracing::warn!("no usable rows found; writing an empty timeline");
    }

    if linear {
        curves.convert_to_linear();
    }

    let mut document = AnimationDocument::new(
        name,
        SceneClock::new(config.fps),
        report.bounds(),
        curves,
    );
    document.source = Some(log.display().to_string());

    let output = output.unwrap_or_else(|| log.with_extension("timeline.json"));
    document
        .save(&output)
        .map_err(|e| anyhow::anyhow!("Failed to save document: {e}"))?;

    println!("  Accepted rows: {}", report.accepted_rows);
    println!("  Skipped rows:  {}", report.skipped_rows);
    println!("  Keyframes:     {}", report.emitted_keyframes);
    println!(
        "  Timeline:      frames {}..{}",
        report.bounds().frame_start,
        report.bounds().frame_end
    );
    println!("\nDocument saved to: {}", output.display());

    Ok(())
}
