//! Keyframe synthesis from trajectory rows.
//!
//! Consumes accepted rows in input order and writes pose keyframes into a
//! [`KeyframeSink`]:
//!
//! 1. **Frame mapping:** `frame = round(time * fps) + frame_offset`, ties
//!    rounding away from zero. The rounding rule is load-bearing for
//!    golden-file comparisons and must not change.
//! 2. **Decimation:** the first accepted row is always emitted; every
//!    later row only when `frame % keyframe_step == 0`.
//! 3. **Roll integration:** forward-Euler accumulation of roll rate over
//!    the time elapsed since the previous roll-bearing row, written to the
//!    rotation Z component only.
//!
//! Rows must be consumed sequentially: the roll accumulator and the
//! forced-first-emission rule carry state across iterations.

use flightframe_anim_model::{Channel, FrameIndex, KeyframeSink, TimelineBounds};
use flightframe_common::{FlightframeError, FlightframeResult};

use crate::ingest::{TrajectoryLog, TrajectoryRow};

/// Configuration for a synthesis run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisConfig {
    /// Scene frame rate used for time-to-frame mapping.
    pub fps: f64,

    /// Constant shift applied to all computed frame indices. Must be ≥ 0.
    pub frame_offset: i64,

    /// Emit a keyframe only when the frame index is a multiple of this
    /// step. Must be in `1..=100`.
    pub keyframe_step: i64,

    /// Integrate roll rate into the rotation Z channel.
    pub animate_rotation: bool,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            fps: 24.0,
            frame_offset: 0,
            keyframe_step: 1,
            animate_rotation: false,
        }
    }
}

impl SynthesisConfig {
    /// Check the configured ranges.
    pub fn validate(&self) -> FlightframeResult<()> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(FlightframeError::config(format!(
                "fps must be a positive number, got {}",
                self.fps
            )));
        }
        if self.frame_offset < 0 {
            return Err(FlightframeError::config(format!(
                "frame offset must be non-negative, got {}",
                self.frame_offset
            )));
        }
        if !(1..=100).contains(&self.keyframe_step) {
            return Err(FlightframeError::config(format!(
                "keyframe step must be in 1..=100, got {}",
                self.keyframe_step
            )));
        }
        Ok(())
    }
}

/// Mutable state carried across the rows of one synthesis run.
#[derive(Debug, Default)]
struct AnimationState {
    /// Accumulated roll angle in radians.
    roll_angle: f64,
    /// Timestamp of the previous roll-bearing row. `None` until the first
    /// one, so a log starting late never integrates from a stale zero.
    previous_time: Option<f64>,
    /// Highest frame an emitted keyframe landed on.
    max_frame: FrameIndex,
    /// Whether the forced first emission already happened.
    emitted_first: bool,
}

/// Summary of a synthesis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisReport {
    /// Highest frame an emitted keyframe landed on (0 when nothing ran).
    pub max_frame: FrameIndex,

    /// Rows that parsed and were fed to the decimator.
    pub accepted_rows: usize,

    /// Rows that produced a position keyframe.
    pub emitted_keyframes: usize,

    /// Rows the ingestor dropped.
    pub skipped_rows: usize,
}

impl SynthesisReport {
    /// Timeline bounds to apply: frame 0 through the highest emitted frame.
    pub fn bounds(&self) -> TimelineBounds {
        TimelineBounds::to_frame(self.max_frame)
    }

    /// True when no row survived ingestion. The caller should treat the
    /// resulting 0/0 timeline as "no animation produced".
    pub fn is_empty(&self) -> bool {
        self.accepted_rows == 0
    }
}

/// Converts an ordered row sequence into keyframe samples.
pub struct KeyframeSynthesizer {
    config: SynthesisConfig,
}

impl KeyframeSynthesizer {
    /// Create a synthesizer, validating the configuration up front.
    pub fn new(config: SynthesisConfig) -> FlightframeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Map a row timestamp to a frame index.
    ///
    /// `round(time * fps) + frame_offset`, with ties rounding away from
    /// zero (`f64::round` semantics).
    pub fn frame_for(&self, time: f64) -> FrameIndex {
        (time * self.config.fps).round() as FrameIndex + self.config.frame_offset
    }

    /// Consume rows in order and write keyframe samples into `sink`.
    ///
    /// Per-row decisions are deterministic; the sink sees position samples
    /// for every emitted row and rotation Z samples only for emitted rows
    /// carrying a finite roll rate (when rotation animation is on).
    pub fn synthesize<I, S>(&self, rows: I, sink: &mut S) -> SynthesisReport
    where
        I: IntoIterator<Item = TrajectoryRow>,
        S: KeyframeSink + ?Sized,
    {
        let mut state = AnimationState::default();
        let mut report = SynthesisReport::default();

        for row in rows {
            report.accepted_rows += 1;
            let frame = self.frame_for(row.time);

            // The first accepted row is always emitted so the timeline has
            // a defined starting pose even when the step does not divide
            // its frame.
            if state.emitted_first && frame % self.config.keyframe_step != 0 {
                continue;
            }

            sink.insert(
                Channel::Location,
                frame,
                [row.east, row.north, row.altitude],
            );
            report.emitted_keyframes += 1;

            if self.config.animate_rotation {
                if let Some(rate) = row.roll_rate.filter(|r| r.is_finite()) {
                    // dt reaches back to the previous roll-bearing row; the
                    // very first one integrates nothing.
                    let dt = state.previous_time.map_or(0.0, |prev| row.time - prev);
                    state.roll_angle += (rate * dt).to_radians();
                    sink.insert_component(Channel::RotationEuler, 2, frame, state.roll_angle);
                    state.previous_time = Some(row.time);
                }
            }

            state.max_frame = state.max_frame.max(frame);
            state.emitted_first = true;
        }

        report.max_frame = state.max_frame;
        report
    }

    /// Run synthesis over a parsed log, folding the ingestor's skip count
    /// into the report.
    pub fn synthesize_log<S>(&self, log: &TrajectoryLog, sink: &mut S) -> SynthesisReport
    where
        S: KeyframeSink + ?Sized,
    {
        let mut rows = log.rows();
        let mut report = self.synthesize(&mut rows, sink);
        report.skipped_rows = rows.skipped();
        report
    }
}
