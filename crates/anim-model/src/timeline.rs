//! Timeline bounds and the scene clock.

use serde::{Deserialize, Serialize};

use crate::curve::FrameIndex;

/// Frame bounds of the output timeline.
///
/// The start boundary is fixed at 0 by the conversion; the end boundary is
/// the highest frame an emitted keyframe landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBounds {
    pub frame_start: FrameIndex,
    pub frame_end: FrameIndex,
}

impl TimelineBounds {
    /// Bounds from frame 0 up to `frame_end`.
    pub fn to_frame(frame_end: FrameIndex) -> Self {
        Self {
            frame_start: 0,
            frame_end,
        }
    }

    /// A 0/0 timeline means the run produced no animation.
    pub fn is_empty(&self) -> bool {
        self.frame_end <= self.frame_start
    }
}

impl Default for TimelineBounds {
    fn default() -> Self {
        Self::to_frame(0)
    }
}

/// Scene clock with a fixed frames-per-second rate.
///
/// The synthesis layer maps simulator seconds onto this clock; the model
/// only records the rate so consumers can interpret frame indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneClock {
    pub fps: f64,
}

impl SceneClock {
    pub fn new(fps: f64) -> Self {
        Self { fps }
    }

    /// Seconds spanned by one frame.
    pub fn frame_duration(&self) -> f64 {
        1.0 / self.fps
    }
}

impl Default for SceneClock {
    fn default() -> Self {
        Self { fps: 24.0 }
    }
}
