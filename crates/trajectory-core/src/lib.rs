//! FlightFrame Trajectory Core
//!
//! Converts simulator trajectory logs into keyframed pose samples:
//! - **Ingest:** header-tagged tabular log parsing with fuzzy column lookup
//! - **Synth:** time-to-frame quantization, decimation, and roll integration
//! - **Camera:** bounding-box-derived chase-camera placement
//!
//! This crate is pure computation — no filesystem access, no host
//! dependencies. All inputs are data; all outputs are data.

pub mod camera;
pub mod ingest;
pub mod synth;

pub use camera::{place_camera, CameraConfig, CameraPlacement, ClipPolicy};
pub use ingest::{ColumnIndex, IngestError, TrajectoryLog, TrajectoryRow};
pub use synth::{KeyframeSynthesizer, SynthesisConfig, SynthesisReport};
