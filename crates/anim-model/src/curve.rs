//! Animation channels, keyframe samples, and the in-memory curve store.
//!
//! A conversion run writes keyframe samples through the [`KeyframeSink`]
//! trait. [`CurveStore`] is the canonical sink: it keeps one curve per
//! `(channel, component)` pair with keys ordered by frame, which is the
//! shape animation hosts expect when the document is applied to an object.

use serde::{Deserialize, Serialize};

/// Frame index on the scene timeline.
pub type FrameIndex = i64;

/// An animatable transform channel of the target object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Object location; components 0/1/2 are X/Y/Z.
    Location,
    /// Object Euler rotation in radians; components 0/1/2 are X/Y/Z.
    RotationEuler,
}

/// Interpolation mode carried by a key.
///
/// Evaluation between keys is the host's concern; the mode is stored so
/// hosts can honor it when the document is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Smooth eased interpolation (the usual host default).
    #[default]
    Bezier,
    /// Straight-line interpolation, no acceleration between keys.
    Linear,
}

/// A single `(frame, value)` sample on one curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub frame: FrameIndex,
    pub value: f64,
    #[serde(default)]
    pub interpolation: Interpolation,
}

/// All keys for one scalar component of a channel, ordered by frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub channel: Channel,
    pub component: usize,
    pub keys: Vec<Key>,
}

/// Sink for keyframe samples produced by a synthesis run.
///
/// Implementations must support repeated insertion on the same channel at
/// increasing frame indices, and single-component writes that leave the
/// other components of a multi-component channel untouched.
pub trait KeyframeSink {
    /// Insert a full 3-component sample on a channel at a frame.
    fn insert(&mut self, channel: Channel, frame: FrameIndex, value: [f64; 3]);

    /// Insert one component of a channel at a frame.
    fn insert_component(
        &mut self,
        channel: Channel,
        component: usize,
        frame: FrameIndex,
        value: f64,
    );
}

/// In-memory keyframe storage, one curve per `(channel, component)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveStore {
    pub curves: Vec<Curve>,
}

impl CurveStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all curves, starting the next run from a clean slate.
    pub fn clear(&mut self) {
        self.curves.clear();
    }

    /// Look up the curve for a channel component, if any keys were written.
    pub fn curve(&self, channel: Channel, component: usize) -> Option<&Curve> {
        self.curves
            .iter()
            .find(|c| c.channel == channel && c.component == component)
    }

    /// Total number of keys across all curves.
    pub fn key_count(&self) -> usize {
        self.curves.iter().map(|c| c.keys.len()).sum()
    }

    /// The span of frames covered by any curve, if any keys exist.
    pub fn frame_range(&self) -> Option<(FrameIndex, FrameIndex)> {
        let mut range: Option<(FrameIndex, FrameIndex)> = None;
        for curve in &self.curves {
            for key in &curve.keys {
                range = Some(match range {
                    None => (key.frame, key.frame),
                    Some((lo, hi)) => (lo.min(key.frame), hi.max(key.frame)),
                });
            }
        }
        range
    }

    /// Rewrite every key to linear interpolation.
    pub fn convert_to_linear(&mut self) {
        for curve in &mut self.curves {
            for key in &mut curve.keys {
                key.interpolation = Interpolation::Linear;
            }
        }
    }

    fn curve_mut_or_insert(&mut self, channel: Channel, component: usize) -> &mut Curve {
        let idx = self
            .curves
            .iter()
            .position(|c| c.channel == channel && c.component == component)
            .unwrap_or_else(|| {
                self.curves.push(Curve {
                    channel,
                    component,
                    keys: vec![],
                });
                self.curves.len() - 1
            });
        &mut self.curves[idx]
    }

    fn insert_key(&mut self, channel: Channel, component: usize, frame: FrameIndex, value: f64) {
        let curve = self.curve_mut_or_insert(channel, component);
        match curve.keys.binary_search_by_key(&frame, |k| k.frame) {
            // Writing the same frame twice replaces the value.
            Ok(i) => curve.keys[i].value = value,
            Err(i) => curve.keys.insert(
                i,
                Key {
                    frame,
                    value,
                    interpolation: Interpolation::default(),
                },
            ),
        }
    }
}

impl KeyframeSink for CurveStore {
    fn insert(&mut self, channel: Channel, frame: FrameIndex, value: [f64; 3]) {
        for (component, v) in value.iter().enumerate() {
            self.insert_key(channel, component, frame, *v);
        }
    }

    fn insert_component(
        &mut self,
        channel: Channel,
        component: usize,
        frame: FrameIndex,
        value: f64,
    ) {
        self.insert_key(channel, component, frame, value);
    }
}
