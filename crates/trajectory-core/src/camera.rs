//! Chase-camera placement derived from the animated object's bounding box.
//!
//! The camera is parented to the object, so the computed position is in
//! the object's local space and the rotation is identity. Placement never
//! reads the trajectory itself: the parent relationship carries the
//! motion.

use flightframe_anim_model::BoundingBox;
use serde::{Deserialize, Serialize};

/// Smallest near-clip distance the auto policy will produce.
pub const MIN_CLIP_START: f64 = 0.001;

/// Near-clip distance used by the fixed policy.
pub const FIXED_CLIP_START: f64 = 0.1;

/// How the near-clip distance is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipPolicy {
    /// Derive the clip from the vertical offset, floored at
    /// [`MIN_CLIP_START`].
    #[default]
    Auto,

    /// Always use [`FIXED_CLIP_START`].
    Fixed,
}

/// Configuration for camera placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Lateral offset from the bounding-box X center.
    pub offset_x: f64,

    /// Vertical offset above the bounding-box top.
    pub offset_z: f64,

    /// Near-clip selection policy.
    pub clip: ClipPolicy,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset_x: -0.05,
            offset_z: 0.05,
            clip: ClipPolicy::Auto,
        }
    }
}

/// Computed camera pose, local to the animated object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPlacement {
    /// Position in the object's local space.
    pub local_position: [f64; 3],

    /// Near-clip distance.
    pub clip_start: f64,
}

/// Place the camera just above the object's bounding box.
///
/// The position is `(center_x + offset_x, center_y, max_z + offset_z)`.
/// Rotation is identity by construction and is not part of the result.
pub fn place_camera(bbox: &BoundingBox, config: &CameraConfig) -> CameraPlacement {
    let local_position = [
        bbox.center_x() + config.offset_x,
        bbox.center_y(),
        bbox.max_z() + config.offset_z,
    ];

    let clip_start = match config.clip {
        // A tiny offset_z would put the clip plane inside the mesh, so the
        // auto policy floors it.
        ClipPolicy::Auto => config.offset_z.abs().max(MIN_CLIP_START),
        ClipPolicy::Fixed => FIXED_CLIP_START,
    };

    CameraPlacement {
        local_position,
        clip_start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_bbox() -> BoundingBox {
        BoundingBox::from_extents([-1.0, -2.0, 0.0], [1.0, 2.0, 3.0])
    }

    #[test]
    fn test_placement_from_bbox_and_offsets() {
        let placement = place_camera(&unit_bbox(), &CameraConfig::default());

        assert_eq!(placement.local_position, [-0.05, 0.0, 3.05]);
        assert_eq!(placement.clip_start, 0.05);
    }

    #[test]
    fn test_auto_clip_floors_tiny_offsets() {
        let config = CameraConfig {
            offset_z: 0.0002,
            ..Default::default()
        };
        let placement = place_camera(&unit_bbox(), &config);

        assert_eq!(placement.clip_start, MIN_CLIP_START);
    }

    #[test]
    fn test_auto_clip_uses_magnitude_of_negative_offset() {
        let config = CameraConfig {
            offset_z: -0.2,
            ..Default::default()
        };
        let placement = place_camera(&unit_bbox(), &config);

        assert_eq!(placement.clip_start, 0.2);
        assert_eq!(placement.local_position[2], 2.8);
    }

    #[test]
    fn test_fixed_clip_ignores_offset() {
        let config = CameraConfig {
            offset_z: 5.0,
            clip: ClipPolicy::Fixed,
            ..Default::default()
        };
        let placement = place_camera(&unit_bbox(), &config);

        assert_eq!(placement.clip_start, FIXED_CLIP_START);
    }

    #[test]
    fn test_placement_is_idempotent() {
        let config = CameraConfig::default();
        let first = place_camera(&unit_bbox(), &config);
        let second = place_camera(&unit_bbox(), &config);

        assert_eq!(first, second);
    }
}
