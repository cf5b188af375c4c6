//! Bounding-box geometry in parent-local space.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box given by its 8 corner points in the parent
/// object's local coordinate space.
///
/// Derived attributes are computed from corner extrema, so the corner
/// ordering convention of the producing host does not matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub corners: [[f64; 3]; 8],
}

impl BoundingBox {
    pub fn from_corners(corners: [[f64; 3]; 8]) -> Self {
        Self { corners }
    }

    /// Build the 8 corners from min/max extents.
    pub fn from_extents(min: [f64; 3], max: [f64; 3]) -> Self {
        let mut corners = [[0.0; 3]; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            corner[0] = if i & 1 == 0 { min[0] } else { max[0] };
            corner[1] = if i & 2 == 0 { min[1] } else { max[1] };
            corner[2] = if i & 4 == 0 { min[2] } else { max[2] };
        }
        Self { corners }
    }

    fn axis_min(&self, axis: usize) -> f64 {
        self.corners
            .iter()
            .map(|c| c[axis])
            .fold(f64::INFINITY, f64::min)
    }

    fn axis_max(&self, axis: usize) -> f64 {
        self.corners
            .iter()
            .map(|c| c[axis])
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min_x(&self) -> f64 {
        self.axis_min(0)
    }

    pub fn max_x(&self) -> f64 {
        self.axis_max(0)
    }

    pub fn min_y(&self) -> f64 {
        self.axis_min(1)
    }

    pub fn max_y(&self) -> f64 {
        self.axis_max(1)
    }

    pub fn min_z(&self) -> f64 {
        self.axis_min(2)
    }

    pub fn max_z(&self) -> f64 {
        self.axis_max(2)
    }

    pub fn center_x(&self) -> f64 {
        (self.min_x() + self.max_x()) / 2.0
    }

    pub fn center_y(&self) -> f64 {
        (self.min_y() + self.max_y()) / 2.0
    }
}
