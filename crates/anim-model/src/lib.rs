//! FlightFrame Animation Model
//!
//! Defines the core data contracts for FlightFrame:
//! - **Curves:** Animation channels, keyframe samples, and the keyframe sink
//! - **Timeline:** Frame bounds and the scene clock
//! - **Geometry:** Bounding boxes in parent-local space
//! - **Document:** The on-disk animation document produced by a conversion
//!
//! Frame indices are integers on the scene timeline; times are seconds as
//! recorded by the simulator. The mapping between the two belongs to the
//! synthesis layer, not the model.

pub mod curve;
pub mod document;
pub mod geometry;
pub mod timeline;

pub use curve::*;
pub use document::*;
pub use geometry::*;
pub use timeline::*;
