//! Compute a camera placement for an object bounding box.

use flightframe_anim_model::BoundingBox;
use flightframe_trajectory_core::{place_camera, CameraConfig, ClipPolicy};

pub fn run(
    min: Vec<f64>,
    max: Vec<f64>,
    offset_x: f64,
    offset_z: f64,
    fixed_clip: bool,
) -> anyhow::Result<()> {
    // clap requires both corners with exactly three values each, so these
    // conversions cannot fail.
    let min: [f64; 3] = min
        .try_into()
        .map_err(|_| anyhow::anyhow!("--min requires exactly three values"))?;
    let max: [f64; 3] = max
        .try_into()
        .map_err(|_| anyhow::anyhow!("--max requires exactly three values"))?;

    let bbox = BoundingBox::from_extents(min, max);
    let config = CameraConfig {
        offset_x,
        offset_z,
        clip: if fixed_clip {
            ClipPolicy::Fixed
        } else {
            ClipPolicy::Auto
        },
    };
    let placement = place_camera(&bbox, &config);

    println!("{}", serde_json::to_string_pretty(&placement)?);

    Ok(())
}
