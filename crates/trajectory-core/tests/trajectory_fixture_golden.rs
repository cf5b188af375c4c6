use std::path::PathBuf;

use flightframe_anim_model::{Channel, CurveStore};
use flightframe_trajectory_core::{
    place_camera, CameraConfig, KeyframeSynthesizer, SynthesisConfig, TrajectoryLog,
};

fn load_fixture_log() -> TrajectoryLog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("openrocket-sample.csv");

    let bytes = std::fs::read(path).expect("fixture log should be readable");
    TrajectoryLog::parse(&bytes, true).expect("fixture log should parse")
}

#[test]
fn fixture_columns_resolve_despite_unit_suffixes() {
    let log = load_fixture_log();
    let columns = log.columns();

    // The export lists altitude before the position columns; the fuzzy
    // lookup must map them regardless of order.
    assert_eq!(columns.time, 0);
    assert_eq!(columns.altitude, 1);
    assert_eq!(columns.east, 2);
    assert_eq!(columns.north, 3);
    assert_eq!(columns.roll_rate, Some(4));
}

#[test]
fn fixture_conversion_produces_exact_keyframes() {
    let log = load_fixture_log();
    let synthesizer = KeyframeSynthesizer::new(SynthesisConfig {
        fps: 10.0,
        frame_offset: 0,
        keyframe_step: 2,
        animate_rotation: true,
    })
    .expect("config should validate");

    let mut store = CurveStore::new();
    let report = synthesizer.synthesize_log(&log, &mut store);

    // 7 parseable rows; the BURNOUT event comment and the malformed row
    // are skipped.
    assert_eq!(report.accepted_rows, 7);
    assert_eq!(report.skipped_rows, 2);

    // Frames 0, 2 and 6 survive decimation (1, 3, 3 and 5 do not).
    assert_eq!(report.emitted_keyframes, 3);
    assert_eq!(report.max_frame, 6);
    assert_eq!(report.bounds().frame_end, 6);

    let east = store.curve(Channel::Location, 0).expect("east curve");
    let frames: Vec<i64> = east.keys.iter().map(|k| k.frame).collect();
    assert_eq!(frames, vec![0, 2, 6]);
    let values: Vec<f64> = east.keys.iter().map(|k| k.value).collect();
    assert_eq!(values, vec![0.0, 0.03, 0.19]);

    let altitude = store.curve(Channel::Location, 2).expect("altitude curve");
    let values: Vec<f64> = altitude.keys.iter().map(|k| k.value).collect();
    assert_eq!(values, vec![0.0, 4.8, 36.5]);

    // Roll: first emitted row integrates nothing, then 20 deg/s over the
    // 0.0 -> 0.2 interval, then 40 deg/s over the 0.2 -> 0.6 interval.
    let roll = store.curve(Channel::RotationEuler, 2).expect("roll curve");
    let values: Vec<f64> = roll.keys.iter().map(|k| k.value).collect();
    assert_eq!(values[0], 0.0);
    assert!((values[1] - 4.0_f64.to_radians()).abs() < 1e-12);
    assert!((values[2] - 20.0_f64.to_radians()).abs() < 1e-12);
}

#[test]
fn fixture_camera_placement_is_stable() {
    // Bounding box of a slender rocket model; placement only depends on
    // the box, never on the trajectory.
    let bbox = flightframe_anim_model::BoundingBox::from_extents(
        [-0.05, -0.05, 0.0],
        [0.05, 0.05, 1.2],
    );
    let placement = place_camera(&bbox, &CameraConfig::default());

    assert_eq!(placement.local_position, [-0.05, 0.0, 1.25]);
    assert_eq!(placement.clip_start, 0.05);
}
