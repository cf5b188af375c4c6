//! FlightFrame CLI — Command-line interface for trajectory conversion.
//!
//! Usage:
//!   flightframe convert <LOG>   Convert a trajectory log to a timeline document
//!   flightframe inspect <LOG>   Show what a trajectory log contains
//!   flightframe camera          Compute a camera placement for a bounding box
//!   flightframe config          Show or persist conversion defaults

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "flightframe",
    about = "Turn simulator trajectory logs into keyframed animations",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a trajectory log into a timeline document
    Convert {
        /// Path to the trajectory log (CSV export)
        log: PathBuf,

        /// Output file path (defaults to <LOG>.timeline.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Name of the animated object
        #[arg(short, long, default_value = "rocket")]
        name: String,

        /// Scene frame rate (defaults to the configured value)
        #[arg(long)]
        fps: Option<f64>,

        /// Shift all keyframes by this many frames
        #[arg(long)]
        frame_offset: Option<i64>,

        /// Emit a keyframe every N frames
        #[arg(long)]
        keyframe_step: Option<i64>,

        /// Integrate roll rate into the rotation Z channel
        #[arg(long)]
        rotation: bool,

        /// Use linear interpolation instead of bezier
        #[arg(long)]
        linear: bool,
    },

    /// Show header fields, resolved columns, and row counts for a log
    Inspect {
        /// Path to the trajectory log
        log: PathBuf,
    },

    /// Compute a camera placement for an object bounding box
    Camera {
        /// Bounding box minimum corner (x y z)
        #[arg(long, num_args = 3, required = true, allow_negative_numbers = true)]
        min: Vec<f64>,

        /// Bounding box maximum corner (x y z)
        #[arg(long, num_args = 3, required = true, allow_negative_numbers = true)]
        max: Vec<f64>,

        /// Lateral offset from the box center
        #[arg(long, default_value = "-0.05", allow_negative_numbers = true)]
        offset_x: f64,

        /// Vertical offset above the box top
        #[arg(long, default_value = "0.05", allow_negative_numbers = true)]
        offset_z: f64,

        /// Use the fixed near-clip distance instead of deriving it
        #[arg(long)]
        fixed_clip: bool,
    },

    /// Show the effective configuration, optionally persisting it
    Config {
        /// Write the shown configuration to the standard location
        #[arg(long)]
        write: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    flightframe_common::logging::init_logging(&flightframe_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Convert {
            log,
            output,
            name,
            fps,
            frame_offset,
            keyframe_step,
            rotation,
            linear,
        } => commands::convert::run(
            log,
            output,
            name,
            fps,
            frame_offset,
            keyframe_step,
            rotation,
            linear,
        ),
        Commands::Inspect { log } => commands::inspect::run(log),
        Commands::Camera {
            min,
            max,
            offset_x,
            offset_z,
            fixed_clip,
        } => commands::camera::run(min, max, offset_x, offset_z, fixed_clip),
        Commands::Config { write } => commands::config::run(write),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_camera_requires_both_corners() {
        assert!(Cli::try_parse_from(["flightframe", "camera"]).is_err());
        assert!(
            Cli::try_parse_from(["flightframe", "camera", "--min", "0", "0", "0"]).is_err()
        );
        assert!(Cli::try_parse_from([
            "flightframe", "camera", "--min", "0", "0", "0", "--max", "1", "1", "1"
        ])
        .is_ok());
    }
}
