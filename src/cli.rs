use crate::app::WorkoutEntry;
use crate::geo::parse_coords;
use crate::types::Coordinates;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_DB: &str = "waymark.db";

#[derive(Parser, Debug)]
#[command(
    name = "waymark",
    about = "Log geo-tagged running and cycling workouts on the command line"
)]
pub struct Cli {
    /// SQLite file holding the workout log.
    #[arg(long, default_value = DEFAULT_DB, global = true)]
    pub db: PathBuf,

    /// How many entries to print in list mode.
    #[arg(long, default_value_t = 50)]
    pub count: usize,

    /// Print id, distance, duration and the derived metric per entry.
    #[arg(long)]
    pub details: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Record a new workout at the given (or looked-up) position.
    Add {
        #[command(subcommand)]
        entry: AddCmd,
    },
    /// Center the map on one logged workout.
    Focus {
        /// Workout id, as printed by list mode with --details.
        id: String,
    },
    /// Delete every logged workout.
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum AddCmd {
    /// A run: distance, duration and step cadence.
    Running {
        #[arg(long, value_name = "KM")]
        distance: f64,

        #[arg(long, value_name = "MIN")]
        duration: f64,

        /// Steps per minute.
        #[arg(long, value_name = "SPM")]
        cadence: u32,

        /// Position as "lat,lon". Falls back to WAYMARK_POSITION.
        #[arg(long, value_parser = parse_coords, value_name = "LAT,LON")]
        at: Option<Coordinates>,
    },
    /// A ride: distance, duration and elevation gain.
    Cycling {
        #[arg(long, value_name = "KM")]
        distance: f64,

        #[arg(long, value_name = "MIN")]
        duration: f64,

        /// Metres climbed; may be negative for a net descent.
        #[arg(long, value_name = "M", allow_negative_numbers = true)]
        elevation: f64,

        /// Position as "lat,lon". Falls back to WAYMARK_POSITION.
        #[arg(long, value_parser = parse_coords, value_name = "LAT,LON")]
        at: Option<Coordinates>,
    },
}

impl AddCmd {
    /// Split the parsed form into the optional explicit position and the
    /// entry payload the app validates.
    pub fn into_parts(self) -> (Option<Coordinates>, WorkoutEntry) {
        match self {
            Self::Running {
                distance,
                duration,
                cadence,
                at,
            } => (
                at,
                WorkoutEntry::Running {
                    distance_km: distance,
                    duration_min: duration,
                    cadence,
                },
            ),
            Self::Cycling {
                distance,
                duration,
                elevation,
                at,
            } => (
                at,
                WorkoutEntry::Cycling {
                    distance_km: distance,
                    duration_min: duration,
                    elevation_gain_m: elevation,
                },
            ),
        }
    }
}
