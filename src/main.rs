#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use waymark::app::App;
use waymark::database::SessionStore;
use waymark::map::ConsoleMap;
use waymark::types::{Workout, WorkoutDetails};
use waymark::{cli, geo, utils};

#[macro_use]
extern crate waymark;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let store = SessionStore::open(&cli.db)?;

    match cli.cmd {
        Some(cli::Cmd::Add { entry }) => {
            let (at, entry) = entry.into_parts();
            let coords = at.map_or_else(geo::current_position, Ok)?;
            dlog!("mode=add lat={} lon={}", coords.lat, coords.lon);

            let mut app = App::init(store, ConsoleMap, Some(coords))?;
            let workout = app.new_workout(coords, entry)?;
            println!("{}", workout.description);
            Ok(())
        }
        Some(cli::Cmd::Focus { id }) => {
            dlog!("mode=focus id={id}");

            let mut app = App::init(store, ConsoleMap, None)?;
            app.focus(&id)
        }
        Some(cli::Cmd::Clear) => {
            dlog!("mode=clear");

            let app = App::init(store, ConsoleMap, None)?;
            app.reset()?;
            println!("Workout log cleared.");
            Ok(())
        }
        None => {
            dlog!("mode=list count={} details={}", cli.count, cli.details);

            let app = App::init(store, ConsoleMap, None)?;
            if app.workouts().is_empty() {
                anyhow::bail!("No workouts logged yet. Record one with `waymark add`.");
            }

            for (i, w) in app.workouts().iter().take(cli.count).enumerate() {
                if cli.details {
                    println!("{}\t{}\t{}\t{}", i + 1, w.id, w.description, detail_columns(w));
                } else {
                    println!("{}", w.description);
                }
            }

            Ok(())
        }
    }
}

fn detail_columns(w: &Workout) -> String {
    let metric = match w.details {
        WorkoutDetails::Running {
            cadence,
            pace_min_per_km,
        } => format!("{pace_min_per_km:.1} min/km\t{cadence} spm"),
        WorkoutDetails::Cycling {
            elevation_gain_m,
            speed_km_per_h,
        } => format!("{speed_km_per_h:.1} km/h\t{elevation_gain_m} m"),
    };
    format!("{} km\t{} min\t{metric}", w.distance_km, w.duration_min)
}
