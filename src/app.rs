use crate::database::SessionStore;
use crate::dlog;
use crate::map::{DEFAULT_ZOOM, MapView};
use crate::types::{Coordinates, Workout};
use crate::utils::{all_positive, valid_inputs};
use anyhow::{Result, bail};

/// Typed form payload for one submitted entry, before validation.
#[derive(Debug, Clone, Copy)]
pub enum WorkoutEntry {
    Running {
        distance_km: f64,
        duration_min: f64,
        cadence: u32,
    },
    Cycling {
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    },
}

/// Application state: the in-memory ordered collection, the persistence
/// boundary, and the map capability. One logical thread of execution; the
/// collection only grows by append.
pub struct App<M: MapView> {
    workouts: Vec<Workout>,
    store: SessionStore,
    map: M,
}

impl<M: MapView> App<M> {
    /// Restore persisted records, center the map when the position lookup
    /// succeeded, and re-place one marker per restored record.
    pub fn init(store: SessionStore, map: M, position: Option<Coordinates>) -> Result<Self> {
        let workouts = store.load()?;
        let mut app = Self {
            workouts,
            store,
            map,
        };

        if let Some(coords) = position {
            app.map.center(coords, DEFAULT_ZOOM);
        }
        for workout in &app.workouts {
            app.map.place_marker(workout);
        }

        Ok(app)
    }

    /// Validate, construct, append, place the marker, persist the whole
    /// collection. A rejected entry mutates nothing.
    pub fn new_workout(&mut self, coords: Coordinates, entry: WorkoutEntry) -> Result<&Workout> {
        let workout = match entry {
            WorkoutEntry::Running {
                distance_km,
                duration_min,
                cadence,
            } => {
                if !valid_inputs(&[distance_km, duration_min])
                    || !all_positive(&[distance_km, duration_min])
                    || cadence == 0
                {
                    bail!("Inputs have to be positive numbers!");
                }
                Workout::running(coords, distance_km, duration_min, cadence)
            }
            WorkoutEntry::Cycling {
                distance_km,
                duration_min,
                elevation_gain_m,
            } => {
                // A net descent is a valid ride; elevation gain only has to
                // be a number.
                if !valid_inputs(&[distance_km, duration_min, elevation_gain_m])
                    || !all_positive(&[distance_km, duration_min])
                {
                    bail!("Inputs have to be positive numbers!");
                }
                Workout::cycling(coords, distance_km, duration_min, elevation_gain_m)
            }
        };

        dlog!(
            "workout_created id={} kind={}",
            workout.id,
            workout.kind().label()
        );

        self.workouts.push(workout);
        let idx = self.workouts.len() - 1;
        self.map.place_marker(&self.workouts[idx]);
        self.store.save(&self.workouts)?;
        Ok(&self.workouts[idx])
    }

    /// Center the map on one logged record (the click-on-list-entry path).
    pub fn focus(&mut self, id: &str) -> Result<()> {
        let Some(workout) = self.workouts.iter().find(|w| w.id == id) else {
            bail!("No workout with id {id}");
        };
        self.map.center(workout.coords, DEFAULT_ZOOM);
        Ok(())
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Drop every logged record. The caller reloads afterwards.
    pub fn reset(mut self) -> Result<()> {
        self.store.clear()?;
        Ok(())
    }
}
