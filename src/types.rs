use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
        }
    }
}

/// Variant payload plus the metric derived from it. The tag doubles as the
/// `type` field of the persisted blob.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running { cadence: u32, pace_min_per_km: f64 },
    Cycling { elevation_gain_m: f64, speed_km_per_h: f64 },
}

/// One logged exercise session. Fully populated at construction, immutable
/// afterwards; the derived metric and description are never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub date: DateTime<Utc>,
    pub coords: Coordinates,
    pub distance_km: f64,
    pub duration_min: f64,
    pub description: String,
    #[serde(flatten)]
    pub details: WorkoutDetails,
}

impl Workout {
    /// Constructors trust their inputs; entry points validate first.
    pub fn running(coords: Coordinates, distance_km: f64, duration_min: f64, cadence: u32) -> Self {
        let date = Utc::now();
        Self {
            id: session_id(date),
            date,
            coords,
            distance_km,
            duration_min,
            description: describe(WorkoutKind::Running, date),
            details: WorkoutDetails::Running {
                cadence,
                pace_min_per_km: duration_min / distance_km,
            },
        }
    }

    pub fn cycling(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        let date = Utc::now();
        Self {
            id: session_id(date),
            date,
            coords,
            distance_km,
            duration_min,
            description: describe(WorkoutKind::Cycling, date),
            details: WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h: distance_km / (duration_min / 60.0),
            },
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// "Running on August 6", from the UTC calendar date.
pub fn describe(kind: WorkoutKind, date: DateTime<Utc>) -> String {
    format!("{} on {}", kind.label(), date.format("%B %-d"))
}

/// Best-effort unique id: the last ten digits of the creation timestamp in
/// milliseconds. Rapid successive submissions may collide.
pub fn session_id(date: DateTime<Utc>) -> String {
    let ms = date.timestamp_millis();
    format!("{:010}", ms.rem_euclid(10_000_000_000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn coords() -> Coordinates {
        Coordinates {
            lat: 52.2297,
            lon: 21.0122,
        }
    }

    #[test]
    fn running_pace_is_computed_at_construction() {
        let w = Workout::running(coords(), 5.0, 25.0, 180);
        match w.details {
            WorkoutDetails::Running {
                cadence,
                pace_min_per_km,
            } => {
                assert_eq!(cadence, 180);
                assert!((pace_min_per_km - 5.0).abs() < f64::EPSILON);
            }
            WorkoutDetails::Cycling { .. } => panic!("expected a running workout"),
        }
        assert_eq!(w.kind(), WorkoutKind::Running);
    }

    #[test]
    fn cycling_speed_is_computed_at_construction() {
        let w = Workout::cycling(coords(), 20.0, 60.0, 300.0);
        match w.details {
            WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => {
                assert!((elevation_gain_m - 300.0).abs() < f64::EPSILON);
                assert!((speed_km_per_h - 20.0).abs() < f64::EPSILON);
            }
            WorkoutDetails::Running { .. } => panic!("expected a cycling workout"),
        }
        assert_eq!(w.kind(), WorkoutKind::Cycling);
    }

    #[test]
    fn describe_formats_month_and_day() {
        let date = Utc.with_ymd_and_hms(2024, 8, 6, 12, 0, 0).unwrap();
        assert_eq!(describe(WorkoutKind::Running, date), "Running on August 6");
        assert_eq!(describe(WorkoutKind::Cycling, date), "Cycling on August 6");
    }

    #[test]
    fn session_id_is_ten_digits() {
        let date = Utc.with_ymd_and_hms(2024, 8, 6, 12, 0, 0).unwrap();
        let id = session_id(date);
        assert_eq!(id.len(), 10);
        assert!(id.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn blob_carries_the_variant_tag() {
        let w = Workout::cycling(coords(), 20.0, 60.0, 300.0);
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["type"], "cycling");
        assert_eq!(json["elevation_gain_m"], 300.0);
        assert_eq!(json["speed_km_per_h"], 20.0);

        let w = Workout::running(coords(), 5.0, 25.0, 180);
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["type"], "running");
        assert_eq!(json["cadence"], 180);
        assert_eq!(json["pace_min_per_km"], 5.0);
    }

    #[test]
    fn records_survive_a_serde_round_trip() {
        let w = Workout::running(coords(), 5.2, 24.0, 178);
        let json = serde_json::to_string(&w).unwrap();
        let back: Workout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }
}
