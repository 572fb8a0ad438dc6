use crate::types::{Coordinates, Workout, WorkoutDetails};

pub const DEFAULT_ZOOM: u8 = 13;

/// Map-display capability: place a marker per record, center the view.
/// The event/UI layer behind it is an external collaborator.
pub trait MapView {
    fn center(&mut self, coords: Coordinates, zoom: u8);
    fn place_marker(&mut self, workout: &Workout);
}

/// Console-backed map: markers and view changes degrade to log lines
/// carrying a shareable map URL.
#[derive(Debug, Default)]
pub struct ConsoleMap;

impl MapView for ConsoleMap {
    fn center(&mut self, coords: Coordinates, zoom: u8) {
        tracing::info!(url = %map_url(coords), zoom, "map centered");
    }

    fn place_marker(&mut self, workout: &Workout) {
        tracing::info!(
            id = %workout.id,
            url = %map_url(workout.coords),
            "{}",
            popup_text(workout)
        );
    }
}

pub fn popup_text(workout: &Workout) -> String {
    let icon = match workout.details {
        WorkoutDetails::Running { .. } => "🏃‍♂️",
        WorkoutDetails::Cycling { .. } => "🚴‍♀️",
    };
    format!("{icon} {}", workout.description)
}

fn map_url(coords: Coordinates) -> String {
    format!("https://www.google.com/maps/@{},{}", coords.lat, coords.lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_text_picks_the_variant_icon() {
        let coords = Coordinates { lat: 39.0, lon: -12.0 };
        let run = Workout::running(coords, 5.0, 25.0, 180);
        let ride = Workout::cycling(coords, 20.0, 60.0, 300.0);

        assert_eq!(popup_text(&run), format!("🏃‍♂️ {}", run.description));
        assert_eq!(popup_text(&ride), format!("🚴‍♀️ {}", ride.description));
    }

    #[test]
    fn map_url_is_lat_then_lon() {
        let url = map_url(Coordinates { lat: 39.0, lon: -12.5 });
        assert_eq!(url, "https://www.google.com/maps/@39,-12.5");
    }
}
