use crate::types::Coordinates;
use anyhow::{Context, Result, bail};
use std::env;

pub const POSITION_ENV: &str = "WAYMARK_POSITION";

/// One-shot position lookup, at most once per run: either coordinates or a
/// failure reason. No retry, no timeout.
pub fn current_position() -> Result<Coordinates> {
    let raw = env::var(POSITION_ENV)
        .with_context(|| format!("could not get your position: {POSITION_ENV} is not set"))?;
    parse_coords(&raw)
        .with_context(|| format!("could not get your position: bad {POSITION_ENV}"))
}

/// Shared parser for the env lookup and the `--at` flag.
pub fn parse_coords(s: &str) -> Result<Coordinates> {
    let Some((lat, lon)) = s.split_once(',') else {
        bail!("expected \"lat,lon\", got {s:?}");
    };

    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("bad latitude {lat:?}"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .with_context(|| format!("bad longitude {lon:?}"))?;

    Ok(Coordinates { lat, lon })
}
