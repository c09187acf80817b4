//! JSON surface: lay out a JSON array of `{start, end, ...}` objects.
//!
//! Any field other than `start`/`end` is treated as display payload and passes
//! through in its original order. Layout-owned fields (`width`, `slot`,
//! `geometry`) on the input are discarded and recomputed.

use serde_json::{Map, Value};

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::event::{DayEvent, TimeSpan};
use crate::layout::{lay_out_day, max_width_ratio};

/// Fields written by layout. Stale copies on input are dropped.
const LAYOUT_FIELDS: [&str; 3] = ["width", "slot", "geometry"];

pub type JsonPayload = Map<String, Value>;

/// Parse a JSON array of events into [`DayEvent`]s with their payload preserved.
pub fn parse_events(input: &str) -> Result<Vec<DayEvent<JsonPayload>>> {
    let mut events: Vec<DayEvent<JsonPayload>> = serde_json::from_str(input)?;
    for event in &mut events {
        event
            .payload
            .retain(|key, _| !LAYOUT_FIELDS.contains(&key.as_str()));
    }
    Ok(events)
}

/// Lay out a JSON array of events and return the laid-out array as compact JSON.
///
/// Output events are sorted by start and carry `width` and `slot`; with
/// `with_geometry` they also carry a `geometry` box computed from
/// `config.geometry`.
///
/// # Errors
/// Returns `LayoutError::Json` for malformed input, or any error from
/// [`lay_out_day`].
pub fn lay_out_json(input: &str, config: &LayoutConfig, with_geometry: bool) -> Result<String> {
    let events = parse_events(input)?;
    let mut placed = lay_out_day(events, config)?;

    if with_geometry {
        placed = placed
            .into_iter()
            .map(|event| event.with_geometry(&config.geometry))
            .collect();
    }

    Ok(serde_json::to_string(&placed)?)
}

/// [`max_width_ratio`] over a JSON array of events. Extra fields are ignored.
pub fn max_width_ratio_json(input: &str) -> Result<usize> {
    let mut spans: Vec<TimeSpan> = serde_json::from_str(input)?;
    max_width_ratio(&mut spans)
}
