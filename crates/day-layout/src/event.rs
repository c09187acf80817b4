//! Event records consumed by the layout pipeline and the per-event state it produces.

use serde::{Deserialize, Serialize};

use crate::geometry::{event_geometry, EventGeometry, GeometryConfig};

/// A half-open interval on the day axis (minutes from midnight, pixel offsets, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub start: f64,
    pub end: f64,
}

impl TimeSpan {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Both bounds finite and `end > start`.
    pub fn is_well_formed(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.end > self.start
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

impl From<(f64, f64)> for TimeSpan {
    fn from((start, end): (f64, f64)) -> Self {
        Self { start, end }
    }
}

/// Anything that occupies a span of the day can be laid out.
pub trait Timed {
    fn span(&self) -> TimeSpan;
}

impl Timed for TimeSpan {
    fn span(&self) -> TimeSpan {
        *self
    }
}

impl Timed for (f64, f64) {
    fn span(&self) -> TimeSpan {
        TimeSpan::from(*self)
    }
}

/// A caller-supplied event: its interval plus whatever display payload travels with it.
///
/// The payload is flattened when (de)serialized, so fields such as `title` or
/// `location` sit next to `start`/`end` and pass through layout untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEvent<P> {
    pub start: f64,
    pub end: f64,
    #[serde(flatten)]
    pub payload: P,
}

impl<P> DayEvent<P> {
    pub fn new(start: f64, end: f64, payload: P) -> Self {
        Self {
            start,
            end,
            payload,
        }
    }
}

impl<P> Timed for DayEvent<P> {
    fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start, self.end)
    }
}

/// Layout bookkeeping for one event, indexed identically to the sorted event slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutState {
    /// Indices of every event this one overlaps. Ascending, never contains itself.
    pub collided_with: Vec<usize>,
    /// Always `collided_with.len()`.
    pub collision_count: usize,
    /// Fraction of the track, in track units. Unset until widths are resolved.
    pub width: Option<f64>,
    /// Horizontal column index. Unset until slots are assigned.
    pub slot: Option<usize>,
    pub placed: bool,
}

impl LayoutState {
    pub fn collides_with(&self, other: usize) -> bool {
        self.collided_with.binary_search(&other).is_ok()
    }
}

/// Resolved geometry for one event: its column width and column index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub width: f64,
    pub slot: usize,
}

/// An event together with its resolved placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedEvent<P> {
    #[serde(flatten)]
    pub event: DayEvent<P>,
    pub width: f64,
    pub slot: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<EventGeometry>,
}

impl<P> PlacedEvent<P> {
    pub fn placement(&self) -> Placement {
        Placement {
            width: self.width,
            slot: self.slot,
        }
    }

    /// Attach the pixel box this placement occupies under `config`.
    pub fn with_geometry(mut self, config: &GeometryConfig) -> Self {
        let span = self.event.span();
        self.geometry = Some(event_geometry(&span, &self.placement(), config));
        self
    }
}
