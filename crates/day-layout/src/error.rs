//! Error types for day-layout operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    /// An event whose bounds are non-finite or whose `end` is not after its `start`.
    /// `index` is the event's position in the caller's input.
    #[error("Invalid interval at index {index}: start={start}, end={end} (end must be after start)")]
    InvalidInterval { index: usize, start: f64, end: f64 },

    #[error("Invalid track width: {0} (must be finite and positive)")]
    InvalidTrackWidth(f64),

    /// No free slot among `collision_count + 1` candidates. Only reachable if the
    /// collision graph is inconsistent.
    #[error("Layout inconsistency: no open slot for event {index} with {collision_count} collisions")]
    SlotExhaustion { index: usize, collision_count: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
