//! # day-layout
//!
//! Deterministic overlap layout for day-view calendar events.
//!
//! Given one day's events as intervals on a shared axis, the layout pipeline
//! works out which events overlap, how many columns each collision group needs,
//! a single column width per group, and the leftmost free column for every
//! event. The output is an abstract `(width, slot)` pair per event; turning it
//! into pixels is left to the renderer (see [`geometry`] for a helper).
//!
//! ## Quick start
//!
//! ```rust
//! use day_layout::{lay_out, LayoutConfig, TimeSpan};
//!
//! let mut events = vec![
//!     TimeSpan::new(30.0, 150.0),
//!     TimeSpan::new(540.0, 600.0),
//!     TimeSpan::new(560.0, 620.0),
//!     TimeSpan::new(610.0, 670.0),
//! ];
//! let placements = lay_out(&mut events, &LayoutConfig::default()).unwrap();
//!
//! assert_eq!(placements[0].width, 600.0);
//! assert_eq!(placements[1].width, 300.0);
//! assert_eq!(placements[2].slot, 1);
//! assert_eq!(placements[3].slot, 0);
//! ```
//!
//! ## Modules
//!
//! - [`layout`] — Pipeline entry points (`lay_out`, `lay_out_day`, `max_width_ratio`)
//! - [`collision`] — Pairwise overlap detection and the collision graph
//! - [`width`] — Two-hop column-count estimate and group width equalization
//! - [`slot`] — Leftmost free column assignment
//! - [`geometry`] — Placement → pixel box translation
//! - [`json`] — JSON array in, laid-out JSON array out
//! - [`config`] — `LayoutConfig`
//! - [`event`] — Input events, layout state, placements
//! - [`error`] — Error types

pub mod collision;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod json;
pub mod layout;
pub mod slot;
pub mod width;

pub use collision::collides;
pub use config::LayoutConfig;
pub use error::LayoutError;
pub use event::{DayEvent, LayoutState, PlacedEvent, Placement, TimeSpan, Timed};
pub use geometry::{event_geometry, EventGeometry, GeometryConfig};
pub use json::{lay_out_json, max_width_ratio_json};
pub use layout::{lay_out, lay_out_day, max_width_ratio};
