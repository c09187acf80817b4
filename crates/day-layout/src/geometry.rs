//! Pixel geometry for a rendering surface.
//!
//! The layout pipeline stops at abstract `(width, slot)` pairs. These helpers
//! translate a placement into absolute box coordinates the way a day-view grid
//! draws it: columns start after a left margin, each box gives up a few pixels
//! for its borders, and the vertical axis is the event's own span.

use serde::{Deserialize, Serialize};

use crate::event::{Placement, TimeSpan};

/// Border and margin allowances applied when turning a placement into a box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryConfig {
    /// Space left of the first column.
    pub margin: f64,
    /// Horizontal pixels taken by the left accent border plus the right border.
    pub border_allowance: f64,
    /// Vertical pixels taken by the top and bottom borders.
    pub vertical_border: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            margin: 10.0,
            border_allowance: 6.0,
            vertical_border: 2.0,
        }
    }
}

/// An absolutely-positioned box, in track units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Compute the box for an event given its span and resolved placement.
///
/// Widths and heights are clamped at zero so a very narrow column never yields
/// a negative size.
pub fn event_geometry(
    span: &TimeSpan,
    placement: &Placement,
    config: &GeometryConfig,
) -> EventGeometry {
    EventGeometry {
        left: config.margin + placement.width * placement.slot as f64,
        top: span.start,
        width: (placement.width - config.border_allowance).max(0.0),
        height: (span.duration() - config.vertical_border).max(0.0),
    }
}
