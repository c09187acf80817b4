//! WASM bindings for day-layout.
//!
//! Exposes the day-view overlap layout to JavaScript via `wasm-bindgen`. Event
//! lists cross the boundary as JSON strings, so the page can hand over its own
//! event objects (`{start, end, title, ...}`) and get them back with `width`,
//! `slot` and optionally `geometry` filled in.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p day-layout-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/day-layout-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/day_layout_wasm.wasm
//! ```

use day_layout::{LayoutConfig, TimeSpan};
use wasm_bindgen::prelude::*;

fn to_js_error(e: day_layout::LayoutError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Lay out one day's events.
///
/// `events_json` must be a JSON array of objects with numeric `start` and `end`;
/// any other fields pass through. Returns a JSON string with the events sorted
/// by start, each carrying `width` and `slot`.
///
/// # Arguments
/// - `events_json` -- JSON array of `{start, end, ...}` objects
/// - `track_width` -- Total width shared by the columns (defaults to 600)
/// - `with_geometry` -- Also attach `{left, top, width, height}` pixel boxes
#[wasm_bindgen(js_name = "layOutDay")]
pub fn lay_out_day(
    events_json: &str,
    track_width: Option<f64>,
    with_geometry: Option<bool>,
) -> Result<String, JsValue> {
    let config = match track_width {
        Some(width) => LayoutConfig::with_track_width(width),
        None => LayoutConfig::default(),
    };

    day_layout::lay_out_json(events_json, &config, with_geometry.unwrap_or(false))
        .map_err(to_js_error)
}

/// The largest width ratio (column count) any collision group on the day needs.
#[wasm_bindgen(js_name = "maxWidthRatio")]
pub fn max_width_ratio(events_json: &str) -> Result<usize, JsValue> {
    day_layout::max_width_ratio_json(events_json).map_err(to_js_error)
}

/// Whether two events share at least one instant. Touching endpoints do not.
#[wasm_bindgen(js_name = "checkCollision")]
pub fn check_collision(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> bool {
    day_layout::collides(
        &TimeSpan::new(a_start, a_end),
        &TimeSpan::new(b_start, b_end),
    )
}
