//! Layout configuration.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::geometry::GeometryConfig;

/// Track width used when the caller does not supply one.
pub const DEFAULT_TRACK_WIDTH: f64 = 600.0;

/// Knobs for one layout pass. Every field has a default, so a partial JSON
/// document (or `{}`) deserializes cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Total horizontal space shared by the columns of one day.
    pub track_width: f64,
    pub geometry: GeometryConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            track_width: DEFAULT_TRACK_WIDTH,
            geometry: GeometryConfig::default(),
        }
    }
}

impl LayoutConfig {
    pub fn with_track_width(track_width: f64) -> Self {
        Self {
            track_width,
            ..Self::default()
        }
    }

    /// Reject track widths that cannot be divided into columns.
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidTrackWidth` if the width is non-finite or not positive.
    pub fn validate(&self) -> Result<()> {
        if !self.track_width.is_finite() || self.track_width <= 0.0 {
            return Err(LayoutError::InvalidTrackWidth(self.track_width));
        }
        Ok(())
    }

    /// Parse a JSON configuration document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
