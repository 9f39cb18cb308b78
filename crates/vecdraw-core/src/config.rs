//! Editor tuning knobs.

use crate::error::{EditorError, EditorResult};
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// Smallest `min_zoom` accepted. The view scale is kept to two decimals, so
/// anything lower can round to zero or stop `zoom_in` from making progress.
pub const MIN_ZOOM_FLOOR: f64 = 0.05;

/// Tunable thresholds for one editor session.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum number of undo snapshots kept (oldest evicted first).
    pub max_undo_history: usize,
    /// Floor for the pick tolerance.
    pub min_hit_tolerance: f64,
    /// Added to the stroke width to get the pick tolerance.
    pub hit_tolerance_padding: f64,
    /// Minimum line length, circle radius and rectangle side for a draft to commit.
    pub min_draft_size: f64,
    /// Minimum first-to-last distance for a freehand stroke to commit.
    pub min_freehand_span: f64,
    /// Minimum spacing between consecutive freehand samples.
    pub freehand_sample_spacing: f64,
    /// Multiplicative zoom step.
    pub zoom_step: f64,
    /// Smallest view scale.
    pub min_zoom: f64,
    /// Largest view scale.
    pub max_zoom: f64,
    /// Tool active when the session starts.
    pub default_tool: ToolKind,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_undo_history: 50,
            min_hit_tolerance: 6.0,
            hit_tolerance_padding: 6.0,
            min_draft_size: 3.0,
            min_freehand_span: 2.0,
            freehand_sample_spacing: 1.5,
            zoom_step: 1.1,
            min_zoom: 0.2,
            max_zoom: 4.0,
            default_tool: ToolKind::default(),
        }
    }
}

impl EditorConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json_str(json: &str) -> EditorResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the engine cannot run with.
    pub fn validate(&self) -> EditorResult<()> {
        if self.max_undo_history == 0 {
            return Err(EditorError::InvalidConfig(
                "max_undo_history must be at least 1".to_string(),
            ));
        }
        let thresholds = [
            ("min_hit_tolerance", self.min_hit_tolerance),
            ("hit_tolerance_padding", self.hit_tolerance_padding),
            ("min_draft_size", self.min_draft_size),
            ("min_freehand_span", self.min_freehand_span),
            ("freehand_sample_spacing", self.freehand_sample_spacing),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(EditorError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            return Err(EditorError::InvalidConfig(format!(
                "zoom_step must be greater than 1, got {}",
                self.zoom_step
            )));
        }
        if !(self.min_zoom.is_finite() && self.min_zoom >= MIN_ZOOM_FLOOR) {
            return Err(EditorError::InvalidConfig(format!(
                "min_zoom must be at least {MIN_ZOOM_FLOOR}, got {}",
                self.min_zoom
            )));
        }
        if !(self.min_zoom <= self.max_zoom && self.max_zoom.is_finite()) {
            return Err(EditorError::InvalidConfig(format!(
                "zoom range [{}, {}] is empty",
                self.min_zoom, self.max_zoom
            )));
        }
        Ok(())
    }

    /// Pick tolerance for a given stroke width.
    pub fn hit_tolerance(&self, line_width: f64) -> f64 {
        (line_width + self.hit_tolerance_padding).max(self.min_hit_tolerance)
    }
}
