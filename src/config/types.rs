//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Polyline drawing settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Stroke color of finished polylines - a named color (red, green, blue,
    /// yellow, orange, pink, white, black) or an RGB array like `[0, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Stroke color while a polyline is being drawn
    #[serde(default = "default_preview_color")]
    pub preview_color: ColorSpec,

    /// Stroke width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Vertex cap per polyline; the click placing the last vertex finishes
    /// the shape (valid range: 3 - 100)
    #[serde(default = "default_max_points")]
    pub max_points: usize,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            preview_color: default_preview_color(),
            default_thickness: default_thickness(),
            max_points: default_max_points(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum number of undo steps kept; the oldest step is dropped beyond
    /// it (0 = unlimited)
    #[serde(default)]
    pub max_depth: usize,
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_preview_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_thickness() -> f64 {
    2.0
}

fn default_max_points() -> usize {
    crate::input::machine::DEFAULT_MAX_POINTS
}
