//! RGBA color type and the palette bound to the color keys.

use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use polyscribe::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// assert_eq!(red, polyscribe::draw::RED);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
    /// Alpha/transparency (1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 0-255 channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, 1.0)
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Red, also the default color of an in-progress polyline.
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0, 1.0);

pub const PINK: Color = Color::new(1.0, 0.0, 1.0, 1.0);

pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Black, the default stroke color of a finished polyline.
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgb8_scales_channels() {
        let orange = Color::from_rgb8(255, 128, 0);
        assert_eq!(orange.r, 1.0);
        assert!((orange.g - 128.0 / 255.0).abs() < f64::EPSILON);
        assert_eq!(orange.b, 0.0);
        assert_eq!(orange.a, 1.0);
    }
}
