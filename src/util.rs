//! Utility functions for colors and geometry.
//!
//! This module provides:
//! - Key-to-color mapping for keyboard shortcuts (constants live in draw::color)
//! - Color name lookups used by the config file and the CLI report
//! - The [`Rect`] used for dirty region tracking

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps keyboard characters to palette colors.
///
/// # Supported Keys (case-insensitive)
/// - `R` → Red
/// - `G` → Green
/// - `B` → Blue
/// - `Y` → Yellow
/// - `O` → Orange
/// - `P` → Pink
/// - `W` → White
/// - `K` → Black (K for blacK, since B is blue)
pub fn key_to_color(c: char) -> Option<Color> {
    match c.to_ascii_uppercase() {
        'R' => Some(RED),
        'G' => Some(GREEN),
        'B' => Some(BLUE),
        'Y' => Some(YELLOW),
        'O' => Some(ORANGE),
        'P' => Some(PINK),
        'W' => Some(WHITE),
        'K' => Some(BLACK),
        _ => None,
    }
}

/// Maps color name strings to Color values (case-insensitive).
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (0.1 tolerance) and returns "Custom" for
/// anything outside the palette.
pub fn color_to_name(color: &Color) -> &'static str {
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Returns `None` unless width and height are positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(
            min_x,
            min_y,
            max_x.saturating_sub(min_x),
            max_y.saturating_sub(min_y),
        )
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_and_name_lookups_agree() {
        for (key, name) in [('r', "red"), ('g', "green"), ('b', "blue"), ('k', "black")] {
            assert_eq!(key_to_color(key), name_to_color(name));
        }
        assert_eq!(key_to_color('x'), None);
        assert_eq!(name_to_color("mauve"), None);
    }

    #[test]
    fn color_names_round_trip_palette() {
        assert_eq!(color_to_name(&ORANGE), "Orange");
        assert_eq!(color_to_name(&BLACK), "Black");
        assert_eq!(color_to_name(&Color::new(0.5, 0.5, 0.5, 1.0)), "Custom");
    }

    #[test]
    fn rect_rejects_empty_area() {
        assert!(Rect::new(0, 0, 0, 5).is_none());
        assert!(Rect::from_min_max(3, 3, 2, 8).is_none());
        assert!(Rect::new(1, 1, 1, 1).unwrap().is_valid());
    }
}
