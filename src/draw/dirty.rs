//! Redraw requests and dirty region tracking.
//!
//! The core never paints. It records which layers need repainting and which
//! rectangles changed, and the rendering backend drains both between frames.

use super::Polyline;
use crate::util::Rect;

/// Logical rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Holds the polyline currently being drawn
    Working,
    /// Holds every committed polyline
    Committed,
}

impl Layer {
    fn bit(self) -> u8 {
        match self {
            Layer::Working => 0b01,
            Layer::Committed => 0b10,
        }
    }
}

/// Tracks redraw requests and dirty rectangles accumulated between renders.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
    layers: u8,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks for `layer` to be repainted at the next opportunity.
    pub fn request_redraw(&mut self, layer: Layer) {
        self.layers |= layer.bit();
    }

    /// Returns whether a redraw of `layer` is pending.
    pub fn needs_redraw(&self, layer: Layer) -> bool {
        self.layers & layer.bit() != 0
    }

    /// Returns whether anything at all is pending.
    pub fn is_dirty(&self) -> bool {
        self.layers != 0 || self.force_full || !self.regions.is_empty()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    /// Requests a redraw of `layer` covering the given polyline's bounds.
    pub fn mark_shape(&mut self, layer: Layer, shape: &Polyline) {
        self.request_redraw(layer);
        match shape.bounding_box() {
            Some(rect) => self.mark_rect(rect),
            None => self.mark_full(),
        }
    }

    /// Drains the layers that requested a redraw.
    pub fn take_layers(&mut self) -> Vec<Layer> {
        let pending = [Layer::Working, Layer::Committed]
            .into_iter()
            .filter(|layer| self.needs_redraw(*layer))
            .collect();
        self.layers = 0;
        pending
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface; otherwise returns accumulated rectangles.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            Rect::new(0, 0, width, height).into_iter().collect()
        } else {
            self.regions.drain(..).collect()
        }
    }
}
