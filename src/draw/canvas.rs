//! Shared drawing state mutated by history commands.

use super::{Color, DirtyTracker, Frame, Layer, Polyline, ShapeId};

/// Persistent drawing state: the committed frame and its redraw bookkeeping.
///
/// Every mutation of committed shapes goes through [`crate::history::Command`]
/// so it can be undone; the methods here are the primitive effects those
/// commands apply.
#[derive(Debug, Default)]
pub struct Canvas {
    frame: Frame,
    dirty: DirtyTracker,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn dirty(&self) -> &DirtyTracker {
        &self.dirty
    }

    pub fn dirty_mut(&mut self) -> &mut DirtyTracker {
        &mut self.dirty
    }

    /// Adds a committed shape at `index` (or on top) and requests a redraw.
    pub(crate) fn insert_shape(&mut self, index: Option<usize>, shape: Polyline) {
        self.dirty.mark_shape(Layer::Committed, &shape);
        match index {
            Some(index) => self.frame.insert_shape(index, shape),
            None => self.frame.add_shape(shape),
        }
    }

    /// Removes a committed shape and requests a redraw.
    pub(crate) fn remove_shape(&mut self, id: ShapeId) -> Option<(usize, Polyline)> {
        let removed = self.frame.remove_shape(id)?;
        self.dirty.mark_shape(Layer::Committed, &removed.1);
        Some(removed)
    }

    /// Sets the stroke color of a committed shape. Returns false if it is not committed.
    pub(crate) fn set_stroke_color(&mut self, id: ShapeId, color: Color) -> bool {
        match self.frame.shape_mut(id) {
            Some(shape) => {
                shape.set_color(color);
                self.dirty.mark_shape(Layer::Committed, shape);
                true
            }
            None => false,
        }
    }
}
