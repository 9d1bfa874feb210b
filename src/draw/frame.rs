//! Frame container for committed polylines.

use super::shape::{Polyline, ShapeId};
use serde::Serialize;

/// The committed layer: every finished polyline, in draw order.
///
/// Shapes are owned by the frame while committed. Removing a shape hands
/// ownership back to the caller, which is how an undone `AddShape` command
/// keeps the exact same polyline for a later redo.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Frame {
    /// Shapes in draw order (first = bottom, last = top)
    shapes: Vec<Polyline>,
}

impl Frame {
    /// Creates a new empty frame.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Adds a shape on top of the existing shapes.
    pub fn add_shape(&mut self, shape: Polyline) {
        self.shapes.push(shape);
    }

    /// Inserts a shape at `index`, or on top if the index is past the end.
    pub fn insert_shape(&mut self, index: usize, shape: Polyline) {
        let index = index.min(self.shapes.len());
        self.shapes.insert(index, shape);
    }

    /// Removes the shape with the given id, returning its draw position and the shape.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<(usize, Polyline)> {
        let index = self.position(id)?;
        Some((index, self.shapes.remove(index)))
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Polyline> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Polyline> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.position(id).is_some()
    }

    pub fn shapes(&self) -> &[Polyline] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Removes all shapes.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    fn position(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|shape| shape.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, Point};

    fn line(id: u64) -> Polyline {
        Polyline::start(ShapeId(id), Point::new(id as i32, 0), BLACK, 2.0)
    }

    #[test]
    fn remove_returns_position_and_ownership() {
        let mut frame = Frame::new();
        frame.add_shape(line(1));
        frame.add_shape(line(2));
        frame.add_shape(line(3));

        let (index, shape) = frame.remove_shape(ShapeId(2)).expect("shape 2 is committed");
        assert_eq!(index, 1);
        assert_eq!(shape.id(), ShapeId(2));
        assert_eq!(frame.len(), 2);
        assert!(!frame.contains(ShapeId(2)));

        frame.insert_shape(index, shape);
        let ids: Vec<_> = frame.shapes().iter().map(Polyline::id).collect();
        assert_eq!(ids, vec![ShapeId(1), ShapeId(2), ShapeId(3)]);
    }

    #[test]
    fn removing_unknown_shape_is_none() {
        let mut frame = Frame::new();
        frame.add_shape(line(1));
        assert!(frame.remove_shape(ShapeId(9)).is_none());
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn insert_past_end_appends() {
        let mut frame = Frame::new();
        frame.add_shape(line(1));
        frame.insert_shape(10, line(2));
        assert_eq!(frame.shapes()[1].id(), ShapeId(2));
    }
}
