//! Reversible drawing commands.

use crate::draw::{Canvas, Color, Polyline, ShapeId};
use log::debug;

/// A reversible unit of work on the committed drawing.
///
/// `undo` is the exact inverse of `execute`, and both may be called any number
/// of times in alternation. Calling either one twice in a row is a no-op the
/// second time.
#[derive(Debug, Clone)]
pub enum Command {
    /// Moves a finished polyline into the committed frame.
    AddShape {
        id: ShapeId,
        /// Owned by the command while not committed, `None` while in the frame
        shape: Option<Polyline>,
        /// Draw position recorded by the last undo, so redo restores it
        index: Option<usize>,
    },
    /// Changes the stroke color of a committed polyline.
    ChangeColor {
        id: ShapeId,
        new_color: Color,
        /// Captured when the command is built, before the first execute
        old_color: Color,
    },
}

impl Command {
    /// Wraps a finished polyline so that executing the command commits it.
    pub fn add_shape(shape: Polyline) -> Self {
        Self::AddShape {
            id: shape.id(),
            shape: Some(shape),
            index: None,
        }
    }

    /// Builds a color change for a committed shape, capturing its current color.
    ///
    /// Returns `None` when `id` is not in the committed frame.
    pub fn change_color(canvas: &Canvas, id: ShapeId, new_color: Color) -> Option<Self> {
        let old_color = canvas.frame().shape(id)?.color();
        Some(Self::ChangeColor {
            id,
            new_color,
            old_color,
        })
    }

    /// The shape this command acts on.
    pub fn shape_id(&self) -> ShapeId {
        match self {
            Self::AddShape { id, .. } | Self::ChangeColor { id, .. } => *id,
        }
    }

    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddShape { .. } => "add shape",
            Self::ChangeColor { .. } => "change color",
        }
    }

    pub fn execute(&mut self, canvas: &mut Canvas) {
        match self {
            Self::AddShape { id, shape, index } => match shape.take() {
                Some(shape) => canvas.insert_shape(index.take(), shape),
                None => debug!("Shape {id} is already committed"),
            },
            Self::ChangeColor { id, new_color, .. } => {
                if !canvas.set_stroke_color(*id, *new_color) {
                    debug!("Shape {id} is not committed; color unchanged");
                }
            }
        }
    }

    pub fn undo(&mut self, canvas: &mut Canvas) {
        match self {
            Self::AddShape { id, shape, index } => {
                if shape.is_some() {
                    debug!("Shape {id} is not committed; nothing to remove");
                    return;
                }
                if let Some((position, removed)) = canvas.remove_shape(*id) {
                    *index = Some(position);
                    *shape = Some(removed);
                }
            }
            Self::ChangeColor { id, old_color, .. } => {
                if !canvas.set_stroke_color(*id, *old_color) {
                    debug!("Shape {id} is not committed; color unchanged");
                }
            }
        }
    }
}
