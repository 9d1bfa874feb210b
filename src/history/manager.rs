//! Undo/redo orchestration.

use super::{Command, Stack};
use crate::draw::Canvas;
use log::debug;

/// Owns the undo and redo stacks.
///
/// [`UndoManager::execute_command`] is the only way committed drawing state
/// changes; any new command clears the redo stack.
#[derive(Debug, Default)]
pub struct UndoManager {
    undo_stack: Stack<Command>,
    redo_stack: Stack<Command>,
    /// Maximum number of undo entries kept (0 = unlimited)
    max_depth: usize,
}

impl UndoManager {
    /// Creates an empty history. `max_depth == 0` keeps every command.
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Stack::new(),
            redo_stack: Stack::new(),
            max_depth,
        }
    }

    /// Executes a command, records it for undo and clears the redo stack.
    pub fn execute_command(&mut self, mut command: Command, canvas: &mut Canvas) {
        command.execute(canvas);
        debug!("Executed {} on shape {}", command.label(), command.shape_id());
        self.undo_stack.push(command);
        self.redo_stack.clear();

        if self.max_depth > 0 && self.undo_stack.len() > self.max_depth {
            if let Some(evicted) = self.undo_stack.evict_oldest() {
                debug!(
                    "Undo history limit ({}) reached; dropped {} on shape {}",
                    self.max_depth,
                    evicted.label(),
                    evicted.shape_id()
                );
            }
        }
    }

    /// Undoes the most recent command. Returns false if there was nothing to undo.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        let Some(mut command) = self.undo_stack.pop() else {
            return false;
        };
        command.undo(canvas);
        debug!("Undid {} on shape {}", command.label(), command.shape_id());
        self.redo_stack.push(command);
        true
    }

    /// Re-executes the most recently undone command. Returns false if there was nothing to redo.
    pub fn redo(&mut self, canvas: &mut Canvas) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };
        command.execute(canvas);
        debug!("Redid {} on shape {}", command.label(), command.shape_id());
        self.undo_stack.push(command);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Forgets all history without touching the canvas.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
