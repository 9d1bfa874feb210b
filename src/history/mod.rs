//! Reversible editing of the committed drawing.
//!
//! Finished polylines and color changes are wrapped in [`Command`]s and routed
//! through the [`UndoManager`], which keeps them on two [`Stack`]s for undo and
//! redo.

pub mod command;
pub mod manager;
pub mod stack;

pub use command::Command;
pub use manager::UndoManager;
pub use stack::Stack;
