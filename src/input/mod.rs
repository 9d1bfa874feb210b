//! Input handling and the polyline construction state machine.
//!
//! This module translates backend keyboard and mouse events into drawing
//! events. [`PolylineMachine`] builds the in-progress polyline, and
//! [`InputState`] is the session controller that routes finished polylines and
//! color changes through the undo history.

pub mod events;
pub mod machine;
pub mod modifiers;
pub mod state;

pub use events::{Key, MouseButton};
pub use machine::{DrawEvent, DrawingState, PolylineMachine, StrokeStyle, Transition};
pub use modifiers::Modifiers;
pub use state::{Affordance, InputState};
