//! Drawing session controller.

use crate::config::{Action, Config, KeyBinding};
use crate::draw::{Canvas, Color, Layer, Polyline, ShapeId};
use crate::history::{Command, UndoManager};
use crate::input::machine::{DrawEvent, PolylineMachine, StrokeStyle};
use crate::input::modifiers::Modifiers;
use anyhow::Result;
use log::{debug, info};
use serde::Serialize;
use std::collections::HashMap;

/// Undo/redo availability reported to the UI after history changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Affordance {
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Main input state containing all drawing session state.
///
/// One `InputState` exists per drawing surface. It owns the committed canvas,
/// the undo history and the polyline machine, and processes keyboard and
/// mouse events one at a time. Finished polylines and color changes only
/// reach the canvas through [`UndoManager::execute_command`].
pub struct InputState {
    /// Committed shapes and redraw bookkeeping
    pub canvas: Canvas,
    /// Undo/redo stacks of committed commands
    pub history: UndoManager,
    /// In-progress polyline construction
    pub machine: PolylineMachine,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
    /// Undo/redo availability not yet picked up by the UI
    pending_affordance: Option<Affordance>,
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// # Arguments
    /// * `style` - Stroke colors and width for new polylines
    /// * `max_points` - Vertex cap per polyline
    /// * `history_depth` - Undo steps to keep (0 = unlimited)
    /// * `action_map` - Keybinding action map
    pub fn with_defaults(
        style: StrokeStyle,
        max_points: usize,
        history_depth: usize,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            canvas: Canvas::new(),
            history: UndoManager::new(history_depth),
            machine: PolylineMachine::new(style, max_points),
            modifiers: Modifiers::new(),
            needs_redraw: true,
            action_map,
            pending_affordance: None,
        }
    }

    /// Builds a session from loaded configuration.
    ///
    /// # Errors
    /// Returns an error if the keybindings are invalid or duplicated.
    pub fn from_config(config: &Config) -> Result<Self> {
        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(anyhow::Error::msg)?;

        Ok(Self::with_defaults(
            config.stroke_style(),
            config.drawing.max_points,
            config.history.max_depth,
            action_map,
        ))
    }

    /// Feeds an event to the polyline machine and commits the result, if any.
    pub fn dispatch(&mut self, event: DrawEvent) {
        let transition = self.machine.handle(event);

        if transition.working_changed {
            self.canvas.dirty_mut().request_redraw(Layer::Working);
            self.needs_redraw = true;
        }

        if let Some(shape) = transition.finished {
            self.commit_shape(shape);
        }
    }

    fn commit_shape(&mut self, shape: Polyline) {
        info!(
            "Committed polyline {} with {} vertices",
            shape.id(),
            shape.point_count()
        );
        self.execute_command(Command::add_shape(shape));
    }

    /// Runs a command through the undo history.
    pub fn execute_command(&mut self, command: Command) {
        self.history.execute_command(command, &mut self.canvas);
        self.history_changed();
    }

    /// Undoes the last committed change. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.canvas);
        if undone {
            self.history_changed();
        } else {
            debug!("Nothing to undo");
        }
        undone
    }

    /// Redoes the last undone change. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.canvas);
        if redone {
            self.history_changed();
        } else {
            debug!("Nothing to redo");
        }
        redone
    }

    /// Recolors the selected shape through the history.
    ///
    /// Returns false without touching anything when no committed shape is selected.
    pub fn recolor_selected(&mut self, color: Color) -> bool {
        let Some(id) = self.selected_shape() else {
            debug!("No committed polyline selected; ignoring color change");
            return false;
        };
        let Some(command) = Command::change_color(&self.canvas, id, color) else {
            return false;
        };
        self.execute_command(command);
        true
    }

    /// Target of color actions: the topmost committed shape.
    ///
    /// Undo and redo keep draw positions, so this is the most recently
    /// committed shape that is still in the frame.
    pub fn selected_shape(&self) -> Option<ShapeId> {
        self.canvas.frame().shapes().last().map(Polyline::id)
    }

    /// Current undo/redo availability.
    pub fn affordance(&self) -> Affordance {
        Affordance {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }

    /// Takes the undo/redo availability recorded since the last call.
    ///
    /// Returns `Some` after every executed, undone or redone command so the UI
    /// can enable or disable its undo and redo controls.
    pub fn take_affordance(&mut self) -> Option<Affordance> {
        self.pending_affordance.take()
    }

    fn history_changed(&mut self) {
        self.pending_affordance = Some(self.affordance());
        self.needs_redraw = true;
    }

    /// Look up an action for the given key name and the held modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        let binding = KeyBinding::new(
            key_str,
            self.modifiers.ctrl,
            self.modifiers.shift,
            self.modifiers.alt,
        );
        self.action_map.get(&binding).copied()
    }
}
