use crate::config::Action;
use crate::input::{events::Key, machine::DrawEvent};
use crate::util;

use super::InputState;

impl InputState {
    /// Processes a key press event.
    ///
    /// Modifier keys update the modifier state; every other key is looked up
    /// in the keybinding map. Keys without a binding are ignored.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Handle an action triggered by a keybinding.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Cancel => self.dispatch(DrawEvent::Cancel),
            Action::Commit => self.dispatch(DrawEvent::Commit),
            Action::RemoveLastPoint => self.dispatch(DrawEvent::RemoveLastPoint),
            Action::Undo => {
                self.undo();
            }
            Action::Redo => {
                self.redo();
            }
            Action::SetColorRed
            | Action::SetColorGreen
            | Action::SetColorBlue
            | Action::SetColorYellow
            | Action::SetColorOrange
            | Action::SetColorPink
            | Action::SetColorWhite
            | Action::SetColorBlack => {
                if let Some(color) = action.color_key().and_then(util::key_to_color) {
                    self.recolor_selected(color);
                }
            }
        }
    }

    /// Processes a key release event.
    ///
    /// Only modifier releases matter.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }
}
