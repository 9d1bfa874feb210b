//! Generic input event types for cross-backend compatibility.

/// Generic key representation.
///
/// Input sources map their native key codes to these values before handing
/// them to [`super::InputState::on_key_press`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Space bar
    Space,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Parses a key name as written in keybindings ("Escape", "Return", "z").
    ///
    /// Single characters map to [`Key::Char`]; unknown names map to [`Key::Unknown`].
    pub fn from_name(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Key::Char(c);
        }
        match name.to_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "return" | "enter" => Key::Return,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "space" => Key::Space,
            "shift" => Key::Shift,
            "ctrl" | "control" => Key::Ctrl,
            "alt" => Key::Alt,
            _ => Key::Unknown,
        }
    }

    /// Name used for keybinding lookup, or `None` for modifiers and unknown keys.
    pub fn binding_name(&self) -> Option<String> {
        match self {
            Key::Char(c) => Some(c.to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::Return => Some("Return".to_string()),
            Key::Backspace => Some("Backspace".to_string()),
            Key::Delete => Some("Delete".to_string()),
            Key::Space => Some("Space".to_string()),
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => None,
        }
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (places vertices)
    Left,
    /// Right mouse button (cancels the polyline)
    Right,
    /// Middle mouse button (unused)
    Middle,
}
