//! Keybinding configuration types and parsing.
//!
//! Every action can be bound to several keys, each with optional modifiers.

use crate::input::Key;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Polyline construction
    Cancel,
    Commit,
    RemoveLastPoint,

    // History
    Undo,
    Redo,

    // Recolor the selected polyline
    SetColorRed,
    SetColorGreen,
    SetColorBlue,
    SetColorYellow,
    SetColorOrange,
    SetColorPink,
    SetColorWhite,
    SetColorBlack,
}

impl Action {
    /// Palette key for color actions (see `util::key_to_color`).
    pub fn color_key(&self) -> Option<char> {
        match self {
            Action::SetColorRed => Some('r'),
            Action::SetColorGreen => Some('g'),
            Action::SetColorBlue => Some('b'),
            Action::SetColorYellow => Some('y'),
            Action::SetColorOrange => Some('o'),
            Action::SetColorPink => Some('p'),
            Action::SetColorWhite => Some('w'),
            Action::SetColorBlack => Some('k'),
            _ => None,
        }
    }
}

/// A single keybinding: a key name with modifiers.
///
/// The key is stored lowercased so lookups ignore case ("Z" and "z" match).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Builds a binding from a key name and the current modifier state.
    ///
    /// Key aliases ("Enter", "Esc", "Del") are stored under the name the
    /// input layer reports for that key.
    pub fn new(key: &str, ctrl: bool, shift: bool, alt: bool) -> Self {
        let canonical = Key::from_name(key)
            .binding_name()
            .unwrap_or_else(|| key.to_string());
        Self {
            key: canonical.to_lowercase(),
            ctrl,
            shift,
            alt,
        }
    }

    /// Parses a keybinding string like "Ctrl+Shift+Z" or "Escape".
    ///
    /// Modifiers may appear in any order and spaces around '+' are ignored.
    /// A trailing "+" names the plus key itself ("Ctrl++").
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let compact: String = s.split('+').map(str::trim).collect::<Vec<_>>().join("+");
        let (modifier_part, key) = if let Some(prefix) = compact.strip_suffix("++") {
            (prefix, "+")
        } else if compact == "+" {
            ("", "+")
        } else {
            match compact.rsplit_once('+') {
                Some((prefix, key)) => (prefix, key),
                None => ("", compact.as_str()),
            }
        };

        let (mut ctrl, mut shift, mut alt) = (false, false, false);
        for part in modifier_part.split('+').filter(|part| !part.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                other => return Err(format!("Unknown modifier '{}' in: {}", other, s)),
            }
        }

        let is_modifier = matches!(
            key.to_lowercase().as_str(),
            "ctrl" | "control" | "shift" | "alt"
        );
        if key.is_empty() || is_modifier {
            return Err(format!("No key specified in: {}", s));
        }

        Ok(Self::new(key, ctrl, shift, alt))
    }
}

/// Configuration for all keybindings.
///
/// ```toml
/// [keybindings]
/// cancel = ["Escape"]
/// undo = ["Ctrl+Z"]
/// redo = ["Ctrl+Y", "Ctrl+Shift+Z"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_cancel")]
    pub cancel: Vec<String>,

    #[serde(default = "default_commit")]
    pub commit: Vec<String>,

    #[serde(default = "default_remove_last_point")]
    pub remove_last_point: Vec<String>,

    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_redo")]
    pub redo: Vec<String>,

    #[serde(default = "default_set_color_red")]
    pub set_color_red: Vec<String>,

    #[serde(default = "default_set_color_green")]
    pub set_color_green: Vec<String>,

    #[serde(default = "default_set_color_blue")]
    pub set_color_blue: Vec<String>,

    #[serde(default = "default_set_color_yellow")]
    pub set_color_yellow: Vec<String>,

    #[serde(default = "default_set_color_orange")]
    pub set_color_orange: Vec<String>,

    #[serde(default = "default_set_color_pink")]
    pub set_color_pink: Vec<String>,

    #[serde(default = "default_set_color_white")]
    pub set_color_white: Vec<String>,

    #[serde(default = "default_set_color_black")]
    pub set_color_black: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            cancel: default_cancel(),
            commit: default_commit(),
            remove_last_point: default_remove_last_point(),
            undo: default_undo(),
            redo: default_redo(),
            set_color_red: default_set_color_red(),
            set_color_green: default_set_color_green(),
            set_color_blue: default_set_color_blue(),
            set_color_yellow: default_set_color_yellow(),
            set_color_orange: default_set_color_orange(),
            set_color_pink: default_set_color_pink(),
            set_color_white: default_set_color_white(),
            set_color_black: default_set_color_black(),
        }
    }
}

impl KeybindingsConfig {
    fn entries(&self) -> [(&[String], Action); 13] {
        [
            (self.cancel.as_slice(), Action::Cancel),
            (self.commit.as_slice(), Action::Commit),
            (self.remove_last_point.as_slice(), Action::RemoveLastPoint),
            (self.undo.as_slice(), Action::Undo),
            (self.redo.as_slice(), Action::Redo),
            (self.set_color_red.as_slice(), Action::SetColorRed),
            (self.set_color_green.as_slice(), Action::SetColorGreen),
            (self.set_color_blue.as_slice(), Action::SetColorBlue),
            (self.set_color_yellow.as_slice(), Action::SetColorYellow),
            (self.set_color_orange.as_slice(), Action::SetColorOrange),
            (self.set_color_pink.as_slice(), Action::SetColorPink),
            (self.set_color_white.as_slice(), Action::SetColorWhite),
            (self.set_color_black.as_slice(), Action::SetColorBlack),
        ]
    }

    /// Builds the lookup map from keybindings to actions.
    ///
    /// Returns an error if any keybinding string is invalid or if the same
    /// binding is assigned twice.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        for (bindings, action) in self.entries() {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybindings
// =============================================================================

fn default_cancel() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_commit() -> Vec<String> {
    vec!["Return".to_string()]
}

fn default_remove_last_point() -> Vec<String> {
    vec!["Backspace".to_string()]
}

fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string()]
}

fn default_redo() -> Vec<String> {
    vec!["Ctrl+Y".to_string(), "Ctrl+Shift+Z".to_string()]
}

fn default_set_color_red() -> Vec<String> {
    vec!["R".to_string()]
}

fn default_set_color_green() -> Vec<String> {
    vec!["G".to_string()]
}

fn default_set_color_blue() -> Vec<String> {
    vec!["B".to_string()]
}

fn default_set_color_yellow() -> Vec<String> {
    vec!["Y".to_string()]
}

fn default_set_color_orange() -> Vec<String> {
    vec!["O".to_string()]
}

fn default_set_color_pink() -> Vec<String> {
    vec!["P".to_string()]
}

fn default_set_color_white() -> Vec<String> {
    vec!["W".to_string()]
}

fn default_set_color_black() -> Vec<String> {
    vec!["K".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.key, "escape");
        assert!(!binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_ctrl_shift_key() {
        let binding = KeyBinding::parse("Ctrl+Shift+Z").unwrap();
        assert_eq!(binding.key, "z");
        assert!(binding.ctrl);
        assert!(binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_with_spaces_and_any_order() {
        let spaced = KeyBinding::parse("Ctrl + Shift + Z").unwrap();
        let reordered = KeyBinding::parse("shift+ctrl+z").unwrap();
        assert_eq!(spaced, reordered);
    }

    #[test]
    fn test_parse_plus_key() {
        let binding = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(binding.key, "+");
        assert!(binding.ctrl);

        let bare = KeyBinding::parse("+").unwrap();
        assert_eq!(bare.key, "+");
        assert!(!bare.ctrl);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(KeyBinding::parse("").is_err());
        assert!(KeyBinding::parse("Ctrl+Shift").is_err());
        assert!(KeyBinding::parse("Hyper+Z").is_err());
    }

    #[test]
    fn test_build_action_map() {
        let map = KeybindingsConfig::default().build_action_map().unwrap();

        let escape = KeyBinding::parse("Escape").unwrap();
        assert_eq!(map.get(&escape), Some(&Action::Cancel));

        let ctrl_z = KeyBinding::new("z", true, false, false);
        assert_eq!(map.get(&ctrl_z), Some(&Action::Undo));

        let ctrl_shift_z = KeyBinding::new("Z", true, true, false);
        assert_eq!(map.get(&ctrl_shift_z), Some(&Action::Redo));
    }

    #[test]
    fn test_aliases_match_reported_key_names() {
        let enter = KeyBinding::parse("Enter").unwrap();
        assert_eq!(enter, KeyBinding::new("Return", false, false, false));
        assert_eq!(KeyBinding::parse("Esc").unwrap().key, "escape");
        assert_eq!(KeyBinding::parse("Ctrl+Del").unwrap().key, "delete");
    }

    #[test]
    fn test_alias_and_canonical_name_collide() {
        let mut config = KeybindingsConfig::default();
        config.cancel = vec!["Esc".to_string(), "Escape".to_string()];
        assert!(config.build_action_map().is_err());
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let mut config = KeybindingsConfig::default();
        config.cancel = vec!["Ctrl+Z".to_string()];

        let err_msg = config.build_action_map().unwrap_err();
        assert!(err_msg.contains("Duplicate keybinding"));
        assert!(err_msg.contains("Ctrl+Z"));
    }

    #[test]
    fn test_color_keys_cover_palette() {
        assert_eq!(Action::SetColorBlack.color_key(), Some('k'));
        assert_eq!(Action::Undo.color_key(), None);
    }
}
