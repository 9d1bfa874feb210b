//! Headless event scripts.
//!
//! A script is a plain-text list of input events, one per line, replayed
//! against an [`InputState`] in order:
//!
//! ```text
//! # draw a segment and recolor it
//! click 10 10
//! move 40 40
//! click 50 50
//! key Return
//! key B
//! undo
//! ```
//!
//! `down` is an alias for `click`; `right X Y` is a right click. `key` takes a
//! keybinding string such as `Ctrl+Z` or `Escape`.

use crate::config::KeyBinding;
use crate::draw::Point;
use crate::input::{InputState, Key, MouseButton};
use log::debug;
use thiserror::Error;

/// Errors produced while parsing a script.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    WrongArity {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: invalid coordinate '{value}'")]
    BadCoordinate { line: usize, value: String },

    #[error("line {line}: {message}")]
    BadKey { line: usize, message: String },
}

/// A single scripted input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEvent {
    Press(MouseButton, Point),
    Move(Point),
    Key { binding: KeyBinding, key: Key },
    Undo,
    Redo,
}

/// Parses a whole script.
///
/// Stops at the first malformed line.
pub fn parse(source: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        if let Some(event) = parse_line(index + 1, raw)? {
            events.push(event);
        }
    }
    Ok(events)
}

fn parse_line(line: usize, raw: &str) -> Result<Option<ScriptEvent>, ScriptError> {
    let text = match raw.split_once('#') {
        Some((before, _)) => before,
        None => raw,
    };
    let mut words = text.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let event = match command.to_lowercase().as_str() {
        "click" | "down" => {
            ScriptEvent::Press(MouseButton::Left, point_arg(line, command, &args)?)
        }
        "right" => ScriptEvent::Press(MouseButton::Right, point_arg(line, command, &args)?),
        "move" => ScriptEvent::Move(point_arg(line, command, &args)?),
        "key" => {
            // Keybinding strings may contain spaces ("Ctrl + Z")
            if args.is_empty() {
                return Err(ScriptError::WrongArity {
                    line,
                    command: command.to_string(),
                    expected: "a key name",
                });
            }
            key_arg(line, &args.join(" "))?
        }
        "undo" | "redo" => {
            if !args.is_empty() {
                return Err(ScriptError::WrongArity {
                    line,
                    command: command.to_string(),
                    expected: "no arguments",
                });
            }
            if command.eq_ignore_ascii_case("undo") {
                ScriptEvent::Undo
            } else {
                ScriptEvent::Redo
            }
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.to_string(),
            });
        }
    };
    Ok(Some(event))
}

fn point_arg(line: usize, command: &str, args: &[&str]) -> Result<Point, ScriptError> {
    let [x, y] = args else {
        return Err(ScriptError::WrongArity {
            line,
            command: command.to_string(),
            expected: "two coordinates",
        });
    };
    Ok(Point::new(coordinate(line, x)?, coordinate(line, y)?))
}

fn coordinate(line: usize, value: &str) -> Result<i32, ScriptError> {
    value.parse().map_err(|_| ScriptError::BadCoordinate {
        line,
        value: value.to_string(),
    })
}

fn key_arg(line: usize, name: &str) -> Result<ScriptEvent, ScriptError> {
    let binding =
        KeyBinding::parse(name).map_err(|message| ScriptError::BadKey { line, message })?;
    let key = Key::from_name(&binding.key);
    if key == Key::Unknown {
        return Err(ScriptError::BadKey {
            line,
            message: format!("Unknown key '{}'", binding.key),
        });
    }
    Ok(ScriptEvent::Key { binding, key })
}

impl ScriptEvent {
    /// Feeds the event to the session.
    pub fn apply(&self, state: &mut InputState) {
        debug!("Script event: {:?}", self);
        match self {
            ScriptEvent::Press(button, at) => state.on_mouse_press(*button, at.x, at.y),
            ScriptEvent::Move(at) => state.on_mouse_motion(at.x, at.y),
            ScriptEvent::Key { binding, key } => {
                let modifiers = [
                    (binding.ctrl, Key::Ctrl),
                    (binding.shift, Key::Shift),
                    (binding.alt, Key::Alt),
                ];
                for (held, modifier) in modifiers {
                    if held {
                        state.on_key_press(modifier);
                    }
                }
                state.on_key_press(*key);
                for (held, modifier) in modifiers {
                    if held {
                        state.on_key_release(modifier);
                    }
                }
            }
            ScriptEvent::Undo => {
                state.undo();
            }
            ScriptEvent::Redo => {
                state.redo();
            }
        }
    }
}

/// Replays every event in order.
pub fn replay(events: &[ScriptEvent], state: &mut InputState) {
    for event in events {
        event.apply(state);
    }
}
