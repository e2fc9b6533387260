//! Keyboard and character bindings.
//!
//! Translates crossterm key events into calculator actions. The same
//! character table drives `--keys` replay, so every binding here behaves
//! identically in both modes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::calculator::{Action, Operator};

/// What a key press asks the event loop to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// Feed an action to the input controller.
    Input(Action),
    /// Copy the current result to the clipboard.
    Copy,
    /// Leave the application.
    Quit,
}

/// Translate a key event. Unbound keys return `None` and are ignored.
pub fn map_key(key: KeyEvent) -> Option<KeyCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyCommand::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(KeyCommand::Input(Action::Equals)),
        KeyCode::Delete => Some(KeyCommand::Input(Action::Clear)),
        KeyCode::Esc => Some(KeyCommand::Quit),
        KeyCode::Char('q') => Some(KeyCommand::Quit),
        KeyCode::Char('y') => Some(KeyCommand::Copy),
        KeyCode::Char(c) => action_for_char(c).map(KeyCommand::Input),
        _ => None,
    }
}

/// The character table shared by the TUI and `--keys` replay.
///
/// `n` toggles the sign because `-` is taken by the subtraction operator.
pub fn action_for_char(c: char) -> Option<Action> {
    match c {
        '0'..='9' => Some(Action::Digit(c as u8 - b'0')),
        '.' | ',' => Some(Action::Decimal),
        'n' => Some(Action::ToggleSign),
        '=' => Some(Action::Equals),
        'c' => Some(Action::Clear),
        _ => Operator::from_symbol(c).map(Action::Operator),
    }
}

/// Expand a replay string into actions, skipping characters with no binding.
pub fn actions_from_keys(keys: &str) -> Vec<Action> {
    keys.chars().filter_map(action_for_char).collect()
}
