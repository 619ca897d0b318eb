//! Keyboard mapping for the terminal front-end.

use crate::core::state_machine::Button;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Press(Button),
    /// Jolt the simulated accelerometer.
    Shake,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<InputAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputAction::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(InputAction::Press(Button::Up)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::Press(Button::Select)),
        KeyCode::Down | KeyCode::Char('j') => Some(InputAction::Press(Button::Down)),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(InputAction::Shake),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputAction::Quit),
        _ => None,
    }
}
