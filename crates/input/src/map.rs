//! Key mapping from terminal events to input actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;
use crate::InputAction;

/// Map a key press to an action.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    let action = match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => {
            InputAction::Game(Command::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => {
            InputAction::Game(Command::MoveRight)
        }
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W' | ' ') => {
            InputAction::Game(Command::Rotate)
        }
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => {
            InputAction::Game(Command::SetFastDrop(true))
        }
        KeyCode::Char('p' | 'P') | KeyCode::Esc => InputAction::TogglePause,
        KeyCode::Char('r' | 'R') => InputAction::Restart,
        _ => return None,
    };
    Some(action)
}

/// Map a key release. Only terminals with the keyboard enhancement protocol
/// report releases; elsewhere fast drop ends when the piece locks.
pub fn handle_key_release(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => {
            Some(InputAction::Game(Command::SetFastDrop(false)))
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
