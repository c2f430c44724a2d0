//! Terminal input module.
//!
//! Maps `crossterm` key events onto core [`Command`]s plus the few actions the
//! host handles itself (pause, restart, quit). Moves and rotation are
//! edge-triggered, so key auto-repeat is left to the host to ignore or accept.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, handle_key_release, should_quit};

use crate::types::Command;

/// Result of mapping one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Forward to the simulation core.
    Game(Command),
    /// Stop or resume calling `tick` (the core has no pause state).
    TogglePause,
    /// Start a new game.
    Restart,
}
