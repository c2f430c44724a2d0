//! Core game logic - pure, deterministic and testable
//!
//! This crate holds the simulation of a falling-block puzzle game. It has **no
//! dependencies** on rendering, input devices, audio or storage:
//!
//! - **Deterministic**: the same seed and the same calls give the same game
//! - **Allocation-free**: pieces are `Copy`, per-tick events use a fixed-capacity buffer
//! - **Single writer**: [`GameState`] owns all mutable state; the other modules are
//!   pure functions over borrowed values
//!
//! # Module Structure
//!
//! - [`piece`]: shape matrices, the seven base shapes, spawn anchor
//! - [`board`]: 10x20 grid of locked cells, row removal
//! - [`collision`]: placement checks against walls, floor and locked cells
//! - [`movement`]: collision-checked translation
//! - [`rotation`]: quarter turn with a fixed five-position wall kick search
//! - [`ghost`]: landing projection of the active piece
//! - [`rng`]: uniform random piece generation
//! - [`scoring`]: line clear points
//! - [`game_state`]: gravity and lock controller
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, Phase};
//! use blockfall_core::types::{Command, GameEvent};
//!
//! let mut game = GameState::new(12345);
//! game.apply(Command::MoveLeft);
//! game.apply(Command::Rotate);
//!
//! // Drive gravity until the first piece locks.
//! let mut placed = false;
//! while !placed {
//!     for event in game.tick(0.3) {
//!         if let GameEvent::PiecePlaced { .. } = event {
//!             placed = true;
//!         }
//!     }
//! }
//! assert_eq!(game.pieces_placed(), 1);
//! assert_eq!(game.phase(), Phase::Falling);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod ghost;
pub mod movement;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use game_state::{DropTiming, GameState, Phase, TickEvents};
pub use ghost::ghost_of;
pub use movement::Direction;
pub use piece::{Piece, Shape};
pub use rng::{PieceGenerator, SimpleRng};
pub use rotation::{try_rotate, KICK_OFFSETS};
pub use scoring::line_clear_score;
pub use snapshot::GameSnapshot;
