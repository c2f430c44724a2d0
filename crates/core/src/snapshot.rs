//! Read-only view of a game for renderers and other observers.

use crate::board::CellGrid;
use crate::piece::Piece;
use crate::types::{PieceKind, BOARD_COLUMNS, BOARD_ROWS};

/// Copy of everything a front-end needs to draw one frame.
///
/// `board` is indexed `[y][x]` with row 0 at the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: CellGrid,
    pub active: Option<Piece>,
    pub ghost: Option<Piece>,
    pub next: Piece,
    pub score: u32,
    pub lines: u32,
    pub pieces_placed: u32,
    pub fast_drop: bool,
    pub game_over: bool,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Kind stored at `(x, y)`, if any.
    pub fn cell(&self, x: usize, y: usize) -> Option<PieceKind> {
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .and_then(|&v| PieceKind::from_index(v))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
            active: None,
            ghost: None,
            next: Piece::spawn(PieceKind::I),
            score: 0,
            lines: 0,
            pieces_placed: 0,
            fast_drop: false,
            game_over: false,
            episode_id: 0,
        }
    }
}
