//! Collision-checked translation of a piece.
//!
//! Rejected moves leave the piece untouched and report `false`; that is an
//! ordinary outcome, not an error.

use crate::board::Board;
use crate::collision::collides;
use crate::piece::Piece;

/// Horizontal move direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn dx(self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Translate by `(dx, dy)` if the destination is free.
pub fn try_shift(piece: &mut Piece, board: &Board, dx: i8, dy: i8) -> bool {
    let candidate = piece.shifted(dx, dy);
    if collides(&candidate, board) {
        return false;
    }
    *piece = candidate;
    true
}

/// One column left or right.
pub fn move_horizontal(piece: &mut Piece, board: &Board, direction: Direction) -> bool {
    try_shift(piece, board, direction.dx(), 0)
}

/// One row toward the floor.
pub fn move_down(piece: &mut Piece, board: &Board) -> bool {
    try_shift(piece, board, 0, -1)
}
