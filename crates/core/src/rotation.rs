//! Rotation with a fixed five-position wall kick search.
//!
//! The rotated shape is tried at the current anchor, then one column right, one
//! column left, one row down and one row up. The first free placement wins. This
//! is a single kick table shared by every kind, not SRS.

use log::debug;

use crate::board::Board;
use crate::collision::collides;
use crate::piece::Piece;

/// Anchor offsets `(dx, dy)` tried in order.
pub const KICK_OFFSETS: [(i8, i8); 5] = [(0, 0), (1, 0), (-1, 0), (0, -1), (0, 1)];

/// Compute the rotated placement, or `None` when every kick collides.
pub fn try_rotate(piece: &Piece, board: &Board) -> Option<Piece> {
    let rotated = Piece {
        shape: piece.shape.rotated(),
        ..*piece
    };

    KICK_OFFSETS
        .iter()
        .map(|&(dx, dy)| rotated.shifted(dx, dy))
        .find(|candidate| !collides(candidate, board))
}

/// Rotate in place. On failure the piece is left exactly as it was.
pub fn rotate(piece: &mut Piece, board: &Board) -> bool {
    match try_rotate(piece, board) {
        Some(rotated) => {
            *piece = rotated;
            true
        }
        None => {
            debug!(
                "rotation of {} at ({}, {}) rejected: no free kick",
                piece.kind.as_str(),
                piece.x,
                piece.y
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_rotate_in_open_space_keeps_anchor() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::T).at(4, 5);
        assert!(rotate(&mut piece, &board));
        assert_eq!((piece.x, piece.y), (4, 5));
        assert_eq!(piece.shape.rows(), 3);
    }

    #[test]
    fn test_kick_prefers_right_over_up() {
        let mut board = Board::new();
        // Blocks the in-place rotation only; both +1 column and +1 row are free.
        board.set(0, 1, Some(PieceKind::Z));
        let mut piece = Piece::spawn(PieceKind::T).at(0, 0);

        assert!(rotate(&mut piece, &board));
        assert_eq!((piece.x, piece.y), (1, 0));
    }

    #[test]
    fn test_vertical_i_near_right_wall_kicks_left() {
        let board = Board::new();
        let vertical = Piece {
            shape: Piece::spawn(PieceKind::I).shape.rotated(),
            ..Piece::spawn(PieceKind::I)
        };
        // Horizontal I at x=7 would poke out to column 10; x+1 worse; x-1 fits.
        let mut piece = vertical.at(7, 5);
        assert!(rotate(&mut piece, &board));
        assert_eq!((piece.x, piece.y), (6, 5));
        assert_eq!(piece.shape.cols(), 4);
    }

    #[test]
    fn test_failed_rotation_leaves_piece_unchanged() {
        let mut board = Board::new();
        for y in 0..6 {
            board.fill_row(y, PieceKind::L, Some(5));
        }
        // Vertical I inside a one-wide well: every kick collides.
        let vertical = Piece {
            shape: Piece::spawn(PieceKind::I).shape.rotated(),
            ..Piece::spawn(PieceKind::I)
        };
        let mut piece = vertical.at(5, 1);
        assert!(!collides(&piece, &board));

        let before = piece;
        assert!(!rotate(&mut piece, &board));
        assert_eq!(piece, before);
    }
}
