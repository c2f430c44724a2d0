//! Collision checks for candidate placements.
//!
//! A placement collides when any occupied cell is left of column 0, right of the
//! last column, below the floor, or on a locked cell. Cells above the top row are
//! allowed so pieces can enter from above the visible board.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{BOARD_COLUMNS, BOARD_ROWS};

/// Does `piece` overlap a wall, the floor or a locked cell?
pub fn collides(piece: &Piece, board: &Board) -> bool {
    piece.board_cells().any(|(x, y)| {
        if x < 0 || x >= BOARD_COLUMNS as i8 || y < 0 {
            return true;
        }
        y < BOARD_ROWS as i8 && board.is_occupied(x, y)
    })
}

/// At least one occupied cell is at or above the floor.
///
/// A piece whose whole body is below row 0 must not be locked.
pub fn rests_in_view(piece: &Piece) -> bool {
    piece.board_cells().any(|(_, y)| y >= 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_walls_and_floor_collide() {
        let board = Board::new();
        let o = Piece::spawn(PieceKind::O);

        assert!(collides(&o.at(-1, 5), &board));
        assert!(collides(&o.at(9, 5), &board));
        assert!(collides(&o.at(3, -1), &board));
        assert!(!collides(&o.at(0, 0), &board));
        assert!(!collides(&o.at(8, 0), &board));
    }

    #[test]
    fn test_above_top_is_open() {
        let board = Board::new();
        let i = Piece::spawn(PieceKind::I).shifted(0, 5);
        assert!(i.y >= BOARD_ROWS as i8);
        assert!(!collides(&i, &board));
    }

    #[test]
    fn test_locked_cell_collides() {
        let mut board = Board::new();
        board.set(5, 3, Some(PieceKind::Z));
        let o = Piece::spawn(PieceKind::O);
        assert!(collides(&o.at(4, 2), &board));
        assert!(!collides(&o.at(6, 2), &board));
    }

    #[test]
    fn test_rests_in_view() {
        let i = Piece::spawn(PieceKind::I);
        assert!(rests_in_view(&i.at(0, 0)));
        assert!(!rests_in_view(&i.at(0, -1)));
    }
}
