//! Ghost projection: where the active piece would land.

use crate::board::Board;
use crate::collision::collides;
use crate::piece::Piece;

/// Copy of `active` dropped straight down to its landing row.
///
/// Always terminates: the floor collides once the piece passes row 0.
pub fn ghost_of(active: &Piece, board: &Board) -> Piece {
    let mut ghost = *active;
    while !collides(&ghost.shifted(0, -1), board) {
        ghost.y -= 1;
    }
    ghost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_ghost_on_empty_board_lands_on_floor() {
        let board = Board::new();
        let active = Piece::spawn(PieceKind::S);
        let ghost = ghost_of(&active, &board);
        assert_eq!(ghost.y, 0);
        assert_eq!(ghost.x, active.x);
        assert_eq!(ghost.shape, active.shape);
    }

    #[test]
    fn test_ghost_lands_on_stack() {
        let mut board = Board::new();
        for y in 0..4 {
            board.fill_row(y, PieceKind::O, Some(0));
        }
        let ghost = ghost_of(&Piece::spawn(PieceKind::O), &board);
        assert_eq!(ghost.y, 4);
    }

    #[test]
    fn test_grounded_piece_is_its_own_ghost() {
        let board = Board::new();
        let active = Piece::spawn(PieceKind::L).at(2, 0);
        assert_eq!(ghost_of(&active, &board), active);
    }
}
