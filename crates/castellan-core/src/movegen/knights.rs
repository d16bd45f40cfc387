//! Knight move generation.

use crate::attacks::{KNIGHT_OFFSETS, leaps};
use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

use super::{MoveList, push_unless_own};

/// Generate knight moves onto empty squares and enemy pieces.
pub(super) fn gen_knight(board: &Board, from: Square, knight: Piece, list: &mut MoveList) {
    for to in leaps(from, &KNIGHT_OFFSETS) {
        push_unless_own(board, knight, from, to, list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn knight_targets(board: &Board, from: &str) -> Vec<String> {
        let from = sq(from);
        let mut list = MoveList::new();
        gen_knight(board, from, board.piece_at(from).unwrap(), &mut list);
        list.iter().map(|m| m.to().to_string()).collect()
    }

    #[test]
    fn knight_in_center_has_8_moves() {
        let mut board = Board::empty();
        board.set(sq("e4"), Piece::WHITE_KNIGHT);
        assert_eq!(
            knight_targets(&board, "e4"),
            ["d2", "f2", "c3", "g3", "c5", "g5", "d6", "f6"]
        );
    }

    #[test]
    fn knight_in_corner_has_2_moves() {
        let mut board = Board::empty();
        board.set(sq("h8"), Piece::BLACK_KNIGHT);
        assert_eq!(knight_targets(&board, "h8"), ["g6", "f7"]);
    }

    #[test]
    fn own_pieces_block_enemies_capture() {
        let mut board = Board::empty();
        board.set(sq("b1"), Piece::WHITE_KNIGHT);
        board.set(sq("d2"), Piece::WHITE_PAWN);
        board.set(sq("c3"), Piece::BLACK_PAWN);
        assert_eq!(knight_targets(&board, "b1"), ["a3", "c3"]);
    }
}
