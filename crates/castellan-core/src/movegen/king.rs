//! King move and castling generation.

use crate::attacks::{KING_OFFSETS, is_square_attacked, leaps};
use crate::board::Board;
use crate::castle_rights::{CastleSide, KING_HOME_COL};
use crate::chess_move::Move;
use crate::game::Game;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::{MoveList, push_unless_own};

/// Generate king steps, then king-side and queen-side castling.
///
/// Steps onto attacked squares are not filtered out.
pub(super) fn gen_king(game: &Game, from: Square, king: Piece, list: &mut MoveList) {
    let board = game.board();
    for to in leaps(from, &KING_OFFSETS) {
        push_unless_own(board, king, from, to, list);
    }

    let us = king.color();
    let rights = game.castle_rights(us);
    for side in CastleSide::ALL.into_iter().filter(|&side| rights.has(us, side)) {
        if let Some(to) = castle_destination(board, from, king, side) {
            list.push(Move::new_castle(king, from, to, side));
        }
    }
}

/// Return where the king lands if the board permits castling toward `side`.
///
/// The king and rook must stand on their home squares, every square between
/// them must be empty, and none of the squares the king starts on, crosses, or
/// lands on may be attacked by the opponent.
fn castle_destination(board: &Board, from: Square, king: Piece, side: CastleSide) -> Option<Square> {
    let us = king.color();
    let row = us.back_row();
    if from != Square::at(row, KING_HOME_COL) {
        return None;
    }

    let rook_sq = side.rook_home(us);
    if board.piece_at(rook_sq) != Some(Piece::new(PieceKind::Rook, us)) {
        return None;
    }

    let (lo, hi) = if rook_sq.col() < KING_HOME_COL {
        (rook_sq.col() + 1, KING_HOME_COL)
    } else {
        (KING_HOME_COL + 1, rook_sq.col())
    };
    if !(lo..hi).all(|col| board.is_empty(Square::at(row, col))) {
        return None;
    }

    let dest_col = side.king_dest_col();
    let path = if dest_col < KING_HOME_COL {
        dest_col..=KING_HOME_COL
    } else {
        KING_HOME_COL..=dest_col
    };
    let them = us.opposite();
    if path.into_iter().any(|col| is_square_attacked(board, Square::at(row, col), them)) {
        return None;
    }

    Some(Square::at(row, dest_col))
}
