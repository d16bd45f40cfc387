//! Move application via copy-make.

use tracing::debug;

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::error::MoveError;
use crate::game::Game;
use crate::piece::Piece;
use crate::square::Square;

impl Game {
    /// Apply a move and return the resulting game. Copy-make: `self` is not modified.
    ///
    /// The move is trusted to be one the generator produced for this game; only
    /// the source square and the side to move are checked.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the source square is empty, holds a different
    /// piece than the move names, or the mover is not the side to move.
    pub fn make_move(&self, mv: Move) -> Result<Game, MoveError> {
        let from = mv.from();
        let to = mv.to();
        let to_move = self.side_to_move();

        let found = self.board().piece_at(from).ok_or_else(|| {
            debug!(%mv, "rejected move from empty square");
            MoveError::EmptySource { square: from }
        })?;
        if found != mv.piece() {
            debug!(%mv, ?found, "rejected move with mismatched piece");
            return Err(MoveError::PieceMismatch {
                square: from,
                expected: mv.piece(),
                found,
            });
        }
        if found.color() != to_move {
            debug!(%mv, side = %to_move, "rejected move out of turn");
            return Err(MoveError::WrongSide {
                mover: found.color(),
                to_move,
            });
        }

        let mut next = self.clone();
        let (board, history) = next.parts_mut();

        board.clear(from);
        match mv.kind() {
            MoveKind::Normal => board.set(to, found),
            MoveKind::Promotion(promo) => board.set(to, Piece::new(promo.to_piece_kind(), to_move)),
            MoveKind::EnPassant => {
                // The captured pawn sits beside the source, in the destination's column.
                board.clear(Square::at(from.row(), to.col()));
                board.set(to, found);
            }
            MoveKind::Castle(side) => {
                board.set(to, found);
                relocate_rook(board, side, to_move);
            }
        }
        history.push(mv);

        Ok(next)
    }
}

/// Move the castling rook from its corner to the square the king crossed.
fn relocate_rook(board: &mut Board, side: CastleSide, color: Color) {
    let home = side.rook_home(color);
    match board.clear(home) {
        Some(rook) => board.set(Square::at(color.back_row(), side.rook_dest_col()), rook),
        None => debug!(%home, "castled without a rook in the corner"),
    }
}
