//! En passant eligibility.

use crate::color::Color;
use crate::history::History;
use crate::square::Square;

/// Return the square a pawn of `us` on `from` may capture onto en passant, if any.
///
/// Only the most recent move counts: it must be an opposing pawn's two-square
/// advance that landed beside `from` on the same row. The capturing pawn moves
/// diagonally forward into the file of the pawn it takes.
pub fn en_passant_target(history: &History, from: Square, us: Color) -> Option<Square> {
    if from.row() != us.en_passant_row() {
        return None;
    }
    let prev = history.last()?;
    let them = us.opposite();

    let is_adjacent_double_push = prev.piece().color() == them
        && prev.is_double_push()
        && prev.to().row() == from.row()
        && prev.to().col().abs_diff(from.col()) == 1;
    if !is_adjacent_double_push {
        return None;
    }

    Square::new(from.row().wrapping_add_signed(us.forward()), prev.to().col())
}
