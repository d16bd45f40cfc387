//! Piece geometry and the square-attack query.

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// (row, col) steps of a knight.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// (row, col) steps of a king.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Ray directions of a bishop.
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Ray directions of a rook.
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Walk from `from` in direction `(d_row, d_col)` until the board edge.
///
/// The walk does not stop at pieces; callers decide what a blocker means.
pub(crate) fn ray(from: Square, (d_row, d_col): (i8, i8)) -> impl Iterator<Item = Square> {
    std::iter::successors(from.offset(d_row, d_col), move |sq| sq.offset(d_row, d_col))
}

/// Return the squares one leap away from `from`, for each offset that stays on the board.
pub(crate) fn leaps(from: Square, offsets: &[(i8, i8)]) -> impl Iterator<Item = Square> + '_ {
    offsets.iter().filter_map(move |&(d_row, d_col)| from.offset(d_row, d_col))
}

/// Return `true` if `target` is attacked by any piece of `by`.
///
/// Each pattern is cast outward from `target` and the candidate square is
/// inspected for an attacker of the matching kind. Sliders are blocked by the
/// first occupied square on each ray, whatever its color.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    let holds = |sq: Square, kinds: &[PieceKind]| {
        board
            .piece_at(sq)
            .is_some_and(|piece| piece.color() == by && kinds.contains(&piece.kind()))
    };

    // A pawn attacks diagonally forward, so its attackers stand one row behind the target.
    let pawn_row = -by.forward();
    if [-1, 1]
        .into_iter()
        .filter_map(|d_col| target.offset(pawn_row, d_col))
        .any(|sq| holds(sq, &[PieceKind::Pawn]))
    {
        return true;
    }

    if leaps(target, &KNIGHT_OFFSETS).any(|sq| holds(sq, &[PieceKind::Knight])) {
        return true;
    }

    let first_blocker = |dir| ray(target, dir).find(|&sq| !board.is_empty(sq));

    if DIAGONALS
        .into_iter()
        .filter_map(first_blocker)
        .any(|sq| holds(sq, &[PieceKind::Bishop, PieceKind::Queen]))
    {
        return true;
    }

    if ORTHOGONALS
        .into_iter()
        .filter_map(first_blocker)
        .any(|sq| holds(sq, &[PieceKind::Rook, PieceKind::Queen]))
    {
        return true;
    }

    leaps(target, &KING_OFFSETS).any(|sq| holds(sq, &[PieceKind::King]))
}

impl Board {
    /// Return `true` if `sq` is attacked by any piece of `by`.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        is_square_attacked(self, sq, by)
    }
}
