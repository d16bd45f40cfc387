//! Sliding piece (bishop, rook, queen) move generation.

use crate::attacks::{DIAGONALS, ORTHOGONALS, ray};
use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

use super::{MoveList, push_unless_own};

pub(super) fn gen_bishop(board: &Board, from: Square, bishop: Piece, list: &mut MoveList) {
    gen_rays(board, from, bishop, &DIAGONALS, list);
}

pub(super) fn gen_rook(board: &Board, from: Square, rook: Piece, list: &mut MoveList) {
    gen_rays(board, from, rook, &ORTHOGONALS, list);
}

/// Queen moves: the bishop's rays followed by the rook's.
pub(super) fn gen_queen(board: &Board, from: Square, queen: Piece, list: &mut MoveList) {
    gen_rays(board, from, queen, &DIAGONALS, list);
    gen_rays(board, from, queen, &ORTHOGONALS, list);
}

/// Walk each ray outward, stopping at the first occupied square.
///
/// The blocking square is included only if it holds an enemy piece.
fn gen_rays(board: &Board, from: Square, piece: Piece, dirs: &[(i8, i8)], list: &mut MoveList) {
    for &dir in dirs {
        for to in ray(from, dir) {
            if !push_unless_own(board, piece, from, to, list) {
                break;
            }
        }
    }
}
