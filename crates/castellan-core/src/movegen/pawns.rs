//! Pawn move generation.

use crate::chess_move::{Move, PromotionPiece};
use crate::game::Game;
use crate::piece::Piece;
use crate::square::Square;

use super::MoveList;
use super::en_passant::en_passant_target;

/// Generate pawn moves: pushes, captures, and en passant.
pub(super) fn gen_pawn(game: &Game, from: Square, pawn: Piece, list: &mut MoveList) {
    let board = game.board();
    let us = pawn.color();
    let forward = us.forward();

    // --- Pushes ---
    match from.offset(forward, 0) {
        Some(one) if board.is_empty(one) => {
            push_or_promote(pawn, from, one, list);

            if from.row() == us.pawn_row() {
                match one.offset(forward, 0) {
                    Some(two) if board.is_empty(two) => list.push(Move::new(pawn, from, two)),
                    _ => {}
                }
            }
        }
        _ => {}
    }

    // --- Captures ---
    for d_col in [-1, 1] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if board.color_on(to) == Some(us.opposite()) {
            push_or_promote(pawn, from, to, list);
        }
    }

    // --- En passant ---
    if let Some(to) = en_passant_target(game.history(), from, us) {
        list.push(Move::new_en_passant(pawn, from, to));
    }
}

/// Push a pawn move, fanning out into one move per promotion piece on the far rank.
fn push_or_promote(pawn: Piece, from: Square, to: Square, list: &mut MoveList) {
    if to.row() == pawn.color().promotion_row() {
        for promo in PromotionPiece::ALL {
            list.push(Move::new_promotion(pawn, from, to, promo));
        }
    } else {
        list.push(Move::new(pawn, from, to));
    }
}
