//! Perft (performance test) for move generation correctness verification.
//!
//! Counts are over pseudo-legal moves, so they match the published legal
//! counts only while no side can be left in check, i.e. up to depth 3 from
//! the starting position.

use tracing::debug;

use crate::chess_move::Move;
use crate::game::Game;
use crate::movegen::generate_moves;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of generated moves without applying any of them.
pub fn perft(game: &Game, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(game);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .filter_map(|&mv| apply(game, mv))
        .map(|child| perft(&child, depth - 1))
        .sum()
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(move, node_count)` pairs sorted by coordinate notation.
pub fn divide(game: &Game, depth: usize) -> Vec<(String, u64)> {
    let moves = generate_moves(game);
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .filter_map(|&mv| {
            let child = apply(game, mv)?;
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            Some((mv.to_string(), count))
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

/// Apply a generated move. Generated moves always apply, so a failure is a generator bug.
fn apply(game: &Game, mv: Move) -> Option<Game> {
    match game.make_move(mv) {
        Ok(child) => Some(child),
        Err(err) => {
            debug!(%mv, %err, "generated move failed to apply");
            debug_assert!(false, "generated move {mv} failed to apply: {err}");
            None
        }
    }
}
