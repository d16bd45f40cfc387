//! Pseudo-legal move generation.
//!
//! Moves obey each piece's geometry and the occupancy of the board, but a move
//! that leaves the mover's own king in check is still generated. Castling is the
//! one exception: it requires the king's path to be free of attack.

mod en_passant;
mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::trace;

use crate::board::Board;
use crate::chess_move::Move;
use crate::game::Game;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub use self::en_passant::en_passant_target;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{gen_bishop, gen_queen, gen_rook};

/// Initial capacity of a [`MoveList`]; more than most positions need.
const DEFAULT_CAPACITY: usize = 100;

/// Generated moves, in generation order.
///
/// Backed by a `Vec`, so it grows by doubling if a position exceeds the initial capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Append a move.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Iterate over the moves in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Consume the list, returning the underlying vector.
    pub fn into_vec(self) -> Vec<Move> {
        self.moves
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

/// Generate all pseudo-legal moves for the side to move.
///
/// Squares are scanned a1..h1, a2..h2, ..., a8..h8, and each piece's moves are
/// appended in a fixed per-kind order, so the same game always yields the same list.
pub fn generate_moves(game: &Game) -> MoveList {
    let mut list = MoveList::new();
    let us = game.side_to_move();

    for (from, piece) in game.board().pieces() {
        if piece.color() != us {
            continue;
        }
        match piece.kind() {
            PieceKind::Pawn => gen_pawn(game, from, piece, &mut list),
            PieceKind::Knight => gen_knight(game.board(), from, piece, &mut list),
            PieceKind::Bishop => gen_bishop(game.board(), from, piece, &mut list),
            PieceKind::Rook => gen_rook(game.board(), from, piece, &mut list),
            PieceKind::Queen => gen_queen(game.board(), from, piece, &mut list),
            PieceKind::King => gen_king(game, from, piece, &mut list),
        }
    }

    trace!(side = %us, plies = game.history().len(), moves = list.len(), "generated moves");
    list
}

/// Push a move to `to` if it is empty or holds an opposing piece.
///
/// Returns `true` if `to` was empty, i.e. a sliding piece may continue past it.
#[inline]
fn push_unless_own(board: &Board, piece: Piece, from: Square, to: Square, list: &mut MoveList) -> bool {
    match board.piece_at(to) {
        None => {
            list.push(Move::new(piece, from, to));
            true
        }
        Some(other) => {
            if other.color() != piece.color() {
                list.push(Move::new(piece, from, to));
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::castle_rights::CastleSide;
    use crate::chess_move::MoveKind;
    use crate::history::History;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn starting_position_20_moves() {
        let game = Game::new();
        let moves = generate_moves(&game);
        assert_eq!(
            moves.len(),
            20,
            "starting position should have 20 moves, got {}",
            moves.len()
        );
        let pawn_moves = moves.iter().filter(|m| m.piece().kind() == PieceKind::Pawn).count();
        let knight_moves = moves.iter().filter(|m| m.piece().kind() == PieceKind::Knight).count();
        assert_eq!(pawn_moves, 16);
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn starting_position_black_to_move() {
        let history: History = [Move::new(Piece::WHITE_KNIGHT, sq("b1"), sq("c3"))]
            .into_iter()
            .collect();
        let mut board = Board::starting_position();
        board.clear(sq("b1"));
        board.set(sq("c3"), Piece::WHITE_KNIGHT);
        let game = Game::from_parts(board, history);

        let moves = generate_moves(&game);
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|m| m.piece().color() == crate::color::Color::Black));
    }

    #[test]
    fn scan_order_is_row_major() {
        let moves = generate_moves(&Game::new());
        let froms: Vec<_> = moves.iter().map(|m| m.from()).collect();
        assert!(froms.windows(2).all(|w| w[0] <= w[1]), "moves out of scan order: {froms:?}");
        // b1 knight first: a3 then c3; then the g1 knight; then pawns a2..h2.
        assert_eq!(moves[0], Move::new(Piece::WHITE_KNIGHT, sq("b1"), sq("a3")));
        assert_eq!(moves[1], Move::new(Piece::WHITE_KNIGHT, sq("b1"), sq("c3")));
        assert_eq!(moves[4], Move::new(Piece::WHITE_PAWN, sq("a2"), sq("a3")));
        assert_eq!(moves[5], Move::new(Piece::WHITE_PAWN, sq("a2"), sq("a4")));
    }

    #[test]
    fn generation_is_idempotent() {
        let game = Game::new();
        let first = generate_moves(&game);
        let second = generate_moves(&game);
        assert_eq!(first, second);
        assert_eq!(game, Game::new(), "generation must not touch the game");
    }

    #[test]
    fn only_pieces_of_side_to_move() {
        let mut board = Board::empty();
        board.set(sq("e1"), Piece::WHITE_KING);
        board.set(sq("e8"), Piece::BLACK_KING);
        board.set(sq("d4"), Piece::BLACK_QUEEN);
        let game = Game::from_parts(board, History::new());
        let moves = generate_moves(&game);
        assert!(moves.iter().all(|m| m.piece() == Piece::WHITE_KING));
    }

    #[test]
    fn king_may_step_into_check() {
        // Pseudo-legal: nothing filters the king walking onto an attacked square.
        let mut board = Board::empty();
        board.set(sq("e1"), Piece::WHITE_KING);
        board.set(sq("d8"), Piece::BLACK_ROOK);
        board.set(sq("h8"), Piece::BLACK_KING);
        let game = Game::from_parts(board, History::new());
        let moves = generate_moves(&game);
        assert!(moves.iter().any(|m| m.to() == sq("d1")));
        assert!(moves.iter().any(|m| m.to() == sq("d2")));
        assert!(moves.iter().all(|m| m.kind() == MoveKind::Normal));
        assert!(!moves.iter().any(|m| m.kind() == MoveKind::Castle(CastleSide::KingSide)));
    }

    #[test]
    fn move_list_grows_past_initial_capacity() {
        let mut list = MoveList::new();
        let mv = Move::new(Piece::WHITE_ROOK, sq("a1"), sq("a2"));
        for _ in 0..(DEFAULT_CAPACITY * 3) {
            list.push(mv);
        }
        assert_eq!(list.len(), DEFAULT_CAPACITY * 3);
        assert!(!list.is_empty());
        assert_eq!(list.into_vec().len(), DEFAULT_CAPACITY * 3);
    }
}
