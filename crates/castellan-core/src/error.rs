//! Error types for square parsing, board validation, and move application.

use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// Errors from parsing an algebraic square name such as `"e4"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareParseError {
    /// The input is not exactly two characters long.
    #[error("expected 2 characters, found {found}")]
    BadLength {
        /// Length of the input in bytes.
        found: usize,
    },
    /// The first character is not a file letter `a`-`h`.
    #[error("invalid file: '{file}'")]
    BadFile { file: char },
    /// The second character is not a rank digit `1`-`8`.
    #[error("invalid rank: '{rank}'")]
    BadRank { rank: char },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: u32,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawn found on back rank at {square}")]
    PawnsOnBackRank { square: Square },
}

/// Errors from applying a [`Move`](crate::chess_move::Move) to a [`Game`](crate::game::Game).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// There is no piece on the move's source square.
    #[error("no piece on {square}")]
    EmptySource { square: Square },
    /// The source square holds a different piece than the move claims.
    #[error("expected {expected:?} on {square}, found {found:?}")]
    PieceMismatch {
        square: Square,
        expected: Piece,
        found: Piece,
    },
    /// The moving piece does not belong to the side to move.
    #[error("{mover} cannot move while {to_move} is to move")]
    WrongSide { mover: Color, to_move: Color },
}
