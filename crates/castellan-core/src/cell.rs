//! Board cells.

use crate::color::Color;
use crate::piece::Piece;

/// The contents of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    /// Return the piece in this cell, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Return `true` if the cell holds a piece of `color`.
    #[inline]
    pub const fn holds(self, color: Color) -> bool {
        match self {
            Cell::Empty => false,
            Cell::Occupied(piece) => piece.color() as u8 == color as u8,
        }
    }
}

impl From<Option<Piece>> for Cell {
    fn from(piece: Option<Piece>) -> Cell {
        match piece {
            Some(piece) => Cell::Occupied(piece),
            None => Cell::Empty,
        }
    }
}
