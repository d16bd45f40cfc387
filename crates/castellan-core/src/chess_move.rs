//! Chess move representation.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
}

impl PromotionPiece {
    /// All promotion pieces, in the order moves are generated.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }
}

/// The category of a chess move.
///
/// Keeping these mutually exclusive in one enum means a move can never be
/// both en passant and castling, or castle to both sides at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A quiet move or an ordinary capture.
    Normal,
    /// A pawn reaching the far rank.
    Promotion(PromotionPiece),
    /// A pawn capturing the pawn that just passed it.
    EnPassant,
    /// The king's two-square castling step; the rook's move is implied.
    Castle(CastleSide),
}

/// A move: the moving piece, where it goes, and what kind of move it is.
///
/// The captured piece is not recorded. It can be read off the board at
/// [`to`](Move::to) before the move is applied, or behind it for en passant.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    piece: Piece,
    from: Square,
    to: Square,
    kind: MoveKind,
}

impl Move {
    /// Create a normal (quiet or capture) move.
    pub const fn new(piece: Piece, from: Square, to: Square) -> Move {
        Move {
            piece,
            from,
            to,
            kind: MoveKind::Normal,
        }
    }

    /// Create a promotion move.
    pub const fn new_promotion(piece: Piece, from: Square, to: Square, promo: PromotionPiece) -> Move {
        Move {
            piece,
            from,
            to,
            kind: MoveKind::Promotion(promo),
        }
    }

    /// Create an en passant capture. `to` is the empty square the pawn lands on.
    pub const fn new_en_passant(piece: Piece, from: Square, to: Square) -> Move {
        Move {
            piece,
            from,
            to,
            kind: MoveKind::EnPassant,
        }
    }

    /// Create a castling move using the king's source and destination squares.
    pub const fn new_castle(king: Piece, from: Square, to: Square, side: CastleSide) -> Move {
        Move {
            piece: king,
            from,
            to,
            kind: MoveKind::Castle(side),
        }
    }

    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Return the piece kind a pawn promotes to, if this is a promotion.
    pub const fn promotion(self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion(promo) => Some(promo.to_piece_kind()),
            _ => None,
        }
    }

    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    pub const fn is_king_side_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castle(CastleSide::KingSide))
    }

    pub const fn is_queen_side_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castle(CastleSide::QueenSide))
    }

    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    /// Return `true` if a pawn moved two rows.
    pub const fn is_double_push(self) -> bool {
        matches!(self.piece.kind(), PieceKind::Pawn) && self.from.row().abs_diff(self.to.row()) == 2
    }
}

impl fmt::Display for Move {
    /// Coordinate notation: `e2e4`, with the promotion letter appended (`e7e8q`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion() {
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({:?} {} kind={:?})", self.piece, self, self.kind)
    }
}
