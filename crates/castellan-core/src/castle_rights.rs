//! Castling rights, derived from the move history.

use std::fmt;

use crate::color::Color;
use crate::history::History;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, in the order castling moves are generated.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column of this side's rook at the start of the game.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_dest_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Column the rook lands on: the square the king passes over.
    #[inline]
    pub const fn rook_dest_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Home square of `color`'s rook on this side.
    #[inline]
    pub const fn rook_home(self, color: Color) -> Square {
        Square::at(color.back_row(), self.rook_col())
    }
}

/// Column both kings start on.
pub const KING_HOME_COL: u8 = 4;

/// Castling rights encoded as a 4-bit field: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);

    /// White king-side castling.
    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    /// White queen-side castling.
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    /// Black king-side castling.
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    /// Black queen-side castling.
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    /// Both white castling rights.
    pub const WHITE_BOTH: CastleRights = CastleRights(0b0011);
    /// Both black castling rights.
    pub const BLACK_BOTH: CastleRights = CastleRights(0b1100);

    /// Derive `color`'s castling rights from the moves played so far.
    ///
    /// Any king move by `color` (castling included) revokes both sides. A rook
    /// move from one of `color`'s corner squares revokes that side. Nothing is
    /// ever restored, so the scan stops once no rights are left.
    pub fn derive(history: &History, color: Color) -> CastleRights {
        let mut rights = Self::both(color);
        for mv in history.iter().filter(|mv| mv.piece().color() == color) {
            match mv.piece().kind() {
                PieceKind::King => return CastleRights::NONE,
                PieceKind::Rook => {
                    for side in CastleSide::ALL {
                        if mv.from() == side.rook_home(color) {
                            rights = rights.remove(Self::flag(color, side));
                        }
                    }
                }
                _ => {}
            }
            if rights.is_empty() {
                break;
            }
        }
        rights
    }

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Return new rights with all bits from `other` removed.
    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Check whether a specific color and side can castle.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::flag(color, side))
    }

    /// Return both rights for `color`.
    #[inline]
    pub const fn both(color: Color) -> CastleRights {
        match color {
            Color::White => Self::WHITE_BOTH,
            Color::Black => Self::BLACK_BOTH,
        }
    }

    /// Return the single-bit flag for a color and side.
    #[inline]
    const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }
}

impl fmt::Display for CastleRights {
    /// Letters `KQkq` for the rights held, or `-` for none.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let letters = [
            (Self::WHITE_KING, 'K'),
            (Self::WHITE_QUEEN, 'Q'),
            (Self::BLACK_KING, 'k'),
            (Self::BLACK_QUEEN, 'q'),
        ];
        for (flag, letter) in letters {
            if self.contains(flag) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleRights, CastleSide, KING_HOME_COL};
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::history::History;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn history(moves: &[Move]) -> History {
        moves.iter().copied().collect()
    }

    #[test]
    fn remove_clears_only_named_bits() {
        let rights = CastleRights::WHITE_BOTH.remove(CastleRights::WHITE_KING);
        assert!(!rights.has(Color::White, CastleSide::KingSide));
        assert!(rights.has(Color::White, CastleSide::QueenSide));
        assert!(!rights.has(Color::Black, CastleSide::QueenSide));
        assert!(rights.contains(CastleRights::WHITE_QUEEN));
    }

    #[test]
    fn side_geometry() {
        assert_eq!(CastleSide::KingSide.rook_home(Color::White), sq("h1"));
        assert_eq!(CastleSide::QueenSide.rook_home(Color::Black), sq("a8"));
        for side in CastleSide::ALL {
            assert_eq!(side.king_dest_col().abs_diff(KING_HOME_COL), 2);
            assert_eq!(side.rook_dest_col().abs_diff(KING_HOME_COL), 1);
        }
    }

    #[test]
    fn empty_history_keeps_all_rights() {
        let history = History::new();
        assert_eq!(CastleRights::derive(&history, Color::White), CastleRights::WHITE_BOTH);
        assert_eq!(CastleRights::derive(&history, Color::Black), CastleRights::BLACK_BOTH);
    }

    #[test]
    fn king_move_revokes_both() {
        let history = history(&[
            Move::new(Piece::WHITE_KING, sq("e1"), sq("e2")),
            Move::new(Piece::BLACK_PAWN, sq("e7"), sq("e6")),
            Move::new(Piece::WHITE_KING, sq("e2"), sq("e1")),
        ]);
        assert_eq!(CastleRights::derive(&history, Color::White), CastleRights::NONE);
        assert_eq!(CastleRights::derive(&history, Color::Black), CastleRights::BLACK_BOTH);
    }

    #[test]
    fn castling_revokes_both() {
        let history = history(&[
            Move::new(Piece::WHITE_PAWN, sq("e2"), sq("e4")),
            Move::new_castle(Piece::BLACK_KING, sq("e8"), sq("g8"), CastleSide::KingSide),
        ]);
        assert_eq!(CastleRights::derive(&history, Color::Black), CastleRights::NONE);
    }

    #[test]
    fn rook_move_revokes_one_side() {
        let history = history(&[
            Move::new(Piece::WHITE_ROOK, sq("h1"), sq("g1")),
            Move::new(Piece::BLACK_ROOK, sq("a8"), sq("b8")),
        ]);
        assert_eq!(CastleRights::derive(&history, Color::White), CastleRights::WHITE_QUEEN);
        assert_eq!(CastleRights::derive(&history, Color::Black), CastleRights::BLACK_KING);
    }

    #[test]
    fn revocation_is_permanent() {
        // The rook leaves and comes back: the right stays gone.
        let history = history(&[
            Move::new(Piece::WHITE_ROOK, sq("a1"), sq("a2")),
            Move::new(Piece::BLACK_PAWN, sq("h7"), sq("h6")),
            Move::new(Piece::WHITE_ROOK, sq("a2"), sq("a1")),
        ]);
        assert_eq!(CastleRights::derive(&history, Color::White), CastleRights::WHITE_KING);
    }

    #[test]
    fn rook_off_corner_keeps_rights() {
        let history = history(&[Move::new(Piece::WHITE_ROOK, sq("d1"), sq("d4"))]);
        assert_eq!(CastleRights::derive(&history, Color::White), CastleRights::WHITE_BOTH);
    }

    #[test]
    fn opponent_moves_from_corner_are_ignored() {
        // A black rook capturing on h1 is not a white rook move.
        let history = history(&[
            Move::new(Piece::WHITE_PAWN, sq("a2"), sq("a3")),
            Move::new(Piece::BLACK_ROOK, sq("h8"), sq("h1")),
        ]);
        assert_eq!(CastleRights::derive(&history, Color::White), CastleRights::WHITE_BOTH);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", CastleRights::WHITE_BOTH), "KQ");
        assert_eq!(format!("{}", CastleRights::BLACK_KING), "k");
        assert_eq!(format!("{}", CastleRights::NONE), "-");
        assert_eq!(format!("{:?}", CastleRights::WHITE_QUEEN), "CastleRights(Q)");
    }
}
