//! Board squares addressed by (row, col).

use std::fmt;
use std::str::FromStr;

use crate::error::SquareParseError;

/// A square on the chess board.
///
/// Row 0 is White's back rank and row 7 is Black's; col 0 is the a-file and
/// col 7 the h-file. The index is `row * 8 + col`, so iterating indices visits
/// rows in order and columns in order within a row.
///
/// Every `Square` is on the board: the constructors reject anything else.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row and column, returning `None` if either is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Create a square from a row and column known to be in range.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 8 or more.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Square {
        assert!(row < 8 && col < 8, "square coordinate out of range");
        Square(row * 8 + col)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Return the square `d_row` rows and `d_col` columns away, or `None` if that
    /// falls off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let (Some(row), Some(col)) = (
            (self.row() as i8).checked_add(d_row),
            (self.col() as i8).checked_add(d_col),
        ) else {
            return None;
        };
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Iterate over all 64 squares in scan order (a1, b1, ..., h1, a2, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    /// Parse algebraic square names such as `"e4"`.
    fn from_str(s: &str) -> Result<Square, SquareParseError> {
        let [file, rank] = s.as_bytes() else {
            return Err(SquareParseError::BadLength { found: s.len() });
        };
        if !(b'a'..=b'h').contains(file) {
            return Err(SquareParseError::BadFile { file: *file as char });
        }
        if !(b'1'..=b'8').contains(rank) {
            return Err(SquareParseError::BadRank { rank: *rank as char });
        }
        Ok(Square::at(rank - b'1', file - b'a'))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        write!(f, "{}{}", file, self.row() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
