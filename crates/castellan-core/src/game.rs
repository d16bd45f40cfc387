//! A game snapshot: the board together with the moves that led to it.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::history::History;

/// Board and history, owned by the caller.
///
/// Move generation borrows a `Game` and never changes it. New snapshots come
/// from [`Game::make_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: History,
}

impl Game {
    /// Return the starting position with no moves played.
    pub fn new() -> Game {
        Game {
            board: Board::starting_position(),
            history: History::new(),
        }
    }

    /// Build a game from an arbitrary board and history.
    ///
    /// The board is expected to hold exactly one king per side (see
    /// [`Board::validate`]); generation on anything else is unspecified.
    pub fn from_parts(board: Board, history: History) -> Game {
        Game { board, history }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Return the side to move, derived from the history length.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.history.side_to_move()
    }

    /// Return `color`'s castling rights, derived from the history.
    pub fn castle_rights(&self, color: Color) -> CastleRights {
        CastleRights::derive(&self.history, color)
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut Board, &mut History) {
        (&mut self.board, &mut self.history)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
