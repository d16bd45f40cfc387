//! Core chess types: board representation, pseudo-legal move generation, and game rules.

mod attacks;
mod board;
mod castle_rights;
mod cell;
mod chess_move;
mod color;
mod error;
mod game;
mod history;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod square;

pub use attacks::is_square_attacked;
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide, KING_HOME_COL};
pub use cell::Cell;
pub use chess_move::{Move, MoveKind, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, MoveError, SquareParseError};
pub use game::Game;
pub use history::History;
pub use movegen::{MoveList, en_passant_target, generate_moves};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
