//! Rules engine for Lines of Action.
//!
//! A front-end builds a [`Game`], asks it for [`Game::legal_destinations`] to
//! highlight targets, and commits moves with [`Game::request_move`], which
//! answers with a [`MoveOutcome`].

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod movegen;
pub mod pixel;
pub mod position;
pub mod resolver;
pub mod zobrist;

pub use board::{Board, Piece, PieceId};
pub use config::{GameConfig, MoveRules};
pub use error::RulesError;
pub use game::{Game, PieceMoves, new_game};
pub use pixel::TileGeometry;
pub use position::{Line, Position, Side};
pub use resolver::{MoveOutcome, attempt_move};
