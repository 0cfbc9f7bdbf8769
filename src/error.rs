//! Error taxonomy of the rules engine.
//!
//! `MoveOutcome::Illegal` is not in here: an illegal move is an ordinary
//! answer, not a failure.

use derive_more::{Display, Error};

use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RulesError {
    /// Coordinate outside the grid. Always a caller bug.
    #[display("position {} is outside the {}x{} board", position, width, height)]
    OutOfBounds {
        position: Position,
        width: i32,
        height: i32,
    },

    /// Query or move from an empty cell. Recoverable.
    #[display("no piece at {}", _0)]
    NoPieceAtOrigin(#[error(not(source))] Position),

    /// Internal consistency broken. Indicates a bug in the engine.
    #[display("invariant violated: {}", _0)]
    InvariantViolation(#[error(not(source))] String),

    /// Board too small to hold the starting layout.
    #[display("invalid board dimensions {}x{}", width, height)]
    InvalidDimensions { width: i32, height: i32 },
}

impl RulesError {
    /// True for errors a caller can recover from by ignoring the request.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RulesError::NoPieceAtOrigin(_))
    }
}
