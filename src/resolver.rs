//! Move classification. Never mutates the board, so a front-end can
//! preview or animate a move before committing it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, PieceId};
use crate::config::MoveRules;
use crate::error::RulesError;
use crate::movegen::legal_destinations;
use crate::position::Position;

/// Result of attempting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Destination not reachable. The caller reverts any speculative change.
    Illegal,
    /// Destination was empty.
    Relocate,
    /// Destination held `captured`, which leaves play.
    Capture { captured: PieceId },
}

impl MoveOutcome {
    pub fn is_legal(&self) -> bool {
        !matches!(self, MoveOutcome::Illegal)
    }
}

/// Classifies the move `origin -> destination`.
///
/// Captures are reported regardless of the occupant's side; whether landing
/// on an own piece is allowed is decided by `rules` during generation.
pub fn attempt_move(
    board: &Board,
    origin: Position,
    destination: Position,
    rules: MoveRules,
) -> Result<MoveOutcome, RulesError> {
    let destinations = legal_destinations(board, origin, rules)?;
    if !destinations.contains(&destination) {
        debug!(%origin, %destination, "illegal move");
        return Ok(MoveOutcome::Illegal);
    }

    let outcome = match board.cell_at(destination)? {
        Some(captured) => MoveOutcome::Capture { captured },
        None => MoveOutcome::Relocate,
    };
    debug!(%origin, %destination, ?outcome, "resolved move");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Side;

    #[test]
    fn test_relocate_and_capture() {
        let mut board = Board::new(8, 8, 9).unwrap();
        let a = board.spawn(Side::A, Position::new(2, 2)).unwrap();
        let b = board.spawn(Side::B, Position::new(4, 2)).unwrap();
        let rules = MoveRules::default();

        // Row 2 holds two pieces.
        assert_eq!(
            attempt_move(&board, Position::new(2, 2), Position::new(4, 2), rules).unwrap(),
            MoveOutcome::Capture { captured: b }
        );
        assert_eq!(
            attempt_move(&board, Position::new(2, 2), Position::new(0, 2), rules).unwrap(),
            MoveOutcome::Relocate
        );
        assert_eq!(
            attempt_move(&board, Position::new(2, 2), Position::new(3, 2), rules).unwrap(),
            MoveOutcome::Illegal
        );
        assert_eq!(board.cell_at(Position::new(2, 2)).unwrap(), Some(a));
    }

    #[test]
    fn test_capture_own_side_when_permitted() {
        let mut board = Board::new(8, 8, 9).unwrap();
        board.spawn(Side::A, Position::new(2, 2)).unwrap();
        let own = board.spawn(Side::A, Position::new(4, 2)).unwrap();

        let outcome =
            attempt_move(&board, Position::new(2, 2), Position::new(4, 2), MoveRules::default())
                .unwrap();
        assert_eq!(outcome, MoveOutcome::Capture { captured: own });

        let outcome =
            attempt_move(&board, Position::new(2, 2), Position::new(4, 2), MoveRules::standard())
                .unwrap();
        assert_eq!(outcome, MoveOutcome::Illegal);
    }

    #[test]
    fn test_off_board_destination_is_illegal() {
        let mut board = Board::new(8, 8, 9).unwrap();
        board.spawn(Side::B, Position::new(0, 3)).unwrap();
        let outcome =
            attempt_move(&board, Position::new(0, 3), Position::new(-1, 3), MoveRules::default())
                .unwrap();
        assert!(!outcome.is_legal());
    }
}
