//! Move generation.
//!
//! A piece moves exactly as many cells along a line as there are pieces,
//! of either side, anywhere on that line.

use tracing::trace;

use crate::board::Board;
use crate::config::MoveRules;
use crate::error::RulesError;
use crate::position::{Line, Position};

/// Maximum number of destinations: two per line.
pub const MAX_DESTINATIONS: usize = 8;

/// Cells from `origin` (inclusive) to the board edge, stepping by `step`.
fn ray(
    board: &Board,
    origin: Position,
    step: (i32, i32),
) -> impl Iterator<Item = Position> + '_ {
    (0..)
        .map(move |n| origin.offset(step, n))
        .take_while(move |&pos| board.contains(pos))
}

/// Number of pieces on the whole `line` through `origin`.
///
/// Both half-rays include `origin`, so it is counted twice and subtracted
/// once. At an edge or corner one half-ray is just `origin` itself.
pub fn line_count(board: &Board, origin: Position, line: Line) -> Result<i32, RulesError> {
    let occupied = board.cell_at(origin)?.is_some() as usize;
    let (dx, dy) = line.step();
    let forward = board.count_occupied(ray(board, origin, (dx, dy)));
    let backward = board.count_occupied(ray(board, origin, (-dx, -dy)));
    Ok((forward + backward - occupied) as i32)
}

/// Destinations reachable from the occupied cell `origin`.
///
/// Out-of-bounds candidates are dropped. Duplicates are kept; callers only
/// test membership.
pub fn legal_destinations(
    board: &Board,
    origin: Position,
    rules: MoveRules,
) -> Result<Vec<Position>, RulesError> {
    let mover = board
        .piece_at(origin)?
        .ok_or(RulesError::NoPieceAtOrigin(origin))?
        .side();

    let mut destinations = Vec::with_capacity(MAX_DESTINATIONS);
    for line in Line::ALL {
        let n = line_count(board, origin, line)?;
        let step = line.step();
        for dir in [1, -1] {
            let target = origin.offset(step, dir * n);
            if !board.contains(target) {
                continue;
            }

            if rules.protect_own {
                if let Some(occupant) = board.piece_at(target)? {
                    if occupant.side() == mover {
                        continue;
                    }
                }
            }

            if rules.block_paths {
                let between = (1..n).map(|i| origin.offset(step, dir * i));
                let mut blocked = false;
                for pos in between {
                    if let Some(p) = board.piece_at(pos)? {
                        if p.side() != mover {
                            blocked = true;
                            break;
                        }
                    }
                }
                if blocked {
                    continue;
                }
            }

            destinations.push(target);
        }
    }

    trace!(%origin, ?destinations, "generated destinations");
    Ok(destinations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Side;

    fn board_with(pieces: &[(i32, i32, Side)]) -> Board {
        let mut board = Board::new(8, 8, 3).unwrap();
        for &(x, y, side) in pieces {
            board.spawn(side, Position::new(x, y)).unwrap();
        }
        board
    }

    #[test]
    fn test_isolated_piece_moves_one_on_every_line() {
        let board = board_with(&[(3, 3, Side::A)]);
        for line in Line::ALL {
            assert_eq!(line_count(&board, Position::new(3, 3), line).unwrap(), 1);
        }
        let moves =
            legal_destinations(&board, Position::new(3, 3), MoveRules::default()).unwrap();
        assert_eq!(moves.len(), 8);
        for (x, y) in [(4, 3), (2, 3), (3, 4), (3, 2), (4, 4), (2, 2), (4, 2), (2, 4)] {
            assert!(moves.contains(&Position::new(x, y)));
        }
    }

    #[test]
    fn test_corner_diagonal_count() {
        // Origin at a corner: one half-ray of each diagonal is origin alone.
        let board = board_with(&[(0, 0, Side::A), (2, 2, Side::B), (7, 7, Side::B)]);
        assert_eq!(line_count(&board, Position::new(0, 0), Line::Diagonal).unwrap(), 3);
        let anti = line_count(&board, Position::new(0, 0), Line::AntiDiagonal).unwrap();
        assert_eq!(anti, 1);

        let moves =
            legal_destinations(&board, Position::new(0, 0), MoveRules::default()).unwrap();
        assert!(moves.contains(&Position::new(3, 3)));
        assert!(moves.iter().all(|&p| board.contains(p)));
    }

    #[test]
    fn test_edge_anti_diagonal() {
        let board = board_with(&[(7, 3, Side::B), (6, 4, Side::A), (4, 6, Side::A)]);
        let anti = line_count(&board, Position::new(7, 3), Line::AntiDiagonal).unwrap();
        assert_eq!(anti, 3);
        let moves =
            legal_destinations(&board, Position::new(7, 3), MoveRules::default()).unwrap();
        assert!(moves.contains(&Position::new(4, 6)));
        // (10, 0) is off the board.
        assert!(!moves.contains(&Position::new(10, 0)));
    }

    #[test]
    fn test_empty_origin() {
        let board = board_with(&[]);
        assert_eq!(
            legal_destinations(&board, Position::new(1, 1), MoveRules::default()),
            Err(RulesError::NoPieceAtOrigin(Position::new(1, 1)))
        );
    }

    #[test]
    fn test_jumps_over_and_lands_on_anything_by_default() {
        let board = board_with(&[(0, 0, Side::A), (1, 0, Side::B), (2, 0, Side::A)]);
        let moves =
            legal_destinations(&board, Position::new(0, 0), MoveRules::default()).unwrap();
        // n = 3 horizontally, jumping the enemy at (1, 0).
        assert!(moves.contains(&Position::new(3, 0)));

        let board = board_with(&[(0, 0, Side::A), (2, 0, Side::A)]);
        let moves =
            legal_destinations(&board, Position::new(0, 0), MoveRules::default()).unwrap();
        assert!(moves.contains(&Position::new(2, 0)));
    }

    #[test]
    fn test_block_paths() {
        let rules = MoveRules {
            block_paths: true,
            protect_own: false,
        };
        let board = board_with(&[(0, 0, Side::A), (1, 0, Side::B), (2, 0, Side::A)]);
        let moves = legal_destinations(&board, Position::new(0, 0), rules).unwrap();
        assert!(!moves.contains(&Position::new(3, 0)));

        // Own pieces do not block.
        let board = board_with(&[(0, 0, Side::A), (1, 0, Side::A), (2, 0, Side::A)]);
        let moves = legal_destinations(&board, Position::new(0, 0), rules).unwrap();
        assert!(moves.contains(&Position::new(3, 0)));
    }

    #[test]
    fn test_protect_own() {
        let rules = MoveRules {
            block_paths: false,
            protect_own: true,
        };
        let board = board_with(&[(0, 0, Side::A), (2, 0, Side::A)]);
        let moves = legal_destinations(&board, Position::new(0, 0), rules).unwrap();
        assert!(!moves.contains(&Position::new(2, 0)));

        let board = board_with(&[(0, 0, Side::A), (2, 0, Side::B)]);
        let moves = legal_destinations(&board, Position::new(0, 0), rules).unwrap();
        assert!(moves.contains(&Position::new(2, 0)));
    }
}
