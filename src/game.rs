//! Game session: owns the board and is the only place it is mutated.
//! Not thread-safe; callers serialize requests (`&mut self` enforces it).

use std::fmt;
use std::io::{self, BufRead, Write};

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::board::{Board, PieceId};
use crate::config::{GameConfig, MoveRules};
use crate::error::RulesError;
use crate::movegen;
use crate::position::{Position, Side};
use crate::resolver::{self, MoveOutcome};

/// Smallest board whose starting layout holds at least one piece per side.
pub const MIN_SIZE: i32 = 3;

/// Every destination of one piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceMoves {
    pub piece: PieceId,
    pub origin: Position,
    pub destinations: Vec<Position>,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rules: MoveRules,
}

/// Shorthand for `Game::new` with the default rules and seed.
pub fn new_game(width: i32, height: i32) -> Result<Game, RulesError> {
    Game::new(GameConfig::with_size(width, height))
}

impl Game {
    /// Builds the board and the starting layout: side A on the top and
    /// bottom rows, side B on the left and right columns, corners empty.
    #[instrument]
    pub fn new(config: GameConfig) -> Result<Self, RulesError> {
        let (w, h) = (config.width, config.height);
        if w < MIN_SIZE || h < MIN_SIZE {
            return Err(RulesError::InvalidDimensions { width: w, height: h });
        }

        let mut board = Board::new(w, h, config.zobrist_seed)?;
        for y in 0..h {
            for x in 0..w {
                let side = if (y == 0 || y == h - 1) && x > 0 && x < w - 1 {
                    Some(Side::A)
                } else if (x == 0 || x == w - 1) && y > 0 && y < h - 1 {
                    Some(Side::B)
                } else {
                    None
                };
                if let Some(side) = side {
                    board.spawn(side, Position::new(x, y))?;
                }
            }
        }

        info!(width = w, height = h, pieces = board.piece_count(), "new game");
        Ok(Self {
            board,
            rules: config.rules,
        })
    }

    /// Wraps an existing board, e.g. a custom position.
    pub fn from_board(board: Board, rules: MoveRules) -> Self {
        Self { board, rules }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> MoveRules {
        self.rules
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.board.pieces().filter(|(_, p)| p.side() == side).count()
    }

    pub fn legal_destinations(&self, origin: Position) -> Result<Vec<Position>, RulesError> {
        movegen::legal_destinations(&self.board, origin, self.rules)
    }

    /// Classifies a move without applying it.
    pub fn preview(
        &self,
        origin: Position,
        destination: Position,
    ) -> Result<MoveOutcome, RulesError> {
        resolver::attempt_move(&self.board, origin, destination, self.rules)
    }

    /// Applies the move if legal and returns its outcome.
    /// On `Illegal` the board is untouched.
    #[instrument(skip(self))]
    pub fn request_move(
        &mut self,
        origin: Position,
        destination: Position,
    ) -> Result<MoveOutcome, RulesError> {
        let outcome = self.preview(origin, destination)?;

        match outcome {
            MoveOutcome::Illegal => return Ok(outcome),
            MoveOutcome::Relocate => {}
            MoveOutcome::Capture { captured } => {
                let removed = self.board.remove(destination)?;
                if removed != captured {
                    return Err(RulesError::InvariantViolation(format!(
                        "expected {} on {}, found {}",
                        captured, destination, removed
                    )));
                }
                self.board.destroy(captured)?;
                debug!(%captured, %destination, "captured");
            }
        }

        let mover = self.board.remove(origin)?;
        self.board.place(mover, destination)?;
        debug_assert!(self.board.check_invariants().is_ok());
        debug!(%mover, %origin, %destination, "moved");
        Ok(outcome)
    }

    /// Destinations of every piece of `side`, in piece id order.
    /// Pieces are evaluated in parallel; the board is only read.
    pub fn all_legal_moves(&self, side: Side) -> Result<Vec<PieceMoves>, RulesError> {
        let pieces: Vec<(PieceId, Position)> = self
            .board
            .pieces()
            .filter(|(_, p)| p.side() == side)
            .map(|(id, p)| (id, p.position()))
            .collect();

        pieces
            .into_par_iter()
            .map(|(piece, origin)| -> Result<PieceMoves, RulesError> {
                Ok(PieceMoves {
                    piece,
                    origin,
                    destinations: self.legal_destinations(origin)?,
                })
            })
            .collect()
    }

    /// Display game board in ASCII art.
    pub fn display(&self) {
        println!("{}", self.board);
    }

    /// Reads moves from `input` until one is legal, then applies it.
    /// Expected format per line: `x0 y0 x1 y1`.
    /// Returns `Ok(None)` when input is exhausted.
    pub fn human_move<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        writer: &mut W,
    ) -> io::Result<Option<(Position, Position, MoveOutcome)>> {
        loop {
            write!(writer, "Enter move: ")?;
            writer.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let coords: Result<[i32; 4], _> = line
                .split_whitespace()
                .filter_map(|s| s.parse().ok())
                .collect::<Vec<i32>>()
                .try_into();

            let Ok([x0, y0, x1, y1]) = coords else {
                writeln!(writer, "Invalid input. Try again.")?;
                continue;
            };
            let (origin, destination) = (Position::new(x0, y0), Position::new(x1, y1));

            match self.request_move(origin, destination) {
                Ok(MoveOutcome::Illegal) => writeln!(writer, "Illegal move.")?,
                Ok(outcome) => return Ok(Some((origin, destination, outcome))),
                Err(err @ (RulesError::NoPieceAtOrigin(_) | RulesError::OutOfBounds { .. })) => {
                    writeln!(writer, "Invalid move: {}.", err)?
                }
                Err(err) => return Err(io::Error::other(err)),
            }
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}
