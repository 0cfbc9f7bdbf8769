//! Board storage.
//! The board owns every piece in an arena; cells only hold `PieceId` handles.

use std::fmt;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::RulesError;
use crate::position::{Position, Side};
use crate::zobrist::Zobrist;

/// Non-owning handle to a piece. Ids are never reused, so a handle to a
/// captured piece resolves to nothing instead of to another piece.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("#{}", _0)]
pub struct PieceId(usize);

impl PieceId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    side: Side,
    position: Position,
}

impl Piece {
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// Largest accepted side length.
pub const MAX_SIZE: i32 = 256;

#[derive(Clone)]
pub struct Board {
    width: i32,
    height: i32,
    /// Row-major, `y * width + x`.
    cells: Vec<Option<PieceId>>,
    /// Slot `i` holds the piece with id `i` until it is destroyed.
    pieces: Vec<Option<Piece>>,
    zobrist: Zobrist,
    hash: u64,
}

impl Board {
    /// Creates an empty board.
    pub fn new(width: i32, height: i32, zobrist_seed: u64) -> Result<Self, RulesError> {
        if !(1..=MAX_SIZE).contains(&width) || !(1..=MAX_SIZE).contains(&height) {
            return Err(RulesError::InvalidDimensions { width, height });
        }
        let (w, h) = (width as usize, height as usize);

        Ok(Self {
            width,
            height,
            cells: vec![None; w * h],
            pieces: Vec::new(),
            zobrist: Zobrist::new(zobrist_seed, w, h),
            hash: 0,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    #[inline]
    fn index(&self, pos: Position) -> Result<usize, RulesError> {
        if !self.contains(pos) {
            return Err(RulesError::OutOfBounds {
                position: pos,
                width: self.width,
                height: self.height,
            });
        }
        Ok(pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Occupant of a cell.
    pub fn cell_at(&self, pos: Position) -> Result<Option<PieceId>, RulesError> {
        Ok(self.cells[self.index(pos)?])
    }

    /// Occupant of a cell, resolved to the piece itself.
    pub fn piece_at(&self, pos: Position) -> Result<Option<&Piece>, RulesError> {
        Ok(self.cell_at(pos)?.and_then(|id| self.piece(id)))
    }

    /// Live piece for `id`, or `None` once it has been captured.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0).and_then(Option::as_ref)
    }

    /// All live pieces in id order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|p| (PieceId(i), p)))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.iter().flatten().count()
    }

    /// Zobrist hash of the current placement.
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Number of occupied cells among `positions`, either side.
    /// Positions off the board count as empty.
    pub fn count_occupied<I>(&self, positions: I) -> usize
    where
        I: IntoIterator<Item = Position>,
    {
        positions
            .into_iter()
            .filter(|&pos| matches!(self.cell_at(pos), Ok(Some(_))))
            .count()
    }

    /// Allocates a new piece and puts it on an empty cell.
    pub fn spawn(&mut self, side: Side, pos: Position) -> Result<PieceId, RulesError> {
        // Validate before allocating so a failed spawn leaves no orphan.
        if self.cell_at(pos)?.is_some() {
            return Err(RulesError::InvariantViolation(format!(
                "cannot spawn on occupied cell {}",
                pos
            )));
        }
        let id = PieceId(self.pieces.len());
        self.pieces.push(Some(Piece { side, position: pos }));
        self.place(id, pos)?;
        Ok(id)
    }

    /// Puts a live piece on an empty cell and records the cell as its position.
    pub fn place(&mut self, id: PieceId, pos: Position) -> Result<(), RulesError> {
        let idx = self.index(pos)?;
        if let Some(occupant) = self.cells[idx] {
            return Err(RulesError::InvariantViolation(format!(
                "cannot place {} on {}: occupied by {}",
                id, pos, occupant
            )));
        }
        let piece = self
            .pieces
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or_else(|| {
                RulesError::InvariantViolation(format!("piece {} does not exist", id))
            })?;

        piece.position = pos;
        let side = piece.side;
        self.cells[idx] = Some(id);
        self.hash ^= self.zobrist.key(pos.x as usize, pos.y as usize, side);
        trace!(%id, %pos, %side, "placed");
        Ok(())
    }

    /// Clears a cell and returns the handle it held.
    pub fn remove(&mut self, pos: Position) -> Result<PieceId, RulesError> {
        let idx = self.index(pos)?;
        let id = self.cells[idx]
            .take()
            .ok_or_else(|| {
                RulesError::InvariantViolation(format!("cannot remove from empty cell {}", pos))
            })?;
        let side = self
            .piece(id)
            .map(Piece::side)
            .ok_or_else(|| {
                RulesError::InvariantViolation(format!("cell {} held dead piece {}", pos, id))
            })?;

        self.hash ^= self.zobrist.key(pos.x as usize, pos.y as usize, side);
        trace!(%id, %pos, "removed");
        Ok(id)
    }

    /// Drops a piece from the arena. Its cell must already be cleared.
    pub fn destroy(&mut self, id: PieceId) -> Result<Piece, RulesError> {
        let piece = self
            .piece(id)
            .copied()
            .ok_or_else(|| {
                RulesError::InvariantViolation(format!("piece {} does not exist", id))
            })?;
        if self.cell_at(piece.position)? == Some(id) {
            return Err(RulesError::InvariantViolation(format!(
                "piece {} destroyed while still on {}",
                id, piece.position
            )));
        }
        self.pieces[id.0] = None;
        trace!(%id, "destroyed");
        Ok(piece)
    }

    /// Verifies that every live piece sits on exactly the cell it records,
    /// and that every occupied cell names a live piece.
    pub fn check_invariants(&self) -> Result<(), RulesError> {
        for (id, piece) in self.pieces() {
            if self.cell_at(piece.position)? != Some(id) {
                return Err(RulesError::InvariantViolation(format!(
                    "piece {} records {} but is not there",
                    id, piece.position
                )));
            }
        }
        let referenced = self.cells.iter().flatten().count();
        if referenced != self.piece_count() {
            return Err(RulesError::InvariantViolation(format!(
                "{} occupied cells for {} live pieces",
                referenced,
                self.piece_count()
            )));
        }
        Ok(())
    }
}

/// ASCII rendering: `A`, `B` or `.` per cell, with column and row indices.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = (self.height - 1).to_string().len();
        for y in 0..self.height {
            write!(f, "{:>label$}", y)?;
            for x in 0..self.width {
                let symbol = match self.piece_at(Position::new(x, y)) {
                    Ok(Some(piece)) => piece.side.to_string(),
                    _ => ".".to_string(),
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "{:label$}", "")?;
        for x in 0..self.width {
            write!(f, " {}", x % 10)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pieces", &self.piece_count())
            .field("hash", &format_args!("{:#018x}", self.hash))
            .finish()
    }
}
