//! Pixel to cell mapping for graphical front-ends.
//! The rules engine itself only ever sees cell coordinates.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::position::Position;

pub const DEFAULT_TILE_SIZE: i32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGeometry {
    pub tile_size: i32,
}

impl Default for TileGeometry {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl TileGeometry {
    /// Cell whose center is nearest to a piece dropped with its top-left
    /// corner at `(px, py)`.
    pub fn to_cell(&self, px: f64, py: f64) -> Position {
        let half = f64::from(self.tile_size) / 2.0;
        let snap = |p: f64| ((p + half) / f64::from(self.tile_size)).floor() as i32;
        Position::new(snap(px), snap(py))
    }

    /// Like `to_cell`, but `None` when the drop lands off the board.
    /// A front-end treats `None` as an illegal move without asking the engine.
    pub fn snap(&self, board: &Board, px: f64, py: f64) -> Option<Position> {
        Some(self.to_cell(px, py)).filter(|&pos| board.contains(pos))
    }

    /// Top-left pixel of a cell.
    pub fn to_pixel(&self, pos: Position) -> (f64, f64) {
        (
            f64::from(pos.x * self.tile_size),
            f64::from(pos.y * self.tile_size),
        )
    }
}
