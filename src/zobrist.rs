use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::position::Side;

const SIDES: usize = 2;

/// Random keys for every (cell, side) pair. XOR-ing the keys of all occupied
/// cells gives a hash of the board that changes whenever a piece moves.
#[derive(Clone, Debug)]
pub struct Zobrist {
    width: usize,
    table: Vec<[u64; SIDES]>,
}

impl Zobrist {
    pub fn new(seed: u64, width: usize, height: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let table = (0..width * height)
            .map(|_| [rng.random::<u64>(), rng.random::<u64>()])
            .collect();

        Self { width, table }
    }

    /// Key for a piece of `side` on column `x`, row `y`.
    /// Coordinates must already be bounds-checked.
    #[inline]
    pub fn key(&self, x: usize, y: usize, side: Side) -> u64 {
        self.table[y * self.width + x][side.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_keys() {
        let a = Zobrist::new(7, 8, 8);
        let b = Zobrist::new(7, 8, 8);
        assert_eq!(a.key(3, 5, Side::A), b.key(3, 5, Side::A));
        assert_ne!(a.key(3, 5, Side::A), a.key(3, 5, Side::B));
    }
}
