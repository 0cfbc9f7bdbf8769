//! Game configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SIZE: i32 = 8;
pub const DEFAULT_SEED: u64 = 0x1A0_5EED;

/// Optional rule extensions. Both are off by default, which gives the
/// permissive movement of the classic desktop version: pieces may jump
/// over anything and may land on their own side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveRules {
    /// A move may not pass over an enemy piece.
    pub block_paths: bool,
    /// A move may not land on a piece of the mover's side.
    pub protect_own: bool,
}

impl MoveRules {
    /// Tournament Lines of Action rules.
    pub fn standard() -> Self {
        Self {
            block_paths: true,
            protect_own: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub rules: MoveRules,
    /// Seed of the Zobrist table used for board hashing.
    pub zobrist_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            rules: MoveRules::default(),
            zobrist_seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}
