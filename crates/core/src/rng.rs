//! RNG module - tile spawn randomness
//!
//! Wraps a seedable `SmallRng` so a game can be replayed exactly from its
//! seed: the same seed and the same move sequence give the same spawns.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::types::{Tile, SPAWN_HIGH, SPAWN_HIGH_ODDS, SPAWN_LOW, SPAWN_ODDS_DENOM};

/// Source of spawn positions and spawn values
#[derive(Debug, Clone)]
pub struct TileRng {
    rng: SmallRng,
}

impl TileRng {
    /// Create a deterministic RNG from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Value for a new tile: 2 nine times in ten, otherwise 4.
    pub fn tile_value(&mut self) -> Tile {
        if self.rng.gen_range(0..SPAWN_ODDS_DENOM) < SPAWN_HIGH_ODDS {
            SPAWN_HIGH
        } else {
            SPAWN_LOW
        }
    }
}
