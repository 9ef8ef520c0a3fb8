//! Deterministic seeding for the price source.
//!
//! A master seed is expanded into a per-symbol sub-seed with BLAKE3, so two
//! walks built from the same master seed but different symbols follow
//! independent paths, while the same `(seed, symbol)` pair always replays the
//! same path.

use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedHierarchy {
    master_seed: u64,
}

impl SeedHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive the sub-seed for `symbol`.
    pub fn sub_seed(&self, symbol: &str) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(symbol.as_bytes());
        *hasher.finalize().as_bytes()
    }

    /// Create a seeded StdRng for `symbol`.
    pub fn rng_for(&self, symbol: &str) -> StdRng {
        StdRng::from_seed(self.sub_seed(symbol))
    }
}

/// RNG for an optional seed: derived from the hierarchy when seeded, from OS
/// entropy otherwise.
pub fn rng_for(seed: Option<u64>, symbol: &str) -> StdRng {
    match seed {
        Some(seed) => SeedHierarchy::new(seed).rng_for(symbol),
        None => StdRng::from_entropy(),
    }
}
