//! Bag randomizer for piece generation
//!
//! All 7 kinds are shuffled, then dealt out one by one before reshuffling.
//! Every kind shows up exactly once per cycle of 7 draws, which prevents
//! long droughts of any single piece.

use crate::tetromino::PieceKind;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// The piece sequencer
#[derive(Debug, Clone)]
pub struct Bag {
    /// This bag's own copy of the catalog, shuffled in place
    order: [PieceKind; 7],
    /// Index of the next piece to deal
    cursor: usize,
    rng: ChaCha8Rng,
}

impl Default for Bag {
    fn default() -> Self {
        Self::new()
    }
}

impl Bag {
    /// Create a bag seeded from system entropy
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a bag with a reproducible sequence
    pub fn with_seed(seed: u64) -> Self {
        let mut bag = Self {
            order: PieceKind::ALL,
            cursor: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        bag.shuffle();
        bag
    }

    /// Deal the next piece, reshuffling once the current cycle is used up
    pub fn next(&mut self) -> PieceKind {
        if self.cursor >= self.order.len() {
            self.shuffle();
            self.cursor = 0;
        }
        let kind = self.order[self.cursor];
        self.cursor += 1;
        kind
    }

    /// Fisher-Yates shuffle of the current order
    fn shuffle(&mut self) {
        self.order.shuffle(&mut self.rng);
    }
}
