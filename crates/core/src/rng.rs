//! RNG module - bag-randomized piece queue
//!
//! The queue holds an ordered run of upcoming kinds. Whenever fewer than
//! [`PREVIEW_LEN`] remain, one freshly shuffled permutation of all seven
//! kinds is appended to the tail. Every appended batch therefore contains
//! each kind exactly once, and no kind can go more than 12 draws without
//! appearing.
//!
//! Shuffling uses a seeded [`Pcg32`], so the same seed always deals the same
//! sequence.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::types::{PieceKind, PREVIEW_LEN};

/// Bag piece generator with a preview window
#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Upcoming kinds, front first
    upcoming: Vec<PieceKind>,
    rng: Pcg32,
    seed: u64,
    /// Number of full batches appended so far
    bags_dealt: u64,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_prefix(seed, &[])
    }

    /// Create a queue that deals `prefix` first, then bag-randomized batches
    pub fn with_prefix(seed: u64, prefix: &[PieceKind]) -> Self {
        let mut queue = Self {
            upcoming: Vec::with_capacity(prefix.len() + 2 * PieceKind::ALL.len()),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            bags_dealt: 0,
        };
        queue.upcoming.extend_from_slice(prefix);
        queue.refill();
        queue
    }

    /// Append shuffled batches until the preview window is covered
    fn refill(&mut self) {
        while self.upcoming.len() < PREVIEW_LEN {
            let mut bag = PieceKind::ALL;
            bag.shuffle(&mut self.rng);
            self.upcoming.extend_from_slice(&bag);
            self.bags_dealt += 1;
        }
    }

    /// Draw the next piece from the queue
    pub fn next(&mut self) -> PieceKind {
        // refill() runs after every draw, so the front always exists.
        assert!(!self.upcoming.is_empty(), "piece queue underrun");
        let kind = self.upcoming.remove(0);
        self.refill();
        kind
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> PieceKind {
        self.upcoming[0]
    }

    /// The next `n` kinds in draw order, without consuming them
    ///
    /// At most the currently queued kinds are returned; after any draw at
    /// least [`PREVIEW_LEN`] are queued.
    pub fn preview(&self, n: usize) -> &[PieceKind] {
        &self.upcoming[..n.min(self.upcoming.len())]
    }

    pub fn len(&self) -> usize {
        self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty()
    }

    pub fn bags_dealt(&self) -> u64 {
        self.bags_dealt
    }

    /// The seed this queue was created with (for restarting with the same sequence)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
