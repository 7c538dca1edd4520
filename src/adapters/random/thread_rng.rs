//! Thread-local RNG shuffler.

use rand::seq::SliceRandom;

use crate::domain::foundation::UserId;
use crate::ports::ReviewerShuffler;

/// Uniform Fisher-Yates shuffle backed by `rand::thread_rng()`.
///
/// No seeding or determinism contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngShuffler;

impl ThreadRngShuffler {
    pub fn new() -> Self {
        Self
    }
}

impl ReviewerShuffler for ThreadRngShuffler {
    fn shuffle(&self, candidates: &mut [UserId]) {
        candidates.shuffle(&mut rand::thread_rng());
    }
}
