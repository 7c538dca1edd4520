//! Seeded RNG shuffler.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::domain::foundation::UserId;
use crate::ports::ReviewerShuffler;

/// Shuffler with a fixed seed: the same seed and call sequence always
/// yields the same picks.
#[derive(Debug)]
pub struct SeededShuffler {
    rng: Mutex<StdRng>,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ReviewerShuffler for SeededShuffler {
    fn shuffle(&self, candidates: &mut [UserId]) {
        // A poisoned lock only means another shuffle panicked; the RNG
        // state is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        candidates.shuffle(&mut *rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> Vec<UserId> {
        ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(|s| UserId::new(*s).unwrap())
            .collect()
    }

    #[test]
    fn same_seed_same_order() {
        let mut first = ids();
        let mut second = ids();
        SeededShuffler::new(42).shuffle(&mut first);
        SeededShuffler::new(42).shuffle(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn shuffle_keeps_all_candidates() {
        let mut shuffled = ids();
        SeededShuffler::new(7).shuffle(&mut shuffled);
        shuffled.sort();
        assert_eq!(shuffled, ids());
    }
}
