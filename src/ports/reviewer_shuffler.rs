//! Reviewer shuffler port.
//!
//! Randomness used by reviewer selection is injected through this trait so
//! that production can use a process-wide RNG while tests plug in a
//! deterministic ordering and assert exact picks.

use crate::domain::foundation::UserId;

/// Reorders a candidate pool in place.
///
/// Implementations should produce a uniformly random permutation; the
/// engine always takes candidates from the front of the shuffled slice.
pub trait ReviewerShuffler: Send + Sync {
    fn shuffle(&self, candidates: &mut [UserId]);
}
