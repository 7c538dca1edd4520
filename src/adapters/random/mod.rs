//! Reviewer shuffler adapters.
//!
//! - `ThreadRngShuffler` - production shuffler over the thread-local RNG
//! - `SeededShuffler` - reproducible shuffles for tests and replays
//! - `FixedOrderShuffler` - leaves roster order untouched

mod fixed_order;
mod seeded;
mod thread_rng;

pub use fixed_order::FixedOrderShuffler;
pub use seeded::SeededShuffler;
pub use thread_rng::ThreadRngShuffler;
