//! Reviewer assignment rules.
//!
//! Pure selection logic shared by pull request creation and reviewer
//! reassignment. Storage access lives in the application handlers.

mod candidate_pool;

pub use candidate_pool::CandidatePool;
