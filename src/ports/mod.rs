//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `TeamRepository` - Teams and users
//! - `PullRequestRepository` - Pull requests and reviewer links
//!
//! ## Capability Ports
//!
//! - `ReviewerShuffler` - Source of randomness for reviewer selection

mod pull_request_repository;
mod reviewer_shuffler;
mod team_repository;

pub use pull_request_repository::PullRequestRepository;
pub use reviewer_shuffler::ReviewerShuffler;
pub use team_repository::TeamRepository;
