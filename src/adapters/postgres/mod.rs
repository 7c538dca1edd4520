//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresTeamRepository` - teams and their members
//! - `PostgresPullRequestRepository` - pull requests and ordered reviewer links

mod pull_request_repository;
mod team_repository;

pub use pull_request_repository::PostgresPullRequestRepository;
pub use team_repository::PostgresTeamRepository;
