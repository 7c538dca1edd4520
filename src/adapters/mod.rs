//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `memory` - in-memory storage for tests and local runs
//! - `postgres` - PostgreSQL storage
//! - `random` - reviewer shufflers

pub mod http;
pub mod memory;
pub mod postgres;
pub mod random;

pub use memory::InMemoryStore;
pub use postgres::{PostgresPullRequestRepository, PostgresTeamRepository};
pub use random::{FixedOrderShuffler, SeededShuffler, ThreadRngShuffler};
