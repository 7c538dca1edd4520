//! In-memory adapters for the storage ports.
//!
//! Useful for testing and local development without PostgreSQL.

mod store;

pub use store::InMemoryStore;
