//! Team domain module.
//!
//! Teams own the reviewer rosters. Users join a team through a team
//! creation upsert and can be switched active/inactive independently.

mod aggregate;
mod errors;
mod user;

pub use aggregate::Team;
pub use errors::TeamError;
pub use user::User;
