//! Reviewer Assign - pull request reviewer assignment service
//!
//! Tracks teams, users and pull requests, picks reviewers from the author's
//! team when a pull request is opened, replaces them on request, and guards
//! the OPEN to MERGED lifecycle.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
