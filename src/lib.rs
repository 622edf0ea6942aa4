//! Bulk-load a JSON array file into a MongoDB collection.
//!
//! A run connects, reads and parses the whole file, submits one `insertMany`
//! and closes the connection. See [`seed::run`].

pub mod config;
pub mod error;
pub mod insert;
pub mod loader;
pub mod mongo;
pub mod seed;

pub use config::SeedConfig;
pub use error::{ErrorKind, Result, SeedError};
pub use insert::InsertSummary;
pub use seed::{run, RunOutcome};
