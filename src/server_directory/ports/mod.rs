//! Port contracts for server reference data retrieval.
//!
//! Ports define infrastructure-agnostic interfaces used by the server
//! directory.

pub mod repository;

pub use repository::{ServerRepository, ServerRepositoryError, ServerRepositoryResult};
