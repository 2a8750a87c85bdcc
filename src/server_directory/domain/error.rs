//! Error types for server domain validation.

use thiserror::Error;

/// Errors returned while constructing server domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServerDomainError {
    /// The server identifier is empty after trimming.
    #[error("server identifier must not be empty")]
    EmptyServerId,

    /// The server identifier exceeds the 100-character limit.
    #[error("server identifier exceeds 100 character limit: {0}")]
    ServerIdTooLong(String),

    /// The dofus-portals identifier is empty after trimming.
    #[error("dofus-portals identifier must not be empty")]
    EmptyDofusPortalsId,

    /// The dofus-portals identifier exceeds the 100-character limit.
    #[error("dofus-portals identifier exceeds 100 character limit: {0}")]
    DofusPortalsIdTooLong(String),

    /// The server display name is empty after trimming.
    #[error("server name must not be empty")]
    EmptyServerName,
}
