//! Repository port for server roster retrieval.

use crate::server_directory::domain::Server;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for server repository operations.
pub type ServerRepositoryResult<T> = Result<T, ServerRepositoryError>;

/// Data-access contract for the server roster.
///
/// The directory calls [`get_servers`](ServerRepository::get_servers)
/// exactly once, at construction; implementations are free to read from a
/// database, an HTTP API, or a fixture in memory.
#[async_trait]
pub trait ServerRepository: Send + Sync {
    /// Returns every known server record.
    async fn get_servers(&self) -> ServerRepositoryResult<Vec<Server>>;
}

/// Errors returned by server repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ServerRepositoryError {
    /// The backing data source could not be reached or failed mid-read.
    #[error("server data source error: {0}")]
    DataSource(Arc<dyn std::error::Error + Send + Sync>),

    /// Stored data could not be reconstructed into domain types.
    #[error("invalid stored server record: {0}")]
    InvalidRecord(Arc<dyn std::error::Error + Send + Sync>),
}

impl ServerRepositoryError {
    /// Wraps a data-source failure.
    pub fn data_source(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::DataSource(Arc::new(err))
    }

    /// Wraps stored-record decoding or validation failures.
    pub fn invalid_record(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidRecord(Arc::new(err))
    }
}
