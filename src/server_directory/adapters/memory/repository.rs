//! In-memory repository for server rosters.

use crate::server_directory::{
    domain::Server,
    ports::{ServerRepository, ServerRepositoryError, ServerRepositoryResult},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory server repository.
///
/// Serves tests and embedders that already hold a roster in memory; the
/// real application supplies its own persistence-backed implementation of
/// [`ServerRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryServerRepository {
    state: Arc<RwLock<Vec<Server>>>,
}

impl InMemoryServerRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the given roster.
    #[must_use]
    pub fn with_servers(servers: impl IntoIterator<Item = Server>) -> Self {
        Self {
            state: Arc::new(RwLock::new(servers.into_iter().collect())),
        }
    }

    /// Appends a record to the roster.
    ///
    /// # Errors
    ///
    /// Returns [`ServerRepositoryError::DataSource`] when the roster lock is
    /// poisoned.
    pub fn insert(&self, server: Server) -> ServerRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ServerRepositoryError::data_source(std::io::Error::other(err.to_string()))
        })?;
        state.push(server);
        Ok(())
    }
}

#[async_trait]
impl ServerRepository for InMemoryServerRepository {
    async fn get_servers(&self) -> ServerRepositoryResult<Vec<Server>> {
        let state = self.state.read().map_err(|err| {
            ServerRepositoryError::data_source(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.clone())
    }
}
