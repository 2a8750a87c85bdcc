//! Dual-indexed, read-only server lookup built from a roster snapshot.

use crate::server_directory::{
    domain::{DofusPortalsId, Server, ServerId},
    ports::{ServerRepository, ServerRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::HashMap;
use thiserror::Error;

/// Errors returned while constructing a [`ServerDirectory`].
#[derive(Debug, Clone, Error)]
pub enum ServerDirectoryError {
    /// The roster could not be fetched from the repository.
    #[error(transparent)]
    Repository(#[from] ServerRepositoryError),

    /// Two roster records share the same local identifier.
    #[error("duplicate server identifier in roster: {0}")]
    DuplicateServerId(ServerId),

    /// Two roster records share the same dofus-portals identifier.
    #[error("duplicate dofus-portals identifier in roster: {0}")]
    DuplicateDofusPortalsId(DofusPortalsId),
}

/// Immutable server lookup keyed by both identifier schemes.
///
/// The directory pulls the full roster from a [`ServerRepository`] exactly
/// once and indexes every record by its local [`ServerId`] and by its
/// [`DofusPortalsId`]. After construction nothing mutates the indexes, so
/// a shared reference is safe across threads; a roster change requires
/// loading a fresh directory.
#[derive(Debug, Clone)]
pub struct ServerDirectory {
    by_id: HashMap<ServerId, Server>,
    by_dofus_portals_id: HashMap<DofusPortalsId, Server>,
    loaded_at: DateTime<Utc>,
}

impl ServerDirectory {
    /// Loads the roster and builds both indexes.
    ///
    /// The repository is consulted exactly once, with no retry. Records
    /// sharing an identifier follow last-write-wins in roster order; use
    /// [`load_strict`](Self::load_strict) to reject such rosters instead.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDirectoryError::Repository`] when the roster fetch
    /// fails; no directory is produced.
    pub async fn load<R>(
        repository: &R,
        clock: &impl Clock,
    ) -> Result<Self, ServerDirectoryError>
    where
        R: ServerRepository + ?Sized,
    {
        let servers = repository.get_servers().await?;
        Ok(Self::from_servers(servers, clock))
    }

    /// Loads the roster, rejecting duplicate identifiers.
    ///
    /// Identical to [`load`](Self::load) except that a roster in which two
    /// records share a [`ServerId`] or a [`DofusPortalsId`] fails
    /// construction instead of silently overwriting.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDirectoryError::Repository`] when the roster fetch
    /// fails, [`ServerDirectoryError::DuplicateServerId`] or
    /// [`ServerDirectoryError::DuplicateDofusPortalsId`] when the roster
    /// violates identifier uniqueness.
    pub async fn load_strict<R>(
        repository: &R,
        clock: &impl Clock,
    ) -> Result<Self, ServerDirectoryError>
    where
        R: ServerRepository + ?Sized,
    {
        let servers = repository.get_servers().await?;
        let mut by_id = HashMap::with_capacity(servers.len());
        let mut by_dofus_portals_id = HashMap::with_capacity(servers.len());

        for server in servers {
            if by_id.contains_key(server.id()) {
                return Err(ServerDirectoryError::DuplicateServerId(server.id().clone()));
            }

            if by_dofus_portals_id.contains_key(server.dofus_portals_id()) {
                return Err(ServerDirectoryError::DuplicateDofusPortalsId(
                    server.dofus_portals_id().clone(),
                ));
            }

            by_dofus_portals_id.insert(server.dofus_portals_id().clone(), server.clone());
            by_id.insert(server.id().clone(), server);
        }

        Ok(Self {
            by_id,
            by_dofus_portals_id,
            loaded_at: clock.utc(),
        })
    }

    /// Builds a directory from an already-fetched roster.
    ///
    /// Both indexes are populated in a single pass. A record whose
    /// identifier repeats an earlier one overwrites it in that index only,
    /// so a repeated [`ServerId`] with distinct portal identifiers leaves
    /// both portal identifiers resolvable.
    #[must_use]
    pub fn from_servers(servers: Vec<Server>, clock: &impl Clock) -> Self {
        let mut by_id = HashMap::with_capacity(servers.len());
        let mut by_dofus_portals_id = HashMap::with_capacity(servers.len());

        for server in servers {
            by_dofus_portals_id.insert(server.dofus_portals_id().clone(), server.clone());
            by_id.insert(server.id().clone(), server);
        }

        Self {
            by_id,
            by_dofus_portals_id,
            loaded_at: clock.utc(),
        }
    }

    /// Looks up a server by its local identifier.
    ///
    /// Any string is a legal key; an unknown identifier yields `None`.
    #[must_use]
    pub fn get_server(&self, id: &str) -> Option<&Server> {
        self.by_id.get(id)
    }

    /// Looks up a server by its dofus-portals identifier.
    ///
    /// Any string is a legal key; an unknown identifier yields `None`.
    #[must_use]
    pub fn find_server_by_dofus_portals_id(&self, dofus_portals_id: &str) -> Option<&Server> {
        self.by_dofus_portals_id.get(dofus_portals_id)
    }

    /// Returns the number of servers reachable by local identifier.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns whether the snapshot holds no servers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Iterates the servers reachable by local identifier, in no
    /// particular order.
    #[must_use]
    pub fn servers(&self) -> impl Iterator<Item = &Server> {
        self.by_id.values()
    }

    /// Returns when the snapshot was taken.
    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
