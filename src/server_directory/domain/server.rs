//! Server entity consumed by the directory.

use super::{DofusPortalsId, ServerDomainError, ServerId};
use serde::{Deserialize, Serialize};

/// One game server as known to the wider application.
///
/// The entity is owned by the application's data source; this crate only
/// consumes it. Identity is carried twice: once by the local [`ServerId`]
/// and once by the [`DofusPortalsId`] the external system uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    id: ServerId,
    dofus_portals_id: DofusPortalsId,
    name: String,
}

impl Server {
    /// Creates a server record.
    ///
    /// The display name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDomainError::EmptyServerName`] when the display name
    /// is empty after trimming.
    pub fn new(
        id: ServerId,
        dofus_portals_id: DofusPortalsId,
        name: impl Into<String>,
    ) -> Result<Self, ServerDomainError> {
        let trimmed = name.into().trim().to_owned();

        if trimmed.is_empty() {
            return Err(ServerDomainError::EmptyServerName);
        }

        Ok(Self {
            id,
            dofus_portals_id,
            name: trimmed,
        })
    }

    /// Returns the local server identifier.
    #[must_use]
    pub const fn id(&self) -> &ServerId {
        &self.id
    }

    /// Returns the dofus-portals identifier.
    #[must_use]
    pub const fn dofus_portals_id(&self) -> &DofusPortalsId {
        &self.dofus_portals_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
