//! Identifier types for the server domain.

use super::ServerDomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Maximum length for either server identifier scheme.
const MAX_ID_LENGTH: usize = 100;

/// Locally owned server identifier.
///
/// Server identifiers are assigned by the wider application and are unique
/// across the roster (e.g. `draconiros`, `imagiro`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerId(String);

impl ServerId {
    /// Creates a validated server identifier.
    ///
    /// The input is trimmed; its content is otherwise taken verbatim, since
    /// identifiers originate in the wider application's data source.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDomainError::EmptyServerId`] when the value is empty
    /// after trimming, or [`ServerDomainError::ServerIdTooLong`] when it
    /// exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ServerDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ServerDomainError::EmptyServerId);
        }

        if trimmed.len() > MAX_ID_LENGTH {
            return Err(ServerDomainError::ServerIdTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ServerId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for ServerId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier assigned to a server by the dofus-portals system.
///
/// These identifiers belong to an external system and are assumed unique
/// across the roster; the assumption is enforced only by strict loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DofusPortalsId(String);

impl DofusPortalsId {
    /// Creates a validated dofus-portals identifier.
    ///
    /// The input is trimmed; its content is otherwise taken verbatim, since
    /// these identifiers are minted by the external system.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDomainError::EmptyDofusPortalsId`] when the value is
    /// empty after trimming, or
    /// [`ServerDomainError::DofusPortalsIdTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ServerDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ServerDomainError::EmptyDofusPortalsId);
        }

        if trimmed.len() > MAX_ID_LENGTH {
            return Err(ServerDomainError::DofusPortalsIdTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DofusPortalsId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for DofusPortalsId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DofusPortalsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
