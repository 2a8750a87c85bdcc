//! Server reference data lookup for Waypoint.
//!
//! This module loads the full game server roster once from a repository
//! collaborator and answers constant-time lookups by either the local
//! server identifier or the dofus-portals identifier. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Lookup services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
