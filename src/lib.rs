//! Waypoint: reference data services for Dofus portal tracking.
//!
//! This crate provides the server reference data used when translating
//! dofus-portals identifiers into locally known game servers, backed by a
//! snapshot loaded once at startup.
//!
//! # Architecture
//!
//! Waypoint follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`server_directory`]: Dual-indexed, read-only server lookup

pub mod server_directory;
