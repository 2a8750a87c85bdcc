//! Lookup services for server reference data.

mod directory;

pub use directory::{ServerDirectory, ServerDirectoryError};
