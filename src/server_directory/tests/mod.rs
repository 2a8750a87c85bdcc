//! Unit tests for the server directory context.
