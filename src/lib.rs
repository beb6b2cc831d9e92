//! StoreFlow task-management core.
//!
//! The in-memory task store, query pipeline, and status-derivation rules
//! behind a retail store-operations app, exported for the CLI and for
//! integration tests.

pub mod catalog;
pub mod cli;
pub mod expiration;
pub mod format;
pub mod loader;
pub mod picking;
pub mod query;
pub mod receiving;
pub mod store;
pub mod types;
