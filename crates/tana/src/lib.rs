//! tana item catalog library
//!
//! Holds the `Item` domain model and the in-memory `ItemStore`.
//! The store is process-lifetime only: contents are lost on restart.

/// Error module - defines StoreError and StoreResult
pub mod errors;

/// Data model module - defines Item and NewItem
pub mod models;

/// Store module - the mutex-guarded in-memory item collection
pub mod store;

/// Re-exports
pub use errors::{StoreError, StoreResult};
pub use models::{Item, NewItem};
pub use store::ItemStore;
