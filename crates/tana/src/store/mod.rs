//! store module
pub mod item_store;

/// Re-export the store type
pub use item_store::ItemStore;
