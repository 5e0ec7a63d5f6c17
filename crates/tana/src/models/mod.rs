//! models module
pub mod model_definition;

/// Re-export the data model types
pub use model_definition::{Item, NewItem};
