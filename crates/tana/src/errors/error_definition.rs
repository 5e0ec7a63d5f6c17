//! Error definitions

use thiserror::Error;

/// Store-related errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
  /// name was missing or empty
  #[error("name must not be empty")]
  EmptyName,

  /// description was missing or empty
  #[error("description must not be empty")]
  EmptyDescription,

  /// The store lock was poisoned by a panicking writer
  #[error("item store lock poisoned")]
  Poisoned,
}

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
