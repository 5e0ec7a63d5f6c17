//! API State Definition

use std::sync::Arc;

use tana::ItemStore;

use crate::config::Config;

/// Application State
///
/// State shared across the entire server. Holds the configuration and the
/// item store handle that request handlers operate on.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Item store
  ///
  /// - Production: `Arc::new(ItemStore::with_sample_items())`
  /// - Test: a fresh store per test case
  pub store: Arc<ItemStore>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, store: Arc<ItemStore>) -> Self {
    Self { config, store }
  }
}
