//! tana-api server entry point

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tana::ItemStore;
use tana_api::ApiError;
use tana_api::api::AppState;
use tana_api::api::run_server;
use tana_api::config::Config;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Logging initialization
  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).init();

  // Load configuration
  let config = Config::from_env()?;
  tracing::info!(bind_addr = %config.bind_addr, "configuration loaded");

  // Seed the in-memory store with the demo records
  let store = Arc::new(ItemStore::with_sample_items());
  tracing::info!(count = store.len().unwrap_or(0), "item store seeded");

  // Application state
  let state = AppState::new(config, store);

  // Start the server
  run_server(state).await
}
