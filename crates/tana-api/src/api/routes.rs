//! Router definition

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::handlers::{create_item, fallback, get_item, health_check, list_items};
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router
///
/// All routes live under the `/api` prefix; anything else hits the
/// fallback and gets the fixed route-not-found body.
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/api/health", get(health_check))
    .route("/api/items", get(list_items).post(create_item))
    .route("/api/items/{id}", get(get_item))
    .fallback(fallback)
    .method_not_allowed_fallback(fallback)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Starts the server
///
/// # Errors
/// Returns an error if binding or serving fails
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  tracing::info!("server listening on http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use tana::ItemStore;

  use super::*;
  use crate::config::Config;

  fn create_test_state() -> AppState {
    let config = Config::with_bind_addr("127.0.0.1:0");
    AppState::new(config, Arc::new(ItemStore::with_sample_items()))
  }

  #[test]
  fn test_router_creation() {
    let state = create_test_state();
    let _router = create_router(state);
    // Router construction must not panic with a seeded store
  }
}
