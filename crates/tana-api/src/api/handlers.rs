//! HTTP handler definitions

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use tracing::{debug, info};

use tana::Item;

use crate::errors::ApiError;
use crate::models::{CreateItemRequest, DataResponse, HealthResponse};

use super::state::AppState;

/// GET /api/health
///
/// Liveness probe. Always succeeds, touches nothing.
pub async fn health_check() -> Json<HealthResponse> {
  Json(HealthResponse::ok())
}

/// GET /api/items
///
/// Returns the full store snapshot in insertion order.
///
/// # Response
/// - 200 OK: `{"success": true, "data": [Item]}`
pub async fn list_items(
  State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Item>>>, ApiError> {
  let items = state.store.snapshot()?;

  debug!(count = items.len(), "listing items");

  Ok(Json(DataResponse::new(items)))
}

/// GET /api/items/{id}
///
/// Looks up a single item by id.
///
/// The path segment is taken as a raw string and parsed here: a
/// non-numeric id is indistinguishable from an absent one and yields the
/// same 404 body, never a parse-level 400.
///
/// # Response
/// - 200 OK: `{"success": true, "data": Item}`
/// - 404 Not Found: `{"success": false, "message": "Item not found"}`
pub async fn get_item(
  State(state): State<AppState>,
  Path(id): Path<String>,
) -> Result<Json<DataResponse<Item>>, ApiError> {
  let Ok(id) = id.parse::<u64>() else {
    return Err(ApiError::ItemNotFound);
  };

  let item = state.store.get(id)?.ok_or(ApiError::ItemNotFound)?;

  Ok(Json(DataResponse::new(item)))
}

/// POST /api/items
///
/// Validates the presence of `name` and `description`, appends a new item
/// and returns the stored record.
///
/// # Request Body
/// ```json
/// { "name": "Item 4", "description": "d" }
/// ```
///
/// # Response
/// - 201 Created: `{"success": true, "data": Item}`
/// - 400 Bad Request: missing or empty field
/// - 500 Internal Server Error: internal failure, generic body
pub async fn create_item(
  State(state): State<AppState>,
  Json(request): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<DataResponse<Item>>), ApiError> {
  let item = state.store.create(request.into())?;

  info!(id = item.id, name = %item.name, "item created");

  Ok((StatusCode::CREATED, Json(DataResponse::new(item))))
}

/// Fallback for unmatched routes
///
/// # Response
/// - 404 Not Found: `{"success": false, "message": "Route not found"}`
pub async fn fallback() -> ApiError {
  ApiError::RouteNotFound
}
