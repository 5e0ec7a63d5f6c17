//! tana-api crate
//!
//! Web server exposing the tana item catalog as an HTTP JSON API.
//!
//! ## Endpoints
//! - `GET /api/health` - Health Check
//! - `GET /api/items` - List all items
//! - `GET /api/items/{id}` - Get one item
//! - `POST /api/items` - Create an item
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:3000/api/items \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Item 4", "description": "This is the fourth item"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{CreateItemRequest, DataResponse, HealthResponse};
