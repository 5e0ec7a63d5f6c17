//! api module

mod handlers;
mod routes;
mod state;

pub use handlers::{create_item, fallback, get_item, health_check, list_items};
pub use routes::{create_router, run_server};
pub use state::AppState;
