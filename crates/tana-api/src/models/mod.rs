//! models module

mod request;
mod response;

pub use request::CreateItemRequest;
pub use response::{DataResponse, HealthResponse};
