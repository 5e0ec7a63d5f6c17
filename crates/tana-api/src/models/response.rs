//! Response model definitions

use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
  /// Liveness flag, always "OK"
  pub status: String,
  /// Human-readable status line shown by clients
  pub message: String,
}

impl HealthResponse {
  /// The canonical healthy response
  #[must_use]
  pub fn ok() -> Self {
    Self {
      status: "OK".to_string(),
      message: "Backend is running!".to_string(),
    }
  }
}

/// Success envelope: `{"success": true, "data": ...}`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
  /// Always true on this path; error responses carry `success: false`
  pub success: bool,
  /// The payload
  pub data: T,
}

impl<T> DataResponse<T> {
  /// Wraps a payload in the success envelope
  #[must_use]
  pub fn new(data: T) -> Self {
    Self {
      success: true,
      data,
    }
  }
}
