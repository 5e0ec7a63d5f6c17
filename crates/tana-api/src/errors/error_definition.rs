//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use tana::errors::StoreError;

/// Generic message returned for 500 responses
///
/// Internal detail is logged server-side and never sent to the client.
const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Request body failed the presence check
  Validation,
  /// No item with the requested id
  ItemNotFound,
  /// No route matched the request
  RouteNotFound,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Error code for logging and diagnostics
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Validation => "validation_error",
      Self::ItemNotFound => "item_not_found",
      Self::RouteNotFound => "route_not_found",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Validation => StatusCode::BAD_REQUEST,
      Self::ItemNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
///
/// Every handler returns `Result<_, ApiError>`; the translation into a
/// status code and response body happens once, in [`IntoResponse`].
#[derive(Debug, Error)]
pub enum ApiError {
  /// Request body failed the presence check
  #[error("{0}")]
  Validation(String),

  /// No item with the requested id
  #[error("Item not found")]
  ItemNotFound,

  /// No route matched the request
  #[error("Route not found")]
  RouteNotFound,

  /// Internal error; the payload is the detail for the server log
  #[error("internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("config error: {0}")]
  Config(String),
}

impl ApiError {
  /// Error category
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::Validation(_) => ApiErrorKind::Validation,
      Self::ItemNotFound => ApiErrorKind::ItemNotFound,
      Self::RouteNotFound => ApiErrorKind::RouteNotFound,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates a validation error
  #[must_use]
  pub fn validation(message: impl Into<String>) -> Self {
    Self::Validation(message.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// JSON structure of error responses
///
/// Matches the success envelope: `{"success": false, "message": "..."}`.
#[derive(Serialize)]
struct ErrorResponse {
  success: bool,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();

    // 5xx bodies carry a fixed message; the detail stays in the log
    let message = match &self {
      Self::Internal(detail) | Self::Config(detail) => {
        tracing::error!(code = self.code(), detail = %detail, "request failed");
        INTERNAL_ERROR_MESSAGE.to_string()
      }
      _ => self.to_string(),
    };

    let body = ErrorResponse {
      success: false,
      message,
    };

    (status, Json(body)).into_response()
  }
}

/// Mapping from store errors to API errors
///
/// Both presence-check failures produce the same 400 body the original
/// contract promises; a poisoned lock is an internal failure.
impl From<StoreError> for ApiError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::EmptyName | StoreError::EmptyDescription => {
        ApiError::validation("Name and description are required")
      }
      StoreError::Poisoned => ApiError::internal(err.to_string()),
      // #[non_exhaustive] enum, cover future variants
      _ => ApiError::internal(format!("unknown store error: {err}")),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
