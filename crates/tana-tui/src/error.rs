//! Client-side error definitions

use thiserror::Error;

/// Errors from talking to the API
#[derive(Debug, Error)]
pub enum ClientError {
  /// Transport-level failure (connection refused, timeout, bad URL)
  #[error("HTTP error: {0}")]
  Http(#[from] reqwest::Error),

  /// The API answered with a non-success status
  #[error("API error: {status} - {message}")]
  Api {
    /// HTTP status code
    status: u16,
    /// Message from the error envelope, or a placeholder
    message: String,
  },
}

/// Errors from the terminal application itself
#[derive(Debug, Error)]
pub enum TuiError {
  /// Terminal I/O failure
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}
