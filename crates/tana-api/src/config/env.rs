//! Config loading from environment variables

use super::constants::{BIND_HOST, DEFAULT_PORT};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "0.0.0.0:3000")
  pub bind_addr: String,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// Reads `PORT` (default 3000) and binds on all interfaces.
  ///
  /// # Errors
  /// Returns an error if `PORT` is set but is not a valid port number
  pub fn from_env() -> crate::errors::Result<Self> {
    let port = match std::env::var("PORT") {
      Ok(raw) => raw
        .parse::<u16>()
        .map_err(|_| ApiError::config(format!("invalid PORT value: {raw}")))?,
      Err(_) => DEFAULT_PORT,
    };

    Ok(Self {
      bind_addr: format!("{BIND_HOST}:{port}"),
    })
  }

  /// Builds a config for a fixed address, used by tests
  #[must_use]
  pub fn with_bind_addr(bind_addr: impl Into<String>) -> Self {
    Self {
      bind_addr: bind_addr.into(),
    }
  }
}
