//! API configuration constants

/// Default listen port
///
/// Used when the `PORT` environment variable is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Bind host
///
/// The server always binds all interfaces; a reverse proxy in front of it
/// is expected to expose the `/api` prefix to browsers or other clients.
pub const BIND_HOST: &str = "0.0.0.0";
