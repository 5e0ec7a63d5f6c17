//! Base URL resolution

/// Default API base URL, matching the server's default port
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/api";

/// Resolves the API base URL
///
/// Precedence: `--base-url` flag, then the `TANA_BASE_URL` environment
/// variable, then the default. A trailing slash is stripped so endpoint
/// paths can always be joined with a single `/`.
pub fn resolve_base_url(cli_base_url: Option<String>) -> String {
  if let Some(url) = cli_base_url {
    if !url.is_empty() {
      return normalize(url);
    }
  }

  if let Ok(url) = std::env::var("TANA_BASE_URL") {
    if !url.is_empty() {
      return normalize(url);
    }
  }

  DEFAULT_BASE_URL.to_string()
}

fn normalize(url: String) -> String {
  url.trim_end_matches('/').to_string()
}
