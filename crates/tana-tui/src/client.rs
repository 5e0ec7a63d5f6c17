//! HTTP client for the tana API

use serde::Deserialize;
use tracing::debug;

use tana::Item;

use crate::error::ClientError;

/// Health check response body
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
  /// Liveness flag
  pub status: String,
  /// Human-readable status line
  pub message: String,
}

/// Success envelope: `{"success": true, "data": ...}`
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
  #[allow(dead_code)]
  success: bool,
  data: T,
}

/// Error envelope: `{"success": false, "message": ...}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
  message: Option<String>,
}

/// Client for the tana item catalog API
pub struct ApiClient {
  http: reqwest::Client,
  base_url: String,
}

impl ApiClient {
  /// Creates a client rooted at the given base URL (e.g.
  /// `http://127.0.0.1:3000/api`)
  #[must_use]
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      http: reqwest::Client::new(),
      base_url: base_url.into(),
    }
  }

  /// GET /health
  ///
  /// # Errors
  /// Transport errors or a non-2xx response
  pub async fn health(&self) -> Result<HealthResponse, ClientError> {
    debug!("checking backend health");

    let response = self.http.get(format!("{}/health", self.base_url)).send().await?;
    let response = Self::check_status(response).await?;

    Ok(response.json::<HealthResponse>().await?)
  }

  /// GET /items
  ///
  /// # Errors
  /// Transport errors or a non-2xx response
  pub async fn list_items(&self) -> Result<Vec<Item>, ClientError> {
    debug!("fetching item list");

    let response = self.http.get(format!("{}/items", self.base_url)).send().await?;
    let response = Self::check_status(response).await?;

    let envelope = response.json::<DataEnvelope<Vec<Item>>>().await?;
    Ok(envelope.data)
  }

  /// POST /items
  ///
  /// Returns the stored record, id included.
  ///
  /// # Errors
  /// Transport errors or a non-2xx response (400 on empty fields)
  pub async fn create_item(
    &self,
    name: impl Into<String>,
    description: impl Into<String>,
  ) -> Result<Item, ClientError> {
    let body = serde_json::json!({
      "name": name.into(),
      "description": description.into(),
    });

    debug!("creating item");

    let response =
      self.http.post(format!("{}/items", self.base_url)).json(&body).send().await?;
    let response = Self::check_status(response).await?;

    let envelope = response.json::<DataEnvelope<Item>>().await?;
    Ok(envelope.data)
  }

  /// Turns a non-success response into [`ClientError::Api`], pulling the
  /// message out of the error envelope when there is one
  async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
      return Ok(response);
    }

    let message = response
      .json::<ErrorEnvelope>()
      .await
      .ok()
      .and_then(|envelope| envelope.message)
      .unwrap_or_else(|| "Unknown error".to_string());

    Err(ClientError::Api {
      status: status.as_u16(),
      message,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn client_keeps_base_url() {
    let client = ApiClient::new("http://127.0.0.1:3000/api");
    assert_eq!(client.base_url, "http://127.0.0.1:3000/api");
  }

  #[test]
  fn data_envelope_deserializes_item_list() {
    let json = r#"{
      "success": true,
      "data": [
        {"id": 1, "name": "Item 1", "description": "This is the first item"},
        {"id": 2, "name": "Item 2", "description": "This is the second item"}
      ]
    }"#;

    let envelope: DataEnvelope<Vec<Item>> = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.data.len(), 2);
    assert_eq!(envelope.data[0].id, 1);
    assert_eq!(envelope.data[1].name, "Item 2");
  }

  #[test]
  fn data_envelope_deserializes_single_item() {
    let json = r#"{"success": true, "data": {"id": 4, "name": "Item 4", "description": "d"}}"#;

    let envelope: DataEnvelope<Item> = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.data.id, 4);
  }

  #[test]
  fn error_envelope_extracts_message() {
    let json = r#"{"success": false, "message": "Item not found"}"#;

    let envelope: ErrorEnvelope = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.message.as_deref(), Some("Item not found"));
  }

  #[test]
  fn error_envelope_tolerates_missing_message() {
    let envelope: ErrorEnvelope = serde_json::from_str("{}").unwrap();
    assert!(envelope.message.is_none());
  }

  #[test]
  fn health_response_deserializes() {
    let json = r#"{"status": "OK", "message": "Backend is running!"}"#;

    let health: HealthResponse = serde_json::from_str(json).unwrap();
    assert_eq!(health.status, "OK");
    assert_eq!(health.message, "Backend is running!");
  }

  #[tokio::test]
  #[ignore = "requires a running tana-api server"]
  async fn live_roundtrip() {
    let client = ApiClient::new("http://127.0.0.1:3000/api");

    let health = client.health().await.expect("health should succeed");
    assert_eq!(health.status, "OK");

    let before = client.list_items().await.expect("list should succeed");
    let created =
      client.create_item("Live item", "created by live_roundtrip").await.expect("create");
    assert_eq!(created.id as usize, before.len() + 1);
  }
}
