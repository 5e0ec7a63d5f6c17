//! Request model definitions

use serde::Deserialize;

use tana::NewItem;

/// Create-item request body
///
/// Both fields default to the empty string so that an absent field and an
/// explicitly empty one fail the same presence check with the same 400,
/// instead of an absent field being rejected by the JSON extractor.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
  /// Item name
  #[serde(default)]
  pub name: String,
  /// Item description
  #[serde(default)]
  pub description: String,
}

impl From<CreateItemRequest> for NewItem {
  fn from(request: CreateItemRequest) -> Self {
    NewItem::new(request.name, request.description)
  }
}
