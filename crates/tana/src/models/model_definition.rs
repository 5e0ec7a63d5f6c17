//! Data Model Definition
use serde::{Deserialize, Serialize};

/// A catalog item
///
/// The sole domain entity. Records are only ever created, never updated or
/// deleted, and live in memory for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
  /// Unique identifier, assigned by the store as `len + 1`
  pub id: u64,

  /// Item name (non-empty)
  pub name: String,

  /// Item description (non-empty)
  pub description: String,
}

impl Item {
  /// Constructor for Item
  pub fn new(id: u64, name: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      id,
      name: name.into(),
      description: description.into(),
    }
  }
}

/// A not-yet-stored item, as submitted by a client
///
/// The id is assigned by [`ItemStore::create`](crate::store::ItemStore::create),
/// not by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
  /// Item name
  pub name: String,

  /// Item description
  pub description: String,
}

impl NewItem {
  /// Constructor for NewItem
  pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      description: description.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn item_new_accepts_string_and_str() {
    let item1 = Item::new(1, String::from("Item 1"), String::from("first"));
    assert_eq!(item1.id, 1);
    assert_eq!(item1.name, "Item 1");

    let item2 = Item::new(2, "Item 2", "second");
    assert_eq!(item2.description, "second");
  }

  #[test]
  fn item_serializes_correctly() {
    let item = Item::new(1, "Item 1", "This is the first item");

    let json = serde_json::to_string(&item).expect("should serialize");
    assert!(json.contains("\"id\":1"));
    assert!(json.contains("\"name\":\"Item 1\""));
    assert!(json.contains("\"description\":\"This is the first item\""));
  }

  #[test]
  fn item_deserializes_correctly() {
    let json = r#"{"id": 3, "name": "Item 3", "description": "This is the third item"}"#;

    let item: Item = serde_json::from_str(json).expect("should deserialize");
    assert_eq!(item.id, 3);
    assert_eq!(item.name, "Item 3");
    assert_eq!(item.description, "This is the third item");
  }
}
