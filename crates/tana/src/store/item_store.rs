//! In-memory item store

use std::sync::Mutex;

use crate::errors::{StoreError, StoreResult};
use crate::models::{Item, NewItem};

/// Ordered in-memory collection of items
///
/// Appends are serialized through a single mutex: validation, id assignment
/// (`len + 1`) and the push happen under one lock acquisition, so ids stay
/// unique and gap-free under concurrent writers.
///
/// The store is an explicit object rather than process-global state; the
/// server holds it behind an `Arc` and tests construct a fresh one each.
#[derive(Debug, Default)]
pub struct ItemStore {
  items: Mutex<Vec<Item>>,
}

impl ItemStore {
  /// Creates an empty store
  #[must_use]
  pub fn new() -> Self {
    Self {
      items: Mutex::new(Vec::new()),
    }
  }

  /// Creates a store seeded with the given items
  ///
  /// Callers are expected to pass items whose ids already follow the
  /// `len + 1` numbering; `create` continues from the current length.
  #[must_use]
  pub fn with_items(items: Vec<Item>) -> Self {
    Self {
      items: Mutex::new(items),
    }
  }

  /// Creates a store seeded with the three demo records
  #[must_use]
  pub fn with_sample_items() -> Self {
    Self::with_items(vec![
      Item::new(1, "Item 1", "This is the first item"),
      Item::new(2, "Item 2", "This is the second item"),
      Item::new(3, "Item 3", "This is the third item"),
    ])
  }

  /// Returns a full copy of the store in insertion order
  ///
  /// # Errors
  /// Returns [`StoreError::Poisoned`] if a previous writer panicked
  pub fn snapshot(&self) -> StoreResult<Vec<Item>> {
    let items = self.items.lock().map_err(|_| StoreError::Poisoned)?;
    Ok(items.clone())
  }

  /// Looks up an item by id with a linear scan
  ///
  /// # Errors
  /// Returns [`StoreError::Poisoned`] if a previous writer panicked
  pub fn get(&self, id: u64) -> StoreResult<Option<Item>> {
    let items = self.items.lock().map_err(|_| StoreError::Poisoned)?;
    Ok(items.iter().find(|item| item.id == id).cloned())
  }

  /// Validates and appends a new item, returning the stored record
  ///
  /// The id is assigned as `len + 1` under the same lock that performs the
  /// append, which is what makes the id invariant hold.
  ///
  /// # Errors
  /// - [`StoreError::EmptyName`] / [`StoreError::EmptyDescription`] if a
  ///   field fails the presence check (the store is not mutated)
  /// - [`StoreError::Poisoned`] if a previous writer panicked
  pub fn create(&self, new_item: NewItem) -> StoreResult<Item> {
    if new_item.name.is_empty() {
      return Err(StoreError::EmptyName);
    }
    if new_item.description.is_empty() {
      return Err(StoreError::EmptyDescription);
    }

    let mut items = self.items.lock().map_err(|_| StoreError::Poisoned)?;

    let item = Item {
      id: items.len() as u64 + 1,
      name: new_item.name,
      description: new_item.description,
    };
    items.push(item.clone());

    tracing::debug!(id = item.id, "item appended to store");

    Ok(item)
  }

  /// Number of stored items
  ///
  /// # Errors
  /// Returns [`StoreError::Poisoned`] if a previous writer panicked
  pub fn len(&self) -> StoreResult<usize> {
    let items = self.items.lock().map_err(|_| StoreError::Poisoned)?;
    Ok(items.len())
  }

  /// Whether the store holds no items
  ///
  /// # Errors
  /// Returns [`StoreError::Poisoned`] if a previous writer panicked
  pub fn is_empty(&self) -> StoreResult<bool> {
    Ok(self.len()? == 0)
  }
}
