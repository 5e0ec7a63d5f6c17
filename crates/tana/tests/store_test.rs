//! crates/tana/tests/store_test.rs
//!
//! End-to-end store test.
//! Verifies the full flow: seed -> list -> get -> create -> list again,
//! plus id uniqueness under concurrent writers.

use std::sync::Arc;
use std::thread;

use tana::{ItemStore, NewItem, StoreError};

#[test]
fn seeded_store_full_flow() {
  let store = ItemStore::with_sample_items();

  // Initial snapshot: three items in insertion order
  let items = store.snapshot().unwrap();
  assert_eq!(items.len(), 3);
  assert_eq!(
    items.iter().map(|i| i.id).collect::<Vec<_>>(),
    vec![1, 2, 3]
  );

  // Lookup by id
  let item = store.get(1).unwrap().expect("item 1 should exist");
  assert_eq!(item.description, "This is the first item");
  assert!(store.get(99).unwrap().is_none());

  // Append gets id = prior length + 1
  let created = store.create(NewItem::new("Item 4", "d")).unwrap();
  assert_eq!(created.id, 4);
  assert_eq!(created.name, "Item 4");

  // New item appears last, original order intact
  let items = store.snapshot().unwrap();
  assert_eq!(
    items.iter().map(|i| i.id).collect::<Vec<_>>(),
    vec![1, 2, 3, 4]
  );
  assert_eq!(items[3], created);
}

#[test]
fn rejected_creates_leave_store_untouched() {
  let store = ItemStore::with_sample_items();

  assert_eq!(
    store.create(NewItem::new("", "")).unwrap_err(),
    StoreError::EmptyName
  );
  assert_eq!(
    store.create(NewItem::new("named", "")).unwrap_err(),
    StoreError::EmptyDescription
  );

  assert_eq!(store.len().unwrap(), 3);
}

#[test]
fn concurrent_creates_assign_unique_ids() {
  const WRITERS: usize = 8;
  const PER_WRITER: usize = 50;

  let store = Arc::new(ItemStore::new());

  let handles: Vec<_> = (0..WRITERS)
    .map(|w| {
      let store = Arc::clone(&store);
      thread::spawn(move || {
        for n in 0..PER_WRITER {
          store
            .create(NewItem::new(format!("item-{w}-{n}"), "concurrent"))
            .expect("create should succeed");
        }
      })
    })
    .collect();

  for handle in handles {
    handle.join().expect("writer thread panicked");
  }

  let items = store.snapshot().unwrap();
  assert_eq!(items.len(), WRITERS * PER_WRITER);

  // Ids are exactly 1..=N with no duplicates and no gaps
  let mut ids: Vec<u64> = items.iter().map(|i| i.id).collect();
  ids.sort_unstable();
  let expected: Vec<u64> = (1..=(WRITERS * PER_WRITER) as u64).collect();
  assert_eq!(ids, expected);
}
