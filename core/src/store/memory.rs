// kundali/src/store/memory.rs

use crate::store::KeyValueStore;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-process store with the same semantics as browser local storage.
/// Used by tests and the terminal demo.
#[derive(Debug, Default)]
pub struct MemoryStore {
  entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> Option<String> {
    self.entries.read().get(key).cloned()
  }

  fn put(&self, key: &str, value: String) {
    self.entries.write().insert(key.to_string(), value);
  }

  fn remove(&self, key: &str) {
    self.entries.write().remove(key);
  }
}
