use std::collections::BTreeMap;

use crate::error::CoreError;

/// Durable string records addressed by key.
pub trait KeyValueStore {
    /// Read the record under `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Write `value` under `key`, replacing any previous record.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// In-process store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("mealplan").unwrap(), None);
        store.set("mealplan", "{}").unwrap();
        store.set("mealplan", "[]").unwrap();
        assert_eq!(store.get("mealplan").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get("other").unwrap(), None);
    }
}
