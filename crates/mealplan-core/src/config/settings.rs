use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::Layout;
use crate::storage::KeyValueStore;

/// Record key the configuration is stored under.
pub const CONFIG_KEY: &str = "config";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanConfig {
    #[serde(default)]
    pub layout: Layout,
}

impl MealPlanConfig {
    /// Read the configuration record. Absent record means defaults.
    pub fn load<S: KeyValueStore>(store: &S) -> Result<Self, CoreError> {
        match store.get(CONFIG_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| CoreError::Config(format!("Invalid config record: {e}"))),
            None => Ok(Self::default()),
        }
    }

    /// Write the configuration record, replacing any previous one.
    pub fn save<S: KeyValueStore>(&self, store: &mut S) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Config(format!("Failed to serialize config: {e}")))?;
        store.set(CONFIG_KEY, &json)
    }

    /// Whether a configuration record has been written to `store`.
    pub fn exists<S: KeyValueStore>(store: &S) -> Result<bool, CoreError> {
        Ok(store.get(CONFIG_KEY)?.is_some())
    }

    /// Config for `mealplan init`.
    pub fn default_init(layout: Layout) -> Self {
        Self { layout }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_absent_config_is_flat() {
        let store = MemoryStore::new();
        assert!(!MealPlanConfig::exists(&store).unwrap());
        assert_eq!(MealPlanConfig::load(&store).unwrap().layout, Layout::Flat);
    }

    #[test]
    fn test_config_save_load() {
        let mut store = MemoryStore::new();
        MealPlanConfig::default_init(Layout::Slotted)
            .save(&mut store)
            .unwrap();
        assert!(MealPlanConfig::exists(&store).unwrap());
        assert_eq!(
            MealPlanConfig::load(&store).unwrap().layout,
            Layout::Slotted
        );
        assert!(store.get(CONFIG_KEY).unwrap().unwrap().contains("\"slotted\""));
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let mut store = MemoryStore::new();
        store.set(CONFIG_KEY, r#"{"layout": "grid"}"#).unwrap();
        assert!(matches!(
            MealPlanConfig::load(&store),
            Err(CoreError::Config(_))
        ));
    }
}
