use crate::error::CoreError;
use crate::model::Plan;

use super::kv::KeyValueStore;

/// Record key the plan is persisted under.
pub const PLAN_KEY: &str = "mealplan";

/// Loads and saves the plan record of a [`KeyValueStore`].
#[derive(Debug)]
pub struct PlanRepository<S> {
    store: S,
}

impl<S: KeyValueStore> PlanRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted plan, or `None` if nothing has been saved yet.
    pub fn load_plan<P: Plan>(&self) -> Result<Option<P>, CoreError> {
        self.load_raw()?
            .map(|raw| serde_json::from_str(&raw).map_err(CoreError::Parse))
            .transpose()
    }

    /// The persisted plan exactly as stored.
    pub fn load_raw(&self) -> Result<Option<String>, CoreError> {
        self.store.get(PLAN_KEY)
    }

    pub fn save_plan<P: Plan>(&mut self, plan: &P) -> Result<(), CoreError> {
        let json = serde_json::to_string(plan)
            .map_err(|e| CoreError::Config(format!("Failed to serialize meal plan: {e}")))?;
        self.store.set(PLAN_KEY, &json)?;
        let layout = P::LAYOUT;
        tracing::debug!(%layout, items = plan.item_count(), "Meal plan saved");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
