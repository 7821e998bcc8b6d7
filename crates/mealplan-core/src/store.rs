use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::error::CoreError;
use crate::model::Plan;
use crate::mutate;
use crate::storage::{KeyValueStore, PlanRepository};
use crate::transfer::{self, ExportFile};

/// Owns the current plan and writes every change through to storage.
pub struct PlanStore<P, S> {
    plan: P,
    repo: PlanRepository<S>,
}

impl<P: Plan, S: KeyValueStore> PlanStore<P, S> {
    /// Start from the persisted plan, or the empty plan if there is none.
    ///
    /// An unreadable record is logged and replaced by the empty plan on the
    /// next save.
    pub fn open(repo: PlanRepository<S>) -> Self {
        let plan = match repo.load_plan::<P>() {
            Ok(Some(plan)) => plan,
            Ok(None) => P::default(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable saved meal plan: {e}");
                P::default()
            }
        };
        Self { plan, repo }
    }

    /// Like [`PlanStore::open`], but fails on an unreadable record.
    pub fn try_open(repo: PlanRepository<S>) -> Result<Self, CoreError> {
        let plan = repo.load_plan::<P>()?.unwrap_or_default();
        Ok(Self { plan, repo })
    }

    pub fn plan(&self) -> &P {
        &self.plan
    }

    pub fn repository(&self) -> &PlanRepository<S> {
        &self.repo
    }

    pub fn into_repository(self) -> PlanRepository<S> {
        self.repo
    }

    /// Append an item. Returns `false`, without saving, for cancelled input.
    pub fn add_item(&mut self, at: P::Location, text: Option<&str>) -> Result<bool, CoreError> {
        if text.map_or(true, str::is_empty) {
            tracing::debug!(location = %at, "Add cancelled");
            return Ok(false);
        }
        let next = mutate::add_item(&self.plan, at, text);
        self.commit(next)?;
        Ok(true)
    }

    /// Remove the item at `index`, returning it. A bad index removes nothing.
    pub fn delete_item(&mut self, at: P::Location, index: i64) -> Result<Option<String>, CoreError> {
        let removed = usize::try_from(index)
            .ok()
            .and_then(|i| self.plan.items(at).get(i).cloned());
        let next = mutate::delete_item(&self.plan, at, index);
        self.commit(next)?;
        Ok(removed)
    }

    /// Remove the item at `index`, failing if there is none.
    pub fn try_delete_item(&mut self, at: P::Location, index: i64) -> Result<String, CoreError> {
        let next = mutate::try_delete_item(&self.plan, at, index)?;
        let removed = self.plan.items(at)[index as usize].clone();
        self.commit(next)?;
        Ok(removed)
    }

    /// Replace the plan with the contents of an uploaded file.
    pub fn import(&mut self, content: &str) -> Result<(), CoreError> {
        let plan = transfer::import_plan(content)?;
        self.replace(plan)
    }

    /// Replace the whole plan.
    pub fn replace(&mut self, plan: P) -> Result<(), CoreError> {
        tracing::info!(items = plan.item_count(), "Meal plan replaced");
        self.commit(plan)
    }

    /// Package the last saved plan for download.
    pub fn export<Tz>(&self, at: &DateTime<Tz>) -> Result<Option<ExportFile>, CoreError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        transfer::export_plan(&self.repo, at)
    }

    fn commit(&mut self, next: P) -> Result<(), CoreError> {
        self.repo.save_plan(&next)?;
        self.plan = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Day, FlatPlan, MealRef, MealSlot, SlottedPlan};
    use crate::storage::{FileStore, MemoryStore, PLAN_KEY};
    use chrono::Utc;
    use tempfile::TempDir;

    fn memory_store<P: Plan>() -> PlanStore<P, MemoryStore> {
        PlanStore::open(PlanRepository::new(MemoryStore::new()))
    }

    #[test]
    fn test_open_empty_storage_uses_default_plan() {
        let store: PlanStore<SlottedPlan, _> = memory_store();
        assert_eq!(store.plan(), &SlottedPlan::default());
        assert_eq!(store.repository().load_raw().unwrap(), None);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let mut store: PlanStore<FlatPlan, _> = memory_store();
        assert!(store.add_item(Day::Monday, Some("oatmeal")).unwrap());
        assert!(store.add_item(Day::Monday, Some("toast")).unwrap());
        assert_eq!(
            store.repository().load_plan::<FlatPlan>().unwrap().as_ref(),
            Some(store.plan())
        );

        assert_eq!(
            store.delete_item(Day::Monday, 0).unwrap().as_deref(),
            Some("oatmeal")
        );
        let saved: FlatPlan = store.repository().load_plan().unwrap().unwrap();
        assert_eq!(saved.items(Day::Monday), ["toast"]);
    }

    #[test]
    fn test_cancelled_add_does_not_save() {
        let mut store: PlanStore<FlatPlan, _> = memory_store();
        assert!(!store.add_item(Day::Friday, None).unwrap());
        assert!(!store.add_item(Day::Friday, Some("")).unwrap());
        assert_eq!(store.repository().load_raw().unwrap(), None);
    }

    #[test]
    fn test_bad_delete_index_removes_nothing() {
        let mut store: PlanStore<FlatPlan, _> = memory_store();
        store.add_item(Day::Monday, Some("soup")).unwrap();
        assert_eq!(store.delete_item(Day::Monday, -1).unwrap(), None);
        assert_eq!(store.delete_item(Day::Monday, 9999).unwrap(), None);
        assert_eq!(store.plan().items(Day::Monday), ["soup"]);

        assert!(matches!(
            store.try_delete_item(Day::Monday, 3),
            Err(CoreError::IndexOutOfRange { len: 1, .. })
        ));
        assert_eq!(store.try_delete_item(Day::Monday, 0).unwrap(), "soup");
        assert!(store.plan().monday.is_empty());
    }

    #[test]
    fn test_reopen_restores_saved_plan() {
        let tmp = TempDir::new().unwrap();
        let at = MealRef::new(Day::Wednesday, MealSlot::Dinner);
        let mut store: PlanStore<SlottedPlan, _> =
            PlanStore::open(PlanRepository::new(FileStore::new(tmp.path())));
        store.add_item(at, Some("curry")).unwrap();
        let expected = store.plan().clone();
        drop(store);

        let reopened: PlanStore<SlottedPlan, _> =
            PlanStore::open(PlanRepository::new(FileStore::new(tmp.path())));
        assert_eq!(reopened.plan(), &expected);
    }

    #[test]
    fn test_corrupt_storage_falls_back_to_default() {
        let mut backing = MemoryStore::new();
        backing.set(PLAN_KEY, "{\"monday\": [").unwrap();

        assert!(matches!(
            PlanStore::<FlatPlan, _>::try_open(PlanRepository::new(backing.clone())),
            Err(CoreError::Parse(_))
        ));

        let mut store: PlanStore<FlatPlan, _> = PlanStore::open(PlanRepository::new(backing));
        assert_eq!(store.plan(), &FlatPlan::default());
        store.add_item(Day::Sunday, Some("pancakes")).unwrap();
        assert!(store.repository().load_plan::<FlatPlan>().unwrap().is_some());
    }

    #[test]
    fn test_import_replaces_and_saves() {
        let mut store: PlanStore<FlatPlan, _> = memory_store();
        store.add_item(Day::Monday, Some("old")).unwrap();

        let mut incoming = FlatPlan::default();
        incoming.saturday = vec!["brunch".into()];
        let content = serde_json::to_string(&incoming).unwrap();
        store.import(&content).unwrap();

        assert_eq!(store.plan(), &incoming);
        assert_eq!(
            store.repository().load_plan::<FlatPlan>().unwrap(),
            Some(incoming)
        );
    }

    #[test]
    fn test_rejected_import_keeps_current_plan() {
        let mut store: PlanStore<FlatPlan, _> = memory_store();
        store.add_item(Day::Monday, Some("keep me")).unwrap();
        let before = store.plan().clone();

        assert!(matches!(
            store.import("{\"monday\": 42}"),
            Err(CoreError::Import(_))
        ));
        assert_eq!(store.plan(), &before);
        assert_eq!(
            store.repository().load_plan::<FlatPlan>().unwrap(),
            Some(before)
        );
    }

    #[test]
    fn test_export_reflects_saved_state() {
        let mut store: PlanStore<FlatPlan, _> = memory_store();
        assert_eq!(store.export(&Utc::now()).unwrap(), None);

        store.add_item(Day::Tuesday, Some("tacos")).unwrap();
        let file = store.export(&Utc::now()).unwrap().unwrap();
        let exported: FlatPlan = serde_json::from_str(&file.content).unwrap();
        assert_eq!(&exported, store.plan());
        assert!(file.filename.starts_with("mealplan_"));
        assert!(file.filename.ends_with(".json"));
    }
}
