//! Core of the weekly meal planner.
//!
//! A plan maps every day of the week (and, for the slotted layout, every meal
//! slot of that day) to an ordered list of free-text items. Plans are never
//! edited in place: the functions in [`mutate`] return a new plan, and
//! [`store::PlanStore`] swaps it in and writes it through to a
//! [`storage::KeyValueStore`].
//!
//! ```no_run
//! use mealplan_core::model::{Day, FlatPlan, Plan};
//! use mealplan_core::storage::{FileStore, PlanRepository};
//! use mealplan_core::store::PlanStore;
//!
//! let repo = PlanRepository::new(FileStore::new(".mealplan"));
//! let mut store: PlanStore<FlatPlan, _> = PlanStore::open(repo);
//! store.add_item(Day::Monday, Some("oatmeal")).unwrap();
//! assert_eq!(store.plan().items(Day::Monday), ["oatmeal"]);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod mutate;
pub mod storage;
pub mod store;
pub mod transfer;

pub use error::CoreError;
