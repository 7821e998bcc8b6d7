pub mod day;
pub mod plan;
pub mod slot;
pub mod week;

pub use day::Day;
pub use plan::{Layout, Location, Plan};
pub use slot::{MealRef, MealSlot, Meals};
pub use week::Week;

/// Ordered free-text entries for one location. Duplicates are allowed.
pub type ItemList = Vec<String>;

/// One list of items per day.
pub type FlatPlan = Week<ItemList>;

/// One list of items per meal slot per day.
pub type SlottedPlan = Week<Meals>;
