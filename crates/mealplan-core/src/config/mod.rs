pub mod settings;

pub use settings::{MealPlanConfig, CONFIG_KEY};
