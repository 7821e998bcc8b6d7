pub mod add;
pub mod export;
pub mod import;
pub mod init;
pub mod remove;
pub mod show;
pub mod slots;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;
use mealplan_core::config::MealPlanConfig;
use mealplan_core::model::{Layout, Plan};
use mealplan_core::storage::{FileStore, PlanRepository};

#[derive(Subcommand)]
pub enum Commands {
    /// Create a meal plan in the data directory
    Init(init::InitArgs),
    /// Add an item to a day (or a day's meal slot)
    Add(add::AddArgs),
    /// Remove an item by its position
    Remove(remove::RemoveArgs),
    /// Show the week, or a single list
    Show(show::ShowArgs),
    /// Write the saved plan to a timestamped JSON file
    Export(export::ExportArgs),
    /// Replace the plan with the contents of a JSON file
    Import(import::ImportArgs),
    /// List the meal slots of the slotted layout
    Slots,
}

/// Open the store in `dir` and read which layout it holds.
pub fn open_repository(dir: &Path) -> Result<(PlanRepository<FileStore>, Layout)> {
    let store = FileStore::new(dir);
    if !MealPlanConfig::exists(&store).context("Failed to read configuration")? {
        anyhow::bail!(
            "No meal plan in {}. Run `mealplan init` first.",
            dir.display()
        );
    }
    let config = MealPlanConfig::load(&store).context("Failed to read configuration")?;
    Ok((PlanRepository::new(store), config.layout))
}

/// Parse a location for the plan shape `P`.
pub fn parse_location<P: Plan>(raw: &str) -> Result<P::Location> {
    let hint = match P::LAYOUT {
        Layout::Flat => "a day, e.g. `monday`",
        Layout::Slotted => "day/slot, e.g. `monday/breakfast`",
    };
    raw.parse::<P::Location>()
        .with_context(|| format!("This is a {} plan; expected {hint}", P::LAYOUT))
}
