use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use mealplan_core::model::{FlatPlan, Layout, Plan, SlottedPlan};
use mealplan_core::storage::{FileStore, PlanRepository};
use mealplan_core::store::PlanStore;

use super::{open_repository, parse_location};

#[derive(Args)]
pub struct RemoveArgs {
    /// Day (`monday`) or day and meal slot (`monday/breakfast`)
    pub location: String,

    /// Zero-based position of the item, as listed by `show`
    #[arg(allow_negative_numbers = true)]
    pub index: i64,

    /// Fail when there is no item at that position
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: &RemoveArgs, dir: &Path) -> Result<()> {
    let (repo, layout) = open_repository(dir)?;
    match layout {
        Layout::Flat => remove::<FlatPlan>(repo, args),
        Layout::Slotted => remove::<SlottedPlan>(repo, args),
    }
}

fn remove<P: Plan>(repo: PlanRepository<FileStore>, args: &RemoveArgs) -> Result<()> {
    let at = parse_location::<P>(&args.location)?;
    let mut store = PlanStore::<P, _>::open(repo);

    let removed = if args.strict {
        Some(
            store
                .try_delete_item(at, args.index)
                .context("Failed to remove item")?,
        )
    } else {
        store
            .delete_item(at, args.index)
            .context("Failed to save meal plan")?
    };

    match removed {
        Some(item) => println!("Removed \"{item}\" from {at}."),
        None => println!("No item {} in {at}, nothing removed.", args.index),
    }
    Ok(())
}
