use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use mealplan_core::model::{FlatPlan, Layout, Plan, SlottedPlan};
use mealplan_core::storage::{FileStore, PlanRepository};
use mealplan_core::store::PlanStore;

use super::{open_repository, parse_location};

#[derive(Args)]
pub struct AddArgs {
    /// Day (`monday`) or day and meal slot (`monday/breakfast`)
    pub location: String,

    /// Item text; leaving it out or passing "" adds nothing
    pub text: Option<String>,
}

pub fn run(args: &AddArgs, dir: &Path) -> Result<()> {
    let (repo, layout) = open_repository(dir)?;
    match layout {
        Layout::Flat => add::<FlatPlan>(repo, args),
        Layout::Slotted => add::<SlottedPlan>(repo, args),
    }
}

fn add<P: Plan>(repo: PlanRepository<FileStore>, args: &AddArgs) -> Result<()> {
    let at = parse_location::<P>(&args.location)?;
    let mut store = PlanStore::<P, _>::open(repo);

    let added = store
        .add_item(at, args.text.as_deref())
        .context("Failed to save meal plan")?;
    match args.text.as_deref() {
        Some(text) if added => println!("Added \"{text}\" to {at}."),
        _ => println!("Nothing added."),
    }
    Ok(())
}
