use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use mealplan_core::model::{FlatPlan, Layout, Plan, SlottedPlan};
use mealplan_core::storage::{FileStore, PlanRepository};
use mealplan_core::store::PlanStore;

use super::{open_repository, parse_location};
use crate::output::format::{format_items, format_plan};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ShowArgs {
    /// Only show this day (or day/slot)
    pub location: Option<String>,
}

pub fn run(args: &ShowArgs, dir: &Path, format: OutputFormat) -> Result<()> {
    let (repo, layout) = open_repository(dir)?;
    match layout {
        Layout::Flat => show::<FlatPlan>(repo, args, format),
        Layout::Slotted => show::<SlottedPlan>(repo, args, format),
    }
}

fn show<P: Plan>(
    repo: PlanRepository<FileStore>,
    args: &ShowArgs,
    format: OutputFormat,
) -> Result<()> {
    let store = PlanStore::<P, _>::try_open(repo).context("Failed to read saved meal plan")?;

    let output = match &args.location {
        Some(raw) => format_items(store.plan(), parse_location::<P>(raw)?, format),
        None => format_plan(store.plan(), format),
    };
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
