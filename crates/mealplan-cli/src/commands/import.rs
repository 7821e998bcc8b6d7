use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use mealplan_core::model::{FlatPlan, Layout, Plan, SlottedPlan};
use mealplan_core::storage::{FileStore, PlanRepository};
use mealplan_core::store::PlanStore;
use mealplan_core::transfer::read_import_file;

use super::open_repository;

#[derive(Args)]
pub struct ImportArgs {
    /// JSON file previously written by `export`
    pub path: PathBuf,

    /// Only check the file (dry run)
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: &ImportArgs, dir: &Path) -> Result<()> {
    let (repo, layout) = open_repository(dir)?;
    match layout {
        Layout::Flat => import::<FlatPlan>(repo, args),
        Layout::Slotted => import::<SlottedPlan>(repo, args),
    }
}

fn import<P: Plan>(repo: PlanRepository<FileStore>, args: &ImportArgs) -> Result<()> {
    let plan: P = read_import_file(&args.path).with_context(|| {
        format!(
            "Failed to import {} as a {} meal plan",
            args.path.display(),
            P::LAYOUT
        )
    })?;
    let count = plan.item_count();

    if args.dry_run {
        println!("{} holds {count} item(s).", args.path.display());
        println!("(dry run - no changes made)");
        return Ok(());
    }

    let mut store = PlanStore::<P, _>::open(repo);
    store.replace(plan).context("Failed to save meal plan")?;
    println!("Imported {count} item(s) from {}.", args.path.display());
    Ok(())
}
