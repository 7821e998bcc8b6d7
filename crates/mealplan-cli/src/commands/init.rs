use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use mealplan_core::config::MealPlanConfig;
use mealplan_core::model::{FlatPlan, Layout, SlottedPlan};
use mealplan_core::storage::{FileStore, PlanRepository};

#[derive(Args)]
pub struct InitArgs {
    /// Plan shape: one list per day, or one list per meal slot per day
    #[arg(long, value_enum, default_value = "flat")]
    pub layout: LayoutArg,

    /// Re-initialize, discarding the current plan
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    Flat,
    Slotted,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Flat => Layout::Flat,
            LayoutArg::Slotted => Layout::Slotted,
        }
    }
}

pub fn run(args: &InitArgs, dir: &Path) -> Result<()> {
    let mut store = FileStore::new(dir);

    if MealPlanConfig::exists(&store).context("Failed to read configuration")? && !args.force {
        println!("A meal plan already exists in {}.", dir.display());
        println!("Use --force to re-initialize (this clears the current plan).");
        return Ok(());
    }

    let layout = Layout::from(args.layout);
    MealPlanConfig::default_init(layout)
        .save(&mut store)
        .context("Failed to write configuration")?;

    let mut repo = PlanRepository::new(store);
    let saved = match layout {
        Layout::Flat => repo.save_plan(&FlatPlan::default()),
        Layout::Slotted => repo.save_plan(&SlottedPlan::default()),
    };
    saved.context("Failed to write empty meal plan")?;
    tracing::info!(%layout, dir = %dir.display(), "Meal plan initialized");

    println!("Initialized a {layout} meal plan in {}.", dir.display());
    println!();
    println!("Next steps:");
    match layout {
        Layout::Flat => println!("  mealplan add monday \"oatmeal\"     Add an item"),
        Layout::Slotted => {
            println!("  mealplan add monday/breakfast \"oatmeal\"   Add an item")
        }
    }
    println!("  mealplan show                      Show the week");
    println!("  mealplan export                    Save a copy as JSON");
    Ok(())
}
