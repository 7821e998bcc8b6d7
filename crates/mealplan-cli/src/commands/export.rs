use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use mealplan_core::transfer::export_plan;

use super::open_repository;

#[derive(Args)]
pub struct ExportArgs {
    /// Directory to write the export file into
    #[arg(long, short, default_value = ".")]
    pub out: PathBuf,
}

pub fn run(args: &ExportArgs, dir: &Path) -> Result<()> {
    let (repo, _layout) = open_repository(dir)?;

    let Some(file) = export_plan(&repo, &Local::now()).context("Failed to read saved meal plan")?
    else {
        println!("Nothing to export yet.");
        return Ok(());
    };

    let path = file
        .write_to(&args.out)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;
    println!("Exported to {}", path.display());
    Ok(())
}
