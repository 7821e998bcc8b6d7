//! Export of the persisted plan to a timestamped file, and import of a
//! user-supplied file as the new plan.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use crate::error::CoreError;
use crate::model::Plan;
use crate::storage::{KeyValueStore, PlanRepository, PLAN_KEY};

pub const EXPORT_MIME: &str = "text/plain";

/// A file ready to be offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content: String,
    pub mime: &'static str,
}

impl ExportFile {
    /// Write the file into `dir` and return its path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, CoreError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.content)?;
        tracing::info!(path = %path.display(), "Meal plan exported");
        Ok(path)
    }
}

/// `mealplan_YYYY-MM-DD-HH-MM-SS.json`, zero-padded, 24-hour clock.
pub fn export_filename<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!("{PLAN_KEY}_{}.json", at.format("%Y-%m-%d-%H-%M-%S"))
}

/// Package the persisted plan for download.
///
/// Reads storage rather than any in-memory plan, so the file always holds the
/// last saved state. Returns `None` when nothing has been saved.
pub fn export_plan<S, Tz>(
    repo: &PlanRepository<S>,
    at: &DateTime<Tz>,
) -> Result<Option<ExportFile>, CoreError>
where
    S: KeyValueStore,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let Some(content) = repo.load_raw()? else {
        tracing::debug!("No saved meal plan, nothing to export");
        return Ok(None);
    };
    Ok(Some(ExportFile {
        filename: export_filename(at),
        content,
        mime: EXPORT_MIME,
    }))
}

/// Parse uploaded file content as a plan.
pub fn import_plan<P: Plan>(content: &str) -> Result<P, CoreError> {
    serde_json::from_str(content).map_err(CoreError::Import)
}

/// Read the whole file at `path`, then parse it as a plan.
pub fn read_import_file<P: Plan>(path: &Path) -> Result<P, CoreError> {
    let content = fs::read_to_string(path)?;
    import_plan(&content)
}
