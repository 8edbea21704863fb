// src/export/mod.rs

mod csv;
mod json;
mod model;

pub use model::DayExport;

use crate::errors::AppResult;
use crate::models::grid::GridItem;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for all export formats.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Export a built month grid to the given file.
pub fn export_grid(grid: &[GridItem], format: &ExportFormat, path: &str) -> AppResult<()> {
    let rows = model::grid_to_rows(grid);

    match format {
        ExportFormat::Csv => csv::write_csv(path, &rows)?,
        ExportFormat::Json => json::write_json(path, &rows)?,
    }

    notify_export_success(format.as_str(), Path::new(path));
    Ok(())
}
