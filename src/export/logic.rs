// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::html::export_html;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::LessonPlan;
use crate::ui::messages::warning;
use crate::view::sort_by_date;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export lesson plans.
    ///
    /// - `all`: the full collection (dashboard counts in HTML)
    /// - `shown`: the plans to write, already filtered; written in date order
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    pub fn export(
        all: &[LessonPlan],
        shown: &[LessonPlan],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        if shown.is_empty() {
            warning("No lesson plans found for the selected filter.");
        }

        let ordered = sort_by_date(shown);

        match format {
            ExportFormat::Html => export_html(all, &ordered, path, "Lesson Planner")?,
            ExportFormat::Json => export_json(&ordered, path)?,
            ExportFormat::Csv => export_csv(&ordered, path)?,
        }

        Ok(())
    }
}
