// src/export/html.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::LessonPlan;
use crate::ui::messages::info;
use crate::view::html::render_document;
use std::fs;
use std::path::Path;

/// Standalone HTML page: dashboard over `all`, sorted table over `shown`.
pub(crate) fn export_html(
    all: &[LessonPlan],
    shown: &[LessonPlan],
    path: &Path,
    title: &str,
) -> AppResult<()> {
    info(format!("Exporting to HTML: {}", path.display()));

    fs::write(path, render_document(title, all, shown))?;

    notify_export_success("HTML", path, shown.len());
    Ok(())
}
