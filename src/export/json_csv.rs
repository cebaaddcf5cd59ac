// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::LessonPlan;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed, same field names as the stored collection.
pub(crate) fn export_json(plans: &[LessonPlan], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(plans)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path, plans.len());
    Ok(())
}

/// Export CSV (header taken from the serialized field names).
pub(crate) fn export_csv(plans: &[LessonPlan], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    if plans.is_empty() {
        wtr.write_record([
            "id",
            "teacher",
            "subject",
            "classSection",
            "topic",
            "type",
            "date",
            "status",
            "createdAt",
        ])
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    for item in plans {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path, plans.len());
    Ok(())
}
