use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion state of a lesson plan.
///
/// The serialized form ("Planned" / "Completed") is the one kept in storage
/// and in JSON/CSV exports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanStatus {
    #[default]
    Planned,
    Completed,
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Planned => "Planned",
            PlanStatus::Completed => "Completed",
        }
    }

    /// The only transition: Planned <-> Completed.
    pub fn toggled(self) -> Self {
        match self {
            PlanStatus::Planned => PlanStatus::Completed,
            PlanStatus::Completed => PlanStatus::Planned,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, PlanStatus::Completed)
    }

    /// Parse user input (case-insensitive).
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "planned" => Ok(PlanStatus::Planned),
            "completed" => Ok(PlanStatus::Completed),
            _ => Err(AppError::InvalidStatus(s.to_string())),
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
