/// ANSI color helper utilities for terminal output.
use crate::models::PlanStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Honors the NO_COLOR convention.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Completed → green, Planned → yellow.
pub fn color_for_status(status: PlanStatus) -> &'static str {
    match status {
        PlanStatus::Completed => GREEN,
        PlanStatus::Planned => YELLOW,
    }
}

pub fn colorize_status(status: PlanStatus) -> String {
    if colors_enabled() {
        format!("{}{}{}", color_for_status(status), status, RESET)
    } else {
        status.to_string()
    }
}

/// Grey placeholder for empty values.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        if colors_enabled() {
            format!("{GREY}--{RESET}")
        } else {
            "--".to_string()
        }
    } else {
        value.to_string()
    }
}
