//! Terminal rendering: the plan table and the dashboard block.

use crate::core::DashboardStats;
use crate::models::LessonPlan;
use crate::utils::colors::{CYAN, GREEN, RESET, colors_enabled};
use crate::utils::table::{Column, Table};
use crate::view::sort::sort_by_date;

pub const EMPTY_MESSAGE: &str = "No lesson plans found.";

#[derive(Debug, Clone)]
pub struct TableOptions {
    pub topic_width: usize,
    pub show_created_at: bool,
    pub separator: char,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            topic_width: 40,
            show_created_at: false,
            separator: '-',
        }
    }
}

fn status_mark(plan: &LessonPlan) -> &'static str {
    if plan.status.is_completed() {
        "✓ Completed"
    } else {
        "• Planned"
    }
}

/// Replace control characters (ESC, BEL, CR, ...) with U+FFFD so stored
/// text cannot drive the terminal. Line breaks are kept.
pub fn sanitize_for_terminal(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_control() && c != '\n' {
                '\u{FFFD}'
            } else {
                c
            }
        })
        .collect()
}

/// Sorted table of `plans`. The ID column is what `toggle` and `del` take.
pub fn render_plan_table(plans: &[LessonPlan], opts: &TableOptions) -> String {
    let sorted = sort_by_date(plans);
    if sorted.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let mut columns = vec![
        Column::new("ID", 22),
        Column::new("Date", 10),
        Column::new("Subject / Class", 16),
        Column::new("Topic", 5),
        Column::new("Type", 8),
        Column::new("Status", 11),
        Column::new("Teacher", 8),
    ];
    if opts.show_created_at {
        columns.push(Column::new("Created", 24));
    }

    let mut table = Table::new(columns).with_separator(opts.separator);
    let wrap = opts.topic_width.max(8);

    for p in &sorted {
        let subject = if p.class_section.is_empty() {
            sanitize_for_terminal(&p.subject)
        } else {
            format!(
                "{}\n{}",
                sanitize_for_terminal(&p.subject),
                sanitize_for_terminal(&p.class_section)
            )
        };
        let topic = textwrap::wrap(&sanitize_for_terminal(&p.topic), wrap).join("\n");

        let mut row = vec![
            sanitize_for_terminal(&p.id),
            sanitize_for_terminal(&p.date),
            subject,
            topic,
            sanitize_for_terminal(&p.lesson_type),
            status_mark(p).to_string(),
            sanitize_for_terminal(&p.teacher),
        ];
        if opts.show_created_at {
            row.push(sanitize_for_terminal(&p.created_at));
        }
        table.add_row(row);
    }

    table.render()
}

pub fn render_dashboard(stats: &DashboardStats) -> String {
    let mut out = String::new();
    for (label, value) in stats.rows() {
        let label = format!("{label}:");
        if colors_enabled() {
            out.push_str(&format!("{CYAN}• {label:<16}{RESET} {GREEN}{value}{RESET}\n"));
        } else {
            out.push_str(&format!("• {label:<16} {value}\n"));
        }
    }
    out
}
