//! HTML rendering of the planner table and dashboard.
//!
//! Every user-supplied value goes through [`escape_html`] before it is placed
//! in markup.

use crate::core::DashboardStats;
use crate::models::LessonPlan;
use crate::view::sort::sort_by_date;

pub const EMPTY_ROW: &str =
    r#"<tr><td colspan="6" style="text-align:center;">No lesson plans found.</td></tr>"#;

/// Escape `& < > " '` for use in element text and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn status_class(plan: &LessonPlan) -> &'static str {
    if plan.status.is_completed() {
        "badge-completed"
    } else {
        "badge-planned"
    }
}

/// One `<tr>` for a plan, with toggle and delete actions keyed by id.
pub fn render_row(plan: &LessonPlan) -> String {
    let id = escape_html(&plan.id);
    format!(
        concat!(
            "<tr data-id=\"{id}\">",
            "<td>{date}</td>",
            "<td><strong>{subject}</strong><br><small>{class}</small></td>",
            "<td>{topic}</td>",
            "<td><span class=\"badge\">{kind}</span></td>",
            "<td><span class=\"badge {status_class}\">{status}</span></td>",
            "<td>",
            "<button data-action=\"toggle\" data-id=\"{id}\" title=\"Mark complete/incomplete\">&#10003;</button>",
            "<button class=\"btn-delete\" data-action=\"delete\" data-id=\"{id}\" title=\"Delete\">&#10005;</button>",
            "</td>",
            "</tr>"
        ),
        id = id,
        date = escape_html(&plan.date),
        subject = escape_html(&plan.subject),
        class = escape_html(&plan.class_section),
        topic = escape_html(&plan.topic),
        kind = escape_html(&plan.lesson_type),
        status_class = status_class(plan),
        status = escape_html(plan.status.as_str()),
    )
}

/// Table body for `plans`, sorted by date. Empty input gives the placeholder row.
pub fn render_rows(plans: &[LessonPlan]) -> String {
    let sorted = sort_by_date(plans);
    if sorted.is_empty() {
        return EMPTY_ROW.to_string();
    }

    sorted
        .iter()
        .map(render_row)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_dashboard(stats: &DashboardStats) -> String {
    let ids = [
        "stat-total-subjects",
        "stat-total-classes",
        "stat-planned",
        "stat-completed",
        "stat-exams",
    ];

    let cards: Vec<String> = stats
        .rows()
        .iter()
        .zip(ids)
        .map(|((label, value), id)| {
            format!(
                "<div class=\"stat-card\"><h3>{label}</h3><p id=\"{id}\">{value}</p></div>"
            )
        })
        .collect();

    format!("<section class=\"dashboard\">\n{}\n</section>", cards.join("\n"))
}

/// Standalone document: dashboard over `all`, table over `shown`.
pub fn render_document(title: &str, all: &[LessonPlan], shown: &[LessonPlan]) -> String {
    let stats = DashboardStats::compute(all);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; }}
.dashboard {{ display: flex; gap: 1rem; margin-bottom: 2rem; }}
.stat-card {{ border: 1px solid #ccc; border-radius: 6px; padding: 0.5rem 1rem; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border-bottom: 1px solid #ddd; padding: 0.4rem; text-align: left; }}
.badge {{ padding: 0.1rem 0.4rem; border-radius: 4px; background: #eee; }}
.badge-completed {{ background: #c8f7c5; }}
.badge-planned {{ background: #fdf2c4; }}
</style>
</head>
<body>
<h1>{title}</h1>
{dashboard}
<table>
<thead><tr><th>Date</th><th>Subject / Class</th><th>Topic</th><th>Type</th><th>Status</th><th>Actions</th></tr></thead>
<tbody id="planner-table-body">
{rows}
</tbody>
</table>
</body>
</html>
"#,
        title = escape_html(title),
        dashboard = render_dashboard(&stats),
        rows = render_rows(shown),
    )
}
