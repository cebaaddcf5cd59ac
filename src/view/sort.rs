use crate::models::LessonPlan;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse the loose date shapes a plan may carry, as a UTC instant.
///
/// RFC 3339 values are converted to UTC through their offset. Values without
/// an offset (plain dates and naive date-times) are taken as UTC already.
/// Returns `None` for empty or unrecognised values.
pub fn parse_plan_date(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    None
}

/// Display order: ascending by date, undated or unparseable plans last.
/// The sort is stable, so ties keep their stored order.
pub fn sort_by_date(plans: &[LessonPlan]) -> Vec<LessonPlan> {
    let mut keyed: Vec<(Option<NaiveDateTime>, &LessonPlan)> =
        plans.iter().map(|p| (parse_plan_date(&p.date), p)).collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    keyed.into_iter().map(|(_, p)| p.clone()).collect()
}
