use super::plan_status::PlanStatus;
use serde::{Deserialize, Serialize};

/// Lesson type counted as an upcoming exam on the dashboard.
pub const EXAM_TYPE: &str = "Exam / Test";

/// A single scheduled teaching record.
///
/// Field names on the wire are camelCase (`classSection`, `createdAt`) and the
/// lesson type is stored as `type`. Records written by older versions may lack
/// fields; those default to an empty string (or `Planned` for the status).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LessonPlan {
    pub id: String,
    pub teacher: String,
    pub subject: String,
    pub class_section: String,
    pub topic: String,
    #[serde(rename = "type")]
    pub lesson_type: String,
    pub date: String,
    pub status: PlanStatus,
    pub created_at: String,
}

impl LessonPlan {
    pub fn is_exam(&self) -> bool {
        self.lesson_type == EXAM_TYPE
    }

    /// Case-insensitive substring match on subject, class/section and topic.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.subject.to_lowercase().contains(needle)
            || self.class_section.to_lowercase().contains(needle)
            || self.topic.to_lowercase().contains(needle)
    }
}

/// Caller-supplied values for a new lesson plan (the "form").
/// Absent values become empty strings; absent status becomes `Planned`.
#[derive(Debug, Clone, Default)]
pub struct NewLessonPlan {
    pub teacher: Option<String>,
    pub subject: Option<String>,
    pub class_section: Option<String>,
    pub topic: Option<String>,
    pub lesson_type: Option<String>,
    pub date: Option<String>,
    pub status: Option<PlanStatus>,
}

impl NewLessonPlan {
    pub(crate) fn into_plan(self, id: String, created_at: String) -> LessonPlan {
        LessonPlan {
            id,
            teacher: self.teacher.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            class_section: self.class_section.unwrap_or_default(),
            topic: self.topic.unwrap_or_default(),
            lesson_type: self.lesson_type.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            created_at,
        }
    }
}
