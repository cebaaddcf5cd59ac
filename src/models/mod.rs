pub mod lesson_plan;
pub mod plan_status;

pub use lesson_plan::{EXAM_TYPE, LessonPlan, NewLessonPlan};
pub use plan_status::PlanStatus;
