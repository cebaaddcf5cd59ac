use crate::models::LessonPlan;
use serde::Serialize;
use std::collections::HashSet;

/// Dashboard counts, computed over the full collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_subjects: usize,
    pub total_classes: usize,
    pub planned: usize,
    pub completed: usize,
    pub exams: usize,
}

impl DashboardStats {
    pub fn compute(plans: &[LessonPlan]) -> Self {
        let subjects: HashSet<&str> = plans.iter().map(|p| p.subject.as_str()).collect();
        let classes: HashSet<&str> = plans.iter().map(|p| p.class_section.as_str()).collect();

        Self {
            total_subjects: subjects.len(),
            total_classes: classes.len(),
            planned: plans.len(),
            completed: plans.iter().filter(|p| p.status.is_completed()).count(),
            exams: plans.iter().filter(|p| p.is_exam()).count(),
        }
    }

    /// (label, value) pairs in display order.
    pub fn rows(&self) -> [(&'static str, usize); 5] {
        [
            ("Subjects", self.total_subjects),
            ("Classes", self.total_classes),
            ("Lessons planned", self.planned),
            ("Completed", self.completed),
            ("Upcoming exams", self.exams),
        ]
    }
}
