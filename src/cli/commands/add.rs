use crate::cli::commands::{open_store, refresh_view};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{NewLessonPlan, PlanStatus};
use crate::ui::messages::success;

/// Create a lesson plan from the form flags.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        teacher,
        subject,
        class_section,
        topic,
        lesson_type,
        date,
        status,
    } = cmd
    {
        //
        // 1. Status is the only field with a closed set of values
        //
        let status = status.as_deref().map(PlanStatus::parse).transpose()?;

        let fields = NewLessonPlan {
            teacher: teacher.clone(),
            subject: subject.clone(),
            class_section: class_section.clone(),
            topic: topic.clone(),
            lesson_type: lesson_type.clone(),
            date: date.clone(),
            status,
        };

        //
        // 2. Store and persist
        //
        let mut pool = DbPool::open(&cfg.database)?;
        let mut store = open_store(&mut pool, cfg)?;
        let plan = store.create(fields)?;

        ttlog_soft(
            &store.storage().pool().conn,
            "add",
            &plan.id,
            &format!("Added '{}' for {} on {}", plan.topic, plan.subject, plan.date),
        );

        success(format!("Lesson plan added successfully! (id: {})", plan.id));

        //
        // 3. Notify view
        //
        refresh_view(store.plans(), cfg);
    }

    Ok(())
}
