use crate::cli::commands::{open_store, refresh_view};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Confirm, DeleteOutcome};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::{AssumeYes, StdinConfirm};
use crate::utils::colors::colorize_optional;
use crate::view::terminal::sanitize_for_terminal;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        let mut store = open_store(&mut pool, cfg)?;

        let mut confirm: Box<dyn Confirm> = if *yes || !cfg.confirm_delete {
            Box::new(AssumeYes)
        } else {
            Box::new(StdinConfirm)
        };

        match store.delete(id, confirm.as_mut())? {
            DeleteOutcome::Deleted(plan) => {
                ttlog_soft(
                    &store.storage().pool().conn,
                    "del",
                    &plan.id,
                    &format!("Deleted '{}' ({})", plan.topic, plan.subject),
                );
                success(format!(
                    "Lesson plan {} ({} {}) has been deleted.",
                    sanitize_for_terminal(&plan.id),
                    colorize_optional(&sanitize_for_terminal(&plan.subject)),
                    colorize_optional(&sanitize_for_terminal(&plan.date))
                ));
                refresh_view(store.plans(), cfg);
            }
            DeleteOutcome::Cancelled => info("Operation cancelled."),
            DeleteOutcome::NotFound => {
                info(format!("No lesson plan with id '{id}'. Nothing deleted."))
            }
        }
    }

    Ok(())
}
