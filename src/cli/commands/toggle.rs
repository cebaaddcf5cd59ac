use crate::cli::commands::{open_store, refresh_view};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_status;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle { id } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        let mut store = open_store(&mut pool, cfg)?;

        match store.toggle_status(id)? {
            Some(status) => {
                ttlog_soft(
                    &store.storage().pool().conn,
                    "toggle",
                    id,
                    &format!("Status set to {status}"),
                );
                success(format!(
                    "Lesson plan {} is now {}.",
                    id,
                    colorize_status(status)
                ));
                refresh_view(store.plans(), cfg);
            }
            None => info(format!("No lesson plan with id '{id}'. Nothing changed.")),
        }
    }

    Ok(())
}
