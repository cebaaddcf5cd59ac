pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod stats;
pub mod toggle;

use crate::config::Config;
use crate::core::PlanStore;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::LessonPlan;
use crate::storage::SqliteStore;
use crate::view::terminal::{TableOptions, render_plan_table};

/// Load the plan collection from the configured database.
/// A discarded corrupt payload is recorded in the internal log only.
pub(crate) fn open_store<'a>(
    pool: &'a mut DbPool,
    cfg: &Config,
) -> AppResult<PlanStore<SqliteStore<'a>>> {
    let store = PlanStore::load(SqliteStore::new(pool), &cfg.storage_key)?;

    if let Some(reason) = store.recovered_from_corruption() {
        ttlog_soft(
            &store.storage().pool().conn,
            "recover",
            &cfg.storage_key,
            &format!("Unreadable plan collection replaced by an empty one: {reason}"),
        );
    }

    Ok(store)
}

pub(crate) fn table_options(cfg: &Config, show_created_at: bool) -> TableOptions {
    TableOptions {
        topic_width: cfg.topic_width,
        show_created_at: show_created_at || cfg.show_created_at,
        separator: cfg.separator(),
    }
}

/// Re-render the table after a mutation.
pub(crate) fn refresh_view(plans: &[LessonPlan], cfg: &Config) {
    println!();
    print!("{}", render_plan_table(plans, &table_options(cfg, false)));
}
