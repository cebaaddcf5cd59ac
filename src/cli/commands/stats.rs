use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::view::terminal::render_dashboard;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Stats) {
        let mut pool = DbPool::open(&cfg.database)?;
        let store = open_store(&mut pool, cfg)?;

        header(format!("Dashboard ({})", store.key()));
        print!("{}", render_dashboard(&store.aggregate()));
    }

    Ok(())
}
