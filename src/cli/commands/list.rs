use crate::cli::commands::{open_store, table_options};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::view::terminal::render_plan_table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, created } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        let store = open_store(&mut pool, cfg)?;

        let shown = match filter {
            Some(term) => {
                let matches = store.filter(term);
                info(format!(
                    "{} of {} lesson plan(s) match '{}'.",
                    matches.len(),
                    store.plans().len(),
                    term.trim()
                ));
                matches
            }
            None => store.plans().to_vec(),
        };

        print!("{}", render_plan_table(&shown, &table_options(cfg, *created)));
    }

    Ok(())
}
