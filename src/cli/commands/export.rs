use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let mut pool = DbPool::open(&cfg.database)?;
        let store = open_store(&mut pool, cfg)?;

        let shown = match filter {
            Some(term) => store.filter(term),
            None => store.plans().to_vec(),
        };

        ExportLogic::export(store.plans(), &shown, *format, file, *force)?;

        ttlog_soft(
            &store.storage().pool().conn,
            "export",
            format.as_str(),
            &format!("Exported {} plan(s) to {}", shown.len(), file),
        );
    }
    Ok(())
}
