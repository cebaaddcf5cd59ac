use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::storage::{KeyValueStore, SqliteStore};

use crate::db::pool::DbPool;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - an empty plan collection, unless one is already stored
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // `run()` already resolved `--db` into cfg.database
    let custom_db = cli.db.as_ref().map(|_| Path::new(&cfg.database));
    let db_path = Config::init_all(custom_db, cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing lessonplanner…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let mut pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    {
        let mut storage = SqliteStore::new(&mut pool);
        if storage.get_item(&cfg.storage_key)?.is_none() {
            storage.set_item(&cfg.storage_key, "[]")?;
        }
    }

    println!("✅ Database initialized at {}", &db_path);

    log::ttlog_soft(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 lessonplanner initialization completed!");
    Ok(())
}
