use crate::db::log::ttlog_soft;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::Connection;

/// Schema version written to `PRAGMA user_version` by the last migration.
pub const SCHEMA_VERSION: i64 = 2;

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the key-value `storage` table holding serialized collections.
fn create_storage_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS storage (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Older files stored rows without `updated_at`.
fn migrate_add_updated_at(conn: &Connection) -> rusqlite::Result<()> {
    let mut stmt = conn.prepare("PRAGMA table_info('storage')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "updated_at" {
            return Ok(());
        }
    }

    conn.execute_batch("ALTER TABLE storage ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';")?;
    Ok(())
}

fn user_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
}

fn set_user_version(conn: &Connection, v: i64) -> rusqlite::Result<()> {
    conn.execute_batch(&format!("PRAGMA user_version = {v};"))
}

/// Bring the schema to [`SCHEMA_VERSION`]. Safe to call on every start.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current = user_version(conn)?;

    if current > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "database schema version {current} is newer than supported version {SCHEMA_VERSION}"
        )));
    }

    if current == SCHEMA_VERSION {
        return Ok(());
    }

    ensure_log_table(conn)?;

    if current < 1 {
        create_storage_table(conn)?;
        set_user_version(conn, 1)?;
    }

    if current < 2 {
        migrate_add_updated_at(conn)?;
        set_user_version(conn, 2)?;
    }

    if current > 0 {
        success(format!(
            "Database schema upgraded from v{current} to v{SCHEMA_VERSION}."
        ));
    }

    ttlog_soft(
        conn,
        "migration_applied",
        &format!("v{SCHEMA_VERSION}"),
        &format!("Schema migrated from v{current} to v{SCHEMA_VERSION}"),
    );

    Ok(())
}
