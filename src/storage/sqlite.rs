use super::KeyValueStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

/// `storage` table backed store. Borrows the pool so the caller can keep
/// using the same connection for the internal log.
pub struct SqliteStore<'a> {
    pool: &'a mut DbPool,
}

impl<'a> SqliteStore<'a> {
    pub fn new(pool: &'a mut DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &*self.pool
    }
}

impl KeyValueStore for SqliteStore<'_> {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row(
                "SELECT value FROM storage WHERE key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.conn.execute(
            "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }
}
