//! Key-value persistence for the plan collection.
//!
//! The whole collection lives under a single key as one JSON document, so the
//! backend only needs whole-value reads and writes.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;

/// Default key holding the serialized collection.
pub const DEFAULT_STORAGE_KEY: &str = "academicPlans";

pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when absent.
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;
}
