use crate::db::migrate::SCHEMA_VERSION;
use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, storage_key: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(&pool.path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, pool.path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) SCHEMA
    //
    let version: i64 = pool
        .conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    println!(
        "{}• Schema:{} v{} (supported v{})",
        CYAN, RESET, version, SCHEMA_VERSION
    );

    //
    // 3) STORED KEYS
    //
    let keys: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM storage", [], |row| row.get(0))?;
    println!("{}• Stored keys:{} {}{}{}", CYAN, RESET, GREEN, keys, RESET);

    //
    // 4) PLAN COLLECTION
    //
    let payload: Option<(String, String)> = pool
        .conn
        .query_row(
            "SELECT value, updated_at FROM storage WHERE key = ?1",
            [storage_key],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    println!("{}• Collection:{} {}", CYAN, RESET, storage_key);
    match payload {
        Some((value, updated_at)) => {
            let count = serde_json::from_str::<Vec<serde_json::Value>>(&value)
                .map(|v| v.len().to_string())
                .unwrap_or_else(|_| format!("{GREY}unreadable{RESET}"));
            println!("    plans:   {}", count);
            println!("    payload: {} bytes", value.len());
            if !updated_at.is_empty() {
                println!("    updated: {}", updated_at);
            }
        }
        None => println!("    {GREY}--{RESET}"),
    }

    println!();
    Ok(())
}
