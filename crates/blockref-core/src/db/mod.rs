//! SQLite block index for blockref

mod blocks;
mod rebuild;
mod refs;
mod schema;
mod search;

use crate::error::{BlockrefError, Result};
use rusqlite::Connection;
use std::path::Path;

pub use rebuild::IndexStats;
pub use schema::{create_schema, SchemaCreateResult, CURRENT_SCHEMA_VERSION};
pub use search::MAX_SEARCH_LIMIT;

/// SQLite database holding blocks, references and the search index
#[derive(Debug)]
pub struct Database {
    conn: Connection,
    fts_enabled: bool,
}

impl Database {
    /// Open or create the database file, creating or upgrading the schema
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| BlockrefError::io_operation("create", parent.display(), e))?;
            }
        }

        let conn = Connection::open(db_path).map_err(|e| {
            BlockrefError::Other(format!(
                "failed to open database at {}: {}",
                db_path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| BlockrefError::db_operation("enable WAL mode", e))?;

        Self::from_connection(conn)
    }

    /// Open an in-memory database (tests and dry runs)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| BlockrefError::db_operation("open in-memory database", e))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let created = create_schema(&conn)
            .map_err(|e| BlockrefError::db_operation("create database schema", e))?;

        if created == SchemaCreateResult::NeedsRebuild {
            tracing::info!("Schema was recreated; run `blockref index` to repopulate");
        }

        let fts_enabled = schema::fts_enabled(&conn);
        Ok(Database { conn, fts_enabled })
    }

    /// Whether searches go through the full-text index
    pub fn fts_enabled(&self) -> bool {
        self.fts_enabled
    }

    pub fn get_block_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM blocks", [], |r| r.get(0))
            .map_err(|e| BlockrefError::db_operation("get block count", e))
    }

    pub fn get_reference_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM refs", [], |r| r.get(0))
            .map_err(|e| BlockrefError::db_operation("get reference count", e))
    }

    #[cfg(test)]
    pub fn get_schema_version(&self) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT value FROM index_meta WHERE key = 'schema_version'",
                [],
                |r| {
                    let s: String = r.get(0)?;
                    Ok(s.parse().unwrap_or(0))
                },
            )
            .map_err(|e| BlockrefError::db_operation("get schema version", e))
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        // Fold the WAL back into the main file before the process exits
        let _ = self.conn.pragma_update(None, "wal_checkpoint", "TRUNCATE");
    }
}
