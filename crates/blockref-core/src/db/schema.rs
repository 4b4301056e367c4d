//! SQLite database schema for blockref

use rusqlite::{Connection, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 2;

/// Result of schema creation - indicates whether the index must be rebuilt
#[derive(Debug, PartialEq, Eq)]
pub enum SchemaCreateResult {
    /// Schema created or already current
    Ok,
    /// Schema was recreated from scratch, existing index data is gone
    NeedsRebuild,
}

const SCHEMA_SQL: &str = r#"
-- Addressable blocks
CREATE TABLE IF NOT EXISTS blocks (
    id TEXT PRIMARY KEY,
    file_path TEXT NOT NULL,
    line_start INTEGER NOT NULL,
    line_end INTEGER NOT NULL,
    block_type TEXT NOT NULL,
    heading_path TEXT NOT NULL DEFAULT '',
    content TEXT NOT NULL,
    content_hash TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_blocks_location ON blocks(file_path, line_start);

-- Block references; duplicates and dangling targets are allowed
CREATE TABLE IF NOT EXISTS refs (
    from_block_id TEXT NOT NULL,
    to_block_id TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_refs_from ON refs(from_block_id);
CREATE INDEX IF NOT EXISTS idx_refs_to ON refs(to_block_id);

-- Index metadata
CREATE TABLE IF NOT EXISTS index_meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

// Rows share their rowid with the matching `blocks` row
const FTS_SQL: &str = r#"
CREATE VIRTUAL TABLE IF NOT EXISTS blocks_fts USING fts5(
    id UNINDEXED,
    content,
    tokenize='unicode61'
);
"#;

fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute("DROP TABLE IF EXISTS blocks", [])?;
    conn.execute("DROP TABLE IF EXISTS blocks_fts", [])?;
    conn.execute("DROP TABLE IF EXISTS refs", [])?;
    conn.execute("DROP TABLE IF EXISTS index_meta", [])?;
    Ok(())
}

/// Create the full-text table, recording whether this SQLite build supports it
fn create_fts(conn: &Connection) -> Result<bool> {
    let enabled = match conn.execute_batch(FTS_SQL) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Full-text search unavailable, using substring search");
            false
        }
    };
    set_meta(conn, "fts_enabled", if enabled { "1" } else { "0" })?;
    Ok(enabled)
}

fn set_meta(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO index_meta (key, value) VALUES (?1, ?2)",
        [key, value],
    )?;
    Ok(())
}

fn create_fresh(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    set_meta(
        conn,
        "schema_version",
        &CURRENT_SCHEMA_VERSION.to_string(),
    )?;
    create_fts(conn)?;
    Ok(())
}

pub fn create_schema(conn: &Connection) -> Result<SchemaCreateResult> {
    let current_version: Option<i32> = conn
        .query_row(
            "SELECT value FROM index_meta WHERE key = 'schema_version'",
            [],
            |r| r.get::<_, String>(0).map(|s| s.parse().unwrap_or(0)),
        )
        .ok();

    let result = match current_version {
        None => {
            create_fresh(conn)?;
            SchemaCreateResult::Ok
        }
        Some(v) if v == CURRENT_SCHEMA_VERSION => {
            // Re-run idempotent DDL so `init` repairs a partially created store
            conn.execute_batch(SCHEMA_SQL)?;
            if fts_state(conn).is_none() {
                create_fts(conn)?;
            }
            SchemaCreateResult::Ok
        }
        Some(v) => {
            drop_all_tables(conn)?;
            create_fresh(conn)?;
            tracing::info!(
                "Database schema updated from version {} to {}",
                v,
                CURRENT_SCHEMA_VERSION
            );
            SchemaCreateResult::NeedsRebuild
        }
    };

    Ok(result)
}

fn fts_state(conn: &Connection) -> Option<bool> {
    conn.query_row(
        "SELECT value FROM index_meta WHERE key = 'fts_enabled'",
        [],
        |r| r.get::<_, String>(0),
    )
    .ok()
    .map(|v| v == "1")
}

/// Whether the store was created with a working full-text index
pub fn fts_enabled(conn: &Connection) -> bool {
    fts_state(conn).unwrap_or(false)
}

#[cfg(test)]
pub fn force_set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    set_meta(conn, "schema_version", &version.to_string())
}
