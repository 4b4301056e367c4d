use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::block::{Block, BlockType};
use crate::error::{BlockrefError, Result};

/// Column list shared by every block query, in `row_to_block` order
pub(super) const BLOCK_COLUMNS: &str =
    "id, file_path, line_start, line_end, block_type, heading_path, content, content_hash, updated_at";

/// `BLOCK_COLUMNS` qualified with a table alias, for joins
pub(super) fn prefixed_columns(alias: &str) -> String {
    BLOCK_COLUMNS
        .split(", ")
        .map(|c| format!("{}.{}", alias, c))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(super) fn row_to_block(row: &Row) -> rusqlite::Result<Block> {
    let block_type_str: String = row.get(4)?;
    let block_type = block_type_str.parse::<BlockType>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let line_start: i64 = row.get(2)?;
    let line_end: i64 = row.get(3)?;

    Ok(Block {
        id: row.get(0)?,
        file_path: row.get(1)?,
        line_start: line_start as usize,
        line_end: line_end as usize,
        block_type,
        heading_path: row.get(5)?,
        content: row.get(6)?,
        content_hash: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

/// Insert a block, or overwrite every column of the row with the same id.
///
/// The search row shares the block's rowid, which an upsert keeps stable.
pub(crate) fn upsert_block_internal(
    conn: &Connection,
    block: &Block,
    fts_enabled: bool,
) -> Result<()> {
    let rowid: i64 = conn.query_row(
        "INSERT INTO blocks (id, file_path, line_start, line_end, block_type, heading_path, content, content_hash, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(id) DO UPDATE SET
            file_path = excluded.file_path,
            line_start = excluded.line_start,
            line_end = excluded.line_end,
            block_type = excluded.block_type,
            heading_path = excluded.heading_path,
            content = excluded.content,
            content_hash = excluded.content_hash,
            updated_at = excluded.updated_at
         RETURNING rowid",
        params![
            &block.id,
            &block.file_path,
            block.line_start as i64,
            block.line_end as i64,
            block.block_type.as_str(),
            &block.heading_path,
            &block.content,
            &block.content_hash,
            &block.updated_at,
        ],
        |row| row.get(0),
    )
    .map_err(|e| BlockrefError::db_operation(&format!("upsert block {}", block.id), e))?;

    if fts_enabled {
        conn.execute("DELETE FROM blocks_fts WHERE rowid = ?1", params![rowid])
            .map_err(|e| BlockrefError::db_operation("clear search entry", e))?;
        conn.execute(
            "INSERT INTO blocks_fts (rowid, id, content) VALUES (?1, ?2, ?3)",
            params![rowid, &block.id, &block.content],
        )
        .map_err(|e| BlockrefError::db_operation("insert search entry", e))?;
    }

    Ok(())
}

impl super::Database {
    /// Insert or overwrite a single block
    pub fn upsert_block(&self, block: &Block) -> Result<()> {
        upsert_block_internal(&self.conn, block, self.fts_enabled)
    }

    /// Look up a block by identifier
    pub fn get_block(&self, id: &str) -> Result<Option<Block>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM blocks WHERE id = ?1", BLOCK_COLUMNS),
                params![id],
                row_to_block,
            )
            .optional()
            .map_err(|e| BlockrefError::db_operation(&format!("get block {}", id), e))
    }

    /// Every block, ordered by file path then line
    pub fn list_blocks(&self) -> Result<Vec<Block>> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {} FROM blocks ORDER BY file_path, line_start",
                BLOCK_COLUMNS
            ))
            .map_err(|e| BlockrefError::db_operation("prepare block listing", e))?;

        let blocks = stmt
            .query_map([], row_to_block)
            .map_err(|e| BlockrefError::db_operation("list blocks", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| BlockrefError::db_operation("read block", e))?;

        Ok(blocks)
    }
}
