use rusqlite::{params, Connection};
use std::collections::HashSet;

use super::blocks::{prefixed_columns, row_to_block};
use crate::block::Block;
use crate::error::{BlockrefError, Result};
use crate::refs::Reference;

/// Append a reference row; no uniqueness is enforced
pub(crate) fn insert_reference_internal(conn: &Connection, reference: &Reference) -> Result<()> {
    conn.execute(
        "INSERT INTO refs (from_block_id, to_block_id) VALUES (?1, ?2)",
        params![&reference.from_block_id, &reference.to_block_id],
    )
    .map_err(|e| BlockrefError::db_operation("insert reference", e))?;
    Ok(())
}

impl super::Database {
    pub fn insert_reference(&self, reference: &Reference) -> Result<()> {
        insert_reference_internal(&self.conn, reference)
    }

    /// Blocks that reference `id`, ordered by file path then line.
    ///
    /// An identifier with no incoming references yields an empty list.
    pub fn get_backlinks(&self, id: &str) -> Result<Vec<Block>> {
        let columns = prefixed_columns("b");
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT DISTINCT {} FROM refs r
                 JOIN blocks b ON b.id = r.from_block_id
                 WHERE r.to_block_id = ?1
                 ORDER BY b.file_path, b.line_start",
                columns
            ))
            .map_err(|e| BlockrefError::db_operation("prepare backlinks query", e))?;

        let blocks = stmt
            .query_map(params![id], row_to_block)
            .map_err(|e| BlockrefError::db_operation("execute backlinks query", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| BlockrefError::db_operation("read backlink", e))?;

        Ok(blocks)
    }

    /// Identifiers referenced directly from `id`
    pub fn get_outbound_targets(&self, id: &str) -> Result<HashSet<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT to_block_id FROM refs WHERE from_block_id = ?1")
            .map_err(|e| BlockrefError::db_operation("prepare outbound query", e))?;

        let targets = stmt
            .query_map(params![id], |row| row.get::<_, String>(0))
            .map_err(|e| BlockrefError::db_operation("execute outbound query", e))?
            .collect::<rusqlite::Result<HashSet<_>>>()
            .map_err(|e| BlockrefError::db_operation("read outbound reference", e))?;

        Ok(targets)
    }

    /// Every reference in insertion order
    pub fn list_references(&self) -> Result<Vec<Reference>> {
        let mut stmt = self
            .conn
            .prepare("SELECT from_block_id, to_block_id FROM refs ORDER BY rowid")
            .map_err(|e| BlockrefError::db_operation("prepare reference listing", e))?;

        let refs = stmt
            .query_map([], |row| {
                Ok(Reference {
                    from_block_id: row.get(0)?,
                    to_block_id: row.get(1)?,
                })
            })
            .map_err(|e| BlockrefError::db_operation("list references", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| BlockrefError::db_operation("read reference", e))?;

        Ok(refs)
    }
}
