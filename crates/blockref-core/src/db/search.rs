//! Block search: FTS5 when available, substring matching otherwise

use regex::Regex;
use rusqlite::params;
use tracing::debug;

use super::blocks::{prefixed_columns, row_to_block, BLOCK_COLUMNS};
use crate::block::Block;
use crate::error::{BlockrefError, Result};

/// Upper bound on search results
pub const MAX_SEARCH_LIMIT: usize = 200;

impl super::Database {
    /// Search block content, returning at most `limit` blocks (clamped to 1..=200).
    ///
    /// Uses the full-text index when the store has one. If the full-text
    /// query cannot run, falls back to case-sensitive substring matching
    /// instead of failing.
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<Block>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let limit = limit.clamp(1, MAX_SEARCH_LIMIT);

        if self.fts_enabled {
            match self.search_fts(query, limit) {
                Ok(results) => return Ok(results),
                Err(e) => {
                    debug!(error = %e, query, "Full-text search failed, using substring search");
                }
            }
        }

        self.search_substring(query, limit)
    }

    fn search_fts(&self, query: &str, limit: usize) -> Result<Vec<Block>> {
        // Quote as a phrase so punctuation is not read as FTS5 syntax
        let fts_query = format!("\"{}\"", query.replace('"', "\"\""));

        let columns = prefixed_columns("b");
        let sql = format!(
            "SELECT {} FROM blocks_fts
             JOIN blocks b ON b.rowid = blocks_fts.rowid
             WHERE blocks_fts MATCH ?1
             ORDER BY bm25(blocks_fts), b.file_path, b.line_start
             LIMIT ?2",
            columns
        );

        let mut stmt = self.conn.prepare(&sql).map_err(|e| {
            BlockrefError::Other(format!(
                "failed to prepare search query for '{}': {}",
                query, e
            ))
        })?;

        let results = stmt
            .query_map(params![fts_query, limit as i64], row_to_block)
            .map_err(|e| {
                BlockrefError::Other(format!(
                    "failed to execute search query for '{}': {}",
                    query, e
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| BlockrefError::db_operation("read search results", e))?;

        Ok(results)
    }

    /// Case-sensitive match of `query` on whole-token boundaries.
    ///
    /// `instr` narrows the candidates; a hit counts only when the characters
    /// around it are not letters or digits, the same token rule the
    /// `unicode61` full-text tokenizer applies.
    pub(crate) fn search_substring(&self, query: &str, limit: usize) -> Result<Vec<Block>> {
        if !query.chars().any(char::is_alphanumeric) {
            return Ok(Vec::new());
        }
        let bounded = token_bounded(query)?;

        let sql = format!(
            "SELECT {} FROM blocks
             WHERE instr(content, ?1) > 0
             ORDER BY file_path, line_start",
            BLOCK_COLUMNS
        );

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| BlockrefError::db_operation("prepare substring search", e))?;

        let candidates = stmt
            .query_map(params![query], row_to_block)
            .map_err(|e| BlockrefError::db_operation("execute substring search", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| BlockrefError::db_operation("read search results", e))?;

        Ok(candidates
            .into_iter()
            .filter(|block| bounded.is_match(&block.content))
            .take(limit)
            .collect())
    }
}

/// `query` as a literal that may not touch a letter or digit on either side
fn token_bounded(query: &str) -> Result<Regex> {
    let pattern = format!(
        r"(?:^|[^\p{{L}}\p{{N}}]){}(?:$|[^\p{{L}}\p{{N}}])",
        regex::escape(query)
    );
    Regex::new(&pattern).map_err(|e| BlockrefError::invalid_value("search query", e))
}
