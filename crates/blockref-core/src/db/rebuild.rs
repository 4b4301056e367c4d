use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use walkdir::WalkDir;

use super::blocks::upsert_block_internal;
use super::refs::insert_reference_internal;
use super::Database;
use crate::block::{parse_file, Block};
use crate::error::{BlockrefError, Result};
use crate::refs::extract_references;

/// Summary of a full index rebuild
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Markdown files scanned
    pub files: usize,
    /// Distinct blocks stored after the rebuild
    pub blocks: usize,
    /// Reference rows recorded
    pub references: usize,
    /// Parsed blocks whose identifier was already taken by an earlier block
    pub collisions: usize,
}

/// Every `.md` file under `dir`, in a stable order
pub(crate) fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| BlockrefError::io_operation("walk", dir.display(), e))?;
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|e| e == "md") {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Warn about identifiers that appear on more than one line.
///
/// The later occurrence still overwrites the earlier row on upsert.
fn count_collisions(blocks: &[Block]) -> usize {
    let mut seen: HashMap<&str, &Block> = HashMap::new();
    let mut collisions = 0;
    for block in blocks {
        if let Some(first) = seen.insert(block.id.as_str(), block) {
            collisions += 1;
            tracing::warn!(
                id = %block.id,
                first = %first.location(),
                second = %block.location(),
                "Duplicate block ID; later block replaces earlier one in the index"
            );
        }
    }
    collisions
}

impl Database {
    /// Wipe every block, reference and search row, then re-index the vault.
    ///
    /// All files are read and parsed before anything is deleted, so an
    /// unreadable file aborts the run with the previous index intact.
    #[tracing::instrument(skip(self, vault_dir), fields(vault_dir = %vault_dir.display()))]
    pub fn rebuild(&self, vault_dir: &Path) -> Result<IndexStats> {
        if !vault_dir.is_dir() {
            return Err(BlockrefError::VaultNotFound {
                path: vault_dir.to_path_buf(),
            });
        }
        let vault_dir = vault_dir
            .canonicalize()
            .map_err(|e| BlockrefError::io_operation("resolve", vault_dir.display(), e))?;

        let start = Instant::now();
        let files = markdown_files(&vault_dir)?;
        let mut blocks = Vec::new();
        for path in &files {
            blocks.extend(parse_file(path)?);
        }

        let updated_at = Utc::now().to_rfc3339();
        for block in &mut blocks {
            block.updated_at = updated_at.clone();
        }

        crate::trace_time!(start, "parse_vault", files = files.len(), blocks = blocks.len());

        let collisions = count_collisions(&blocks);
        let references = extract_references(&blocks);

        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| BlockrefError::db_operation("start transaction", e))?;

        tx.execute("DELETE FROM refs", [])
            .map_err(|e| BlockrefError::db_operation("clear references", e))?;
        tx.execute("DELETE FROM blocks", [])
            .map_err(|e| BlockrefError::db_operation("clear blocks", e))?;
        if self.fts_enabled {
            tx.execute("DELETE FROM blocks_fts", [])
                .map_err(|e| BlockrefError::db_operation("clear search index", e))?;
        }

        for block in &blocks {
            upsert_block_internal(&tx, block, self.fts_enabled)?;
        }
        for reference in &references {
            insert_reference_internal(&tx, reference)?;
        }

        tx.commit()
            .map_err(|e| BlockrefError::db_operation("commit transaction", e))?;
        crate::trace_time!(start, "write_index");

        let stats = IndexStats {
            files: files.len(),
            blocks: self.get_block_count()? as usize,
            references: references.len(),
            collisions,
        };
        tracing::info!(
            files = stats.files,
            blocks = stats.blocks,
            references = stats.references,
            collisions = stats.collisions,
            "Index rebuilt"
        );

        Ok(stats)
    }
}
