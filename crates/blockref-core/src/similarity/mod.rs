//! Similarity engine for suggesting links between blocks
//!
//! Scores are TF-IDF weighted term overlap normalized by the source block,
//! so `score(a, b)` and `score(b, a)` generally differ. Every query scans
//! the whole corpus.

mod tfidf;

use std::collections::HashSet;

use serde::Serialize;

use crate::block::Block;
use crate::config::MAX_SUGGEST_LIMIT;
use crate::db::Database;
use crate::error::{BlockrefError, Result};

pub use tfidf::Corpus;

/// Similarity score for one candidate block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    /// Block ID
    pub id: String,
    /// Similarity score (0.0 and up; 1.0 means every source term is covered)
    pub score: f64,
}

/// A suggested link target with its stored block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub block: Block,
    pub score: f64,
}

/// Similarity Engine
pub struct SimilarityEngine {
    corpus: Corpus,
}

impl SimilarityEngine {
    /// Build an engine over the given blocks
    pub fn new(blocks: &[Block]) -> Self {
        SimilarityEngine {
            corpus: Corpus::build(blocks.iter().map(|b| (b.id.as_str(), b.content.as_str()))),
        }
    }

    /// Rank blocks similar to `source_id`.
    ///
    /// Skips the source itself and everything in `exclude`. Results have
    /// `score >= min_score`, sorted by score descending then id ascending,
    /// truncated to `limit` (clamped to 1..=100).
    pub fn find_similar(
        &self,
        source_id: &str,
        exclude: &HashSet<String>,
        limit: usize,
        min_score: f64,
    ) -> Vec<SimilarityResult> {
        let Some(source) = self.corpus.terms(source_id) else {
            return Vec::new();
        };

        let norm = tfidf::source_norm(&self.corpus, source);
        if norm == 0.0 {
            return Vec::new();
        }

        let mut results: Vec<SimilarityResult> = self
            .corpus
            .docs
            .iter()
            .filter(|(id, _)| id != source_id && !exclude.contains(id))
            .filter_map(|(id, terms)| {
                let score = tfidf::overlap_score(&self.corpus, source, terms, norm)?;
                (score >= min_score).then(|| SimilarityResult {
                    id: id.clone(),
                    score,
                })
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
        results.truncate(limit.clamp(1, MAX_SUGGEST_LIMIT));
        results
    }
}

/// Suggest link targets for a stored block.
///
/// Fails with [`BlockrefError::BlockNotFound`] if the source is not indexed.
/// Blocks the source already references are never suggested.
#[tracing::instrument(skip(db))]
pub fn suggest_links(
    db: &Database,
    source_id: &str,
    limit: usize,
    min_score: f64,
) -> Result<Vec<Suggestion>> {
    if db.get_block(source_id)?.is_none() {
        return Err(BlockrefError::BlockNotFound {
            id: source_id.to_string(),
        });
    }

    let blocks = db.list_blocks()?;
    let linked = db.get_outbound_targets(source_id)?;
    let engine = SimilarityEngine::new(&blocks);

    let ranked = engine.find_similar(source_id, &linked, limit, min_score);
    tracing::debug!(
        corpus = blocks.len(),
        linked = linked.len(),
        results = ranked.len(),
        "suggest_links"
    );

    let mut by_id: std::collections::HashMap<String, Block> =
        blocks.into_iter().map(|b| (b.id.clone(), b)).collect();

    Ok(ranked
        .into_iter()
        .filter_map(|r| {
            by_id.remove(&r.id).map(|block| Suggestion {
                block,
                score: r.score,
            })
        })
        .collect())
}
