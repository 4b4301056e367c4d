//! Reference extraction: `((^id))` and `path#^id` markers inside block content

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::block::Block;

/// A directed edge between two block identifiers.
///
/// The target need not exist; dangling references are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub from_block_id: String,
    pub to_block_id: String,
}

static EMBED_REF: OnceLock<Regex> = OnceLock::new();
static ANCHOR_REF: OnceLock<Regex> = OnceLock::new();

// Patterns are compile-time constants known to be valid.
#[allow(clippy::expect_used)]
fn embed_ref_re() -> &'static Regex {
    EMBED_REF.get_or_init(|| {
        Regex::new(r"(?i)\(\(\^([a-z0-9]{4,12})\)\)").expect("embed reference pattern")
    })
}

#[allow(clippy::expect_used)]
fn anchor_ref_re() -> &'static Regex {
    ANCHOR_REF.get_or_init(|| {
        Regex::new(r"(?i)#\^([a-z0-9]{4,12})\b").expect("anchor reference pattern")
    })
}

/// Target identifiers referenced in `content`, in order of appearance.
/// Every occurrence counts, duplicates included.
pub fn reference_targets(content: &str) -> Vec<String> {
    let mut found: Vec<(usize, String)> = embed_ref_re()
        .captures_iter(content)
        .chain(anchor_ref_re().captures_iter(content))
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some((whole.start(), caps[1].to_lowercase()))
        })
        .collect();
    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, id)| id).collect()
}

/// Every directed reference found in the given blocks
pub fn extract_references(blocks: &[Block]) -> Vec<Reference> {
    blocks
        .iter()
        .flat_map(|block| {
            reference_targets(&block.content)
                .into_iter()
                .map(move |to| Reference {
                    from_block_id: block.id.clone(),
                    to_block_id: to,
                })
        })
        .collect()
}
