//! `blockref suggest-links` - rank related blocks by lexical similarity

use crate::commands::dispatch::CommandContext;
use crate::commands::find::{truncate, DISPLAY_WIDTH};
use blockref_core::error::Result;
use blockref_core::id::BlockId;
use blockref_core::similarity::suggest_links;

pub fn execute(
    ctx: &CommandContext,
    id: &str,
    limit: Option<usize>,
    min_score: Option<f64>,
) -> Result<()> {
    let (vault, db) = ctx.open_db()?;
    let id = BlockId::normalize(id);
    let defaults = &vault.config().suggest;

    let suggestions = suggest_links(
        &db,
        &id,
        limit.unwrap_or(defaults.limit),
        min_score.unwrap_or(defaults.min_score),
    )?;

    if suggestions.is_empty() {
        println!("No suggestions for ^{}", id);
        return Ok(());
    }

    for s in &suggestions {
        println!(
            "{:.3}  ^{}  {}  {}",
            s.score,
            s.block.id,
            s.block.location(),
            truncate(&s.block.content, DISPLAY_WIDTH)
        );
    }
    Ok(())
}
