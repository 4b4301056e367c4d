//! `blockref find` - search block content

use crate::commands::dispatch::CommandContext;
use blockref_core::block::Block;
use blockref_core::error::Result;

/// Displayed content is cut to this many characters
pub const DISPLAY_WIDTH: usize = 80;

pub fn execute(ctx: &CommandContext, query: &str, limit: Option<usize>) -> Result<()> {
    let (vault, db) = ctx.open_db()?;
    let limit = limit.unwrap_or(vault.config().find.limit);

    let results = db.search(query, limit)?;
    tracing::debug!(results = results.len(), limit, "find");

    if results.is_empty() {
        println!("No matches for '{}'", query);
        return Ok(());
    }

    for block in &results {
        println!("{}", format_row(block));
    }
    Ok(())
}

/// `^id  path:line  content`, shared by the listing commands
pub fn format_row(block: &Block) -> String {
    format!(
        "^{}  {}  {}",
        block.id,
        block.location(),
        truncate(&block.content, DISPLAY_WIDTH)
    )
}

/// Cut `s` to at most `width` characters, marking the cut with "..."
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let kept: String = s.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
