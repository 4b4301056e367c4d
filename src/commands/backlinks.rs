//! `blockref backlinks` - blocks that reference a given block

use crate::commands::dispatch::CommandContext;
use crate::commands::find::format_row;
use blockref_core::error::Result;
use blockref_core::id::BlockId;

pub fn execute(ctx: &CommandContext, id: &str) -> Result<()> {
    let (_vault, db) = ctx.open_db()?;
    let id = BlockId::normalize(id);

    let backlinks = db.get_backlinks(&id)?;
    if backlinks.is_empty() {
        println!("No backlinks for ^{}", id);
        return Ok(());
    }

    for block in &backlinks {
        println!("{}", format_row(block));
    }
    Ok(())
}
