//! `blockref index` - rebuild the block index from the vault

use crate::commands::dispatch::CommandContext;
use blockref_core::error::Result;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let (vault, db) = ctx.open_db()?;
    let stats = db.rebuild(&vault.vault_dir())?;

    ctx.status(format!(
        "Indexed {} block(s) from {} file(s), {} reference(s)",
        stats.blocks, stats.files, stats.references
    ));
    if stats.collisions > 0 {
        ctx.status(format!(
            "warning: {} duplicate identifier(s); later blocks replaced earlier ones",
            stats.collisions
        ));
    }
    Ok(())
}
