//! `blockref init` - create project state idempotently

use crate::commands::dispatch::CommandContext;
use blockref_core::error::Result;
use blockref_core::vault::Vault;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let (vault, report) = Vault::init(ctx.root)?;

    if report.created_config {
        ctx.status(format!("Created {}", vault.config_path().display()));
    }
    if report.created_vault_dir {
        ctx.status(format!("Created {}", vault.vault_dir().display()));
    }
    ctx.status(format!("Index ready at {}", vault.db_path().display()));
    Ok(())
}
