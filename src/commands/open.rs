//! `blockref open` - resolve a block to its location and optionally edit it

use std::process::{Command, Stdio};

use crate::commands::dispatch::CommandContext;
use blockref_core::block::Block;
use blockref_core::error::{BlockrefError, Result};
use blockref_core::id::BlockId;

pub fn execute(ctx: &CommandContext, id: &str, editor: Option<&str>) -> Result<()> {
    let (vault, db) = ctx.open_db()?;
    let id = BlockId::normalize(id);

    let block = db
        .get_block(&id)?
        .ok_or_else(|| BlockrefError::BlockNotFound { id: id.clone() })?;

    println!("{}", block.location());

    let editor = editor.or(vault.config().editor.as_deref());
    if let Some(editor) = editor {
        launch_editor(editor, &block)?;
    }
    Ok(())
}

/// Spawn `<editor> +<line> <path>` without waiting for it
fn launch_editor(editor: &str, block: &Block) -> Result<()> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| BlockrefError::invalid_value("editor", "''"))?;

    let child = Command::new(program)
        .args(parts)
        .arg(format!("+{}", block.line_start))
        .arg(&block.file_path)
        .stdin(Stdio::inherit())
        .spawn()
        .map_err(|e| BlockrefError::Other(format!("failed to open editor '{}': {}", editor, e)))?;

    tracing::debug!(pid = child.id(), editor, "editor launched");
    Ok(())
}
