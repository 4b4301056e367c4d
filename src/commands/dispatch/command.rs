//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use blockref_core::db::Database;
use blockref_core::error::Result;
use blockref_core::vault::Vault;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn open_vault(&self) -> Result<Vault> {
        let vault = Vault::open(self.root)?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "open_vault");
        Ok(vault)
    }

    /// Open the project and its index database
    pub fn open_db(&self) -> Result<(Vault, Database)> {
        let vault = self.open_vault()?;
        let db = vault.open_db()?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "open_db");
        Ok((vault, db))
    }

    /// Resolve a user-supplied path against the project root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Print a status line unless `--quiet`
    pub fn status(&self, message: impl std::fmt::Display) {
        if !self.cli.quiet {
            println!("{}", message);
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("blockref {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Block-level identifiers and references for Markdown.");
        println!();
        println!("Run `blockref --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Init => commands::init::execute(ctx),
            Commands::Stamp { target } => commands::stamp::execute(ctx, target),
            Commands::Index => commands::index::execute(ctx),
            Commands::Find { query, limit } => commands::find::execute(ctx, query, *limit),
            Commands::Backlinks { id } => commands::backlinks::execute(ctx, id),
            Commands::Graph { format } => commands::graph::execute(ctx, *format),
            Commands::SuggestLinks {
                id,
                limit,
                min_score,
            } => commands::suggest::execute(ctx, id, *limit, *min_score),
            Commands::Open { id, editor } => commands::open::execute(ctx, id, editor.as_deref()),
        };
        tracing::debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
