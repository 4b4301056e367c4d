//! Blockref - block-level references for Markdown vaults
//!
//! Stamps stable identifiers onto Markdown blocks, indexes them with their
//! references, and answers lookups: search, backlinks, graph export and
//! link suggestions.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use blockref_core::error::{BlockrefError, ExitCode as BlockrefExitCode};
use blockref_core::logging;
use cli::Cli;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            // Help and version are informational, not errors
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                err.exit()
            }
            _ => {
                let usage = BlockrefError::UsageError(err.to_string());
                eprint!("{}", usage);
                return ExitCode::from(usage.exit_code() as u8);
            }
        },
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(BlockrefExitCode::Success as u8),
        Err(e) => {
            tracing::debug!(kind = e.kind(), "command failed");
            if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
