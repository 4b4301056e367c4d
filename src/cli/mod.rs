//! CLI argument parsing for blockref
//!
//! Global flags: --root, --quiet, --verbose, --log-level, --log-json

pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use blockref_core::graph::GraphFormat;
use parse::{parse_graph_format, parse_limit, parse_min_score};

/// Blockref - stable block identifiers, backlinks and link suggestions for Markdown
#[derive(Parser, Debug)]
#[command(name = "blockref")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, or a full directive like blockref_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create config, vault directory and index schema
    Init,

    /// Append identifiers to unmarked blocks
    Stamp {
        /// Markdown file or directory (recursed for .md files)
        target: PathBuf,
    },

    /// Rebuild the block index from the vault directory
    Index,

    /// Search block content
    Find {
        /// Text to search for
        query: String,

        /// Maximum results (1-200)
        #[arg(long, value_parser = parse_limit)]
        limit: Option<usize>,
    },

    /// List blocks referencing a block
    Backlinks {
        /// Block identifier (a leading ^ is accepted)
        id: String,
    },

    /// Export the block graph
    Graph {
        /// Output format: dot or json
        #[arg(long, default_value = "dot", value_parser = parse_graph_format)]
        format: GraphFormat,
    },

    /// Suggest related blocks to link from a block
    SuggestLinks {
        /// Source block identifier
        id: String,

        /// Maximum suggestions (1-100)
        #[arg(long, value_parser = parse_limit)]
        limit: Option<usize>,

        /// Minimum similarity score
        #[arg(long, value_parser = parse_min_score)]
        min_score: Option<f64>,
    },

    /// Print a block's location, optionally opening it in an editor
    Open {
        /// Block identifier
        id: String,

        /// Editor command, launched as `<editor> +<line> <path>`
        #[arg(long)]
        editor: Option<String>,
    },
}
