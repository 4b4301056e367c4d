//! `blockref graph` - dump the block graph as DOT or JSON

use crate::commands::dispatch::CommandContext;
use blockref_core::error::Result;
use blockref_core::graph::{GraphExport, GraphFormat};

pub fn execute(ctx: &CommandContext, format: GraphFormat) -> Result<()> {
    let (_vault, db) = ctx.open_db()?;
    let graph = GraphExport::from_database(&db)?;

    if graph.is_empty() && !ctx.cli.quiet {
        eprintln!("No blocks indexed; run `blockref index` first");
    }

    let rendered = graph.render(format)?;
    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}
