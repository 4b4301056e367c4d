//! `blockref stamp` - append identifiers to unmarked blocks

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use blockref_core::error::Result;
use blockref_core::stamp::stamp_path;

pub fn execute(ctx: &CommandContext, target: &Path) -> Result<()> {
    let target = ctx.resolve(target);
    let reports = stamp_path(&target)?;

    let mut total = 0;
    for report in reports.iter().filter(|r| r.stamped > 0) {
        println!("{}: {} stamped", report.path.display(), report.stamped);
        total += report.stamped;
    }

    ctx.status(format!(
        "Stamped {} block(s) in {} file(s)",
        total,
        reports.len()
    ));
    Ok(())
}
