//! ID stamping: append fresh `^id` markers to eligible unmarked lines

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::block::classify;
use crate::block::ScanState;
use crate::error::{BlockrefError, Result};
use crate::id::BlockId;
use crate::refs::reference_targets;

/// Outcome of stamping a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampReport {
    pub path: PathBuf,
    pub stamped: usize,
}

/// Stamp every eligible line of a document, returning the new text and
/// how many identifiers were added.
///
/// Eligible lines are non-blank list items and paragraphs outside fenced
/// code that do not already carry a marker. Line endings are preserved.
pub fn stamp_text(content: &str) -> (String, usize) {
    stamp_text_with(content, BlockId::generate)
}

fn stamp_text_with(
    content: &str,
    mut generate: impl FnMut(&HashSet<String>) -> BlockId,
) -> (String, usize) {
    // Referenced targets count as taken even if their block lives elsewhere
    let mut known = classify::marker_ids(content);
    known.extend(reference_targets(content));
    let mut state = ScanState::new();
    let mut output = String::with_capacity(content.len() + 64);
    let mut stamped = 0;

    for (idx, segment) in content.split_inclusive('\n').enumerate() {
        let (line, ending) = split_line_ending(segment);
        let kind = state.observe(idx + 1, line);

        if kind.is_stampable() && !classify::has_any_marker(line) {
            let id = generate(&known);
            output.push_str(line.trim_end());
            output.push_str(" ^");
            output.push_str(id.as_str());
            known.insert(id.into_string());
            stamped += 1;
        } else {
            output.push_str(line);
        }
        output.push_str(ending);
    }

    (output, stamped)
}

fn split_line_ending(segment: &str) -> (&str, &str) {
    if let Some(line) = segment.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = segment.strip_suffix('\n') {
        (line, "\n")
    } else {
        (segment, "")
    }
}

/// Stamp one file in place. The file is only rewritten if something changed.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn stamp_file(path: &Path) -> Result<StampReport> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| BlockrefError::io_operation("read", path.display(), e))?;

    let (updated, stamped) = stamp_text(&content);

    if stamped > 0 {
        std::fs::write(path, updated)
            .map_err(|e| BlockrefError::io_operation("write", path.display(), e))?;
        debug!(stamped, "Stamped file");
    }

    Ok(StampReport {
        path: path.to_path_buf(),
        stamped,
    })
}

/// Stamp a single file, or every `.md` file beneath a directory
pub fn stamp_path(target: &Path) -> Result<Vec<StampReport>> {
    if !target.exists() {
        return Err(BlockrefError::not_found("path", target.display()));
    }

    if target.is_file() {
        return Ok(vec![stamp_file(target)?]);
    }

    let mut reports = Vec::new();
    for entry in WalkDir::new(target)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry =
            entry.map_err(|e| BlockrefError::io_operation("walk", target.display(), e))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|e| e == "md") {
            reports.push(stamp_file(path)?);
        }
    }

    Ok(reports)
}
