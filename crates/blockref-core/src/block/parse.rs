use std::collections::HashMap;
use std::path::Path;

use super::classify::{self, LineKind};
use super::types::{content_hash, Block, HEADING_PATH_SEPARATOR, PATH_CONTENT_SEPARATOR};
use crate::error::{BlockrefError, Result};

/// A heading that is still open at the current scan position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenHeading {
    pub level: usize,
    pub title: String,
    pub line: usize,
}

/// Line-scan state: fenced-code flag plus the stack of open headings.
///
/// Headings are kept strictly nested by level: opening a heading closes
/// every open heading of the same or deeper level.
#[derive(Debug, Default)]
pub struct ScanState {
    in_fence: bool,
    open_headings: Vec<OpenHeading>,
    closed: Vec<OpenHeading>,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_fence(&self) -> bool {
        self.in_fence
    }

    /// Feed the next line (1-based `line_number`) and classify it
    pub fn observe(&mut self, line_number: usize, raw: &str) -> LineKind {
        let trimmed = raw.trim();

        if classify::is_fence(trimmed) {
            self.in_fence = !self.in_fence;
            return LineKind::Fence;
        }
        if self.in_fence {
            return LineKind::Fenced;
        }

        let kind = classify::classify(trimmed);
        if let LineKind::Heading { level, title } = &kind {
            self.open_heading(*level, title.clone(), line_number);
        }
        kind
    }

    fn open_heading(&mut self, level: usize, title: String, line: usize) {
        while self
            .open_headings
            .last()
            .is_some_and(|open| open.level >= level)
        {
            if let Some(closed) = self.open_headings.pop() {
                self.closed.push(closed);
            }
        }
        self.open_headings.push(OpenHeading { level, title, line });
    }

    /// Headings closed since the last call, innermost first
    pub fn take_closed(&mut self) -> Vec<OpenHeading> {
        std::mem::take(&mut self.closed)
    }

    /// Titles of the open headings that start at or before `line`, outermost first
    pub fn heading_path(&self, line: usize) -> String {
        self.open_headings
            .iter()
            .filter(|h| h.line <= line)
            .map(|h| h.title.as_str())
            .collect::<Vec<_>>()
            .join(HEADING_PATH_SEPARATOR)
    }
}

/// Parse every marked block out of a Markdown document.
///
/// Unmarked lines still drive fence and heading bookkeeping but never
/// become blocks.
pub fn parse_blocks(content: &str, file_path: &str) -> Vec<Block> {
    let total_lines = content.lines().count();
    let mut state = ScanState::new();
    let mut blocks: Vec<Block> = Vec::new();
    let mut heading_blocks: HashMap<usize, usize> = HashMap::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_number = idx + 1;
        let kind = state.observe(line_number, raw);

        for closed in state.take_closed() {
            if let Some(&block_idx) = heading_blocks.get(&closed.line) {
                blocks[block_idx].line_end = line_number - 1;
            }
        }

        let Some(block_type) = kind.block_type() else {
            continue;
        };
        let Some(id) = classify::find_marker(raw) else {
            continue;
        };

        let text = classify::strip_marker(raw.trim()).to_string();
        let heading_path = state.heading_path(line_number);
        let is_heading = matches!(kind, LineKind::Heading { .. });

        let content = if is_heading || heading_path.is_empty() {
            text
        } else {
            format!("{}{}{}", heading_path, PATH_CONTENT_SEPARATOR, text)
        };

        if is_heading {
            heading_blocks.insert(line_number, blocks.len());
        }

        blocks.push(Block {
            id,
            file_path: file_path.to_string(),
            line_start: line_number,
            // Headings run to end of file unless a later heading closes them
            line_end: if is_heading { total_lines } else { line_number },
            block_type,
            heading_path,
            content_hash: content_hash(&content),
            content,
            updated_at: String::new(),
        });
    }

    blocks
}

/// Read and parse a file. An unreadable file is an error, never skipped.
pub fn parse_file(path: &Path) -> Result<Vec<Block>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| BlockrefError::io_operation("read", path.display(), e))?;
    Ok(parse_blocks(&content, &path.display().to_string()))
}
