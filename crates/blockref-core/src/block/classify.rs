//! Line classification shared by the block parser and the ID stamper

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use super::types::BlockType;

/// Trailing block marker: ` ^abc123` at the end of a line
static TRAILING_MARKER: OnceLock<Regex> = OnceLock::new();

/// Block marker anywhere in a line, preceded by start-of-line or whitespace
static ANY_MARKER: OnceLock<Regex> = OnceLock::new();

// Patterns are compile-time constants known to be valid.
#[allow(clippy::expect_used)]
fn trailing_marker_re() -> &'static Regex {
    TRAILING_MARKER.get_or_init(|| {
        Regex::new(r"(?i)(?:^|\s)\^([a-z0-9]{4,12})\s*$").expect("trailing marker pattern")
    })
}

#[allow(clippy::expect_used)]
fn any_marker_re() -> &'static Regex {
    ANY_MARKER.get_or_init(|| {
        Regex::new(r"(?i)(?:^|\s)\^([a-z0-9]{4,12})\b").expect("marker pattern")
    })
}

/// What a single (unfenced) line looks like structurally
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// A triple-backtick fence marker (opening or closing)
    Fence,
    /// Any line between fence markers
    Fenced,
    Heading { level: usize, title: String },
    ListItem,
    HorizontalRule,
    HtmlComment,
    Paragraph,
}

impl LineKind {
    /// Block type a marked line of this kind is indexed as
    pub fn block_type(&self) -> Option<BlockType> {
        match self {
            LineKind::Heading { .. } => Some(BlockType::Heading),
            LineKind::ListItem => Some(BlockType::ListItem),
            LineKind::HorizontalRule | LineKind::HtmlComment | LineKind::Paragraph => {
                Some(BlockType::Line)
            }
            LineKind::Blank | LineKind::Fence | LineKind::Fenced => None,
        }
    }

    /// Whether the stamper may append an identifier to a line of this kind.
    ///
    /// Headings can carry identifiers but are never stamped automatically.
    pub fn is_stampable(&self) -> bool {
        matches!(self, LineKind::ListItem | LineKind::Paragraph)
    }
}

pub fn is_fence(trimmed: &str) -> bool {
    trimmed.starts_with("```")
}

/// Parse an ATX heading, returning its level and raw title text
pub fn heading(trimmed: &str) -> Option<(usize, &str)> {
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &trimmed[level..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((level, rest.trim()))
}

/// Clean a raw heading title: drop the block marker and any closing `#`s
pub fn heading_title(raw: &str) -> String {
    let without_marker = strip_marker(raw);
    let without_closing = without_marker.trim_end_matches('#');
    // A closing sequence must be separated by whitespace, otherwise `#` is content
    if without_closing.len() != without_marker.len()
        && !without_closing.is_empty()
        && !without_closing.ends_with(char::is_whitespace)
    {
        return without_marker.trim().to_string();
    }
    without_closing.trim().to_string()
}

/// Bulleted (`-`, `*`, `+`) or numbered (`1.`, `1)`) list item
pub fn is_list_item(trimmed: &str) -> bool {
    let mut chars = trimmed.chars();
    match chars.next() {
        Some('-' | '*' | '+') => chars.next().is_some_and(char::is_whitespace),
        Some(c) if c.is_ascii_digit() => {
            let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
            let mut rest = trimmed[digits..].chars();
            digits <= 9
                && matches!(rest.next(), Some('.' | ')'))
                && rest.next().is_some_and(char::is_whitespace)
        }
        _ => false,
    }
}

/// Three or more of the same `-`, `*` or `_`, optionally space-separated
pub fn is_horizontal_rule(trimmed: &str) -> bool {
    let mut marks = trimmed.chars().filter(|c| !c.is_whitespace());
    let Some(first) = marks.next() else {
        return false;
    };
    if !matches!(first, '-' | '*' | '_') {
        return false;
    }
    let mut count = 1;
    for c in marks {
        if c != first {
            return false;
        }
        count += 1;
    }
    count >= 3
}

pub fn is_html_comment_open(trimmed: &str) -> bool {
    trimmed.starts_with("<!--")
}

/// Classify a trimmed line that is known to be outside fenced code
pub fn classify(trimmed: &str) -> LineKind {
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if is_fence(trimmed) {
        return LineKind::Fence;
    }
    if let Some((level, raw_title)) = heading(trimmed) {
        return LineKind::Heading {
            level,
            title: heading_title(raw_title),
        };
    }
    if is_horizontal_rule(trimmed) {
        return LineKind::HorizontalRule;
    }
    if is_list_item(trimmed) {
        return LineKind::ListItem;
    }
    if is_html_comment_open(trimmed) {
        return LineKind::HtmlComment;
    }
    LineKind::Paragraph
}

/// Identifier of the trailing block marker, lowercased
pub fn find_marker(line: &str) -> Option<String> {
    trailing_marker_re()
        .captures(line)
        .map(|caps| caps[1].to_lowercase())
}

/// Line text with the trailing block marker removed
pub fn strip_marker(line: &str) -> &str {
    match trailing_marker_re().find(line) {
        Some(m) => line[..m.start()].trim_end(),
        None => line,
    }
}

/// Whether a block marker appears anywhere in the line
pub fn has_any_marker(line: &str) -> bool {
    any_marker_re().is_match(line)
}

/// Every block identifier present anywhere in the text, lowercased
pub fn marker_ids(text: &str) -> HashSet<String> {
    any_marker_re()
        .captures_iter(text)
        .map(|caps| caps[1].to_lowercase())
        .collect()
}
