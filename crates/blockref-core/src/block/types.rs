use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::error::BlockrefError;

/// Separator between titles in a heading path
pub const HEADING_PATH_SEPARATOR: &str = " > ";

/// Separator between the heading path prefix and a non-heading block's text
pub const PATH_CONTENT_SEPARATOR: &str = " :: ";

/// Structural kind of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Heading,
    ListItem,
    Line,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Heading => "heading",
            BlockType::ListItem => "list_item",
            BlockType::Line => "line",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = BlockrefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heading" => Ok(BlockType::Heading),
            "list_item" => Ok(BlockType::ListItem),
            "line" => Ok(BlockType::Line),
            other => Err(BlockrefError::invalid_value("block type", other)),
        }
    }
}

/// An addressable line or section of a Markdown file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub file_path: String,
    /// 1-based, inclusive
    pub line_start: usize,
    /// 1-based, inclusive. Equal to `line_start` except for headings.
    pub line_end: usize,
    pub block_type: BlockType,
    pub heading_path: String,
    pub content: String,
    pub content_hash: String,
    /// RFC 3339; empty until the block is written to the index
    pub updated_at: String,
}

impl Block {
    /// File name component of `file_path`, for display
    pub fn basename(&self) -> &str {
        std::path::Path::new(&self.file_path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.file_path)
    }

    /// `path:line` location string
    pub fn location(&self) -> String {
        format!("{}:{}", self.file_path, self.line_start)
    }
}

/// Hex SHA-256 digest of block content
pub fn content_hash(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
