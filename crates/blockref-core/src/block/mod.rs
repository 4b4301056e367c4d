//! Markdown blocks: the model, line classification, and the block parser

pub mod classify;
mod parse;
mod types;

pub use parse::{parse_blocks, parse_file, OpenHeading, ScanState};
pub use types::{content_hash, Block, BlockType, HEADING_PATH_SEPARATOR, PATH_CONTENT_SEPARATOR};
