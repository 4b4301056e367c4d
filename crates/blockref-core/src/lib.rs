//! Blockref Core Library
//!
//! Domain logic for blockref: block parsing, identifier stamping,
//! reference extraction, the SQLite block index, and link suggestions.

pub mod block;
pub mod config;
pub mod db;
pub mod error;
pub mod graph;
pub mod id;
pub mod logging;
pub mod refs;
pub mod similarity;
pub mod stamp;
pub mod text;
pub mod vault;
