//! Graph export of the indexed block/reference set
//!
//! Two renderings are supported:
//! - dot: Graphviz `digraph`, one node per block and one edge per reference
//! - json: `{ "nodes": [...], "edges": [...] }`
//!
//! Nothing is ranked or filtered here. A reference target with no block
//! becomes an unresolved node, listed after the indexed blocks.

use std::collections::HashSet;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::db::Database;
use crate::error::{BlockrefError, Result};
use crate::refs::Reference;

/// Output format for `graph`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphFormat {
    /// Graphviz DOT (default)
    #[default]
    Dot,
    /// Nodes/edges JSON document
    Json,
}

impl FromStr for GraphFormat {
    type Err = BlockrefError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" => Ok(GraphFormat::Dot),
            "json" => Ok(GraphFormat::Json),
            other => Err(BlockrefError::invalid_value("graph format", other)),
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFormat::Dot => write!(f, "dot"),
            GraphFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// `id` plus `basename:line`; just `id` when unresolved
    pub label: String,
    /// Referenced but not present in the index
    pub unresolved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

/// Full node/edge set, in store order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphExport {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphExport {
    pub fn new(blocks: &[Block], references: &[Reference]) -> Self {
        let mut nodes: Vec<GraphNode> = blocks
            .iter()
            .map(|block| GraphNode {
                id: block.id.clone(),
                file: Some(block.file_path.clone()),
                line: Some(block.line_start),
                label: format!("{}\n{}:{}", block.id, block.basename(), block.line_start),
                unresolved: false,
            })
            .collect();

        let mut seen: HashSet<&str> = blocks.iter().map(|b| b.id.as_str()).collect();
        for r in references {
            if seen.insert(r.to_block_id.as_str()) {
                nodes.push(GraphNode {
                    id: r.to_block_id.clone(),
                    file: None,
                    line: None,
                    label: r.to_block_id.clone(),
                    unresolved: true,
                });
            }
        }

        let edges = references
            .iter()
            .map(|r| GraphEdge {
                from: r.from_block_id.clone(),
                to: r.to_block_id.clone(),
            })
            .collect();

        GraphExport { nodes, edges }
    }

    /// Dump everything the store holds
    pub fn from_database(db: &Database) -> Result<Self> {
        let blocks = db.list_blocks()?;
        let references = db.list_references()?;
        Ok(Self::new(&blocks, &references))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn render(&self, format: GraphFormat) -> Result<String> {
        match format {
            GraphFormat::Dot => Ok(self.to_dot()),
            GraphFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph blocks {\n");
        for node in &self.nodes {
            let style = if node.unresolved { ", style=dashed" } else { "" };
            let _ = writeln!(
                out,
                "  \"{}\" [label=\"{}\"{}];",
                escape_dot(&node.id),
                escape_dot(&node.label),
                style
            );
        }
        for edge in &self.edges {
            let _ = writeln!(
                out,
                "  \"{}\" -> \"{}\";",
                escape_dot(&edge.from),
                escape_dot(&edge.to)
            );
        }
        out.push_str("}\n");
        out
    }
}

/// Escape a value for a double-quoted DOT string
fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
