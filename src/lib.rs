//! shellexplain: explains a parsed shell command line.
//!
//! The command's syntax tree comes from an external parser as JSON. This crate
//! answers structural questions about it, flattens it into the leaves a reader
//! walks through, and re-renders the original text with every leaf styled at
//! its exact character position.
//!
//! # Architecture
//!
//! - **[`ast`]**: Node model, JSON decoding, range validation.
//! - **[`query`]**: Kind predicates and command extraction (options, subcommands, sudo flags).
//! - **[`render`]**: Flattening, per-leaf decoration, source highlighting, style tables.
//! - **[`config`]**: Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]**: File logging to `~/.local/share/shellexplain/explain.log`.

/// Node model and document decoding.
pub mod ast;
/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Crate error type.
pub mod error;
/// File-based logging.
pub mod logging;
/// Read-only queries over command trees.
pub mod query;
/// Flattener, decorator, highlighter and style tables.
pub mod render;

pub use ast::{Document, Node, NodeKind, Position};
pub use error::{Error, Result};

use render::{LeafExplanation, StyleTable};

/// A highlighted command line and one explanation per leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub highlighted: String,
    pub leaves: Vec<LeafExplanation>,
}

/// Flatten, highlight and explain a decoded document.
pub fn explain(doc: &Document, table: &dyn StyleTable) -> Result<Explanation> {
    let leaves = render::flatten(&doc.ast);
    let highlighted = render::highlight(&doc.source, &leaves, table)?;
    let leaves = render::explain_leaves(&doc.source, &leaves, table)?;
    Ok(Explanation {
        highlighted,
        leaves,
    })
}

/// Decode `{"source": ..., "ast": ...}` and explain it.
///
/// This is the main entry point for tests and simple usage.
pub fn explain_json(json: &str, table: &dyn StyleTable) -> Result<Explanation> {
    explain(&Document::from_json(json)?, table)
}
