//! Error type shared by decoding, decoration and configuration.

use thiserror::Error;

use crate::ast::{NodeKind, Position};
use crate::render::StyleRole;

/// Errors surfaced by the crate.
///
/// Query operations never produce one: "not found" is an empty or absent
/// result. Only document decoding, style lookup and configuration fail.
#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum Error {
    /// The document is not valid JSON or a node lacks a field its kind requires.
    #[error("failed to decode command tree: {0}")]
    Json(#[from] serde_json::Error),

    /// A node's range is reversed, empty, overlaps a sibling or escapes its parent.
    #[error("invalid range {position} on {kind} node: {reason}")]
    InvalidRange {
        kind: NodeKind,
        position: Position,
        reason: String,
    },

    /// A node is well-typed JSON but structurally impossible (e.g. two programs).
    #[error("invalid {kind} node at {position}: {reason}")]
    InvalidNode {
        kind: NodeKind,
        position: Position,
        reason: String,
    },

    /// The style table has no entry for a role the decorator needed.
    #[error("style table has no entry for `{0}`")]
    MissingStyle(StyleRole),

    /// A theme entry could not be parsed into a style.
    #[error("invalid style for `{role}`: {reason}")]
    InvalidStyle { role: String, reason: String },

    /// The configuration file is not valid TOML for the expected shape.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
