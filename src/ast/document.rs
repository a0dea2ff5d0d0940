//! Decoding of parser output and structural validation of the result.
//!
//! A tree that decodes but violates the range invariants (reversed or empty
//! ranges, overlapping siblings, children escaping their parent) is rejected
//! here so that the highlighter can assume ordered, disjoint leaves.

use serde::Deserialize;

use super::types::{Node, NodeKind, Position};
use crate::error::{Error, Result};

/// A command line together with its parsed tree.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub source: String,
    pub ast: Node,
}

impl Document {
    /// Decode `{"source": ..., "ast": ...}` and validate the tree against the source.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: Document = serde_json::from_str(json)?;
        validate(&doc.ast)?;
        validate_against_source(&doc.ast, doc.source.chars().count())?;
        log::debug!(
            "decoded document: {} chars, root {} {}",
            doc.source.chars().count(),
            doc.ast.kind(),
            doc.ast.position()
        );
        Ok(doc)
    }
}

impl Node {
    /// Decode a single tree from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let node: Node = serde_json::from_str(json)?;
        validate(&node)?;
        Ok(node)
    }
}

fn range_error(node: &Node, position: Position, reason: impl Into<String>) -> Error {
    Error::InvalidRange {
        kind: node.kind(),
        position,
        reason: reason.into(),
    }
}

fn node_error(node: &Node, reason: impl Into<String>) -> Error {
    Error::InvalidNode {
        kind: node.kind(),
        position: node.position(),
        reason: reason.into(),
    }
}

fn check_range(node: &Node, position: Position) -> Result<()> {
    if position.is_empty() {
        return Err(range_error(node, position, "range is empty or reversed"));
    }
    Ok(())
}

/// Check that `children` are ordered, disjoint and inside `parent`.
fn check_children<'a>(
    parent: &Node,
    children: impl IntoIterator<Item = (&'a Node, Position)>,
) -> Result<()> {
    let outer = parent.position();
    let mut prev_end: Option<usize> = None;
    for (child, pos) in children {
        check_range(child, pos)?;
        if !outer.encloses(&pos) {
            return Err(range_error(
                child,
                pos,
                format!("lies outside its parent {} {outer}", parent.kind()),
            ));
        }
        if let Some(end) = prev_end
            && pos.start < end
        {
            return Err(range_error(
                child,
                pos,
                format!("overlaps or precedes the previous sibling ending at {end}"),
            ));
        }
        prev_end = Some(pos.end);
    }
    Ok(())
}

/// Validate the whole tree rooted at `node`.
pub fn validate(node: &Node) -> Result<()> {
    check_range(node, node.position())?;
    match node {
        Node::Command(c) | Node::List(c) | Node::Pipeline(c) => {
            check_children(node, c.parts.iter().map(|p| (p, p.position())))?;
            if node.kind() == NodeKind::Command {
                let programs = c.parts.iter().filter(|p| matches!(p, Node::Program(_))).count();
                if programs > 1 {
                    return Err(node_error(node, format!("has {programs} program nodes")));
                }
            }
            for part in &c.parts {
                validate(part)?;
            }
        }
        Node::StickyOption(s) => {
            if let Some(bad) = s.options.iter().find(|o| !matches!(o, Node::Option(_))) {
                return Err(node_error(
                    node,
                    format!("groups a {} node; only options may be grouped", bad.kind()),
                ));
            }
            check_children(node, s.options.iter().map(|o| (o, o.position())))?;
            for pair in s.options.windows(2) {
                let (prev, next) = (pair[0].position(), pair[1].position());
                if next.start != prev.end {
                    return Err(range_error(
                        &pair[1],
                        next,
                        format!("is not contiguous with the grouped option ending at {}", prev.end),
                    ));
                }
            }
        }
        Node::OptionWithArg(o) => {
            let option = o.option.position;
            let argument = o.argument.position;
            for pos in [option, argument] {
                check_range(node, pos)?;
                if !o.position.encloses(&pos) {
                    return Err(range_error(node, pos, "embedded part lies outside the node"));
                }
            }
            if argument.start < option.end {
                return Err(range_error(node, argument, "argument starts before the option ends"));
            }
        }
        Node::Redirect(r) => {
            if let Some(output) = &r.output {
                check_range(node, output.position)?;
                if output.position.start <= r.position.start {
                    return Err(range_error(
                        node,
                        output.position,
                        "output word must follow the redirect operator",
                    ));
                }
            }
        }
        Node::Program(_)
        | Node::Subcommand(_)
        | Node::Option(_)
        | Node::Argument(_)
        | Node::Assignment(_)
        | Node::Operator(_)
        | Node::Pipe(_)
        | Node::ReservedWord(_)
        | Node::Word(_)
        | Node::Sudo(_) => {}
    }
    Ok(())
}

/// Reject nodes that start at or beyond the end of the source.
///
/// An `end` past the source length is tolerated: the highlighter flushes the
/// last leaf at the final character regardless.
fn validate_against_source(node: &Node, len: usize) -> Result<()> {
    check_start(node, node.position(), len)?;
    match node {
        Node::Command(c) | Node::List(c) | Node::Pipeline(c) => {
            for part in &c.parts {
                validate_against_source(part, len)?;
            }
        }
        Node::StickyOption(s) => {
            for option in &s.options {
                validate_against_source(option, len)?;
            }
        }
        Node::OptionWithArg(o) => {
            check_start(node, o.option.position, len)?;
            check_start(node, o.argument.position, len)?;
        }
        Node::Redirect(r) => {
            if let Some(output) = &r.output {
                check_start(node, output.position, len)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn check_start(node: &Node, pos: Position, len: usize) -> Result<()> {
    if pos.start >= len {
        return Err(range_error(
            node,
            pos,
            format!("starts beyond the {len}-character source"),
        ));
    }
    Ok(())
}
