//! Styling of a single leaf.

use super::style::{StyleRole, StyleTable};
use crate::ast::{Node, NodeKind};
use crate::error::Result;

/// Style `text`, the source slice covered by `node`.
///
/// Assignments and redirects are rebuilt from their fields, so `text` is
/// ignored for them: an assignment becomes `name=value` with each side styled
/// on its own, and a redirect becomes `[input]type` followed by either the
/// target descriptor or a space and the output word.
pub fn decorate(text: &str, node: &Node, table: &dyn StyleTable) -> Result<String> {
    match node {
        Node::Assignment(a) => Ok(format!(
            "{}={}",
            table.style(StyleRole::AssignmentName, &a.name)?,
            table.style(StyleRole::AssignmentValue, &a.value)?,
        )),
        Node::Redirect(r) => {
            let role = StyleRole::Kind(NodeKind::Redirect);
            let mut out = String::new();
            if let Some(input) = r.input {
                out.push_str(&table.style(role, &input.to_string())?);
            }
            out.push_str(&table.style(role, r.kind.as_str())?);
            match (&r.output, r.output_fd) {
                (Some(word), _) => {
                    out.push(' ');
                    out.push_str(&table.style(StyleRole::Kind(NodeKind::Word), &word.word)?);
                }
                (None, Some(fd)) => out.push_str(&table.style(role, &fd.to_string())?),
                (None, None) => {}
            }
            Ok(out)
        }
        _ => table.style(node.kind().into(), text),
    }
}
