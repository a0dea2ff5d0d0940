//! One line of explanation per leaf.

use super::decorate::decorate;
use super::style::StyleTable;
use crate::ast::{Node, NodeKind, Position, Redirect, RedirectType};
use crate::error::Result;

/// A styled leaf and what it does, when that is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafExplanation {
    pub kind: NodeKind,
    pub position: Position,
    pub text: String,
    pub summary: Option<String>,
}

/// Characters of `source` covered by `position`, clamped to the source.
pub fn source_slice(source: &str, position: Position) -> String {
    source
        .chars()
        .skip(position.start)
        .take(position.len())
        .collect()
}

/// Pair every leaf with its styled text and summary.
pub fn explain_leaves(
    source: &str,
    leaves: &[&Node],
    table: &dyn StyleTable,
) -> Result<Vec<LeafExplanation>> {
    leaves
        .iter()
        .map(|leaf| {
            let text = decorate(&source_slice(source, leaf.position()), leaf, table)?;
            Ok(LeafExplanation {
                kind: leaf.kind(),
                position: leaf.position(),
                text,
                summary: summary(leaf),
            })
        })
        .collect()
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Human summary of a single leaf.
pub fn summary(node: &Node) -> Option<String> {
    match node {
        Node::Program(p) => p.schema.as_ref().and_then(|s| non_empty(&s.summary)),
        Node::Subcommand(s) => s.schema.as_ref().and_then(|s| non_empty(&s.summary)),
        Node::Option(o) => o.schema.as_ref().and_then(|s| non_empty(&s.summary)),
        Node::OptionWithArg(o) => {
            let base = o.option.schema.as_ref().and_then(|s| non_empty(&s.summary))?;
            Some(format!("{base} (value: {})", o.argument.word))
        }
        Node::Assignment(a) if a.value.is_empty() => {
            Some(format!("sets the variable {} to an empty value", a.name))
        }
        Node::Assignment(a) => Some(format!("sets the variable {} to \"{}\"", a.name, a.value)),
        Node::Redirect(r) => Some(redirect_summary(r)),
        Node::Operator(w) => match w.word.as_str() {
            "&&" => Some("runs the next command only if the previous one succeeded".into()),
            "||" => Some("runs the next command only if the previous one failed".into()),
            ";" => Some("runs the next command after the previous one finishes".into()),
            "&" => Some("runs the previous command in the background".into()),
            _ => None,
        },
        Node::Pipe(w) if w.word == "|&" => {
            Some("pipes output and errors of the previous command into the next".into())
        }
        Node::Pipe(_) => Some("pipes output of the previous command into the next".into()),
        Node::Sudo(_) => Some("runs the command as another user, root by default".into()),
        Node::StickyOption(_)
        | Node::Argument(_)
        | Node::ReservedWord(_)
        | Node::Word(_)
        | Node::Command(_)
        | Node::List(_)
        | Node::Pipeline(_) => None,
    }
}

fn fd_name(fd: u32) -> String {
    match fd {
        0 => "standard input".into(),
        1 => "standard output".into(),
        2 => "standard error".into(),
        n => format!("file descriptor {n}"),
    }
}

fn redirect_summary(r: &Redirect) -> String {
    let default_input = if r.kind == RedirectType::In { 0 } else { 1 };
    let source = fd_name(r.input.unwrap_or(default_input));
    let target = match (&r.output, r.output_fd) {
        (Some(word), _) => word.word.clone(),
        (None, Some(fd)) => fd_name(fd),
        (None, None) => "nowhere".into(),
    };
    match r.kind {
        RedirectType::Out => format!("writes {source} to {target}"),
        RedirectType::Append => format!("appends {source} to {target}"),
        RedirectType::Clobber => format!("writes {source} to {target}, even if noclobber is set"),
        RedirectType::In => format!("reads {source} from {target}"),
        RedirectType::DupOut => format!("sends {source} to {target}"),
        RedirectType::OutErr => format!("writes standard output and standard error to {target}"),
        RedirectType::AppendErr => {
            format!("appends standard output and standard error to {target}")
        }
    }
}
