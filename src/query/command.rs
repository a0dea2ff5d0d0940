//! Extraction operations over a command's direct children.
//!
//! Every operation is read-only. "Not found" is `false`, `None` or an empty
//! vector; `None` from a `get_all_*` call means the node has no children at all.

use crate::ast::{Assignment, Node, Program, Redirect, Subcommand, Word};

/// Children to scan: a composite's `parts`, or the options a sticky group holds.
fn children(node: &Node) -> Option<&[Node]> {
    match node {
        Node::StickyOption(s) => Some(&s.options),
        _ => node.parts(),
    }
}

/// Exact match on both the name and the value of an assignment.
pub fn assignment_has_value(node: &Node, name: &str, value: &str) -> bool {
    matches!(node, Node::Assignment(a) if a.name == name && a.value == value)
}

/// Whether any direct child assigns `name` (and `value`, when given).
pub fn command_has_assignment(command: &Node, name: &str, value: Option<&str>) -> bool {
    let Some(parts) = children(command) else {
        return false;
    };
    parts.iter().any(|part| match part {
        Node::Assignment(a) => a.name == name && value.is_none_or(|v| a.value == v),
        _ => false,
    })
}

/// Whether the command carries option `option_name`.
///
/// With `arg_value`, a bare option only counts when the next sibling is an
/// argument (its text is not compared); an option with an embedded argument
/// must match the argument text exactly. Sticky groups are searched too.
pub fn command_has_option(node: &Node, option_name: &str, arg_value: Option<&str>) -> bool {
    let Some(parts) = children(node) else {
        return false;
    };
    parts.iter().enumerate().any(|(i, part)| match part {
        Node::Option(o) if o.opt == option_name => match arg_value {
            None => true,
            Some(_) => matches!(parts.get(i + 1), Some(Node::Argument(_))),
        },
        Node::OptionWithArg(o) if o.option.opt == option_name => {
            arg_value.is_none_or(|v| o.argument.word == v)
        }
        Node::StickyOption(_) => command_has_option(part, option_name, arg_value),
        _ => false,
    })
}

/// Whether the command's program has canonical name `program_name`.
pub fn command_has_program(command: &Node, program_name: &str) -> bool {
    get_command_program(command).is_some_and(|p| p.name == program_name)
}

/// Whether the `position`-th subcommand (0-indexed) reads `name`.
pub fn command_has_subcommand(command: &Node, name: &str, position: usize) -> bool {
    get_all_subcommands(command)
        .and_then(|subs| subs.get(position).map(|s| s.word == name))
        .unwrap_or(false)
}

pub fn get_all_arguments(node: &Node) -> Option<Vec<&Word>> {
    let parts = children(node)?;
    Some(
        parts
            .iter()
            .filter_map(|p| match p {
                Node::Argument(w) => Some(w),
                _ => None,
            })
            .collect(),
    )
}

pub fn get_all_assignments(node: &Node) -> Option<Vec<&Assignment>> {
    let parts = children(node)?;
    Some(
        parts
            .iter()
            .filter_map(|p| match p {
                Node::Assignment(a) => Some(a),
                _ => None,
            })
            .collect(),
    )
}

pub fn get_all_redirects(node: &Node) -> Option<Vec<&Redirect>> {
    let parts = children(node)?;
    Some(
        parts
            .iter()
            .filter_map(|p| match p {
                Node::Redirect(r) => Some(r),
                _ => None,
            })
            .collect(),
    )
}

pub fn get_all_subcommands(node: &Node) -> Option<Vec<&Subcommand>> {
    let parts = children(node)?;
    Some(
        parts
            .iter()
            .filter_map(|p| match p {
                Node::Subcommand(s) => Some(s),
                _ => None,
            })
            .collect(),
    )
}

/// Index of the program among the direct children.
pub fn get_program_node_position(node: &Node) -> Option<usize> {
    children(node)?.iter().position(|p| matches!(p, Node::Program(_)))
}

/// Children on the program's side of the command: from the program onward.
///
/// Flags before the program (e.g. those given to `sudo`) are excluded. With no
/// program, every child is in scope.
fn program_side(node: &Node) -> Option<&[Node]> {
    let parts = children(node)?;
    match node {
        Node::Command(_) => Some(&parts[get_program_node_position(node).unwrap_or(0)..]),
        _ => Some(parts),
    }
}

/// Children before the program: the wrapper's own flags. Empty without a program.
fn wrapper_side(node: &Node) -> Option<&[Node]> {
    let parts = children(node)?;
    Some(&parts[..get_program_node_position(node).unwrap_or(0)])
}

/// Collect options from `scope`.
///
/// A sticky group ends the scan: its grouped options are returned in place
/// of everything collected so far.
fn collect_options(scope: &[Node]) -> Vec<&Node> {
    let mut found = Vec::new();
    for part in scope {
        match part {
            Node::Option(_) | Node::OptionWithArg(_) => found.push(part),
            Node::StickyOption(s) => return collect_options(&s.options),
            _ => {}
        }
    }
    found
}

/// Find option `name` in `scope`. A sticky group ends the scan with its own result.
fn find_option<'a>(scope: &'a [Node], name: &str) -> Option<&'a Node> {
    for part in scope {
        match part {
            Node::Option(o) if o.opt == name => return Some(part),
            Node::OptionWithArg(o) if o.option.opt == name => return Some(part),
            Node::StickyOption(s) => return find_option(&s.options, name),
            _ => {}
        }
    }
    None
}

/// Options given to the program, ignoring anything before it.
pub fn get_command_options(node: &Node) -> Option<Vec<&Node>> {
    program_side(node).map(collect_options)
}

pub fn get_command_option<'a>(node: &'a Node, name: &str) -> Option<&'a Node> {
    find_option(program_side(node)?, name)
}

/// Options given to the wrapper (`sudo -n ...`) before the program.
pub fn get_sudo_options(node: &Node) -> Option<Vec<&Node>> {
    wrapper_side(node).map(collect_options)
}

pub fn get_sudo_option<'a>(node: &'a Node, name: &str) -> Option<&'a Node> {
    find_option(wrapper_side(node)?, name)
}

pub fn get_command_program(command: &Node) -> Option<&Program> {
    children(command)?.iter().find_map(|p| match p {
        Node::Program(p) => Some(p),
        _ => None,
    })
}

pub fn get_last_node(node: &Node) -> Option<&Node> {
    children(node)?.last()
}

/// Whether any direct child reads `sudo`.
pub fn with_sudo(command: &Node) -> bool {
    children(command).is_some_and(|parts| parts.iter().any(super::is_sudo))
}
