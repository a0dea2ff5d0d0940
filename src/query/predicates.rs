//! Kind tests over single nodes.

use crate::ast::Node;

pub fn is_program(node: &Node) -> bool {
    matches!(node, Node::Program(_))
}

pub fn is_subcommand(node: &Node) -> bool {
    matches!(node, Node::Subcommand(_))
}

pub fn is_option(node: &Node) -> bool {
    matches!(node, Node::Option(_))
}

pub fn is_option_with_arg(node: &Node) -> bool {
    matches!(node, Node::OptionWithArg(_))
}

pub fn is_sticky_option(node: &Node) -> bool {
    matches!(node, Node::StickyOption(_))
}

pub fn is_argument(node: &Node) -> bool {
    matches!(node, Node::Argument(_))
}

pub fn is_assignment(node: &Node) -> bool {
    matches!(node, Node::Assignment(_))
}

pub fn is_operator(node: &Node) -> bool {
    matches!(node, Node::Operator(_))
}

pub fn is_pipe(node: &Node) -> bool {
    matches!(node, Node::Pipe(_))
}

pub fn is_redirect(node: &Node) -> bool {
    matches!(node, Node::Redirect(_))
}

pub fn is_reserved_word(node: &Node) -> bool {
    matches!(node, Node::ReservedWord(_))
}

pub fn is_word(node: &Node) -> bool {
    matches!(node, Node::Word(_))
}

pub fn is_command(node: &Node) -> bool {
    matches!(node, Node::Command(_))
}

pub fn is_list(node: &Node) -> bool {
    matches!(node, Node::List(_))
}

pub fn is_pipeline(node: &Node) -> bool {
    matches!(node, Node::Pipeline(_))
}

/// True when the node's literal text is `sudo`, whatever its kind.
pub fn is_sudo(node: &Node) -> bool {
    node.text() == Some("sudo")
}
