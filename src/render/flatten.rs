//! Flattening of a command tree into the ordered leaves a reader walks through.

use crate::ast::Node;

/// Flatten `node` into its leaves in source order.
///
/// Commands nested in lists and pipelines are expanded in place; sticky
/// groups (`-la`) are replaced by their individual options. Every other
/// non-composite child, including redirects and option-with-argument nodes,
/// is kept as one leaf where it appears.
pub fn flatten(node: &Node) -> Vec<&Node> {
    let mut leaves = Vec::new();
    push_leaves(node, &mut leaves);
    log::trace!("flattened {} {} into {} leaves", node.kind(), node.position(), leaves.len());
    leaves
}

fn push_leaves<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    match node {
        Node::Command(c) | Node::List(c) | Node::Pipeline(c) => {
            for part in &c.parts {
                push_leaves(part, out);
            }
        }
        Node::StickyOption(s) => out.extend(s.options.iter()),
        Node::Program(_)
        | Node::Subcommand(_)
        | Node::Assignment(_)
        | Node::Option(_)
        | Node::Argument(_)
        | Node::Operator(_)
        | Node::OptionWithArg(_)
        | Node::Redirect(_)
        | Node::Pipe(_)
        | Node::ReservedWord(_)
        | Node::Word(_)
        | Node::Sudo(_) => out.push(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::build::*;
    use crate::ast::{NodeKind, Position, RedirectType};

    fn kinds(leaves: &[&Node]) -> Vec<NodeKind> {
        leaves.iter().map(|n| n.kind()).collect()
    }

    #[test]
    fn sticky_options_are_inlined() {
        let cmd = command(vec![program(0, "ls"), sticky(3, "-la")]);
        let leaves = flatten(&cmd);
        assert_eq!(leaves.len(), 3);
        assert_eq!(leaves[1].text(), Some("l"));
        assert_eq!(leaves[2].text(), Some("a"));
        assert!(leaves.iter().all(|n| n.kind() != NodeKind::StickyOption));
    }

    #[test]
    fn cardinality_counts_grouped_children() {
        // A=1 git -C /r commit -am msg
        let cmd = command(vec![
            assignment(0, "A", "1"),
            program(4, "git"),
            subcommand(8, "commit"),
            sticky(15, "-am"),
            argument(19, "msg"),
        ]);
        // four plain children plus two grouped options
        assert_eq!(flatten(&cmd).len(), 6);
    }

    #[test]
    fn list_expands_commands_and_keeps_operators() {
        // echo hi && echo bye
        let tree = list(vec![
            command(vec![word(0, "echo"), argument(5, "hi")]),
            operator(8, "&&"),
            command(vec![word(11, "echo"), argument(16, "bye")]),
        ]);
        let leaves = flatten(&tree);
        assert_eq!(
            kinds(&leaves),
            vec![
                NodeKind::Word,
                NodeKind::Argument,
                NodeKind::Operator,
                NodeKind::Word,
                NodeKind::Argument,
            ]
        );
        let starts: Vec<_> = leaves.iter().map(|n| n.position().start).collect();
        assert_eq!(starts, vec![0, 5, 8, 11, 16]);
    }

    #[test]
    fn pipeline_keeps_pipes_between_commands() {
        let tree = pipeline(vec![
            command(vec![program(0, "ls")]),
            pipe(3),
            command(vec![program(5, "wc"), option(8, "-l")]),
        ]);
        assert_eq!(
            kinds(&flatten(&tree)),
            vec![NodeKind::Program, NodeKind::Pipe, NodeKind::Program, NodeKind::Option]
        );
    }

    #[test]
    fn command_children_outside_the_core_set_are_kept_in_place() {
        // make -j 4 2> log.txt
        let cmd = command(vec![
            program(0, "make"),
            option_with_arg(5, "-j", "4"),
            redirect(Position::new(10, 20), RedirectType::Out, Some(2), Some((13, "log.txt")), None),
        ]);
        assert_eq!(
            kinds(&flatten(&cmd)),
            vec![NodeKind::Program, NodeKind::OptionWithArg, NodeKind::Redirect]
        );
    }

    #[test]
    fn nested_list_in_pipeline_is_expanded() {
        let inner = list(vec![command(vec![program(0, "a")]), operator(2, ";"), command(vec![program(4, "b")])]);
        let tree = pipeline(vec![inner, pipe(6), command(vec![program(8, "c")])]);
        assert_eq!(flatten(&tree).len(), 5);
    }
}
