//! Terse node constructors for unit tests.

use super::types::*;

fn word_at(start: usize, text: &str) -> Word {
    Word {
        position: Position::new(start, start + text.chars().count()),
        word: text.to_string(),
    }
}

pub fn program(start: usize, name: &str) -> Node {
    let w = word_at(start, name);
    Node::Program(Program {
        position: w.position,
        word: w.word,
        name: name.to_string(),
        schema: None,
    })
}

pub fn subcommand(start: usize, text: &str) -> Node {
    let w = word_at(start, text);
    Node::Subcommand(Subcommand {
        position: w.position,
        word: w.word,
        schema: None,
    })
}

pub fn option_node(start: usize, text: &str) -> OptionNode {
    let w = word_at(start, text);
    OptionNode {
        position: w.position,
        word: w.word,
        opt: text.to_string(),
        schema: None,
    }
}

pub fn option(start: usize, text: &str) -> Node {
    Node::Option(option_node(start, text))
}

/// `-o value` with a single space between flag and value.
pub fn option_with_arg(start: usize, flag: &str, value: &str) -> Node {
    let option = option_node(start, flag);
    let argument = word_at(option.position.end + 1, value);
    Node::OptionWithArg(OptionWithArg {
        position: Position::new(start, argument.position.end),
        option,
        argument,
    })
}

/// `-la` style group; each letter becomes a one-char option after the dash.
pub fn sticky(start: usize, text: &str) -> Node {
    let options = text
        .chars()
        .skip(1)
        .enumerate()
        .map(|(i, c)| {
            let mut o = option_node(start + 1 + i, &c.to_string());
            o.opt = format!("-{c}");
            Node::Option(o)
        })
        .collect();
    Node::StickyOption(StickyOption {
        position: Position::new(start, start + text.chars().count()),
        word: text.to_string(),
        options,
    })
}

pub fn argument(start: usize, text: &str) -> Node {
    Node::Argument(word_at(start, text))
}

pub fn assignment(start: usize, name: &str, value: &str) -> Node {
    Node::Assignment(Assignment {
        position: Position::new(start, start + name.chars().count() + 1 + value.chars().count()),
        name: name.to_string(),
        value: value.to_string(),
    })
}

pub fn operator(start: usize, text: &str) -> Node {
    Node::Operator(word_at(start, text))
}

pub fn pipe(start: usize) -> Node {
    Node::Pipe(word_at(start, "|"))
}

pub fn word(start: usize, text: &str) -> Node {
    Node::Word(word_at(start, text))
}

pub fn sudo(start: usize) -> Node {
    Node::Sudo(word_at(start, "sudo"))
}

pub fn redirect(
    position: Position,
    kind: RedirectType,
    input: Option<u32>,
    output: Option<(usize, &str)>,
    output_fd: Option<u32>,
) -> Node {
    Node::Redirect(Redirect {
        position,
        kind,
        input,
        output: output.map(|(start, text)| word_at(start, text)),
        output_fd,
    })
}

fn span(parts: &[Node]) -> Position {
    let start = parts.first().map_or(0, |p| p.position().start);
    let end = parts.last().map_or(0, |p| p.position().end);
    Position::new(start, end)
}

pub fn command(parts: Vec<Node>) -> Node {
    Node::Command(Composite {
        position: span(&parts),
        parts,
    })
}

pub fn list(parts: Vec<Node>) -> Node {
    Node::List(Composite {
        position: span(&parts),
        parts,
    })
}

pub fn pipeline(parts: Vec<Node>) -> Node {
    Node::Pipeline(Composite {
        position: span(&parts),
        parts,
    })
}
