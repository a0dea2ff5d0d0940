//! Node model for a parsed shell command line.
//!
//! The tree arrives from an external shell parser as JSON. Every node carries
//! a half-open `[start, end)` range of character offsets into the source text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` character range into the source text.
///
/// Serialized as a two-element array, e.g. `[3, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Position {
    pub start: usize,
    pub end: usize,
}

impl Position {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether character index `idx` falls inside the range.
    pub fn contains(&self, idx: usize) -> bool {
        self.start <= idx && idx < self.end
    }

    /// Whether `other` lies entirely within this range.
    pub fn encloses(&self, other: &Position) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl From<[usize; 2]> for Position {
    fn from([start, end]: [usize; 2]) -> Self {
        Self { start, end }
    }
}

impl From<Position> for [usize; 2] {
    fn from(p: Position) -> Self {
        [p.start, p.end]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Discriminant of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    Subcommand,
    Option,
    OptionWithArg,
    StickyOption,
    Argument,
    Assignment,
    Operator,
    Pipe,
    Redirect,
    ReservedWord,
    Word,
    Sudo,
    Command,
    List,
    Pipeline,
}

impl NodeKind {
    /// Every kind, in declaration order.
    pub const ALL: [NodeKind; 16] = [
        NodeKind::Program,
        NodeKind::Subcommand,
        NodeKind::Option,
        NodeKind::OptionWithArg,
        NodeKind::StickyOption,
        NodeKind::Argument,
        NodeKind::Assignment,
        NodeKind::Operator,
        NodeKind::Pipe,
        NodeKind::Redirect,
        NodeKind::ReservedWord,
        NodeKind::Word,
        NodeKind::Sudo,
        NodeKind::Command,
        NodeKind::List,
        NodeKind::Pipeline,
    ];

    /// The kind's name as it appears in the `kind` field of the document.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "program",
            NodeKind::Subcommand => "subcommand",
            NodeKind::Option => "option",
            NodeKind::OptionWithArg => "optionWithArg",
            NodeKind::StickyOption => "stickyOption",
            NodeKind::Argument => "argument",
            NodeKind::Assignment => "assignment",
            NodeKind::Operator => "operator",
            NodeKind::Pipe => "pipe",
            NodeKind::Redirect => "redirect",
            NodeKind::ReservedWord => "reservedWord",
            NodeKind::Word => "word",
            NodeKind::Sudo => "sudo",
            NodeKind::Command => "command",
            NodeKind::List => "list",
            NodeKind::Pipeline => "pipeline",
        }
    }

    /// Composite kinds hold `parts`; everything else is a leaf.
    pub fn is_composite(self) -> bool {
        matches!(self, NodeKind::Command | NodeKind::List | NodeKind::Pipeline)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name and human summary of a program or subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommandSchema {
    pub name: String,
    #[serde(default)]
    pub summary: String,
}

/// Spellings and description of an option, as known to the schema source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSchema {
    #[serde(default)]
    pub long: Vec<String>,
    #[serde(default)]
    pub short: Vec<String>,
    #[serde(default)]
    pub summary: String,
    /// The option takes a value.
    #[serde(default)]
    pub expects_arg: bool,
    /// The value is written as the following token rather than glued on.
    #[serde(default)]
    pub arg_in_next_token: bool,
}

/// A literal shell word and where it sits in the source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Word {
    pub position: Position,
    pub word: String,
}

/// The program being invoked (`git` in `git status`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Program {
    pub position: Position,
    pub word: String,
    /// Canonical program name, e.g. `ls` for `/usr/bin/ls`.
    pub name: String,
    #[serde(default)]
    pub schema: Option<CommandSchema>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Subcommand {
    pub position: Position,
    pub word: String,
    #[serde(default)]
    pub schema: Option<CommandSchema>,
}

/// A single flag such as `-l` or `--all`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OptionNode {
    pub position: Position,
    pub word: String,
    /// Canonical option name the flag resolves to.
    pub opt: String,
    #[serde(default, rename = "optionSchema")]
    pub schema: Option<OptionSchema>,
}

/// A flag with its value bound, e.g. `--output=file` or `-o file`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OptionWithArg {
    pub position: Position,
    pub option: OptionNode,
    pub argument: Word,
}

/// Short flags written together (`-la`). Children are `option` nodes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StickyOption {
    pub position: Position,
    pub word: String,
    pub options: Vec<Node>,
}

/// `NAME=value`. The value is always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Assignment {
    pub position: Position,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum RedirectType {
    #[serde(rename = ">")]
    Out,
    #[serde(rename = ">>")]
    Append,
    #[serde(rename = ">|")]
    Clobber,
    #[serde(rename = "<")]
    In,
    #[serde(rename = ">&")]
    DupOut,
    #[serde(rename = "&>")]
    OutErr,
    #[serde(rename = "&>>")]
    AppendErr,
}

impl RedirectType {
    /// The operator's shell syntax.
    pub fn as_str(self) -> &'static str {
        match self {
            RedirectType::Out => ">",
            RedirectType::Append => ">>",
            RedirectType::Clobber => ">|",
            RedirectType::In => "<",
            RedirectType::DupOut => ">&",
            RedirectType::OutErr => "&>",
            RedirectType::AppendErr => "&>>",
        }
    }
}

/// `[input]type [output | output_fd]`, e.g. `2> log.txt` or `2>&1`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Redirect {
    pub position: Position,
    #[serde(rename = "type")]
    pub kind: RedirectType,
    #[serde(default)]
    pub input: Option<u32>,
    #[serde(default)]
    pub output: Option<Word>,
    #[serde(default)]
    pub output_fd: Option<u32>,
}

/// Ordered children of a `command`, `list` or `pipeline`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Composite {
    pub position: Position,
    pub parts: Vec<Node>,
}

/// One node of the command tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Node {
    Program(Program),
    Subcommand(Subcommand),
    Option(OptionNode),
    OptionWithArg(OptionWithArg),
    StickyOption(StickyOption),
    Argument(Word),
    Assignment(Assignment),
    Operator(Word),
    Pipe(Word),
    Redirect(Redirect),
    ReservedWord(Word),
    Word(Word),
    Sudo(Word),
    Command(Composite),
    List(Composite),
    Pipeline(Composite),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Program(_) => NodeKind::Program,
            Node::Subcommand(_) => NodeKind::Subcommand,
            Node::Option(_) => NodeKind::Option,
            Node::OptionWithArg(_) => NodeKind::OptionWithArg,
            Node::StickyOption(_) => NodeKind::StickyOption,
            Node::Argument(_) => NodeKind::Argument,
            Node::Assignment(_) => NodeKind::Assignment,
            Node::Operator(_) => NodeKind::Operator,
            Node::Pipe(_) => NodeKind::Pipe,
            Node::Redirect(_) => NodeKind::Redirect,
            Node::ReservedWord(_) => NodeKind::ReservedWord,
            Node::Word(_) => NodeKind::Word,
            Node::Sudo(_) => NodeKind::Sudo,
            Node::Command(_) => NodeKind::Command,
            Node::List(_) => NodeKind::List,
            Node::Pipeline(_) => NodeKind::Pipeline,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Node::Program(n) => n.position,
            Node::Subcommand(n) => n.position,
            Node::Option(n) => n.position,
            Node::OptionWithArg(n) => n.position,
            Node::StickyOption(n) => n.position,
            Node::Assignment(n) => n.position,
            Node::Redirect(n) => n.position,
            Node::Argument(w)
            | Node::Operator(w)
            | Node::Pipe(w)
            | Node::ReservedWord(w)
            | Node::Word(w)
            | Node::Sudo(w) => w.position,
            Node::Command(c) | Node::List(c) | Node::Pipeline(c) => c.position,
        }
    }

    /// The literal source word of a single-token node.
    ///
    /// `None` for nodes built from several pieces (assignments, redirects,
    /// options with arguments) and for composites.
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Program(n) => Some(&n.word),
            Node::Subcommand(n) => Some(&n.word),
            Node::Option(n) => Some(&n.word),
            Node::StickyOption(n) => Some(&n.word),
            Node::Argument(w)
            | Node::Operator(w)
            | Node::Pipe(w)
            | Node::ReservedWord(w)
            | Node::Word(w)
            | Node::Sudo(w) => Some(&w.word),
            Node::OptionWithArg(_)
            | Node::Assignment(_)
            | Node::Redirect(_)
            | Node::Command(_)
            | Node::List(_)
            | Node::Pipeline(_) => None,
        }
    }

    /// Children of a composite node; `None` for leaves.
    pub fn parts(&self) -> Option<&[Node]> {
        match self {
            Node::Command(c) | Node::List(c) | Node::Pipeline(c) => Some(&c.parts),
            _ => None,
        }
    }
}
