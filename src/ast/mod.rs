#[cfg(test)]
pub(crate) mod build;
pub mod document;
pub mod types;

pub use document::{Document, validate};
pub use types::{
    Assignment, CommandSchema, Composite, Node, NodeKind, OptionNode, OptionSchema, OptionWithArg,
    Position, Program, Redirect, RedirectType, StickyOption, Subcommand, Word,
};
