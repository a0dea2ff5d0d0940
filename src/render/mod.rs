//! Flattening, styling and source highlighting.

pub mod decorate;
pub mod explain;
pub mod flatten;
pub mod highlight;
pub mod style;

pub use decorate::decorate;
pub use explain::{LeafExplanation, explain_leaves, source_slice, summary};
pub use flatten::flatten;
pub use highlight::highlight;
pub use style::{Plain, StyleRole, StyleTable, Theme, parse_style};
