//! Generic AST — tagged-variant node representation.
//!
//! The supplier's CST is lowered once into this tree; every rule traverses
//! it with explicit recursion. Unknown constructs land in the `Other`
//! catch-all, so no source region is ever dropped.

pub mod lower;
pub mod node;

pub use lower::lower_tree;
pub use node::{DeclKind, Node, NodeKind};
