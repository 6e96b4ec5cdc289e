//! AST definitions for rho processes
//!
//! Trees are immutable once built: the parser constructs them bottom-up in a single pass
//! and hands the whole tree to the caller. There is no sharing and no cycles, and no node
//! carries a source location, so trees that differ only in trivia compare equal.
//!
//! ## Modules
//!
//! - `elements` - node type definitions, with [Proc] as the closed sum of process kinds
//! - `traits` - [NodeKind] and the borrowed [Node] view for walking every node kind
//! - `range` - positions and ranges for diagnostics

pub mod elements;
pub mod range;
pub mod traits;

pub use elements::{
    Action, Bundle, Ground, Join, New, Output, Par, Pattern, Proc, Variable, VariableP,
};
pub use range::{Position, Range, SourceLocation};
pub use traits::{AstNode, Node, NodeKind};
