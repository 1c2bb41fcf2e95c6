//! Centralized limits for tree walks and recursion.
//!
//! The checker walks parent links and superclass chains; the parser
//! recurses on nested expressions. Each of those loops is bounded by a
//! constant defined here so no malformed input can hang or overflow the
//! stack.

/// Maximum number of parent hops when searching for an enclosing node.
///
/// A parent chain longer than this means the arena has a cycle; walkers
/// give up and report "not found".
pub const MAX_TREE_WALK_ITERATIONS: usize = 10_000;

/// Maximum number of superclass hops during a cast check.
///
/// Cycles are rejected when `$extends` links two classes, so a real chain
/// never comes close to this bound.
pub const MAX_INHERITANCE_DEPTH: usize = 256;

/// Maximum recursion depth of the expression and statement parser.
pub const MAX_NESTING_DEPTH: u32 = 256;
