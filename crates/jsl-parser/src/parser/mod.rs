//! Syntax tree and parser state.

pub mod base;
pub mod node;
mod node_access;
mod node_arena;
pub mod state;
mod state_expressions;
mod state_statements;

pub use base::{NodeIndex, NodeList};
pub use node::{FunctionData, Node, NodeArena, NodeData};
pub use state::{ParseError, ParserState};

#[cfg(test)]
#[path = "tests/node_access_tests.rs"]
mod node_access_tests;

#[cfg(test)]
#[path = "tests/state_expression_tests.rs"]
mod state_expression_tests;
