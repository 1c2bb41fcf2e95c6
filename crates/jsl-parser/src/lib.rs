//! Parser and syntax tree for the jsl checker.
//!
//! - `NodeArena` / `Node` / `NodeData` - arena-allocated syntax tree with parent links
//! - `ParserState` - recursive-descent parser for the ES5 subset used by j(s)-script
//! - `ParseError` - the first syntax error of a file

pub mod parser;

pub use parser::{
    FunctionData, Node, NodeArena, NodeData, NodeIndex, NodeList, ParseError, ParserState,
};
