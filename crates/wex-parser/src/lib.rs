//! Parser and AST types for the wex expression language.
//!
//! The tree is stored in a `NodeArena`: every node is a small fixed-size
//! header (`Node`) whose `data_index` points into a typed pool selected by
//! the node's kind. Nodes are addressed by `NodeIndex`.

pub mod parser;

pub use parser::base::{NodeIndex, NodeList};
pub use parser::node::{Node, NodeArena, node_flags, syntax_kind_ext};
pub use parser::state::{ParsedExpression, ParserState, parse_expression};

#[cfg(test)]
#[path = "../tests/parser_tests.rs"]
mod parser_tests;
