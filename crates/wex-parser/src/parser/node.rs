//! Thin node headers and their typed data pools.

use super::base::{NodeIndex, NodeList};
use serde::Serialize;
use wex_common::interner::Atom;
use wex_common::span::Span;
use wex_scanner::TokenFlags;

/// Composite node kinds. Token kinds (`SyntaxKind as u16`) stay below 100.
pub mod syntax_kind_ext {
    /// `expr.name`
    pub const PROPERTY_ACCESS_EXPRESSION: u16 = 100;
    /// `expr()`
    pub const CALL_EXPRESSION: u16 = 101;
    /// `(expr)`
    pub const PARENTHESIZED_EXPRESSION: u16 = 102;
    /// `receiver with { ... }`
    pub const WITH_EXPRESSION: u16 = 103;
    /// `name = expr` or a bare `expr` inside a `with` initializer list.
    pub const WITH_INITIALIZER: u16 = 104;
}

pub mod node_flags {
    /// Synthesized by error recovery; the parser already reported why.
    pub const MISSING: u16 = 1 << 0;
}

/// Sentinel for nodes without a data pool entry (keywords, missing nodes).
pub const NO_DATA: u32 = u32::MAX;

/// Fixed-size node header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Node {
    pub kind: u16,
    pub flags: u16,
    pub pos: u32,
    pub end: u32,
    pub data_index: u32,
}

impl Node {
    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != NO_DATA
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.flags & node_flags::MISSING != 0
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.pos, self.end)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdentifierData {
    /// `Atom::NONE` for a missing identifier.
    pub atom: Atom,
}

/// Value of a literal token, decided while parsing.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Int(i32),
    Long(i64),
    Double(f64),
    String(Box<str>),
    /// Out-of-range numeric literal; already reported.
    Invalid,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LiteralData {
    pub text: Box<str>,
    pub flags: TokenFlags,
    pub value: LiteralValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParenthesizedData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WithExprData {
    pub receiver: NodeIndex,
    pub initializers: NodeList,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WithInitializerData {
    /// `NodeIndex::NONE` when the initializer has no `name =` prefix.
    pub name: NodeIndex,
    pub expression: NodeIndex,
}

/// Arena owning every node of one parsed expression.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
    pub(crate) identifiers: Vec<IdentifierData>,
    pub(crate) literals: Vec<LiteralData>,
    pub(crate) access_exprs: Vec<AccessExprData>,
    pub(crate) call_exprs: Vec<CallExprData>,
    pub(crate) parenthesized: Vec<ParenthesizedData>,
    pub(crate) with_exprs: Vec<WithExprData>,
    pub(crate) with_initializers: Vec<WithInitializerData>,
}
