//! NodeArena access methods.
//!
//! Every typed getter checks the node kind first and returns `None` for a
//! node of another kind, so callers can query any node without matching on kinds.

use super::base::NodeIndex;
use super::node::*;
use wex_common::interner::Atom;
use wex_common::span::Span;
use wex_scanner::SyntaxKind;

impl NodeArena {
    /// Get a thin node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Source span of a node; an empty span for `NodeIndex::NONE`.
    #[inline]
    pub fn span(&self, index: NodeIndex) -> Span {
        self.get(index).map(Node::span).unwrap_or_default()
    }

    #[inline]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        if node.has_data() && node.kind == SyntaxKind::Identifier as u16 {
            self.identifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Atom of an identifier node. `Atom::NONE` for missing identifiers,
    /// absent indices, and nodes of other kinds.
    pub fn identifier_atom(&self, index: NodeIndex) -> Atom {
        self.get(index)
            .and_then(|node| self.get_identifier(node))
            .map_or(Atom::NONE, |data| data.atom)
    }

    #[inline]
    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        if node.has_data()
            && matches!(node.kind,
                k if k == SyntaxKind::NumericLiteral as u16
                    || k == SyntaxKind::StringLiteral as u16)
        {
            self.literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_access_expr(&self, node: &Node) -> Option<&AccessExprData> {
        if node.has_data() && node.kind == syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION {
            self.access_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_call_expr(&self, node: &Node) -> Option<&CallExprData> {
        if node.has_data() && node.kind == syntax_kind_ext::CALL_EXPRESSION {
            self.call_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_parenthesized(&self, node: &Node) -> Option<&ParenthesizedData> {
        if node.has_data() && node.kind == syntax_kind_ext::PARENTHESIZED_EXPRESSION {
            self.parenthesized.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_with_expr(&self, node: &Node) -> Option<&WithExprData> {
        if node.has_data() && node.kind == syntax_kind_ext::WITH_EXPRESSION {
            self.with_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_with_initializer(&self, node: &Node) -> Option<&WithInitializerData> {
        if node.has_data() && node.kind == syntax_kind_ext::WITH_INITIALIZER {
            self.with_initializers.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Skip any number of enclosing parentheses.
    pub fn skip_parentheses(&self, mut index: NodeIndex) -> NodeIndex {
        while let Some(paren) = self.get(index).and_then(|node| self.get_parenthesized(node)) {
            index = paren.expression;
        }
        index
    }
}
