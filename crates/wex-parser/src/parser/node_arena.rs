//! NodeArena creation methods (add_* methods).

use super::base::{NodeIndex, NodeList};
use super::node::*;
use wex_common::interner::Atom;
use wex_scanner::SyntaxKind;

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    fn push_node(&mut self, kind: u16, pos: u32, end: u32, data_index: u32) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index,
        });
        index
    }

    /// Add a node that carries no pool data (`true`, `false`, `null`).
    pub fn add_token(&mut self, kind: SyntaxKind, pos: u32, end: u32) -> NodeIndex {
        self.push_node(kind as u16, pos, end, NO_DATA)
    }

    pub fn add_identifier(&mut self, atom: Atom, pos: u32, end: u32) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(IdentifierData { atom });
        self.push_node(SyntaxKind::Identifier as u16, pos, end, data_index)
    }

    /// Add an empty identifier flagged `MISSING` at `pos`.
    pub fn add_missing_identifier(&mut self, pos: u32) -> NodeIndex {
        let index = self.add_identifier(Atom::NONE, pos, pos);
        self.nodes[index.0 as usize].flags |= node_flags::MISSING;
        index
    }

    pub fn add_literal(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: LiteralData) -> NodeIndex {
        let data_index = self.literals.len() as u32;
        self.literals.push(data);
        self.push_node(kind as u16, pos, end, data_index)
    }

    pub fn add_property_access(
        &mut self,
        expression: NodeIndex,
        name: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let data_index = self.access_exprs.len() as u32;
        self.access_exprs.push(AccessExprData { expression, name });
        self.push_node(syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION, pos, end, data_index)
    }

    pub fn add_call(&mut self, expression: NodeIndex, pos: u32, end: u32) -> NodeIndex {
        let data_index = self.call_exprs.len() as u32;
        self.call_exprs.push(CallExprData { expression });
        self.push_node(syntax_kind_ext::CALL_EXPRESSION, pos, end, data_index)
    }

    pub fn add_parenthesized(&mut self, expression: NodeIndex, pos: u32, end: u32) -> NodeIndex {
        let data_index = self.parenthesized.len() as u32;
        self.parenthesized.push(ParenthesizedData { expression });
        self.push_node(syntax_kind_ext::PARENTHESIZED_EXPRESSION, pos, end, data_index)
    }

    pub fn add_with_expression(
        &mut self,
        receiver: NodeIndex,
        initializers: NodeList,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let data_index = self.with_exprs.len() as u32;
        self.with_exprs.push(WithExprData {
            receiver,
            initializers,
        });
        self.push_node(syntax_kind_ext::WITH_EXPRESSION, pos, end, data_index)
    }

    pub fn add_with_initializer(
        &mut self,
        name: NodeIndex,
        expression: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let data_index = self.with_initializers.len() as u32;
        self.with_initializers
            .push(WithInitializerData { name, expression });
        self.push_node(syntax_kind_ext::WITH_INITIALIZER, pos, end, data_index)
    }
}
