//! Expression binding: dispatch by node kind, literals, names and calls.

use crate::bound::{BindValueKind, BoundExpr, BoundKind, ConstantValue};
use crate::state::BinderState;
use smallvec::SmallVec;
use tracing::trace;
use wex_common::diagnostics::diagnostic_codes;
use wex_parser::parser::node::LiteralValue;
use wex_parser::{NodeIndex, syntax_kind_ext};
use wex_scanner::SyntaxKind;
use wex_solver::TypeId;

impl<'a> BinderState<'a> {
    /// Bind `node` and check it can be used as `value_kind`.
    pub fn bind_value(&mut self, node: NodeIndex, value_kind: BindValueKind) -> BoundExpr {
        let expr = self.bind_expression(node);
        self.check_value(expr, value_kind)
    }

    /// Bind `node` as a plain read with no expected type.
    pub fn bind_rvalue_without_target_type(&mut self, node: NodeIndex) -> BoundExpr {
        self.bind_value(node, BindValueKind::RValue)
    }

    /// Bind any expression node. Method groups are returned as-is; callers
    /// that need a value go through `bind_value`.
    pub fn bind_expression(&mut self, node: NodeIndex) -> BoundExpr {
        if self.ctx.depth >= self.ctx.options.max_expression_depth {
            self.error_at_node_msg(node, diagnostic_codes::EXPRESSION_TOO_DEEPLY_NESTED, &[]);
            return BoundExpr::bad(node, SmallVec::new(), Vec::new());
        }
        self.ctx.depth += 1;
        let result = self.bind_expression_inner(node);
        self.ctx.depth -= 1;
        result
    }

    fn bind_expression_inner(&mut self, node: NodeIndex) -> BoundExpr {
        let arena = self.ctx.arena;
        let Some(n) = arena.get(node) else {
            return BoundExpr::bad(node, SmallVec::new(), Vec::new());
        };
        if n.is_missing() {
            // Reported by the parser.
            return BoundExpr::bad(node, SmallVec::new(), Vec::new());
        }

        match n.kind {
            k if k == SyntaxKind::NumericLiteral as u16 || k == SyntaxKind::StringLiteral as u16 => {
                self.bind_literal(node)
            }
            k if k == SyntaxKind::TrueKeyword as u16 => BoundExpr::new(
                node,
                Some(TypeId::BOOL),
                BoundKind::Literal(ConstantValue::Bool(true)),
            ),
            k if k == SyntaxKind::FalseKeyword as u16 => BoundExpr::new(
                node,
                Some(TypeId::BOOL),
                BoundKind::Literal(ConstantValue::Bool(false)),
            ),
            k if k == SyntaxKind::NullKeyword as u16 => {
                BoundExpr::new(node, None, BoundKind::Literal(ConstantValue::Null))
            }
            k if k == SyntaxKind::Identifier as u16 => self.bind_identifier(node),
            syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION => self.bind_property_access(node, false),
            syntax_kind_ext::CALL_EXPRESSION => self.bind_call(node),
            syntax_kind_ext::PARENTHESIZED_EXPRESSION => {
                match arena.get_parenthesized(n) {
                    Some(paren) => self.bind_expression(paren.expression),
                    None => BoundExpr::bad(node, SmallVec::new(), Vec::new()),
                }
            }
            syntax_kind_ext::WITH_EXPRESSION => self.bind_with_expression(node),
            _ => BoundExpr::bad(node, SmallVec::new(), Vec::new()),
        }
    }

    fn bind_literal(&mut self, node: NodeIndex) -> BoundExpr {
        let arena = self.ctx.arena;
        let Some(literal) = arena.get(node).and_then(|n| arena.get_literal(n)) else {
            return BoundExpr::bad(node, SmallVec::new(), Vec::new());
        };
        let (ty, value) = match &literal.value {
            LiteralValue::Int(v) => (TypeId::INT, ConstantValue::Int(*v)),
            LiteralValue::Long(v) => (TypeId::LONG, ConstantValue::Long(*v)),
            LiteralValue::Double(v) => (TypeId::DOUBLE, ConstantValue::Double(*v)),
            LiteralValue::String(s) => (TypeId::STRING, ConstantValue::String(s.clone())),
            // Out of range; reported by the parser.
            LiteralValue::Invalid => return BoundExpr::bad(node, SmallVec::new(), Vec::new()),
        };
        BoundExpr::new(node, Some(ty), BoundKind::Literal(value))
    }

    fn bind_identifier(&mut self, node: NodeIndex) -> BoundExpr {
        let atom = self.ctx.arena.identifier_atom(node);
        match self.ctx.scope.lookup(atom) {
            Some(local) => BoundExpr::new(node, Some(local.ty), BoundKind::Local(local.id)),
            None => {
                let name = self.name_text(atom);
                self.error_at_node_msg(node, diagnostic_codes::NAME_DOES_NOT_EXIST, &[&name]);
                BoundExpr::bad(node, SmallVec::new(), Vec::new())
            }
        }
    }

    /// `receiver.name`, optionally as the target of a call.
    fn bind_property_access(&mut self, node: NodeIndex, invoked: bool) -> BoundExpr {
        let arena = self.ctx.arena;
        let Some(access) = arena.get(node).and_then(|n| arena.get_access_expr(n)) else {
            return BoundExpr::bad(node, SmallVec::new(), Vec::new());
        };
        let receiver = self.bind_rvalue_without_target_type(access.expression);
        let name = arena.identifier_atom(access.name);
        if name.is_none() {
            // Missing name; reported by the parser.
            return BoundExpr::bad(node, SmallVec::new(), vec![receiver]);
        }
        let mut bound = self.bind_instance_member_access(access.name, receiver, name, 0, invoked);
        bound.syntax = node;
        bound
    }

    /// `receiver.Method()`: picks the first parameterless method of the group.
    fn bind_call(&mut self, node: NodeIndex) -> BoundExpr {
        let arena = self.ctx.arena;
        let Some(call) = arena.get(node).and_then(|n| arena.get_call_expr(n)) else {
            return BoundExpr::bad(node, SmallVec::new(), Vec::new());
        };
        let target = self.bind_property_access(call.expression, true);
        let (receiver, methods) = match target.kind {
            BoundKind::MethodGroup { receiver, methods } => (receiver, methods),
            _ => {
                // Lookup failed and was reported, or the name was missing.
                let candidates = target.expression_symbol().into_iter().collect();
                return BoundExpr::bad(node, candidates, vec![target]);
            }
        };

        match methods.iter().find(|candidate| candidate.params.is_empty()) {
            Some(method) => {
                trace!(method = method.member.0, "bound call");
                let has_errors = receiver.has_errors;
                BoundExpr::new(
                    node,
                    Some(method.ty),
                    BoundKind::Call {
                        receiver,
                        method: method.member,
                    },
                )
                .with_errors(has_errors)
            }
            None => {
                let name_node = arena
                    .get(call.expression)
                    .and_then(|n| arena.get_access_expr(n))
                    .map_or(call.expression, |access| access.name);
                let name = self.name_text(arena.identifier_atom(name_node));
                self.error_at_node_msg(
                    node,
                    diagnostic_codes::NO_OVERLOAD_TAKES_ZERO_ARGUMENTS,
                    &[&name],
                );
                let candidates = methods.iter().map(|m| m.member).take(1).collect();
                BoundExpr::bad(node, candidates, vec![*receiver])
            }
        }
    }
}
