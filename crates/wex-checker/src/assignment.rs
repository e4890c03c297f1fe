//! Simple assignment and implicit conversion of the assigned value.

use crate::bound::{BoundExpr, BoundKind};
use crate::state::BinderState;
use tracing::trace;
use wex_common::diagnostics::diagnostic_codes;
use wex_parser::NodeIndex;
use wex_solver::{ConversionKind, TypeId, UseSiteDiagnostics};

impl<'a> BinderState<'a> {
    /// Bind `left = right`. The right side of the result is `right`
    /// converted to the type of `left`.
    pub fn bind_assignment(
        &mut self,
        syntax: NodeIndex,
        left: BoundExpr,
        right: BoundExpr,
    ) -> BoundExpr {
        if left.has_errors || !left.has_usable_type() {
            let has_errors = left.has_errors || right.has_errors;
            return BoundExpr::new(
                syntax,
                left.ty,
                BoundKind::Assignment {
                    left: Box::new(left),
                    right: Box::new(right),
                },
            )
            .with_errors(has_errors);
        }

        let target = left.ty.unwrap_or(TypeId::ERROR);
        let right = self.convert_for_assignment(right, target);
        let has_errors = right.has_errors;
        BoundExpr::new(
            syntax,
            Some(target),
            BoundKind::Assignment {
                left: Box::new(left),
                right: Box::new(right),
            },
        )
        .with_errors(has_errors)
    }

    /// Apply the implicit conversion from `expr` to `target`, reporting when
    /// none exists.
    pub fn convert_for_assignment(&mut self, expr: BoundExpr, target: TypeId) -> BoundExpr {
        let mut use_site_errors = false;
        let conversion = match expr.ty {
            _ if expr.is_null_literal() => self.relations().null_literal_conversion(target),
            Some(ty) => {
                let mut use_site = UseSiteDiagnostics::new();
                let conversion = self.relations().classify_conversion(ty, target, &mut use_site);
                use_site_errors = self.report_use_site(expr.syntax, use_site);
                conversion
            }
            // Method groups were rejected by `check_value`.
            None => ConversionKind::Identity,
        };
        trace!(?conversion, target = target.0, "assignment conversion");

        match conversion {
            ConversionKind::Identity => expr.with_errors(use_site_errors),
            kind if kind.is_implicit() => {
                let has_errors = expr.has_errors || use_site_errors;
                BoundExpr::new(
                    expr.syntax,
                    Some(target),
                    BoundKind::Conversion {
                        operand: Box::new(expr),
                        conversion: kind,
                    },
                )
                .with_errors(has_errors)
            }
            kind => {
                let code = if kind == ConversionKind::ExplicitExists {
                    diagnostic_codes::CANNOT_IMPLICITLY_CONVERT_EXPLICIT_EXISTS
                } else {
                    diagnostic_codes::CANNOT_IMPLICITLY_CONVERT
                };
                let from = self.format_type(expr.ty);
                let to = self.format_type(Some(target));
                self.error_at_node_msg(expr.syntax, code, &[&from, &to]);
                BoundExpr::new(
                    expr.syntax,
                    Some(target),
                    BoundKind::Conversion {
                        operand: Box::new(expr),
                        conversion: kind,
                    },
                )
                .with_errors(true)
            }
        }
    }
}
