//! Binding of non-destructive update expressions, `receiver with { ... }`.
//!
//! The receiver is bound first, then the parameterless `Clone` method is
//! resolved on its type and checked against it. Initializers are bound one
//! by one against a compiler-generated placeholder that stands for the
//! cloned value. Every step degrades instead of stopping: a failure marks
//! the result as errored and binding continues with what is known.

use crate::bound::{
    BindValueKind, BoundExpr, BoundKind, BoundUpdateExpression, InitializerListBuilder,
};
use crate::state::BinderState;
use smallvec::SmallVec;
use tracing::{debug, trace};
use wex_common::diagnostics::diagnostic_codes;
use wex_parser::NodeIndex;
use wex_solver::{
    LookupCandidate, LookupOptions, MemberId, TypeCompareKind, TypeId, UseSiteDiagnostics,
    well_known_names,
};

/// Clone method chosen for a receiver type.
struct CloneResolution {
    method: Option<LookupCandidate>,
    has_errors: bool,
}

impl<'a> BinderState<'a> {
    /// Bind a `WITH_EXPRESSION` node into a `BoundKind::Update` expression.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn bind_with_expression(&mut self, node: NodeIndex) -> BoundExpr {
        let arena = self.ctx.arena;
        let Some(with_expr) = arena.get(node).and_then(|n| arena.get_with_expr(n)) else {
            return BoundExpr::bad(node, SmallVec::new(), Vec::new());
        };

        let (receiver, receiver_type) = self.bind_update_receiver(with_expr.receiver);
        let mut has_errors = receiver.has_errors;

        let mut clone_method = None;
        let mut result_type = receiver_type;
        if !receiver_type.is_error() {
            let resolution = self.resolve_clone_method(with_expr.receiver, receiver_type);
            has_errors |= resolution.has_errors;
            if let Some(clone) = resolution.method {
                has_errors |= !self.check_clone_return_type(
                    with_expr.receiver,
                    receiver_type,
                    clone.ty,
                );
                clone_method = Some(clone.member);
                result_type = clone.ty;
            }
        }

        let placeholder = BoundExpr::implicit_receiver(with_expr.receiver, result_type);
        let mut initializers = InitializerListBuilder::new();
        for initializer in with_expr.initializers.iter() {
            has_errors |= self.bind_update_initializer(initializer, &placeholder, &mut initializers);
        }

        debug!(
            clone = ?clone_method.map(|m: MemberId| m.0),
            initializers = initializers.len(),
            has_errors,
            "bound update expression"
        );

        let update = BoundUpdateExpression::new(
            receiver,
            clone_method,
            initializers.freeze(),
            result_type,
            has_errors,
        );
        BoundExpr::new(node, Some(result_type), BoundKind::Update(update)).with_errors(has_errors)
    }

    /// Bind the receiver as a plain value. A typeless or `void` receiver is
    /// reported and continues with the error type.
    fn bind_update_receiver(&mut self, syntax: NodeIndex) -> (BoundExpr, TypeId) {
        let mut receiver = self.bind_rvalue_without_target_type(syntax);
        let receiver_type = match receiver.ty {
            Some(ty) if ty != TypeId::VOID => ty,
            _ => {
                self.error_at_node_msg(syntax, diagnostic_codes::INVALID_UPDATE_RECEIVER_TYPE, &[]);
                receiver.has_errors = true;
                TypeId::ERROR
            }
        };
        (receiver, receiver_type)
    }

    fn resolve_clone_method(&mut self, syntax: NodeIndex, receiver_type: TypeId) -> CloneResolution {
        let name = self.ctx.names.intern(well_known_names::CLONE_METHOD_NAME);
        let mut use_site = UseSiteDiagnostics::new();
        let lookup = self.resolver().lookup_members(
            receiver_type,
            name,
            0,
            LookupOptions::MUST_BE_INSTANCE | LookupOptions::MUST_BE_INVOCABLE_IF_MEMBER,
            self.ctx.scope.containing_class(),
            &mut use_site,
        );
        // Dropped: the clone lookup reports only NoSingleCloneMethod.
        drop(use_site);

        let mut parameterless = SmallVec::<[&LookupCandidate; 2]>::new();
        if lookup.is_multi_viable() {
            parameterless.extend(lookup.candidates().iter().filter(|c| c.params.is_empty()));
        }
        trace!(
            kind = ?lookup.kind(),
            parameterless = parameterless.len(),
            "clone lookup"
        );

        let Some(&first) = parameterless.first() else {
            let receiver = self.format_type(Some(receiver_type));
            self.error_at_node_msg(syntax, diagnostic_codes::NO_SINGLE_CLONE_METHOD, &[&receiver]);
            return CloneResolution {
                method: None,
                has_errors: true,
            };
        };

        let mut has_errors = false;
        if self.ctx.options.report_ambiguous_clone
            && let Some(&second) = parameterless.get(1)
        {
            let receiver = self.format_type(Some(receiver_type));
            let first_display = self.format_member(first.member);
            let second_display = self.format_member(second.member);
            self.error_at_node_msg(
                syntax,
                diagnostic_codes::AMBIGUOUS_CLONE_METHOD,
                &[&receiver, &first_display, &second_display],
            );
            has_errors = true;
        }

        CloneResolution {
            method: Some(first.clone()),
            has_errors,
        }
    }

    /// The receiver type must be the clone's return type or derive from it.
    /// Returns `false` after reporting when it does not.
    fn check_clone_return_type(
        &mut self,
        syntax: NodeIndex,
        receiver_type: TypeId,
        return_type: TypeId,
    ) -> bool {
        let mut use_site = UseSiteDiagnostics::new();
        let derives = self.relations().is_equal_to_or_derived_from(
            receiver_type,
            return_type,
            TypeCompareKind::IgnoreNullability,
            &mut use_site,
        );
        // Dropped, as for the clone lookup.
        drop(use_site);

        if !derives {
            let receiver = self.format_type(Some(receiver_type));
            let returned = self.format_type(Some(return_type));
            self.error_at_node_msg(
                syntax,
                diagnostic_codes::CONTAINING_TYPE_MUST_DERIVE_FROM_WITH_RETURN_TYPE,
                &[&receiver, &returned],
            );
        }
        derives
    }

    /// Bind one `name = value` (or bare `value`) entry. Returns whether the
    /// entry has errors.
    fn bind_update_initializer(
        &mut self,
        node: NodeIndex,
        placeholder: &BoundExpr,
        initializers: &mut InitializerListBuilder,
    ) -> bool {
        let arena = self.ctx.arena;
        let Some(initializer) = arena.get(node).and_then(|n| arena.get_with_initializer(n)) else {
            // Not an initializer node; keep the entry count.
            initializers.push(None, BoundExpr::bad(node, SmallVec::new(), Vec::new()));
            return true;
        };

        let name = arena.identifier_atom(initializer.name);
        let member = if name.is_none() {
            None
        } else {
            let access = self.bind_instance_member_access(
                initializer.name,
                placeholder.clone(),
                name,
                0,
                false,
            );
            let was_in_initializer = std::mem::replace(&mut self.ctx.in_object_initializer, true);
            let access = self.check_value(access, BindValueKind::Assignable);
            self.ctx.in_object_initializer = was_in_initializer;
            Some(access)
        };

        let value = self.bind_value(initializer.expression, BindValueKind::RValue);
        let (symbol, value, has_errors) = match member {
            Some(member) => {
                let symbol = member.expression_symbol();
                let assignment = self.bind_assignment(node, member, value);
                let has_errors = assignment.has_errors;
                let value = match assignment.kind {
                    BoundKind::Assignment { right, .. } => *right,
                    _ => BoundExpr::bad(node, SmallVec::new(), Vec::new()),
                };
                (symbol, value, has_errors)
            }
            None => {
                let has_errors = value.has_errors;
                (None, value, has_errors)
            }
        };

        trace!(member = ?symbol.map(|m: MemberId| m.0), has_errors, "bound initializer");
        initializers.push(symbol, value);
        has_errors
    }
}
