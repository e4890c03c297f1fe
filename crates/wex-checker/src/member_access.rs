//! Instance member access and assignability checks.

use crate::bound::{BindValueKind, BoundExpr, BoundKind};
use crate::state::BinderState;
use smallvec::SmallVec;
use tracing::trace;
use wex_common::diagnostics::diagnostic_codes;
use wex_common::interner::Atom;
use wex_parser::NodeIndex;
use wex_solver::{
    LookupOptions, LookupResult, LookupResultKind, MemberId, MemberKind, SetterKind, TypeId,
    UseSiteDiagnostics,
};

impl<'a> BinderState<'a> {
    /// Bind `receiver.name` where `name` must be an instance member.
    ///
    /// `syntax` is the node diagnostics point at (the member name). The
    /// result is a field access, property access, method group, or a bad
    /// expression that keeps the single candidate when lookup found one.
    pub fn bind_instance_member_access(
        &mut self,
        syntax: NodeIndex,
        receiver: BoundExpr,
        name: Atom,
        arity: u32,
        invoked: bool,
    ) -> BoundExpr {
        let receiver_type = match receiver.ty {
            Some(ty) if ty.is_error() => {
                // The receiver already reported.
                return BoundExpr::bad(syntax, SmallVec::new(), vec![receiver]);
            }
            Some(ty) => ty,
            None => {
                let member = self.name_text(name);
                self.error_at_node_msg(
                    syntax,
                    diagnostic_codes::MEMBER_NOT_FOUND,
                    &["<null>", &member],
                );
                return BoundExpr::bad(syntax, SmallVec::new(), vec![receiver]);
            }
        };

        let mut options = LookupOptions::MUST_BE_INSTANCE;
        if invoked {
            options |= LookupOptions::MUST_BE_INVOCABLE_IF_MEMBER;
        }
        let mut use_site = UseSiteDiagnostics::new();
        let result = self.resolver().lookup_members(
            receiver_type,
            name,
            arity,
            options,
            self.ctx.scope.containing_class(),
            &mut use_site,
        );
        let use_site_errors = self.report_use_site(syntax, use_site);

        let has_errors = receiver.has_errors || use_site_errors;
        match result.kind() {
            LookupResultKind::Viable => {}
            kind => {
                self.report_lookup_failure(syntax, kind, receiver_type, name, &result);
                let candidates = result
                    .single_candidate()
                    .map(|c| c.member)
                    .into_iter()
                    .collect();
                return BoundExpr::bad(syntax, candidates, vec![receiver]);
            }
        }

        let candidates = result.candidates();
        let receiver = Box::new(receiver);
        let bound = match candidates.first() {
            Some(first) if !self.is_method(first.member) => {
                let kind = if self.is_field(first.member) {
                    BoundKind::FieldAccess {
                        receiver,
                        field: first.member,
                    }
                } else {
                    BoundKind::PropertyAccess {
                        receiver,
                        property: first.member,
                    }
                };
                BoundExpr::new(syntax, Some(first.ty), kind)
            }
            _ => BoundExpr::new(
                syntax,
                None,
                BoundKind::MethodGroup {
                    receiver,
                    methods: candidates.iter().cloned().collect(),
                },
            ),
        };
        trace!(member = ?bound.expression_symbol(), "bound member access");
        bound.with_errors(has_errors)
    }

    fn report_lookup_failure(
        &mut self,
        syntax: NodeIndex,
        kind: LookupResultKind,
        receiver_type: TypeId,
        name: Atom,
        result: &LookupResult,
    ) {
        let member_display = result
            .candidates()
            .first()
            .map(|c| self.format_member(c.member));
        let member_display = member_display.unwrap_or_else(|| self.name_text(name).to_string());
        match kind {
            LookupResultKind::NotInvocable => self.error_at_node_msg(
                syntax,
                diagnostic_codes::MEMBER_NOT_INVOCABLE,
                &[&member_display],
            ),
            LookupResultKind::StaticInstanceMismatch => self.error_at_node_msg(
                syntax,
                diagnostic_codes::STATIC_MEMBER_VIA_INSTANCE,
                &[&member_display],
            ),
            LookupResultKind::Inaccessible => self.error_at_node_msg(
                syntax,
                diagnostic_codes::MEMBER_INACCESSIBLE,
                &[&member_display],
            ),
            LookupResultKind::Empty | LookupResultKind::WrongArity | LookupResultKind::Viable => {
                let type_display = self.format_type(Some(receiver_type));
                let name = self.name_text(name);
                self.error_at_node_msg(
                    syntax,
                    diagnostic_codes::MEMBER_NOT_FOUND,
                    &[&type_display, &name],
                );
            }
        }
    }

    fn is_method(&self, member: MemberId) -> bool {
        self.ctx.symbols.member(member).is_some_and(|m| m.is_method())
    }

    fn is_field(&self, member: MemberId) -> bool {
        self.ctx
            .symbols
            .member(member)
            .is_some_and(|m| matches!(m.kind, MemberKind::Field { .. }))
    }

    /// Check that `expr` can be used as `value_kind`, reporting and
    /// returning a bad expression when it cannot.
    pub fn check_value(&mut self, expr: BoundExpr, value_kind: BindValueKind) -> BoundExpr {
        match value_kind {
            BindValueKind::RValue => self.check_rvalue(expr),
            BindValueKind::Assignable => self.check_assignable(expr),
        }
    }

    fn check_rvalue(&mut self, expr: BoundExpr) -> BoundExpr {
        let BoundKind::MethodGroup { methods, .. } = &expr.kind else {
            return expr;
        };
        let display = methods
            .first()
            .map(|m| self.format_member(m.member))
            .unwrap_or_default();
        self.error_at_node_msg(
            expr.syntax,
            diagnostic_codes::METHOD_GROUP_AS_VALUE,
            &[&display],
        );
        let candidates = expr.expression_symbol().into_iter().collect();
        BoundExpr::bad(expr.syntax, candidates, vec![expr])
    }

    fn check_assignable(&mut self, expr: BoundExpr) -> BoundExpr {
        if expr.has_errors {
            return expr;
        }
        let code = match &expr.kind {
            BoundKind::FieldAccess { field, .. } => {
                let settable = self.ctx.symbols.member(*field).is_some_and(|m| m.is_settable(false));
                (!settable).then_some((diagnostic_codes::READONLY_FIELD_NOT_ASSIGNABLE, *field))
            }
            BoundKind::PropertyAccess { property, .. } => {
                let in_initializer = self.ctx.in_object_initializer;
                match self.ctx.symbols.member(*property).map(|m| &m.kind) {
                    Some(MemberKind::Property {
                        setter: SetterKind::None,
                        ..
                    }) => Some((diagnostic_codes::PROPERTY_IS_READ_ONLY, *property)),
                    Some(MemberKind::Property {
                        setter: SetterKind::Init,
                        ..
                    }) if !in_initializer => {
                        Some((diagnostic_codes::INIT_ONLY_PROPERTY_NOT_ASSIGNABLE, *property))
                    }
                    _ => None,
                }
            }
            BoundKind::MethodGroup { methods, .. } => methods
                .first()
                .map(|m| (diagnostic_codes::METHOD_GROUP_NOT_ASSIGNABLE, m.member)),
            _ => None,
        };

        let Some((code, member)) = code else {
            return expr;
        };
        let display = self.format_member(member);
        self.error_at_node_msg(expr.syntax, code, &[&display]);
        let mut candidates: SmallVec<[MemberId; 1]> = SmallVec::new();
        candidates.push(member);
        BoundExpr::bad(expr.syntax, candidates, vec![expr])
    }
}
