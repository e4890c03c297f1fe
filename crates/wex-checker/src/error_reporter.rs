//! Diagnostic reporting helpers.

use crate::state::BinderState;
use std::sync::Arc;
use tracing::trace;
use wex_common::diagnostics::{DiagnosticCategory, get_diagnostic_message};
use wex_common::interner::Atom;
use wex_parser::NodeIndex;
use wex_solver::{MemberId, TypeFormatter, TypeId, UseSiteDiagnostics};

impl<'a> BinderState<'a> {
    /// Emit a templated diagnostic at `node`'s span.
    pub(crate) fn error_at_node_msg(&mut self, node: NodeIndex, code: u32, args: &[&str]) {
        let span = self.ctx.arena.span(node);
        trace!(code, start = span.start, length = span.len(), "binder diagnostic");
        self.ctx.diagnostics.add(code, span, args);
    }

    /// Report use-site diagnostics collected by a solver query at `node`.
    /// Returns whether any of them is an error.
    pub(crate) fn report_use_site(
        &mut self,
        node: NodeIndex,
        use_site: UseSiteDiagnostics,
    ) -> bool {
        let mut any_error = false;
        for diagnostic in use_site.into_vec() {
            any_error |= get_diagnostic_message(diagnostic.code)
                .is_none_or(|message| message.category == DiagnosticCategory::Error);
            let args: Vec<Arc<str>> = diagnostic
                .args
                .iter()
                .map(|&atom| self.ctx.names.resolve(atom))
                .collect();
            let args: Vec<&str> = args.iter().map(|arg| &**arg).collect();
            self.error_at_node_msg(node, diagnostic.code, &args);
        }
        any_error
    }

    fn formatter(&self) -> TypeFormatter<'a> {
        TypeFormatter::new(self.ctx.symbols, self.ctx.types, self.ctx.names)
    }

    /// Display form of a type for messages; `<null>` for the typeless
    /// `null` literal.
    pub(crate) fn format_type(&self, ty: Option<TypeId>) -> String {
        match ty {
            Some(ty) => self.formatter().format(ty),
            None => "<null>".to_string(),
        }
    }

    pub(crate) fn format_member(&self, member: MemberId) -> String {
        self.formatter().format_member(member)
    }

    pub(crate) fn name_text(&self, atom: Atom) -> Arc<str> {
        self.ctx.names.resolve(atom)
    }
}
