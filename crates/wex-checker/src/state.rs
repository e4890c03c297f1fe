//! Binder state.
//!
//! `BinderState` is split across modules by concern, each adding an
//! `impl<'a> BinderState<'a>` block:
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | `expr` | dispatch, literals, names, calls, depth guard |
//! | `member_access` | instance member access, assignability |
//! | `assignment` | assignment and implicit conversion |
//! | `with_expression` | `receiver with { ... }` |
//! | `error_reporter` | diagnostic helpers |

use crate::context::{BinderContext, BinderOptions, Scope};
use std::sync::Arc;
use wex_common::diagnostics::DiagnosticBag;
use wex_common::interner::Interner;
use wex_parser::NodeArena;
use wex_solver::{MemberResolver, SymbolTable, TypeInterner, TypeRelations};

pub struct BinderState<'a> {
    pub ctx: BinderContext<'a>,
}

impl<'a> BinderState<'a> {
    pub fn new(
        arena: &'a NodeArena,
        symbols: &'a SymbolTable,
        types: &'a TypeInterner,
        names: &'a Interner,
        scope: &'a Scope,
        file_name: impl Into<Arc<str>>,
        options: BinderOptions,
    ) -> Self {
        BinderState {
            ctx: BinderContext::new(arena, symbols, types, names, scope, file_name, options),
        }
    }

    /// Consume the binder, returning everything it reported.
    pub fn into_diagnostics(self) -> DiagnosticBag {
        self.ctx.diagnostics
    }

    pub(crate) fn resolver(&self) -> MemberResolver<'a> {
        MemberResolver::new(self.ctx.symbols, self.ctx.types)
    }

    pub(crate) fn relations(&self) -> TypeRelations<'a> {
        TypeRelations::new(self.ctx.symbols, self.ctx.types)
    }
}
