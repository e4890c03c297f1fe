//! Binder options, local scopes and per-invocation state.

use crate::bound::LocalId;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use wex_common::diagnostics::DiagnosticBag;
use wex_common::interner::{Atom, Interner};
use wex_common::limits::MAX_EXPR_BIND_DEPTH;
use wex_parser::NodeArena;
use wex_solver::{DefId, SymbolTable, TypeInterner, TypeId};

/// Binder configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinderOptions {
    /// Report `AmbiguousCloneMethod` when more than one parameterless `Clone`
    /// survives lookup. The first one is attached either way.
    pub report_ambiguous_clone: bool,
    /// Nesting depth past which binding stops with
    /// `ExpressionTooDeeplyNested`.
    pub max_expression_depth: u32,
}

impl Default for BinderOptions {
    fn default() -> Self {
        BinderOptions {
            report_ambiguous_clone: false,
            max_expression_depth: MAX_EXPR_BIND_DEPTH,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Local {
    pub id: LocalId,
    pub ty: TypeId,
}

/// Local variables visible to an expression, and the class whose code
/// contains it (used for accessibility checks).
#[derive(Clone, Debug, Default)]
pub struct Scope {
    locals: FxHashMap<Atom, Local>,
    next_id: u32,
    containing_class: Option<DefId>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_containing_class(containing_class: DefId) -> Self {
        Scope {
            containing_class: Some(containing_class),
            ..Scope::default()
        }
    }

    /// Declare a local. Redeclaring a name shadows the earlier local with a
    /// fresh id.
    pub fn declare(&mut self, name: Atom, ty: TypeId) -> LocalId {
        let id = LocalId(self.next_id);
        self.next_id += 1;
        self.locals.insert(name, Local { id, ty });
        id
    }

    pub fn lookup(&self, name: Atom) -> Option<Local> {
        self.locals.get(&name).copied()
    }

    pub fn containing_class(&self) -> Option<DefId> {
        self.containing_class
    }

    pub fn len(&self) -> usize {
        self.locals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locals.is_empty()
    }
}

/// Everything one binder invocation reads, plus the diagnostics it writes.
pub struct BinderContext<'a> {
    pub arena: &'a NodeArena,
    pub symbols: &'a SymbolTable,
    pub types: &'a TypeInterner,
    pub names: &'a Interner,
    pub scope: &'a Scope,
    pub options: BinderOptions,
    pub diagnostics: DiagnosticBag,
    /// Current expression nesting depth.
    pub(crate) depth: u32,
    /// Set while binding the target of a `with` initializer, where `init`
    /// accessors are assignable.
    pub(crate) in_object_initializer: bool,
}

impl<'a> BinderContext<'a> {
    pub fn new(
        arena: &'a NodeArena,
        symbols: &'a SymbolTable,
        types: &'a TypeInterner,
        names: &'a Interner,
        scope: &'a Scope,
        file_name: impl Into<Arc<str>>,
        options: BinderOptions,
    ) -> Self {
        BinderContext {
            arena,
            symbols,
            types,
            names,
            scope,
            options,
            diagnostics: DiagnosticBag::new(file_name),
            depth: 0,
            in_object_initializer: false,
        }
    }
}
