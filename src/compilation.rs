//! Binding many independent expressions against one symbol table.
//!
//! Each request is parsed and bound by its own `BinderState` with its own
//! `DiagnosticBag`. The symbol table is shared read-only; the name and type
//! interners are thread-safe, so requests are bound on rayon workers and
//! their bags are appended to a shared `ConcurrentDiagnosticSink`.
//!
//! Generic instantiations interned while binding get fresh `TypeId`s in
//! whatever order the workers reach them. Types known before binding
//! starts keep their ids.

use crate::config::CompilationOptions;
use rayon::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, trace};
use wex_checker::{BinderState, BoundExpr, Scope};
use wex_common::diagnostics::{ConcurrentDiagnosticSink, Diagnostic};
use wex_common::interner::Interner;
use wex_parser::NodeArena;
use wex_solver::{SymbolTable, TypeInterner};

/// Cooperative cancellation flag, checked before each request is bound.
/// A request that has started always finishes.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// One expression to bind.
#[derive(Clone, Debug)]
pub struct BindRequest {
    pub file_name: Arc<str>,
    pub text: String,
    pub scope: Scope,
}

impl BindRequest {
    pub fn new(file_name: impl Into<Arc<str>>, text: impl Into<String>, scope: Scope) -> Self {
        BindRequest {
            file_name: file_name.into(),
            text: text.into(),
            scope,
        }
    }
}

/// A bound expression together with the syntax it points into.
#[derive(Debug)]
pub struct BindResult {
    pub file_name: Arc<str>,
    pub arena: NodeArena,
    pub expr: BoundExpr,
    /// Whether parsing or binding reported anything for this request.
    pub has_diagnostics: bool,
}

/// Outcome of `Compilation::bind_all`.
#[derive(Debug, Default)]
pub struct CompilationResult {
    /// One slot per request, in request order. `None` when the request was
    /// skipped because of cancellation.
    pub results: Vec<Option<BindResult>>,
    /// Every diagnostic, sorted by file and position.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationResult {
    pub fn bound(&self) -> impl Iterator<Item = &BindResult> + '_ {
        self.results.iter().flatten()
    }

    pub fn skipped(&self) -> usize {
        self.results.iter().filter(|r| r.is_none()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Shared, immutable inputs for binding.
pub struct Compilation {
    names: Arc<Interner>,
    types: Arc<TypeInterner>,
    symbols: Arc<SymbolTable>,
    options: CompilationOptions,
}

impl Compilation {
    pub fn new(
        names: Arc<Interner>,
        types: Arc<TypeInterner>,
        symbols: Arc<SymbolTable>,
        options: CompilationOptions,
    ) -> Self {
        Compilation {
            names,
            types,
            symbols,
            options,
        }
    }

    pub fn names(&self) -> &Interner {
        &self.names
    }

    pub fn types(&self) -> &TypeInterner {
        &self.types
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn options(&self) -> &CompilationOptions {
        &self.options
    }

    /// Bind every request on the rayon thread pool.
    #[tracing::instrument(level = "debug", skip_all, fields(requests = requests.len()))]
    pub fn bind_all(
        &self,
        requests: &[BindRequest],
        cancellation: &CancellationToken,
    ) -> CompilationResult {
        let sink = ConcurrentDiagnosticSink::new();
        let results: Vec<Option<BindResult>> = requests
            .par_iter()
            .map(|request| self.bind_unless_cancelled(request, cancellation, &sink))
            .collect();
        self.finish(results, sink)
    }

    /// Bind every request on the calling thread, in order.
    pub fn bind_all_sequential(
        &self,
        requests: &[BindRequest],
        cancellation: &CancellationToken,
    ) -> CompilationResult {
        let sink = ConcurrentDiagnosticSink::new();
        let results: Vec<Option<BindResult>> = requests
            .iter()
            .map(|request| self.bind_unless_cancelled(request, cancellation, &sink))
            .collect();
        self.finish(results, sink)
    }

    fn finish(
        &self,
        results: Vec<Option<BindResult>>,
        sink: ConcurrentDiagnosticSink,
    ) -> CompilationResult {
        let result = CompilationResult {
            results,
            diagnostics: sink.into_sorted(),
        };
        debug!(
            bound = result.bound().count(),
            skipped = result.skipped(),
            diagnostics = result.diagnostics.len(),
            "bind_all finished"
        );
        result
    }

    fn bind_unless_cancelled(
        &self,
        request: &BindRequest,
        cancellation: &CancellationToken,
        sink: &ConcurrentDiagnosticSink,
    ) -> Option<BindResult> {
        if cancellation.is_cancelled() {
            trace!(file = %request.file_name, "skipped after cancellation");
            return None;
        }
        Some(self.bind_one(request, sink))
    }

    /// Parse and bind a single request, appending its diagnostics to `sink`.
    pub fn bind_one(&self, request: &BindRequest, sink: &ConcurrentDiagnosticSink) -> BindResult {
        let parsed = wex_parser::parse_expression(
            Arc::clone(&request.file_name),
            &request.text,
            &self.names,
        );
        let mut binder = BinderState::new(
            &parsed.arena,
            &self.symbols,
            &self.types,
            &self.names,
            &request.scope,
            Arc::clone(&request.file_name),
            self.options.binder_options(),
        );
        let expr = binder.bind_expression(parsed.root);

        let mut diagnostics = parsed.diagnostics;
        diagnostics.extend(binder.into_diagnostics());
        let has_diagnostics = !diagnostics.is_empty();
        trace!(
            file = %request.file_name,
            diagnostics = diagnostics.len(),
            "bound request"
        );
        sink.append(diagnostics);

        BindResult {
            file_name: Arc::clone(&request.file_name),
            arena: parsed.arena,
            expr,
            has_diagnostics,
        }
    }
}
