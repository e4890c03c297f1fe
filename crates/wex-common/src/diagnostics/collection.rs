//! Diagnostic collection.
//!
//! A `DiagnosticBag` is owned by exactly one binder invocation. When the
//! invocation finishes, its bag is appended to a `ConcurrentDiagnosticSink`
//! shared by every worker of the compilation. The sink is append-only and
//! promises no ordering between bags; within a bag, order is preserved.

use super::Diagnostic;
use crate::span::Span;
use std::sync::{Arc, Mutex, PoisonError};

/// Local, append-only diagnostic list for one file or one binder invocation.
#[derive(Clone, Debug)]
pub struct DiagnosticBag {
    file: Arc<str>,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new(file: impl Into<Arc<str>>) -> Self {
        DiagnosticBag {
            file: file.into(),
            diagnostics: Vec::new(),
        }
    }

    pub fn file(&self) -> &Arc<str> {
        &self.file
    }

    /// Report a diagnostic from the message table at `span`.
    pub fn add(&mut self, code: u32, span: Span, args: &[&str]) {
        self.diagnostics.push(Diagnostic::from_code(
            Arc::clone(&self.file),
            span.start,
            span.len(),
            code,
            args,
        ));
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, other: DiagnosticBag) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Codes in report order; convenient for assertions.
    pub fn codes(&self) -> Vec<u32> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl<'a> IntoIterator for &'a DiagnosticBag {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Shared sink that accepts whole bags from concurrent workers.
#[derive(Debug, Default)]
pub struct ConcurrentDiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl ConcurrentDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every diagnostic of `bag`. Diagnostics of one bag stay contiguous.
    pub fn append(&self, bag: DiagnosticBag) {
        if bag.is_empty() {
            return;
        }
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(bag.into_vec());
    }

    pub fn len(&self) -> usize {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the sink. Diagnostics are sorted by file and position so the
    /// result does not depend on worker scheduling.
    pub fn into_sorted(self) -> Vec<Diagnostic> {
        let mut diagnostics = self
            .diagnostics
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        diagnostics.sort_by(|a, b| {
            (&a.file, a.start, a.length, a.code).cmp(&(&b.file, b.start, b.length, b.code))
        });
        diagnostics
    }
}
