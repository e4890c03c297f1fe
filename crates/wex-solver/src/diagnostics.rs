//! Use-site diagnostics.
//!
//! Problems found while walking a type's definition rather than the syntax
//! being bound, for example a base type that could not be loaded. Solver
//! queries append them to a caller-owned `UseSiteDiagnostics`; the caller
//! decides whether to report them at its syntax node or to drop them.

use smallvec::SmallVec;
use wex_common::interner::Atom;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UseSiteDiagnostic {
    pub code: u32,
    /// Message arguments as interned names.
    pub args: SmallVec<[Atom; 2]>,
}

#[derive(Clone, Debug, Default)]
pub struct UseSiteDiagnostics {
    diagnostics: Vec<UseSiteDiagnostic>,
}

impl UseSiteDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic. Repeats of an identical diagnostic are dropped.
    pub fn add(&mut self, code: u32, args: &[Atom]) {
        let diagnostic = UseSiteDiagnostic {
            code,
            args: SmallVec::from_slice(args),
        };
        if !self.diagnostics.contains(&diagnostic) {
            self.diagnostics.push(diagnostic);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UseSiteDiagnostic> {
        self.diagnostics.iter()
    }

    pub fn into_vec(self) -> Vec<UseSiteDiagnostic> {
        self.diagnostics
    }
}
