//! String Interner for identifier deduplication.
//!
//! Identifiers are interned into a shared pool and passed around as u32
//! indices (Atoms). The parser interns member and local names while the
//! symbol table interns declared names into the same pool, so name comparison
//! during member lookup is an integer comparison.
//!
//! The interner is shared between threads: a compilation parses and binds
//! many expressions concurrently against one pool.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};

/// An interned string identifier.
///
/// Atoms are cheap to copy (just a u32) and can be compared with == in O(1).
/// To get the actual string, use `Interner::resolve(atom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// A sentinel value representing no atom / empty string.
    pub const NONE: Atom = Atom(0);

    /// Check if this is the empty/none atom.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

#[derive(Default)]
struct InternerInner {
    map: FxHashMap<Arc<str>, Atom>,
    strings: Vec<Arc<str>>,
}

/// Thread-safe string interner.
///
/// Index 0 is reserved for the empty string so that `Atom::NONE` resolves
/// to `""` and missing identifiers produced by parser recovery intern to it.
pub struct Interner {
    inner: RwLock<InternerInner>,
}

impl Interner {
    pub fn new() -> Self {
        let empty: Arc<str> = Arc::from("");
        let mut inner = InternerInner::default();
        inner.map.insert(Arc::clone(&empty), Atom::NONE);
        inner.strings.push(empty);
        Interner {
            inner: RwLock::new(inner),
        }
    }

    /// Intern a string, returning its atom.
    pub fn intern(&self, text: &str) -> Atom {
        if let Some(&atom) = self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .map
            .get(text)
        {
            return atom;
        }

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have interned the string between the two locks.
        if let Some(&atom) = inner.map.get(text) {
            return atom;
        }
        let atom = Atom(inner.strings.len() as u32);
        let text: Arc<str> = Arc::from(text);
        inner.strings.push(Arc::clone(&text));
        inner.map.insert(text, atom);
        atom
    }

    /// Look up an atom without interning.
    pub fn get(&self, text: &str) -> Option<Atom> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .map
            .get(text)
            .copied()
    }

    /// Resolve an atom back to its text. Unknown atoms resolve to `""`.
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .strings
            .get(atom.0 as usize)
            .cloned()
            .unwrap_or_else(|| Arc::clone(&inner.strings[0]))
    }

    /// Number of distinct strings, including the reserved empty string.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .strings
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Interner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interner").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
#[path = "tests/interner_tests.rs"]
mod tests;
