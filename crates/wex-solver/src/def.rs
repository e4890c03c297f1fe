//! Nominal type definitions (classes and interfaces).

use crate::members::MemberId;
use crate::types::TypeId;
use serde::Serialize;
use wex_common::interner::Atom;

/// Index of a definition in a `SymbolTable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DefId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DefKind {
    Class,
    Interface,
}

/// A class or interface declaration.
#[derive(Clone, Debug)]
pub struct ClassDef {
    pub name: Atom,
    pub kind: DefKind,
    /// Names of the generic type parameters, in order.
    pub type_params: Vec<Atom>,
    /// Base class, written in terms of this definition's own type
    /// parameters. `None` means `object` for classes.
    pub base: Option<TypeId>,
    /// Implemented interfaces (for classes) or base interfaces (for
    /// interfaces).
    pub interfaces: Vec<TypeId>,
    /// Declared members in declaration order.
    pub members: Vec<MemberId>,
    /// Name of a base type that could not be loaded. Lookups that walk past
    /// this definition report it as a use-site diagnostic.
    pub unresolved_base: Option<Atom>,
}

impl ClassDef {
    pub fn new(name: Atom, kind: DefKind) -> Self {
        ClassDef {
            name,
            kind,
            type_params: Vec::new(),
            base: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            unresolved_base: None,
        }
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }

    #[inline]
    pub fn is_interface(&self) -> bool {
        self.kind == DefKind::Interface
    }
}
