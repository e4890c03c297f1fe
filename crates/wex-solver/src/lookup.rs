//! Member lookup.
//!
//! Finds the members with a given name in a type and its inheritance chain
//! and classifies how usable the best of them are.
//!
//! ## Walk order
//!
//! Classes are searched from the type itself up through its base classes
//! (most-derived first). Interface types are searched together with every
//! interface they extend, breadth first.
//!
//! ## Hiding
//!
//! - A field or property hides everything with that name in the levels
//!   below it; the walk stops there.
//! - Methods accumulate across levels, except that a base class method
//!   whose parameter list matches a method collected from a more derived
//!   class is skipped (it is overridden or hidden by signature). Methods of
//!   one level, and methods of interfaces, never hide each other.
//! - A field or property in a base class is hidden by a method of the same
//!   name in a derived class.
//!
//! ## Result
//!
//! Every candidate is classified into a `LookupResultKind`. The result keeps
//! the best kind seen and the candidates that reached it, in walk order.

use crate::class_hierarchy::ClassHierarchy;
use crate::def::DefId;
use crate::diagnostics::UseSiteDiagnostics;
use crate::instantiate::{TypeSubstitution, instantiate_type};
use crate::intern::TypeInterner;
use crate::members::{MemberId, MemberSymbol, Visibility};
use crate::symbol_table::SymbolTable;
use crate::types::TypeId;
use bitflags::bitflags;
use smallvec::SmallVec;
use tracing::trace;
use wex_common::interner::Atom;

/// Names the binder looks up by convention.
pub mod well_known_names {
    /// The parameterless instance method a `with` expression calls to copy
    /// its receiver.
    pub const CLONE_METHOD_NAME: &str = "Clone";
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LookupOptions: u8 {
        /// Static members are not viable.
        const MUST_BE_INSTANCE = 1 << 0;
        /// Members that cannot be invoked are not viable.
        const MUST_BE_INVOCABLE_IF_MEMBER = 1 << 1;
    }
}

/// How usable the best candidate of a lookup is, worst first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LookupResultKind {
    #[default]
    Empty,
    WrongArity,
    NotInvocable,
    StaticInstanceMismatch,
    Inaccessible,
    Viable,
}

/// A member found by lookup, with its types instantiated for the receiver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupCandidate {
    pub member: MemberId,
    /// Field/property type or method return type.
    pub ty: TypeId,
    /// Method parameter types; empty for fields and properties.
    pub params: SmallVec<[TypeId; 4]>,
}

#[derive(Clone, Debug, Default)]
pub struct LookupResult {
    kind: LookupResultKind,
    candidates: SmallVec<[LookupCandidate; 4]>,
}

impl LookupResult {
    #[inline]
    pub fn kind(&self) -> LookupResultKind {
        self.kind
    }

    /// Candidates of the best kind, most-derived first.
    #[inline]
    pub fn candidates(&self) -> &[LookupCandidate] {
        &self.candidates
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// At least one viable candidate.
    pub fn is_multi_viable(&self) -> bool {
        self.kind == LookupResultKind::Viable
    }

    /// Exactly one viable candidate.
    pub fn is_single_viable(&self) -> bool {
        self.is_multi_viable() && self.candidates.len() == 1
    }

    /// The only candidate, whatever its kind.
    pub fn single_candidate(&self) -> Option<&LookupCandidate> {
        match self.candidates.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn symbols(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.candidates.iter().map(|c| c.member)
    }

    fn merge(&mut self, kind: LookupResultKind, candidate: LookupCandidate) {
        if kind > self.kind {
            self.kind = kind;
            self.candidates.clear();
        }
        if kind == self.kind {
            self.candidates.push(candidate);
        }
    }
}

/// Member lookup over one symbol table.
#[derive(Clone, Copy)]
pub struct MemberResolver<'a> {
    symbols: &'a SymbolTable,
    types: &'a TypeInterner,
    hierarchy: ClassHierarchy<'a>,
}

impl<'a> MemberResolver<'a> {
    pub fn new(symbols: &'a SymbolTable, types: &'a TypeInterner) -> Self {
        MemberResolver {
            symbols,
            types,
            hierarchy: ClassHierarchy::new(symbols, types),
        }
    }

    /// Look up members called `name` with generic arity `arity` in `ty`.
    ///
    /// `access_from` is the class whose code performs the access (`None`
    /// outside any class). Problems with the type's definitions are appended
    /// to `use_site`.
    #[tracing::instrument(level = "trace", skip(self, use_site))]
    pub fn lookup_members(
        &self,
        ty: TypeId,
        name: Atom,
        arity: u32,
        options: LookupOptions,
        access_from: Option<DefId>,
        use_site: &mut UseSiteDiagnostics,
    ) -> LookupResult {
        let mut result = LookupResult::default();
        let start = self.types.strip_nullable(ty);
        if self.types.def_and_args(start).is_none() {
            return result;
        }

        let is_interface = self.hierarchy.is_interface(start);
        let levels = if is_interface {
            self.hierarchy.interface_closure(start)
        } else {
            self.hierarchy.base_chain(start, use_site)
        };

        let mut signatures: SmallVec<[(u32, SmallVec<[TypeId; 4]>); 4]> = SmallVec::new();
        let mut level_signatures: SmallVec<[(u32, SmallVec<[TypeId; 4]>); 4]> = SmallVec::new();
        for level in levels {
            if !is_interface {
                signatures.append(&mut level_signatures);
            }
            let Some((def, _)) = self.types.def_and_args(level) else {
                continue;
            };
            let ids = self.symbols.members_named(def, name);
            if ids.is_empty() {
                continue;
            }

            let subst = TypeSubstitution::for_type(self.types, level);
            let methods_above = !signatures.is_empty() || !level_signatures.is_empty();
            let mut hides_below = false;
            for id in ids {
                let Some(member) = self.symbols.member(id) else {
                    continue;
                };
                let params: SmallVec<[TypeId; 4]> = member
                    .parameters()
                    .iter()
                    .map(|&param| instantiate_type(self.types, param, &subst))
                    .collect();

                if member.is_method() {
                    let arity = member.arity();
                    if signatures.iter().any(|(a, p)| *a == arity && *p == params) {
                        trace!(member = id.0, "skipping overridden method");
                        continue;
                    }
                    level_signatures.push((arity, params.clone()));
                } else if methods_above {
                    continue;
                } else {
                    hides_below = true;
                }

                let kind = self.classify(member, arity, options, access_from, use_site);
                let candidate = LookupCandidate {
                    member: id,
                    ty: instantiate_type(self.types, member.value_type(), &subst),
                    params,
                };
                result.merge(kind, candidate);
            }

            if hides_below {
                break;
            }
        }

        trace!(
            kind = ?result.kind,
            candidates = result.candidates.len(),
            "lookup_members"
        );
        result
    }

    fn classify(
        &self,
        member: &MemberSymbol,
        arity: u32,
        options: LookupOptions,
        access_from: Option<DefId>,
        use_site: &mut UseSiteDiagnostics,
    ) -> LookupResultKind {
        if member.arity() != arity {
            LookupResultKind::WrongArity
        } else if options.contains(LookupOptions::MUST_BE_INVOCABLE_IF_MEMBER)
            && !member.is_invocable()
        {
            LookupResultKind::NotInvocable
        } else if options.contains(LookupOptions::MUST_BE_INSTANCE) && member.is_static {
            LookupResultKind::StaticInstanceMismatch
        } else if !self.is_accessible(member, access_from, use_site) {
            LookupResultKind::Inaccessible
        } else {
            LookupResultKind::Viable
        }
    }

    /// Accessibility of `member` from code inside `access_from`.
    pub fn is_accessible(
        &self,
        member: &MemberSymbol,
        access_from: Option<DefId>,
        use_site: &mut UseSiteDiagnostics,
    ) -> bool {
        match member.visibility {
            Visibility::Public => true,
            Visibility::Private => access_from == Some(member.owner),
            Visibility::Protected => access_from.is_some_and(|from| {
                self.hierarchy.def_derives_from(from, member.owner, use_site)
            }),
        }
    }
}

#[cfg(test)]
#[path = "tests/lookup_tests.rs"]
mod tests;
