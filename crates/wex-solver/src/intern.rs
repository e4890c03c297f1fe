//! Thread-safe type interner.
//!
//! Every `TypeData` maps to exactly one `TypeId`. Both directions are stored
//! in `DashMap`s so binders running on different threads can intern generic
//! instantiations through a shared `&TypeInterner` without external locking.

use crate::def::DefId;
use crate::types::{IntrinsicKind, TypeArgs, TypeData, TypeId};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::trace;

#[derive(Debug)]
pub struct TypeInterner {
    ids: DashMap<TypeData, TypeId, FxBuildHasher>,
    types: DashMap<TypeId, TypeData, FxBuildHasher>,
    next_id: AtomicU32,
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInterner {
    pub fn new() -> Self {
        let interner = TypeInterner {
            ids: DashMap::with_hasher(FxBuildHasher),
            types: DashMap::with_hasher(FxBuildHasher),
            next_id: AtomicU32::new(TypeId::FIRST_USER),
        };
        for (kind, id) in IntrinsicKind::ALL {
            interner.ids.insert(TypeData::Intrinsic(kind), id);
            interner.types.insert(id, TypeData::Intrinsic(kind));
        }
        interner
    }

    /// Intern `data`, returning the existing id when it was seen before.
    pub fn intern(&self, data: TypeData) -> TypeId {
        if let Some(id) = self.ids.get(&data) {
            return *id;
        }
        match self.ids.entry(data) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let id = TypeId(self.next_id.fetch_add(1, Ordering::Relaxed));
                trace!(type_id = id.0, data = ?entry.key(), "interned type");
                // Publish the reverse mapping before the id becomes visible.
                self.types.insert(id, entry.key().clone());
                entry.insert(id);
                id
            }
        }
    }

    pub fn lookup(&self, id: TypeId) -> Option<TypeData> {
        self.types.get(&id).map(|entry| entry.value().clone())
    }

    /// Number of interned types, intrinsics included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn class(&self, def: DefId) -> TypeId {
        self.intern(TypeData::Class(def))
    }

    /// `def<args...>`. An empty argument list is the plain class type.
    pub fn application(&self, def: DefId, args: &[TypeId]) -> TypeId {
        if args.is_empty() {
            return self.class(def);
        }
        self.intern(TypeData::Application {
            def,
            args: TypeArgs::from_slice(args),
        })
    }

    pub fn type_param(&self, owner: DefId, index: u32) -> TypeId {
        self.intern(TypeData::TypeParam { owner, index })
    }

    /// `inner?`. Already-nullable and error types are returned unchanged.
    pub fn nullable(&self, inner: TypeId) -> TypeId {
        if inner.is_error() || matches!(self.lookup(inner), Some(TypeData::Nullable(_))) {
            return inner;
        }
        self.intern(TypeData::Nullable(inner))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn intrinsic_kind(&self, id: TypeId) -> Option<IntrinsicKind> {
        match self.lookup(id)? {
            TypeData::Intrinsic(kind) => Some(kind),
            _ => None,
        }
    }

    /// Underlying type of `T?`; `None` for non-nullable types.
    pub fn nullable_inner(&self, id: TypeId) -> Option<TypeId> {
        match self.lookup(id)? {
            TypeData::Nullable(inner) => Some(inner),
            _ => None,
        }
    }

    /// Strip one level of `?`.
    pub fn strip_nullable(&self, id: TypeId) -> TypeId {
        self.nullable_inner(id).unwrap_or(id)
    }

    /// Definition and type arguments of a class, interface, or application.
    pub fn def_and_args(&self, id: TypeId) -> Option<(DefId, TypeArgs)> {
        match self.lookup(id)? {
            TypeData::Class(def) => Some((def, TypeArgs::new())),
            TypeData::Application { def, args } => Some((def, args)),
            _ => None,
        }
    }
}
