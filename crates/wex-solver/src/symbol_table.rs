//! Symbol table: every definition and member known to a compilation.
//!
//! The table is built once with `SymbolTableBuilder` and then shared
//! read-only (usually behind an `Arc`) by every binder.

use crate::def::{ClassDef, DefId, DefKind};
use crate::intern::TypeInterner;
use crate::members::{MemberId, MemberKind, MemberSymbol, SetterKind, Visibility};
use crate::types::TypeId;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use wex_common::interner::{Atom, Interner};

#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    defs: Vec<ClassDef>,
    members: Vec<MemberSymbol>,
    by_name: FxHashMap<Atom, DefId>,
}

impl SymbolTable {
    #[inline]
    pub fn def(&self, id: DefId) -> Option<&ClassDef> {
        self.defs.get(id.0 as usize)
    }

    #[inline]
    pub fn member(&self, id: MemberId) -> Option<&MemberSymbol> {
        self.members.get(id.0 as usize)
    }

    pub fn find_def(&self, name: Atom) -> Option<DefId> {
        self.by_name.get(&name).copied()
    }

    pub fn def_count(&self) -> usize {
        self.defs.len()
    }

    /// Members of `def` (not its bases) called `name`, in declaration order.
    pub fn members_named(&self, def: DefId, name: Atom) -> SmallVec<[MemberId; 4]> {
        self.def(def)
            .map(|class| {
                class
                    .members
                    .iter()
                    .copied()
                    .filter(|&id| self.member(id).is_some_and(|m| m.name == name))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The type of `this` inside `def`: the plain class type, or the
    /// definition applied to its own type parameters.
    pub fn declared_type(&self, types: &TypeInterner, def: DefId) -> TypeId {
        let param_count = self.def(def).map_or(0, |class| class.type_params.len());
        let params: SmallVec<[TypeId; 2]> = (0..param_count as u32)
            .map(|index| types.type_param(def, index))
            .collect();
        types.application(def, &params)
    }
}

/// Incremental construction of a `SymbolTable`.
pub struct SymbolTableBuilder<'a> {
    names: &'a Interner,
    table: SymbolTable,
}

impl<'a> SymbolTableBuilder<'a> {
    pub fn new(names: &'a Interner) -> Self {
        SymbolTableBuilder {
            names,
            table: SymbolTable::default(),
        }
    }

    pub fn finish(self) -> SymbolTable {
        self.table
    }

    pub fn add_class(&mut self, name: &str, type_params: &[&str]) -> DefId {
        self.add_def(name, DefKind::Class, type_params)
    }

    pub fn add_interface(&mut self, name: &str, type_params: &[&str]) -> DefId {
        self.add_def(name, DefKind::Interface, type_params)
    }

    fn add_def(&mut self, name: &str, kind: DefKind, type_params: &[&str]) -> DefId {
        let id = DefId(self.table.defs.len() as u32);
        let atom = self.names.intern(name);
        let mut def = ClassDef::new(atom, kind);
        def.type_params = type_params.iter().map(|p| self.names.intern(p)).collect();
        self.table.defs.push(def);
        self.table.by_name.insert(atom, id);
        id
    }

    fn def_mut(&mut self, id: DefId) -> Option<&mut ClassDef> {
        self.table.defs.get_mut(id.0 as usize)
    }

    pub fn set_base(&mut self, def: DefId, base: TypeId) {
        if let Some(class) = self.def_mut(def) {
            class.base = Some(base);
        }
    }

    pub fn add_interface_impl(&mut self, def: DefId, interface: TypeId) {
        if let Some(class) = self.def_mut(def) {
            class.interfaces.push(interface);
        }
    }

    /// Record that `def`'s base type named `name` could not be loaded.
    pub fn set_unresolved_base(&mut self, def: DefId, name: &str) {
        let atom = self.names.intern(name);
        if let Some(class) = self.def_mut(def) {
            class.unresolved_base = Some(atom);
        }
    }

    /// Add a public instance member.
    pub fn add_member(&mut self, owner: DefId, name: &str, kind: MemberKind) -> MemberId {
        let id = MemberId(self.table.members.len() as u32);
        self.table.members.push(MemberSymbol {
            owner,
            name: self.names.intern(name),
            visibility: Visibility::Public,
            is_static: false,
            is_override: false,
            kind,
        });
        if let Some(class) = self.def_mut(owner) {
            class.members.push(id);
        }
        id
    }

    pub fn add_field(&mut self, owner: DefId, name: &str, ty: TypeId) -> MemberId {
        self.add_member(owner, name, MemberKind::Field { ty, readonly: false })
    }

    pub fn add_readonly_field(&mut self, owner: DefId, name: &str, ty: TypeId) -> MemberId {
        self.add_member(owner, name, MemberKind::Field { ty, readonly: true })
    }

    pub fn add_property(
        &mut self,
        owner: DefId,
        name: &str,
        ty: TypeId,
        setter: SetterKind,
    ) -> MemberId {
        self.add_member(owner, name, MemberKind::Property { ty, setter })
    }

    pub fn add_method(
        &mut self,
        owner: DefId,
        name: &str,
        params: &[TypeId],
        return_type: TypeId,
    ) -> MemberId {
        self.add_member(
            owner,
            name,
            MemberKind::Method {
                params: params.to_vec(),
                return_type,
                type_param_count: 0,
            },
        )
    }

    fn member_mut(&mut self, id: MemberId) -> Option<&mut MemberSymbol> {
        self.table.members.get_mut(id.0 as usize)
    }

    pub fn set_visibility(&mut self, id: MemberId, visibility: Visibility) {
        if let Some(member) = self.member_mut(id) {
            member.visibility = visibility;
        }
    }

    pub fn set_static(&mut self, id: MemberId, is_static: bool) {
        if let Some(member) = self.member_mut(id) {
            member.is_static = is_static;
        }
    }

    pub fn set_override(&mut self, id: MemberId, is_override: bool) {
        if let Some(member) = self.member_mut(id) {
            member.is_override = is_override;
        }
    }

    /// Make a method generic with `count` type parameters.
    pub fn set_method_type_params(&mut self, id: MemberId, count: u32) {
        if let Some(MemberSymbol {
            kind: MemberKind::Method {
                type_param_count, ..
            },
            ..
        }) = self.member_mut(id)
        {
            *type_param_count = count;
        }
    }
}
