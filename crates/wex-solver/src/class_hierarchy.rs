//! Walking base classes and implemented interfaces.
//!
//! Symbol tables are expected to be acyclic. The walks still stop on a
//! repeated type and after `MAX_BASE_CHAIN_DEPTH` steps so a malformed table
//! cannot hang a query.

use crate::diagnostics::UseSiteDiagnostics;
use crate::def::{ClassDef, DefId};
use crate::instantiate::{TypeSubstitution, instantiate_type};
use crate::intern::TypeInterner;
use crate::symbol_table::SymbolTable;
use crate::types::TypeId;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::collections::VecDeque;
use wex_common::diagnostics::diagnostic_codes;
use wex_common::limits::MAX_BASE_CHAIN_DEPTH;

#[derive(Clone, Copy)]
pub struct ClassHierarchy<'a> {
    symbols: &'a SymbolTable,
    types: &'a TypeInterner,
}

impl<'a> ClassHierarchy<'a> {
    pub fn new(symbols: &'a SymbolTable, types: &'a TypeInterner) -> Self {
        ClassHierarchy { symbols, types }
    }

    /// Direct base class of `ty` with type arguments substituted.
    ///
    /// Classes without an explicit base derive from `object`. `object`,
    /// interfaces, intrinsics and type parameters have no base class. A
    /// definition whose base could not be loaded reports `BaseTypeUnresolved`
    /// into `use_site` and yields `None`.
    pub fn base_type(&self, ty: TypeId, use_site: &mut UseSiteDiagnostics) -> Option<TypeId> {
        let (def, args) = self.types.def_and_args(ty)?;
        let class = self.symbols.def(def)?;
        if class.is_interface() {
            return None;
        }
        if let Some(missing) = class.unresolved_base {
            use_site.add(diagnostic_codes::BASE_TYPE_UNRESOLVED, &[missing, class.name]);
            return None;
        }
        match class.base {
            Some(base) => Some(instantiate_type(
                self.types,
                base,
                &TypeSubstitution::new(def, args),
            )),
            None => Some(TypeId::OBJECT),
        }
    }

    /// `ty` followed by its base classes, most-derived first, ending with
    /// `object` when the chain reaches it.
    pub fn base_chain(&self, ty: TypeId, use_site: &mut UseSiteDiagnostics) -> Vec<TypeId> {
        let mut chain = vec![ty];
        let mut current = ty;
        while chain.len() <= MAX_BASE_CHAIN_DEPTH as usize {
            let Some(base) = self.base_type(current, use_site) else {
                break;
            };
            if chain.contains(&base) {
                break;
            }
            chain.push(base);
            current = base;
        }
        chain
    }

    /// Directly implemented (or extended) interfaces of `ty`, substituted.
    pub fn direct_interfaces(&self, ty: TypeId) -> SmallVec<[TypeId; 4]> {
        let Some((def, args)) = self.types.def_and_args(ty) else {
            return SmallVec::new();
        };
        let Some(class) = self.symbols.def(def) else {
            return SmallVec::new();
        };
        let subst = TypeSubstitution::new(def, args);
        class
            .interfaces
            .iter()
            .map(|&iface| instantiate_type(self.types, iface, &subst))
            .collect()
    }

    /// `ty` and every interface reachable from it, breadth first.
    pub fn interface_closure(&self, ty: TypeId) -> Vec<TypeId> {
        let mut seen = FxHashSet::default();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([ty]);
        while let Some(current) = queue.pop_front() {
            if order.len() > MAX_BASE_CHAIN_DEPTH as usize {
                break;
            }
            if !seen.insert(current) {
                continue;
            }
            order.push(current);
            queue.extend(self.direct_interfaces(current));
        }
        order
    }

    /// Whether `ty` (or `ty?`) is an interface type.
    pub fn is_interface(&self, ty: TypeId) -> bool {
        self.types
            .def_and_args(self.types.strip_nullable(ty))
            .and_then(|(def, _)| self.symbols.def(def))
            .is_some_and(ClassDef::is_interface)
    }

    /// Whether the class `from` is `target` or derives from it.
    pub fn def_derives_from(
        &self,
        from: DefId,
        target: DefId,
        use_site: &mut UseSiteDiagnostics,
    ) -> bool {
        let start = self.symbols.declared_type(self.types, from);
        self.base_chain(start, use_site)
            .into_iter()
            .any(|ty| self.types.def_and_args(ty).is_some_and(|(def, _)| def == target))
    }
}
