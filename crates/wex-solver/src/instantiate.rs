//! Generic instantiation: replacing a definition's type parameters with the
//! arguments of a concrete application.

use crate::def::DefId;
use crate::intern::TypeInterner;
use crate::types::{TypeArgs, TypeData, TypeId};

/// Maps the type parameters of one definition to type arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeSubstitution {
    owner: Option<DefId>,
    args: TypeArgs,
}

impl TypeSubstitution {
    pub fn new(owner: DefId, args: TypeArgs) -> Self {
        TypeSubstitution {
            owner: Some(owner),
            args,
        }
    }

    /// Substitution that a member access on `ty` applies to the members of
    /// `ty`'s own definition. Empty for non-generic types.
    pub fn for_type(types: &TypeInterner, ty: TypeId) -> Self {
        match types.def_and_args(ty) {
            Some((def, args)) if !args.is_empty() => TypeSubstitution::new(def, args),
            _ => TypeSubstitution::default(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    fn get(&self, owner: DefId, index: u32) -> Option<TypeId> {
        if self.owner == Some(owner) {
            self.args.get(index as usize).copied()
        } else {
            None
        }
    }
}

/// Apply `subst` to `ty`. Type parameters of other definitions, and
/// parameters without a corresponding argument, are left in place.
pub fn instantiate_type(types: &TypeInterner, ty: TypeId, subst: &TypeSubstitution) -> TypeId {
    if subst.is_empty() || ty.is_intrinsic() {
        return ty;
    }
    match types.lookup(ty) {
        Some(TypeData::TypeParam { owner, index }) => subst.get(owner, index).unwrap_or(ty),
        Some(TypeData::Application { def, args }) => {
            let args: TypeArgs = args
                .iter()
                .map(|&arg| instantiate_type(types, arg, subst))
                .collect();
            types.application(def, &args)
        }
        Some(TypeData::Nullable(inner)) => {
            types.nullable(instantiate_type(types, inner, subst))
        }
        _ => ty,
    }
}

#[cfg(test)]
#[path = "tests/instantiate_tests.rs"]
mod tests;
