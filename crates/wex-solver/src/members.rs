//! Member symbols.
//!
//! A member is one of three kinds (field, property, method) sharing a common
//! header. Binders never match on the kind directly when a capability query
//! answers the question.

use crate::def::DefId;
use crate::types::TypeId;
use serde::Serialize;
use wex_common::interner::Atom;

/// Index of a member in a `SymbolTable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MemberId(pub u32);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// Which write accessor a property declares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SetterKind {
    /// `get` only.
    #[default]
    None,
    /// `set`: assignable anywhere.
    Set,
    /// `init`: assignable only in object initializers and `with` expressions.
    Init,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemberKind {
    Field {
        ty: TypeId,
        readonly: bool,
    },
    Property {
        ty: TypeId,
        setter: SetterKind,
    },
    Method {
        params: Vec<TypeId>,
        return_type: TypeId,
        type_param_count: u32,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberSymbol {
    pub owner: DefId,
    pub name: Atom,
    pub visibility: Visibility,
    pub is_static: bool,
    /// Declared with `override`.
    pub is_override: bool,
    pub kind: MemberKind,
}

impl MemberSymbol {
    #[inline]
    pub fn is_method(&self) -> bool {
        matches!(self.kind, MemberKind::Method { .. })
    }

    /// Only methods can be invoked; fields and properties of delegate type
    /// are not modeled.
    #[inline]
    pub fn is_invocable(&self) -> bool {
        self.is_method()
    }

    /// Parameter count of a method, `None` for fields and properties.
    pub fn parameter_count(&self) -> Option<usize> {
        match &self.kind {
            MemberKind::Method { params, .. } => Some(params.len()),
            _ => None,
        }
    }

    pub fn parameters(&self) -> &[TypeId] {
        match &self.kind {
            MemberKind::Method { params, .. } => params,
            _ => &[],
        }
    }

    /// Declared type of a field or property, return type of a method.
    pub fn value_type(&self) -> TypeId {
        match &self.kind {
            MemberKind::Field { ty, .. } | MemberKind::Property { ty, .. } => *ty,
            MemberKind::Method { return_type, .. } => *return_type,
        }
    }

    /// Generic arity of the member itself.
    pub fn arity(&self) -> u32 {
        match &self.kind {
            MemberKind::Method {
                type_param_count, ..
            } => *type_param_count,
            _ => 0,
        }
    }

    /// Whether a value can be stored into this member. `init` accessors only
    /// count inside an object initializer or `with` initializer.
    pub fn is_settable(&self, in_initializer: bool) -> bool {
        match &self.kind {
            MemberKind::Field { readonly, .. } => !readonly,
            MemberKind::Property { setter, .. } => match setter {
                SetterKind::Set => true,
                SetterKind::Init => in_initializer,
                SetterKind::None => false,
            },
            MemberKind::Method { .. } => false,
        }
    }
}
