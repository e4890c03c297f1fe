//! Type identifiers and interned type structure.

use crate::def::DefId;
use serde::Serialize;
use smallvec::SmallVec;

/// Handle to an interned type. Equal handles mean structurally equal types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeId(pub u32);

impl TypeId {
    /// The error type. Operations on it succeed silently so one failure does
    /// not cascade into more diagnostics.
    pub const ERROR: TypeId = TypeId(0);
    pub const VOID: TypeId = TypeId(1);
    pub const OBJECT: TypeId = TypeId(2);
    pub const INT: TypeId = TypeId(3);
    pub const LONG: TypeId = TypeId(4);
    pub const DOUBLE: TypeId = TypeId(5);
    pub const BOOL: TypeId = TypeId(6);
    pub const STRING: TypeId = TypeId(7);

    /// First id handed out for non-intrinsic types.
    pub const FIRST_USER: u32 = 8;

    #[inline]
    pub const fn is_error(self) -> bool {
        self.0 == Self::ERROR.0
    }

    #[inline]
    pub const fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_USER
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum IntrinsicKind {
    Error,
    Void,
    Object,
    Int,
    Long,
    Double,
    Bool,
    String,
}

impl IntrinsicKind {
    pub const ALL: [(IntrinsicKind, TypeId); 8] = [
        (IntrinsicKind::Error, TypeId::ERROR),
        (IntrinsicKind::Void, TypeId::VOID),
        (IntrinsicKind::Object, TypeId::OBJECT),
        (IntrinsicKind::Int, TypeId::INT),
        (IntrinsicKind::Long, TypeId::LONG),
        (IntrinsicKind::Double, TypeId::DOUBLE),
        (IntrinsicKind::Bool, TypeId::BOOL),
        (IntrinsicKind::String, TypeId::STRING),
    ];

    pub const fn name(self) -> &'static str {
        match self {
            IntrinsicKind::Error => "?",
            IntrinsicKind::Void => "void",
            IntrinsicKind::Object => "object",
            IntrinsicKind::Int => "int",
            IntrinsicKind::Long => "long",
            IntrinsicKind::Double => "double",
            IntrinsicKind::Bool => "bool",
            IntrinsicKind::String => "string",
        }
    }

    /// Numeric and boolean intrinsics are value types.
    pub const fn is_value_type(self) -> bool {
        matches!(
            self,
            IntrinsicKind::Int | IntrinsicKind::Long | IntrinsicKind::Double | IntrinsicKind::Bool
        )
    }
}

pub type TypeArgs = SmallVec<[TypeId; 2]>;

/// Structure of an interned type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    Intrinsic(IntrinsicKind),
    /// A non-generic class or interface.
    Class(DefId),
    /// A generic class or interface applied to type arguments.
    Application { def: DefId, args: TypeArgs },
    /// The `index`-th type parameter of `owner`.
    TypeParam { owner: DefId, index: u32 },
    /// `T?`
    Nullable(TypeId),
}

impl TypeData {
    /// Definition behind a class, interface, or generic application.
    pub fn def_id(&self) -> Option<DefId> {
        match self {
            TypeData::Class(def) | TypeData::Application { def, .. } => Some(*def),
            _ => None,
        }
    }
}
