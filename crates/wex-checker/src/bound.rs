//! Bound expression tree.
//!
//! The binder turns syntax into `BoundExpr` nodes: every node records the
//! syntax it came from, its static type (absent for `null` and method
//! groups), and whether it or any of its children reported an error.

use smallvec::SmallVec;
use wex_common::limits::TYPICAL_INITIALIZER_COUNT;
use wex_parser::NodeIndex;
use wex_solver::{ConversionKind, LookupCandidate, MemberId, TypeId};

/// Identifier of a local variable in a `Scope`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocalId(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub enum ConstantValue {
    Int(i32),
    Long(i64),
    Double(f64),
    String(Box<str>),
    Bool(bool),
    Null,
}

/// How a bound expression is going to be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindValueKind {
    /// Read.
    RValue,
    /// Target of an assignment.
    Assignable,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoundExpr {
    pub syntax: NodeIndex,
    pub ty: Option<TypeId>,
    pub has_errors: bool,
    pub kind: BoundKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BoundKind {
    Literal(ConstantValue),
    Local(LocalId),
    FieldAccess {
        receiver: Box<BoundExpr>,
        field: MemberId,
    },
    PropertyAccess {
        receiver: Box<BoundExpr>,
        property: MemberId,
    },
    /// Methods found by a member access that has not been invoked yet.
    MethodGroup {
        receiver: Box<BoundExpr>,
        methods: SmallVec<[LookupCandidate; 2]>,
    },
    Call {
        receiver: Box<BoundExpr>,
        method: MemberId,
    },
    Conversion {
        operand: Box<BoundExpr>,
        conversion: ConversionKind,
    },
    /// Stand-in for "the receiver after cloning" while binding `with`
    /// initializers. Never appears in a finished tree.
    ImplicitReceiver { compiler_generated: bool },
    Assignment {
        left: Box<BoundExpr>,
        right: Box<BoundExpr>,
    },
    Update(BoundUpdateExpression),
    /// A failed binding. Keeps the single candidate symbol, when there was
    /// one, and whatever children were bound.
    Bad {
        candidates: SmallVec<[MemberId; 1]>,
        children: Vec<BoundExpr>,
    },
}

impl BoundExpr {
    pub fn new(syntax: NodeIndex, ty: Option<TypeId>, kind: BoundKind) -> Self {
        BoundExpr {
            syntax,
            ty,
            has_errors: false,
            kind,
        }
    }

    #[must_use]
    pub fn with_errors(mut self, has_errors: bool) -> Self {
        self.has_errors |= has_errors;
        self
    }

    /// An error-typed bad expression.
    pub fn bad(
        syntax: NodeIndex,
        candidates: SmallVec<[MemberId; 1]>,
        children: Vec<BoundExpr>,
    ) -> Self {
        BoundExpr {
            syntax,
            ty: Some(TypeId::ERROR),
            has_errors: true,
            kind: BoundKind::Bad {
                candidates,
                children,
            },
        }
    }

    pub fn implicit_receiver(syntax: NodeIndex, ty: TypeId) -> Self {
        BoundExpr::new(
            syntax,
            Some(ty),
            BoundKind::ImplicitReceiver {
                compiler_generated: true,
            },
        )
    }

    /// The symbol this expression refers to: the field, property or called
    /// method, a method group's only method, or a bad expression's only
    /// candidate.
    pub fn expression_symbol(&self) -> Option<MemberId> {
        match &self.kind {
            BoundKind::FieldAccess { field, .. } => Some(*field),
            BoundKind::PropertyAccess { property, .. } => Some(*property),
            BoundKind::Call { method, .. } => Some(*method),
            BoundKind::MethodGroup { methods, .. } => match methods.as_slice() {
                [only] => Some(only.member),
                _ => None,
            },
            BoundKind::Bad { candidates, .. } => match candidates.as_slice() {
                [only] => Some(*only),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn is_null_literal(&self) -> bool {
        matches!(self.kind, BoundKind::Literal(ConstantValue::Null))
    }

    pub fn as_update(&self) -> Option<&BoundUpdateExpression> {
        match &self.kind {
            BoundKind::Update(update) => Some(update),
            _ => None,
        }
    }

    /// Whether the type is usable for member lookup and conversions.
    pub fn has_usable_type(&self) -> bool {
        self.ty.is_some_and(|ty| !ty.is_error())
    }
}

// =============================================================================
// Update expressions
// =============================================================================

/// One `name = value` (or bare `value`) entry of a `with` expression.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundInitializer {
    member: Option<MemberId>,
    value: BoundExpr,
}

impl BoundInitializer {
    /// The assigned member; `None` when the entry has no name or the name
    /// did not resolve to a single member.
    pub fn member(&self) -> Option<MemberId> {
        self.member
    }

    /// The value, already converted to the member's type when a member was
    /// named.
    pub fn value(&self) -> &BoundExpr {
        &self.value
    }
}

/// Append-only list of initializers, frozen once the `with` expression is
/// complete.
#[derive(Debug, Default)]
pub struct InitializerListBuilder {
    items: SmallVec<[BoundInitializer; TYPICAL_INITIALIZER_COUNT]>,
}

impl InitializerListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, member: Option<MemberId>, value: BoundExpr) {
        self.items.push(BoundInitializer { member, value });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn freeze(self) -> Box<[BoundInitializer]> {
        self.items.into_vec().into_boxed_slice()
    }
}

/// A bound `receiver with { ... }` expression.
///
/// Lowering emits a call to `clone_method` on the receiver followed by the
/// member assignments in `initializers()` order, and must skip nodes whose
/// `has_errors()` is set.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundUpdateExpression {
    receiver: Box<BoundExpr>,
    clone_method: Option<MemberId>,
    initializers: Box<[BoundInitializer]>,
    ty: TypeId,
    has_errors: bool,
}

impl BoundUpdateExpression {
    pub(crate) fn new(
        receiver: BoundExpr,
        clone_method: Option<MemberId>,
        initializers: Box<[BoundInitializer]>,
        ty: TypeId,
        has_errors: bool,
    ) -> Self {
        BoundUpdateExpression {
            receiver: Box::new(receiver),
            clone_method,
            initializers,
            ty,
            has_errors,
        }
    }

    pub fn receiver(&self) -> &BoundExpr {
        &self.receiver
    }

    pub fn clone_method(&self) -> Option<MemberId> {
        self.clone_method
    }

    pub fn initializers(&self) -> &[BoundInitializer] {
        &self.initializers
    }

    /// Clone return type, else receiver type, else the error type.
    pub fn ty(&self) -> TypeId {
        self.ty
    }

    pub fn has_errors(&self) -> bool {
        self.has_errors
    }
}
