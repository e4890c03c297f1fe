//! Type identity, derivation and conversion classification.
//!
//! Generic arguments are invariant: `Box<Shape>` and `Box<Circle>` are
//! unrelated even when `Circle` derives from `Shape`.

use crate::class_hierarchy::ClassHierarchy;
use crate::diagnostics::UseSiteDiagnostics;
use crate::intern::TypeInterner;
use crate::symbol_table::SymbolTable;
use crate::types::{IntrinsicKind, TypeData, TypeId};
use serde::Serialize;
use tracing::trace;

/// How strictly two types must match to count as identical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum TypeCompareKind {
    #[default]
    Exact,
    /// `T` and `T?` are identical, at the top level and inside type
    /// arguments.
    IgnoreNullability,
}

/// Result of classifying a conversion from one type to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ConversionKind {
    Identity,
    /// `int -> long`, `int -> double`, `long -> double`.
    ImplicitNumeric,
    /// `T -> U?` where `T -> U` is an identity or numeric conversion.
    ImplicitNullable,
    /// Derived class to base class, class to implemented interface, any
    /// reference type to `object`.
    ImplicitReference,
    /// Value type to `object`.
    Boxing,
    /// `null` to a reference or nullable type.
    NullLiteral,
    /// Only an explicit (cast) conversion exists.
    ExplicitExists,
    None,
}

impl ConversionKind {
    #[inline]
    pub fn is_implicit(self) -> bool {
        !matches!(self, ConversionKind::ExplicitExists | ConversionKind::None)
    }
}

/// Whether `a` and `b` are the same type under `compare`.
pub fn are_identical(types: &TypeInterner, a: TypeId, b: TypeId, compare: TypeCompareKind) -> bool {
    if a == b {
        return true;
    }
    if compare == TypeCompareKind::Exact {
        return false;
    }
    let (a, b) = (types.strip_nullable(a), types.strip_nullable(b));
    if a == b {
        return true;
    }
    match (types.lookup(a), types.lookup(b)) {
        (
            Some(TypeData::Application { def: def_a, args: args_a }),
            Some(TypeData::Application { def: def_b, args: args_b }),
        ) => {
            def_a == def_b
                && args_a.len() == args_b.len()
                && args_a
                    .iter()
                    .zip(args_b.iter())
                    .all(|(&x, &y)| are_identical(types, x, y, compare))
        }
        _ => false,
    }
}

/// Derivation and conversion queries over one symbol table.
#[derive(Clone, Copy)]
pub struct TypeRelations<'a> {
    types: &'a TypeInterner,
    hierarchy: ClassHierarchy<'a>,
}

impl<'a> TypeRelations<'a> {
    pub fn new(symbols: &'a SymbolTable, types: &'a TypeInterner) -> Self {
        TypeRelations {
            types,
            hierarchy: ClassHierarchy::new(symbols, types),
        }
    }

    /// Whether `ty` is `target` or one of `target`'s subclasses, walking base
    /// classes only. Every class derives from `object`.
    pub fn is_equal_to_or_derived_from(
        &self,
        ty: TypeId,
        target: TypeId,
        compare: TypeCompareKind,
        use_site: &mut UseSiteDiagnostics,
    ) -> bool {
        let start = self.types.strip_nullable(ty);
        let result = self
            .hierarchy
            .base_chain(start, use_site)
            .into_iter()
            .any(|candidate| are_identical(self.types, candidate, target, compare));
        trace!(ty = ty.0, target = target.0, result, "is_equal_to_or_derived_from");
        result
    }

    /// Whether `ty` or one of its base classes implements `interface`,
    /// directly or through interface inheritance.
    pub fn implements_interface(
        &self,
        ty: TypeId,
        interface: TypeId,
        use_site: &mut UseSiteDiagnostics,
    ) -> bool {
        let start = self.types.strip_nullable(ty);
        self.hierarchy
            .base_chain(start, use_site)
            .into_iter()
            .flat_map(|class| self.hierarchy.interface_closure(class))
            .any(|candidate| {
                are_identical(
                    self.types,
                    candidate,
                    interface,
                    TypeCompareKind::IgnoreNullability,
                )
            })
    }

    /// `object`, `string`, classes, interfaces and their `?` forms.
    pub fn is_reference_type(&self, ty: TypeId) -> bool {
        let ty = self.types.strip_nullable(ty);
        if ty == TypeId::OBJECT || ty == TypeId::STRING {
            return true;
        }
        self.types.def_and_args(ty).is_some()
    }

    /// Conversion from the `null` literal to `to`.
    pub fn null_literal_conversion(&self, to: TypeId) -> ConversionKind {
        if to.is_error()
            || self.is_reference_type(to)
            || self.types.nullable_inner(to).is_some()
        {
            ConversionKind::NullLiteral
        } else {
            ConversionKind::None
        }
    }

    /// Classify the conversion of a value of type `from` to type `to`.
    ///
    /// The error type converts to and from everything so a failure is only
    /// reported once.
    pub fn classify_conversion(
        &self,
        from: TypeId,
        to: TypeId,
        use_site: &mut UseSiteDiagnostics,
    ) -> ConversionKind {
        if from.is_error() || to.is_error() || from == to {
            return ConversionKind::Identity;
        }

        if self.is_reference_type(from) && self.is_reference_type(to) {
            return self.classify_reference_conversion(from, to, use_site);
        }

        let from_kind = self.types.intrinsic_kind(from);
        let to_kind = self.types.intrinsic_kind(to);
        if let (Some(from_kind), Some(to_kind)) = (from_kind, to_kind) {
            return classify_numeric(from_kind, to_kind);
        }

        if let Some(to_inner) = self.types.nullable_inner(to) {
            let from_inner = self.types.nullable_inner(from).unwrap_or(from);
            return match self.classify_conversion(from_inner, to_inner, use_site) {
                ConversionKind::Identity | ConversionKind::ImplicitNumeric => {
                    ConversionKind::ImplicitNullable
                }
                ConversionKind::None => ConversionKind::None,
                _ => ConversionKind::ExplicitExists,
            };
        }

        if let Some(from_inner) = self.types.nullable_inner(from) {
            return match self.classify_conversion(from_inner, to, use_site) {
                ConversionKind::None => ConversionKind::None,
                ConversionKind::Boxing => ConversionKind::Boxing,
                _ => ConversionKind::ExplicitExists,
            };
        }

        ConversionKind::None
    }

    fn classify_reference_conversion(
        &self,
        from: TypeId,
        to: TypeId,
        use_site: &mut UseSiteDiagnostics,
    ) -> ConversionKind {
        let compare = TypeCompareKind::IgnoreNullability;
        let (from, to) = (self.types.strip_nullable(from), self.types.strip_nullable(to));
        if are_identical(self.types, from, to, compare) {
            return ConversionKind::Identity;
        }
        if to == TypeId::OBJECT
            || self.is_equal_to_or_derived_from(from, to, compare, use_site)
            || self.implements_interface(from, to, use_site)
        {
            return ConversionKind::ImplicitReference;
        }
        if from == TypeId::OBJECT
            || self.is_equal_to_or_derived_from(to, from, compare, use_site)
            || self.hierarchy.is_interface(from)
            || self.hierarchy.is_interface(to)
        {
            return ConversionKind::ExplicitExists;
        }
        ConversionKind::None
    }
}

/// Conversions between two intrinsics, at least one of them a value type.
fn classify_numeric(from: IntrinsicKind, to: IntrinsicKind) -> ConversionKind {
    use IntrinsicKind as K;
    match (from, to) {
        _ if from == to => ConversionKind::Identity,
        (K::Int, K::Long | K::Double) | (K::Long, K::Double) => ConversionKind::ImplicitNumeric,
        (K::Long, K::Int) | (K::Double, K::Int | K::Long) => ConversionKind::ExplicitExists,
        (_, K::Object) if from.is_value_type() => ConversionKind::Boxing,
        (K::Object, _) if to.is_value_type() => ConversionKind::ExplicitExists,
        _ => ConversionKind::None,
    }
}

#[cfg(test)]
#[path = "tests/relations_tests.rs"]
mod tests;
