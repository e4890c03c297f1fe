use super::*;
use rayon::prelude::*;
use wex_common::interner::Interner;

#[test]
fn test_interner_intrinsics() {
    let types = TypeInterner::new();
    assert_eq!(
        types.lookup(TypeId::INT),
        Some(TypeData::Intrinsic(IntrinsicKind::Int))
    );
    assert_eq!(types.intrinsic_kind(TypeId::ERROR), Some(IntrinsicKind::Error));
    assert_eq!(types.len(), TypeId::FIRST_USER as usize);
}

#[test]
fn test_interner_deduplication() {
    let types = TypeInterner::new();
    let def = DefId(0);
    let a = types.application(def, &[TypeId::INT]);
    let b = types.application(def, &[TypeId::INT]);
    let c = types.application(def, &[TypeId::STRING]);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(types.application(def, &[]), types.class(def));
}

#[test]
fn test_nullable_is_idempotent() {
    let types = TypeInterner::new();
    let int_opt = types.nullable(TypeId::INT);
    assert_eq!(types.nullable(int_opt), int_opt);
    assert_eq!(types.nullable(TypeId::ERROR), TypeId::ERROR);
    assert_eq!(types.strip_nullable(int_opt), TypeId::INT);
}

#[test]
fn test_concurrent_interning_agrees() {
    let types = TypeInterner::new();
    let ids: Vec<TypeId> = (0..256u32)
        .into_par_iter()
        .map(|i| types.application(DefId(i % 8), &[TypeId::INT]))
        .collect();

    for (i, id) in ids.iter().enumerate() {
        assert_eq!(*id, types.application(DefId(i as u32 % 8), &[TypeId::INT]));
    }
    assert_eq!(types.len(), TypeId::FIRST_USER as usize + 8);
}

#[test]
fn test_format_types_and_members() {
    let names = Interner::new();
    let types = TypeInterner::new();
    let mut builder = SymbolTableBuilder::new(&names);
    let point = builder.add_class("Point", &[]);
    let boxed = builder.add_class("Box", &["T"]);
    let clone = builder.add_method(point, "Clone", &[], types.class(point));
    let with = builder.add_method(point, "With", &[TypeId::INT, TypeId::STRING], TypeId::VOID);
    let x = builder.add_field(point, "X", TypeId::INT);
    let symbols = builder.finish();

    let formatter = TypeFormatter::new(&symbols, &types, &names);
    assert_eq!(formatter.format(types.class(point)), "Point");
    assert_eq!(
        formatter.format(types.application(boxed, &[types.nullable(TypeId::INT)])),
        "Box<int?>"
    );
    assert_eq!(formatter.format(symbols.declared_type(&types, boxed)), "Box<T>");
    assert_eq!(formatter.format(TypeId::ERROR), "?");
    assert_eq!(formatter.format_member(clone), "Point.Clone()");
    assert_eq!(formatter.format_member(with), "Point.With(int, string)");
    assert_eq!(formatter.format_member(x), "Point.X");
}
