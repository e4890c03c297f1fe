use super::*;
use crate::symbol_table::SymbolTableBuilder;
use wex_common::interner::Interner;

#[test]
fn test_substitutes_own_parameters() {
    let names = Interner::new();
    let types = TypeInterner::new();
    let mut builder = SymbolTableBuilder::new(&names);
    let boxed = builder.add_class("Box", &["T"]);
    let pair = builder.add_class("Pair", &["A", "B"]);
    let _symbols = builder.finish();

    let t = types.type_param(boxed, 0);
    let box_of_string = types.application(boxed, &[TypeId::STRING]);
    let subst = TypeSubstitution::for_type(&types, box_of_string);

    assert_eq!(instantiate_type(&types, t, &subst), TypeId::STRING);
    assert_eq!(
        instantiate_type(&types, types.nullable(t), &subst),
        types.nullable(TypeId::STRING)
    );
    assert_eq!(
        instantiate_type(&types, types.application(pair, &[t, TypeId::INT]), &subst),
        types.application(pair, &[TypeId::STRING, TypeId::INT])
    );
}

#[test]
fn test_foreign_parameters_are_kept() {
    let names = Interner::new();
    let types = TypeInterner::new();
    let mut builder = SymbolTableBuilder::new(&names);
    let boxed = builder.add_class("Box", &["T"]);
    let other = builder.add_class("Other", &["U"]);
    let _symbols = builder.finish();

    let u = types.type_param(other, 0);
    let subst = TypeSubstitution::for_type(&types, types.application(boxed, &[TypeId::INT]));
    assert_eq!(instantiate_type(&types, u, &subst), u);
    assert!(TypeSubstitution::for_type(&types, TypeId::INT).is_empty());
}
