//! Assignment conversions, exercised through `with` initializers.

mod support;

use support::Fixture;
use wex_checker::BoundKind;
use wex_common::diagnostics::diagnostic_codes;
use wex_solver::{ConversionKind, SetterKind, TypeId};

fn targets() -> Fixture {
    let mut fixture = Fixture::new(|b, types| {
        let animal = b.add_class("Animal", &[]);
        let dog = b.add_class("Dog", &[]);
        b.set_base(dog, types.class(animal));
        let named = b.add_interface("INamed", &[]);
        b.add_interface_impl(dog, types.class(named));

        let slots = b.add_class("Slots", &[]);
        b.add_field(slots, "Count", TypeId::INT);
        b.add_field(slots, "Ratio", TypeId::DOUBLE);
        b.add_field(slots, "Maybe", types.nullable(TypeId::INT));
        b.add_field(slots, "Pet", types.class(animal));
        b.add_field(slots, "Puppy", types.class(dog));
        b.add_field(slots, "Named", types.class(named));
        b.add_field(slots, "Anything", TypeId::OBJECT);
        b.add_property(slots, "Label", TypeId::STRING, SetterKind::Set);
        b.add_method(slots, "Clone", &[], types.class(slots));
    });
    let slots = fixture.class_type("Slots");
    fixture.declare("s", slots);
    let dog = fixture.class_type("Dog");
    fixture.declare("dog", dog);
    let animal = fixture.class_type("Animal");
    fixture.declare("animal", animal);
    fixture
}

fn conversion_of(fixture: &Fixture, text: &str) -> Option<ConversionKind> {
    let bound = fixture.bind(text);
    assert!(bound.diagnostics.is_empty(), "{text}: {:?}", bound.messages());
    match &bound.update().initializers()[0].value().kind {
        BoundKind::Conversion { conversion, .. } => Some(*conversion),
        _ => None,
    }
}

#[test]
fn test_identity_is_not_wrapped() {
    let fixture = targets();
    assert_eq!(conversion_of(&fixture, "s with { Count = 1 }"), None);
    assert_eq!(conversion_of(&fixture, "s with { Label = \"x\" }"), None);
}

#[test]
fn test_implicit_conversions_are_wrapped() {
    let fixture = targets();
    assert_eq!(
        conversion_of(&fixture, "s with { Ratio = 1 }"),
        Some(ConversionKind::ImplicitNumeric)
    );
    assert_eq!(
        conversion_of(&fixture, "s with { Maybe = 1 }"),
        Some(ConversionKind::ImplicitNullable)
    );
    assert_eq!(
        conversion_of(&fixture, "s with { Pet = dog }"),
        Some(ConversionKind::ImplicitReference)
    );
    assert_eq!(
        conversion_of(&fixture, "s with { Named = dog }"),
        Some(ConversionKind::ImplicitReference)
    );
    assert_eq!(
        conversion_of(&fixture, "s with { Anything = 1 }"),
        Some(ConversionKind::Boxing)
    );
    assert_eq!(
        conversion_of(&fixture, "s with { Pet = null }"),
        Some(ConversionKind::NullLiteral)
    );
    assert_eq!(
        conversion_of(&fixture, "s with { Maybe = null }"),
        Some(ConversionKind::NullLiteral)
    );
}

#[test]
fn test_converted_value_has_target_type() {
    let fixture = targets();
    let bound = fixture.bind("s with { Ratio = 1 }");
    let value = bound.update().initializers()[0].value();
    assert_eq!(value.ty, Some(TypeId::DOUBLE));
    let BoundKind::Conversion { operand, .. } = &value.kind else {
        panic!("expected a conversion");
    };
    assert_eq!(operand.ty, Some(TypeId::INT));
}

#[test]
fn test_failed_conversions() {
    let fixture = targets();

    let downcast = fixture.bind("s with { Puppy = animal }");
    assert_eq!(
        downcast.codes(),
        vec![diagnostic_codes::CANNOT_IMPLICITLY_CONVERT_EXPLICIT_EXISTS]
    );
    assert_eq!(
        downcast.messages()[0],
        "Cannot implicitly convert type 'Animal' to 'Dog'. An explicit conversion exists (are you missing a cast?)"
    );

    let null_to_int = fixture.bind("s with { Count = null }");
    assert_eq!(
        null_to_int.messages(),
        vec!["Cannot implicitly convert type '<null>' to 'int'.".to_string()]
    );

    let narrowing = fixture.bind("s with { Count = 1.5 }");
    assert_eq!(
        narrowing.codes(),
        vec![diagnostic_codes::CANNOT_IMPLICITLY_CONVERT_EXPLICIT_EXISTS]
    );

    let unrelated = fixture.bind("s with { Label = true }");
    assert_eq!(
        unrelated.codes(),
        vec![diagnostic_codes::CANNOT_IMPLICITLY_CONVERT]
    );
    assert!(unrelated.update().has_errors());
}

#[test]
fn test_error_value_converts_silently() {
    let fixture = targets();
    let bound = fixture.bind("s with { Count = nope }");

    assert_eq!(bound.codes(), vec![diagnostic_codes::NAME_DOES_NOT_EXIST]);
    assert!(bound.update().initializers()[0].value().has_errors);
}

#[test]
fn test_method_group_value_is_rejected() {
    let fixture = targets();
    let bound = fixture.bind("s with { Anything = s.Clone }");

    assert_eq!(bound.codes(), vec![diagnostic_codes::METHOD_GROUP_AS_VALUE]);
}
