//! Instance member access through `receiver.name` and `receiver.Method()`.

mod support;

use support::Fixture;
use wex_checker::{BoundKind, Scope};
use wex_common::diagnostics::diagnostic_codes;
use wex_solver::{SetterKind, TypeId, Visibility};

fn shapes() -> Fixture {
    let mut fixture = Fixture::new(|b, types| {
        let shape = b.add_class("Shape", &[]);
        b.add_field(shape, "Id", TypeId::INT);
        b.add_property(shape, "Name", TypeId::STRING, SetterKind::Set);
        b.add_method(shape, "Area", &[], TypeId::DOUBLE);
        b.add_method(shape, "Scale", &[TypeId::DOUBLE], types.class(shape));
        let secret = b.add_field(shape, "secret", TypeId::INT);
        b.set_visibility(secret, Visibility::Private);
        let count = b.add_field(shape, "Count", TypeId::INT);
        b.set_static(count, true);
    });
    let shape = fixture.class_type("Shape");
    fixture.declare("s", shape);
    fixture
}

#[test]
fn test_field_and_property_access() {
    let fixture = shapes();

    let field = fixture.bind("s.Id");
    assert!(field.diagnostics.is_empty());
    assert_eq!(field.expr.ty, Some(TypeId::INT));
    assert!(matches!(field.expr.kind, BoundKind::FieldAccess { .. }));
    assert_eq!(
        field.expr.expression_symbol(),
        Some(fixture.member("Shape", "Id"))
    );

    let property = fixture.bind("s.Name");
    assert_eq!(property.expr.ty, Some(TypeId::STRING));
    assert!(matches!(property.expr.kind, BoundKind::PropertyAccess { .. }));
}

#[test]
fn test_zero_argument_call() {
    let fixture = shapes();
    let bound = fixture.bind("s.Area()");

    assert!(bound.diagnostics.is_empty());
    assert_eq!(bound.expr.ty, Some(TypeId::DOUBLE));
    let BoundKind::Call { method, .. } = &bound.expr.kind else {
        panic!("expected a call, got {:?}", bound.expr.kind);
    };
    assert_eq!(*method, fixture.member("Shape", "Area"));
}

#[test]
fn test_call_without_zero_argument_overload() {
    let fixture = shapes();
    let bound = fixture.bind("s.Scale()");

    assert_eq!(
        bound.messages(),
        vec!["No overload for method 'Scale' takes 0 arguments.".to_string()]
    );
    assert!(bound.expr.has_errors);
    assert_eq!(
        bound.expr.expression_symbol(),
        Some(fixture.member("Shape", "Scale"))
    );
}

#[test]
fn test_method_group_used_as_value() {
    let fixture = shapes();
    let bound = fixture.bind("s.Area.Id");

    assert_eq!(bound.codes(), vec![diagnostic_codes::METHOD_GROUP_AS_VALUE]);
    assert_eq!(
        bound.messages()[0],
        "Method 'Shape.Area()' cannot be used as a value; did you intend to invoke it?"
    );
}

#[test]
fn test_missing_member() {
    let fixture = shapes();
    let bound = fixture.bind("s.Perimeter");

    assert_eq!(
        bound.messages(),
        vec!["'Shape' does not contain a definition for 'Perimeter'.".to_string()]
    );
    let diag = &bound.diagnostics.as_slice()[0];
    assert_eq!((diag.start, diag.length), (2, 9));
    assert_eq!(bound.expr.ty, Some(TypeId::ERROR));
    assert_eq!(bound.expr.expression_symbol(), None);
}

#[test]
fn test_member_of_intrinsic_type() {
    let mut fixture = shapes();
    fixture.declare("n", TypeId::INT);
    let bound = fixture.bind("n.Id");

    assert_eq!(
        bound.messages(),
        vec!["'int' does not contain a definition for 'Id'.".to_string()]
    );
}

#[test]
fn test_inaccessible_member_keeps_candidate() {
    let fixture = shapes();
    let bound = fixture.bind("s.secret");

    assert_eq!(bound.codes(), vec![diagnostic_codes::MEMBER_INACCESSIBLE]);
    assert_eq!(
        bound.messages()[0],
        "'Shape.secret' is inaccessible due to its protection level."
    );
    assert_eq!(
        bound.expr.expression_symbol(),
        Some(fixture.member("Shape", "secret"))
    );

    let mut inside = shapes();
    inside.scope = Scope::with_containing_class(inside.def("Shape"));
    let shape = inside.class_type("Shape");
    inside.declare("s", shape);
    assert!(inside.bind("s.secret").diagnostics.is_empty());
}

#[test]
fn test_static_member_through_instance() {
    let fixture = shapes();
    let bound = fixture.bind("s.Count");

    assert_eq!(
        bound.messages(),
        vec!["Member 'Shape.Count' cannot be accessed with an instance reference.".to_string()]
    );
}

#[test]
fn test_invoking_a_field() {
    let fixture = shapes();
    let bound = fixture.bind("s.Id()");

    assert_eq!(bound.codes(), vec![diagnostic_codes::MEMBER_NOT_INVOCABLE]);
    assert_eq!(
        bound.messages()[0],
        "Non-invocable member 'Shape.Id' cannot be used like a method."
    );
}

#[test]
fn test_error_receiver_is_silent() {
    let fixture = shapes();
    let bound = fixture.bind("unknown.Id.Name");

    assert_eq!(bound.codes(), vec![diagnostic_codes::NAME_DOES_NOT_EXIST]);
    assert!(bound.expr.has_errors);
}

#[test]
fn test_member_of_null_literal() {
    let fixture = shapes();
    let bound = fixture.bind("null.Id");

    assert_eq!(
        bound.messages(),
        vec!["'<null>' does not contain a definition for 'Id'.".to_string()]
    );
}

#[test]
fn test_inherited_member_through_generic_base() {
    let mut fixture = Fixture::new(|b, types| {
        let holder = b.add_class("Holder", &["T"]);
        b.add_property(holder, "Item", types.type_param(holder, 0), SetterKind::Set);
        let names = b.add_class("Names", &[]);
        b.set_base(names, types.application(holder, &[TypeId::STRING]));
    });
    let names = fixture.class_type("Names");
    fixture.declare("n", names);

    let bound = fixture.bind("n.Item");
    assert!(bound.diagnostics.is_empty());
    assert_eq!(bound.expr.ty, Some(TypeId::STRING));
}

#[test]
fn test_unresolved_base_marks_member_access_as_error() {
    let mut fixture = Fixture::new(|b, _| {
        let broken = b.add_class("Broken", &[]);
        b.set_unresolved_base(broken, "Missing");
        b.add_field(broken, "Size", TypeId::INT);
    });
    let broken = fixture.class_type("Broken");
    fixture.declare("b", broken);

    let bound = fixture.bind("b.Size");
    assert_eq!(
        bound.messages(),
        vec!["The base type 'Missing' of 'Broken' could not be resolved.".to_string()]
    );
    assert!(matches!(bound.expr.kind, BoundKind::FieldAccess { .. }));
    assert_eq!(bound.expr.ty, Some(TypeId::INT));
    assert!(bound.expr.has_errors);
}
