//! Tests for the expression parser.

use crate::parser::node::LiteralValue;
use crate::{NodeArena, NodeIndex, ParsedExpression, parse_expression, syntax_kind_ext};
use wex_common::diagnostics::diagnostic_codes;
use wex_common::interner::Interner;
use wex_scanner::SyntaxKind;

fn parse(source: &str, names: &Interner) -> ParsedExpression {
    parse_expression("test.wex", source, names)
}

fn kind_of(arena: &NodeArena, index: NodeIndex) -> u16 {
    arena.get(index).map_or(u16::MAX, |node| node.kind)
}

#[test]
fn test_parse_with_expression_initializers() {
    let names = Interner::new();
    let parsed = parse("p with { X = 5, Y = 6 }", &names);
    assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);

    let arena = &parsed.arena;
    let node = arena.get(parsed.root).expect("root node");
    assert_eq!(node.kind, syntax_kind_ext::WITH_EXPRESSION);
    assert_eq!((node.pos, node.end), (0, 23));

    let with = arena.get_with_expr(node).expect("with data");
    assert_eq!(arena.identifier_atom(with.receiver), names.intern("p"));
    assert_eq!(with.initializers.len(), 2);
    assert!(!with.initializers.has_trailing_comma);

    let first = arena
        .get(with.initializers.nodes[0])
        .and_then(|n| arena.get_with_initializer(n))
        .expect("first initializer");
    assert_eq!(arena.identifier_atom(first.name), names.intern("X"));
    let value = arena.get(first.expression).expect("value");
    assert_eq!(
        arena.get_literal(value).map(|l| l.value.clone()),
        Some(LiteralValue::Int(5))
    );
}

#[test]
fn test_bare_initializer_has_no_name() {
    let names = Interner::new();
    let parsed = parse("p with { q.Z, }", &names);
    assert!(parsed.diagnostics.is_empty());

    let arena = &parsed.arena;
    let with = arena
        .get(parsed.root)
        .and_then(|n| arena.get_with_expr(n))
        .expect("with data");
    assert!(with.initializers.has_trailing_comma);

    let init = arena
        .get(with.initializers.nodes[0])
        .and_then(|n| arena.get_with_initializer(n))
        .expect("initializer");
    assert!(init.name.is_none());
    assert_eq!(
        kind_of(arena, init.expression),
        syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION
    );
}

#[test]
fn test_empty_initializer_list() {
    let names = Interner::new();
    let parsed = parse("p with { }", &names);
    assert!(parsed.diagnostics.is_empty());
    let with = parsed
        .arena
        .get(parsed.root)
        .and_then(|n| parsed.arena.get_with_expr(n))
        .expect("with data");
    assert!(with.initializers.is_empty());
}

#[test]
fn test_chained_with_is_left_associative() {
    let names = Interner::new();
    let parsed = parse("p with { X = 1 } with { Y = 2 }", &names);
    assert!(parsed.diagnostics.is_empty());

    let arena = &parsed.arena;
    let outer = arena
        .get(parsed.root)
        .and_then(|n| arena.get_with_expr(n))
        .expect("outer with");
    assert_eq!(kind_of(arena, outer.receiver), syntax_kind_ext::WITH_EXPRESSION);
}

#[test]
fn test_nested_with_in_value() {
    let names = Interner::new();
    let parsed = parse("o with { Inner = o.Inner with { X = 1 } }", &names);
    assert!(parsed.diagnostics.is_empty());

    let arena = &parsed.arena;
    let outer = arena
        .get(parsed.root)
        .and_then(|n| arena.get_with_expr(n))
        .expect("outer with");
    let init = arena
        .get(outer.initializers.nodes[0])
        .and_then(|n| arena.get_with_initializer(n))
        .expect("initializer");
    assert_eq!(kind_of(arena, init.expression), syntax_kind_ext::WITH_EXPRESSION);
}

#[test]
fn test_call_and_literals() {
    let names = Interner::new();
    let parsed = parse("(a.Make()) with { A = 7L, B = 1.5, C = \"s\", D = true, E = null }", &names);
    assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);

    let arena = &parsed.arena;
    let with = arena
        .get(parsed.root)
        .and_then(|n| arena.get_with_expr(n))
        .expect("with data");
    assert_eq!(
        kind_of(arena, with.receiver),
        syntax_kind_ext::PARENTHESIZED_EXPRESSION
    );
    assert_eq!(
        kind_of(arena, arena.skip_parentheses(with.receiver)),
        syntax_kind_ext::CALL_EXPRESSION
    );

    let values: Vec<u16> = with
        .initializers
        .iter()
        .filter_map(|i| arena.get(i).and_then(|n| arena.get_with_initializer(n)))
        .map(|init| kind_of(arena, init.expression))
        .collect();
    assert_eq!(
        values,
        vec![
            SyntaxKind::NumericLiteral as u16,
            SyntaxKind::NumericLiteral as u16,
            SyntaxKind::StringLiteral as u16,
            SyntaxKind::TrueKeyword as u16,
            SyntaxKind::NullKeyword as u16,
        ]
    );
}

#[test]
fn test_large_integer_becomes_long() {
    let names = Interner::new();
    let parsed = parse("3000000000", &names);
    let node = parsed.arena.get(parsed.root).expect("literal");
    assert_eq!(
        parsed.arena.get_literal(node).map(|l| l.value.clone()),
        Some(LiteralValue::Long(3_000_000_000))
    );
}

#[test]
fn test_out_of_range_literal_is_reported() {
    let names = Interner::new();
    let parsed = parse("p with { X = 99999999999999999999 }", &names);
    assert_eq!(
        parsed.diagnostics.codes(),
        vec![diagnostic_codes::INVALID_NUMERIC_LITERAL]
    );
}

#[test]
fn test_missing_close_brace() {
    let names = Interner::new();
    let parsed = parse("p with { X = 1", &names);
    assert_eq!(parsed.diagnostics.codes(), vec![diagnostic_codes::TOKEN_EXPECTED]);
    assert_eq!(
        parsed.diagnostics.as_slice()[0].message_text,
        "'}' expected."
    );
    assert_eq!(kind_of(&parsed.arena, parsed.root), syntax_kind_ext::WITH_EXPRESSION);
}

#[test]
fn test_missing_value_produces_missing_node() {
    let names = Interner::new();
    let parsed = parse("p with { X = }", &names);
    assert_eq!(
        parsed.diagnostics.codes(),
        vec![diagnostic_codes::EXPRESSION_EXPECTED]
    );

    let arena = &parsed.arena;
    let init = arena
        .get(parsed.root)
        .and_then(|n| arena.get_with_expr(n))
        .and_then(|w| arena.get(w.initializers.nodes[0]))
        .and_then(|n| arena.get_with_initializer(n))
        .expect("initializer");
    assert!(arena.get(init.expression).is_some_and(|n| n.is_missing()));
}

#[test]
fn test_missing_name_before_equals() {
    let names = Interner::new();
    let parsed = parse("p with { = 1 }", &names);
    assert_eq!(
        parsed.diagnostics.codes(),
        vec![diagnostic_codes::IDENTIFIER_EXPECTED]
    );

    let arena = &parsed.arena;
    let init = arena
        .get(parsed.root)
        .and_then(|n| arena.get_with_expr(n))
        .and_then(|w| arena.get(w.initializers.nodes[0]))
        .and_then(|n| arena.get_with_initializer(n))
        .expect("initializer");
    assert!(init.name.is_some());
    assert!(arena.identifier_atom(init.name).is_none());
}

#[test]
fn test_diagnostics_are_ordered_by_position() {
    let names = Interner::new();
    let parsed = parse("p with { X = #, Y = \"open", &names);
    let starts: Vec<u32> = parsed.diagnostics.iter().map(|d| d.start).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
    assert_eq!(
        parsed.diagnostics.codes()[0],
        diagnostic_codes::INVALID_CHARACTER
    );
    assert!(
        parsed
            .diagnostics
            .codes()
            .contains(&diagnostic_codes::UNTERMINATED_STRING_LITERAL)
    );
}

#[test]
fn test_trailing_tokens_are_reported() {
    let names = Interner::new();
    let parsed = parse("p q", &names);
    assert_eq!(
        parsed.diagnostics.codes(),
        vec![diagnostic_codes::UNEXPECTED_TOKEN_AFTER_EXPRESSION]
    );
    assert_eq!(
        parsed.diagnostics.as_slice()[0].message_text,
        "Unexpected token 'q' after expression."
    );
}

#[test]
fn test_deep_nesting_reports_once() {
    let names = Interner::new();
    let depth = wex_common::limits::MAX_PARSE_DEPTH as usize + 10;
    let source = format!("{}p{}", "(".repeat(depth), ")".repeat(depth));
    let parsed = parse(&source, &names);
    assert_eq!(
        parsed.diagnostics.codes(),
        vec![diagnostic_codes::EXPRESSION_TOO_DEEPLY_NESTED]
    );
}
