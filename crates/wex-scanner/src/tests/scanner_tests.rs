use super::*;

fn scan_all(text: &str) -> Vec<(SyntaxKind, String)> {
    let mut scanner = ScannerState::new(text);
    let mut tokens = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        tokens.push((kind, scanner.token_value().to_string()));
    }
    tokens
}

#[test]
fn test_scan_with_expression() {
    let kinds: Vec<SyntaxKind> = scan_all("p with { x = 5, y = q.Y }")
        .into_iter()
        .map(|(kind, _)| kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::WithKeyword,
            SyntaxKind::OpenBraceToken,
            SyntaxKind::Identifier,
            SyntaxKind::EqualsToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::CommaToken,
            SyntaxKind::Identifier,
            SyntaxKind::EqualsToken,
            SyntaxKind::Identifier,
            SyntaxKind::DotToken,
            SyntaxKind::Identifier,
            SyntaxKind::CloseBraceToken,
        ]
    );
}

#[test]
fn test_numeric_literal_flags() {
    let mut scanner = ScannerState::new("42 3.25 7L .5");

    assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    assert_eq!(scanner.token_value(), "42");
    assert!(scanner.token_flags().is_empty());

    assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    assert_eq!(scanner.token_value(), "3.25");
    assert!(scanner.token_flags().contains(TokenFlags::FLOATING_POINT));

    assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    assert_eq!(scanner.token_value(), "7");
    assert!(scanner.token_flags().contains(TokenFlags::LONG_SUFFIX));
    assert_eq!(scanner.token_end() - scanner.token_start(), 2);

    assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    assert_eq!(scanner.token_value(), ".5");
}

#[test]
fn test_string_escapes() {
    let tokens = scan_all(r#""a\"b\n""#);
    assert_eq!(tokens, vec![(SyntaxKind::StringLiteral, "a\"b\n".to_string())]);
}

#[test]
fn test_unterminated_string_reports() {
    let mut scanner = ScannerState::new("\"abc");
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert!(scanner.token_flags().contains(TokenFlags::UNTERMINATED));

    let diagnostics = scanner.take_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].code,
        diagnostic_codes::UNTERMINATED_STRING_LITERAL
    );
    assert_eq!(diagnostics[0].start, 0);
    assert_eq!(diagnostics[0].length, 4);
}

#[test]
fn test_invalid_character() {
    let mut scanner = ScannerState::new("a # b");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::Unknown);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(
        scanner.take_diagnostics()[0].code,
        diagnostic_codes::INVALID_CHARACTER
    );
}

#[test]
fn test_rewind_rescans_without_duplicate_diagnostics() {
    let mut scanner = ScannerState::new("name = #");
    scanner.scan();
    let mark = scanner.mark();
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.token(), SyntaxKind::Unknown);

    assert_eq!(scanner.rewind(mark), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "name");

    assert_eq!(scanner.scan(), SyntaxKind::EqualsToken);
    assert_eq!(scanner.scan(), SyntaxKind::Unknown);
    assert_eq!(scanner.take_diagnostics().len(), 1);
}

#[test]
fn test_keywords() {
    let kinds: Vec<SyntaxKind> = scan_all("with true false null without")
        .into_iter()
        .map(|(kind, _)| kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::WithKeyword,
            SyntaxKind::TrueKeyword,
            SyntaxKind::FalseKeyword,
            SyntaxKind::NullKeyword,
            SyntaxKind::Identifier,
        ]
    );
    assert!(SyntaxKind::WithKeyword.is_keyword());
}
