//! Parser state: recursive descent over the scanner's tokens.
//!
//! The parser never fails. Every syntax error is reported into the
//! `DiagnosticBag` and replaced by a node flagged `MISSING`, so callers always
//! receive a tree rooted at `ParsedExpression::root`.

use super::base::{NodeIndex, NodeList};
use super::node::{LiteralData, LiteralValue, NodeArena};
use std::sync::Arc;
use tracing::trace;
use wex_common::diagnostics::{Diagnostic, DiagnosticBag, diagnostic_codes};
use wex_common::interner::Interner;
use wex_common::limits::MAX_PARSE_DEPTH;
use wex_common::span::Span;
use wex_scanner::{ScannerMark, ScannerState, SyntaxKind, TokenFlags};

/// Output of parsing one expression.
#[derive(Debug)]
pub struct ParsedExpression {
    pub arena: NodeArena,
    pub root: NodeIndex,
    /// Scanner and parser diagnostics, ordered by position.
    pub diagnostics: DiagnosticBag,
}

/// Parse `text` as a single expression.
pub fn parse_expression(
    file_name: impl Into<Arc<str>>,
    text: &str,
    names: &Interner,
) -> ParsedExpression {
    ParserState::new(file_name, text, names).parse_expression_root()
}

pub struct ParserState<'a> {
    text: &'a str,
    scanner: ScannerState<'a>,
    arena: NodeArena,
    names: &'a Interner,
    diagnostics: DiagnosticBag,
    /// End of the last consumed token.
    last_end: u32,
    depth: u32,
    depth_exceeded: bool,
}

impl<'a> ParserState<'a> {
    pub fn new(file_name: impl Into<Arc<str>>, text: &'a str, names: &'a Interner) -> Self {
        let mut scanner = ScannerState::new(text);
        scanner.scan();
        ParserState {
            text,
            scanner,
            arena: NodeArena::new(),
            names,
            diagnostics: DiagnosticBag::new(file_name),
            last_end: 0,
            depth: 0,
            depth_exceeded: false,
        }
    }

    /// Parse the whole text as one expression. Trailing tokens are reported.
    pub fn parse_expression_root(mut self) -> ParsedExpression {
        let root = self.parse_expression();
        if self.token() != SyntaxKind::EndOfFileToken {
            let span = self.token_span();
            let text = span.text(self.text).to_string();
            self.error(
                diagnostic_codes::UNEXPECTED_TOKEN_AFTER_EXPRESSION,
                span,
                &[&text],
            );
        }
        self.finish(root)
    }

    fn finish(mut self, root: NodeIndex) -> ParsedExpression {
        let file = Arc::clone(self.diagnostics.file());
        let mut diagnostics = self.diagnostics.into_vec();
        diagnostics.extend(self.scanner.take_diagnostics().into_iter().map(|d| {
            Diagnostic::from_code(Arc::clone(&file), d.start, d.length, d.code, &[])
        }));
        diagnostics.sort_by_key(|d| d.start);

        let mut bag = DiagnosticBag::new(file);
        for diagnostic in diagnostics {
            bag.push(diagnostic);
        }
        trace!(nodes = self.arena.len(), diagnostics = bag.len(), "parsed expression");
        ParsedExpression {
            arena: self.arena,
            root,
            diagnostics: bag,
        }
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    #[inline]
    fn token(&self) -> SyntaxKind {
        self.scanner.token()
    }

    #[inline]
    fn token_pos(&self) -> u32 {
        self.scanner.token_start()
    }

    fn token_span(&self) -> Span {
        Span::new(self.scanner.token_start(), self.scanner.token_end())
    }

    fn next_token(&mut self) -> SyntaxKind {
        self.last_end = self.scanner.token_end();
        self.scanner.scan()
    }

    fn rewind(&mut self, mark: ScannerMark, last_end: u32) {
        self.scanner.rewind(mark);
        self.last_end = last_end;
    }

    fn error(&mut self, code: u32, span: Span, args: &[&str]) {
        // Once nesting is exceeded the rest of the text is skipped; follow-on
        // errors would only restate that.
        if !self.depth_exceeded {
            self.diagnostics.add(code, span, args);
        }
    }

    fn parse_expected(&mut self, kind: SyntaxKind) -> bool {
        if self.token() == kind {
            self.next_token();
            true
        } else {
            let span = self.token_span();
            self.error(diagnostic_codes::TOKEN_EXPECTED, span, &[kind.token_text()]);
            false
        }
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn parse_expression(&mut self) -> NodeIndex {
        if self.depth >= MAX_PARSE_DEPTH {
            let span = self.token_span();
            self.error(diagnostic_codes::EXPRESSION_TOO_DEEPLY_NESTED, span, &[]);
            self.depth_exceeded = true;
            while self.token() != SyntaxKind::EndOfFileToken {
                self.next_token();
            }
            return self.arena.add_missing_identifier(self.last_end);
        }

        self.depth += 1;
        let mut expression = self.parse_postfix_expression();
        while self.token() == SyntaxKind::WithKeyword {
            expression = self.parse_with_tail(expression);
        }
        self.depth -= 1;
        expression
    }

    fn parse_postfix_expression(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let mut expression = self.parse_primary_expression();
        while self.token() == SyntaxKind::DotToken {
            self.next_token();
            let name = self.parse_identifier_name();
            expression = self
                .arena
                .add_property_access(expression, name, pos, self.last_end);
            if self.token() == SyntaxKind::OpenParenToken {
                self.next_token();
                self.parse_expected(SyntaxKind::CloseParenToken);
                expression = self.arena.add_call(expression, pos, self.last_end);
            }
        }
        expression
    }

    fn parse_identifier_name(&mut self) -> NodeIndex {
        if self.token() == SyntaxKind::Identifier {
            let atom = self.names.intern(self.scanner.token_value());
            let span = self.token_span();
            self.next_token();
            self.arena.add_identifier(atom, span.start, span.end)
        } else {
            let span = self.token_span();
            self.error(diagnostic_codes::IDENTIFIER_EXPECTED, span, &[]);
            self.arena.add_missing_identifier(self.last_end)
        }
    }

    fn parse_primary_expression(&mut self) -> NodeIndex {
        let span = self.token_span();
        match self.token() {
            SyntaxKind::NumericLiteral => self.parse_numeric_literal(),
            SyntaxKind::StringLiteral => {
                let data = LiteralData {
                    text: span.text(self.text).into(),
                    flags: self.scanner.token_flags(),
                    value: LiteralValue::String(self.scanner.token_value().into()),
                };
                self.next_token();
                self.arena
                    .add_literal(SyntaxKind::StringLiteral, span.start, span.end, data)
            }
            kind @ (SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword | SyntaxKind::NullKeyword) => {
                self.next_token();
                self.arena.add_token(kind, span.start, span.end)
            }
            SyntaxKind::Identifier => self.parse_identifier_name(),
            SyntaxKind::OpenParenToken => {
                self.next_token();
                let expression = self.parse_expression();
                self.parse_expected(SyntaxKind::CloseParenToken);
                self.arena
                    .add_parenthesized(expression, span.start, self.last_end)
            }
            SyntaxKind::Unknown => {
                // Invalid character, already reported by the scanner.
                self.next_token();
                self.arena.add_missing_identifier(span.start)
            }
            _ => {
                self.error(diagnostic_codes::EXPRESSION_EXPECTED, span, &[]);
                self.arena.add_missing_identifier(span.start)
            }
        }
    }

    /// Integer literals are `int` when they fit, otherwise `long`. An `L`
    /// suffix forces `long`.
    fn parse_numeric_literal(&mut self) -> NodeIndex {
        let span = self.token_span();
        let digits = self.scanner.token_value();
        let flags = self.scanner.token_flags();

        let value = if flags.contains(TokenFlags::FLOATING_POINT) {
            digits
                .parse::<f64>()
                .map_or(LiteralValue::Invalid, LiteralValue::Double)
        } else if flags.contains(TokenFlags::LONG_SUFFIX) {
            digits
                .parse::<i64>()
                .map_or(LiteralValue::Invalid, LiteralValue::Long)
        } else if let Ok(value) = digits.parse::<i32>() {
            LiteralValue::Int(value)
        } else {
            digits
                .parse::<i64>()
                .map_or(LiteralValue::Invalid, LiteralValue::Long)
        };

        let data = LiteralData {
            text: digits.into(),
            flags,
            value,
        };
        if data.value == LiteralValue::Invalid {
            let text = span.text(self.text).to_string();
            self.error(diagnostic_codes::INVALID_NUMERIC_LITERAL, span, &[&text]);
        }
        self.next_token();
        self.arena
            .add_literal(SyntaxKind::NumericLiteral, span.start, span.end, data)
    }

    // =========================================================================
    // With expressions
    // =========================================================================

    /// Parse `with { init, ... }` applied to `receiver`. The current token is
    /// the `with` keyword.
    fn parse_with_tail(&mut self, receiver: NodeIndex) -> NodeIndex {
        let pos = self.arena.span(receiver).start;
        self.next_token();

        let mut initializers = NodeList {
            pos: self.token_pos(),
            end: self.token_pos(),
            ..NodeList::default()
        };
        if self.parse_expected(SyntaxKind::OpenBraceToken) {
            initializers.pos = self.last_end;
            while !matches!(
                self.token(),
                SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
            ) {
                initializers.nodes.push(self.parse_with_initializer());
                if self.token() != SyntaxKind::CommaToken {
                    break;
                }
                self.next_token();
                initializers.has_trailing_comma = self.token() == SyntaxKind::CloseBraceToken;
            }
            initializers.end = self.token_pos();
            self.parse_expected(SyntaxKind::CloseBraceToken);
        }

        trace!(
            initializers = initializers.len(),
            trailing_comma = initializers.has_trailing_comma,
            "parsed with expression"
        );
        self.arena
            .add_with_expression(receiver, initializers, pos, self.last_end)
    }

    /// `name = expr` or a bare `expr`. An identifier only becomes a target
    /// name when it is followed by `=`.
    fn parse_with_initializer(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        match self.token() {
            SyntaxKind::Identifier => {
                let mark = self.scanner.mark();
                let last_end = self.last_end;
                let span = self.token_span();
                let atom = self.names.intern(self.scanner.token_value());
                if self.next_token() == SyntaxKind::EqualsToken {
                    let name = self.arena.add_identifier(atom, span.start, span.end);
                    self.next_token();
                    let expression = self.parse_expression();
                    return self
                        .arena
                        .add_with_initializer(name, expression, pos, self.last_end);
                }
                self.rewind(mark, last_end);
            }
            SyntaxKind::EqualsToken => {
                let span = self.token_span();
                self.error(diagnostic_codes::IDENTIFIER_EXPECTED, span, &[]);
                let name = self.arena.add_missing_identifier(pos);
                self.next_token();
                let expression = self.parse_expression();
                return self
                    .arena
                    .add_with_initializer(name, expression, pos, self.last_end);
            }
            _ => {}
        }

        let expression = self.parse_expression();
        self.arena
            .add_with_initializer(NodeIndex::NONE, expression, pos, self.last_end)
    }
}
