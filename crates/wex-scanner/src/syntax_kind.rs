use serde::Serialize;

/// Token kinds produced by the scanner.
///
/// Values stay below 100; composite node kinds defined by the parser
/// (`syntax_kind_ext`) start above that range so both fit in a node's `u16`
/// kind field.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SyntaxKind {
    Unknown = 0,
    EndOfFileToken = 1,

    // Literals
    NumericLiteral = 2,
    StringLiteral = 3,

    // Names
    Identifier = 4,

    // Punctuation
    OpenBraceToken = 10,
    CloseBraceToken = 11,
    OpenParenToken = 12,
    CloseParenToken = 13,
    DotToken = 14,
    CommaToken = 15,
    EqualsToken = 16,

    // Keywords
    WithKeyword = 30,
    TrueKeyword = 31,
    FalseKeyword = 32,
    NullKeyword = 33,
}

impl SyntaxKind {
    /// Map reserved words to their keyword kind.
    pub fn keyword_from_text(text: &str) -> Option<SyntaxKind> {
        match text {
            "with" => Some(SyntaxKind::WithKeyword),
            "true" => Some(SyntaxKind::TrueKeyword),
            "false" => Some(SyntaxKind::FalseKeyword),
            "null" => Some(SyntaxKind::NullKeyword),
            _ => None,
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::WithKeyword
                | SyntaxKind::TrueKeyword
                | SyntaxKind::FalseKeyword
                | SyntaxKind::NullKeyword
        )
    }

    /// Source text of a fixed-text token, used in "'{0}' expected." messages.
    pub fn token_text(self) -> &'static str {
        match self {
            SyntaxKind::OpenBraceToken => "{",
            SyntaxKind::CloseBraceToken => "}",
            SyntaxKind::OpenParenToken => "(",
            SyntaxKind::CloseParenToken => ")",
            SyntaxKind::DotToken => ".",
            SyntaxKind::CommaToken => ",",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::WithKeyword => "with",
            SyntaxKind::TrueKeyword => "true",
            SyntaxKind::FalseKeyword => "false",
            SyntaxKind::NullKeyword => "null",
            SyntaxKind::Identifier => "identifier",
            SyntaxKind::NumericLiteral => "number",
            SyntaxKind::StringLiteral => "string",
            SyntaxKind::EndOfFileToken => "end of file",
            SyntaxKind::Unknown => "unknown",
        }
    }
}
