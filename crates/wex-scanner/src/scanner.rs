//! Tokenizer state machine.

use crate::SyntaxKind;
use bitflags::bitflags;
use wex_common::diagnostics::diagnostic_codes;

bitflags! {
    /// Extra facts about the current token.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct TokenFlags: u8 {
        /// Numeric literal contains a decimal point.
        const FLOATING_POINT = 1 << 0;
        /// Numeric literal ends with an `L` suffix.
        const LONG_SUFFIX = 1 << 1;
        /// String literal reached end of input before its closing quote.
        const UNTERMINATED = 1 << 2;
    }
}

/// Saved scanner position, see `ScannerState::mark`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannerMark {
    pos: usize,
    diagnostics: usize,
}

/// A lexical error, reported by the parser with its own file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannerDiagnostic {
    pub code: u32,
    pub start: u32,
    pub length: u32,
}

/// Scanner over one source text. Call `scan()` to advance; the current
/// token is described by `token()`, `token_start()`, `token_end()`,
/// `token_value()` and `token_flags()`.
pub struct ScannerState<'a> {
    text: &'a str,
    pos: usize,
    token: SyntaxKind,
    token_start: usize,
    token_value: String,
    token_flags: TokenFlags,
    diagnostics: Vec<ScannerDiagnostic>,
}

impl<'a> ScannerState<'a> {
    pub fn new(text: &'a str) -> Self {
        ScannerState {
            text,
            pos: 0,
            token: SyntaxKind::Unknown,
            token_start: 0,
            token_value: String::new(),
            token_flags: TokenFlags::empty(),
            diagnostics: Vec::new(),
        }
    }

    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token_start as u32
    }

    #[inline]
    pub fn token_end(&self) -> u32 {
        self.pos as u32
    }

    /// Identifier text, unescaped string contents, or numeric literal digits.
    #[inline]
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    #[inline]
    pub fn token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    pub fn take_diagnostics(&mut self) -> Vec<ScannerDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Save the start of the current token for a later `rewind`.
    pub fn mark(&self) -> ScannerMark {
        ScannerMark {
            pos: self.token_start,
            diagnostics: self.diagnostics.len(),
        }
    }

    /// Rewind to a token saved with `mark` and rescan it. Diagnostics from
    /// tokens scanned after the mark are dropped; they are reported again
    /// when those tokens are rescanned.
    pub fn rewind(&mut self, mark: ScannerMark) -> SyntaxKind {
        self.pos = mark.pos;
        let kind = self.scan();
        self.diagnostics.truncate(mark.diagnostics);
        kind
    }

    fn peek_char(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset..)?.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn error(&mut self, code: u32, start: usize) {
        self.diagnostics.push(ScannerDiagnostic {
            code,
            start: start as u32,
            length: (self.pos - start) as u32,
        });
    }

    /// Advance to the next token.
    pub fn scan(&mut self) -> SyntaxKind {
        self.token_value.clear();
        self.token_flags = TokenFlags::empty();

        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.bump();
            } else {
                break;
            }
        }

        self.token_start = self.pos;
        let Some(ch) = self.bump() else {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        };

        self.token = match ch {
            '{' => SyntaxKind::OpenBraceToken,
            '}' => SyntaxKind::CloseBraceToken,
            '(' => SyntaxKind::OpenParenToken,
            ')' => SyntaxKind::CloseParenToken,
            ',' => SyntaxKind::CommaToken,
            '=' => SyntaxKind::EqualsToken,
            '.' if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) => SyntaxKind::DotToken,
            '"' => self.scan_string(),
            c if c.is_ascii_digit() || c == '.' => self.scan_number(c),
            c if is_identifier_start(c) => self.scan_identifier(c),
            _ => {
                self.error(diagnostic_codes::INVALID_CHARACTER, self.token_start);
                SyntaxKind::Unknown
            }
        };
        self.token
    }

    fn scan_identifier(&mut self, first: char) -> SyntaxKind {
        self.token_value.push(first);
        while let Some(ch) = self.peek_char() {
            if !is_identifier_part(ch) {
                break;
            }
            self.token_value.push(ch);
            self.bump();
        }
        SyntaxKind::keyword_from_text(&self.token_value).unwrap_or(SyntaxKind::Identifier)
    }

    fn scan_number(&mut self, first: char) -> SyntaxKind {
        self.token_value.push(first);
        if first == '.' {
            self.token_flags |= TokenFlags::FLOATING_POINT;
        }
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                self.token_value.push(ch);
                self.bump();
            } else if ch == '.'
                && !self.token_flags.contains(TokenFlags::FLOATING_POINT)
                && self.peek_char_at(1).is_some_and(|c| c.is_ascii_digit())
            {
                self.token_flags |= TokenFlags::FLOATING_POINT;
                self.token_value.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        if matches!(self.peek_char(), Some('L' | 'l'))
            && !self.token_flags.contains(TokenFlags::FLOATING_POINT)
        {
            self.bump();
            self.token_flags |= TokenFlags::LONG_SUFFIX;
        }
        SyntaxKind::NumericLiteral
    }

    fn scan_string(&mut self) -> SyntaxKind {
        loop {
            match self.bump() {
                None | Some('\n') => {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(diagnostic_codes::UNTERMINATED_STRING_LITERAL, self.token_start);
                    break;
                }
                Some('"') => break,
                Some('\\') => match self.bump() {
                    Some('n') => self.token_value.push('\n'),
                    Some('t') => self.token_value.push('\t'),
                    Some(other) => self.token_value.push(other),
                    None => {
                        self.token_flags |= TokenFlags::UNTERMINATED;
                        self.error(diagnostic_codes::UNTERMINATED_STRING_LITERAL, self.token_start);
                        break;
                    }
                },
                Some(ch) => self.token_value.push(ch),
            }
        }
        SyntaxKind::StringLiteral
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

fn is_identifier_part(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
