//! Scanner/tokenizer for the wex expression language.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `ScannerState` - Tokenizer state machine
//! - `TokenFlags` - Extra facts about the current token

mod scanner;
mod syntax_kind;

pub use scanner::{ScannerDiagnostic, ScannerMark, ScannerState, TokenFlags};
pub use syntax_kind::SyntaxKind;
