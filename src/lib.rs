//! Binder for non-destructive update expressions.
//!
//! `receiver with { Member = value, ... }` copies the receiver through its
//! parameterless `Clone` method and then assigns the listed members on the
//! copy. This crate ties the pieces together:
//!
//! - `wex-scanner` / `wex-parser`: the expression language
//! - `wex-solver`: types, members, lookup and conversions
//! - `wex-checker`: the binder producing `BoundUpdateExpression`
//! - `compilation`: binding many expressions in parallel
//! - `config`: JSON options
//! - `tracing_config`: opt-in logging

pub mod compilation;
pub mod config;
pub mod tracing_config;

pub use compilation::{
    BindRequest, BindResult, CancellationToken, Compilation, CompilationResult,
};
pub use config::{BinderConfig, CompilationOptions};

pub use wex_checker as checker;
pub use wex_common as common;
pub use wex_parser as parser;
pub use wex_scanner as scanner;
pub use wex_solver as solver;
