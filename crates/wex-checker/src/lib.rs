//! Expression binder for the wex compiler.
//!
//! Binds parsed expressions against a `SymbolTable` into a typed
//! `BoundExpr` tree, reporting diagnostics into a `DiagnosticBag`.
//! The centerpiece is the non-destructive update expression
//! (`receiver with { member = value, ... }`), bound by
//! `BinderState::bind_with_expression` into a `BoundUpdateExpression`.

pub mod bound;
pub mod context;
pub mod state;

mod assignment;
mod error_reporter;
mod expr;
mod member_access;
mod with_expression;

pub use bound::{
    BindValueKind, BoundExpr, BoundInitializer, BoundKind, BoundUpdateExpression, ConstantValue,
    InitializerListBuilder, LocalId,
};
pub use context::{BinderContext, BinderOptions, Local, Scope};
pub use state::BinderState;
