//! Centralized limits and thresholds for the wex compiler.
//!
//! Shared constants for recursion depths and capacity hints. Keeping them in
//! one place prevents duplicate definitions with inconsistent values.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth for expression binding.
///
/// Each nested sub-expression (member access, parenthesized expression,
/// `with` receiver or initializer value) adds a frame to the binder's call
/// stack. Past this depth the binder reports `ExpressionTooDeeplyNested` and
/// returns an error-typed expression instead of recursing further.
///
/// ```text
/// ((((((((((p with { x = 1 }) with { x = 2 }) /* ... 256 levels ... */))))))))
/// ```
///
/// Can be lowered through `BinderOptions::max_expression_depth`.
pub const MAX_EXPR_BIND_DEPTH: u32 = 256;

/// Maximum nesting depth for the parser's recursive descent.
///
/// Matches the binder limit so anything the parser accepts can be bound.
pub const MAX_PARSE_DEPTH: u32 = MAX_EXPR_BIND_DEPTH;

/// Maximum number of base types visited while walking an inheritance chain.
///
/// Symbol tables are expected to be acyclic, but a malformed table
/// (`class A : B`, `class B : A`) must not hang member lookup or the
/// derived-from relation. The walk stops after this many steps.
pub const MAX_BASE_CHAIN_DEPTH: u32 = 64;

// =============================================================================
// Capacity Hints
// =============================================================================

/// Typical number of initializers in a `with` expression; used as the inline
/// capacity for initializer builders.
pub const TYPICAL_INITIALIZER_COUNT: usize = 4;
