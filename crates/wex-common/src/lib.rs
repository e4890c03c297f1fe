//! Common types and utilities for the wex compiler.
//!
//! This crate provides foundational types used across all wex crates:
//! - String interning (`Atom`, `Interner`)
//! - Source spans (`Span`)
//! - Compiler limits and thresholds
//! - Diagnostics, the message table, and diagnostic collection

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Centralized limits and thresholds
pub mod limits;

// Diagnostic types, codes and messages
pub mod diagnostics;
