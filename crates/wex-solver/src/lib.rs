//! Type model and type queries for the wex compiler.
//!
//! - `TypeInterner` / `TypeId` / `TypeData` - interned type structure
//! - `SymbolTable` - class and interface definitions with their members
//! - `MemberResolver` - member lookup over inheritance chains
//! - `TypeRelations` - identity, derivation and conversions
//! - `TypeFormatter` - type names for diagnostics

pub mod class_hierarchy;
pub mod def;
pub mod diagnostics;
pub mod format;
pub mod instantiate;
pub mod intern;
pub mod lookup;
pub mod members;
pub mod relations;
pub mod symbol_table;
pub mod types;

pub use class_hierarchy::ClassHierarchy;
pub use def::{ClassDef, DefId, DefKind};
pub use diagnostics::{UseSiteDiagnostic, UseSiteDiagnostics};
pub use format::TypeFormatter;
pub use instantiate::{TypeSubstitution, instantiate_type};
pub use intern::TypeInterner;
pub use lookup::{
    LookupCandidate, LookupOptions, LookupResult, LookupResultKind, MemberResolver,
    well_known_names,
};
pub use members::{MemberId, MemberKind, MemberSymbol, SetterKind, Visibility};
pub use relations::{ConversionKind, TypeCompareKind, TypeRelations, are_identical};
pub use symbol_table::{SymbolTable, SymbolTableBuilder};
pub use types::{IntrinsicKind, TypeArgs, TypeData, TypeId};

#[cfg(test)]
#[path = "tests/intern_tests.rs"]
mod intern_tests;
