//! Shared fixtures for binder integration tests.
#![allow(dead_code)]

use wex_checker::{
    BinderOptions, BinderState, BoundExpr, BoundUpdateExpression, LocalId, Scope,
};
use wex_common::diagnostics::DiagnosticBag;
use wex_common::interner::Interner;
use wex_parser::{NodeArena, NodeIndex};
use wex_solver::{DefId, MemberId, SymbolTable, SymbolTableBuilder, TypeId, TypeInterner};

/// Route binder traces to the test harness when `RUST_LOG` is set.
pub fn init_test_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

pub struct Fixture {
    pub names: Interner,
    pub types: TypeInterner,
    pub symbols: SymbolTable,
    pub scope: Scope,
    pub options: BinderOptions,
}

pub struct Bound {
    pub expr: BoundExpr,
    /// Scanner and parser diagnostics.
    pub parse_diagnostics: DiagnosticBag,
    /// Binder diagnostics.
    pub diagnostics: DiagnosticBag,
}

impl Bound {
    pub fn update(&self) -> &BoundUpdateExpression {
        self.expr
            .as_update()
            .unwrap_or_else(|| panic!("expected an update expression, got {:?}", self.expr.kind))
    }

    pub fn codes(&self) -> Vec<u32> {
        self.diagnostics.codes()
    }

    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .iter()
            .map(|d| d.message_text.clone())
            .collect()
    }
}

impl Fixture {
    /// Build a symbol table with `build`, then an empty scope.
    pub fn new(build: impl FnOnce(&mut SymbolTableBuilder<'_>, &TypeInterner)) -> Self {
        let names = Interner::new();
        let types = TypeInterner::new();
        let symbols = {
            let mut builder = SymbolTableBuilder::new(&names);
            build(&mut builder, &types);
            builder.finish()
        };
        Fixture {
            names,
            types,
            symbols,
            scope: Scope::new(),
            options: BinderOptions::default(),
        }
    }

    /// `class Point { int X { get; set; } int Y { get; set; } Point Clone(); }`
    /// with a local `p: Point`.
    pub fn point() -> Self {
        let mut fixture = Fixture::new(|b, types| {
            let point = b.add_class("Point", &[]);
            let point_ty = types.class(point);
            b.add_property(point, "X", TypeId::INT, wex_solver::SetterKind::Set);
            b.add_property(point, "Y", TypeId::INT, wex_solver::SetterKind::Set);
            b.add_method(point, "Clone", &[], point_ty);
        });
        let point_ty = fixture.class_type("Point");
        fixture.declare("p", point_ty);
        fixture
    }

    pub fn def(&self, name: &str) -> DefId {
        let atom = self.names.intern(name);
        self.symbols
            .find_def(atom)
            .unwrap_or_else(|| panic!("no definition named {name}"))
    }

    pub fn class_type(&self, name: &str) -> TypeId {
        self.types.class(self.def(name))
    }

    /// The first member of `class` called `name`.
    pub fn member(&self, class: &str, name: &str) -> MemberId {
        let atom = self.names.intern(name);
        self.symbols.members_named(self.def(class), atom)[0]
    }

    pub fn declare(&mut self, name: &str, ty: TypeId) -> LocalId {
        let atom = self.names.intern(name);
        self.scope.declare(atom, ty)
    }

    pub fn bind(&self, text: &str) -> Bound {
        let parsed = wex_parser::parse_expression("test.wex", text, &self.names);
        let mut bound = self.bind_arena(&parsed.arena, parsed.root);
        bound.parse_diagnostics = parsed.diagnostics;
        bound
    }

    /// Bind a hand-built tree.
    pub fn bind_arena(&self, arena: &NodeArena, root: NodeIndex) -> Bound {
        let mut binder = BinderState::new(
            arena,
            &self.symbols,
            &self.types,
            &self.names,
            &self.scope,
            "test.wex",
            self.options,
        );
        let expr = binder.bind_expression(root);
        Bound {
            expr,
            parse_diagnostics: DiagnosticBag::new("test.wex"),
            diagnostics: binder.into_diagnostics(),
        }
    }
}
