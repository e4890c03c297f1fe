//! Display names of types and members, as used in diagnostic messages.

use crate::intern::TypeInterner;
use crate::def::DefId;
use crate::members::MemberId;
use crate::symbol_table::SymbolTable;
use crate::types::{TypeData, TypeId};
use wex_common::interner::Interner;

pub struct TypeFormatter<'a> {
    symbols: &'a SymbolTable,
    types: &'a TypeInterner,
    names: &'a Interner,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(symbols: &'a SymbolTable, types: &'a TypeInterner, names: &'a Interner) -> Self {
        TypeFormatter {
            symbols,
            types,
            names,
        }
    }

    /// `int`, `Point`, `Box<int>`, `int?`, `T`.
    pub fn format(&self, ty: TypeId) -> String {
        let mut out = String::new();
        self.write_type(&mut out, ty);
        out
    }

    fn write_type(&self, out: &mut String, ty: TypeId) {
        match self.types.lookup(ty) {
            Some(TypeData::Intrinsic(kind)) => out.push_str(kind.name()),
            Some(TypeData::Class(def)) => self.write_def_name(out, def),
            Some(TypeData::Application { def, args }) => {
                self.write_def_name(out, def);
                out.push('<');
                for (i, &arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_type(out, arg);
                }
                out.push('>');
            }
            Some(TypeData::TypeParam { owner, index }) => {
                let name = self
                    .symbols
                    .def(owner)
                    .and_then(|class| class.type_params.get(index as usize).copied());
                match name {
                    Some(atom) => out.push_str(&self.names.resolve(atom)),
                    None => out.push_str(&format!("T{index}")),
                }
            }
            Some(TypeData::Nullable(inner)) => {
                self.write_type(out, inner);
                out.push('?');
            }
            None => out.push('?'),
        }
    }

    fn write_def_name(&self, out: &mut String, def: DefId) {
        match self.symbols.def(def) {
            Some(class) => out.push_str(&self.names.resolve(class.name)),
            None => out.push('?'),
        }
    }

    /// `Point.X` for fields and properties, `Point.Clone()` for methods.
    pub fn format_member(&self, id: MemberId) -> String {
        let Some(member) = self.symbols.member(id) else {
            return "?".to_string();
        };
        let mut out = String::new();
        self.write_def_name(&mut out, member.owner);
        out.push('.');
        out.push_str(&self.names.resolve(member.name));
        if member.is_method() {
            out.push('(');
            for (i, &param) in member.parameters().iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                self.write_type(&mut out, param);
            }
            out.push(')');
        }
        out
    }
}
