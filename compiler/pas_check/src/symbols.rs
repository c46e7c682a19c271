//! Symbols and the flat symbol table.

use std::fmt;

use pas_ir::{Span, TypeName};
use rustc_hash::FxHashMap;

/// A built-in type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BuiltinType {
    Integer,
    Real,
}

impl BuiltinType {
    pub fn name(self) -> &'static str {
        match self {
            BuiltinType::Integer => "INTEGER",
            BuiltinType::Real => "REAL",
        }
    }
}

impl From<TypeName> for BuiltinType {
    fn from(name: TypeName) -> Self {
        match name {
            TypeName::Integer => BuiltinType::Integer,
            TypeName::Real => BuiltinType::Real,
        }
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A declared variable and its type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableSymbol {
    pub name: String,
    pub ty: BuiltinType,
    /// Where the variable was (last) declared.
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Symbol {
    Builtin(BuiltinType),
    Variable(VariableSymbol),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Builtin(ty) => ty.name(),
            Symbol::Variable(var) => &var.name,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Builtin(ty) => write!(f, "<BuiltinType {ty}>"),
            Symbol::Variable(var) => write!(f, "<{}:{}>", var.name, var.ty),
        }
    }
}

/// One flat scope: built-in types plus every declared variable.
///
/// Defining a name that already exists replaces the old symbol.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: FxHashMap<String, Symbol>,
}

impl SymbolTable {
    /// A table seeded with the built-in types.
    pub fn new() -> Self {
        let mut table = SymbolTable::empty();
        table.define(Symbol::Builtin(BuiltinType::Integer));
        table.define(Symbol::Builtin(BuiltinType::Real));
        table
    }

    /// A table with no symbols at all, not even the built-in types.
    pub fn empty() -> Self {
        SymbolTable::default()
    }

    pub fn define(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol.name().to_string(), symbol);
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Look up a variable; built-in type names are not variables.
    pub fn lookup_variable(&self, name: &str) -> Option<&VariableSymbol> {
        match self.lookup(name) {
            Some(Symbol::Variable(var)) => Some(var),
            _ => None,
        }
    }

    /// Declared variables, in no particular order.
    pub fn variables(&self) -> impl Iterator<Item = &VariableSymbol> {
        self.symbols.values().filter_map(|symbol| match symbol {
            Symbol::Variable(var) => Some(var),
            Symbol::Builtin(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
