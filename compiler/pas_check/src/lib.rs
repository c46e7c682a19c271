//! Static checking for the Pascal subset.
//!
//! The only static rule is that every variable is declared before it is
//! assigned or read. The checker walks a parsed [`Program`] once, filling a
//! flat [`SymbolTable`] (seeded with `INTEGER` and `REAL`) from the `VAR`
//! sections and rejecting the first reference to an undeclared name.
//!
//! Types are recorded but not checked: `x := 2.5` is accepted for an
//! `INTEGER` variable.

mod checker;
mod error;
mod suggest;
mod symbols;

use pas_ir::Program;

pub use error::CheckError;
pub use suggest::suggest_variable;
pub use symbols::{BuiltinType, Symbol, SymbolTable, VariableSymbol};

/// Check `program` and return the symbol table it declares.
#[tracing::instrument(level = "debug", skip_all, fields(program = %program.name))]
pub fn check_program(program: &Program) -> Result<SymbolTable, CheckError> {
    check_program_with(SymbolTable::new(), program)
}

/// Check `program` against a caller-supplied starting table.
pub fn check_program_with(table: SymbolTable, program: &Program) -> Result<SymbolTable, CheckError> {
    let mut checker = checker::Checker::new(table);
    checker.check_program(program)?;
    Ok(checker.into_table())
}
