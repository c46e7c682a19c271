//! The undefined-name pass.
//!
//! One exhaustive `match` per AST layer. Declarations are processed before
//! the body of their block, so a variable is visible from its declaration to
//! the end of the program. Procedure bodies are skipped entirely.

use pas_ir::{Block, Compound, Declaration, Expr, Program, Statement, VarDecl, Variable};
use pas_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::suggest::suggest_variable;
use crate::{CheckError, Symbol, SymbolTable, VariableSymbol};

pub(crate) struct Checker {
    table: SymbolTable,
}

impl Checker {
    pub(crate) fn new(table: SymbolTable) -> Self {
        Checker { table }
    }

    pub(crate) fn into_table(self) -> SymbolTable {
        self.table
    }

    pub(crate) fn check_program(&mut self, program: &Program) -> Result<(), CheckError> {
        self.check_block(&program.block)
    }

    fn check_block(&mut self, block: &Block) -> Result<(), CheckError> {
        for decl in &block.declarations {
            match decl {
                Declaration::Var(var) => self.check_var_decl(var)?,
                Declaration::Procedure(proc) => {
                    debug!(procedure = %proc.name, "skipping procedure body");
                }
            }
        }
        self.check_compound(&block.body)
    }

    fn check_var_decl(&mut self, decl: &VarDecl) -> Result<(), CheckError> {
        let type_name = decl.type_spec.name.as_str();
        let ty = match self.table.lookup(type_name) {
            Some(Symbol::Builtin(ty)) => *ty,
            _ => {
                return Err(CheckError::UndefinedType {
                    name: type_name.to_string(),
                    span: decl.type_spec.span,
                })
            }
        };

        debug!(name = %decl.variable.name, %ty, "define");
        self.table.define(Symbol::Variable(VariableSymbol {
            name: decl.variable.name.clone(),
            ty,
            span: decl.variable.span,
        }));
        Ok(())
    }

    fn check_compound(&mut self, compound: &Compound) -> Result<(), CheckError> {
        ensure_sufficient_stack(|| {
            for stmt in &compound.statements {
                match stmt {
                    Statement::Compound(inner) => self.check_compound(inner)?,
                    Statement::Assign(assign) => {
                        self.check_variable(&assign.target)?;
                        self.check_expr(&assign.expr)?;
                    }
                    Statement::NoOp => {}
                }
            }
            Ok(())
        })
    }

    fn check_expr(&self, expr: &Expr) -> Result<(), CheckError> {
        ensure_sufficient_stack(|| match expr {
            Expr::Binary { left, right, .. } => {
                self.check_expr(left)?;
                self.check_expr(right)
            }
            Expr::Unary { operand, .. } => self.check_expr(operand),
            Expr::Number(_) => Ok(()),
            Expr::Variable(var) => self.check_variable(var),
        })
    }

    fn check_variable(&self, var: &Variable) -> Result<(), CheckError> {
        if self.table.lookup_variable(&var.name).is_some() {
            return Ok(());
        }
        Err(CheckError::UndefinedVariable {
            name: var.name.clone(),
            span: var.span,
            suggestion: suggest_variable(&self.table, &var.name),
        })
    }
}
