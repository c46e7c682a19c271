//! The tree-walking interpreter.
//!
//! Statements mutate the interpreter's [`Memory`]; expressions are
//! evaluated against a shared borrow of it. Declarations do nothing at run
//! time, and procedure declarations are never executed.

use pas_ir::{Block, Compound, Expr, Program, Statement};
use pas_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{EvalError, Memory, Value};

/// Executes statements against one memory.
///
/// A failed run leaves every assignment made before the failure in
/// [`Interpreter::memory`].
#[derive(Debug, Default)]
pub struct Interpreter {
    memory: Memory,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter::default()
    }

    /// Start from existing memory instead of an empty one.
    pub fn with_memory(memory: Memory) -> Self {
        Interpreter { memory }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn into_memory(self) -> Memory {
        self.memory
    }

    pub fn run_program(&mut self, program: &Program) -> Result<(), EvalError> {
        self.run_block(&program.block)
    }

    fn run_block(&mut self, block: &Block) -> Result<(), EvalError> {
        // Declarations have no run-time effect.
        self.run_compound(&block.body)
    }

    pub fn run_compound(&mut self, compound: &Compound) -> Result<(), EvalError> {
        ensure_sufficient_stack(|| {
            for stmt in &compound.statements {
                self.run_statement(stmt)?;
            }
            Ok(())
        })
    }

    fn run_statement(&mut self, stmt: &Statement) -> Result<(), EvalError> {
        match stmt {
            Statement::Compound(inner) => self.run_compound(inner),
            Statement::Assign(assign) => {
                let value = eval_expr(&assign.expr, &self.memory)?;
                debug!(name = %assign.target.name, %value, "assign");
                self.memory.insert(assign.target.name.as_str(), value);
                Ok(())
            }
            Statement::NoOp => Ok(()),
        }
    }
}

/// Evaluate `expr`, reading variables from `memory`.
pub fn eval_expr(expr: &Expr, memory: &Memory) -> Result<Value, EvalError> {
    ensure_sufficient_stack(|| match expr {
        Expr::Binary { op, left, right } => {
            let left = eval_expr(left, memory)?;
            let right = eval_expr(right, memory)?;
            let result = evaluate_binary(left, right, *op);
            trace!(op = op.as_symbol(), %left, %right, ?result, "binary");
            result
        }
        Expr::Unary { op, operand } => evaluate_unary(eval_expr(operand, memory)?, *op),
        Expr::Number(number) => Ok(Value::from(*number)),
        Expr::Variable(var) => memory
            .get(&var.name)
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: var.name.clone(),
                span: var.span,
            }),
    })
}
