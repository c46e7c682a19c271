//! Tree-walking evaluation for the Pascal subset.
//!
//! # Entry points
//!
//! - [`evaluate_program`]: run a program from empty memory
//! - [`evaluate_expr`]: evaluate a bare expression
//! - [`eval_expr`]: evaluate an expression against existing memory
//!
//! Memory is created per call; nothing persists between evaluations.

mod errors;
mod interpreter;
mod memory;
mod operators;
mod value;

use pas_ir::{Expr, Program};

pub use errors::EvalError;
pub use interpreter::{eval_expr, Interpreter};
pub use memory::Memory;
pub use operators::{evaluate_binary, evaluate_unary};
pub use value::Value;

/// Outcome of a successful evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// The expression's value; `None` when a program was run.
    pub result: Option<Value>,
    /// Variables as they stand at the end of evaluation.
    pub memory: Memory,
}

/// Run `program` from empty memory.
#[tracing::instrument(level = "debug", skip_all, fields(program = %program.name))]
pub fn evaluate_program(program: &Program) -> Result<Evaluation, EvalError> {
    let mut interpreter = Interpreter::new();
    interpreter.run_program(program)?;
    Ok(Evaluation {
        result: None,
        memory: interpreter.into_memory(),
    })
}

/// Evaluate a bare expression; memory stays empty, so any variable read fails.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate_expr(expr: &Expr) -> Result<Evaluation, EvalError> {
    let memory = Memory::new();
    let value = eval_expr(expr, &memory)?;
    Ok(Evaluation {
        result: Some(value),
        memory,
    })
}

#[cfg(test)]
mod tests;
