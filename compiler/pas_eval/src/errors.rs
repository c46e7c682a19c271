//! Runtime errors.
//!
//! Every error is terminal for the current evaluation. Assignments already
//! executed stay in memory.

use pas_diagnostic::{Diagnostic, ErrorCode};
use pas_ir::{BinaryOp, Span};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A variable was read before any assignment stored a value.
    #[error("variable `{name}` has no value")]
    UndefinedVariable { name: String, span: Span },

    /// `DIV` or `/` with a zero divisor (integer `0` or real `0.0`).
    #[error("division by zero in `{}`", op.as_symbol())]
    DivisionByZero { op: BinaryOp },

    /// An integer result does not fit `i64`.
    #[error("integer overflow in {op}")]
    IntegerOverflow { op: &'static str },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UndefinedVariable { .. } => ErrorCode::E3003,
            EvalError::DivisionByZero { .. } => ErrorCode::E3001,
            EvalError::IntegerOverflow { .. } => ErrorCode::E3002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            EvalError::UndefinedVariable { span, .. } => diag
                .with_label(*span, "read before assignment")
                .with_note("declared variables start without a value"),
            EvalError::DivisionByZero { .. } => {
                diag.with_note("both `DIV` and `/` reject a zero divisor")
            }
            EvalError::IntegerOverflow { .. } => {
                diag.with_note("INTEGER values range from -9223372036854775808 to 9223372036854775807")
            }
        }
    }
}

#[cold]
pub(crate) fn division_by_zero(op: BinaryOp) -> EvalError {
    EvalError::DivisionByZero { op }
}

#[cold]
pub(crate) fn integer_overflow(op: &'static str) -> EvalError {
    EvalError::IntegerOverflow { op }
}
