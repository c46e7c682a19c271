//! Arithmetic on runtime values.
//!
//! Integer operands use checked arithmetic; a real on either side promotes
//! the whole operation to real. `DIV` always yields an integer and `/`
//! always yields a real.

use pas_ir::{BinaryOp, UnaryOp};

use crate::errors::{division_by_zero, integer_overflow};
use crate::{EvalError, Value};

type EvalResult = Result<Value, EvalError>;

/// Checked integer arithmetic where the only failure is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Integer).ok_or_else(|| integer_overflow(op_name))
}

pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    if matches!(op, BinaryOp::IntDiv | BinaryOp::FloatDiv) && right.is_zero() {
        return Err(division_by_zero(op));
    }
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_int_binary(a, b, op),
        _ => eval_real_binary(left.as_f64(), right.as_f64(), op),
    }
}

/// Binary operations on two integers. Divisors are known to be non-zero.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        // Rust integer division truncates toward zero, as `DIV` does.
        BinaryOp::IntDiv => checked_arith(a.checked_div(b), "integer division"),
        BinaryOp::FloatDiv => Ok(Value::Real(
            Value::Integer(a).as_f64() / Value::Integer(b).as_f64(),
        )),
    }
}

/// Binary operations once either operand is real.
fn eval_real_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Real(a + b)),
        BinaryOp::Sub => Ok(Value::Real(a - b)),
        BinaryOp::Mul => Ok(Value::Real(a * b)),
        BinaryOp::IntDiv => truncate_to_integer((a / b).trunc()),
        BinaryOp::FloatDiv => Ok(Value::Real(a / b)),
    }
}

/// Convert an already-truncated real quotient to an integer.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "range is checked before the cast; the bounds are exact powers of two"
)]
fn truncate_to_integer(quotient: f64) -> EvalResult {
    // [-2^63, 2^63) is exactly the i64 range.
    let in_range = quotient >= i64::MIN as f64 && quotient < i64::MAX as f64;
    if quotient.is_finite() && in_range {
        Ok(Value::Integer(quotient as i64))
    } else {
        Err(integer_overflow("integer division"))
    }
}

pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (_, UnaryOp::Plus) => Ok(value),
        (Value::Integer(n), UnaryOp::Minus) => {
            n.checked_neg().map(Value::Integer).ok_or_else(|| integer_overflow("negation"))
        }
        (Value::Real(r), UnaryOp::Minus) => Ok(Value::Real(-r)),
    }
}
