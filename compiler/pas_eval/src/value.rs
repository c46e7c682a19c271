//! Runtime values.

use std::fmt;

use pas_ir::Number;

/// A runtime number. Integer and real results stay distinct.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
}

impl Value {
    pub fn type_name(self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Real(_) => "REAL",
        }
    }

    /// The value as a real, promoting integers.
    #[expect(
        clippy::cast_precision_loss,
        reason = "integer-to-real promotion is the language's mixed arithmetic rule"
    )]
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Integer(n) => n as f64,
            Value::Real(r) => r,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Value::Integer(n) => n == 0,
            Value::Real(r) => r == 0.0,
        }
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        match number {
            Number::Integer(n) => Value::Integer(n),
            Number::Real(r) => Value::Real(r),
        }
    }
}

/// Integers print plainly; reals always show a fractional part (`3.0`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Real(r) => write!(f, "{r:?}"),
        }
    }
}
