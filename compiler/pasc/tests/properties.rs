//! Language-level properties.

#![allow(clippy::unwrap_used)]

use pas_ir::Node;
use pasc::{compile_and_check, evaluate_expression, format_source, run, ErrorCode, Value};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn eval(source: &str) -> Value {
    evaluate_expression(source).unwrap()
}

#[test]
fn test_real_arithmetic_respects_precedence() {
    assert_eq!(eval("1.5 + 2.5 * 2"), Value::Real(6.5));
    assert_eq!(eval("(1.5 + 2.5) * 2"), Value::Real(8.0));
    assert_eq!(eval("10 / 4 - 0.5"), Value::Real(2.0));
    assert_eq!(eval("1 - 0.5 - 0.25"), Value::Real(0.25));
}

#[test]
fn test_integer_and_real_division() {
    assert_eq!(eval("7 DIV 2"), Value::Integer(3));
    assert_eq!(eval("7 / 2"), Value::Real(3.5));
}

#[test]
fn test_unary_minus() {
    assert_eq!(eval("- - 5"), Value::Integer(5));
    assert_eq!(eval("-(2 + 3)"), Value::Integer(-5));
}

#[test]
fn test_read_requires_prior_assignment() {
    assert_eq!(
        run("PROGRAM u; BEGIN y := x END.").unwrap_err().code(),
        ErrorCode::E2001
    );
    let evaluation = run("PROGRAM t; VAR x, y : INTEGER; BEGIN x := 10; y := x END.").unwrap();
    assert_eq!(evaluation.memory.get("y"), Some(Value::Integer(10)));
}

#[test]
fn test_tree_shape_is_deterministic() {
    let source = "PROGRAM s; VAR a, b : REAL; \
                  BEGIN a := -(1 + 2) * 3 DIV 4; BEGIN b := a / 2.0 END; END.";
    let dumps: Vec<_> = (0..3)
        .map(|_| Node::from(&compile_and_check(source).unwrap()).dump())
        .collect();
    assert_eq!(dumps[0], dumps[1]);
    assert_eq!(dumps[1], dumps[2]);
}

#[test]
fn test_formatted_source_runs_identically() {
    let source = "PROGRAM f; VAR a, b : INTEGER; c : REAL; \
                  BEGIN a := (7 + 3) * 2; b := a DIV (3 - 1); c := -(a - b) / 4 END.";
    let formatted = format_source(source).unwrap();
    assert_eq!(run(source).unwrap(), run(&formatted).unwrap());
}

/// Quarter-step reals: exact in binary, and printed without an exponent.
fn quarter() -> impl Strategy<Value = f64> {
    (1u32..40_000).prop_map(|n| f64::from(n) / 4.0)
}

proptest! {
    #[test]
    fn real_arithmetic_matches_host(a in quarter(), b in quarter(), c in quarter(), d in quarter(), e in quarter()) {
        let source = format!("{a:?} + {b:?} * ({c:?} - {d:?}) / {e:?}");
        let expected = a + b * (c - d) / e;
        prop_assert_eq!(evaluate_expression(&source), Ok(Value::Real(expected)), "{}", source);
    }

    #[test]
    fn int_div_and_real_div_agree(a in 0i64..100_000, b in 1i64..1_000) {
        let int_div = evaluate_expression(&format!("{a} DIV {b}")).unwrap();
        let real_div = evaluate_expression(&format!("{a} / {b}")).unwrap();
        prop_assert_eq!(int_div, Value::Integer(a / b));
        prop_assert_eq!(Value::Integer(a / b), match real_div {
            Value::Real(r) => Value::Integer(r.trunc() as i64),
            Value::Integer(_) => unreachable!("`/` always yields a real"),
        });
    }
}
