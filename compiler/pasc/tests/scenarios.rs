//! End-to-end scenarios through the public entry points.

#![allow(clippy::unwrap_used)]

use pas_ir::{Span, TokenKind};
use pasc::{
    compile_and_check, evaluate, evaluate_expression, run, wrap_interactive, CheckError,
    CompileError, Error, ErrorCode, EvalError, Memory, ParseError, Value,
};
use pretty_assertions::assert_eq;

#[test]
fn test_assignment_without_declaration() {
    let source = "PROGRAM p1; BEGIN x := 2 + 3 * 4 END.";

    // The checker requires `x` to be declared...
    assert!(matches!(
        compile_and_check(source),
        Err(CompileError::Check(CheckError::UndefinedVariable { name, .. })) if name == "x"
    ));

    // ...but the interpreter alone stores whatever it is given.
    let program = pas_parse::parse(source).unwrap();
    let evaluation = evaluate(&program).unwrap();
    assert_eq!(evaluation.memory, Memory::from_iter([("x", Value::Integer(14))]));
}

#[test]
fn test_assignment_with_declaration() {
    let evaluation = run("PROGRAM p1; VAR x : INTEGER; BEGIN x := 2 + 3 * 4 END.").unwrap();
    assert_eq!(evaluation.result, None);
    assert_eq!(evaluation.memory, Memory::from_iter([("x", Value::Integer(14))]));
}

#[test]
fn test_real_division_result() {
    let evaluation = run("PROGRAM p2; VAR y : REAL; BEGIN y := 10 / 4 END.").unwrap();
    assert_eq!(evaluation.memory, Memory::from_iter([("y", Value::Real(2.5))]));
}

#[test]
fn test_undefined_variable_stops_before_evaluation() {
    let err = run("PROGRAM p3; VAR x : INTEGER; BEGIN x := z END.").unwrap_err();
    assert!(matches!(
        &err,
        Error::Compile(CompileError::Check(CheckError::UndefinedVariable { name, .. })) if name == "z"
    ));
    assert_eq!(err.code(), ErrorCode::E2001);
}

#[test]
fn test_undeclared_assignment_target() {
    assert_eq!(
        compile_and_check("PROGRAM p3; BEGIN z := 1 END."),
        Err(CompileError::Check(CheckError::UndefinedVariable {
            name: "z".to_string(),
            span: Span::new(18, 19),
            suggestion: None,
        }))
    );
}

#[test]
fn test_unclosed_parenthesis() {
    assert_eq!(
        compile_and_check("PROGRAM p4; BEGIN a := (1 + 2 END."),
        Err(CompileError::Parse(ParseError::UnexpectedToken {
            expected: TokenKind::RParen,
            actual: TokenKind::End,
            span: Span::new(30, 33),
        }))
    );
}

#[test]
fn test_bare_expression() {
    assert_eq!(evaluate_expression("7 + 3 * 2").unwrap(), Value::Integer(13));
}

#[test]
fn test_bare_expression_errors() {
    assert_eq!(evaluate_expression("1 +").unwrap_err().code(), ErrorCode::E1002);
    assert_eq!(evaluate_expression("y * 2").unwrap_err().code(), ErrorCode::E3003);
    assert_eq!(
        evaluate_expression("1 / 0"),
        Err(Error::Eval(EvalError::DivisionByZero {
            op: pas_ir::BinaryOp::FloatDiv
        }))
    );
}

#[test]
fn test_runtime_error_through_run() {
    let err = run("PROGRAM d; VAR a : INTEGER; BEGIN a := 1 DIV 0 END.").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E3001);
}

#[test]
fn test_lexical_error_through_compile() {
    let err = compile_and_check("PROGRAM p; BEGIN x := 1 @ END.").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E0001);
}

#[test]
fn test_interactive_wrapping() {
    assert_eq!(
        wrap_interactive("a := 1"),
        "PROGRAM interactive; BEGIN a := 1 END."
    );
    // An empty line is an empty statement.
    let evaluation = run(&wrap_interactive("")).unwrap();
    assert!(evaluation.memory.is_empty());
    // Interactive lines have no VAR section, so assignments are rejected.
    assert_eq!(run(&wrap_interactive("a := 1")).unwrap_err().code(), ErrorCode::E2001);
}

#[test]
fn test_procedures_parse_but_never_run() {
    let source = "PROGRAM p; VAR a : INTEGER; \
                  PROCEDURE side; VAR b : INTEGER; BEGIN b := a DIV 0 END; \
                  BEGIN a := 5 END.";
    let evaluation = run(source).unwrap();
    assert_eq!(evaluation.memory, Memory::from_iter([("a", Value::Integer(5))]));
}
