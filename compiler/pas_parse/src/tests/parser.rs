//! Grammar coverage: well-formed input and the trees it produces.

#![allow(clippy::unwrap_used)]

use pas_ir::{
    BinaryOp, Declaration, Expr, Node, Number, Span, Statement, TypeName, UnaryOp,
};
use pretty_assertions::assert_eq;

use crate::{parse, parse_expression};

fn dump_program(source: &str) -> String {
    Node::from(&parse(source).unwrap()).dump()
}

fn dump_expr(source: &str) -> String {
    Node::from(&parse_expression(source).unwrap()).dump()
}

// === Programs and blocks ===

#[test]
fn test_parse_minimal_program() {
    let program = parse("PROGRAM empty; BEGIN END.").unwrap();
    assert_eq!(program.name, "empty");
    assert!(program.block.declarations.is_empty());
    assert_eq!(program.block.body.statements, vec![Statement::NoOp]);
}

#[test]
fn test_parse_assignment_shape() {
    assert_eq!(
        dump_program("PROGRAM p1; BEGIN x := 2 + 3 * 4 END."),
        "(Program p1 (Block (Compound (Assign (Variable x) \
         (BinaryOp + (Number 2) (BinaryOp * (Number 3) (Number 4)))))))"
    );
}

#[test]
fn test_parse_nested_compound() {
    assert_eq!(
        dump_program("PROGRAM n; BEGIN BEGIN a := 1 END; b := a END."),
        "(Program n (Block (Compound (Compound (Assign (Variable a) (Number 1))) \
         (Assign (Variable b) (Variable a)))))"
    );
}

#[test]
fn test_empty_statements() {
    let program = parse("PROGRAM e; BEGIN ; ; END.").unwrap();
    assert_eq!(
        program.block.body.statements,
        vec![Statement::NoOp, Statement::NoOp, Statement::NoOp]
    );
}

#[test]
fn test_trailing_semicolon_adds_noop() {
    let program = parse("PROGRAM t; BEGIN a := 1; END.").unwrap();
    assert_eq!(program.block.body.statements.len(), 2);
    assert_eq!(program.block.body.statements[1], Statement::NoOp);
}

#[test]
fn test_spans() {
    let program = parse("PROGRAM p; BEGIN alpha := 1 END.").unwrap();
    assert_eq!(program.span, Span::new(0, 32));
    let Statement::Assign(assign) = &program.block.body.statements[0] else {
        panic!("expected assignment");
    };
    assert_eq!(assign.target.span, Span::new(17, 22));
}

// === Declarations ===

#[test]
fn test_var_declarations() {
    let program =
        parse("PROGRAM d; VAR a, b : INTEGER; c : REAL; BEGIN END.").unwrap();
    let decls: Vec<_> = program
        .block
        .declarations
        .iter()
        .map(|decl| match decl {
            Declaration::Var(var) => (var.variable.name.as_str(), var.type_spec.name),
            Declaration::Procedure(_) => panic!("unexpected procedure"),
        })
        .collect();
    assert_eq!(
        decls,
        vec![
            ("a", TypeName::Integer),
            ("b", TypeName::Integer),
            ("c", TypeName::Real),
        ]
    );
}

#[test]
fn test_procedure_declarations() {
    let source = "PROGRAM p; VAR x : REAL; \
                  PROCEDURE inner; VAR y : INTEGER; BEGIN y := 1 END; \
                  PROCEDURE other; BEGIN END; \
                  BEGIN x := 1.5 END.";
    let program = parse(source).unwrap();
    let names: Vec<_> = program
        .block
        .declarations
        .iter()
        .map(|decl| match decl {
            Declaration::Var(var) => var.variable.name.clone(),
            Declaration::Procedure(proc) => format!("proc {}", proc.name),
        })
        .collect();
    assert_eq!(names, vec!["x", "proc inner", "proc other"]);

    let Declaration::Procedure(inner) = &program.block.declarations[1] else {
        panic!("expected procedure");
    };
    assert_eq!(inner.block.declarations.len(), 1);
    assert_eq!(inner.block.body.statements.len(), 1);
}

// === Expressions ===

#[test]
fn test_precedence() {
    assert_eq!(
        dump_expr("7 + 3 * 2"),
        "(BinaryOp + (Number 7) (BinaryOp * (Number 3) (Number 2)))"
    );
    assert_eq!(
        dump_expr("(7 + 3) * 2"),
        "(BinaryOp * (BinaryOp + (Number 7) (Number 3)) (Number 2))"
    );
}

#[test]
fn test_left_associativity() {
    assert_eq!(
        dump_expr("8 - 3 - 2"),
        "(BinaryOp - (BinaryOp - (Number 8) (Number 3)) (Number 2))"
    );
    assert_eq!(
        dump_expr("8 DIV 2 / 4"),
        "(BinaryOp / (BinaryOp DIV (Number 8) (Number 2)) (Number 4))"
    );
}

#[test]
fn test_unary_operators() {
    assert_eq!(dump_expr("- - 5"), "(UnaryOp - (UnaryOp - (Number 5)))");
    assert_eq!(
        parse_expression("+x").unwrap(),
        Expr::unary(
            UnaryOp::Plus,
            Expr::Variable(pas_ir::Variable::new("x", Span::new(1, 2)))
        )
    );
    assert_eq!(
        dump_expr("-(2 + 3)"),
        "(UnaryOp - (BinaryOp + (Number 2) (Number 3)))"
    );
}

#[test]
fn test_unary_binds_tighter_than_binary() {
    assert_eq!(
        dump_expr("-2 * 3"),
        "(BinaryOp * (UnaryOp - (Number 2)) (Number 3))"
    );
}

#[test]
fn test_number_kinds_preserved() {
    assert_eq!(
        parse_expression("2.5 * 2").unwrap(),
        Expr::binary(
            BinaryOp::Mul,
            Expr::Number(Number::Real(2.5)),
            Expr::Number(Number::Integer(2)),
        )
    );
}

#[test]
fn test_parse_is_deterministic() {
    let source = "PROGRAM d; VAR a : INTEGER; BEGIN a := -(1 + 2) * 3 DIV 4; b := a / 2.0 END.";
    let first = parse(source).unwrap();
    let second = parse(source).unwrap();
    assert_eq!(first, second);
    assert_eq!(Node::from(&first).dump(), Node::from(&second).dump());
}

#[test]
fn test_deep_parentheses() {
    let depth = 10_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(
        parse_expression(&source).unwrap(),
        Expr::Number(Number::Integer(1))
    );
}

#[test]
fn test_deep_unary_chain() {
    let depth = 1_000;
    let source = format!("{}1", "- ".repeat(depth));
    let expr = parse_expression(&source).unwrap();
    assert_eq!(Node::from(&expr).count(), depth + 1);
}
