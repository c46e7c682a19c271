//! Property-based tests for the formatter.
//!
//! Random trees are formatted, parsed back and compared by shape (the
//! span-free `Node` dump), so every layout and parenthesization decision
//! has to survive the parser.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pas_ir::{
    Assign, BinaryOp, Block, Compound, Declaration, Expr, Node, Number, Program, Span,
    Statement, TypeName, TypeSpec, UnaryOp, VarDecl, Variable,
};
use pas_fmt::{format_expr, format_program};
use pas_lexer::is_keyword;
use pas_parse::{parse, parse_expression};
use proptest::prelude::*;

// -- Strategies --

fn identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9]{0,7}")
        .expect("valid regex")
        .prop_filter("not a keyword", |s| !is_keyword(s))
}

fn variable() -> impl Strategy<Value = Variable> {
    identifier().prop_map(|name| Variable::new(name, Span::DUMMY))
}

fn number() -> impl Strategy<Value = Number> {
    prop_oneof![
        (0i64..=i64::MAX).prop_map(Number::Integer),
        (0.0f64..1e9).prop_map(Number::Real),
        (0u32..1000).prop_map(|n| Number::Real(f64::from(n) / 8.0)),
    ]
}

fn binary_op() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Sub),
        Just(BinaryOp::Mul),
        Just(BinaryOp::IntDiv),
        Just(BinaryOp::FloatDiv),
    ]
}

fn unary_op() -> impl Strategy<Value = UnaryOp> {
    prop_oneof![Just(UnaryOp::Plus), Just(UnaryOp::Minus)]
}

fn expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        number().prop_map(Expr::Number),
        variable().prop_map(Expr::Variable),
    ];
    leaf.prop_recursive(6, 48, 2, |inner| {
        prop_oneof![
            (binary_op(), inner.clone(), inner.clone())
                .prop_map(|(op, left, right)| Expr::binary(op, left, right)),
            (unary_op(), inner).prop_map(|(op, operand)| Expr::unary(op, operand)),
        ]
    })
}

fn statement() -> impl Strategy<Value = Statement> {
    let simple = prop_oneof![
        4 => (variable(), expr()).prop_map(|(target, expr)| Statement::Assign(Assign { target, expr })),
        1 => Just(Statement::NoOp),
    ];
    simple.prop_recursive(3, 16, 4, |inner| {
        prop::collection::vec(inner, 1..4)
            .prop_map(|statements| Statement::Compound(Compound { statements }))
    })
}

fn var_decl() -> impl Strategy<Value = VarDecl> {
    (variable(), prop_oneof![Just(TypeName::Integer), Just(TypeName::Real)]).prop_map(
        |(variable, name)| VarDecl {
            variable,
            type_spec: TypeSpec {
                name,
                span: Span::DUMMY,
            },
        },
    )
}

fn program() -> impl Strategy<Value = Program> {
    (
        identifier(),
        prop::collection::vec(var_decl(), 0..4),
        prop::collection::vec(statement(), 1..5),
    )
        .prop_map(|(name, vars, statements)| Program {
            name,
            block: Block {
                declarations: vars.into_iter().map(Declaration::Var).collect(),
                body: Compound { statements },
            },
            span: Span::DUMMY,
        })
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn expr_round_trips(expr in expr()) {
        let text = format_expr(&expr);
        let reparsed = parse_expression(&text)
            .unwrap_or_else(|err| panic!("formatted expression {text:?} failed to parse: {err}"));
        prop_assert_eq!(Node::from(&reparsed).dump(), Node::from(&expr).dump(), "text: {}", text);
    }

    #[test]
    fn program_round_trips(program in program()) {
        let text = format_program(&program);
        let reparsed = parse(&text)
            .unwrap_or_else(|err| panic!("formatted program failed to parse: {err}\n{text}"));
        prop_assert_eq!(Node::from(&reparsed).dump(), Node::from(&program).dump(), "text:\n{}", text);
    }

    #[test]
    fn formatting_is_idempotent(program in program()) {
        let once = format_program(&program);
        let twice = format_program(&parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }
}
