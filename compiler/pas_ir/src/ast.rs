//! AST node types.
//!
//! Each node owns its children exclusively; the tree is never shared and
//! never cyclic. The node set is closed, so every pass (checker,
//! interpreter, formatter) is an exhaustive `match`.

use std::fmt;

use crate::Span;

/// Root of a parsed program: `PROGRAM name; block.`
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub name: String,
    pub block: Block,
    pub span: Span,
}

/// Declarations followed by the compound statement they scope.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub declarations: Vec<Declaration>,
    pub body: Compound,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    Var(VarDecl),
    Procedure(ProcedureDecl),
}

/// `name : TYPE` (one per declared name; `a, b : INTEGER` yields two).
#[derive(Clone, Debug, PartialEq)]
pub struct VarDecl {
    pub variable: Variable,
    pub type_spec: TypeSpec,
}

/// `PROCEDURE name; block;`: parsed, never checked or executed.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcedureDecl {
    pub name: String,
    pub block: Block,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeSpec {
    pub name: TypeName,
    pub span: Span,
}

/// Built-in type names.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeName {
    Integer,
    Real,
}

impl TypeName {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeName::Integer => "INTEGER",
            TypeName::Real => "REAL",
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `BEGIN statement; ... END`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Compound {
    pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Compound(Compound),
    Assign(Assign),
    /// Empty statement.
    NoOp,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Assign {
    pub target: Variable,
    pub expr: Expr,
}

/// A variable reference (read in expressions, written by assignment).
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: String,
    pub span: Span,
}

impl Variable {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Variable {
            name: name.into(),
            span,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Number(Number),
    Variable(Variable),
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }
}

/// Numeric literal; the integer/real distinction made by the lexer is kept.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Real(f64),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    /// `DIV`: truncating division, integer result.
    IntDiv,
    /// `/`: real division, real result.
    FloatDiv,
}

impl BinaryOp {
    /// Source spelling of the operator.
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::IntDiv => "DIV",
            BinaryOp::FloatDiv => "/",
        }
    }

    /// Binding strength: multiplicative operators bind tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::IntDiv | BinaryOp::FloatDiv => 2,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
        }
    }
}
