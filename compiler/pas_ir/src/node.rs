//! Borrowed, uniform view over every AST node kind.
//!
//! `Node` flattens the typed AST into one closed enum so tree-shape tooling
//! (dumps, determinism checks) can walk any subtree without a per-type
//! visitor. Spans are not part of the shape.

use std::fmt::Write;

use crate::ast::{
    Assign, BinaryOp, Block, Compound, Declaration, Expr, Number, ProcedureDecl, Program,
    Statement, TypeSpec, UnaryOp, VarDecl, Variable,
};

/// One AST node, borrowed from the tree that owns it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Node<'a> {
    Program(&'a Program),
    Block(&'a Block),
    VarDecl(&'a VarDecl),
    ProcedureDecl(&'a ProcedureDecl),
    TypeSpec(&'a TypeSpec),
    Compound(&'a Compound),
    Assign(&'a Assign),
    NoOp,
    BinaryOp {
        op: BinaryOp,
        left: &'a Expr,
        right: &'a Expr,
    },
    UnaryOp {
        op: UnaryOp,
        operand: &'a Expr,
    },
    Number(Number),
    Variable(&'a Variable),
}

impl<'a> Node<'a> {
    /// Node kind name, e.g. `"BinaryOp"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Program(_) => "Program",
            Node::Block(_) => "Block",
            Node::VarDecl(_) => "VarDecl",
            Node::ProcedureDecl(_) => "ProcedureDecl",
            Node::TypeSpec(_) => "TypeSpec",
            Node::Compound(_) => "Compound",
            Node::Assign(_) => "Assign",
            Node::NoOp => "NoOp",
            Node::BinaryOp { .. } => "BinaryOp",
            Node::UnaryOp { .. } => "UnaryOp",
            Node::Number(_) => "Number",
            Node::Variable(_) => "Variable",
        }
    }

    /// Leaf payload that distinguishes nodes of the same kind, if any.
    pub fn payload(&self) -> Option<String> {
        match self {
            Node::Program(program) => Some(program.name.clone()),
            Node::ProcedureDecl(decl) => Some(decl.name.clone()),
            Node::TypeSpec(spec) => Some(spec.name.as_str().to_string()),
            Node::BinaryOp { op, .. } => Some(op.as_symbol().to_string()),
            Node::UnaryOp { op, .. } => Some(op.as_symbol().to_string()),
            Node::Number(Number::Integer(n)) => Some(n.to_string()),
            Node::Number(Number::Real(r)) => Some(format!("{r:?}")),
            Node::Variable(var) => Some(var.name.clone()),
            Node::Block(_) | Node::VarDecl(_) | Node::Compound(_) | Node::Assign(_) | Node::NoOp => {
                None
            }
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Program(program) => vec![Node::Block(&program.block)],
            Node::Block(block) => block
                .declarations
                .iter()
                .map(Node::from)
                .chain(std::iter::once(Node::Compound(&block.body)))
                .collect(),
            Node::VarDecl(decl) => vec![
                Node::Variable(&decl.variable),
                Node::TypeSpec(&decl.type_spec),
            ],
            Node::ProcedureDecl(decl) => vec![Node::Block(&decl.block)],
            Node::Compound(compound) => compound.statements.iter().map(Node::from).collect(),
            Node::Assign(assign) => vec![Node::Variable(&assign.target), Node::from(&assign.expr)],
            Node::BinaryOp { left, right, .. } => vec![Node::from(left), Node::from(right)],
            Node::UnaryOp { operand, .. } => vec![Node::from(operand)],
            Node::TypeSpec(_) | Node::NoOp | Node::Number(_) | Node::Variable(_) => Vec::new(),
        }
    }

    /// S-expression of the subtree's shape: kind, payload and children.
    ///
    /// ```text
    /// (Assign (Variable x) (BinaryOp + (Number 2) (Number 3)))
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out);
        out
    }

    fn dump_into(&self, out: &mut String) {
        out.push('(');
        out.push_str(self.kind_name());
        if let Some(payload) = self.payload() {
            let _ = write!(out, " {payload}");
        }
        for child in self.children() {
            out.push(' ');
            child.dump_into(out);
        }
        out.push(')');
    }

    /// Number of nodes in the subtree, this node included.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Node::count).sum::<usize>()
    }
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Declaration> for Node<'a> {
    fn from(decl: &'a Declaration) -> Self {
        match decl {
            Declaration::Var(var) => Node::VarDecl(var),
            Declaration::Procedure(proc) => Node::ProcedureDecl(proc),
        }
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(stmt: &'a Statement) -> Self {
        match stmt {
            Statement::Compound(compound) => Node::Compound(compound),
            Statement::Assign(assign) => Node::Assign(assign),
            Statement::NoOp => Node::NoOp,
        }
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Binary { op, left, right } => Node::BinaryOp {
                op: *op,
                left,
                right,
            },
            Expr::Unary { op, operand } => Node::UnaryOp { op: *op, operand },
            Expr::Number(number) => Node::Number(*number),
            Expr::Variable(var) => Node::Variable(var),
        }
    }
}
