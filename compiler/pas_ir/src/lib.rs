//! Pas IR - shared data model for the Pascal-subset front end.
//!
//! This crate contains the types every phase agrees on:
//! - Spans for source locations
//! - Tokens produced by the lexer
//! - AST nodes produced by the parser and walked by the checker and
//!   interpreter
//! - `Node`, a borrowed uniform view used for tree-shape dumps
//!
//! # Design Philosophy
//!
//! - **Closed node set**: statements and expressions are enums, so every
//!   pass is an exhaustive `match` and a new node kind is a compile error
//!   until each pass handles it.
//! - **Owned trees**: children are boxed or stored in `Vec`s; no arena, no
//!   sharing.

pub mod ast;
mod node;
mod span;
mod token;

pub use ast::{
    Assign, BinaryOp, Block, Compound, Declaration, Expr, Number, ProcedureDecl, Program,
    Statement, TypeName, TypeSpec, UnaryOp, VarDecl, Variable,
};
pub use node::Node;
pub use span::Span;
pub use token::{Literal, Token, TokenKind};
