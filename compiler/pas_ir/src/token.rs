//! Tokens produced by the lexer.
//!
//! `TokenKind` is payload-free so the parser can compare kinds directly;
//! literal payloads ride alongside in [`Literal`].

use std::fmt;

use crate::Span;

/// Token kinds of the language.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Integer literal: `42`
    IntegerConst,
    /// Real literal: `3.14`
    RealConst,
    /// Identifier: `x`, `total2`
    Ident,

    // Operators
    Plus,
    Minus,
    Mul,
    /// `DIV` (truncating integer division)
    IntDiv,
    /// `/` (real division)
    FloatDiv,

    // Punctuation
    Colon,
    Comma,
    LParen,
    RParen,
    Dot,
    Assign,
    Semi,

    // Keywords
    Program,
    Procedure,
    Var,
    Begin,
    End,
    /// `INTEGER` type keyword
    IntegerType,
    /// `REAL` type keyword
    RealType,

    Eof,
}

impl TokenKind {
    /// Human-readable name used in error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::IntegerConst => "integer literal",
            TokenKind::RealConst => "real literal",
            TokenKind::Ident => "identifier",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Mul => "`*`",
            TokenKind::IntDiv => "`DIV`",
            TokenKind::FloatDiv => "`/`",
            TokenKind::Colon => "`:`",
            TokenKind::Comma => "`,`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Dot => "`.`",
            TokenKind::Assign => "`:=`",
            TokenKind::Semi => "`;`",
            TokenKind::Program => "`PROGRAM`",
            TokenKind::Procedure => "`PROCEDURE`",
            TokenKind::Var => "`VAR`",
            TokenKind::Begin => "`BEGIN`",
            TokenKind::End => "`END`",
            TokenKind::IntegerType => "`INTEGER`",
            TokenKind::RealType => "`REAL`",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Literal payload carried by number and identifier tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Integer(i64),
    Real(f64),
    Ident(String),
}

/// A token with its kind, optional literal payload and source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<Literal>,
    pub span: Span,
}

impl Token {
    /// Create a token without a payload.
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            value: None,
            span,
        }
    }

    /// Create a token carrying a literal payload.
    #[inline]
    pub fn with_value(kind: TokenKind, value: Literal, span: Span) -> Self {
        Token {
            kind,
            value: Some(value),
            span,
        }
    }

    /// End-of-input token at `offset`.
    #[inline]
    pub fn eof(offset: u32) -> Self {
        Token::new(TokenKind::Eof, Span::point(offset))
    }

    /// Identifier text, if this is an identifier token.
    pub fn ident(&self) -> Option<&str> {
        match &self.value {
            Some(Literal::Ident(name)) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(Literal::Integer(n)) => write!(f, "{n}"),
            Some(Literal::Real(r)) => write!(f, "{r:?}"),
            Some(Literal::Ident(name)) => write!(f, "identifier `{name}`"),
            None => write!(f, "{}", self.kind),
        }
    }
}
