//! Expression parsing.
//!
//! Two binary precedence levels, both left-associative:
//!
//! | Level | Operators     | Production |
//! |-------|---------------|------------|
//! | 1     | `+ -`         | `expr`     |
//! | 2     | `* DIV /`     | `term`     |
//!
//! Unary `+`/`-` bind tighter than either and nest (`- - 5`).

use pas_ir::{BinaryOp, Expr, Literal, Number, Token, TokenKind, UnaryOp};
use pas_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `term ((+ | -) term)*`
    ///
    /// Runs under `ensure_sufficient_stack`: parenthesized input nests here.
    pub(crate) fn expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            let mut left = self.term()?;
            while let Some(op) = self.match_additive_op() {
                self.eat(self.current_kind())?;
                let right = self.term()?;
                left = Expr::binary(op, left, right);
            }
            Ok(left)
        })
    }

    /// `factor ((* | DIV | /) factor)*`
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.factor()?;
        while let Some(op) = self.match_multiplicative_op() {
            self.eat(self.current_kind())?;
            let right = self.factor()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// `(+ | -) factor | INTEGER_CONST | REAL_CONST | ( expr ) | variable`
    fn factor(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            if let Some(op) = self.match_unary_op() {
                self.eat(self.current_kind())?;
                let operand = self.factor()?;
                return Ok(Expr::unary(op, operand));
            }

            match self.current_kind() {
                TokenKind::IntegerConst | TokenKind::RealConst => {
                    let token = self.eat(self.current_kind())?;
                    Ok(Expr::Number(Self::number_literal(token)?))
                }
                TokenKind::LParen => {
                    self.eat(TokenKind::LParen)?;
                    let inner = self.expr()?;
                    self.eat(TokenKind::RParen)?;
                    Ok(inner)
                }
                TokenKind::Ident => Ok(Expr::Variable(self.variable()?)),
                actual => Err(ParseError::ExpectedExpression {
                    actual,
                    span: self.current_token.span,
                }),
            }
        })
    }

    /// Payload of a numeric token; a kind without its literal is not a number.
    pub(crate) fn number_literal(token: Token) -> Result<Number, ParseError> {
        match (token.kind, token.value) {
            (TokenKind::IntegerConst, Some(Literal::Integer(value))) => Ok(Number::Integer(value)),
            (TokenKind::RealConst, Some(Literal::Real(value))) => Ok(Number::Real(value)),
            (actual, _) => Err(ParseError::ExpectedExpression {
                actual,
                span: token.span,
            }),
        }
    }

    // === Operator matching ===

    fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Mul => Some(BinaryOp::Mul),
            TokenKind::IntDiv => Some(BinaryOp::IntDiv),
            TokenKind::FloatDiv => Some(BinaryOp::FloatDiv),
            _ => None,
        }
    }

    fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Minus => Some(UnaryOp::Minus),
            _ => None,
        }
    }
}
