//! Recursive-descent parser for the Pascal subset.
//!
//! The parser pulls tokens from a [`Lexer`] on demand and keeps exactly one
//! token of lookahead. Every production is a method on [`Parser`]; the
//! grammar lives in the `grammar` module, split by declarations, statements
//! and expressions. Parsing stops at the first error.

mod error;
mod grammar;

use pas_ir::{Expr, Program, Token, TokenKind};
use pas_lexer::Lexer;
use tracing::trace;

pub use error::ParseError;

/// Parser state: the token source and the current lookahead token.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current_token: Token,
}

impl<'src> Parser<'src> {
    /// Create a parser positioned on the first token of `source`.
    pub fn new(source: &'src str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
        })
    }

    /// Parse a whole program and require end-of-input after its final `.`.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let program = self.program()?;
        self.expect_eof()?;
        Ok(program)
    }

    /// Parse a bare expression and require end-of-input after it.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let expr = self.expr()?;
        self.expect_eof()?;
        Ok(expr)
    }

    // === Token access ===

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    /// Consume the current token if it has kind `expected`, returning it.
    pub(crate) fn eat(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        if !self.check(expected) {
            return Err(self.unexpected(expected));
        }
        let next = self.lexer.next_token()?;
        let token = std::mem::replace(&mut self.current_token, next);
        trace!(kind = ?token.kind, span = %token.span, "eat");
        Ok(token)
    }

    pub(crate) fn unexpected(&self, expected: TokenKind) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            actual: self.current_token.kind,
            span: self.current_token.span,
        }
    }

    fn expect_eof(&self) -> Result<(), ParseError> {
        if self.check(TokenKind::Eof) {
            Ok(())
        } else {
            Err(self.unexpected(TokenKind::Eof))
        }
    }
}

/// Parse a complete program.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new(source)?.parse_program()
}

/// Parse a bare expression such as `7 + 3 * 2`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse_expression(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source)?.parse_expression()
}

#[cfg(test)]
mod tests;
