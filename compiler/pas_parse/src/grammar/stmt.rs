//! Statement parsing.

use pas_ir::{Assign, Compound, Statement, Token, TokenKind, Variable};
use pas_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `BEGIN statement_list END`
    pub(crate) fn compound_statement(&mut self) -> Result<Compound, ParseError> {
        ensure_sufficient_stack(|| {
            self.eat(TokenKind::Begin)?;
            let statements = self.statement_list()?;
            self.eat(TokenKind::End)?;
            Ok(Compound { statements })
        })
    }

    /// `statement (; statement)*`
    fn statement_list(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = vec![self.statement()?];
        while self.check(TokenKind::Semi) {
            self.eat(TokenKind::Semi)?;
            statements.push(self.statement()?);
        }

        // `BEGIN a := 1 b := 2 END`: the missing separator would otherwise
        // surface as a confusing "expected END".
        if self.check(TokenKind::Ident) {
            return Err(self.unexpected(TokenKind::Semi));
        }

        Ok(statements)
    }

    /// `compound_statement | assignment | empty`
    fn statement(&mut self) -> Result<Statement, ParseError> {
        match self.current_kind() {
            TokenKind::Begin => Ok(Statement::Compound(self.compound_statement()?)),
            TokenKind::Ident => Ok(Statement::Assign(self.assignment()?)),
            _ => Ok(Self::empty()),
        }
    }

    /// `variable := expr`
    fn assignment(&mut self) -> Result<Assign, ParseError> {
        let target = self.variable()?;
        self.eat(TokenKind::Assign)?;
        let expr = self.expr()?;
        Ok(Assign { target, expr })
    }

    /// `ID`
    pub(crate) fn variable(&mut self) -> Result<Variable, ParseError> {
        let token = self.eat(TokenKind::Ident)?;
        Self::variable_from(&token)
    }

    /// An identifier token without its name is rejected, never given a blank one.
    pub(crate) fn variable_from(token: &Token) -> Result<Variable, ParseError> {
        let name = token.ident().ok_or(ParseError::UnexpectedToken {
            expected: TokenKind::Ident,
            actual: token.kind,
            span: token.span,
        })?;
        Ok(Variable::new(name, token.span))
    }

    /// The empty statement consumes nothing.
    fn empty() -> Statement {
        Statement::NoOp
    }
}
