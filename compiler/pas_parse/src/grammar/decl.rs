//! Program and declaration parsing.

use pas_ir::{Block, Declaration, ProcedureDecl, Program, TokenKind, TypeName, TypeSpec, VarDecl};
use pas_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `PROGRAM variable ; block .`
    pub(crate) fn program(&mut self) -> Result<Program, ParseError> {
        let start = self.eat(TokenKind::Program)?.span;
        let name = self.variable()?.name;
        self.eat(TokenKind::Semi)?;
        let block = self.block()?;
        let end = self.eat(TokenKind::Dot)?.span;
        debug!(program = %name, "parsed program");
        Ok(Program {
            name,
            block,
            span: start.merge(end),
        })
    }

    /// `declarations compound_statement`
    ///
    /// Procedure bodies are blocks, so this recurses once per nesting level.
    pub(crate) fn block(&mut self) -> Result<Block, ParseError> {
        ensure_sufficient_stack(|| {
            let declarations = self.declarations()?;
            let body = self.compound_statement()?;
            Ok(Block { declarations, body })
        })
    }

    /// `(VAR (var_decl ;)+)? (PROCEDURE ID ; block ;)*`
    fn declarations(&mut self) -> Result<Vec<Declaration>, ParseError> {
        let mut declarations = Vec::new();

        if self.check(TokenKind::Var) {
            self.eat(TokenKind::Var)?;
            // At least one declaration must follow `VAR`.
            loop {
                declarations.extend(self.var_decl()?.into_iter().map(Declaration::Var));
                self.eat(TokenKind::Semi)?;
                if !self.check(TokenKind::Ident) {
                    break;
                }
            }
        }

        while self.check(TokenKind::Procedure) {
            let start = self.eat(TokenKind::Procedure)?.span;
            let name = self.variable()?.name;
            self.eat(TokenKind::Semi)?;
            let block = self.block()?;
            let end = self.eat(TokenKind::Semi)?.span;
            declarations.push(Declaration::Procedure(ProcedureDecl {
                name,
                block,
                span: start.merge(end),
            }));
        }

        Ok(declarations)
    }

    /// `ID (, ID)* : type_spec`, one `VarDecl` per name.
    fn var_decl(&mut self) -> Result<Vec<VarDecl>, ParseError> {
        let mut variables = vec![self.variable()?];
        while self.check(TokenKind::Comma) {
            self.eat(TokenKind::Comma)?;
            variables.push(self.variable()?);
        }
        self.eat(TokenKind::Colon)?;
        let type_spec = self.type_spec()?;

        Ok(variables
            .into_iter()
            .map(|variable| VarDecl {
                variable,
                type_spec: type_spec.clone(),
            })
            .collect())
    }

    /// `INTEGER | REAL`
    fn type_spec(&mut self) -> Result<TypeSpec, ParseError> {
        if self.check(TokenKind::IntegerType) {
            let span = self.eat(TokenKind::IntegerType)?.span;
            return Ok(TypeSpec {
                name: TypeName::Integer,
                span,
            });
        }
        let span = self.eat(TokenKind::RealType)?.span;
        Ok(TypeSpec {
            name: TypeName::Real,
            span,
        })
    }
}
