//! Lexer for the Pascal-subset language.
//!
//! Two layers:
//! - `raw_token`: logos recognizes token shapes (skipping whitespace and
//!   `{ ... }` comments).
//! - cooking (here): keyword resolution, literal parsing, span attachment.
//!
//! The [`Lexer`] is lazy and forward-only: each [`Lexer::next_token`] call
//! scans exactly one token, so the parser pulls tokens on demand. Once the
//! input is exhausted every further call returns the end-of-input token.

mod keywords;
mod lex_error;
mod raw_token;

use logos::Logos;
use pas_ir::{Literal, Span, Token, TokenKind};
use tracing::trace;

pub use keywords::is_keyword;
pub use lex_error::LexError;

use raw_token::RawToken;

/// Pull-based tokenizer over one source text.
pub struct Lexer<'src> {
    raw: logos::Lexer<'src, RawToken>,
    /// Offset reported for the end-of-input token.
    end: u32,
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            raw: RawToken::lexer(source),
            end: u32::try_from(source.trim_end().len()).unwrap_or(u32::MAX),
            exhausted: false,
        }
    }

    /// Scan the next token.
    ///
    /// Returns the end-of-input token once the source is exhausted, and on
    /// every call after that.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if self.exhausted {
            return Ok(Token::eof(self.end));
        }

        let Some(raw) = self.raw.next() else {
            self.exhausted = true;
            trace!(offset = self.end, "end of input");
            return Ok(Token::eof(self.end));
        };

        let range = self.raw.span();
        let text = self.raw.slice();
        let position = range.start;
        let span = Span::from_range(range);

        let token = match raw {
            Ok(raw) => cook(raw, text, span, position)?,
            Err(()) => {
                let ch = text.chars().next().unwrap_or('\0');
                return Err(LexError::InvalidCharacter { ch, position });
            }
        };

        trace!(kind = ?token.kind, %span, "token");
        Ok(token)
    }
}

/// Turn a raw token into a `Token`, resolving keywords and parsing literals.
fn cook(raw: RawToken, text: &str, span: Span, position: usize) -> Result<Token, LexError> {
    let out_of_range = || LexError::InvalidNumber {
        text: text.to_string(),
        position,
    };
    let kind = match raw {
        RawToken::Word => {
            return Ok(match keywords::lookup(text) {
                Some(kind) => Token::new(kind, span),
                None => Token::with_value(TokenKind::Ident, Literal::Ident(text.to_string()), span),
            });
        }
        RawToken::Integer => {
            let value = text.parse::<i64>().map_err(|_| out_of_range())?;
            return Ok(Token::with_value(TokenKind::IntegerConst, Literal::Integer(value), span));
        }
        RawToken::Real => {
            let value = text
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(out_of_range)?;
            return Ok(Token::with_value(TokenKind::RealConst, Literal::Real(value), span));
        }
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Mul,
        RawToken::Slash => TokenKind::FloatDiv,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semi => TokenKind::Semi,
        RawToken::Dot => TokenKind::Dot,
        RawToken::ColonEq => TokenKind::Assign,
        RawToken::Colon => TokenKind::Colon,
    };
    Ok(Token::new(kind, span))
}

/// Yields every token up to and including the first end-of-input token.
/// Stops after the first error.
impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.next_token();
        if result.is_err() {
            self.exhausted = true;
        }
        Some(result)
    }
}

/// Lex a whole source text into a token list ending in end-of-input.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}
