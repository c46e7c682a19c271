//! Raw token scanning via logos.
//!
//! Recognizes token shapes only; keyword resolution and literal parsing
//! happen when the raw token is cooked in `lib.rs`.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
// Whitespace runs and `{ ... }` comments (no nesting). An unclosed `{`
// matches nothing and surfaces as an invalid character.
#[logos(skip r"([ \t\r\n\f]+|\{[^}]*\})")]
pub(crate) enum RawToken {
    /// Identifier or keyword.
    #[regex(r"[A-Za-z][A-Za-z0-9]*")]
    Word,

    #[regex(r"[0-9]+")]
    Integer,

    /// Digits, a dot, and an optional fraction: `2.5`, `3.`
    #[regex(r"[0-9]+\.[0-9]*")]
    Real,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token(".")]
    Dot,
    #[token(":=")]
    ColonEq,
    #[token(":")]
    Colon,
}
