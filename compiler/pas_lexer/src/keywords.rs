//! Reserved keyword resolution.
//!
//! Keywords are case-sensitive and matched exactly as written: `BEGIN` is a
//! keyword, `begin` and `Begin` are identifiers. The table is a static
//! `match`, bucketed by length so most identifiers are rejected without a
//! string comparison.

use pas_ir::TokenKind;

/// Look up a reserved keyword by text.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        3 => match text {
            "VAR" => Some(TokenKind::Var),
            "DIV" => Some(TokenKind::IntDiv),
            "END" => Some(TokenKind::End),
            _ => None,
        },
        4 => match text {
            "REAL" => Some(TokenKind::RealType),
            _ => None,
        },
        5 => match text {
            "BEGIN" => Some(TokenKind::Begin),
            _ => None,
        },
        7 => match text {
            "PROGRAM" => Some(TokenKind::Program),
            "INTEGER" => Some(TokenKind::IntegerType),
            _ => None,
        },
        9 => match text {
            "PROCEDURE" => Some(TokenKind::Procedure),
            _ => None,
        },
        _ => None,
    }
}

/// Whether `text` is a reserved word (and so cannot name a variable).
pub fn is_keyword(text: &str) -> bool {
    lookup(text).is_some()
}
