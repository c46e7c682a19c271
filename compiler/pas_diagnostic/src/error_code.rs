use std::fmt;

/// Stable identifier attached to every diagnostic.
///
/// The leading digit names the stage that reported it:
/// `E0` lexing, `E1` parsing, `E2` name checking, `E3` evaluation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Character that starts no token
    E0001,
    /// Numeric literal out of range
    E0002,

    /// Token other than the one the grammar requires
    E1001,
    /// No expression where one must start
    E1002,

    /// Name used but never declared
    E2001,
    /// Declaration names an unknown type
    E2002,

    /// Divisor is zero
    E3001,
    /// Integer result out of `i64` range
    E3002,
    /// Variable read before any assignment
    E3003,
}

impl ErrorCode {
    /// The stage digit: 0 lexer, 1 parser, 2 checker, 3 evaluator.
    pub const fn phase(self) -> u8 {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 => 0,
            ErrorCode::E1001 | ErrorCode::E1002 => 1,
            ErrorCode::E2001 | ErrorCode::E2002 => 2,
            ErrorCode::E3001 | ErrorCode::E3002 | ErrorCode::E3003 => 3,
        }
    }

    /// Reported while turning text into a tree.
    pub const fn is_syntax_error(self) -> bool {
        self.phase() <= 1
    }

    /// Reported while running a program.
    pub const fn is_runtime_error(self) -> bool {
        self.phase() == 3
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The variant names are the codes.
        fmt::Debug::fmt(self, f)
    }
}
