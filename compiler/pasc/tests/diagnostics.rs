//! Rendered diagnostics for each phase.

#![allow(clippy::unwrap_used)]

use pasc::{compile_and_check, run, Error};
use pretty_assertions::assert_eq;

fn render(source: &str) -> String {
    let err: Error = match compile_and_check(source) {
        Err(err) => err.into(),
        Ok(_) => run(source).unwrap_err(),
    };
    err.render(source)
}

#[test]
fn test_syntax_error_rendering() {
    assert_eq!(
        render("PROGRAM p4; BEGIN a := (1 + 2 END."),
        "error[E1001]: expected `)`, found `END`\n \
         --> 1:31\n  \
         |\n\
         1 | PROGRAM p4; BEGIN a := (1 + 2 END.\n  \
         |                               ^^^ expected `)`"
    );
}

#[test]
fn test_undefined_variable_rendering() {
    let source = "PROGRAM p3;\nVAR x : INTEGER;\nBEGIN\n    x := z\nEND.";
    let rendered = render(source);
    assert!(rendered.starts_with("error[E2001]: undefined variable `z`"));
    assert!(rendered.contains("--> 4:10"));
    assert!(rendered.contains("4 |     x := z"));
    assert!(rendered.ends_with("= note: did you mean `x`?"));
}

#[test]
fn test_unclosed_comment_rendering() {
    let rendered = render("PROGRAM c; { never closed\nBEGIN END.");
    assert!(rendered.starts_with("error[E0001]: invalid character '{' at position 11"));
    assert!(rendered.contains("comment is never closed"));
}

#[test]
fn test_runtime_error_has_no_location() {
    assert_eq!(
        render("PROGRAM d; VAR a : INTEGER; BEGIN a := 4 DIV (2 - 2) END."),
        "error[E3001]: division by zero in `DIV`\n  = note: both `DIV` and `/` reject a zero divisor"
    );
}
