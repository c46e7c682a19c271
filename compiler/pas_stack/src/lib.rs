//! Stack growth guard for deeply nested programs.
//!
//! The parser, checker and interpreter all recurse once per level of
//! expression or statement nesting. Input such as `- - - ... 1` or
//! `((((...))))` nests as deep as the user cares to type, so each recursive
//! entry point runs its body through [`ensure_sufficient_stack`], which
//! switches to a freshly allocated stack segment when the current one runs
//! low.
//!
//! On `wasm32` the guard is a plain call.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
