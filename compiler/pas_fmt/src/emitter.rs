//! Where formatted text goes.
//!
//! The formatter thinks in lines: an indentation level followed by a run of
//! fragments. Implementors only provide the three primitives.

/// Columns added per nesting level.
pub const INDENT_WIDTH: usize = 4;

/// Sink for formatted source.
pub trait Emitter {
    /// Append a fragment to the current line.
    fn push(&mut self, fragment: &str);

    /// Terminate the current line with `\n`.
    fn line_break(&mut self);

    /// Pad the current line for nesting `level`.
    fn pad(&mut self, level: usize);

    /// One complete line: padding, every fragment in order, line break.
    fn line(&mut self, level: usize, fragments: &[&str]) {
        self.pad(level);
        for fragment in fragments {
            self.push(fragment);
        }
        self.line_break();
    }
}

/// Collects formatted source into a `String`.
#[derive(Debug, Default)]
pub struct StringEmitter {
    text: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Text emitted so far.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Emitter for StringEmitter {
    #[inline]
    fn push(&mut self, fragment: &str) {
        self.text += fragment;
    }

    #[inline]
    fn line_break(&mut self) {
        self.text.push('\n');
    }

    fn pad(&mut self, level: usize) {
        let width = level * INDENT_WIDTH;
        self.text.extend(std::iter::repeat(' ').take(width));
    }
}
