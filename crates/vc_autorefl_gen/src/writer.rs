use core::fmt::{Display, Write};

/// One level of indentation in generated text.
pub const INDENT: &str = "    ";

/// Append-only text buffer with indentation helpers.
#[derive(Debug, Default)]
pub(crate) struct CodeWriter {
    output: String,
}

impl CodeWriter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn indent(&mut self, level: usize) {
        for _ in 0..level {
            self.output.push_str(INDENT);
        }
    }

    #[inline]
    pub fn push(&mut self, text: impl Display) {
        // Writing into a `String` never fails.
        let _ = write!(self.output, "{text}");
    }

    #[inline]
    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Writes `text` at `level` and terminates the line.
    #[inline]
    pub fn line(&mut self, level: usize, text: impl Display) {
        self.indent(level);
        self.push(text);
        self.newline();
    }

    #[inline]
    pub fn finish(self) -> String {
        self.output
    }
}
