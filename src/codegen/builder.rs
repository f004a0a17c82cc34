//! Line-oriented text builder for generated source.

use std::fmt;

/// Accumulates generated source one line at a time.
///
/// Callers format each line with named `format!` slots, so every literal
/// copied from the model is visible at the call site.
#[derive(Debug, Default, Clone)]
pub struct SourceBuilder {
    out: String,
    lines: usize,
}

impl SourceBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line; a trailing newline is added.
    pub fn line<S: AsRef<str>>(&mut self, text: S) -> &mut Self {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
        self.lines += 1;
        self
    }

    /// Append formatted arguments as one line.
    pub fn line_fmt(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        use std::fmt::Write;
        // writing into a String cannot fail
        let _ = self.out.write_fmt(args);
        self.out.push('\n');
        self.lines += 1;
        self
    }

    /// Append an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Append several fixed lines.
    pub fn lines<'a, I>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for text in lines {
            self.line(text);
        }
        self
    }

    /// Number of lines written so far.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Consume the builder and return the text.
    pub fn finish(self) -> String {
        self.out
    }
}
