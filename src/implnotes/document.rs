//! # Document
//!
//! The notes file held as an ordered list of lines. Every transformation in
//! this crate takes a `Document` by value and hands back a new one, so a
//! failing step never leaves a half-edited file behind: only the final
//! [`Document::render`] output is ever persisted.

use std::fmt;

/// Literal horizontal rule placed before every appended entry.
pub const ENTRY_SEPARATOR: &str = "---";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Splits text on `\n` / `\r\n`. A final terminator does not produce an
    /// extra empty line.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Joins lines with `\n` and ends with exactly one newline.
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Appends an entry block after a `---` rule, inserting a blank line first
    /// when the document does not already end with one.
    pub fn with_entry_block(mut self, block: Vec<String>) -> Self {
        let ends_with_text = self
            .lines
            .last()
            .map(|line| !line.trim().is_empty())
            .unwrap_or(false);
        if ends_with_text {
            self.lines.push(String::new());
        }
        self.lines.push(ENTRY_SEPARATOR.to_string());
        self.lines.push(String::new());
        self.lines.extend(block);
        self
    }

    /// Inserts `line` so that it becomes line `at` (0-based). Positions past
    /// the end append.
    pub fn with_line_inserted(mut self, at: usize, line: String) -> Self {
        let at = at.min(self.lines.len());
        self.lines.insert(at, line);
        self
    }

    /// Replaces the line at `at` (0-based). Out of range positions are ignored.
    pub fn with_line_replaced(mut self, at: usize, line: String) -> Self {
        if let Some(slot) = self.lines.get_mut(at) {
            *slot = line;
        }
        self
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
