//! Error type for parse failures.

use thiserror::Error;

/// A failed parse. Carries enough position metadata to point a reader at the
/// exact character the parser gave up on.
///
/// Every grammar violation (missing delimiter, bad escape, malformed number,
/// unterminated string/comment/container, trailing garbage) surfaces as this
/// one type. A failed parse never yields a partial tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parse error at line {line}, column {column}: {message}")]
pub struct ParseError {
    /// What went wrong, in one short sentence.
    pub message: String,
    /// 1-based line number of the failure.
    pub line: usize,
    /// 0-based character offset within that line.
    pub column: usize,
    /// Absolute byte offset into the source text.
    pub offset: usize,
    /// The full source line containing the failure.
    pub snippet: String,
}

impl ParseError {
    /// Render the offending line with a caret under the failing character:
    ///
    /// ```text
    /// {"a":}
    ///      ^
    /// ```
    ///
    /// Tabs in the snippet are kept in the marker line so the caret stays
    /// aligned in terminals that expand them consistently.
    pub fn pointer(&self) -> String {
        let mut out = String::with_capacity(self.snippet.len() * 2 + 2);
        out.push_str(&self.snippet);
        out.push('\n');
        for ch in self.snippet.chars().take(self.column) {
            out.push(if ch == '\t' { '\t' } else { ' ' });
        }
        out.push('^');
        out
    }
}

/// Convenience alias used throughout jsonc-core.
pub type Result<T> = std::result::Result<T, ParseError>;
