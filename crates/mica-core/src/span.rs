//! Source location tracking for diagnostics.
//!
//! Provides [`Span`] to record where a declaration, statement or
//! expression occurs in source code. Spans are produced by the parser
//! and passed through the analyzer unmodified; the analyzer only ever
//! copies them into diagnostics.

use std::fmt;

/// A span of source code, represented by its starting position.
///
/// Tracks the line:column where a construct starts, plus its length in
/// bytes for underlining in reports.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed, byte-based).
    pub col: u32,
    /// Length in bytes.
    pub len: u32,
}

impl Span {
    /// Create a new span from a line, column, and length.
    #[inline]
    pub fn new(line: u32, col: u32, len: u32) -> Self {
        Self { line, col, len }
    }

    /// Create a zero-length span at a position.
    #[inline]
    pub fn point(line: u32, col: u32) -> Self {
        Self { line, col, len: 0 }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Span({}:{}+{})", self.line, self.col, self.len)
    }
}
