use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A half-open range `[start, start + length)` into the original source.
///
/// Offsets are whatever unit the producing parser uses (bytes for both
/// rowan and tree-sitter). Spans are trusted as given and never checked
/// against the source length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceSpan {
    /// Offset of the first unit covered by the span.
    pub start: usize,
    /// Number of units covered.
    pub length: usize,
}

impl SourceSpan {
    #[must_use]
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Exclusive end offset. Saturates rather than overflowing.
    #[must_use]
    pub const fn end(self) -> usize {
        self.start.saturating_add(self.length)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.length == 0
    }

    #[must_use]
    pub const fn range(self) -> Range<usize> {
        self.start..self.end()
    }

    /// Returns true if `other` lies entirely within this span.
    #[must_use]
    pub const fn contains(self, other: SourceSpan) -> bool {
        other.start >= self.start && other.end() <= self.end()
    }
}

impl From<Range<usize>> for SourceSpan {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end.saturating_sub(range.start))
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}
