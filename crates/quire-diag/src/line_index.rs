//! Byte offset to line and column mapping.
//!
//! Diagnostics carry byte offsets; people read lines and columns. The
//! [`LineIndex`] caches where each line starts so lookups are a binary
//! search.

use std::fmt;

/// A resolved position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// 1-based line number
    pub line: usize,
    /// 0-based byte column within the line
    pub column: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, u64::from(self.column) + 1)
    }
}

/// Start offsets of every line in a source buffer.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Build the index for `source`.
    ///
    /// Offsets that do not fit in `u32` saturate.
    pub fn new(source: impl AsRef<[u8]>) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                source
                    .as_ref()
                    .iter()
                    .enumerate()
                    .filter(|&(_, &byte)| byte == b'\n')
                    .map(|(i, _)| u32::try_from(i + 1).unwrap_or(u32::MAX)),
            )
            .collect();

        Self { line_starts }
    }

    /// Number of lines, counting the (possibly empty) line after a trailing
    /// newline.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Resolve `offset` to a line and column.
    ///
    /// Offsets past the end of the source resolve onto the last line.
    pub fn location(&self, offset: u32) -> Location {
        // First line start strictly after the offset; the line before it holds
        // the offset. Index 0 always starts at 0, so `line >= 1`.
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];

        Location {
            line,
            column: offset - line_start,
        }
    }
}
