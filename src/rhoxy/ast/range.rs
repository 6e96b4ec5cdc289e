//! Position and location tracking for diagnostics
//!
//! Process trees carry no locations: two sources that differ only in trivia must produce
//! equal trees. Locations exist for diagnostics only. The lexer produces byte spans, and
//! [`SourceLocation`] turns them into line:column [`Range`] values when an error is reported.
//!
//! Lines and columns are 0-based internally and rendered 1-based by [`Position`]'s `Display`.

use std::fmt;
use std::ops::Range as ByteRange;

/// A position in source code (line and column, both 0-based)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A located region of source code: byte span plus start/end positions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    pub span: ByteRange<usize>,
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(span: ByteRange<usize>, start: Position, end: Position) -> Self {
        Self { span, start, end }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
    len: usize,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            line_starts,
            len: source.len(),
        }
    }

    /// Convert a byte offset to a line/column position.
    ///
    /// Offsets past the end of the source clamp to the end of input.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(self.len);
        let line = match self.line_starts.binary_search(&byte_offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };

        Position::new(line, byte_offset - self.line_starts[line])
    }

    pub fn byte_range_to_range(&self, span: &ByteRange<usize>) -> Range {
        Range::new(
            span.clone(),
            self.byte_to_position(span.start),
            self.byte_to_position(span.end),
        )
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_single_line() {
        let loc = SourceLocation::new("@Nil!(Nil)");
        assert_eq!(loc.byte_to_position(0), Position::new(0, 0));
        assert_eq!(loc.byte_to_position(4), Position::new(0, 4));
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("Nil |\nNil |\nNil");
        assert_eq!(loc.byte_to_position(5), Position::new(0, 5));
        assert_eq!(loc.byte_to_position(6), Position::new(1, 0));
        assert_eq!(loc.byte_to_position(14), Position::new(2, 2));
        assert_eq!(loc.line_count(), 3);
    }

    #[test]
    fn test_offsets_past_end_clamp() {
        let loc = SourceLocation::new("Nil");
        assert_eq!(loc.byte_to_position(10), Position::new(0, 3));
    }

    #[test]
    fn test_display_is_one_based() {
        let loc = SourceLocation::new("Nil\n|");
        let range = loc.byte_range_to_range(&(4..5));
        assert_eq!(range.to_string(), "2:1..2:2");
    }
}
