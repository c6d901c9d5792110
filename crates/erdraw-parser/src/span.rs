//! Byte ranges into the input document.

use std::ops::Range;

/// A half-open byte range `start..end` in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Locate a serde_json style 1-based `line`/`column` position in `source`.
    ///
    /// The returned span covers one character, or is empty at end of input.
    /// Positions past the end clamp to the end of `source`.
    pub fn from_line_column(source: &str, line: usize, column: usize) -> Self {
        let mut offset = 0;
        for (index, text) in source.split_inclusive('\n').enumerate() {
            if index + 1 == line {
                offset += column.saturating_sub(1).min(text.len());
                break;
            }
            offset += text.len();
        }
        let start = offset.min(source.len());
        let end = source[start..]
            .chars()
            .next()
            .map_or(start, |c| start + c.len_utf8());
        Self::new(start..end)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(3..8);
        assert_eq!(span.start(), 3);
        assert_eq!(span.end(), 8);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_from_line_column() {
        let source = "[\n  {\"name\": 1}\n]";
        let span = Span::from_line_column(source, 2, 3);
        assert_eq!(span, Span::new(4..5));
        assert_eq!(&source[span.start()..span.end()], "{");
    }

    #[test]
    fn test_span_clamps_past_end() {
        let source = "[";
        let span = Span::from_line_column(source, 5, 10);
        assert_eq!(span, Span::new(1..1));
        assert!(span.is_empty());
    }
}
