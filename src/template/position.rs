//! Translation from buffer offsets to line/symbol positions
//!
//! Lines are 1-based. The symbol of a character is its 1-based column on its
//! line; a newline character belongs to the line it starts and sits at
//! symbol 0.

use std::fmt;

/// A line/symbol pair as shown in parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextPosition {
    pub line: usize,
    pub symbol: usize,
}

impl TextPosition {
    pub fn new(line: usize, symbol: usize) -> Self {
        Self { line, symbol }
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} symbol {}", self.line, self.symbol)
    }
}

/// Line starts collected in one forward scan over the buffer
pub struct SourceLocation {
    /// Offsets just past each newline, plus 0 for the first line
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(chars: &[char]) -> Self {
        let mut line_starts = vec![0];

        for (offset, c) in chars.iter().enumerate() {
            if *c == '\n' {
                line_starts.push(offset + 1);
            }
        }

        Self { line_starts }
    }

    /// Position of the character at `offset`
    pub fn position(&self, offset: usize) -> TextPosition {
        let after = offset + 1;
        let line = self
            .line_starts
            .binary_search(&after)
            .unwrap_or_else(|i| i - 1);

        TextPosition::new(line + 1, after - self.line_starts[line])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_single_line() {
        let loc = SourceLocation::new(&chars("create"));
        assert_eq!(loc.position(0), TextPosition::new(1, 1));
        assert_eq!(loc.position(5), TextPosition::new(1, 6));
        assert_eq!(loc.position(6), TextPosition::new(1, 7));
    }

    #[test]
    fn test_newline_starts_next_line_at_symbol_zero() {
        let loc = SourceLocation::new(&chars("ab\ncd"));
        assert_eq!(loc.position(1), TextPosition::new(1, 2));
        assert_eq!(loc.position(2), TextPosition::new(2, 0));
        assert_eq!(loc.position(3), TextPosition::new(2, 1));
        assert_eq!(loc.position(4), TextPosition::new(2, 2));
    }

    #[test]
    fn test_consecutive_newlines() {
        let loc = SourceLocation::new(&chars("a\n\nb"));
        assert_eq!(loc.position(2), TextPosition::new(3, 0));
        assert_eq!(loc.position(3), TextPosition::new(3, 1));
    }

    #[test]
    fn test_offsets_count_scalar_values() {
        let loc = SourceLocation::new(&chars("é\nx"));
        assert_eq!(loc.position(2), TextPosition::new(2, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(TextPosition::new(3, 7).to_string(), "line 3 symbol 7");
    }
}
