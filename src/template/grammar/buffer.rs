//! Character-level matching over the source buffer
//!
//! The source is materialized as a vector of scalar values with a sentinel
//! appended past the end. Every matcher reads one slot at the current
//! position, so running off the end of the input is an ordinary match failure
//! and never an out-of-bounds access.

/// Value appended after the last source character.
///
/// Template syntax is ASCII-only, so this can only show up inside a comment,
/// where it ends the comment like the end of input would.
pub const END_SYMBOL: char = '\u{10FFFF}';

/// The full source as scalar values, followed by [`END_SYMBOL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    chars: Vec<char>,
}

impl Buffer {
    pub fn new(source: &str) -> Self {
        let mut chars: Vec<char> = source.chars().collect();
        if chars.last() != Some(&END_SYMBOL) {
            chars.push(END_SYMBOL);
        }
        Self { chars }
    }

    /// Number of source characters, sentinel excluded
    pub fn len(&self) -> usize {
        self.chars.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All characters including the trailing sentinel
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character at `pos`; positions past the sentinel read as the sentinel
    pub fn at(&self, pos: usize) -> char {
        self.chars.get(pos).copied().unwrap_or(END_SYMBOL)
    }

    pub fn is_end(&self, pos: usize) -> bool {
        self.at(pos) == END_SYMBOL
    }

    pub fn matches_char(&self, pos: usize, expected: char) -> bool {
        self.at(pos) == expected
    }

    pub fn matches_range(&self, pos: usize, lower: char, upper: char) -> bool {
        let c = self.at(pos);
        c != END_SYMBOL && (lower..=upper).contains(&c)
    }

    pub fn matches_class<F>(&self, pos: usize, class: F) -> bool
    where
        F: Fn(char) -> bool,
    {
        let c = self.at(pos);
        c != END_SYMBOL && class(c)
    }

    /// Source text of the half-open range `[begin, end)`
    pub fn slice(&self, begin: usize, end: usize) -> String {
        let end = end.min(self.len());
        if begin >= end {
            return String::new();
        }
        self.chars[begin..end].iter().collect()
    }
}

/// Characters allowed in identifiers: letters plus `-`, `_` and `.`
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '-' | '_' | '.')
}

/// Characters allowed in bare string values
pub fn is_string_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_appended() {
        let buffer = Buffer::new("ab");
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.chars(), &['a', 'b', END_SYMBOL]);
        assert!(buffer.is_end(2));
    }

    #[test]
    fn test_empty_source() {
        let buffer = Buffer::new("");
        assert!(buffer.is_empty());
        assert!(buffer.is_end(0));
    }

    #[test]
    fn test_reads_past_end_are_sentinel() {
        let buffer = Buffer::new("a");
        assert_eq!(buffer.at(10), END_SYMBOL);
        assert!(!buffer.matches_class(10, |_| true));
    }

    #[test]
    fn test_range_excludes_sentinel() {
        let buffer = Buffer::new("5");
        assert!(buffer.matches_range(0, '0', '9'));
        assert!(!buffer.matches_range(1, '\0', END_SYMBOL));
    }

    #[test]
    fn test_slice_counts_scalar_values() {
        let buffer = Buffer::new("# héllo");
        assert_eq!(buffer.slice(2, 7), "héllo");
        assert_eq!(buffer.slice(4, 50), "llo");
        assert_eq!(buffer.slice(3, 3), "");
    }

    #[test]
    fn test_character_classes() {
        assert!(is_identifier_char('a'));
        assert!(is_identifier_char('.'));
        assert!(!is_identifier_char('1'));
        assert!(is_string_char('1'));
        assert!(is_string_char('/'));
        assert!(!is_string_char('$'));
    }
}
