//! Token recorder
//!
//! Spans are appended in the order rules finish matching, so a rule's span
//! always follows the spans of its sub-rules. Backtracking truncates the
//! sequence back to the length it had when the failed alternative started.

use std::fmt;

use super::buffer::Buffer;
use super::rule::Rule;

/// Default size of the token table
pub const DEFAULT_TOKEN_CAPACITY: usize = 32767;

/// A half-open span `[begin, end)` in scalar values, tagged with its rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub rule: Rule,
    pub begin: usize,
    pub end: usize,
}

impl Token {
    pub fn new(rule: Rule, begin: usize, end: usize) -> Self {
        Self { rule, begin, end }
    }

    /// Empty spans mark semantic actions and empty repetitions
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    pub fn contains(&self, other: &Token) -> bool {
        other.begin >= self.begin && other.end <= self.end
    }

    pub fn text(&self, buffer: &Buffer) -> String {
        buffer.slice(self.begin, self.end)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.rule, self.begin, self.end)
    }
}

/// Append-only token sequence with truncate-on-rollback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    tree: Vec<Token>,
}

impl Tokens {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, rule: Rule, begin: usize, end: usize) {
        self.tree.push(Token::new(rule, begin, end));
    }

    /// Index the next token will be written at
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Drops every token recorded at or after `index`
    pub fn truncate(&mut self, index: usize) {
        self.tree.truncate(index);
    }

    /// Releases the unused part of the pre-sized storage
    pub fn trim(&mut self) {
        self.tree.shrink_to_fit();
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tree
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tree.iter()
    }

    /// One `Rule begin end` line per token
    pub fn print(&self) -> String {
        let mut result = String::new();
        for token in &self.tree {
            result.push_str(&token.to_string());
            result.push('\n');
        }
        result
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_truncate() {
        let mut tokens = Tokens::with_capacity(2);
        tokens.add(Rule::Identifier, 0, 3);
        tokens.add(Rule::PegText, 0, 3);
        tokens.add(Rule::Equal, 3, 4);
        assert_eq!(tokens.len(), 3);

        tokens.truncate(1);
        assert_eq!(tokens.tokens(), &[Token::new(Rule::Identifier, 0, 3)]);
    }

    #[test]
    fn test_containment() {
        let outer = Token::new(Rule::Param, 0, 10);
        let inner = Token::new(Rule::Identifier, 0, 4);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.contains(&outer));
    }

    #[test]
    fn test_print() {
        let mut tokens = Tokens::default();
        tokens.add(Rule::IntValue, 4, 6);
        assert_eq!(tokens.print(), "IntValue 4 6\n");
    }
}
