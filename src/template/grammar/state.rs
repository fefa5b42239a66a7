//! Backtracking parser state and PEG combinators
//!
//! A [`ParserState`] is the single mutable cursor of a parse: the current
//! position in the buffer, the recorded tokens, and the furthest span ever
//! recorded. Every combinator returns `true` on success; on failure it puts the
//! position and the token count back exactly where they were on entry, which
//! is what makes ordered choice with `||` correct.

use super::buffer::Buffer;
use super::rule::{Rule, SemanticAction};
use super::tokens::{Token, Tokens};

#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    position: usize,
    token_index: usize,
}

pub struct ParserState<'b> {
    buffer: &'b Buffer,
    position: usize,
    tokens: Tokens,
    furthest: Token,
}

impl<'b> ParserState<'b> {
    pub fn new(buffer: &'b Buffer, token_capacity: usize) -> Self {
        Self {
            buffer,
            position: 0,
            tokens: Tokens::with_capacity(token_capacity),
            furthest: Token::new(Rule::Unknown, 0, 0),
        }
    }

    pub fn buffer(&self) -> &'b Buffer {
        self.buffer
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn token_index(&self) -> usize {
        self.tokens.len()
    }

    /// The non-empty recorded span reaching furthest into the input
    pub fn furthest(&self) -> Token {
        self.furthest
    }

    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    /// Consumes the state, returning the recorded tokens and the furthest span
    pub fn finish(self) -> (Tokens, Token) {
        (self.tokens, self.furthest)
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.position,
            token_index: self.tokens.len(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.position;
        self.tokens.truncate(checkpoint.token_index);
    }

    /// Records `[begin, position)` under `rule`
    pub fn record(&mut self, rule: Rule, begin: usize) {
        self.tokens.add(rule, begin, self.position);
        if begin != self.position && self.position > self.furthest.end {
            self.furthest = Token::new(rule, begin, self.position);
        }
    }

    /// Runs `f` as a sequence, rolling back everything it did if it fails
    pub fn sequence<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut Self) -> bool,
    {
        let checkpoint = self.checkpoint();
        if f(self) {
            true
        } else {
            self.restore(checkpoint);
            false
        }
    }

    /// A named rule: a sequence whose span is recorded once it succeeds
    pub fn rule<F>(&mut self, rule: Rule, f: F) -> bool
    where
        F: FnOnce(&mut Self) -> bool,
    {
        let begin = self.position;
        if self.sequence(f) {
            self.record(rule, begin);
            true
        } else {
            false
        }
    }

    /// Records the text matched by `f` for the next semantic action
    pub fn capture<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut Self) -> bool,
    {
        self.rule(Rule::PegText, f)
    }

    /// Records a zero-width marker for the semantic pass; never fails
    pub fn action(&mut self, action: SemanticAction) -> bool {
        self.record(Rule::Semantic(action), self.position);
        true
    }

    /// `e?`
    pub fn optional<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut Self) -> bool,
    {
        self.sequence(f);
        true
    }

    /// `e*`, greedy; the final failed attempt leaves no trace
    pub fn repeat<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(&mut Self) -> bool,
    {
        loop {
            let before = self.position;
            if !self.sequence(&mut f) {
                return true;
            }
            // an empty match would repeat forever
            if self.position == before {
                return true;
            }
        }
    }

    /// `e+`
    pub fn one_or_more<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(&mut Self) -> bool,
    {
        self.sequence(&mut f) && self.repeat(f)
    }

    /// `!e`: succeeds without consuming input when `f` fails
    pub fn not_ahead<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut Self) -> bool,
    {
        let checkpoint = self.checkpoint();
        let matched = f(self);
        self.restore(checkpoint);
        !matched
    }

    /// Character at the current position, without consuming it
    pub fn peek(&self) -> char {
        self.buffer.at(self.position)
    }

    pub fn match_char(&mut self, expected: char) -> bool {
        if self.buffer.matches_char(self.position, expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub fn match_range(&mut self, lower: char, upper: char) -> bool {
        if self.buffer.matches_range(self.position, lower, upper) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub fn match_class<F>(&mut self, class: F) -> bool
    where
        F: Fn(char) -> bool,
    {
        if self.buffer.matches_class(self.position, class) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// `.`: any character except the end of input
    pub fn match_dot(&mut self) -> bool {
        if self.buffer.is_end(self.position) {
            false
        } else {
            self.position += 1;
            true
        }
    }

    pub fn match_str(&mut self, literal: &str) -> bool {
        self.sequence(|state| literal.chars().all(|c| state.match_char(c)))
    }

    /// Advances by the length a keyword recognizer reports at the current position
    pub fn match_keyword<F>(&mut self, recognize: F) -> bool
    where
        F: FnOnce(&Buffer, usize) -> Option<usize>,
    {
        match recognize(self.buffer, self.position) {
            Some(len) if len > 0 => {
                self.position += len;
                true
            }
            _ => false,
        }
    }
}
