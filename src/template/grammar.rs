//! Grammar engine for the template language
//!
//! A hand-written PEG: ordered choice, greedy repetition and full backtracking
//! over a single mutable cursor. The engine produces a flat, post-ordered
//! token sequence; the semantic pass ([`crate::template::driver`]) and the
//! syntax tree ([`tree`]) both read it.
//!
//! ## Modules
//!
//! - `buffer` - Source characters with an end-of-input sentinel
//! - `rule` - Rule kinds and semantic action markers
//! - `tokens` - The token recorder
//! - `state` - Backtracking state and combinators
//! - `rules` - Grammar productions
//! - `keywords` - Action and entity keyword recognizers
//! - `tree` - Concrete syntax tree reconstruction

pub mod buffer;
pub mod keywords;
pub mod rule;
pub mod rules;
pub mod state;
pub mod tokens;
pub mod tree;

pub use buffer::{Buffer, END_SYMBOL};
pub use keywords::{ActionKeyword, EntityKeyword};
pub use rule::{Rule, SemanticAction};
pub use state::ParserState;
pub use tokens::{Token, Tokens, DEFAULT_TOKEN_CAPACITY};
pub use tree::{build_forest, build_syntax_tree, SyntaxNode};
