//! Parser entry points
//!
//! [`Parser`] owns the source buffer and drives the three stages: running the
//! grammar, rebuilding the syntax tree for diagnostics, and the semantic pass
//! that produces the [`Ast`]. Most callers only need [`parse`].

use std::str::FromStr;

use log::debug;

use super::ast::Ast;
use super::config::ParserConfig;
use super::driver;
use super::error::{ParseError, Result, TemplateError};
use super::grammar::{build_syntax_tree, Buffer, ParserState, SyntaxNode, Token, Tokens};

pub struct Parser {
    buffer: Buffer,
    config: ParserConfig,
    tokens: Tokens,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self::with_config(source, ParserConfig::default())
    }

    pub fn with_config(source: &str, config: ParserConfig) -> Self {
        Self {
            buffer: Buffer::new(source),
            config,
            tokens: Tokens::default(),
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Runs the grammar over the whole buffer
    ///
    /// On failure the error points at the furthest span any rule matched.
    pub fn parse(&mut self) -> std::result::Result<(), ParseError> {
        debug!("parsing {} characters", self.buffer.len());

        let mut state = ParserState::new(&self.buffer, self.config.token_capacity);
        let matched = state.script();
        let (mut tokens, furthest) = state.finish();

        if !matched {
            debug!("parse failed near {}", furthest);
            self.tokens = Tokens::default();
            return Err(ParseError::new(&self.buffer, furthest, self.config.pretty));
        }

        tokens.trim();
        debug!("parsed {} tokens", tokens.len());
        self.tokens = tokens;
        Ok(())
    }

    /// Tokens of the last successful parse
    pub fn tokens(&self) -> &[Token] {
        self.tokens.tokens()
    }

    pub fn print_tokens(&self) -> String {
        self.tokens.print()
    }

    pub fn syntax_tree(&self) -> Option<SyntaxNode> {
        build_syntax_tree(self.tokens())
    }

    pub fn print_syntax_tree(&self) -> String {
        self.syntax_tree()
            .map(|root| root.print(&self.buffer, self.config.pretty))
            .unwrap_or_default()
    }

    /// Runs the semantic pass over the tokens of the last parse
    pub fn execute(&self) -> Result<Ast> {
        driver::execute(&self.buffer, self.tokens())
    }
}

/// Parses a whole template into its AST
pub fn parse(source: &str) -> Result<Ast> {
    parse_with_config(source, ParserConfig::default())
}

pub fn parse_with_config(source: &str, config: ParserConfig) -> Result<Ast> {
    let mut parser = Parser::with_config(source, config);
    parser.parse()?;
    parser.execute()
}

impl FromStr for Ast {
    type Err = TemplateError;

    fn from_str(source: &str) -> Result<Self> {
        parse(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::grammar::Rule;

    #[test]
    fn test_parse_records_tokens() {
        let mut parser = Parser::new("create vpc");
        parser.parse().unwrap();

        let rules: Vec<Rule> = parser.tokens().iter().map(|t| t.rule).collect();
        assert!(rules.contains(&Rule::Expr));
        assert_eq!(rules.last(), Some(&Rule::Script));
    }

    #[test]
    fn test_syntax_tree_root_is_script() {
        let mut parser = Parser::new("create vpc\n");
        parser.parse().unwrap();

        let root = parser.syntax_tree().unwrap();
        assert_eq!(root.token.rule, Rule::Script);
        assert_eq!(root.token.end, 11);
    }

    #[test]
    fn test_failed_parse_clears_tokens() {
        let mut parser = Parser::new("create nothing");
        assert!(parser.parse().is_err());
        assert!(parser.tokens().is_empty());
        assert_eq!(parser.print_syntax_tree(), "");
    }

    #[test]
    fn test_from_str() {
        let ast: Ast = "delete subnet id=sub-1234".parse().unwrap();
        assert_eq!(ast.to_string(), "delete subnet id=sub-1234");
    }

    #[test]
    fn test_parse_with_config() {
        let config = ParserConfig::default().with_token_capacity(1);
        let ast = parse_with_config("create vpc cidr=10.0.0.0/16", config).unwrap();
        assert_eq!(ast.len(), 1);
    }
}
