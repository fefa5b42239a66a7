//! Error types for parsing and building templates

use std::fmt;

use super::grammar::{Buffer, Rule, Token};
use super::position::{SourceLocation, TextPosition};

/// No grammar alternative matched; reports the furthest span reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub rule: Rule,
    pub begin: TextPosition,
    pub end: TextPosition,
    pub text: String,
    pub pretty: bool,
}

impl ParseError {
    pub fn new(buffer: &Buffer, furthest: Token, pretty: bool) -> Self {
        let location = SourceLocation::new(buffer.chars());
        Self {
            rule: furthest.rule,
            begin: location.position(furthest.begin),
            end: location.position(furthest.end),
            text: furthest.text(buffer),
            pretty,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pretty {
            write!(f, "parse error near \x1B[34m{}\x1B[m", self.rule)?;
        } else {
            write!(f, "parse error near {}", self.rule)?;
        }
        write!(f, " ({} - {}):\n{:?}", self.begin, self.end, self.text)
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Ip,
    Cidr,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralKind::Int => f.write_str("int"),
            LiteralKind::Ip => f.write_str("net ip"),
            LiteralKind::Cidr => f.write_str("net cidr"),
        }
    }
}

/// Text accepted by the grammar that is not a valid literal of its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralError {
    pub kind: LiteralKind,
    pub text: String,
}

impl LiteralError {
    pub fn new(kind: LiteralKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot convert '{}' to {}", self.text, self.kind)
    }
}

impl std::error::Error for LiteralError {}

/// An operation was applied to a statement of the wrong kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeVariantError {
    pub expected: &'static str,
    pub found: &'static str,
}

impl NodeVariantError {
    pub fn new(expected: &'static str, found: &'static str) -> Self {
        Self { expected, found }
    }
}

impl fmt::Display for NodeVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected node type: expected {}, found {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for NodeVariantError {}

/// Every failure the crate reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    Parse(ParseError),
    InvalidLiteral(LiteralError),
    WrongNodeVariant(NodeVariantError),
    /// A fill document could not be decoded
    Fills(String),
    /// A configuration document could not be decoded
    Config(String),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::Parse(err) => write!(f, "{}", err),
            TemplateError::InvalidLiteral(err) => write!(f, "{}", err),
            TemplateError::WrongNodeVariant(err) => write!(f, "{}", err),
            TemplateError::Fills(msg) => write!(f, "invalid fills: {}", msg),
            TemplateError::Config(msg) => write!(f, "invalid parser config: {}", msg),
        }
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TemplateError::Parse(err) => Some(err),
            TemplateError::InvalidLiteral(err) => Some(err),
            TemplateError::WrongNodeVariant(err) => Some(err),
            TemplateError::Fills(_) | TemplateError::Config(_) => None,
        }
    }
}

impl From<ParseError> for TemplateError {
    fn from(err: ParseError) -> Self {
        TemplateError::Parse(err)
    }
}

impl From<LiteralError> for TemplateError {
    fn from(err: LiteralError) -> Self {
        TemplateError::InvalidLiteral(err)
    }
}

impl From<NodeVariantError> for TemplateError {
    fn from(err: NodeVariantError) -> Self {
        TemplateError::WrongNodeVariant(err)
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;
