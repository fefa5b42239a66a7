//! Parser and AST for the infrastructure template language
//!
//! A template is a list of statements, one per line:
//!
//! ```text
//! # comments start with '#' or '//'
//! var cidr = {vpc-cidr}
//! myvpc = create vpc cidr=$cidr
//! create subnet vpc=$myvpc cidr=10.0.1.0/24 name={subnet-name} zone=@main
//! ```
//!
//! Parsing runs in two passes. The grammar ([`grammar`]) matches the whole
//! source and records a flat token sequence; the semantic pass ([`driver`])
//! replays it to build the [`Ast`]. Holes (`{name}`) and references
//! (`$name`) stay unresolved in the AST until fills are applied with
//! [`Ast::process_holes`] and [`Ast::process_refs`]. Clone a parsed template
//! to instantiate it more than once.
//!
//! ## Modules
//!
//! - `grammar` - PEG engine, productions and syntax tree
//! - `parser` - Entry points
//! - `driver` - Semantic pass
//! - `ast` - Statements, nodes and values
//! - `position` - Line/symbol positions for errors
//! - `error` - Error types
//! - `config` - Parser configuration
//! - `fills` - Fill maps loaded from JSON or YAML
//! - `testing` - Fluent assertions for tests

pub mod ast;
pub mod config;
pub mod driver;
pub mod error;
pub mod fills;
pub mod grammar;
pub mod parser;
pub mod position;
pub mod testing;

pub use ast::{Ast, Statement, Value};
pub use config::ParserConfig;
pub use error::{Result, TemplateError};
pub use fills::Fills;
pub use parser::{parse, parse_with_config, Parser};
