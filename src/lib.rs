//! # infra-template
//!
//! Parser and AST for a declarative infrastructure template language:
//! statements like `create vpc cidr=10.0.0.0/16`, with variables, references
//! between statements, aliases and holes filled in later.
//!
//! ```rust,ignore
//! use infra_template::template::{fills, parse};
//!
//! let template = parse("create instance name={name} subnet=$sub")?;
//! let mut instance = template.clone();
//! instance.process_holes(&fills::from_yaml("name: web-1")?);
//! ```
//!
//! ## Testing
//!
//! Statement shapes are checked with the fluent helpers in the
//! [testing module](template::testing).

pub mod template;
