//! AST for parsed templates
//!
//! - `node`: statements and the node variants
//! - `value`: typed values bound to parameters and variables
//! - `literal`: validation of typed literal captures
//! - `builder`: the cursor the semantic pass drives

pub mod builder;
pub mod literal;
pub mod node;
pub mod value;

pub use builder::AstBuilder;
pub use literal::Cidr;
pub use node::{
    Ast, DeclarationNode, ExpressionNode, Identifier, Node, Statement, VarNode,
};
pub use value::Value;
