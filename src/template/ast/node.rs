//! AST node types
//!
//! An [`Ast`] is an ordered list of [`Statement`]s, each wrapping one
//! [`Node`]. Expression parameters live in four maps (`params`, `refs`,
//! `aliases`, `holes`); a key is present in at most one of them at a time.
//! Every mutation goes through methods that keep it that way.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::value::Value;
use crate::template::error::NodeVariantError;
use crate::template::fills::Fills;

/// A parsed template
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ast {
    pub statements: Vec<Statement>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Statements an executor acts on: everything except `var` bindings
    pub fn execution_statements(&self) -> Vec<&Statement> {
        self.statements.iter().filter(|s| !s.is_var()).collect()
    }

    pub fn execution_statements_mut(&mut self) -> Vec<&mut Statement> {
        self.statements.iter_mut().filter(|s| !s.is_var()).collect()
    }

    /// Fills holes in every statement
    ///
    /// Returns what each statement resolved, keyed by statement index;
    /// statements that resolved nothing are left out. Expression entries are
    /// keyed by parameter name, var entries by the variable's name.
    pub fn process_holes(&mut self, fills: &Fills) -> BTreeMap<usize, Fills> {
        self.statements
            .iter_mut()
            .enumerate()
            .map(|(index, statement)| (index, statement.process_holes(fills)))
            .filter(|(_, processed)| !processed.is_empty())
            .collect()
    }

    pub fn process_refs(&mut self, fills: &Fills) {
        for statement in &mut self.statements {
            statement.process_refs(fills);
        }
    }

    /// Values of the resolved `var` bindings, keyed by variable name
    pub fn var_values(&self) -> Fills {
        self.statements
            .iter()
            .filter_map(|s| match &s.node {
                Node::Var(var) => var
                    .identifier
                    .value
                    .as_ref()
                    .map(|v| (var.identifier.ident.clone(), v.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// One node plus the slots an executor fills in after running it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub node: Node,
    /// Source text the statement was parsed from, trimmed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

impl Statement {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            line: None,
            result: None,
            err: None,
        }
    }

    pub fn is_var(&self) -> bool {
        matches!(self.node, Node::Var(_))
    }

    /// The expression of an expression or declaration statement
    pub fn expression(&self) -> Result<&ExpressionNode, NodeVariantError> {
        match &self.node {
            Node::Expression(expr) => Ok(expr),
            Node::Declaration(decl) => Ok(&decl.right),
            other => Err(NodeVariantError::new("expression", other.kind())),
        }
    }

    pub fn expression_mut(&mut self) -> Result<&mut ExpressionNode, NodeVariantError> {
        match &mut self.node {
            Node::Expression(expr) => Ok(expr),
            Node::Declaration(decl) => Ok(&mut decl.right),
            other => Err(NodeVariantError::new("expression", other.kind())),
        }
    }

    pub fn var(&self) -> Result<&VarNode, NodeVariantError> {
        match &self.node {
            Node::Var(var) => Ok(var),
            other => Err(NodeVariantError::new("var", other.kind())),
        }
    }

    pub fn var_mut(&mut self) -> Result<&mut VarNode, NodeVariantError> {
        match &mut self.node {
            Node::Var(var) => Ok(var),
            other => Err(NodeVariantError::new("var", other.kind())),
        }
    }

    pub fn action(&self) -> Result<&str, NodeVariantError> {
        self.expression().map(|expr| expr.action.as_str())
    }

    pub fn entity(&self) -> Result<&str, NodeVariantError> {
        self.expression().map(|expr| expr.entity.as_str())
    }

    pub fn params(&self) -> Result<&BTreeMap<String, Value>, NodeVariantError> {
        self.expression().map(|expr| &expr.params)
    }

    pub fn set_result(&mut self, result: Value) {
        self.result = Some(result);
    }

    pub fn set_err(&mut self, err: impl Into<String>) {
        self.err = Some(err.into());
    }

    pub fn process_holes(&mut self, fills: &Fills) -> Fills {
        match &mut self.node {
            Node::Expression(expr) => expr.process_holes(fills),
            Node::Declaration(decl) => decl.right.process_holes(fills),
            Node::Var(var) => var.process_holes(fills),
        }
    }

    /// Var bindings hold no references, so they are left alone
    pub fn process_refs(&mut self, fills: &Fills) {
        if let Ok(expr) = self.expression_mut() {
            expr.process_refs(fills);
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.node)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Expression(ExpressionNode),
    Declaration(DeclarationNode),
    Var(VarNode),
}

impl Node {
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Expression(_) => "expression",
            Node::Declaration(_) => "declaration",
            Node::Var(_) => "var",
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Expression(expr) => write!(f, "{}", expr),
            Node::Declaration(decl) => write!(f, "{}", decl),
            Node::Var(var) => write!(f, "{}", var),
        }
    }
}

/// A name, with the value bound to it once known
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    pub ident: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Identifier {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            value: None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ident)
    }
}

/// `var name = value` or `var name = {hole}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarNode {
    pub identifier: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole: Option<String>,
}

impl VarNode {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            identifier: Identifier::new(ident),
            hole: None,
        }
    }

    pub fn set_value(&mut self, value: Value) {
        self.identifier.value = Some(value);
        self.hole = None;
    }

    pub fn set_hole(&mut self, hole: impl Into<String>) {
        self.hole = Some(hole.into());
        self.identifier.value = None;
    }

    pub fn value(&self) -> Option<&Value> {
        self.identifier.value.as_ref()
    }

    /// Binds the hole's fill, keyed by the variable's name in the result
    pub fn process_holes(&mut self, fills: &Fills) -> Fills {
        let mut processed = Fills::new();
        if let Some(value) = self.hole.as_ref().and_then(|hole| fills.get(hole)).cloned() {
            processed.insert(self.identifier.ident.clone(), value.clone());
            self.set_value(value);
        }
        processed
    }
}

impl fmt::Display for VarNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.hole, &self.identifier.value) {
            (Some(hole), _) => write!(f, "var {} = {{{}}}", self.identifier, hole),
            (None, Some(value)) => write!(f, "var {} = {}", self.identifier, value),
            (None, None) => write!(f, "var {}", self.identifier),
        }
    }
}

/// `name = action entity ...`: binds the expression's result to `name`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclarationNode {
    pub left: Identifier,
    pub right: ExpressionNode,
}

impl DeclarationNode {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            left: Identifier::new(ident),
            right: ExpressionNode::default(),
        }
    }
}

impl fmt::Display for DeclarationNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpressionNode {
    pub action: String,
    pub entity: String,
    pub params: BTreeMap<String, Value>,
    pub refs: BTreeMap<String, String>,
    pub aliases: BTreeMap<String, String>,
    pub holes: BTreeMap<String, String>,
}

impl ExpressionNode {
    pub fn new(action: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            entity: entity.into(),
            ..Self::default()
        }
    }

    pub fn insert_param(&mut self, key: &str, value: Value) {
        self.release_key(key);
        self.params.insert(key.to_string(), value);
    }

    pub fn insert_ref(&mut self, key: &str, reference: &str) {
        self.release_key(key);
        self.refs.insert(key.to_string(), reference.to_string());
    }

    pub fn insert_alias(&mut self, key: &str, alias: &str) {
        self.release_key(key);
        self.aliases.insert(key.to_string(), alias.to_string());
    }

    pub fn insert_hole(&mut self, key: &str, hole: &str) {
        self.release_key(key);
        self.holes.insert(key.to_string(), hole.to_string());
    }

    fn release_key(&mut self, key: &str) {
        self.params.remove(key);
        self.refs.remove(key);
        self.aliases.remove(key);
        self.holes.remove(key);
    }

    /// Number of maps `key` appears in; at most one
    pub fn key_occurrences(&self, key: &str) -> usize {
        [
            self.params.contains_key(key),
            self.refs.contains_key(key),
            self.aliases.contains_key(key),
            self.holes.contains_key(key),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    /// Moves every hole with a fill into `params`
    ///
    /// Holes without a fill stay in place. Returns the resolved parameters.
    pub fn process_holes(&mut self, fills: &Fills) -> Fills {
        let params = &mut self.params;
        let mut processed = Fills::new();

        self.holes.retain(|key, hole| match fills.get(hole) {
            Some(value) => {
                params.insert(key.clone(), value.clone());
                processed.insert(key.clone(), value.clone());
                false
            }
            None => true,
        });

        processed
    }

    /// Moves every reference with a known value into `params`
    pub fn process_refs(&mut self, fills: &Fills) {
        let params = &mut self.params;

        self.refs.retain(|key, reference| match fills.get(reference) {
            Some(value) => {
                params.insert(key.clone(), value.clone());
                false
            }
            None => true,
        });
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut all: Vec<String> = Vec::new();
        all.extend(self.refs.iter().map(|(k, v)| format!("{}=${}", k, v)));
        all.extend(self.params.iter().map(|(k, v)| format!("{}={}", k, v)));
        all.extend(self.aliases.iter().map(|(k, v)| format!("{}=@{}", k, v)));
        all.extend(self.holes.iter().map(|(k, v)| format!("{}={{{}}}", k, v)));
        all.sort();

        write!(f, "{} {}", self.action, self.entity)?;
        if !all.is_empty() {
            write!(f, " {}", all.join(" "))?;
        }
        Ok(())
    }
}
