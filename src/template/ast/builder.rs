//! Incremental AST construction
//!
//! The builder keeps a cursor on the statement being built and the parameter
//! key most recently introduced. Each [`SemanticAction`] recorded by the
//! grammar maps onto one builder operation, applied to the text of the
//! latest capture.

use log::trace;

use super::literal::{parse_cidr, parse_int, parse_ip};
use super::node::{Ast, DeclarationNode, ExpressionNode, Node, Statement, VarNode};
use super::value::Value;
use crate::template::error::{NodeVariantError, Result};
use crate::template::grammar::SemanticAction;

#[derive(Debug, Default)]
pub struct AstBuilder {
    ast: Ast,
    current: Option<usize>,
    current_key: String,
    lined: usize,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: SemanticAction, text: &str) -> Result<()> {
        trace!("{} {:?}", action.name(), text);

        match action {
            SemanticAction::AddVarIdentifier => self.add_var_identifier(text),
            SemanticAction::AddVarValue => self.current_var()?.set_value(Value::from(text)),
            SemanticAction::AddVarIntValue => {
                let value = parse_int(text)?;
                self.current_var()?.set_value(Value::Int(value));
            }
            SemanticAction::AddVarCidrValue => {
                let value = parse_cidr(text)?;
                self.current_var()?.set_value(Value::Cidr(value));
            }
            SemanticAction::AddVarIpValue => {
                let value = parse_ip(text)?;
                self.current_var()?.set_value(Value::Ip(value));
            }
            SemanticAction::AddVarHoleValue => self.current_var()?.set_hole(text),
            SemanticAction::AddDeclarationIdentifier => self.add_declaration_identifier(text),
            SemanticAction::AddAction => self.add_action(text)?,
            SemanticAction::AddEntity => self.current_expression()?.entity = text.to_string(),
            SemanticAction::AddParamKey => self.add_param_key(text)?,
            SemanticAction::AddParamValue => self.add_param(Value::from(text))?,
            SemanticAction::AddParamIntValue => self.add_param(Value::Int(parse_int(text)?))?,
            SemanticAction::AddParamCidrValue => self.add_param(Value::Cidr(parse_cidr(text)?))?,
            SemanticAction::AddParamIpValue => self.add_param(Value::Ip(parse_ip(text)?))?,
            SemanticAction::AddParamRefValue => {
                let key = self.current_key.clone();
                self.current_expression()?.insert_ref(&key, text);
            }
            SemanticAction::AddParamAliasValue => {
                let key = self.current_key.clone();
                self.current_expression()?.insert_alias(&key, text);
            }
            SemanticAction::AddParamHoleValue => {
                let key = self.current_key.clone();
                self.current_expression()?.insert_hole(&key, text);
            }
            SemanticAction::LineDone => self.line_done(),
        }

        Ok(())
    }

    pub fn add_var_identifier(&mut self, name: &str) {
        self.add_statement(Node::Var(VarNode::new(name)));
    }

    pub fn add_declaration_identifier(&mut self, name: &str) {
        self.add_statement(Node::Declaration(DeclarationNode::new(name)));
    }

    /// Opens a bare expression statement unless a declaration is waiting
    /// for its right-hand side
    pub fn add_action(&mut self, action: &str) -> Result<()> {
        match self.current {
            Some(_) => self.current_expression()?.action = action.to_string(),
            None => self.add_statement(Node::Expression(ExpressionNode::new(action, ""))),
        }
        Ok(())
    }

    pub fn add_param_key(&mut self, key: &str) -> Result<()> {
        self.current_expression()?;
        self.current_key = key.to_string();
        Ok(())
    }

    pub fn add_param(&mut self, value: Value) -> Result<()> {
        let key = self.current_key.clone();
        self.current_expression()?.insert_param(&key, value);
        Ok(())
    }

    pub fn line_done(&mut self) {
        self.current = None;
        self.current_key.clear();
    }

    /// Attaches the source line to every statement opened since the last call
    pub fn set_line(&mut self, line: &str) {
        for statement in &mut self.ast.statements[self.lined..] {
            statement.line = Some(line.to_string());
        }
        self.lined = self.ast.statements.len();
    }

    pub fn finish(self) -> Ast {
        self.ast
    }

    fn add_statement(&mut self, node: Node) {
        self.ast.statements.push(Statement::new(node));
        self.current = Some(self.ast.statements.len() - 1);
    }

    fn current_statement(&mut self) -> std::result::Result<&mut Statement, NodeVariantError> {
        match self.current {
            Some(index) => self
                .ast
                .statements
                .get_mut(index)
                .ok_or_else(|| NodeVariantError::new("statement", "none")),
            None => Err(NodeVariantError::new("statement", "none")),
        }
    }

    fn current_expression(&mut self) -> std::result::Result<&mut ExpressionNode, NodeVariantError> {
        self.current_statement()?.expression_mut()
    }

    fn current_var(&mut self) -> std::result::Result<&mut VarNode, NodeVariantError> {
        self.current_statement()?.var_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::error::TemplateError;
    use crate::template::grammar::SemanticAction as A;

    fn build(steps: &[(SemanticAction, &str)]) -> Result<Ast> {
        let mut builder = AstBuilder::new();
        for (action, text) in steps {
            builder.apply(*action, text)?;
        }
        Ok(builder.finish())
    }

    #[test]
    fn test_expression() {
        let ast = build(&[
            (A::AddAction, "create"),
            (A::AddEntity, "subnet"),
            (A::AddParamKey, "cidr"),
            (A::AddParamCidrValue, "10.0.1.0/24"),
            (A::AddParamKey, "vpc"),
            (A::AddParamRefValue, "myvpc"),
            (A::LineDone, ""),
        ])
        .unwrap();

        assert_eq!(ast.to_string(), "create subnet cidr=10.0.1.0/24 vpc=$myvpc");
    }

    #[test]
    fn test_declaration_takes_following_expression() {
        let ast = build(&[
            (A::AddDeclarationIdentifier, "myvpc"),
            (A::AddAction, "create"),
            (A::AddEntity, "vpc"),
            (A::LineDone, ""),
            (A::AddAction, "delete"),
            (A::AddEntity, "vpc"),
            (A::LineDone, ""),
        ])
        .unwrap();

        assert_eq!(ast.len(), 2);
        assert_eq!(ast.to_string(), "myvpc = create vpc\ndelete vpc");
    }

    #[test]
    fn test_var_values() {
        let ast = build(&[
            (A::AddVarIdentifier, "count"),
            (A::AddVarIntValue, "3"),
            (A::LineDone, ""),
            (A::AddVarIdentifier, "ip"),
            (A::AddVarHoleValue, "myip"),
            (A::LineDone, ""),
        ])
        .unwrap();

        assert_eq!(ast.statements[0].var().unwrap().value(), Some(&Value::Int(3)));
        assert_eq!(ast.statements[1].var().unwrap().hole.as_deref(), Some("myip"));
    }

    #[test]
    fn test_invalid_literal_aborts() {
        let err = build(&[
            (A::AddAction, "create"),
            (A::AddEntity, "instance"),
            (A::AddParamKey, "ip"),
            (A::AddParamIpValue, "300.0.0.1"),
        ])
        .unwrap_err();

        assert!(matches!(err, TemplateError::InvalidLiteral(_)));
    }

    #[test]
    fn test_wrong_variant_is_an_error() {
        let err = build(&[(A::AddVarIdentifier, "x"), (A::AddEntity, "vpc")]).unwrap_err();
        assert_eq!(
            err,
            TemplateError::WrongNodeVariant(NodeVariantError::new("expression", "var"))
        );

        let err = build(&[(A::AddVarValue, "x")]).unwrap_err();
        assert_eq!(
            err,
            TemplateError::WrongNodeVariant(NodeVariantError::new("statement", "none"))
        );
    }

    #[test]
    fn test_set_line_covers_new_statements_only() {
        let mut builder = AstBuilder::new();
        builder.apply(A::AddVarIdentifier, "a").unwrap();
        builder.apply(A::AddVarIntValue, "1").unwrap();
        builder.apply(A::LineDone, "").unwrap();
        builder.set_line("var a = 1");
        builder.set_line("# comment");
        builder.apply(A::AddAction, "create").unwrap();
        builder.apply(A::AddEntity, "vpc").unwrap();
        builder.apply(A::LineDone, "").unwrap();
        builder.set_line("create vpc");

        let ast = builder.finish();
        assert_eq!(ast.statements[0].line.as_deref(), Some("var a = 1"));
        assert_eq!(ast.statements[1].line.as_deref(), Some("create vpc"));
    }

    #[test]
    fn test_later_value_for_same_key_wins() {
        let ast = build(&[
            (A::AddAction, "create"),
            (A::AddEntity, "vpc"),
            (A::AddParamKey, "name"),
            (A::AddParamHoleValue, "n"),
            (A::AddParamKey, "name"),
            (A::AddParamValue, "fixed"),
        ])
        .unwrap();

        let expr = ast.statements[0].expression().unwrap();
        assert!(expr.holes.is_empty());
        assert_eq!(expr.key_occurrences("name"), 1);
    }
}
