//! Fluent assertions for parsed templates
//!
//! Checking a statement by hand means matching on the node variant and then
//! poking at four maps. [`assert_ast`] walks the shape in one chain and
//! panics with the statement's index and rendering when something is off:
//!
//! ```rust,ignore
//! use infra_template::template::testing::assert_ast;
//!
//! let ast = parse("myinst = create instance subnet=$sub name={name}")?;
//! assert_ast(&ast)
//!     .statement_count(1)
//!     .statement(0, |s| {
//!         s.assert_declaration("myinst")
//!             .action("create")
//!             .entity("instance")
//!             .reference("subnet", "sub")
//!             .hole("name", "name")
//!             .param_count(0);
//!     });
//! ```

use super::ast::{Ast, ExpressionNode, Node, Statement, Value, VarNode};

pub fn assert_ast(ast: &Ast) -> AstAssertion<'_> {
    AstAssertion { ast }
}

pub struct AstAssertion<'a> {
    ast: &'a Ast,
}

impl<'a> AstAssertion<'a> {
    pub fn statement_count(self, expected: usize) -> Self {
        let actual = self.ast.statements.len();
        assert_eq!(
            actual, expected,
            "Expected {} statements, found {}:\n{}",
            expected, actual, self.ast
        );
        self
    }

    pub fn statement<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StatementAssertion<'a>),
    {
        assert!(
            index < self.ast.statements.len(),
            "Statement index {} out of bounds (template has {} statements)",
            index,
            self.ast.statements.len()
        );

        assertion(StatementAssertion {
            statement: &self.ast.statements[index],
            context: format!("statements[{}]", index),
        });
        self
    }

    /// Assert the full canonical rendering
    pub fn renders(self, expected: &str) -> Self {
        assert_eq!(self.ast.to_string(), expected, "Rendering mismatch");
        self
    }
}

pub struct StatementAssertion<'a> {
    statement: &'a Statement,
    context: String,
}

impl<'a> StatementAssertion<'a> {
    pub fn assert_expression(self) -> ExpressionAssertion<'a> {
        match &self.statement.node {
            Node::Expression(expr) => ExpressionAssertion {
                expr,
                context: self.context,
            },
            other => panic!(
                "{}: Expected expression, found {} '{}'",
                self.context,
                other.kind(),
                other
            ),
        }
    }

    /// Assert a declaration binding `name`, continuing on its expression
    pub fn assert_declaration(self, name: &str) -> ExpressionAssertion<'a> {
        match &self.statement.node {
            Node::Declaration(decl) => {
                assert_eq!(
                    decl.left.ident, name,
                    "{}: Declaration name mismatch",
                    self.context
                );
                ExpressionAssertion {
                    expr: &decl.right,
                    context: self.context,
                }
            }
            other => panic!(
                "{}: Expected declaration, found {} '{}'",
                self.context,
                other.kind(),
                other
            ),
        }
    }

    pub fn assert_var(self, name: &str) -> VarAssertion<'a> {
        match &self.statement.node {
            Node::Var(var) => {
                assert_eq!(
                    var.identifier.ident, name,
                    "{}: Var name mismatch",
                    self.context
                );
                VarAssertion {
                    var,
                    context: self.context,
                }
            }
            other => panic!(
                "{}: Expected var, found {} '{}'",
                self.context,
                other.kind(),
                other
            ),
        }
    }

    pub fn renders(self, expected: &str) -> Self {
        assert_eq!(
            self.statement.to_string(),
            expected,
            "{}: Rendering mismatch",
            self.context
        );
        self
    }
}

pub struct ExpressionAssertion<'a> {
    expr: &'a ExpressionNode,
    context: String,
}

impl<'a> ExpressionAssertion<'a> {
    pub fn action(self, expected: &str) -> Self {
        assert_eq!(self.expr.action, expected, "{}: Action mismatch", self.context);
        self
    }

    pub fn entity(self, expected: &str) -> Self {
        assert_eq!(self.expr.entity, expected, "{}: Entity mismatch", self.context);
        self
    }

    pub fn param(self, key: &str, expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        match self.expr.params.get(key) {
            Some(actual) => assert_eq!(
                actual, &expected,
                "{}: Param '{}' mismatch",
                self.context, key
            ),
            None => panic!(
                "{}: Expected param '{}', found none in '{}'",
                self.context, key, self.expr
            ),
        }
        self.exclusive(key)
    }

    pub fn param_count(self, expected: usize) -> Self {
        assert_eq!(
            self.expr.params.len(),
            expected,
            "{}: Param count mismatch in '{}'",
            self.context,
            self.expr
        );
        self
    }

    pub fn reference(self, key: &str, expected: &str) -> Self {
        let actual = self.expr.refs.get(key).map(String::as_str);
        assert_eq!(
            actual,
            Some(expected),
            "{}: Ref '{}' mismatch in '{}'",
            self.context,
            key,
            self.expr
        );
        self.exclusive(key)
    }

    pub fn alias(self, key: &str, expected: &str) -> Self {
        let actual = self.expr.aliases.get(key).map(String::as_str);
        assert_eq!(
            actual,
            Some(expected),
            "{}: Alias '{}' mismatch in '{}'",
            self.context,
            key,
            self.expr
        );
        self.exclusive(key)
    }

    pub fn hole(self, key: &str, expected: &str) -> Self {
        let actual = self.expr.holes.get(key).map(String::as_str);
        assert_eq!(
            actual,
            Some(expected),
            "{}: Hole '{}' mismatch in '{}'",
            self.context,
            key,
            self.expr
        );
        self.exclusive(key)
    }

    pub fn no_holes(self) -> Self {
        assert!(
            self.expr.holes.is_empty(),
            "{}: Expected no holes in '{}'",
            self.context,
            self.expr
        );
        self
    }

    pub fn no_refs(self) -> Self {
        assert!(
            self.expr.refs.is_empty(),
            "{}: Expected no refs in '{}'",
            self.context,
            self.expr
        );
        self
    }

    fn exclusive(self, key: &str) -> Self {
        assert_eq!(
            self.expr.key_occurrences(key),
            1,
            "{}: Key '{}' is held by more than one map",
            self.context,
            key
        );
        self
    }
}

pub struct VarAssertion<'a> {
    var: &'a VarNode,
    context: String,
}

impl<'a> VarAssertion<'a> {
    pub fn value(self, expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        assert_eq!(
            self.var.value(),
            Some(&expected),
            "{}: Var value mismatch",
            self.context
        );
        self
    }

    pub fn hole(self, expected: &str) -> Self {
        assert_eq!(
            self.var.hole.as_deref(),
            Some(expected),
            "{}: Var hole mismatch",
            self.context
        );
        self
    }

    pub fn unresolved(self) -> Self {
        assert!(
            self.var.value().is_none(),
            "{}: Expected unresolved var, found '{}'",
            self.context,
            self.var
        );
        self
    }
}
