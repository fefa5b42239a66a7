//! Semantic pass over the token sequence
//!
//! Capture tokens update the current text; action tokens hand that text to
//! the [`AstBuilder`]. The grammar always records a capture right before the
//! action that consumes it, so one forward pass is enough. Statement tokens
//! come after their children and stamp the source line on what they built.

use log::{debug, trace};

use super::ast::{Ast, AstBuilder};
use super::error::Result;
use super::grammar::{Buffer, Rule, Token};

/// Builds the AST for a successfully parsed token sequence
///
/// Stops at the first invalid literal or misplaced operation; no partial AST
/// is returned.
pub fn execute(buffer: &Buffer, tokens: &[Token]) -> Result<Ast> {
    let mut builder = AstBuilder::new();
    let mut text = String::new();

    for token in tokens {
        match token.rule {
            Rule::PegText => {
                text = token.text(buffer);
                trace!("capture {:?} at {}", text, token.begin);
            }
            Rule::Semantic(action) => builder.apply(action, &text)?,
            Rule::Statement => builder.set_line(token.text(buffer).trim()),
            _ => {}
        }
    }

    let ast = builder.finish();
    debug!("built {} statements from {} tokens", ast.len(), tokens.len());
    Ok(ast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::error::TemplateError;
    use crate::template::grammar::SemanticAction;

    #[test]
    fn test_actions_use_latest_capture() {
        let buffer = Buffer::new("create vpc");
        let tokens = [
            Token::new(Rule::Action, 0, 6),
            Token::new(Rule::PegText, 0, 6),
            Token::new(Rule::Semantic(SemanticAction::AddAction), 6, 6),
            Token::new(Rule::PegText, 7, 10),
            Token::new(Rule::Semantic(SemanticAction::AddEntity), 10, 10),
            Token::new(Rule::Semantic(SemanticAction::LineDone), 10, 10),
        ];

        let ast = execute(&buffer, &tokens).unwrap();
        assert_eq!(ast.to_string(), "create vpc");
    }

    #[test]
    fn test_stops_at_invalid_literal() {
        let buffer = Buffer::new("x=12345678901234567890");
        let tokens = [
            Token::new(Rule::PegText, 0, 1),
            Token::new(Rule::Semantic(SemanticAction::AddVarIdentifier), 1, 1),
            Token::new(Rule::PegText, 2, 22),
            Token::new(Rule::Semantic(SemanticAction::AddVarIntValue), 22, 22),
        ];

        let err = execute(&buffer, &tokens).unwrap_err();
        assert!(matches!(err, TemplateError::InvalidLiteral(_)));
    }

    #[test]
    fn test_statement_token_sets_line() {
        let buffer = Buffer::new("  create vpc  \n");
        let tokens = [
            Token::new(Rule::PegText, 2, 8),
            Token::new(Rule::Semantic(SemanticAction::AddAction), 8, 8),
            Token::new(Rule::PegText, 9, 12),
            Token::new(Rule::Semantic(SemanticAction::AddEntity), 12, 12),
            Token::new(Rule::Semantic(SemanticAction::LineDone), 12, 12),
            Token::new(Rule::Statement, 0, 15),
        ];

        let ast = execute(&buffer, &tokens).unwrap();
        assert_eq!(ast.statements[0].line.as_deref(), Some("create vpc"));
    }

    #[test]
    fn test_no_tokens_no_statements() {
        let buffer = Buffer::new("");
        assert!(execute(&buffer, &[]).unwrap().is_empty());
    }
}
