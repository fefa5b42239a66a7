//! Concrete syntax tree rebuilt from the flat token sequence
//!
//! Tokens arrive in post-order: a rule's span is recorded after the spans of
//! everything it matched. Walking them with a stack, each new token adopts
//! every node on top of the stack that its span contains. Nothing else about
//! the grammar is needed to recover the nesting.

use super::buffer::Buffer;
use super::tokens::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub token: Token,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(token: Token) -> Self {
        Self {
            token,
            children: Vec::new(),
        }
    }

    /// Depth-first walk over this node and its descendants
    pub fn walk<F>(&self, f: &mut F)
    where
        F: FnMut(&SyntaxNode, usize),
    {
        self.walk_at(0, f);
    }

    fn walk_at<F>(&self, depth: usize, f: &mut F)
    where
        F: FnMut(&SyntaxNode, usize),
    {
        f(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, f);
        }
    }

    /// One `Rule "text"` line per node, indented one space per level
    pub fn print(&self, buffer: &Buffer, pretty: bool) -> String {
        let mut result = String::new();
        self.walk(&mut |node, depth| {
            let quoted = format!("{:?}", node.token.text(buffer));
            let line = if pretty {
                format!("\x1B[34m{}\x1B[m {}", node.token.rule, quoted)
            } else {
                format!("{} {}", node.token.rule, quoted)
            };
            result.push_str(&" ".repeat(depth));
            result.push_str(&line);
            result.push('\n');
        });
        result
    }
}

/// Rebuilds every root left on the stack, in source order
pub fn build_forest(tokens: &[Token]) -> Vec<SyntaxNode> {
    let mut stack: Vec<SyntaxNode> = Vec::new();

    for token in tokens.iter().filter(|t| !t.is_empty()) {
        let mut node = SyntaxNode::new(*token);
        while stack.last().is_some_and(|top| token.contains(&top.token)) {
            if let Some(child) = stack.pop() {
                node.children.push(child);
            }
        }
        // popped latest-first
        node.children.reverse();
        stack.push(node);
    }

    stack
}

/// The node on top of the stack once every token is consumed
pub fn build_syntax_tree(tokens: &[Token]) -> Option<SyntaxNode> {
    build_forest(tokens).pop()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::grammar::rule::{Rule, SemanticAction};

    #[test]
    fn test_nesting_from_containment() {
        let tokens = [
            Token::new(Rule::Identifier, 0, 4),
            Token::new(Rule::PegText, 0, 4),
            Token::new(Rule::Semantic(SemanticAction::AddParamKey), 4, 4),
            Token::new(Rule::Equal, 4, 5),
            Token::new(Rule::IntValue, 5, 7),
            Token::new(Rule::Param, 0, 7),
        ];

        let root = build_syntax_tree(&tokens).unwrap();

        assert_eq!(root.token.rule, Rule::Param);
        let kinds: Vec<Rule> = root.children.iter().map(|c| c.token.rule).collect();
        assert_eq!(kinds, vec![Rule::PegText, Rule::Equal, Rule::IntValue]);
        assert_eq!(root.children[0].children[0].token.rule, Rule::Identifier);
    }

    #[test]
    fn test_disjoint_tokens_form_a_forest() {
        let tokens = [
            Token::new(Rule::Identifier, 0, 2),
            Token::new(Rule::Identifier, 3, 5),
        ];
        let forest = build_forest(&tokens);
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].token.begin, 0);
        assert_eq!(
            build_syntax_tree(&tokens).map(|n| n.token.begin),
            Some(3)
        );
    }

    #[test]
    fn test_empty_tokens_are_skipped() {
        let tokens = [Token::new(Rule::Spacing, 0, 0)];
        assert_eq!(build_syntax_tree(&tokens), None);
    }

    #[test]
    fn test_print_indents_by_depth() {
        let buffer = Buffer::new("ab");
        let tokens = [
            Token::new(Rule::Identifier, 0, 2),
            Token::new(Rule::PegText, 0, 2),
        ];
        let root = build_syntax_tree(&tokens).unwrap();
        assert_eq!(
            root.print(&buffer, false),
            "PegText \"ab\"\n Identifier \"ab\"\n"
        );
        assert_eq!(
            root.print(&buffer, true).lines().next(),
            Some("\x1B[34mPegText\x1B[m \"ab\"")
        );
    }
}
