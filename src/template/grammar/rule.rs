//! Rule kinds recorded in the token sequence
//!
//! Every named grammar rule records a span under its own kind. Two extra kinds
//! carry meaning for the semantic pass: [`Rule::PegText`] marks a captured
//! substring, and [`Rule::Semantic`] marks the point where an AST builder
//! operation consumes the most recent capture.

use std::fmt;

/// AST builder operations triggered from the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticAction {
    AddVarIdentifier,
    AddVarValue,
    AddVarIntValue,
    AddVarCidrValue,
    AddVarIpValue,
    AddVarHoleValue,
    AddDeclarationIdentifier,
    AddAction,
    AddEntity,
    AddParamKey,
    AddParamValue,
    AddParamIntValue,
    AddParamCidrValue,
    AddParamIpValue,
    AddParamRefValue,
    AddParamAliasValue,
    AddParamHoleValue,
    LineDone,
}

impl SemanticAction {
    pub fn name(self) -> &'static str {
        match self {
            SemanticAction::AddVarIdentifier => "AddVarIdentifier",
            SemanticAction::AddVarValue => "AddVarValue",
            SemanticAction::AddVarIntValue => "AddVarIntValue",
            SemanticAction::AddVarCidrValue => "AddVarCidrValue",
            SemanticAction::AddVarIpValue => "AddVarIpValue",
            SemanticAction::AddVarHoleValue => "AddVarHoleValue",
            SemanticAction::AddDeclarationIdentifier => "AddDeclarationIdentifier",
            SemanticAction::AddAction => "AddAction",
            SemanticAction::AddEntity => "AddEntity",
            SemanticAction::AddParamKey => "AddParamKey",
            SemanticAction::AddParamValue => "AddParamValue",
            SemanticAction::AddParamIntValue => "AddParamIntValue",
            SemanticAction::AddParamCidrValue => "AddParamCidrValue",
            SemanticAction::AddParamIpValue => "AddParamIpValue",
            SemanticAction::AddParamRefValue => "AddParamRefValue",
            SemanticAction::AddParamAliasValue => "AddParamAliasValue",
            SemanticAction::AddParamHoleValue => "AddParamHoleValue",
            SemanticAction::LineDone => "LineDone",
        }
    }
}

/// Kind tag of a recorded span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Unknown,
    Script,
    Statement,
    Action,
    Entity,
    VarDeclaration,
    Declaration,
    Expr,
    Params,
    Param,
    Identifier,
    Value,
    VarValue,
    StringValue,
    CidrValue,
    IpValue,
    IntValue,
    IntRangeValue,
    RefValue,
    AliasValue,
    HoleValue,
    Comment,
    Spacing,
    WhiteSpacing,
    MustWhiteSpacing,
    Equal,
    Var,
    Space,
    Whitespace,
    EndOfLine,
    EndOfFile,
    PegText,
    Semantic(SemanticAction),
}

impl Rule {
    pub fn name(self) -> &'static str {
        match self {
            Rule::Unknown => "Unknown",
            Rule::Script => "Script",
            Rule::Statement => "Statement",
            Rule::Action => "Action",
            Rule::Entity => "Entity",
            Rule::VarDeclaration => "VarDeclaration",
            Rule::Declaration => "Declaration",
            Rule::Expr => "Expr",
            Rule::Params => "Params",
            Rule::Param => "Param",
            Rule::Identifier => "Identifier",
            Rule::Value => "Value",
            Rule::VarValue => "VarValue",
            Rule::StringValue => "StringValue",
            Rule::CidrValue => "CidrValue",
            Rule::IpValue => "IpValue",
            Rule::IntValue => "IntValue",
            Rule::IntRangeValue => "IntRangeValue",
            Rule::RefValue => "RefValue",
            Rule::AliasValue => "AliasValue",
            Rule::HoleValue => "HoleValue",
            Rule::Comment => "Comment",
            Rule::Spacing => "Spacing",
            Rule::WhiteSpacing => "WhiteSpacing",
            Rule::MustWhiteSpacing => "MustWhiteSpacing",
            Rule::Equal => "Equal",
            Rule::Var => "Var",
            Rule::Space => "Space",
            Rule::Whitespace => "Whitespace",
            Rule::EndOfLine => "EndOfLine",
            Rule::EndOfFile => "EndOfFile",
            Rule::PegText => "PegText",
            Rule::Semantic(action) => action.name(),
        }
    }

    /// Whether spans of this kind carry text for the next semantic action
    pub fn is_capture(self) -> bool {
        matches!(self, Rule::PegText)
    }

    pub fn semantic_action(self) -> Option<SemanticAction> {
        match self {
            Rule::Semantic(action) => Some(action),
            _ => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
