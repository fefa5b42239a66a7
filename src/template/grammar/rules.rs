//! Grammar productions
//!
//! ```text
//! Script         <- Spacing Statement+ EndOfFile
//! Statement      <- Spacing (VarDeclaration / Expr / Declaration / Comment) Spacing EndOfLine*
//! VarDeclaration <- Var <Identifier> Equal VarValue
//! Declaration    <- <Identifier> Equal Expr
//! Expr           <- <Action> MustWhiteSpacing <Entity> (MustWhiteSpacing Params)?
//! Params         <- Param+
//! Param          <- <Identifier> Equal Value WhiteSpacing
//! Value          <- <CidrValue> / <IpValue> / <IntRangeValue> / <IntValue>
//!                   / RefValue / AliasValue / HoleValue / <StringValue>
//! VarValue       <- HoleValue / <CidrValue> / <IpValue> / <IntRangeValue> / <IntValue> / <StringValue>
//! CidrValue      <- [0-9]+ . [0-9]+ . [0-9]+ . [0-9]+ '/' [0-9]+
//! IpValue        <- [0-9]+ . [0-9]+ . [0-9]+ . [0-9]+
//! IntRangeValue  <- [0-9]+ '-' [0-9]+
//! IntValue       <- [0-9]+
//! RefValue       <- '$' <Identifier>
//! AliasValue     <- '@' <Identifier>
//! HoleValue      <- '{' WhiteSpacing <Identifier> WhiteSpacing '}'
//! Comment        <- '#' (!EndOfLine .)* / '//' (!EndOfLine .)*
//! Var            <- 'var' MustWhiteSpacing
//! Equal          <- Spacing '=' Spacing
//! ```
//!
//! `<...>` marks a capture. Each capture is followed by the semantic action
//! that consumes it, so the semantic pass only ever needs the latest capture.
//! The order of the `Value` alternatives matters: addresses and ranges must
//! be tried before a plain integer can claim their leading digits.

use super::buffer::{is_identifier_char, is_string_char};
use super::keywords::{recognize_action, recognize_entity};
use super::rule::{Rule, SemanticAction as A};
use super::state::ParserState;

impl ParserState<'_> {
    pub fn script(&mut self) -> bool {
        self.rule(Rule::Script, |p| {
            p.spacing() && p.one_or_more(|p| p.statement()) && p.end_of_file()
        })
    }

    pub fn statement(&mut self) -> bool {
        self.rule(Rule::Statement, |p| {
            p.spacing()
                && (p.var_declaration() || p.expr() || p.declaration() || p.comment())
                && p.spacing()
                && p.repeat(|p| p.end_of_line())
        })
    }

    pub fn var_declaration(&mut self) -> bool {
        self.rule(Rule::VarDeclaration, |p| {
            p.var()
                && p.capture(|p| p.identifier())
                && p.action(A::AddVarIdentifier)
                && p.equal()
                && p.var_value()
                && p.action(A::LineDone)
        })
    }

    pub fn declaration(&mut self) -> bool {
        self.rule(Rule::Declaration, |p| {
            p.capture(|p| p.identifier())
                && p.action(A::AddDeclarationIdentifier)
                && p.equal()
                && p.expr()
        })
    }

    pub fn expr(&mut self) -> bool {
        self.rule(Rule::Expr, |p| {
            p.capture(|p| p.action_keyword())
                && p.action(A::AddAction)
                && p.must_white_spacing()
                && p.capture(|p| p.entity())
                && p.action(A::AddEntity)
                && p.optional(|p| p.must_white_spacing() && p.params())
                && p.action(A::LineDone)
        })
    }

    pub fn action_keyword(&mut self) -> bool {
        self.rule(Rule::Action, |p| {
            p.match_keyword(|buffer, pos| recognize_action(buffer, pos).map(|(_, len)| len))
        })
    }

    pub fn entity(&mut self) -> bool {
        self.rule(Rule::Entity, |p| {
            p.match_keyword(|buffer, pos| recognize_entity(buffer, pos).map(|(_, len)| len))
        })
    }

    pub fn params(&mut self) -> bool {
        self.rule(Rule::Params, |p| p.one_or_more(|p| p.param()))
    }

    pub fn param(&mut self) -> bool {
        self.rule(Rule::Param, |p| {
            p.capture(|p| p.identifier())
                && p.action(A::AddParamKey)
                && p.equal()
                && p.value()
                && p.white_spacing()
        })
    }

    pub fn identifier(&mut self) -> bool {
        self.rule(Rule::Identifier, |p| {
            p.one_or_more(|p| p.match_class(is_identifier_char))
        })
    }

    pub fn value(&mut self) -> bool {
        self.rule(Rule::Value, |p| {
            if p.capture(|p| p.cidr_value()) {
                return p.action(A::AddParamCidrValue);
            }
            if p.capture(|p| p.ip_value()) {
                return p.action(A::AddParamIpValue);
            }
            if p.capture(|p| p.int_range_value()) {
                return p.action(A::AddParamValue);
            }
            if p.capture(|p| p.int_value()) {
                return p.action(A::AddParamIntValue);
            }
            match p.peek() {
                '$' => p.ref_value() && p.action(A::AddParamRefValue),
                '@' => p.alias_value() && p.action(A::AddParamAliasValue),
                '{' => p.hole_value() && p.action(A::AddParamHoleValue),
                _ => p.capture(|p| p.string_value()) && p.action(A::AddParamValue),
            }
        })
    }

    pub fn var_value(&mut self) -> bool {
        self.rule(Rule::VarValue, |p| {
            if p.hole_value() {
                return p.action(A::AddVarHoleValue);
            }
            if p.capture(|p| p.cidr_value()) {
                return p.action(A::AddVarCidrValue);
            }
            if p.capture(|p| p.ip_value()) {
                return p.action(A::AddVarIpValue);
            }
            if p.capture(|p| p.int_range_value()) {
                return p.action(A::AddVarValue);
            }
            if p.capture(|p| p.int_value()) {
                return p.action(A::AddVarIntValue);
            }
            p.capture(|p| p.string_value()) && p.action(A::AddVarValue)
        })
    }

    pub fn string_value(&mut self) -> bool {
        self.rule(Rule::StringValue, |p| {
            p.one_or_more(|p| p.match_class(is_string_char))
        })
    }

    pub fn cidr_value(&mut self) -> bool {
        self.rule(Rule::CidrValue, |p| {
            p.dotted_quad() && p.match_char('/') && p.digits()
        })
    }

    pub fn ip_value(&mut self) -> bool {
        self.rule(Rule::IpValue, |p| p.dotted_quad())
    }

    pub fn int_value(&mut self) -> bool {
        self.rule(Rule::IntValue, |p| p.digits())
    }

    pub fn int_range_value(&mut self) -> bool {
        self.rule(Rule::IntRangeValue, |p| {
            p.digits() && p.match_char('-') && p.digits()
        })
    }

    pub fn ref_value(&mut self) -> bool {
        self.rule(Rule::RefValue, |p| {
            p.match_char('$') && p.capture(|p| p.identifier())
        })
    }

    pub fn alias_value(&mut self) -> bool {
        self.rule(Rule::AliasValue, |p| {
            p.match_char('@') && p.capture(|p| p.identifier())
        })
    }

    pub fn hole_value(&mut self) -> bool {
        self.rule(Rule::HoleValue, |p| {
            p.match_char('{')
                && p.white_spacing()
                && p.capture(|p| p.identifier())
                && p.white_spacing()
                && p.match_char('}')
        })
    }

    pub fn comment(&mut self) -> bool {
        self.rule(Rule::Comment, |p| {
            p.sequence(|p| p.match_char('#') && p.rest_of_line())
                || p.sequence(|p| p.match_str("//") && p.rest_of_line() && p.action(A::LineDone))
        })
    }

    pub fn spacing(&mut self) -> bool {
        self.rule(Rule::Spacing, |p| p.repeat(|p| p.space()))
    }

    pub fn white_spacing(&mut self) -> bool {
        self.rule(Rule::WhiteSpacing, |p| p.repeat(|p| p.whitespace()))
    }

    pub fn must_white_spacing(&mut self) -> bool {
        self.rule(Rule::MustWhiteSpacing, |p| p.one_or_more(|p| p.whitespace()))
    }

    pub fn equal(&mut self) -> bool {
        self.rule(Rule::Equal, |p| p.spacing() && p.match_char('=') && p.spacing())
    }

    pub fn var(&mut self) -> bool {
        self.rule(Rule::Var, |p| p.match_str("var") && p.must_white_spacing())
    }

    pub fn space(&mut self) -> bool {
        self.rule(Rule::Space, |p| p.whitespace() || p.end_of_line())
    }

    pub fn whitespace(&mut self) -> bool {
        self.rule(Rule::Whitespace, |p| p.match_char(' ') || p.match_char('\t'))
    }

    pub fn end_of_line(&mut self) -> bool {
        self.rule(Rule::EndOfLine, |p| {
            p.match_str("\r\n") || p.match_char('\n') || p.match_char('\r')
        })
    }

    pub fn end_of_file(&mut self) -> bool {
        self.rule(Rule::EndOfFile, |p| p.not_ahead(|p| p.match_dot()))
    }

    fn digits(&mut self) -> bool {
        self.one_or_more(|p| p.match_range('0', '9'))
    }

    /// Four digit runs separated by any single character
    fn dotted_quad(&mut self) -> bool {
        self.digits()
            && self.match_dot()
            && self.digits()
            && self.match_dot()
            && self.digits()
            && self.match_dot()
            && self.digits()
    }

    /// `(!EndOfLine .)*`
    fn rest_of_line(&mut self) -> bool {
        self.repeat(|p| p.not_ahead(|p| p.end_of_line()) && p.match_dot())
    }
}
