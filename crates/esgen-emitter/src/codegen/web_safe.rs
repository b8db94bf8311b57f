//! Web-safe rendering: the base rules with sanitized literals.
//!
//! Only the node kinds that carry literal text from the tree are overridden:
//! identifiers, string and regular-expression literals, template literals
//! and directives. Everything else is produced by the base rules and made
//! safe by `WebSafeTokenStream`.

use esgen_ast::{
    AssignmentTargetIdentifier, BindingIdentifier, Directive, IdentifierExpression,
    LiteralRegExpExpression, LiteralStringExpression, TemplateExpression,
};

use super::expressions::{identifier, linearize_template};
use super::modules::directive_with_text;
use super::{CodeGen, token};
use crate::code_rep::CodeRep;
use crate::literals::escape_string_literal;
use crate::sanitize::{sanitize, sanitize_identifier};

#[derive(Debug, Clone, Copy, Default)]
pub struct WebSafeCodeGen;

impl CodeGen for WebSafeCodeGen {
    fn reduce_identifier_expression(&self, node: &IdentifierExpression) -> CodeRep {
        identifier(sanitize_identifier(&node.name))
    }

    fn reduce_binding_identifier(&self, node: &BindingIdentifier) -> CodeRep {
        identifier(sanitize_identifier(&node.name))
    }

    fn reduce_assignment_target_identifier(&self, node: &AssignmentTargetIdentifier) -> CodeRep {
        identifier(sanitize_identifier(&node.name))
    }

    fn reduce_literal_string_expression(&self, node: &LiteralStringExpression) -> CodeRep {
        token(sanitize(&escape_string_literal(&node.value)))
    }

    /// The closing `/` takes part in sanitization so that a pattern ending in
    /// `</script` is caught.
    fn reduce_literal_regexp_expression(&self, node: &LiteralRegExpExpression) -> CodeRep {
        let body = format!("{}/", node.pattern);
        token(format!("/{}{}", sanitize(&body), node.flags))
    }

    fn reduce_template_expression(
        &self,
        node: &TemplateExpression,
        tag: Option<CodeRep>,
        elements: Vec<Option<CodeRep>>,
    ) -> CodeRep {
        linearize_template(node, tag, elements, |raw| sanitize(raw).into_owned())
    }

    fn reduce_directive(&self, node: &Directive) -> CodeRep {
        directive_with_text(&node.raw_value, &sanitize(&node.raw_value))
    }
}
