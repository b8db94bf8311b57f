//! Expression precedence.
//!
//! Ordered from loosest to tightest binding. A child is parenthesized by the
//! code generator when its precedence is lower than the precedence its
//! position requires.

use crate::node::{Expression, ExpressionSuper, TemplateExpression};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Sequence,
    /// Shared by yield and assignment expressions.
    Assignment,
    /// Shared by conditional and arrow expressions.
    Conditional,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Exponential,
    Prefix,
    Postfix,
    New,
    Call,
    TaggedTemplate,
    Member,
    Primary,
}

impl Precedence {
    pub const YIELD: Self = Self::Assignment;
    pub const ARROW_FUNCTION: Self = Self::Conditional;
}

impl Expression {
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::ArrayExpression(_)
            | Self::ClassExpression(_)
            | Self::FunctionExpression(_)
            | Self::IdentifierExpression(_)
            | Self::LiteralBooleanExpression(_)
            | Self::LiteralInfinityExpression
            | Self::LiteralNullExpression
            | Self::LiteralNumericExpression(_)
            | Self::LiteralRegExpExpression(_)
            | Self::LiteralStringExpression(_)
            | Self::ObjectExpression(_)
            | Self::ThisExpression => Precedence::Primary,

            Self::ArrowExpression(_) => Precedence::ARROW_FUNCTION,
            Self::AssignmentExpression(_) | Self::CompoundAssignmentExpression(_) => {
                Precedence::Assignment
            }
            Self::YieldExpression(_) | Self::YieldGeneratorExpression(_) => Precedence::YIELD,
            Self::ConditionalExpression(_) => Precedence::Conditional,
            Self::BinaryExpression(node) => node.operator.precedence(),
            Self::AwaitExpression(_) | Self::UnaryExpression(_) => Precedence::Prefix,
            Self::UpdateExpression(node) => {
                if node.is_prefix {
                    Precedence::Prefix
                } else {
                    Precedence::Postfix
                }
            }
            Self::CallExpression(_) => Precedence::Call,
            Self::NewExpression(node) => {
                if node.arguments.is_empty() {
                    Precedence::New
                } else {
                    Precedence::Member
                }
            }
            Self::NewTargetExpression => Precedence::Member,
            Self::StaticMemberExpression(node) => object_precedence(&node.object),
            Self::ComputedMemberExpression(node) => object_precedence(&node.object),
            Self::TemplateExpression(node) => node.precedence(),
        }
    }

    /// True when a call appears on the leftmost member chain, e.g. `a().b`.
    /// Such an expression cannot be a `new` callee without parentheses.
    pub fn has_call_on_left_spine(&self) -> bool {
        match self {
            Self::CallExpression(_) => true,
            Self::StaticMemberExpression(node) => spine_has_call(&node.object),
            Self::ComputedMemberExpression(node) => spine_has_call(&node.object),
            Self::TemplateExpression(node) => node
                .tag
                .as_deref()
                .is_some_and(Expression::has_call_on_left_spine),
            _ => false,
        }
    }
}

impl TemplateExpression {
    pub fn precedence(&self) -> Precedence {
        match self.tag.as_deref() {
            None => Precedence::Primary,
            Some(tag) if tag.precedence() == Precedence::Call => Precedence::Call,
            Some(_) => Precedence::TaggedTemplate,
        }
    }
}

fn object_precedence(object: &ExpressionSuper) -> Precedence {
    match object {
        ExpressionSuper::Super => Precedence::Member,
        ExpressionSuper::Expression(expr) => {
            if expr.precedence() == Precedence::Call {
                Precedence::Call
            } else {
                Precedence::Member
            }
        }
    }
}

fn spine_has_call(object: &ExpressionSuper) -> bool {
    match object {
        ExpressionSuper::Super => false,
        ExpressionSuper::Expression(expr) => expr.has_call_on_left_spine(),
    }
}
