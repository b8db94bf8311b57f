//! Expression and object literal rules.

use esgen_ast::{
    ArrayExpression, AssignmentExpression, AwaitExpression, BinaryExpression, BinaryOperator,
    CallExpression, CompoundAssignmentExpression, ComputedMemberExpression, ComputedPropertyName,
    ConditionalExpression, DataProperty, Expression, ExpressionSuper, IdentifierExpression,
    LiteralBooleanExpression, LiteralNumericExpression, LiteralRegExpExpression,
    LiteralStringExpression, NewExpression, ObjectExpression, Precedence, ShorthandProperty,
    SpreadElement, SpreadElementExpression, StaticMemberExpression, StaticPropertyName,
    TemplateExpression, TemplateItem, UnaryExpression, UpdateExpression, YieldExpression,
    YieldGeneratorExpression,
};

use super::{is_bare_let, member_object, p, space, token};
use crate::code_rep::{CodeRep, RepFlags};
use crate::literals::{escape_string_literal, is_identifier_name, number_to_js};

/// A call argument or array element: anything but a spread must bind at
/// least as tightly as an assignment, since `,` separates items.
fn item(node: &SpreadElementExpression, rep: CodeRep) -> CodeRep {
    match node {
        SpreadElementExpression::SpreadElement(_) => rep,
        SpreadElementExpression::Expression(expr) => p(expr, Precedence::Assignment, rep),
    }
}

fn arguments(nodes: &[SpreadElementExpression], reps: Vec<CodeRep>) -> CodeRep {
    let items = nodes.iter().zip(reps).map(|(node, rep)| item(node, rep)).collect();
    CodeRep::paren(CodeRep::comma_sep(items))
}

/// Comma-separated list with holes. A trailing hole needs its own comma,
/// `[a,,]` has two elements.
pub(super) fn elements_with_holes(elements: Vec<CodeRep>, trailing_hole: bool) -> CodeRep {
    let list = CodeRep::comma_sep(elements);
    if trailing_hole {
        CodeRep::seq(vec![list, token(",")])
    } else {
        list
    }
}

pub(super) fn array_expression(node: &ArrayExpression, elements: Vec<Option<CodeRep>>) -> CodeRep {
    let trailing_hole = matches!(node.elements.last(), Some(None));
    let items = node
        .elements
        .iter()
        .zip(elements)
        .map(|(element, rep)| match (element, rep) {
            (Some(element), Some(rep)) => item(element, rep),
            _ => CodeRep::empty(),
        })
        .collect();
    CodeRep::bracket(elements_with_holes(items, trailing_hole))
}

pub(super) fn assignment_expression(
    node: &AssignmentExpression,
    binding: CodeRep,
    expression: CodeRep,
) -> CodeRep {
    CodeRep::seq(vec![
        binding,
        space(),
        token("="),
        space(),
        p(&node.expression, Precedence::Assignment, expression),
    ])
}

pub(super) fn await_expression(node: &AwaitExpression, expression: CodeRep) -> CodeRep {
    CodeRep::seq(vec![
        token("await"),
        space(),
        p(&node.expression, Precedence::Prefix, expression),
    ])
}

pub(super) fn binary_expression(node: &BinaryExpression, left: CodeRep, right: CodeRep) -> CodeRep {
    let precedence = node.operator.precedence();

    let (left, right) = if node.operator.is_right_associative() {
        // `-a ** b` is a syntax error
        let left = if node.left.precedence() <= precedence
            || matches!(
                *node.left,
                Expression::UnaryExpression(_) | Expression::AwaitExpression(_)
            ) {
            CodeRep::paren(left)
        } else {
            left
        };
        (left, p(&node.right, precedence, right))
    } else {
        let right = if node.right.precedence() <= precedence {
            CodeRep::paren(right)
        } else {
            right
        };
        (p(&node.left, precedence, left), right)
    };

    let rep = if node.operator == BinaryOperator::Sequence {
        CodeRep::seq(vec![left, token(","), space(), right])
    } else {
        CodeRep::seq(vec![
            left,
            space(),
            token(node.operator.as_str()),
            space(),
            right,
        ])
    };

    if node.operator == BinaryOperator::In {
        CodeRep::contains_in(rep)
    } else {
        rep
    }
}

fn callee(node: &ExpressionSuper, rep: CodeRep) -> CodeRep {
    match node {
        ExpressionSuper::Super => rep,
        ExpressionSuper::Expression(expr) => p(expr, Precedence::Call, rep),
    }
}

pub(super) fn call_expression(
    node: &CallExpression,
    callee_rep: CodeRep,
    args: Vec<CodeRep>,
) -> CodeRep {
    CodeRep::seq(vec![
        callee(&node.callee, callee_rep),
        arguments(&node.arguments, args),
    ])
}

pub(super) fn compound_assignment_expression(
    node: &CompoundAssignmentExpression,
    binding: CodeRep,
    expression: CodeRep,
) -> CodeRep {
    CodeRep::seq(vec![
        binding,
        space(),
        token(node.operator.as_str()),
        space(),
        p(&node.expression, Precedence::Assignment, expression),
    ])
}

/// `object[expression]`, flagged when it starts with `let [`.
pub(super) fn computed_member(object: &ExpressionSuper, object_rep: CodeRep, expression: CodeRep) -> CodeRep {
    let let_bracket = is_bare_let(object, &object_rep);
    let rep = CodeRep::seq(vec![
        member_object(object, object_rep),
        CodeRep::bracket(expression),
    ]);
    if let_bracket {
        rep.with_flags(RepFlags::STARTS_WITH_LET_SQUARE_BRACKET)
    } else {
        rep
    }
}

pub(super) fn computed_member_expression(
    node: &ComputedMemberExpression,
    object: CodeRep,
    expression: CodeRep,
) -> CodeRep {
    computed_member(&node.object, object, expression)
}

pub(super) fn conditional_expression(
    node: &ConditionalExpression,
    test: CodeRep,
    consequent: CodeRep,
    alternate: CodeRep,
) -> CodeRep {
    CodeRep::seq(vec![
        p(&node.test, Precedence::LogicalOr, test),
        space(),
        token("?"),
        space(),
        p(&node.consequent, Precedence::Assignment, consequent),
        space(),
        token(":"),
        space(),
        p(&node.alternate, Precedence::Assignment, alternate),
    ])
}

/// Identifier token; the name `let` is a statement-start hazard.
pub(super) fn identifier(name: impl Into<String>) -> CodeRep {
    let name = name.into();
    let is_let = name == "let";
    let rep = token(name);
    if is_let {
        rep.with_flags(RepFlags::STARTS_WITH_LET)
    } else {
        rep
    }
}

pub(super) fn identifier_expression(node: &IdentifierExpression) -> CodeRep {
    identifier(node.name.as_str())
}

pub(super) fn literal_boolean_expression(node: &LiteralBooleanExpression) -> CodeRep {
    token(if node.value { "true" } else { "false" })
}

pub(super) fn literal_infinity_expression() -> CodeRep {
    CodeRep::number(f64::INFINITY)
}

pub(super) fn literal_null_expression() -> CodeRep {
    token("null")
}

pub(super) fn literal_numeric_expression(node: &LiteralNumericExpression) -> CodeRep {
    CodeRep::number(node.value)
}

pub(super) fn literal_regexp_expression(node: &LiteralRegExpExpression) -> CodeRep {
    token(format!("/{}/{}", node.pattern, node.flags))
}

pub(super) fn literal_string_expression(node: &LiteralStringExpression) -> CodeRep {
    token(escape_string_literal(&node.value))
}

pub(super) fn new_expression(
    node: &NewExpression,
    callee_rep: CodeRep,
    args: Vec<CodeRep>,
) -> CodeRep {
    // `new a().b` would call `a` with `new`, not `a().b`
    let callee_rep = if node.callee.has_call_on_left_spine()
        || node.callee.precedence() < Precedence::Member
    {
        CodeRep::paren(callee_rep)
    } else {
        callee_rep
    };
    let mut parts = vec![token("new"), space(), callee_rep];
    if !node.arguments.is_empty() {
        parts.push(arguments(&node.arguments, args));
    }
    CodeRep::seq(parts)
}

pub(super) fn new_target_expression() -> CodeRep {
    CodeRep::seq(vec![token("new"), token("."), token("target")])
}

pub(super) fn object_expression(_node: &ObjectExpression, properties: Vec<CodeRep>) -> CodeRep {
    CodeRep::brace(CodeRep::comma_sep(properties)).with_flags(RepFlags::STARTS_WITH_CURLY)
}

pub(super) fn static_member(object: &ExpressionSuper, object_rep: CodeRep, property: &str) -> CodeRep {
    CodeRep::seq(vec![
        member_object(object, object_rep),
        token("."),
        token(property),
    ])
}

pub(super) fn static_member_expression(node: &StaticMemberExpression, object: CodeRep) -> CodeRep {
    static_member(&node.object, object, &node.property)
}

/// Template literal as tokens: the tag, a backtick, each chunk as one token
/// with its `}` / `${` delimiters attached, the embedded expressions in
/// between, and the closing backtick.
///
/// `elements` holds one entry per template item; `chunk_text` renders the raw
/// text of a chunk.
pub(super) fn linearize_template(
    node: &TemplateExpression,
    tag: Option<CodeRep>,
    elements: Vec<Option<CodeRep>>,
    chunk_text: impl Fn(&str) -> String,
) -> CodeRep {
    let mut parts = Vec::with_capacity(elements.len() + 3);
    if let (Some(tag_node), Some(tag)) = (node.tag.as_deref(), tag) {
        parts.push(p(tag_node, Precedence::Call, tag));
    }
    parts.push(token("`"));

    let chunks = node
        .elements
        .iter()
        .filter(|item| matches!(item, TemplateItem::TemplateElement(_)))
        .count();
    let mut chunk = 0;
    for (item, rep) in node.elements.iter().zip(elements) {
        match (item, rep) {
            (TemplateItem::TemplateElement(element), _) => {
                let mut text = String::new();
                if chunk > 0 {
                    text.push('}');
                }
                text.push_str(&chunk_text(&element.raw_value));
                if chunk + 1 < chunks {
                    text.push_str("${");
                }
                if !text.is_empty() {
                    parts.push(token(text));
                }
                chunk += 1;
            }
            (TemplateItem::Expression(_), Some(rep)) => parts.push(rep),
            (TemplateItem::Expression(_), None) => {}
        }
    }

    parts.push(token("`"));
    CodeRep::seq(parts)
}

pub(super) fn template_expression(
    node: &TemplateExpression,
    tag: Option<CodeRep>,
    elements: Vec<Option<CodeRep>>,
) -> CodeRep {
    linearize_template(node, tag, elements, str::to_string)
}

pub(super) fn this_expression() -> CodeRep {
    token("this")
}

pub(super) fn unary_expression(node: &UnaryExpression, operand: CodeRep) -> CodeRep {
    let operator = node.operator.as_str();
    let operand = p(&node.operand, Precedence::Prefix, operand);
    if operator.bytes().all(|b| b.is_ascii_alphabetic()) {
        CodeRep::seq(vec![token(operator), space(), operand])
    } else {
        CodeRep::seq(vec![token(operator), operand])
    }
}

pub(super) fn update_expression(node: &UpdateExpression, operand: CodeRep) -> CodeRep {
    let operator = token(node.operator.as_str());
    if node.is_prefix {
        CodeRep::seq(vec![operator, operand])
    } else {
        CodeRep::seq(vec![operand, operator])
    }
}

pub(super) fn yield_expression(node: &YieldExpression, expression: Option<CodeRep>) -> CodeRep {
    match (node.expression.as_deref(), expression) {
        (Some(expr), Some(rep)) => CodeRep::seq(vec![
            token("yield"),
            space(),
            p(expr, Precedence::YIELD, rep),
        ]),
        _ => token("yield"),
    }
}

pub(super) fn yield_generator_expression(
    node: &YieldGeneratorExpression,
    expression: CodeRep,
) -> CodeRep {
    CodeRep::seq(vec![
        token("yield"),
        token("*"),
        space(),
        p(&node.expression, Precedence::YIELD, expression),
    ])
}

pub(super) fn super_reference() -> CodeRep {
    token("super")
}

pub(super) fn spread_element(node: &SpreadElement, expression: CodeRep) -> CodeRep {
    CodeRep::seq(vec![
        token("..."),
        p(&node.expression, Precedence::Assignment, expression),
    ])
}

pub(super) fn data_property(node: &DataProperty, name: CodeRep, expression: CodeRep) -> CodeRep {
    CodeRep::seq(vec![
        name,
        token(":"),
        space(),
        p(&node.expression, Precedence::Assignment, expression),
    ])
}

pub(super) fn shorthand_property(_node: &ShorthandProperty, name: CodeRep) -> CodeRep {
    name
}

/// Bare identifier name, canonical number, or quoted string.
pub(super) fn static_property_name(node: &StaticPropertyName) -> CodeRep {
    let value = node.value.as_str();
    if is_identifier_name(value) {
        return token(value);
    }
    if let Ok(number) = value.parse::<f64>() {
        if number.is_finite() && number >= 0.0 && number_to_js(number, false) == value {
            return CodeRep::number(number);
        }
    }
    token(escape_string_literal(value))
}

pub(super) fn computed_property_name(node: &ComputedPropertyName, expression: CodeRep) -> CodeRep {
    CodeRep::bracket(p(&node.expression, Precedence::Assignment, expression))
}
