//! Binding pattern and assignment target rules.

use esgen_ast::{
    ArrayAssignmentTarget, ArrayBinding, AssignmentTargetIdentifier,
    AssignmentTargetPropertyIdentifier, AssignmentTargetPropertyProperty,
    AssignmentTargetWithDefault, BindingIdentifier, BindingPropertyIdentifier,
    BindingPropertyProperty, BindingWithDefault, ComputedMemberAssignmentTarget, Expression,
    ObjectAssignmentTarget, ObjectBinding, Precedence, StaticMemberAssignmentTarget,
};

use super::expressions::{computed_member, elements_with_holes, identifier, static_member};
use super::{p, space, token};
use crate::code_rep::{CodeRep, RepFlags};

fn with_default(binding: CodeRep, init_node: &Expression, init: CodeRep) -> CodeRep {
    CodeRep::seq(vec![
        binding,
        space(),
        token("="),
        space(),
        p(init_node, Precedence::Assignment, init),
    ])
}

/// `[a, , ...rest]` pattern body.
fn array_pattern(elements: Vec<Option<CodeRep>>, rest: Option<CodeRep>) -> CodeRep {
    let trailing_hole = rest.is_none() && matches!(elements.last(), Some(None));
    let mut items: Vec<CodeRep> = elements
        .into_iter()
        .map(|element| element.unwrap_or_else(CodeRep::empty))
        .collect();
    if let Some(rest) = rest {
        items.push(CodeRep::seq(vec![token("..."), rest]));
    }
    CodeRep::bracket(elements_with_holes(items, trailing_hole))
}

fn object_pattern(properties: Vec<CodeRep>) -> CodeRep {
    CodeRep::brace(CodeRep::comma_sep(properties)).with_flags(RepFlags::STARTS_WITH_CURLY)
}

pub(super) fn binding_identifier(node: &BindingIdentifier) -> CodeRep {
    identifier(node.name.as_str())
}

pub(super) fn array_binding(
    _node: &ArrayBinding,
    elements: Vec<Option<CodeRep>>,
    rest: Option<CodeRep>,
) -> CodeRep {
    array_pattern(elements, rest)
}

pub(super) fn object_binding(_node: &ObjectBinding, properties: Vec<CodeRep>) -> CodeRep {
    object_pattern(properties)
}

pub(super) fn binding_with_default(
    node: &BindingWithDefault,
    binding: CodeRep,
    init: CodeRep,
) -> CodeRep {
    with_default(binding, &node.init, init)
}

pub(super) fn binding_property_identifier(
    node: &BindingPropertyIdentifier,
    binding: CodeRep,
    init: Option<CodeRep>,
) -> CodeRep {
    match (&node.init, init) {
        (Some(expr), Some(init)) => with_default(binding, expr, init),
        _ => binding,
    }
}

pub(super) fn binding_property_property(
    _node: &BindingPropertyProperty,
    name: CodeRep,
    binding: CodeRep,
) -> CodeRep {
    CodeRep::seq(vec![name, token(":"), space(), binding])
}

pub(super) fn assignment_target_identifier(node: &AssignmentTargetIdentifier) -> CodeRep {
    identifier(node.name.as_str())
}

pub(super) fn static_member_assignment_target(
    node: &StaticMemberAssignmentTarget,
    object: CodeRep,
) -> CodeRep {
    static_member(&node.object, object, &node.property)
}

pub(super) fn computed_member_assignment_target(
    node: &ComputedMemberAssignmentTarget,
    object: CodeRep,
    expression: CodeRep,
) -> CodeRep {
    computed_member(&node.object, object, expression)
}

pub(super) fn array_assignment_target(
    _node: &ArrayAssignmentTarget,
    elements: Vec<Option<CodeRep>>,
    rest: Option<CodeRep>,
) -> CodeRep {
    array_pattern(elements, rest)
}

pub(super) fn object_assignment_target(
    _node: &ObjectAssignmentTarget,
    properties: Vec<CodeRep>,
) -> CodeRep {
    object_pattern(properties)
}

pub(super) fn assignment_target_with_default(
    node: &AssignmentTargetWithDefault,
    binding: CodeRep,
    init: CodeRep,
) -> CodeRep {
    with_default(binding, &node.init, init)
}

pub(super) fn assignment_target_property_identifier(
    node: &AssignmentTargetPropertyIdentifier,
    binding: CodeRep,
    init: Option<CodeRep>,
) -> CodeRep {
    match (&node.init, init) {
        (Some(expr), Some(init)) => with_default(binding, expr, init),
        _ => binding,
    }
}

pub(super) fn assignment_target_property_property(
    _node: &AssignmentTargetPropertyProperty,
    name: CodeRep,
    binding: CodeRep,
) -> CodeRep {
    CodeRep::seq(vec![name, token(":"), space(), binding])
}
