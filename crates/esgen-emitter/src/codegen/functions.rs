//! Function, class and method rules.

use esgen_ast::{
    ArrowBody, ArrowExpression, ClassDeclaration, ClassElement, ClassExpression, Expression,
    FormalParameters, FunctionBody, FunctionDeclaration, FunctionExpression, Getter, Method,
    Precedence, Setter,
};

use super::{p, space, token};
use crate::code_rep::{CodeRep, RepFlags};

/// Name of an anonymous `export default` function or class declaration.
pub const DEFAULT_EXPORT_NAME: &str = "*default*";

fn function_head(is_async: bool, is_generator: bool) -> Vec<CodeRep> {
    let mut parts = Vec::with_capacity(6);
    if is_async {
        parts.extend([token("async"), space()]);
    }
    parts.push(token("function"));
    if is_generator {
        parts.push(token("*"));
    }
    parts
}

fn function(
    is_async: bool,
    is_generator: bool,
    name: Option<CodeRep>,
    params: CodeRep,
    body: CodeRep,
) -> CodeRep {
    let mut parts = function_head(is_async, is_generator);
    if let Some(name) = name {
        parts.extend([space(), name]);
    }
    parts.extend([params, space(), body]);
    CodeRep::seq(parts)
}

pub(super) fn function_declaration(
    node: &FunctionDeclaration,
    name: CodeRep,
    params: CodeRep,
    body: CodeRep,
) -> CodeRep {
    let name = (node.name.name != DEFAULT_EXPORT_NAME).then_some(name);
    function(node.is_async, node.is_generator, name, params, body)
}

pub(super) fn function_expression(
    node: &FunctionExpression,
    name: Option<CodeRep>,
    params: CodeRep,
    body: CodeRep,
) -> CodeRep {
    function(node.is_async, node.is_generator, name, params, body)
        .with_flags(RepFlags::STARTS_WITH_FUNCTION_OR_CLASS)
}

/// `params` is the bare binding when the arrow takes a single plain
/// identifier, the parenthesized parameter list otherwise.
pub(super) fn arrow_expression(node: &ArrowExpression, params: CodeRep, body: CodeRep) -> CodeRep {
    let body = match &node.body {
        ArrowBody::FunctionBody(_) => body,
        ArrowBody::Expression(expr) => {
            let body = p(expr, Precedence::Assignment, body);
            // `=> {` would open a function body
            if body.starts_with_curly() {
                CodeRep::paren(body)
            } else {
                body
            }
        }
    };

    let mut parts = Vec::with_capacity(7);
    if node.is_async {
        parts.extend([token("async"), space()]);
    }
    parts.extend([params, space(), token("=>"), space(), body]);
    CodeRep::seq(parts)
}

pub(super) fn formal_parameters(
    _node: &FormalParameters,
    mut items: Vec<CodeRep>,
    rest: Option<CodeRep>,
) -> CodeRep {
    if let Some(rest) = rest {
        items.push(CodeRep::seq(vec![token("..."), rest]));
    }
    CodeRep::paren(CodeRep::comma_sep(items))
}

pub(super) fn function_body(
    _node: &FunctionBody,
    mut directives: Vec<CodeRep>,
    statements: Vec<CodeRep>,
) -> CodeRep {
    directives.extend(statements);
    CodeRep::block(directives)
}

fn class(name: Option<CodeRep>, super_class: Option<CodeRep>, elements: Vec<CodeRep>) -> CodeRep {
    let mut parts = vec![token("class")];
    if let Some(name) = name {
        parts.extend([space(), name]);
    }
    if let Some(super_class) = super_class {
        parts.extend([space(), token("extends"), space(), super_class]);
    }
    parts.extend([space(), CodeRep::block(elements)]);
    CodeRep::seq(parts)
}

fn heritage(node: Option<&Expression>, rep: Option<CodeRep>) -> Option<CodeRep> {
    match (node, rep) {
        (Some(expr), Some(rep)) => Some(p(expr, Precedence::New, rep)),
        _ => None,
    }
}

pub(super) fn class_declaration(
    node: &ClassDeclaration,
    name: CodeRep,
    super_class: Option<CodeRep>,
    elements: Vec<CodeRep>,
) -> CodeRep {
    let name = (node.name.name != DEFAULT_EXPORT_NAME).then_some(name);
    class(name, heritage(node.super_class.as_deref(), super_class), elements)
}

pub(super) fn class_expression(
    node: &ClassExpression,
    name: Option<CodeRep>,
    super_class: Option<CodeRep>,
    elements: Vec<CodeRep>,
) -> CodeRep {
    class(name, heritage(node.super_class.as_deref(), super_class), elements)
        .with_flags(RepFlags::STARTS_WITH_FUNCTION_OR_CLASS)
}

pub(super) fn class_element(node: &ClassElement, method: CodeRep) -> CodeRep {
    if node.is_static {
        CodeRep::seq(vec![token("static"), space(), method])
    } else {
        method
    }
}

pub(super) fn method(node: &Method, name: CodeRep, params: CodeRep, body: CodeRep) -> CodeRep {
    let mut parts = Vec::with_capacity(6);
    if node.is_async {
        parts.extend([token("async"), space()]);
    }
    if node.is_generator {
        parts.push(token("*"));
    }
    parts.extend([name, params, space(), body]);
    CodeRep::seq(parts)
}

pub(super) fn getter(_node: &Getter, name: CodeRep, body: CodeRep) -> CodeRep {
    CodeRep::seq(vec![
        token("get"),
        space(),
        name,
        CodeRep::paren(CodeRep::empty()),
        space(),
        body,
    ])
}

pub(super) fn setter(_node: &Setter, name: CodeRep, param: CodeRep, body: CodeRep) -> CodeRep {
    CodeRep::seq(vec![
        token("set"),
        space(),
        name,
        CodeRep::paren(param),
        space(),
        body,
    ])
}
