//! Statement rules.

use esgen_ast::{
    Block, BlockStatement, BreakStatement, CatchClause, ContinueStatement, DoWhileStatement,
    ExpressionStatement, ForInStatement, ForInit, ForOfStatement, ForStatement, IfStatement,
    LabeledStatement, Precedence, ReturnStatement, SwitchCase, SwitchDefault, SwitchStatement,
    SwitchStatementWithDefault, ThrowStatement, TryCatchStatement, TryFinallyStatement,
    VariableDeclaration, VariableDeclarationStatement, VariableDeclarator, WhileStatement,
    WithStatement,
};

use super::{p, space, token};
use crate::code_rep::{CodeRep, RepFlags, STATEMENT_START_HAZARDS};

pub(super) fn block(_node: &Block, statements: Vec<CodeRep>) -> CodeRep {
    CodeRep::block(statements)
}

pub(super) fn block_statement(_node: &BlockStatement, block: CodeRep) -> CodeRep {
    block
}

fn jump(keyword: &str, label: Option<&str>) -> CodeRep {
    match label {
        Some(label) => CodeRep::seq(vec![token(keyword), space(), token(label), CodeRep::semi_op()]),
        None => CodeRep::seq(vec![token(keyword), CodeRep::semi_op()]),
    }
}

pub(super) fn break_statement(node: &BreakStatement) -> CodeRep {
    jump("break", node.label.as_deref())
}

pub(super) fn continue_statement(node: &ContinueStatement) -> CodeRep {
    jump("continue", node.label.as_deref())
}

pub(super) fn debugger_statement() -> CodeRep {
    CodeRep::seq(vec![token("debugger"), CodeRep::semi_op()])
}

pub(super) fn do_while_statement(_node: &DoWhileStatement, body: CodeRep, test: CodeRep) -> CodeRep {
    CodeRep::seq(vec![
        token("do"),
        space(),
        body,
        space(),
        token("while"),
        space(),
        CodeRep::paren(test),
        CodeRep::semi_op(),
    ])
}

pub(super) fn empty_statement() -> CodeRep {
    CodeRep::semi()
}

pub(super) fn expression_statement(_node: &ExpressionStatement, expression: CodeRep) -> CodeRep {
    let expression = if expression.has(STATEMENT_START_HAZARDS) {
        CodeRep::paren(expression)
    } else {
        expression
    };
    CodeRep::seq(vec![expression, CodeRep::semi_op()])
}

/// `for (left in right) body` or `for (left of right) body`.
fn for_each(left: CodeRep, operator: &str, right: CodeRep, body: CodeRep) -> CodeRep {
    CodeRep::seq(vec![
        token("for"),
        space(),
        CodeRep::paren(CodeRep::seq(vec![left, space(), token(operator), space(), right])),
        space(),
        body,
    ])
}

pub(super) fn for_in_statement(
    _node: &ForInStatement,
    left: CodeRep,
    right: CodeRep,
    body: CodeRep,
) -> CodeRep {
    let left = if left.starts_with_let_square_bracket() {
        CodeRep::paren(left)
    } else {
        left
    };
    for_each(left, "in", right, body)
}

pub(super) fn for_of_statement(
    node: &ForOfStatement,
    left: CodeRep,
    right: CodeRep,
    body: CodeRep,
) -> CodeRep {
    // `for (let of x)` would declare a variable named `of`
    let left = if left.starts_with_let() {
        CodeRep::paren(left)
    } else {
        left
    };
    let right = p(&node.right, Precedence::Assignment, right);
    for_each(left, "of", right, body)
}

pub(super) fn for_statement(
    node: &ForStatement,
    init: Option<CodeRep>,
    test: Option<CodeRep>,
    update: Option<CodeRep>,
    body: CodeRep,
) -> CodeRep {
    let init = init.map_or_else(CodeRep::empty, |init| {
        let init = match node.init {
            Some(ForInit::Expression(_)) if init.starts_with_let_square_bracket() => {
                CodeRep::paren(init)
            }
            _ => init,
        };
        CodeRep::no_in(init)
    });

    let mut head = vec![init, token(";")];
    if let Some(test) = test {
        head.extend([space(), test]);
    }
    head.push(token(";"));
    if let Some(update) = update {
        head.extend([space(), update]);
    }

    CodeRep::seq(vec![
        token("for"),
        space(),
        CodeRep::paren(CodeRep::seq(head)),
        space(),
        body,
    ])
}

pub(super) fn if_statement(
    _node: &IfStatement,
    test: CodeRep,
    consequent: CodeRep,
    alternate: Option<CodeRep>,
) -> CodeRep {
    let head = [token("if"), space(), CodeRep::paren(test), space()];
    match alternate {
        Some(alternate) => {
            // an inner `if` without `else` would capture ours
            let consequent = if consequent.ends_with_missing_else() {
                CodeRep::block(vec![consequent])
            } else {
                consequent
            };
            let mut parts = Vec::from(head);
            parts.extend([consequent, space(), token("else"), space(), alternate]);
            CodeRep::seq(parts)
        }
        None => {
            let mut parts = Vec::from(head);
            parts.push(consequent);
            CodeRep::seq(parts).with_flags(RepFlags::ENDS_WITH_MISSING_ELSE)
        }
    }
}

pub(super) fn labeled_statement(node: &LabeledStatement, body: CodeRep) -> CodeRep {
    CodeRep::seq(vec![token(node.label.as_str()), token(":"), space(), body])
}

pub(super) fn return_statement(_node: &ReturnStatement, expression: Option<CodeRep>) -> CodeRep {
    match expression {
        Some(expression) => {
            CodeRep::seq(vec![token("return"), space(), expression, CodeRep::semi_op()])
        }
        None => CodeRep::seq(vec![token("return"), CodeRep::semi_op()]),
    }
}

pub(super) fn switch_case(_node: &SwitchCase, test: CodeRep, consequent: Vec<CodeRep>) -> CodeRep {
    CodeRep::seq(vec![
        token("case"),
        space(),
        test,
        token(":"),
        CodeRep::indent(CodeRep::lines(consequent)),
    ])
}

pub(super) fn switch_default(_node: &SwitchDefault, consequent: Vec<CodeRep>) -> CodeRep {
    CodeRep::seq(vec![
        token("default"),
        token(":"),
        CodeRep::indent(CodeRep::lines(consequent)),
    ])
}

fn switch(discriminant: CodeRep, cases: Vec<CodeRep>) -> CodeRep {
    CodeRep::seq(vec![
        token("switch"),
        space(),
        CodeRep::paren(discriminant),
        space(),
        CodeRep::block(cases),
    ])
}

pub(super) fn switch_statement(
    _node: &SwitchStatement,
    discriminant: CodeRep,
    cases: Vec<CodeRep>,
) -> CodeRep {
    switch(discriminant, cases)
}

pub(super) fn switch_statement_with_default(
    _node: &SwitchStatementWithDefault,
    discriminant: CodeRep,
    pre_default_cases: Vec<CodeRep>,
    default_case: CodeRep,
    post_default_cases: Vec<CodeRep>,
) -> CodeRep {
    let mut cases = pre_default_cases;
    cases.push(default_case);
    cases.extend(post_default_cases);
    switch(discriminant, cases)
}

pub(super) fn throw_statement(_node: &ThrowStatement, expression: CodeRep) -> CodeRep {
    CodeRep::seq(vec![token("throw"), space(), expression, CodeRep::semi_op()])
}

pub(super) fn try_catch_statement(
    _node: &TryCatchStatement,
    body: CodeRep,
    catch_clause: CodeRep,
) -> CodeRep {
    CodeRep::seq(vec![token("try"), space(), body, space(), catch_clause])
}

pub(super) fn try_finally_statement(
    _node: &TryFinallyStatement,
    body: CodeRep,
    catch_clause: Option<CodeRep>,
    finalizer: CodeRep,
) -> CodeRep {
    let mut parts = vec![token("try"), space(), body];
    if let Some(catch_clause) = catch_clause {
        parts.extend([space(), catch_clause]);
    }
    parts.extend([space(), token("finally"), space(), finalizer]);
    CodeRep::seq(parts)
}

pub(super) fn catch_clause(_node: &CatchClause, binding: CodeRep, body: CodeRep) -> CodeRep {
    CodeRep::seq(vec![
        token("catch"),
        space(),
        CodeRep::paren(binding),
        space(),
        body,
    ])
}

pub(super) fn variable_declaration_statement(
    _node: &VariableDeclarationStatement,
    declaration: CodeRep,
) -> CodeRep {
    CodeRep::seq(vec![declaration, CodeRep::semi_op()])
}

pub(super) fn variable_declaration(node: &VariableDeclaration, declarators: Vec<CodeRep>) -> CodeRep {
    CodeRep::seq(vec![
        token(node.kind.as_str()),
        space(),
        CodeRep::comma_sep(declarators),
    ])
}

pub(super) fn variable_declarator(
    node: &VariableDeclarator,
    binding: CodeRep,
    init: Option<CodeRep>,
) -> CodeRep {
    match (&node.init, init) {
        (Some(expr), Some(init)) => CodeRep::seq(vec![
            binding,
            space(),
            token("="),
            space(),
            p(expr, Precedence::Assignment, init),
        ]),
        _ => binding,
    }
}

pub(super) fn while_statement(_node: &WhileStatement, test: CodeRep, body: CodeRep) -> CodeRep {
    CodeRep::seq(vec![
        token("while"),
        space(),
        CodeRep::paren(test),
        space(),
        body,
    ])
}

pub(super) fn with_statement(_node: &WithStatement, object: CodeRep, body: CodeRep) -> CodeRep {
    CodeRep::seq(vec![
        token("with"),
        space(),
        CodeRep::paren(object),
        space(),
        body,
    ])
}
