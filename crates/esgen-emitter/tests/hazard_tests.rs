//! Output that would re-parse differently without parentheses, braces or
//! separating spaces.

use esgen_ast::{
    AssignmentExpression, AssignmentTarget, AssignmentTargetIdentifier, AssignmentTargetProperty,
    AssignmentTargetPropertyIdentifier, ArrowBody, ArrowExpression, BinaryOperator, BindingIdentifier,
    ClassExpression, ComputedMemberAssignmentTarget, ExportDefault, ExportDefaultBody, Expression,
    ExpressionSuper, ForBinding, ForInStatement, ForOfStatement, FormalParameters, FunctionBody,
    FunctionDeclaration, Module, ModuleItem, ObjectAssignmentTarget, Program, Script,
    SimpleAssignmentTarget, Statement, UnaryExpression, UnaryOperator, WhileStatement,
};
use esgen_emitter::{compact, pretty, web_safe};

fn ident(name: &str) -> Expression {
    Expression::identifier(name)
}

fn render(statement: Statement) -> String {
    compact(&Program::Script(Script::new(vec![statement])))
}

fn render_expr(expression: Expression) -> String {
    render(Statement::expression(expression))
}

fn render_module(item: ModuleItem) -> String {
    compact(&Program::Module(Module::new(vec![item])))
}

fn let_member_target(property: &str) -> SimpleAssignmentTarget {
    SimpleAssignmentTarget::ComputedMemberAssignmentTarget(ComputedMemberAssignmentTarget {
        object: ExpressionSuper::Expression(Box::new(ident("let"))),
        expression: Box::new(ident(property)),
    })
}

fn unary(operator: UnaryOperator, operand: Expression) -> Expression {
    Expression::UnaryExpression(UnaryExpression {
        operator,
        operand: Box::new(operand),
    })
}

#[test]
fn test_object_pattern_assignment_statement() {
    let target = AssignmentTarget::ObjectAssignmentTarget(ObjectAssignmentTarget {
        properties: vec![AssignmentTargetProperty::AssignmentTargetPropertyIdentifier(
            AssignmentTargetPropertyIdentifier {
                binding: AssignmentTargetIdentifier { name: "a".into() },
                init: None,
            },
        )],
    });
    let assignment = Expression::AssignmentExpression(AssignmentExpression {
        binding: target,
        expression: Box::new(ident("b")),
    });
    assert_eq!(render_expr(assignment), "({a}=b);");
}

#[test]
fn test_object_and_class_expression_statements() {
    assert_eq!(render_expr(Expression::object(Vec::new())), "({});");
    let class = Expression::ClassExpression(ClassExpression {
        name: None,
        super_class: None,
        elements: Vec::new(),
    });
    assert_eq!(render_expr(class), "(class{});");
}

#[test]
fn test_immediately_invoked_function() {
    let iife = Expression::call(Expression::function(Vec::new()), Vec::new());
    assert_eq!(render_expr(iife), "(function(){}());");

    // not at statement start
    let assigned = Expression::assign("x", Expression::function(Vec::new()));
    assert_eq!(render_expr(assigned), "x=function(){};");
}

#[test]
fn test_let_square_bracket_at_statement_start() {
    let assignment = Expression::AssignmentExpression(AssignmentExpression {
        binding: AssignmentTarget::Simple(let_member_target("a")),
        expression: Box::new(Expression::number(1.0)),
    });
    assert_eq!(render_expr(assignment), "(let[a]=1);");
    assert_eq!(
        render_expr(Expression::computed_member(ident("let"), ident("a"))),
        "(let[a]);"
    );

    // plain `let` and `let.x` are unambiguous
    assert_eq!(render_expr(ident("let")), "let;");
    assert_eq!(render_expr(Expression::member(ident("let"), "x")), "let.x;");
}

#[test]
fn test_for_heads_starting_with_let() {
    let for_of = Statement::ForOfStatement(ForOfStatement {
        left: ForBinding::AssignmentTarget(AssignmentTarget::Simple(
            SimpleAssignmentTarget::identifier("let"),
        )),
        right: ident("x"),
        body: Box::new(Statement::EmptyStatement),
    });
    assert_eq!(render(for_of), "for((let)of x);");

    let for_in = Statement::ForInStatement(ForInStatement {
        left: ForBinding::AssignmentTarget(AssignmentTarget::Simple(let_member_target("a"))),
        right: ident("x"),
        body: Box::new(Statement::EmptyStatement),
    });
    assert_eq!(render(for_in), "for((let[a])in x);");

    let plain = Statement::ForInStatement(ForInStatement {
        left: ForBinding::AssignmentTarget(AssignmentTarget::Simple(
            SimpleAssignmentTarget::identifier("let"),
        )),
        right: ident("x"),
        body: Box::new(Statement::EmptyStatement),
    });
    assert_eq!(render(plain), "for(let in x);");
}

#[test]
fn test_dangling_else() {
    let inner = Statement::if_else(ident("b"), Statement::expression(ident("c")), None);
    let outer = Statement::if_else(
        ident("a"),
        inner.clone(),
        Some(Statement::expression(ident("d"))),
    );
    assert_eq!(render(outer), "if(a){if(b)c}else d;");

    // the missing else can hide at the end of a loop body
    let loop_stmt = Statement::WhileStatement(WhileStatement {
        test: ident("x"),
        body: Box::new(inner),
    });
    let outer = Statement::if_else(ident("a"), loop_stmt, Some(Statement::expression(ident("d"))));
    assert_eq!(render(outer), "if(a){while(x)if(b)c}else d;");

    // a complete inner if needs no braces
    let complete = Statement::if_else(
        ident("b"),
        Statement::expression(ident("c")),
        Some(Statement::expression(ident("e"))),
    );
    let outer = Statement::if_else(ident("a"), complete, Some(Statement::expression(ident("d"))));
    assert_eq!(render(outer), "if(a)if(b)c;else e;else d;");
}

#[test]
fn test_arrow_returning_object() {
    let arrow = Expression::ArrowExpression(ArrowExpression {
        is_async: false,
        params: FormalParameters::default(),
        body: ArrowBody::Expression(Box::new(Expression::object(Vec::new()))),
    });
    assert_eq!(render_expr(arrow), "()=>({});");
}

#[test]
fn test_export_default() {
    let function = ModuleItem::ExportDefault(ExportDefault {
        body: ExportDefaultBody::Expression(Expression::function(Vec::new())),
    });
    assert_eq!(render_module(function), "export default(function(){});");

    let value = ModuleItem::ExportDefault(ExportDefault {
        body: ExportDefaultBody::Expression(Expression::number(1.0)),
    });
    assert_eq!(render_module(value), "export default 1;");

    let anonymous = ModuleItem::ExportDefault(ExportDefault {
        body: ExportDefaultBody::FunctionDeclaration(FunctionDeclaration {
            is_async: false,
            is_generator: false,
            name: BindingIdentifier {
                name: esgen_emitter::codegen::DEFAULT_EXPORT_NAME.into(),
            },
            params: FormalParameters::default(),
            body: FunctionBody::default(),
        }),
    });
    assert_eq!(render_module(anonymous), "export default function(){}");
}

#[test]
fn test_new_callee_with_call() {
    let callee = Expression::member(Expression::call(ident("f"), Vec::new()), "g");
    assert_eq!(
        render_expr(Expression::new_expr(callee.clone(), Vec::new())),
        "new(f().g);"
    );
    assert_eq!(
        render_expr(Expression::new_expr(callee, vec![ident("x")])),
        "new(f().g)(x);"
    );
    assert_eq!(
        render_expr(Expression::new_expr(Expression::member(ident("a"), "b"), Vec::new())),
        "new a.b;"
    );
}

#[test]
fn test_token_merging() {
    let plus = Expression::binary(ident("a"), BinaryOperator::Plus, unary(UnaryOperator::Plus, ident("b")));
    assert_eq!(render_expr(plus), "a+ +b;");

    let minus = Expression::binary(ident("a"), BinaryOperator::Minus, unary(UnaryOperator::Minus, ident("b")));
    assert_eq!(render_expr(minus), "a- -b;");

    let html_comment = Expression::binary(ident("a"), BinaryOperator::LessThan, unary(UnaryOperator::LogicalNot, ident("b")));
    assert_eq!(render_expr(html_comment), "a< !b;");

    let regexp_in = Expression::binary(Expression::regexp("a", ""), BinaryOperator::In, ident("x"));
    assert_eq!(render_expr(regexp_in), "/a/ in x;");

    assert_eq!(render_expr(unary(UnaryOperator::Typeof, ident("a"))), "typeof a;");
    assert_eq!(render_expr(unary(UnaryOperator::LogicalNot, ident("a"))), "!a;");
}

fn tagged(tag: Expression) -> Expression {
    Expression::tagged_template(tag, &["a"], Vec::new())
}

fn render_web_safe(expression: Expression) -> String {
    web_safe(&Program::Script(Script::new(vec![Statement::expression(expression)])))
}

#[test]
fn test_tagged_template_inherits_tag_hazards() {
    let function_tag = tagged(Expression::function(Vec::new()));
    assert_eq!(render_expr(function_tag.clone()), "(function(){}`a`);");
    assert_eq!(render_web_safe(function_tag), "(function(){}`a`);");

    let let_tag = tagged(Expression::computed_member(ident("let"), ident("a")));
    assert_eq!(render_expr(let_tag.clone()), "(let[a]`a`);");
    assert_eq!(render_web_safe(let_tag), "(let[a]`a`);");

    // an object-literal tag starts with `{`
    let object_tag = tagged(Expression::object(Vec::new()));
    assert_eq!(render_expr(object_tag.clone()), "({}`a`);");
    assert_eq!(render_web_safe(object_tag), "({}`a`);");
}

#[test]
fn test_tagged_template_parenthesizes_low_precedence_tag() {
    let new_tag = tagged(Expression::new_expr(ident("X"), Vec::new()));
    assert_eq!(render_expr(new_tag.clone()), "(new X)`a`;");
    assert_eq!(render_web_safe(new_tag.clone()), "(new X)`a`;");
    let program = Program::Script(Script::new(vec![Statement::expression(new_tag)]));
    assert_eq!(pretty(&program), "(new X)`a`;\n");

    let sum_tag = tagged(Expression::binary(ident("a"), BinaryOperator::Plus, ident("b")));
    assert_eq!(render_expr(sum_tag), "(a+b)`a`;");

    // call and member tags need no parentheses
    let call_tag = tagged(Expression::call(ident("f"), Vec::new()));
    assert_eq!(render_expr(call_tag), "f()`a`;");
    let member_tag = tagged(Expression::member(ident("a"), "b"));
    assert_eq!(render_web_safe(member_tag), "a.b`a`;");
}
