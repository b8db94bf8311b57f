//! Integration tests for reference collection

use esgen_ast::{
    AssignmentTarget, BinaryOperator, CompoundAssignmentExpression, CompoundAssignmentOperator,
    Expression, Program, Script, SimpleAssignmentTarget, Statement, UpdateExpression,
    UpdateOperator, VariableDeclarationKind,
};
use esgen_scope::{
    Accessibility, ReferenceCollector, VariableReference, accessibility_of, references_by_name,
};

fn summarize(program: &Program) -> Vec<(String, Accessibility)> {
    ReferenceCollector::collect(program)
        .into_iter()
        .map(|r| (r.name().to_string(), r.accessibility))
        .collect()
}

#[test]
fn test_declaration_and_use() {
    // let a = b + 1; a = a;
    let program = Program::Script(Script::new(vec![
        Statement::declare(
            VariableDeclarationKind::Let,
            "a",
            Some(Expression::binary(
                Expression::identifier("b"),
                BinaryOperator::Plus,
                Expression::number(1.0),
            )),
        ),
        Statement::expression(Expression::assign("a", Expression::identifier("a"))),
    ]));

    assert_eq!(
        summarize(&program),
        vec![
            ("a".to_string(), Accessibility::Write),
            ("b".to_string(), Accessibility::Read),
            ("a".to_string(), Accessibility::Write),
            ("a".to_string(), Accessibility::Read),
        ]
    );
}

#[test]
fn test_compound_assignment_and_update_are_read_write() {
    // x += y; x++;
    let program = Program::Script(Script::new(vec![
        Statement::expression(Expression::CompoundAssignmentExpression(
            CompoundAssignmentExpression {
                binding: SimpleAssignmentTarget::identifier("x"),
                operator: CompoundAssignmentOperator::Plus,
                expression: Box::new(Expression::identifier("y")),
            },
        )),
        Statement::expression(Expression::UpdateExpression(UpdateExpression {
            is_prefix: false,
            operator: UpdateOperator::Increment,
            operand: SimpleAssignmentTarget::identifier("x"),
        })),
    ]));

    let references = ReferenceCollector::collect(&program);
    assert_eq!(references.len(), 3);
    assert_eq!(references[0].accessibility, Accessibility::ReadWrite);
    assert!(matches!(
        references[0].node,
        VariableReference::AssignmentTargetIdentifier(_)
    ));
    assert_eq!(references[1].name(), "y");
    assert_eq!(references[1].accessibility, Accessibility::Read);
    assert_eq!(references[2].accessibility, Accessibility::ReadWrite);
    assert_eq!(
        accessibility_of(&references, "x"),
        Some(Accessibility::ReadWrite)
    );
    assert_eq!(accessibility_of(&references, "missing"), None);
}

#[test]
fn test_member_targets_read_their_object() {
    // o.p = v;
    let program = Program::Script(Script::new(vec![Statement::expression(
        Expression::AssignmentExpression(esgen_ast::AssignmentExpression {
            binding: AssignmentTarget::Simple(
                SimpleAssignmentTarget::StaticMemberAssignmentTarget(
                    esgen_ast::StaticMemberAssignmentTarget {
                        object: esgen_ast::ExpressionSuper::Expression(Box::new(
                            Expression::identifier("o"),
                        )),
                        property: "p".to_string(),
                    },
                ),
            ),
            expression: Box::new(Expression::identifier("v")),
        }),
    )]));

    assert_eq!(
        summarize(&program),
        vec![
            ("o".to_string(), Accessibility::Read),
            ("v".to_string(), Accessibility::Read),
        ]
    );
}

#[test]
fn test_collect_from_json_module() {
    let json = r#"{
        "type": "Module",
        "directives": [],
        "items": [
            { "type": "Import", "defaultBinding": { "type": "BindingIdentifier", "name": "dflt" },
              "namedImports": [], "moduleSpecifier": "m" },
            { "type": "ExpressionStatement",
              "expression": { "type": "CallExpression",
                "callee": { "type": "IdentifierExpression", "name": "dflt" },
                "arguments": [] } }
        ]
    }"#;
    let program = Program::from_json(json).expect("valid module json");
    let references = ReferenceCollector::collect(&program);
    let grouped = references_by_name(&references);

    assert_eq!(grouped.len(), 1);
    let uses = &grouped["dflt"];
    assert_eq!(uses.len(), 2);
    assert_eq!(uses[0].accessibility, Accessibility::Write);
    assert_eq!(uses[1].accessibility, Accessibility::Read);
    assert_eq!(
        accessibility_of(&references, "dflt"),
        Some(Accessibility::ReadWrite)
    );
}
