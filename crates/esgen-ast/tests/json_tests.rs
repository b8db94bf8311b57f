use crate::*;

const SCRIPT: &str = r#"{
  "type": "Script",
  "directives": [{ "rawValue": "use strict" }],
  "statements": [
    {
      "type": "VariableDeclarationStatement",
      "declaration": {
        "kind": "let",
        "declarators": [
          {
            "binding": { "type": "BindingIdentifier", "name": "x" },
            "init": {
              "type": "BinaryExpression",
              "left": { "type": "LiteralNumericExpression", "value": 1 },
              "operator": "+",
              "right": { "type": "LiteralInfinityExpression" }
            }
          }
        ]
      }
    },
    {
      "type": "ExpressionStatement",
      "expression": {
        "type": "CallExpression",
        "callee": { "type": "Super" },
        "arguments": [
          { "type": "SpreadElement", "expression": { "type": "IdentifierExpression", "name": "args" } },
          { "type": "ThisExpression" }
        ]
      }
    }
  ]
}"#;

#[test]
fn test_parse_script() {
    let program = Program::from_json(SCRIPT).expect("valid script JSON");
    assert!(!program.is_module());
    assert_eq!(program.kind_name(), "Script");

    let Program::Script(script) = &program else {
        panic!("expected a script");
    };
    assert_eq!(script.directives, vec![Directive::new("use strict")]);
    assert_eq!(script.statements.len(), 2);

    let Statement::VariableDeclarationStatement(decl) = &script.statements[0] else {
        panic!("expected a declaration, got {:?}", script.statements[0]);
    };
    assert_eq!(decl.declaration.kind, VariableDeclarationKind::Let);
    assert_eq!(
        decl.declaration.declarators[0].init,
        Some(Expression::binary(
            Expression::number(1.0),
            BinaryOperator::Plus,
            Expression::LiteralInfinityExpression,
        ))
    );
}

#[test]
fn test_untagged_fallbacks() {
    let program = Program::from_json(SCRIPT).expect("valid script JSON");
    let Program::Script(script) = &program else {
        panic!("expected a script");
    };
    let Statement::ExpressionStatement(stmt) = &script.statements[1] else {
        panic!("expected an expression statement");
    };
    let Expression::CallExpression(call) = &stmt.expression else {
        panic!("expected a call");
    };
    assert_eq!(call.callee, ExpressionSuper::Super);
    assert!(matches!(
        call.arguments[0],
        SpreadElementExpression::SpreadElement(_)
    ));
    assert_eq!(
        call.arguments[1],
        SpreadElementExpression::Expression(Expression::ThisExpression)
    );
}

#[test]
fn test_round_trip() {
    let program = Program::from_json(SCRIPT).expect("valid script JSON");
    let text = program.to_json().expect("serializable");
    assert_eq!(Program::from_json(&text).expect("reparse"), program);
}

#[test]
fn test_module_items() {
    let text = r#"{
      "type": "Module",
      "directives": [],
      "items": [
        {
          "type": "Import",
          "defaultBinding": { "name": "a" },
          "namedImports": [],
          "moduleSpecifier": "m"
        },
        {
          "type": "ExportDefault",
          "body": { "type": "IdentifierExpression", "name": "a" }
        },
        { "type": "EmptyStatement" }
      ]
    }"#;
    let program = Program::from_json(text).expect("valid module JSON");
    assert!(program.is_module());

    let Program::Module(module) = program else {
        panic!("expected a module");
    };
    assert!(matches!(&module.items[0], ModuleItem::Import(import) if import.module_specifier == "m"));
    assert_eq!(
        module.items[1],
        ModuleItem::ExportDefault(ExportDefault {
            body: ExportDefaultBody::Expression(Expression::identifier("a")),
        })
    );
    assert_eq!(module.items[2], ModuleItem::Statement(Statement::EmptyStatement));
}

#[test]
fn test_unknown_node_type_is_rejected() {
    let text = r#"{ "type": "Script", "directives": [], "statements": [{ "type": "Bogus" }] }"#;
    assert!(Program::from_json(text).is_err());
}

#[test]
fn test_program_conversions() {
    let script = Script::new(vec![Statement::expression(Expression::identifier("a"))]);
    let program = Program::from(script.clone());
    assert_eq!(program, Program::Script(script));
    assert_eq!(Program::from(Module::default()).kind_name(), "Module");
}
