//! Bottom-up tree walk.
//!
//! Each function reduces the children of one node category, in source order,
//! and hands the fragments to the matching `CodeGen` hook. The walk itself
//! never decides how anything is rendered.

use esgen_ast::{
    ArrowBody, ArrowExpression, AssignmentTarget, AssignmentTargetMaybeDefault,
    AssignmentTargetProperty, Binding, BindingProperty, Block, CatchClause, ClassDeclaration,
    ClassElement, Directive, ExportDeclaration, ExportDefaultBody, Expression, ExpressionSuper,
    ForBinding, ForInit, FormalParameters, FunctionBody, FunctionDeclaration, MethodDefinition,
    Module, ModuleItem, ObjectProperty, Parameter, Program, PropertyName, Script,
    SimpleAssignmentTarget, SpreadElementExpression, Statement, SwitchCase, TemplateItem,
    VariableDeclaration,
};

use super::CodeGen;
use crate::code_rep::CodeRep;

pub fn program<G: CodeGen + ?Sized>(g: &G, node: &Program) -> CodeRep {
    match node {
        Program::Script(node) => script(g, node),
        Program::Module(node) => module(g, node),
    }
}

pub fn script<G: CodeGen + ?Sized>(g: &G, node: &Script) -> CodeRep {
    let directives = directives(g, &node.directives);
    let statements = statements(g, &node.statements);
    g.reduce_script(node, directives, statements)
}

pub fn module<G: CodeGen + ?Sized>(g: &G, node: &Module) -> CodeRep {
    let directives = directives(g, &node.directives);
    let items = node.items.iter().map(|item| module_item(g, item)).collect();
    g.reduce_module(node, directives, items)
}

fn directives<G: CodeGen + ?Sized>(g: &G, nodes: &[Directive]) -> Vec<CodeRep> {
    nodes.iter().map(|node| g.reduce_directive(node)).collect()
}

fn statements<G: CodeGen + ?Sized>(g: &G, nodes: &[Statement]) -> Vec<CodeRep> {
    nodes.iter().map(|node| statement(g, node)).collect()
}

fn expressions<G: CodeGen + ?Sized>(g: &G, nodes: &[SpreadElementExpression]) -> Vec<CodeRep> {
    nodes
        .iter()
        .map(|node| spread_element_expression(g, node))
        .collect()
}

// =============================================================================
// Modules
// =============================================================================

fn module_item<G: CodeGen + ?Sized>(g: &G, node: &ModuleItem) -> CodeRep {
    match node {
        ModuleItem::Import(node) => {
            let default_binding = node
                .default_binding
                .as_ref()
                .map(|binding| g.reduce_binding_identifier(binding));
            let named_imports = node
                .named_imports
                .iter()
                .map(|specifier| {
                    let binding = g.reduce_binding_identifier(&specifier.binding);
                    g.reduce_import_specifier(specifier, binding)
                })
                .collect();
            g.reduce_import(node, default_binding, named_imports)
        }
        ModuleItem::ImportNamespace(node) => {
            let default_binding = node
                .default_binding
                .as_ref()
                .map(|binding| g.reduce_binding_identifier(binding));
            let namespace_binding = g.reduce_binding_identifier(&node.namespace_binding);
            g.reduce_import_namespace(node, default_binding, namespace_binding)
        }
        ModuleItem::Export(node) => {
            let declaration = match &node.declaration {
                ExportDeclaration::FunctionDeclaration(decl) => function_declaration(g, decl),
                ExportDeclaration::ClassDeclaration(decl) => class_declaration(g, decl),
                ExportDeclaration::VariableDeclaration(decl) => variable_declaration(g, decl),
            };
            g.reduce_export(node, declaration)
        }
        ModuleItem::ExportAllFrom(node) => g.reduce_export_all_from(node),
        ModuleItem::ExportFrom(node) => {
            let named_exports = node
                .named_exports
                .iter()
                .map(|specifier| g.reduce_export_from_specifier(specifier))
                .collect();
            g.reduce_export_from(node, named_exports)
        }
        ModuleItem::ExportLocals(node) => {
            let named_exports = node
                .named_exports
                .iter()
                .map(|specifier| {
                    let name = g.reduce_identifier_expression(&specifier.name);
                    g.reduce_export_local_specifier(specifier, name)
                })
                .collect();
            g.reduce_export_locals(node, named_exports)
        }
        ModuleItem::ExportDefault(node) => {
            let body = match &node.body {
                ExportDefaultBody::FunctionDeclaration(decl) => function_declaration(g, decl),
                ExportDefaultBody::ClassDeclaration(decl) => class_declaration(g, decl),
                ExportDefaultBody::Expression(expr) => expression(g, expr),
            };
            g.reduce_export_default(node, body)
        }
        ModuleItem::Statement(node) => statement(g, node),
    }
}

// =============================================================================
// Statements
// =============================================================================

pub fn statement<G: CodeGen + ?Sized>(g: &G, node: &Statement) -> CodeRep {
    match node {
        Statement::BlockStatement(node) => {
            let block = block(g, &node.block);
            g.reduce_block_statement(node, block)
        }
        Statement::BreakStatement(node) => g.reduce_break_statement(node),
        Statement::ContinueStatement(node) => g.reduce_continue_statement(node),
        Statement::DebuggerStatement => g.reduce_debugger_statement(),
        Statement::DoWhileStatement(node) => {
            let body = statement(g, &node.body);
            let test = expression(g, &node.test);
            g.reduce_do_while_statement(node, body, test)
        }
        Statement::EmptyStatement => g.reduce_empty_statement(),
        Statement::ExpressionStatement(node) => {
            let expr = expression(g, &node.expression);
            g.reduce_expression_statement(node, expr)
        }
        Statement::ForInStatement(node) => {
            let left = for_binding(g, &node.left);
            let right = expression(g, &node.right);
            let body = statement(g, &node.body);
            g.reduce_for_in_statement(node, left, right, body)
        }
        Statement::ForOfStatement(node) => {
            let left = for_binding(g, &node.left);
            let right = expression(g, &node.right);
            let body = statement(g, &node.body);
            g.reduce_for_of_statement(node, left, right, body)
        }
        Statement::ForStatement(node) => {
            let init = node.init.as_ref().map(|init| match init {
                ForInit::VariableDeclaration(decl) => variable_declaration(g, decl),
                ForInit::Expression(expr) => expression(g, expr),
            });
            let test = node.test.as_ref().map(|test| expression(g, test));
            let update = node.update.as_ref().map(|update| expression(g, update));
            let body = statement(g, &node.body);
            g.reduce_for_statement(node, init, test, update, body)
        }
        Statement::IfStatement(node) => {
            let test = expression(g, &node.test);
            let consequent = statement(g, &node.consequent);
            let alternate = node.alternate.as_deref().map(|alt| statement(g, alt));
            g.reduce_if_statement(node, test, consequent, alternate)
        }
        Statement::LabeledStatement(node) => {
            let body = statement(g, &node.body);
            g.reduce_labeled_statement(node, body)
        }
        Statement::ReturnStatement(node) => {
            let expr = node.expression.as_ref().map(|expr| expression(g, expr));
            g.reduce_return_statement(node, expr)
        }
        Statement::SwitchStatement(node) => {
            let discriminant = expression(g, &node.discriminant);
            let cases = switch_cases(g, &node.cases);
            g.reduce_switch_statement(node, discriminant, cases)
        }
        Statement::SwitchStatementWithDefault(node) => {
            let discriminant = expression(g, &node.discriminant);
            let pre_default_cases = switch_cases(g, &node.pre_default_cases);
            let default_consequent = statements(g, &node.default_case.consequent);
            let default_case = g.reduce_switch_default(&node.default_case, default_consequent);
            let post_default_cases = switch_cases(g, &node.post_default_cases);
            g.reduce_switch_statement_with_default(
                node,
                discriminant,
                pre_default_cases,
                default_case,
                post_default_cases,
            )
        }
        Statement::ThrowStatement(node) => {
            let expr = expression(g, &node.expression);
            g.reduce_throw_statement(node, expr)
        }
        Statement::TryCatchStatement(node) => {
            let body = block(g, &node.body);
            let catch = catch_clause(g, &node.catch_clause);
            g.reduce_try_catch_statement(node, body, catch)
        }
        Statement::TryFinallyStatement(node) => {
            let body = block(g, &node.body);
            let catch = node.catch_clause.as_ref().map(|clause| catch_clause(g, clause));
            let finalizer = block(g, &node.finalizer);
            g.reduce_try_finally_statement(node, body, catch, finalizer)
        }
        Statement::VariableDeclarationStatement(node) => {
            let declaration = variable_declaration(g, &node.declaration);
            g.reduce_variable_declaration_statement(node, declaration)
        }
        Statement::WhileStatement(node) => {
            let test = expression(g, &node.test);
            let body = statement(g, &node.body);
            g.reduce_while_statement(node, test, body)
        }
        Statement::WithStatement(node) => {
            let object = expression(g, &node.object);
            let body = statement(g, &node.body);
            g.reduce_with_statement(node, object, body)
        }
        Statement::FunctionDeclaration(node) => function_declaration(g, node),
        Statement::ClassDeclaration(node) => class_declaration(g, node),
    }
}

fn block<G: CodeGen + ?Sized>(g: &G, node: &Block) -> CodeRep {
    let statements = statements(g, &node.statements);
    g.reduce_block(node, statements)
}

fn switch_cases<G: CodeGen + ?Sized>(g: &G, nodes: &[SwitchCase]) -> Vec<CodeRep> {
    nodes
        .iter()
        .map(|case| {
            let test = expression(g, &case.test);
            let consequent = statements(g, &case.consequent);
            g.reduce_switch_case(case, test, consequent)
        })
        .collect()
}

fn catch_clause<G: CodeGen + ?Sized>(g: &G, node: &CatchClause) -> CodeRep {
    let param = binding(g, &node.binding);
    let body = block(g, &node.body);
    g.reduce_catch_clause(node, param, body)
}

fn variable_declaration<G: CodeGen + ?Sized>(g: &G, node: &VariableDeclaration) -> CodeRep {
    let declarators = node
        .declarators
        .iter()
        .map(|declarator| {
            let target = binding(g, &declarator.binding);
            let init = declarator.init.as_ref().map(|init| expression(g, init));
            g.reduce_variable_declarator(declarator, target, init)
        })
        .collect();
    g.reduce_variable_declaration(node, declarators)
}

fn for_binding<G: CodeGen + ?Sized>(g: &G, node: &ForBinding) -> CodeRep {
    match node {
        ForBinding::VariableDeclaration(decl) => variable_declaration(g, decl),
        ForBinding::AssignmentTarget(target) => assignment_target(g, target),
    }
}

// =============================================================================
// Functions and classes
// =============================================================================

fn function_declaration<G: CodeGen + ?Sized>(g: &G, node: &FunctionDeclaration) -> CodeRep {
    let name = g.reduce_binding_identifier(&node.name);
    let params = formal_parameters(g, &node.params);
    let body = function_body(g, &node.body);
    g.reduce_function_declaration(node, name, params, body)
}

fn class_declaration<G: CodeGen + ?Sized>(g: &G, node: &ClassDeclaration) -> CodeRep {
    let name = g.reduce_binding_identifier(&node.name);
    let super_class = node.super_class.as_deref().map(|expr| expression(g, expr));
    let elements = class_elements(g, &node.elements);
    g.reduce_class_declaration(node, name, super_class, elements)
}

fn class_elements<G: CodeGen + ?Sized>(g: &G, nodes: &[ClassElement]) -> Vec<CodeRep> {
    nodes
        .iter()
        .map(|element| {
            let method = method_definition(g, &element.method);
            g.reduce_class_element(element, method)
        })
        .collect()
}

fn method_definition<G: CodeGen + ?Sized>(g: &G, node: &MethodDefinition) -> CodeRep {
    match node {
        MethodDefinition::Method(node) => {
            let name = property_name(g, &node.name);
            let params = formal_parameters(g, &node.params);
            let body = function_body(g, &node.body);
            g.reduce_method(node, name, params, body)
        }
        MethodDefinition::Getter(node) => {
            let name = property_name(g, &node.name);
            let body = function_body(g, &node.body);
            g.reduce_getter(node, name, body)
        }
        MethodDefinition::Setter(node) => {
            let name = property_name(g, &node.name);
            let param = parameter(g, &node.param);
            let body = function_body(g, &node.body);
            g.reduce_setter(node, name, param, body)
        }
    }
}

fn formal_parameters<G: CodeGen + ?Sized>(g: &G, node: &FormalParameters) -> CodeRep {
    let items = node.items.iter().map(|item| parameter(g, item)).collect();
    let rest = node.rest.as_ref().map(|rest| binding(g, rest));
    g.reduce_formal_parameters(node, items, rest)
}

fn function_body<G: CodeGen + ?Sized>(g: &G, node: &FunctionBody) -> CodeRep {
    let directives = directives(g, &node.directives);
    let statements = statements(g, &node.statements);
    g.reduce_function_body(node, directives, statements)
}

/// A single plain identifier parameter is reduced on its own so the arrow
/// can be written without parentheses.
fn arrow_parameters<G: CodeGen + ?Sized>(g: &G, node: &ArrowExpression) -> CodeRep {
    match (node.params.items.as_slice(), &node.params.rest) {
        ([Parameter::Binding(Binding::BindingIdentifier(id))], None) => {
            g.reduce_binding_identifier(id)
        }
        _ => formal_parameters(g, &node.params),
    }
}

// =============================================================================
// Expressions
// =============================================================================

pub fn expression<G: CodeGen + ?Sized>(g: &G, node: &Expression) -> CodeRep {
    match node {
        Expression::ArrayExpression(node) => {
            let elements = node
                .elements
                .iter()
                .map(|element| {
                    element
                        .as_ref()
                        .map(|element| spread_element_expression(g, element))
                })
                .collect();
            g.reduce_array_expression(node, elements)
        }
        Expression::ArrowExpression(node) => {
            let params = arrow_parameters(g, node);
            let body = match &node.body {
                ArrowBody::FunctionBody(body) => function_body(g, body),
                ArrowBody::Expression(expr) => expression(g, expr),
            };
            g.reduce_arrow_expression(node, params, body)
        }
        Expression::AssignmentExpression(node) => {
            let target = assignment_target(g, &node.binding);
            let expr = expression(g, &node.expression);
            g.reduce_assignment_expression(node, target, expr)
        }
        Expression::AwaitExpression(node) => {
            let expr = expression(g, &node.expression);
            g.reduce_await_expression(node, expr)
        }
        Expression::BinaryExpression(node) => {
            let left = expression(g, &node.left);
            let right = expression(g, &node.right);
            g.reduce_binary_expression(node, left, right)
        }
        Expression::CallExpression(node) => {
            let callee = expression_super(g, &node.callee);
            let arguments = expressions(g, &node.arguments);
            g.reduce_call_expression(node, callee, arguments)
        }
        Expression::ClassExpression(node) => {
            let name = node
                .name
                .as_ref()
                .map(|name| g.reduce_binding_identifier(name));
            let super_class = node.super_class.as_deref().map(|expr| expression(g, expr));
            let elements = class_elements(g, &node.elements);
            g.reduce_class_expression(node, name, super_class, elements)
        }
        Expression::CompoundAssignmentExpression(node) => {
            let target = simple_assignment_target(g, &node.binding);
            let expr = expression(g, &node.expression);
            g.reduce_compound_assignment_expression(node, target, expr)
        }
        Expression::ComputedMemberExpression(node) => {
            let object = expression_super(g, &node.object);
            let expr = expression(g, &node.expression);
            g.reduce_computed_member_expression(node, object, expr)
        }
        Expression::ConditionalExpression(node) => {
            let test = expression(g, &node.test);
            let consequent = expression(g, &node.consequent);
            let alternate = expression(g, &node.alternate);
            g.reduce_conditional_expression(node, test, consequent, alternate)
        }
        Expression::FunctionExpression(node) => {
            let name = node
                .name
                .as_ref()
                .map(|name| g.reduce_binding_identifier(name));
            let params = formal_parameters(g, &node.params);
            let body = function_body(g, &node.body);
            g.reduce_function_expression(node, name, params, body)
        }
        Expression::IdentifierExpression(node) => g.reduce_identifier_expression(node),
        Expression::LiteralBooleanExpression(node) => g.reduce_literal_boolean_expression(node),
        Expression::LiteralInfinityExpression => g.reduce_literal_infinity_expression(),
        Expression::LiteralNullExpression => g.reduce_literal_null_expression(),
        Expression::LiteralNumericExpression(node) => g.reduce_literal_numeric_expression(node),
        Expression::LiteralRegExpExpression(node) => g.reduce_literal_regexp_expression(node),
        Expression::LiteralStringExpression(node) => g.reduce_literal_string_expression(node),
        Expression::NewExpression(node) => {
            let callee = expression(g, &node.callee);
            let arguments = expressions(g, &node.arguments);
            g.reduce_new_expression(node, callee, arguments)
        }
        Expression::NewTargetExpression => g.reduce_new_target_expression(),
        Expression::ObjectExpression(node) => {
            let properties = node
                .properties
                .iter()
                .map(|property| object_property(g, property))
                .collect();
            g.reduce_object_expression(node, properties)
        }
        Expression::StaticMemberExpression(node) => {
            let object = expression_super(g, &node.object);
            g.reduce_static_member_expression(node, object)
        }
        Expression::TemplateExpression(node) => {
            let tag = node.tag.as_deref().map(|tag| expression(g, tag));
            let elements = node
                .elements
                .iter()
                .map(|item| match item {
                    TemplateItem::TemplateElement(_) => None,
                    TemplateItem::Expression(expr) => Some(expression(g, expr)),
                })
                .collect();
            g.reduce_template_expression(node, tag, elements)
        }
        Expression::ThisExpression => g.reduce_this_expression(),
        Expression::UnaryExpression(node) => {
            let operand = expression(g, &node.operand);
            g.reduce_unary_expression(node, operand)
        }
        Expression::UpdateExpression(node) => {
            let operand = simple_assignment_target(g, &node.operand);
            g.reduce_update_expression(node, operand)
        }
        Expression::YieldExpression(node) => {
            let expr = node.expression.as_deref().map(|expr| expression(g, expr));
            g.reduce_yield_expression(node, expr)
        }
        Expression::YieldGeneratorExpression(node) => {
            let expr = expression(g, &node.expression);
            g.reduce_yield_generator_expression(node, expr)
        }
    }
}

fn expression_super<G: CodeGen + ?Sized>(g: &G, node: &ExpressionSuper) -> CodeRep {
    match node {
        ExpressionSuper::Super => g.reduce_super(),
        ExpressionSuper::Expression(expr) => expression(g, expr),
    }
}

fn spread_element_expression<G: CodeGen + ?Sized>(
    g: &G,
    node: &SpreadElementExpression,
) -> CodeRep {
    match node {
        SpreadElementExpression::SpreadElement(spread) => {
            let expr = expression(g, &spread.expression);
            g.reduce_spread_element(spread, expr)
        }
        SpreadElementExpression::Expression(expr) => expression(g, expr),
    }
}

fn object_property<G: CodeGen + ?Sized>(g: &G, node: &ObjectProperty) -> CodeRep {
    match node {
        ObjectProperty::DataProperty(node) => {
            let name = property_name(g, &node.name);
            let expr = expression(g, &node.expression);
            g.reduce_data_property(node, name, expr)
        }
        ObjectProperty::ShorthandProperty(node) => {
            let name = g.reduce_identifier_expression(&node.name);
            g.reduce_shorthand_property(node, name)
        }
        ObjectProperty::Method(node) => {
            let name = property_name(g, &node.name);
            let params = formal_parameters(g, &node.params);
            let body = function_body(g, &node.body);
            g.reduce_method(node, name, params, body)
        }
        ObjectProperty::Getter(node) => {
            let name = property_name(g, &node.name);
            let body = function_body(g, &node.body);
            g.reduce_getter(node, name, body)
        }
        ObjectProperty::Setter(node) => {
            let name = property_name(g, &node.name);
            let param = parameter(g, &node.param);
            let body = function_body(g, &node.body);
            g.reduce_setter(node, name, param, body)
        }
    }
}

fn property_name<G: CodeGen + ?Sized>(g: &G, node: &PropertyName) -> CodeRep {
    match node {
        PropertyName::StaticPropertyName(node) => g.reduce_static_property_name(node),
        PropertyName::ComputedPropertyName(node) => {
            let expr = expression(g, &node.expression);
            g.reduce_computed_property_name(node, expr)
        }
    }
}

// =============================================================================
// Bindings and assignment targets
// =============================================================================

fn binding<G: CodeGen + ?Sized>(g: &G, node: &Binding) -> CodeRep {
    match node {
        Binding::BindingIdentifier(node) => g.reduce_binding_identifier(node),
        Binding::ArrayBinding(node) => {
            let elements = node
                .elements
                .iter()
                .map(|element| element.as_ref().map(|element| parameter(g, element)))
                .collect();
            let rest = node.rest.as_deref().map(|rest| binding(g, rest));
            g.reduce_array_binding(node, elements, rest)
        }
        Binding::ObjectBinding(node) => {
            let properties = node
                .properties
                .iter()
                .map(|property| binding_property(g, property))
                .collect();
            g.reduce_object_binding(node, properties)
        }
    }
}

fn parameter<G: CodeGen + ?Sized>(g: &G, node: &Parameter) -> CodeRep {
    match node {
        Parameter::BindingWithDefault(node) => {
            let target = binding(g, &node.binding);
            let init = expression(g, &node.init);
            g.reduce_binding_with_default(node, target, init)
        }
        Parameter::Binding(node) => binding(g, node),
    }
}

fn binding_property<G: CodeGen + ?Sized>(g: &G, node: &BindingProperty) -> CodeRep {
    match node {
        BindingProperty::BindingPropertyIdentifier(node) => {
            let target = g.reduce_binding_identifier(&node.binding);
            let init = node.init.as_ref().map(|init| expression(g, init));
            g.reduce_binding_property_identifier(node, target, init)
        }
        BindingProperty::BindingPropertyProperty(node) => {
            let name = property_name(g, &node.name);
            let target = parameter(g, &node.binding);
            g.reduce_binding_property_property(node, name, target)
        }
    }
}

fn assignment_target<G: CodeGen + ?Sized>(g: &G, node: &AssignmentTarget) -> CodeRep {
    match node {
        AssignmentTarget::ArrayAssignmentTarget(node) => {
            let elements = node
                .elements
                .iter()
                .map(|element| {
                    element
                        .as_ref()
                        .map(|element| assignment_target_maybe_default(g, element))
                })
                .collect();
            let rest = node.rest.as_deref().map(|rest| assignment_target(g, rest));
            g.reduce_array_assignment_target(node, elements, rest)
        }
        AssignmentTarget::ObjectAssignmentTarget(node) => {
            let properties = node
                .properties
                .iter()
                .map(|property| assignment_target_property(g, property))
                .collect();
            g.reduce_object_assignment_target(node, properties)
        }
        AssignmentTarget::Simple(node) => simple_assignment_target(g, node),
    }
}

fn simple_assignment_target<G: CodeGen + ?Sized>(g: &G, node: &SimpleAssignmentTarget) -> CodeRep {
    match node {
        SimpleAssignmentTarget::AssignmentTargetIdentifier(node) => {
            g.reduce_assignment_target_identifier(node)
        }
        SimpleAssignmentTarget::StaticMemberAssignmentTarget(node) => {
            let object = expression_super(g, &node.object);
            g.reduce_static_member_assignment_target(node, object)
        }
        SimpleAssignmentTarget::ComputedMemberAssignmentTarget(node) => {
            let object = expression_super(g, &node.object);
            let expr = expression(g, &node.expression);
            g.reduce_computed_member_assignment_target(node, object, expr)
        }
    }
}

fn assignment_target_maybe_default<G: CodeGen + ?Sized>(
    g: &G,
    node: &AssignmentTargetMaybeDefault,
) -> CodeRep {
    match node {
        AssignmentTargetMaybeDefault::AssignmentTargetWithDefault(node) => {
            let target = assignment_target(g, &node.binding);
            let init = expression(g, &node.init);
            g.reduce_assignment_target_with_default(node, target, init)
        }
        AssignmentTargetMaybeDefault::AssignmentTarget(node) => assignment_target(g, node),
    }
}

fn assignment_target_property<G: CodeGen + ?Sized>(
    g: &G,
    node: &AssignmentTargetProperty,
) -> CodeRep {
    match node {
        AssignmentTargetProperty::AssignmentTargetPropertyIdentifier(node) => {
            let target = g.reduce_assignment_target_identifier(&node.binding);
            let init = node.init.as_ref().map(|init| expression(g, init));
            g.reduce_assignment_target_property_identifier(node, target, init)
        }
        AssignmentTargetProperty::AssignmentTargetPropertyProperty(node) => {
            let name = property_name(g, &node.name);
            let target = assignment_target_maybe_default(g, &node.binding);
            g.reduce_assignment_target_property_property(node, name, target)
        }
    }
}
