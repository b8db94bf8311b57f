//! Read-only AST traversal.
//!
//! Implementors override the `visit_*` methods they care about and call the
//! matching `walk_*` function to continue into children. Children are
//! visited in source order.

use crate::node::*;

pub trait Visit<'ast> {
    fn visit_program(&mut self, node: &'ast Program) {
        walk_program(self, node);
    }

    fn visit_script(&mut self, node: &'ast Script) {
        walk_script(self, node);
    }

    fn visit_module(&mut self, node: &'ast Module) {
        walk_module(self, node);
    }

    fn visit_module_item(&mut self, node: &'ast ModuleItem) {
        walk_module_item(self, node);
    }

    fn visit_directive(&mut self, _node: &'ast Directive) {}

    fn visit_statement(&mut self, node: &'ast Statement) {
        walk_statement(self, node);
    }

    fn visit_block(&mut self, node: &'ast Block) {
        for stmt in &node.statements {
            self.visit_statement(stmt);
        }
    }

    fn visit_variable_declaration(&mut self, node: &'ast VariableDeclaration) {
        for declarator in &node.declarators {
            self.visit_binding(&declarator.binding);
            if let Some(init) = &declarator.init {
                self.visit_expression(init);
            }
        }
    }

    fn visit_expression(&mut self, node: &'ast Expression) {
        walk_expression(self, node);
    }

    fn visit_identifier_expression(&mut self, _node: &'ast IdentifierExpression) {}

    fn visit_binding(&mut self, node: &'ast Binding) {
        walk_binding(self, node);
    }

    fn visit_parameter(&mut self, node: &'ast Parameter) {
        match node {
            Parameter::BindingWithDefault(p) => {
                self.visit_binding(&p.binding);
                self.visit_expression(&p.init);
            }
            Parameter::Binding(binding) => self.visit_binding(binding),
        }
    }

    fn visit_binding_identifier(&mut self, _node: &'ast BindingIdentifier) {}

    fn visit_assignment_target(&mut self, node: &'ast AssignmentTarget) {
        walk_assignment_target(self, node);
    }

    fn visit_simple_assignment_target(&mut self, node: &'ast SimpleAssignmentTarget) {
        walk_simple_assignment_target(self, node);
    }

    fn visit_assignment_target_identifier(&mut self, _node: &'ast AssignmentTargetIdentifier) {}

    fn visit_formal_parameters(&mut self, node: &'ast FormalParameters) {
        for item in &node.items {
            self.visit_parameter(item);
        }
        if let Some(rest) = &node.rest {
            self.visit_binding(rest);
        }
    }

    fn visit_function_body(&mut self, node: &'ast FunctionBody) {
        for directive in &node.directives {
            self.visit_directive(directive);
        }
        for stmt in &node.statements {
            self.visit_statement(stmt);
        }
    }

    fn visit_class_element(&mut self, node: &'ast ClassElement) {
        self.visit_method_definition(&node.method);
    }

    fn visit_method_definition(&mut self, node: &'ast MethodDefinition) {
        match node {
            MethodDefinition::Method(m) => walk_method(self, m),
            MethodDefinition::Getter(g) => walk_getter(self, g),
            MethodDefinition::Setter(s) => walk_setter(self, s),
        }
    }

    fn visit_object_property(&mut self, node: &'ast ObjectProperty) {
        walk_object_property(self, node);
    }

    fn visit_property_name(&mut self, node: &'ast PropertyName) {
        if let PropertyName::ComputedPropertyName(name) = node {
            self.visit_expression(&name.expression);
        }
    }
}

// =============================================================================
// Walkers
// =============================================================================

pub fn walk_program<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Program) {
    match node {
        Program::Script(script) => v.visit_script(script),
        Program::Module(module) => v.visit_module(module),
    }
}

pub fn walk_script<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Script) {
    for directive in &node.directives {
        v.visit_directive(directive);
    }
    for stmt in &node.statements {
        v.visit_statement(stmt);
    }
}

pub fn walk_module<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Module) {
    for directive in &node.directives {
        v.visit_directive(directive);
    }
    for item in &node.items {
        v.visit_module_item(item);
    }
}

pub fn walk_module_item<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast ModuleItem) {
    match node {
        ModuleItem::Import(import) => {
            if let Some(binding) = &import.default_binding {
                v.visit_binding_identifier(binding);
            }
            for specifier in &import.named_imports {
                v.visit_binding_identifier(&specifier.binding);
            }
        }
        ModuleItem::ImportNamespace(import) => {
            if let Some(binding) = &import.default_binding {
                v.visit_binding_identifier(binding);
            }
            v.visit_binding_identifier(&import.namespace_binding);
        }
        ModuleItem::Export(export) => match &export.declaration {
            ExportDeclaration::FunctionDeclaration(f) => walk_function_declaration(v, f),
            ExportDeclaration::ClassDeclaration(c) => walk_class_declaration(v, c),
            ExportDeclaration::VariableDeclaration(d) => v.visit_variable_declaration(d),
        },
        ModuleItem::ExportAllFrom(_) | ModuleItem::ExportFrom(_) => {}
        ModuleItem::ExportLocals(export) => {
            for specifier in &export.named_exports {
                v.visit_identifier_expression(&specifier.name);
            }
        }
        ModuleItem::ExportDefault(export) => match &export.body {
            ExportDefaultBody::FunctionDeclaration(f) => walk_function_declaration(v, f),
            ExportDefaultBody::ClassDeclaration(c) => walk_class_declaration(v, c),
            ExportDefaultBody::Expression(e) => v.visit_expression(e),
        },
        ModuleItem::Statement(stmt) => v.visit_statement(stmt),
    }
}

pub fn walk_statement<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Statement) {
    match node {
        Statement::BlockStatement(s) => v.visit_block(&s.block),
        Statement::BreakStatement(_)
        | Statement::ContinueStatement(_)
        | Statement::DebuggerStatement
        | Statement::EmptyStatement => {}
        Statement::DoWhileStatement(s) => {
            v.visit_statement(&s.body);
            v.visit_expression(&s.test);
        }
        Statement::ExpressionStatement(s) => v.visit_expression(&s.expression),
        Statement::ForInStatement(s) => {
            walk_for_binding(v, &s.left);
            v.visit_expression(&s.right);
            v.visit_statement(&s.body);
        }
        Statement::ForOfStatement(s) => {
            walk_for_binding(v, &s.left);
            v.visit_expression(&s.right);
            v.visit_statement(&s.body);
        }
        Statement::ForStatement(s) => {
            match &s.init {
                Some(ForInit::VariableDeclaration(d)) => v.visit_variable_declaration(d),
                Some(ForInit::Expression(e)) => v.visit_expression(e),
                None => {}
            }
            if let Some(test) = &s.test {
                v.visit_expression(test);
            }
            if let Some(update) = &s.update {
                v.visit_expression(update);
            }
            v.visit_statement(&s.body);
        }
        Statement::IfStatement(s) => {
            v.visit_expression(&s.test);
            v.visit_statement(&s.consequent);
            if let Some(alternate) = &s.alternate {
                v.visit_statement(alternate);
            }
        }
        Statement::LabeledStatement(s) => v.visit_statement(&s.body),
        Statement::ReturnStatement(s) => {
            if let Some(e) = &s.expression {
                v.visit_expression(e);
            }
        }
        Statement::SwitchStatement(s) => {
            v.visit_expression(&s.discriminant);
            for case in &s.cases {
                walk_switch_case(v, case);
            }
        }
        Statement::SwitchStatementWithDefault(s) => {
            v.visit_expression(&s.discriminant);
            for case in &s.pre_default_cases {
                walk_switch_case(v, case);
            }
            for stmt in &s.default_case.consequent {
                v.visit_statement(stmt);
            }
            for case in &s.post_default_cases {
                walk_switch_case(v, case);
            }
        }
        Statement::ThrowStatement(s) => v.visit_expression(&s.expression),
        Statement::TryCatchStatement(s) => {
            v.visit_block(&s.body);
            walk_catch_clause(v, &s.catch_clause);
        }
        Statement::TryFinallyStatement(s) => {
            v.visit_block(&s.body);
            if let Some(catch_clause) = &s.catch_clause {
                walk_catch_clause(v, catch_clause);
            }
            v.visit_block(&s.finalizer);
        }
        Statement::VariableDeclarationStatement(s) => v.visit_variable_declaration(&s.declaration),
        Statement::WhileStatement(s) => {
            v.visit_expression(&s.test);
            v.visit_statement(&s.body);
        }
        Statement::WithStatement(s) => {
            v.visit_expression(&s.object);
            v.visit_statement(&s.body);
        }
        Statement::FunctionDeclaration(f) => walk_function_declaration(v, f),
        Statement::ClassDeclaration(c) => walk_class_declaration(v, c),
    }
}

fn walk_for_binding<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast ForBinding) {
    match node {
        ForBinding::VariableDeclaration(d) => v.visit_variable_declaration(d),
        ForBinding::AssignmentTarget(t) => v.visit_assignment_target(t),
    }
}

fn walk_switch_case<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast SwitchCase) {
    v.visit_expression(&node.test);
    for stmt in &node.consequent {
        v.visit_statement(stmt);
    }
}

fn walk_catch_clause<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast CatchClause) {
    v.visit_binding(&node.binding);
    v.visit_block(&node.body);
}

pub fn walk_function_declaration<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    node: &'ast FunctionDeclaration,
) {
    v.visit_binding_identifier(&node.name);
    v.visit_formal_parameters(&node.params);
    v.visit_function_body(&node.body);
}

pub fn walk_class_declaration<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    node: &'ast ClassDeclaration,
) {
    v.visit_binding_identifier(&node.name);
    if let Some(super_class) = &node.super_class {
        v.visit_expression(super_class);
    }
    for element in &node.elements {
        v.visit_class_element(element);
    }
}

fn walk_method<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Method) {
    v.visit_property_name(&node.name);
    v.visit_formal_parameters(&node.params);
    v.visit_function_body(&node.body);
}

fn walk_getter<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Getter) {
    v.visit_property_name(&node.name);
    v.visit_function_body(&node.body);
}

fn walk_setter<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Setter) {
    v.visit_property_name(&node.name);
    v.visit_parameter(&node.param);
    v.visit_function_body(&node.body);
}

pub fn walk_object_property<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast ObjectProperty) {
    match node {
        ObjectProperty::DataProperty(p) => {
            v.visit_property_name(&p.name);
            v.visit_expression(&p.expression);
        }
        ObjectProperty::ShorthandProperty(p) => v.visit_identifier_expression(&p.name),
        ObjectProperty::Method(m) => walk_method(v, m),
        ObjectProperty::Getter(g) => walk_getter(v, g),
        ObjectProperty::Setter(s) => walk_setter(v, s),
    }
}

fn walk_expression_super<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast ExpressionSuper) {
    if let ExpressionSuper::Expression(e) = node {
        v.visit_expression(e);
    }
}

fn walk_spread_elements<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    nodes: &'ast [SpreadElementExpression],
) {
    for node in nodes {
        match node {
            SpreadElementExpression::SpreadElement(s) => v.visit_expression(&s.expression),
            SpreadElementExpression::Expression(e) => v.visit_expression(e),
        }
    }
}

pub fn walk_expression<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Expression) {
    match node {
        Expression::ArrayExpression(e) => {
            for element in e.elements.iter().flatten() {
                walk_spread_elements(v, std::slice::from_ref(element));
            }
        }
        Expression::ArrowExpression(e) => {
            v.visit_formal_parameters(&e.params);
            match &e.body {
                ArrowBody::FunctionBody(body) => v.visit_function_body(body),
                ArrowBody::Expression(expr) => v.visit_expression(expr),
            }
        }
        Expression::AssignmentExpression(e) => {
            v.visit_assignment_target(&e.binding);
            v.visit_expression(&e.expression);
        }
        Expression::AwaitExpression(e) => v.visit_expression(&e.expression),
        Expression::BinaryExpression(e) => {
            v.visit_expression(&e.left);
            v.visit_expression(&e.right);
        }
        Expression::CallExpression(e) => {
            walk_expression_super(v, &e.callee);
            walk_spread_elements(v, &e.arguments);
        }
        Expression::ClassExpression(e) => {
            if let Some(name) = &e.name {
                v.visit_binding_identifier(name);
            }
            if let Some(super_class) = &e.super_class {
                v.visit_expression(super_class);
            }
            for element in &e.elements {
                v.visit_class_element(element);
            }
        }
        Expression::CompoundAssignmentExpression(e) => {
            v.visit_simple_assignment_target(&e.binding);
            v.visit_expression(&e.expression);
        }
        Expression::ComputedMemberExpression(e) => {
            walk_expression_super(v, &e.object);
            v.visit_expression(&e.expression);
        }
        Expression::ConditionalExpression(e) => {
            v.visit_expression(&e.test);
            v.visit_expression(&e.consequent);
            v.visit_expression(&e.alternate);
        }
        Expression::FunctionExpression(e) => {
            if let Some(name) = &e.name {
                v.visit_binding_identifier(name);
            }
            v.visit_formal_parameters(&e.params);
            v.visit_function_body(&e.body);
        }
        Expression::IdentifierExpression(e) => v.visit_identifier_expression(e),
        Expression::LiteralBooleanExpression(_)
        | Expression::LiteralInfinityExpression
        | Expression::LiteralNullExpression
        | Expression::LiteralNumericExpression(_)
        | Expression::LiteralRegExpExpression(_)
        | Expression::LiteralStringExpression(_)
        | Expression::NewTargetExpression
        | Expression::ThisExpression => {}
        Expression::NewExpression(e) => {
            v.visit_expression(&e.callee);
            walk_spread_elements(v, &e.arguments);
        }
        Expression::ObjectExpression(e) => {
            for property in &e.properties {
                v.visit_object_property(property);
            }
        }
        Expression::StaticMemberExpression(e) => walk_expression_super(v, &e.object),
        Expression::TemplateExpression(e) => {
            if let Some(tag) = &e.tag {
                v.visit_expression(tag);
            }
            for item in &e.elements {
                if let TemplateItem::Expression(expr) = item {
                    v.visit_expression(expr);
                }
            }
        }
        Expression::UnaryExpression(e) => v.visit_expression(&e.operand),
        Expression::UpdateExpression(e) => v.visit_simple_assignment_target(&e.operand),
        Expression::YieldExpression(e) => {
            if let Some(expr) = &e.expression {
                v.visit_expression(expr);
            }
        }
        Expression::YieldGeneratorExpression(e) => v.visit_expression(&e.expression),
    }
}

pub fn walk_binding<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, node: &'ast Binding) {
    match node {
        Binding::BindingIdentifier(b) => v.visit_binding_identifier(b),
        Binding::ArrayBinding(b) => {
            for element in b.elements.iter().flatten() {
                v.visit_parameter(element);
            }
            if let Some(rest) = &b.rest {
                v.visit_binding(rest);
            }
        }
        Binding::ObjectBinding(b) => {
            for property in &b.properties {
                match property {
                    BindingProperty::BindingPropertyIdentifier(p) => {
                        v.visit_binding_identifier(&p.binding);
                        if let Some(init) = &p.init {
                            v.visit_expression(init);
                        }
                    }
                    BindingProperty::BindingPropertyProperty(p) => {
                        v.visit_property_name(&p.name);
                        v.visit_parameter(&p.binding);
                    }
                }
            }
        }
    }
}

pub fn walk_assignment_target<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    node: &'ast AssignmentTarget,
) {
    match node {
        AssignmentTarget::ArrayAssignmentTarget(t) => {
            for element in t.elements.iter().flatten() {
                walk_assignment_target_maybe_default(v, element);
            }
            if let Some(rest) = &t.rest {
                v.visit_assignment_target(rest);
            }
        }
        AssignmentTarget::ObjectAssignmentTarget(t) => {
            for property in &t.properties {
                match property {
                    AssignmentTargetProperty::AssignmentTargetPropertyIdentifier(p) => {
                        v.visit_assignment_target_identifier(&p.binding);
                        if let Some(init) = &p.init {
                            v.visit_expression(init);
                        }
                    }
                    AssignmentTargetProperty::AssignmentTargetPropertyProperty(p) => {
                        v.visit_property_name(&p.name);
                        walk_assignment_target_maybe_default(v, &p.binding);
                    }
                }
            }
        }
        AssignmentTarget::Simple(t) => v.visit_simple_assignment_target(t),
    }
}

fn walk_assignment_target_maybe_default<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    node: &'ast AssignmentTargetMaybeDefault,
) {
    match node {
        AssignmentTargetMaybeDefault::AssignmentTargetWithDefault(t) => {
            v.visit_assignment_target(&t.binding);
            v.visit_expression(&t.init);
        }
        AssignmentTargetMaybeDefault::AssignmentTarget(t) => v.visit_assignment_target(t),
    }
}

pub fn walk_simple_assignment_target<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    node: &'ast SimpleAssignmentTarget,
) {
    match node {
        SimpleAssignmentTarget::AssignmentTargetIdentifier(t) => {
            v.visit_assignment_target_identifier(t);
        }
        SimpleAssignmentTarget::StaticMemberAssignmentTarget(t) => {
            walk_expression_super(v, &t.object);
        }
        SimpleAssignmentTarget::ComputedMemberAssignmentTarget(t) => {
            walk_expression_super(v, &t.object);
            v.visit_expression(&t.expression);
        }
    }
}
