//! Code generation: AST to `CodeRep` fragments.
//!
//! The `director` walks the tree bottom-up and hands each node, together with
//! the already reduced fragments of its children, to a `CodeGen`. Every node
//! kind has one `reduce_*` hook. The defaults implement the base rendering
//! rules (`statements`, `expressions`, `functions`, `bindings`, `modules`);
//! a variant overrides only the kinds it renders differently, as
//! `WebSafeCodeGen` does for literals and identifiers.

use esgen_ast::{
    ArrayAssignmentTarget, ArrayBinding, ArrayExpression, ArrowExpression,
    AssignmentExpression, AssignmentTargetIdentifier, AssignmentTargetPropertyIdentifier,
    AssignmentTargetPropertyProperty, AssignmentTargetWithDefault, AwaitExpression,
    BinaryExpression, Block, BlockStatement, BindingIdentifier, BindingPropertyIdentifier,
    BindingPropertyProperty, BindingWithDefault, BreakStatement, CallExpression, CatchClause,
    ClassDeclaration, ClassElement, ClassExpression, CompoundAssignmentExpression,
    ComputedMemberAssignmentTarget, ComputedMemberExpression, ComputedPropertyName,
    ConditionalExpression, ContinueStatement, DataProperty, Directive, DoWhileStatement, Export,
    ExportAllFrom, ExportDefault, ExportFrom, ExportFromSpecifier, ExportLocalSpecifier,
    ExportLocals, Expression, ExpressionStatement, ExpressionSuper, ForInStatement,
    ForOfStatement, ForStatement, FormalParameters, FunctionBody, FunctionDeclaration,
    FunctionExpression, Getter, IdentifierExpression, IfStatement, Import, ImportNamespace,
    ImportSpecifier, LabeledStatement, LiteralBooleanExpression, LiteralNumericExpression,
    LiteralRegExpExpression, LiteralStringExpression, Method, Module, NewExpression,
    ObjectAssignmentTarget, ObjectBinding, ObjectExpression, Precedence, ReturnStatement, Script,
    Setter, ShorthandProperty, SpreadElement, StaticMemberAssignmentTarget,
    StaticMemberExpression, StaticPropertyName, SwitchCase, SwitchDefault, SwitchStatement,
    SwitchStatementWithDefault, TemplateExpression, ThrowStatement, TryCatchStatement,
    TryFinallyStatement, UnaryExpression, UpdateExpression, VariableDeclaration,
    VariableDeclarationStatement, VariableDeclarator, WhileStatement, WithStatement,
    YieldExpression, YieldGeneratorExpression,
};

use crate::code_rep::CodeRep;

mod bindings;
pub mod director;
mod expressions;
mod functions;
mod modules;
mod statements;
pub mod web_safe;

pub use functions::DEFAULT_EXPORT_NAME;
pub use web_safe::WebSafeCodeGen;

/// Per-node rendering rules.
///
/// Children arrive already reduced, in source order. `Option` children are
/// `None` when the node has no such child (or a hole, in array patterns).
pub trait CodeGen {
    // =========================================================================
    // Roots and modules
    // =========================================================================

    fn reduce_script(
        &self,
        node: &Script,
        directives: Vec<CodeRep>,
        statements: Vec<CodeRep>,
    ) -> CodeRep {
        modules::script(node, directives, statements)
    }

    fn reduce_module(&self, node: &Module, directives: Vec<CodeRep>, items: Vec<CodeRep>) -> CodeRep {
        modules::module(node, directives, items)
    }

    fn reduce_directive(&self, node: &Directive) -> CodeRep {
        modules::directive(node)
    }

    fn reduce_import(
        &self,
        node: &Import,
        default_binding: Option<CodeRep>,
        named_imports: Vec<CodeRep>,
    ) -> CodeRep {
        modules::import(node, default_binding, named_imports)
    }

    fn reduce_import_namespace(
        &self,
        node: &ImportNamespace,
        default_binding: Option<CodeRep>,
        namespace_binding: CodeRep,
    ) -> CodeRep {
        modules::import_namespace(node, default_binding, namespace_binding)
    }

    fn reduce_import_specifier(&self, node: &ImportSpecifier, binding: CodeRep) -> CodeRep {
        modules::import_specifier(node, binding)
    }

    fn reduce_export(&self, node: &Export, declaration: CodeRep) -> CodeRep {
        modules::export(node, declaration)
    }

    fn reduce_export_all_from(&self, node: &ExportAllFrom) -> CodeRep {
        modules::export_all_from(node)
    }

    fn reduce_export_from(&self, node: &ExportFrom, named_exports: Vec<CodeRep>) -> CodeRep {
        modules::export_from(node, named_exports)
    }

    fn reduce_export_from_specifier(&self, node: &ExportFromSpecifier) -> CodeRep {
        modules::export_from_specifier(node)
    }

    fn reduce_export_locals(&self, node: &ExportLocals, named_exports: Vec<CodeRep>) -> CodeRep {
        modules::export_locals(node, named_exports)
    }

    fn reduce_export_local_specifier(&self, node: &ExportLocalSpecifier, name: CodeRep) -> CodeRep {
        modules::export_local_specifier(node, name)
    }

    fn reduce_export_default(&self, node: &ExportDefault, body: CodeRep) -> CodeRep {
        modules::export_default(node, body)
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn reduce_block(&self, node: &Block, statements: Vec<CodeRep>) -> CodeRep {
        statements::block(node, statements)
    }

    fn reduce_block_statement(&self, node: &BlockStatement, block: CodeRep) -> CodeRep {
        statements::block_statement(node, block)
    }

    fn reduce_break_statement(&self, node: &BreakStatement) -> CodeRep {
        statements::break_statement(node)
    }

    fn reduce_continue_statement(&self, node: &ContinueStatement) -> CodeRep {
        statements::continue_statement(node)
    }

    fn reduce_debugger_statement(&self) -> CodeRep {
        statements::debugger_statement()
    }

    fn reduce_do_while_statement(
        &self,
        node: &DoWhileStatement,
        body: CodeRep,
        test: CodeRep,
    ) -> CodeRep {
        statements::do_while_statement(node, body, test)
    }

    fn reduce_empty_statement(&self) -> CodeRep {
        statements::empty_statement()
    }

    fn reduce_expression_statement(
        &self,
        node: &ExpressionStatement,
        expression: CodeRep,
    ) -> CodeRep {
        statements::expression_statement(node, expression)
    }

    fn reduce_for_in_statement(
        &self,
        node: &ForInStatement,
        left: CodeRep,
        right: CodeRep,
        body: CodeRep,
    ) -> CodeRep {
        statements::for_in_statement(node, left, right, body)
    }

    fn reduce_for_of_statement(
        &self,
        node: &ForOfStatement,
        left: CodeRep,
        right: CodeRep,
        body: CodeRep,
    ) -> CodeRep {
        statements::for_of_statement(node, left, right, body)
    }

    fn reduce_for_statement(
        &self,
        node: &ForStatement,
        init: Option<CodeRep>,
        test: Option<CodeRep>,
        update: Option<CodeRep>,
        body: CodeRep,
    ) -> CodeRep {
        statements::for_statement(node, init, test, update, body)
    }

    fn reduce_if_statement(
        &self,
        node: &IfStatement,
        test: CodeRep,
        consequent: CodeRep,
        alternate: Option<CodeRep>,
    ) -> CodeRep {
        statements::if_statement(node, test, consequent, alternate)
    }

    fn reduce_labeled_statement(&self, node: &LabeledStatement, body: CodeRep) -> CodeRep {
        statements::labeled_statement(node, body)
    }

    fn reduce_return_statement(
        &self,
        node: &ReturnStatement,
        expression: Option<CodeRep>,
    ) -> CodeRep {
        statements::return_statement(node, expression)
    }

    fn reduce_switch_case(&self, node: &SwitchCase, test: CodeRep, consequent: Vec<CodeRep>) -> CodeRep {
        statements::switch_case(node, test, consequent)
    }

    fn reduce_switch_default(&self, node: &SwitchDefault, consequent: Vec<CodeRep>) -> CodeRep {
        statements::switch_default(node, consequent)
    }

    fn reduce_switch_statement(
        &self,
        node: &SwitchStatement,
        discriminant: CodeRep,
        cases: Vec<CodeRep>,
    ) -> CodeRep {
        statements::switch_statement(node, discriminant, cases)
    }

    fn reduce_switch_statement_with_default(
        &self,
        node: &SwitchStatementWithDefault,
        discriminant: CodeRep,
        pre_default_cases: Vec<CodeRep>,
        default_case: CodeRep,
        post_default_cases: Vec<CodeRep>,
    ) -> CodeRep {
        statements::switch_statement_with_default(
            node,
            discriminant,
            pre_default_cases,
            default_case,
            post_default_cases,
        )
    }

    fn reduce_throw_statement(&self, node: &ThrowStatement, expression: CodeRep) -> CodeRep {
        statements::throw_statement(node, expression)
    }

    fn reduce_try_catch_statement(
        &self,
        node: &TryCatchStatement,
        body: CodeRep,
        catch_clause: CodeRep,
    ) -> CodeRep {
        statements::try_catch_statement(node, body, catch_clause)
    }

    fn reduce_try_finally_statement(
        &self,
        node: &TryFinallyStatement,
        body: CodeRep,
        catch_clause: Option<CodeRep>,
        finalizer: CodeRep,
    ) -> CodeRep {
        statements::try_finally_statement(node, body, catch_clause, finalizer)
    }

    fn reduce_catch_clause(&self, node: &CatchClause, binding: CodeRep, body: CodeRep) -> CodeRep {
        statements::catch_clause(node, binding, body)
    }

    fn reduce_variable_declaration_statement(
        &self,
        node: &VariableDeclarationStatement,
        declaration: CodeRep,
    ) -> CodeRep {
        statements::variable_declaration_statement(node, declaration)
    }

    fn reduce_variable_declaration(
        &self,
        node: &VariableDeclaration,
        declarators: Vec<CodeRep>,
    ) -> CodeRep {
        statements::variable_declaration(node, declarators)
    }

    fn reduce_variable_declarator(
        &self,
        node: &VariableDeclarator,
        binding: CodeRep,
        init: Option<CodeRep>,
    ) -> CodeRep {
        statements::variable_declarator(node, binding, init)
    }

    fn reduce_while_statement(&self, node: &WhileStatement, test: CodeRep, body: CodeRep) -> CodeRep {
        statements::while_statement(node, test, body)
    }

    fn reduce_with_statement(&self, node: &WithStatement, object: CodeRep, body: CodeRep) -> CodeRep {
        statements::with_statement(node, object, body)
    }

    // =========================================================================
    // Functions and classes
    // =========================================================================

    fn reduce_function_declaration(
        &self,
        node: &FunctionDeclaration,
        name: CodeRep,
        params: CodeRep,
        body: CodeRep,
    ) -> CodeRep {
        functions::function_declaration(node, name, params, body)
    }

    fn reduce_function_expression(
        &self,
        node: &FunctionExpression,
        name: Option<CodeRep>,
        params: CodeRep,
        body: CodeRep,
    ) -> CodeRep {
        functions::function_expression(node, name, params, body)
    }

    fn reduce_arrow_expression(
        &self,
        node: &ArrowExpression,
        params: CodeRep,
        body: CodeRep,
    ) -> CodeRep {
        functions::arrow_expression(node, params, body)
    }

    fn reduce_formal_parameters(
        &self,
        node: &FormalParameters,
        items: Vec<CodeRep>,
        rest: Option<CodeRep>,
    ) -> CodeRep {
        functions::formal_parameters(node, items, rest)
    }

    fn reduce_function_body(
        &self,
        node: &FunctionBody,
        directives: Vec<CodeRep>,
        statements: Vec<CodeRep>,
    ) -> CodeRep {
        functions::function_body(node, directives, statements)
    }

    fn reduce_class_declaration(
        &self,
        node: &ClassDeclaration,
        name: CodeRep,
        super_class: Option<CodeRep>,
        elements: Vec<CodeRep>,
    ) -> CodeRep {
        functions::class_declaration(node, name, super_class, elements)
    }

    fn reduce_class_expression(
        &self,
        node: &ClassExpression,
        name: Option<CodeRep>,
        super_class: Option<CodeRep>,
        elements: Vec<CodeRep>,
    ) -> CodeRep {
        functions::class_expression(node, name, super_class, elements)
    }

    fn reduce_class_element(&self, node: &ClassElement, method: CodeRep) -> CodeRep {
        functions::class_element(node, method)
    }

    fn reduce_method(
        &self,
        node: &Method,
        name: CodeRep,
        params: CodeRep,
        body: CodeRep,
    ) -> CodeRep {
        functions::method(node, name, params, body)
    }

    fn reduce_getter(&self, node: &Getter, name: CodeRep, body: CodeRep) -> CodeRep {
        functions::getter(node, name, body)
    }

    fn reduce_setter(&self, node: &Setter, name: CodeRep, param: CodeRep, body: CodeRep) -> CodeRep {
        functions::setter(node, name, param, body)
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn reduce_array_expression(
        &self,
        node: &ArrayExpression,
        elements: Vec<Option<CodeRep>>,
    ) -> CodeRep {
        expressions::array_expression(node, elements)
    }

    fn reduce_assignment_expression(
        &self,
        node: &AssignmentExpression,
        binding: CodeRep,
        expression: CodeRep,
    ) -> CodeRep {
        expressions::assignment_expression(node, binding, expression)
    }

    fn reduce_await_expression(&self, node: &AwaitExpression, expression: CodeRep) -> CodeRep {
        expressions::await_expression(node, expression)
    }

    fn reduce_binary_expression(
        &self,
        node: &BinaryExpression,
        left: CodeRep,
        right: CodeRep,
    ) -> CodeRep {
        expressions::binary_expression(node, left, right)
    }

    fn reduce_call_expression(
        &self,
        node: &CallExpression,
        callee: CodeRep,
        arguments: Vec<CodeRep>,
    ) -> CodeRep {
        expressions::call_expression(node, callee, arguments)
    }

    fn reduce_compound_assignment_expression(
        &self,
        node: &CompoundAssignmentExpression,
        binding: CodeRep,
        expression: CodeRep,
    ) -> CodeRep {
        expressions::compound_assignment_expression(node, binding, expression)
    }

    fn reduce_computed_member_expression(
        &self,
        node: &ComputedMemberExpression,
        object: CodeRep,
        expression: CodeRep,
    ) -> CodeRep {
        expressions::computed_member_expression(node, object, expression)
    }

    fn reduce_conditional_expression(
        &self,
        node: &ConditionalExpression,
        test: CodeRep,
        consequent: CodeRep,
        alternate: CodeRep,
    ) -> CodeRep {
        expressions::conditional_expression(node, test, consequent, alternate)
    }

    fn reduce_identifier_expression(&self, node: &IdentifierExpression) -> CodeRep {
        expressions::identifier_expression(node)
    }

    fn reduce_literal_boolean_expression(&self, node: &LiteralBooleanExpression) -> CodeRep {
        expressions::literal_boolean_expression(node)
    }

    fn reduce_literal_infinity_expression(&self) -> CodeRep {
        expressions::literal_infinity_expression()
    }

    fn reduce_literal_null_expression(&self) -> CodeRep {
        expressions::literal_null_expression()
    }

    fn reduce_literal_numeric_expression(&self, node: &LiteralNumericExpression) -> CodeRep {
        expressions::literal_numeric_expression(node)
    }

    fn reduce_literal_regexp_expression(&self, node: &LiteralRegExpExpression) -> CodeRep {
        expressions::literal_regexp_expression(node)
    }

    fn reduce_literal_string_expression(&self, node: &LiteralStringExpression) -> CodeRep {
        expressions::literal_string_expression(node)
    }

    fn reduce_new_expression(
        &self,
        node: &NewExpression,
        callee: CodeRep,
        arguments: Vec<CodeRep>,
    ) -> CodeRep {
        expressions::new_expression(node, callee, arguments)
    }

    fn reduce_new_target_expression(&self) -> CodeRep {
        expressions::new_target_expression()
    }

    fn reduce_object_expression(&self, node: &ObjectExpression, properties: Vec<CodeRep>) -> CodeRep {
        expressions::object_expression(node, properties)
    }

    fn reduce_static_member_expression(
        &self,
        node: &StaticMemberExpression,
        object: CodeRep,
    ) -> CodeRep {
        expressions::static_member_expression(node, object)
    }

    /// `elements` holds the fragments of the embedded expressions; template
    /// chunks are `None` and rendered from their raw text.
    fn reduce_template_expression(
        &self,
        node: &TemplateExpression,
        tag: Option<CodeRep>,
        elements: Vec<Option<CodeRep>>,
    ) -> CodeRep {
        expressions::template_expression(node, tag, elements)
    }

    fn reduce_this_expression(&self) -> CodeRep {
        expressions::this_expression()
    }

    fn reduce_unary_expression(&self, node: &UnaryExpression, operand: CodeRep) -> CodeRep {
        expressions::unary_expression(node, operand)
    }

    fn reduce_update_expression(&self, node: &UpdateExpression, operand: CodeRep) -> CodeRep {
        expressions::update_expression(node, operand)
    }

    fn reduce_yield_expression(
        &self,
        node: &YieldExpression,
        expression: Option<CodeRep>,
    ) -> CodeRep {
        expressions::yield_expression(node, expression)
    }

    fn reduce_yield_generator_expression(
        &self,
        node: &YieldGeneratorExpression,
        expression: CodeRep,
    ) -> CodeRep {
        expressions::yield_generator_expression(node, expression)
    }

    fn reduce_super(&self) -> CodeRep {
        expressions::super_reference()
    }

    fn reduce_spread_element(&self, node: &SpreadElement, expression: CodeRep) -> CodeRep {
        expressions::spread_element(node, expression)
    }

    // =========================================================================
    // Object literals
    // =========================================================================

    fn reduce_data_property(&self, node: &DataProperty, name: CodeRep, expression: CodeRep) -> CodeRep {
        expressions::data_property(node, name, expression)
    }

    fn reduce_shorthand_property(&self, node: &ShorthandProperty, name: CodeRep) -> CodeRep {
        expressions::shorthand_property(node, name)
    }

    fn reduce_static_property_name(&self, node: &StaticPropertyName) -> CodeRep {
        expressions::static_property_name(node)
    }

    fn reduce_computed_property_name(
        &self,
        node: &ComputedPropertyName,
        expression: CodeRep,
    ) -> CodeRep {
        expressions::computed_property_name(node, expression)
    }

    // =========================================================================
    // Bindings
    // =========================================================================

    fn reduce_binding_identifier(&self, node: &BindingIdentifier) -> CodeRep {
        bindings::binding_identifier(node)
    }

    fn reduce_array_binding(
        &self,
        node: &ArrayBinding,
        elements: Vec<Option<CodeRep>>,
        rest: Option<CodeRep>,
    ) -> CodeRep {
        bindings::array_binding(node, elements, rest)
    }

    fn reduce_object_binding(&self, node: &ObjectBinding, properties: Vec<CodeRep>) -> CodeRep {
        bindings::object_binding(node, properties)
    }

    fn reduce_binding_with_default(
        &self,
        node: &BindingWithDefault,
        binding: CodeRep,
        init: CodeRep,
    ) -> CodeRep {
        bindings::binding_with_default(node, binding, init)
    }

    fn reduce_binding_property_identifier(
        &self,
        node: &BindingPropertyIdentifier,
        binding: CodeRep,
        init: Option<CodeRep>,
    ) -> CodeRep {
        bindings::binding_property_identifier(node, binding, init)
    }

    fn reduce_binding_property_property(
        &self,
        node: &BindingPropertyProperty,
        name: CodeRep,
        binding: CodeRep,
    ) -> CodeRep {
        bindings::binding_property_property(node, name, binding)
    }

    // =========================================================================
    // Assignment targets
    // =========================================================================

    fn reduce_assignment_target_identifier(&self, node: &AssignmentTargetIdentifier) -> CodeRep {
        bindings::assignment_target_identifier(node)
    }

    fn reduce_static_member_assignment_target(
        &self,
        node: &StaticMemberAssignmentTarget,
        object: CodeRep,
    ) -> CodeRep {
        bindings::static_member_assignment_target(node, object)
    }

    fn reduce_computed_member_assignment_target(
        &self,
        node: &ComputedMemberAssignmentTarget,
        object: CodeRep,
        expression: CodeRep,
    ) -> CodeRep {
        bindings::computed_member_assignment_target(node, object, expression)
    }

    fn reduce_array_assignment_target(
        &self,
        node: &ArrayAssignmentTarget,
        elements: Vec<Option<CodeRep>>,
        rest: Option<CodeRep>,
    ) -> CodeRep {
        bindings::array_assignment_target(node, elements, rest)
    }

    fn reduce_object_assignment_target(
        &self,
        node: &ObjectAssignmentTarget,
        properties: Vec<CodeRep>,
    ) -> CodeRep {
        bindings::object_assignment_target(node, properties)
    }

    fn reduce_assignment_target_with_default(
        &self,
        node: &AssignmentTargetWithDefault,
        binding: CodeRep,
        init: CodeRep,
    ) -> CodeRep {
        bindings::assignment_target_with_default(node, binding, init)
    }

    fn reduce_assignment_target_property_identifier(
        &self,
        node: &AssignmentTargetPropertyIdentifier,
        binding: CodeRep,
        init: Option<CodeRep>,
    ) -> CodeRep {
        bindings::assignment_target_property_identifier(node, binding, init)
    }

    fn reduce_assignment_target_property_property(
        &self,
        node: &AssignmentTargetPropertyProperty,
        name: CodeRep,
        binding: CodeRep,
    ) -> CodeRep {
        bindings::assignment_target_property_property(node, name, binding)
    }
}

/// The base rules, used for pretty and compact output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyCodeGen;

impl CodeGen for PrettyCodeGen {}

// =============================================================================
// Shared fragment helpers
// =============================================================================

pub(crate) fn token(text: impl Into<String>) -> CodeRep {
    CodeRep::token(text)
}

pub(crate) const fn space() -> CodeRep {
    CodeRep::space()
}

/// Parenthesize `rep` when `node` binds looser than its position requires.
pub(crate) fn p(node: &Expression, precedence: Precedence, rep: CodeRep) -> CodeRep {
    if node.precedence() < precedence {
        CodeRep::paren(rep)
    } else {
        rep
    }
}

/// Precedence required of a member object: a call chain may continue with a
/// member access, anything looser needs parentheses.
pub(crate) fn member_object(object: &ExpressionSuper, rep: CodeRep) -> CodeRep {
    match object {
        ExpressionSuper::Super => rep,
        ExpressionSuper::Expression(expr) => {
            let required = if expr.precedence() == Precedence::Call {
                Precedence::Call
            } else {
                Precedence::Member
            };
            p(expr, required, rep)
        }
    }
}

/// True when `object` is the bare identifier `let`, so that a computed
/// member access on it starts with `let [`.
pub(crate) fn is_bare_let(object: &ExpressionSuper, rep: &CodeRep) -> bool {
    rep.starts_with_let()
        && matches!(
            object,
            ExpressionSuper::Expression(expr)
                if matches!(expr.as_ref(), Expression::IdentifierExpression(id) if id.name == "let")
        )
}
