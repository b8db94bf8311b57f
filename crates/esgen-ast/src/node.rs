//! AST node definitions.
//!
//! The tree mirrors the Shift AST (ES2017 subset). Every node type is a plain
//! struct; node categories (`Statement`, `Expression`, `Binding`, ...) are
//! enums tagged by the node type name, so a program round-trips through the
//! Shift JSON format:
//!
//! ```json
//! { "type": "ExpressionStatement",
//!   "expression": { "type": "IdentifierExpression", "name": "x" } }
//! ```
//!
//! Unions that pair one extra node kind with a whole category (`Super` or an
//! expression, a spread or an expression, ...) keep the category as an
//! untagged fallback variant.

use serde::{Deserialize, Serialize};

use crate::operators::{
    BinaryOperator, CompoundAssignmentOperator, UnaryOperator, UpdateOperator,
    VariableDeclarationKind,
};

// =============================================================================
// Roots
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Script {
    pub directives: Vec<Directive>,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Module {
    pub directives: Vec<Directive>,
    pub items: Vec<ModuleItem>,
}

/// Either root of a parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Program {
    Script(Script),
    Module(Module),
}

/// Prologue directive. `raw_value` is the source text between the quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directive {
    pub raw_value: String,
}

// =============================================================================
// Module items
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ModuleItem {
    Import(Import),
    ImportNamespace(ImportNamespace),
    Export(Export),
    ExportAllFrom(ExportAllFrom),
    ExportFrom(ExportFrom),
    ExportLocals(ExportLocals),
    ExportDefault(ExportDefault),
    #[serde(untagged)]
    Statement(Statement),
}

/// `import a, { b as c } from "m";`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Import {
    pub default_binding: Option<BindingIdentifier>,
    pub named_imports: Vec<ImportSpecifier>,
    pub module_specifier: String,
}

/// `import a, * as ns from "m";`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportNamespace {
    pub default_binding: Option<BindingIdentifier>,
    pub namespace_binding: BindingIdentifier,
    pub module_specifier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSpecifier {
    /// Imported name when it differs from the local binding.
    pub name: Option<String>,
    pub binding: BindingIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Export {
    pub declaration: ExportDeclaration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExportDeclaration {
    FunctionDeclaration(FunctionDeclaration),
    ClassDeclaration(ClassDeclaration),
    VariableDeclaration(VariableDeclaration),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportAllFrom {
    pub module_specifier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFrom {
    pub named_exports: Vec<ExportFromSpecifier>,
    pub module_specifier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFromSpecifier {
    pub name: String,
    pub exported_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLocals {
    pub named_exports: Vec<ExportLocalSpecifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLocalSpecifier {
    pub name: IdentifierExpression,
    pub exported_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDefault {
    pub body: ExportDefaultBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExportDefaultBody {
    FunctionDeclaration(FunctionDeclaration),
    ClassDeclaration(ClassDeclaration),
    #[serde(untagged)]
    Expression(Expression),
}

// =============================================================================
// Statements
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    BlockStatement(BlockStatement),
    BreakStatement(BreakStatement),
    ContinueStatement(ContinueStatement),
    DebuggerStatement,
    DoWhileStatement(DoWhileStatement),
    EmptyStatement,
    ExpressionStatement(ExpressionStatement),
    ForInStatement(ForInStatement),
    ForOfStatement(ForOfStatement),
    ForStatement(ForStatement),
    IfStatement(IfStatement),
    LabeledStatement(LabeledStatement),
    ReturnStatement(ReturnStatement),
    SwitchStatement(SwitchStatement),
    SwitchStatementWithDefault(SwitchStatementWithDefault),
    ThrowStatement(ThrowStatement),
    TryCatchStatement(TryCatchStatement),
    TryFinallyStatement(TryFinallyStatement),
    VariableDeclarationStatement(VariableDeclarationStatement),
    WhileStatement(WhileStatement),
    WithStatement(WithStatement),
    FunctionDeclaration(FunctionDeclaration),
    ClassDeclaration(ClassDeclaration),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStatement {
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakStatement {
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinueStatement {
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoWhileStatement {
    pub body: Box<Statement>,
    pub test: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForInStatement {
    pub left: ForBinding,
    pub right: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForOfStatement {
    pub left: ForBinding,
    pub right: Expression,
    pub body: Box<Statement>,
}

/// Left-hand side of a `for-in` / `for-of` head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ForBinding {
    VariableDeclaration(VariableDeclaration),
    #[serde(untagged)]
    AssignmentTarget(AssignmentTarget),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStatement {
    pub init: Option<ForInit>,
    pub test: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ForInit {
    VariableDeclaration(VariableDeclaration),
    #[serde(untagged)]
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
    pub test: Expression,
    pub consequent: Box<Statement>,
    pub alternate: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledStatement {
    pub label: String,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatement {
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStatement {
    pub discriminant: Expression,
    pub cases: Vec<SwitchCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchStatementWithDefault {
    pub discriminant: Expression,
    pub pre_default_cases: Vec<SwitchCase>,
    pub default_case: SwitchDefault,
    pub post_default_cases: Vec<SwitchCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    pub test: Expression,
    pub consequent: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SwitchDefault {
    pub consequent: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrowStatement {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryCatchStatement {
    pub body: Block,
    pub catch_clause: CatchClause,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryFinallyStatement {
    pub body: Block,
    pub catch_clause: Option<CatchClause>,
    pub finalizer: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    pub binding: Binding,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarationStatement {
    pub declaration: VariableDeclaration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub kind: VariableDeclarationKind,
    pub declarators: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub binding: Binding,
    pub init: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub test: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithStatement {
    pub object: Expression,
    pub body: Box<Statement>,
}

// =============================================================================
// Functions and classes
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    #[serde(default)]
    pub is_async: bool,
    pub is_generator: bool,
    pub name: BindingIdentifier,
    pub params: FormalParameters,
    pub body: FunctionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionExpression {
    #[serde(default)]
    pub is_async: bool,
    pub is_generator: bool,
    pub name: Option<BindingIdentifier>,
    pub params: FormalParameters,
    pub body: FunctionBody,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormalParameters {
    pub items: Vec<Parameter>,
    pub rest: Option<Binding>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionBody {
    pub directives: Vec<Directive>,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowExpression {
    #[serde(default)]
    pub is_async: bool,
    pub params: FormalParameters,
    pub body: ArrowBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArrowBody {
    FunctionBody(FunctionBody),
    #[serde(untagged)]
    Expression(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub name: BindingIdentifier,
    #[serde(rename = "super")]
    pub super_class: Option<Box<Expression>>,
    pub elements: Vec<ClassElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassExpression {
    pub name: Option<BindingIdentifier>,
    #[serde(rename = "super")]
    pub super_class: Option<Box<Expression>>,
    pub elements: Vec<ClassElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassElement {
    pub is_static: bool,
    pub method: MethodDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MethodDefinition {
    Method(Method),
    Getter(Getter),
    Setter(Setter),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    #[serde(default)]
    pub is_async: bool,
    pub is_generator: bool,
    pub name: PropertyName,
    pub params: FormalParameters,
    pub body: FunctionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Getter {
    pub name: PropertyName,
    pub body: FunctionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setter {
    pub name: PropertyName,
    pub param: Parameter,
    pub body: FunctionBody,
}

// =============================================================================
// Expressions
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    ArrayExpression(ArrayExpression),
    ArrowExpression(ArrowExpression),
    AssignmentExpression(AssignmentExpression),
    AwaitExpression(AwaitExpression),
    BinaryExpression(BinaryExpression),
    CallExpression(CallExpression),
    ClassExpression(ClassExpression),
    CompoundAssignmentExpression(CompoundAssignmentExpression),
    ComputedMemberExpression(ComputedMemberExpression),
    ConditionalExpression(ConditionalExpression),
    FunctionExpression(FunctionExpression),
    IdentifierExpression(IdentifierExpression),
    LiteralBooleanExpression(LiteralBooleanExpression),
    LiteralInfinityExpression,
    LiteralNullExpression,
    LiteralNumericExpression(LiteralNumericExpression),
    LiteralRegExpExpression(LiteralRegExpExpression),
    LiteralStringExpression(LiteralStringExpression),
    NewExpression(NewExpression),
    NewTargetExpression,
    ObjectExpression(ObjectExpression),
    StaticMemberExpression(StaticMemberExpression),
    TemplateExpression(TemplateExpression),
    ThisExpression,
    UnaryExpression(UnaryExpression),
    UpdateExpression(UpdateExpression),
    YieldExpression(YieldExpression),
    YieldGeneratorExpression(YieldGeneratorExpression),
}

/// `[a, , ...b]`; `None` elements are holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpression {
    pub elements: Vec<Option<SpreadElementExpression>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentExpression {
    pub binding: AssignmentTarget,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwaitExpression {
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
    pub callee: ExpressionSuper,
    pub arguments: Vec<SpreadElementExpression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundAssignmentExpression {
    pub binding: SimpleAssignmentTarget,
    pub operator: CompoundAssignmentOperator,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedMemberExpression {
    pub object: ExpressionSuper,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpression {
    pub test: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentifierExpression {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralBooleanExpression {
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralNumericExpression {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralRegExpExpression {
    /// Pattern source between the slashes.
    pub pattern: String,
    pub flags: String,
}

/// String literal holding its cooked value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralStringExpression {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<SpreadElementExpression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectExpression {
    pub properties: Vec<ObjectProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticMemberExpression {
    pub object: ExpressionSuper,
    pub property: String,
}

/// Template literal. `elements` alternates template chunks and embedded
/// expressions, starting and ending with a chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateExpression {
    pub tag: Option<Box<Expression>>,
    pub elements: Vec<TemplateItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TemplateItem {
    TemplateElement(TemplateElement),
    #[serde(untagged)]
    Expression(Expression),
}

/// Raw (uncooked) text of one template chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateElement {
    pub raw_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpression {
    pub is_prefix: bool,
    pub operator: UpdateOperator,
    pub operand: SimpleAssignmentTarget,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldExpression {
    pub expression: Option<Box<Expression>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldGeneratorExpression {
    pub expression: Box<Expression>,
}

/// Callee or member object: `super` is only legal in these positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExpressionSuper {
    Super,
    #[serde(untagged)]
    Expression(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpreadElementExpression {
    SpreadElement(SpreadElement),
    #[serde(untagged)]
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadElement {
    pub expression: Expression,
}

// =============================================================================
// Object literals
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectProperty {
    DataProperty(DataProperty),
    ShorthandProperty(ShorthandProperty),
    Method(Method),
    Getter(Getter),
    Setter(Setter),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataProperty {
    pub name: PropertyName,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShorthandProperty {
    pub name: IdentifierExpression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PropertyName {
    StaticPropertyName(StaticPropertyName),
    ComputedPropertyName(ComputedPropertyName),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticPropertyName {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedPropertyName {
    pub expression: Box<Expression>,
}

// =============================================================================
// Bindings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Binding {
    BindingIdentifier(BindingIdentifier),
    ArrayBinding(ArrayBinding),
    ObjectBinding(ObjectBinding),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindingIdentifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayBinding {
    pub elements: Vec<Option<Parameter>>,
    pub rest: Option<Box<Binding>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectBinding {
    pub properties: Vec<BindingProperty>,
}

/// A binding with an optional default; also the shape of a formal parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Parameter {
    BindingWithDefault(BindingWithDefault),
    #[serde(untagged)]
    Binding(Binding),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingWithDefault {
    pub binding: Binding,
    pub init: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BindingProperty {
    BindingPropertyIdentifier(BindingPropertyIdentifier),
    BindingPropertyProperty(BindingPropertyProperty),
}

/// `{ a = 1 }` in a binding pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingPropertyIdentifier {
    pub binding: BindingIdentifier,
    pub init: Option<Expression>,
}

/// `{ key: pattern }` in a binding pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingPropertyProperty {
    pub name: PropertyName,
    pub binding: Parameter,
}

// =============================================================================
// Assignment targets
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AssignmentTarget {
    ArrayAssignmentTarget(ArrayAssignmentTarget),
    ObjectAssignmentTarget(ObjectAssignmentTarget),
    #[serde(untagged)]
    Simple(SimpleAssignmentTarget),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimpleAssignmentTarget {
    AssignmentTargetIdentifier(AssignmentTargetIdentifier),
    StaticMemberAssignmentTarget(StaticMemberAssignmentTarget),
    ComputedMemberAssignmentTarget(ComputedMemberAssignmentTarget),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignmentTargetIdentifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticMemberAssignmentTarget {
    pub object: ExpressionSuper,
    pub property: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedMemberAssignmentTarget {
    pub object: ExpressionSuper,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayAssignmentTarget {
    pub elements: Vec<Option<AssignmentTargetMaybeDefault>>,
    pub rest: Option<Box<AssignmentTarget>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectAssignmentTarget {
    pub properties: Vec<AssignmentTargetProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AssignmentTargetMaybeDefault {
    AssignmentTargetWithDefault(AssignmentTargetWithDefault),
    #[serde(untagged)]
    AssignmentTarget(AssignmentTarget),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentTargetWithDefault {
    pub binding: AssignmentTarget,
    pub init: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AssignmentTargetProperty {
    AssignmentTargetPropertyIdentifier(AssignmentTargetPropertyIdentifier),
    AssignmentTargetPropertyProperty(AssignmentTargetPropertyProperty),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentTargetPropertyIdentifier {
    pub binding: AssignmentTargetIdentifier,
    pub init: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentTargetPropertyProperty {
    pub name: PropertyName,
    pub binding: AssignmentTargetMaybeDefault,
}
