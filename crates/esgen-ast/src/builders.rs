//! Shorthand constructors for building trees in code and tests.

use crate::node::*;
use crate::operators::{BinaryOperator, VariableDeclarationKind};

impl Expression {
    /// Create an identifier reference: `foo`
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::IdentifierExpression(IdentifierExpression { name: name.into() })
    }

    /// Create a string literal from its cooked value
    pub fn string(value: impl Into<String>) -> Self {
        Self::LiteralStringExpression(LiteralStringExpression {
            value: value.into(),
        })
    }

    pub const fn number(value: f64) -> Self {
        Self::LiteralNumericExpression(LiteralNumericExpression { value })
    }

    pub const fn boolean(value: bool) -> Self {
        Self::LiteralBooleanExpression(LiteralBooleanExpression { value })
    }

    pub fn regexp(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        Self::LiteralRegExpExpression(LiteralRegExpExpression {
            pattern: pattern.into(),
            flags: flags.into(),
        })
    }

    pub fn binary(left: Self, operator: BinaryOperator, right: Self) -> Self {
        Self::BinaryExpression(BinaryExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Create a call with plain (non-spread) arguments: `callee(args)`
    pub fn call(callee: Self, arguments: Vec<Self>) -> Self {
        Self::CallExpression(CallExpression {
            callee: ExpressionSuper::Expression(Box::new(callee)),
            arguments: arguments
                .into_iter()
                .map(SpreadElementExpression::Expression)
                .collect(),
        })
    }

    pub fn new_expr(callee: Self, arguments: Vec<Self>) -> Self {
        Self::NewExpression(NewExpression {
            callee: Box::new(callee),
            arguments: arguments
                .into_iter()
                .map(SpreadElementExpression::Expression)
                .collect(),
        })
    }

    /// Create a property access: `object.property`
    pub fn member(object: Self, property: impl Into<String>) -> Self {
        Self::StaticMemberExpression(StaticMemberExpression {
            object: ExpressionSuper::Expression(Box::new(object)),
            property: property.into(),
        })
    }

    /// Create an element access: `object[expression]`
    pub fn computed_member(object: Self, expression: Self) -> Self {
        Self::ComputedMemberExpression(ComputedMemberExpression {
            object: ExpressionSuper::Expression(Box::new(object)),
            expression: Box::new(expression),
        })
    }

    /// Create `name = value` with an identifier target.
    pub fn assign(name: impl Into<String>, value: Self) -> Self {
        Self::AssignmentExpression(AssignmentExpression {
            binding: AssignmentTarget::Simple(SimpleAssignmentTarget::identifier(name)),
            expression: Box::new(value),
        })
    }

    /// Create an untagged template from alternating chunks and expressions.
    ///
    /// `chunks` must have exactly one more entry than `expressions`.
    pub fn template(chunks: &[&str], expressions: Vec<Self>) -> Self {
        Self::TemplateExpression(TemplateExpression {
            tag: None,
            elements: template_items(chunks, expressions),
        })
    }

    pub fn tagged_template(tag: Self, chunks: &[&str], expressions: Vec<Self>) -> Self {
        Self::TemplateExpression(TemplateExpression {
            tag: Some(Box::new(tag)),
            elements: template_items(chunks, expressions),
        })
    }

    /// Create an anonymous `function () { body }` expression.
    pub fn function(body: Vec<Statement>) -> Self {
        Self::FunctionExpression(FunctionExpression {
            is_async: false,
            is_generator: false,
            name: None,
            params: FormalParameters::default(),
            body: FunctionBody {
                directives: Vec::new(),
                statements: body,
            },
        })
    }

    pub fn object(properties: Vec<ObjectProperty>) -> Self {
        Self::ObjectExpression(ObjectExpression { properties })
    }
}

fn template_items(chunks: &[&str], expressions: Vec<Expression>) -> Vec<TemplateItem> {
    let mut items = Vec::with_capacity(chunks.len() + expressions.len());
    let mut expressions = expressions.into_iter();
    for (i, chunk) in chunks.iter().enumerate() {
        if i > 0 {
            if let Some(expr) = expressions.next() {
                items.push(TemplateItem::Expression(expr));
            }
        }
        items.push(TemplateItem::TemplateElement(TemplateElement {
            raw_value: (*chunk).to_string(),
        }));
    }
    items
}

impl SimpleAssignmentTarget {
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::AssignmentTargetIdentifier(AssignmentTargetIdentifier { name: name.into() })
    }
}

impl Binding {
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::BindingIdentifier(BindingIdentifier { name: name.into() })
    }
}

impl PropertyName {
    pub fn named(value: impl Into<String>) -> Self {
        Self::StaticPropertyName(StaticPropertyName {
            value: value.into(),
        })
    }
}

impl ObjectProperty {
    pub fn data(name: impl Into<String>, expression: Expression) -> Self {
        Self::DataProperty(DataProperty {
            name: PropertyName::named(name),
            expression,
        })
    }
}

impl Statement {
    /// Create an expression statement: `expr;`
    pub const fn expression(expression: Expression) -> Self {
        Self::ExpressionStatement(ExpressionStatement { expression })
    }

    pub const fn block(statements: Vec<Self>) -> Self {
        Self::BlockStatement(BlockStatement {
            block: Block { statements },
        })
    }

    pub const fn ret(expression: Option<Expression>) -> Self {
        Self::ReturnStatement(ReturnStatement { expression })
    }

    /// Create a single-declarator declaration: `kind name = init;`
    pub fn declare(
        kind: VariableDeclarationKind,
        name: impl Into<String>,
        init: Option<Expression>,
    ) -> Self {
        Self::VariableDeclarationStatement(VariableDeclarationStatement {
            declaration: VariableDeclaration {
                kind,
                declarators: vec![VariableDeclarator {
                    binding: Binding::identifier(name),
                    init,
                }],
            },
        })
    }

    pub fn if_else(test: Expression, consequent: Self, alternate: Option<Self>) -> Self {
        Self::IfStatement(IfStatement {
            test,
            consequent: Box::new(consequent),
            alternate: alternate.map(Box::new),
        })
    }
}

impl Directive {
    pub fn new(raw_value: impl Into<String>) -> Self {
        Self {
            raw_value: raw_value.into(),
        }
    }
}

impl Script {
    pub const fn new(statements: Vec<Statement>) -> Self {
        Self {
            directives: Vec::new(),
            statements,
        }
    }

    pub fn with_directives(mut self, directives: Vec<Directive>) -> Self {
        self.directives = directives;
        self
    }
}

impl Module {
    pub const fn new(items: Vec<ModuleItem>) -> Self {
        Self {
            directives: Vec::new(),
            items,
        }
    }
}
