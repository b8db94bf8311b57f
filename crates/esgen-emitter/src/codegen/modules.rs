//! Program roots, directives, imports and exports.

use esgen_ast::{
    Directive, Export, ExportAllFrom, ExportDeclaration, ExportDefault, ExportDefaultBody,
    ExportFrom, ExportFromSpecifier, ExportLocalSpecifier, ExportLocals, Import,
    ImportNamespace, ImportSpecifier, Module, Precedence, Script,
};

use super::{p, space, token};
use crate::code_rep::CodeRep;
use crate::literals::escape_string_literal;

pub(super) fn script(_node: &Script, mut directives: Vec<CodeRep>, statements: Vec<CodeRep>) -> CodeRep {
    directives.extend(statements);
    CodeRep::lines(directives)
}

pub(super) fn module(_node: &Module, mut directives: Vec<CodeRep>, items: Vec<CodeRep>) -> CodeRep {
    directives.extend(items);
    CodeRep::lines(directives)
}

/// True if `raw` contains a `"` that no backslash escapes. Such a directive
/// must be delimited with `'`.
pub(super) fn has_unescaped_double_quote(raw: &str) -> bool {
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '"' => return true,
            _ => {}
        }
    }
    false
}

/// Directive with the given (already processed) raw text. The raw text is
/// written between the quotes as-is so the directive keeps its meaning.
pub(super) fn directive_with_text(raw: &str, text: &str) -> CodeRep {
    let delimiter = if has_unescaped_double_quote(raw) { '\'' } else { '"' };
    CodeRep::seq(vec![
        token(format!("{delimiter}{text}{delimiter}")),
        CodeRep::semi_op(),
    ])
}

pub(super) fn directive(node: &Directive) -> CodeRep {
    directive_with_text(&node.raw_value, &node.raw_value)
}

fn from_clause(module_specifier: &str) -> [CodeRep; 4] {
    [
        space(),
        token("from"),
        space(),
        token(escape_string_literal(module_specifier)),
    ]
}

pub(super) fn import(
    node: &Import,
    default_binding: Option<CodeRep>,
    named_imports: Vec<CodeRep>,
) -> CodeRep {
    let mut clause = Vec::new();
    if let Some(default_binding) = default_binding {
        clause.push(default_binding);
    }
    if !named_imports.is_empty() {
        clause.push(CodeRep::brace(CodeRep::comma_sep(named_imports)));
    }

    let mut parts = vec![token("import"), space()];
    if clause.is_empty() {
        // side-effect import
        parts.push(token(escape_string_literal(&node.module_specifier)));
    } else {
        parts.push(CodeRep::comma_sep(clause));
        parts.extend(from_clause(&node.module_specifier));
    }
    parts.push(CodeRep::semi_op());
    CodeRep::seq(parts)
}

pub(super) fn import_namespace(
    node: &ImportNamespace,
    default_binding: Option<CodeRep>,
    namespace_binding: CodeRep,
) -> CodeRep {
    let namespace = CodeRep::seq(vec![
        token("*"),
        space(),
        token("as"),
        space(),
        namespace_binding,
    ]);
    let clause = match default_binding {
        Some(default_binding) => CodeRep::comma_sep(vec![default_binding, namespace]),
        None => namespace,
    };
    let mut parts = vec![token("import"), space(), clause];
    parts.extend(from_clause(&node.module_specifier));
    parts.push(CodeRep::semi_op());
    CodeRep::seq(parts)
}

/// `name as alias`, or just `alias`.
fn specifier(name: Option<CodeRep>, alias: CodeRep) -> CodeRep {
    match name {
        Some(name) => CodeRep::seq(vec![name, space(), token("as"), space(), alias]),
        None => alias,
    }
}

pub(super) fn import_specifier(node: &ImportSpecifier, binding: CodeRep) -> CodeRep {
    specifier(node.name.as_deref().map(token), binding)
}

pub(super) fn export(node: &Export, declaration: CodeRep) -> CodeRep {
    let mut parts = vec![token("export"), space(), declaration];
    if matches!(node.declaration, ExportDeclaration::VariableDeclaration(_)) {
        parts.push(CodeRep::semi_op());
    }
    CodeRep::seq(parts)
}

pub(super) fn export_all_from(node: &ExportAllFrom) -> CodeRep {
    let mut parts = vec![token("export"), space(), token("*")];
    parts.extend(from_clause(&node.module_specifier));
    parts.push(CodeRep::semi_op());
    CodeRep::seq(parts)
}

pub(super) fn export_from(node: &ExportFrom, named_exports: Vec<CodeRep>) -> CodeRep {
    let mut parts = vec![
        token("export"),
        space(),
        CodeRep::brace(CodeRep::comma_sep(named_exports)),
    ];
    parts.extend(from_clause(&node.module_specifier));
    parts.push(CodeRep::semi_op());
    CodeRep::seq(parts)
}

pub(super) fn export_from_specifier(node: &ExportFromSpecifier) -> CodeRep {
    match node.exported_name.as_deref() {
        Some(exported) => specifier(Some(token(node.name.as_str())), token(exported)),
        None => token(node.name.as_str()),
    }
}

pub(super) fn export_locals(_node: &ExportLocals, named_exports: Vec<CodeRep>) -> CodeRep {
    CodeRep::seq(vec![
        token("export"),
        space(),
        CodeRep::brace(CodeRep::comma_sep(named_exports)),
        CodeRep::semi_op(),
    ])
}

pub(super) fn export_local_specifier(node: &ExportLocalSpecifier, name: CodeRep) -> CodeRep {
    match node.exported_name.as_deref() {
        Some(exported) => specifier(Some(name), token(exported)),
        None => name,
    }
}

pub(super) fn export_default(node: &ExportDefault, body: CodeRep) -> CodeRep {
    let head = [token("export"), space(), token("default"), space()];
    match &node.body {
        ExportDefaultBody::Expression(expr) => {
            let body = p(expr, Precedence::Assignment, body);
            // a leading `function` or `class` would make it a declaration
            let body = if body.starts_with_function_or_class() {
                CodeRep::paren(body)
            } else {
                body
            };
            let mut parts = Vec::from(head);
            parts.extend([body, CodeRep::semi_op()]);
            CodeRep::seq(parts)
        }
        ExportDefaultBody::FunctionDeclaration(_) | ExportDefaultBody::ClassDeclaration(_) => {
            let mut parts = Vec::from(head);
            parts.push(body);
            CodeRep::seq(parts)
        }
    }
}
