//! Web-safe output: pure ASCII that can be inlined in an HTML `<script>`
//! element without closing it.

use esgen_ast::{BinaryOperator, Directive, Expression, Module, ModuleItem, Program, Script, Statement};
use esgen_emitter::{is_web_safe, pretty, web_safe, web_safe_module, web_safe_script};

fn ident(name: &str) -> Expression {
    Expression::identifier(name)
}

fn render_expr(expression: Expression) -> String {
    let output = web_safe(&Program::Script(Script::new(vec![Statement::expression(expression)])));
    assert!(is_web_safe(&output), "unsafe output: {output}");
    output
}

fn directive_script(raw: &str) -> Program {
    Program::Script(Script::new(Vec::new()).with_directives(vec![Directive::new(raw)]))
}

#[test]
fn test_directive_quoting() {
    assert_eq!(web_safe(&directive_script(r#"he said "hi""#)), r#"'he said "hi"';"#);
    assert_eq!(web_safe(&directive_script("it's fine")), r#""it's fine";"#);
    assert_eq!(web_safe(&directive_script("use strict")), r#""use strict";"#);
    // an escaped quote does not force the other delimiter
    assert_eq!(web_safe(&directive_script(r#"a\"b"#)), r#""a\"b";"#);
}

#[test]
fn test_directive_is_sanitized() {
    let output = web_safe(&directive_script("</script>"));
    assert_eq!(output, r#""</\x73cript>";"#);
    assert!(is_web_safe(&output));
}

#[test]
fn test_template_layout() {
    let template = Expression::template(&["a", "b", "c"], vec![ident("x"), ident("y")]);
    assert_eq!(render_expr(template), "`a${x}b${y}c`;");

    let empty_chunks = Expression::template(&["", ""], vec![ident("x")]);
    assert_eq!(render_expr(empty_chunks), "`${x}`;");

    let tagged = Expression::tagged_template(ident("tag"), &["a"], Vec::new());
    assert_eq!(render_expr(tagged), "tag`a`;");
}

#[test]
fn test_non_ascii_string() {
    let program = Program::Script(Script::new(vec![Statement::expression(Expression::string(
        "é",
    ))]));
    assert_eq!(web_safe(&program), "\"\\u00E9\";");
    assert_eq!(pretty(&program), "\"é\";\n");
}

#[test]
fn test_astral_characters_become_surrogate_pairs() {
    assert_eq!(
        render_expr(Expression::string("\u{1F600}")),
        "\"\\uD83D\\uDE00\";"
    );
}

#[test]
fn test_non_ascii_identifier() {
    assert_eq!(render_expr(ident("café")), "caf\\u00E9;");
}

#[test]
fn test_astral_identifier_uses_code_point_escape() {
    assert_eq!(render_expr(ident("\u{1D400}")), "\\u{1D400};");
}

#[test]
fn test_line_continuation_in_template() {
    let template = Expression::template(&["a\\\u{2028}b"], Vec::new());
    let program = Program::Script(Script::new(vec![Statement::expression(template.clone())]));
    assert_eq!(pretty(&program), "`a\\\u{2028}b`;\n");
    assert_eq!(render_expr(template), "`a\\\nb`;");
}

#[test]
fn test_line_continuation_in_directive() {
    let output = web_safe(&directive_script("a\\\u{2029}b"));
    assert_eq!(output, "\"a\\\nb\";");
    assert!(is_web_safe(&output));
}

#[test]
fn test_script_tag_in_string() {
    assert_eq!(
        render_expr(Expression::string("</script>")),
        r#""</\x73cript>";"#
    );
    assert_eq!(
        render_expr(Expression::string("<SCRIPT src=x>")),
        r#""<\x53CRIPT src=x>";"#
    );
    // `$` in the payload is copied verbatim
    assert_eq!(
        render_expr(Expression::string("$1</script>")),
        r#""$1</\x73cript>";"#
    );
    // no terminator, no tag
    assert_eq!(render_expr(Expression::string("<scripts")), r#""<scripts";"#);
}

#[test]
fn test_script_tag_in_regexp() {
    assert_eq!(
        render_expr(Expression::regexp("</script", "g")),
        r"/</\x73cript/g;"
    );
    // an identity escape is folded, not doubled
    assert_eq!(render_expr(Expression::regexp("\\é", "")), "/\\u00E9/;");
}

#[test]
fn test_script_tag_in_template() {
    let template = Expression::template(&["</script>"], Vec::new());
    assert_eq!(render_expr(template), r"`</\x73cript>`;");
}

#[test]
fn test_script_tag_across_tokens() {
    let less = Expression::binary(ident("a"), BinaryOperator::LessThan, ident("script"));
    assert_eq!(render_expr(less), "a< script;");

    let regexp = Expression::binary(ident("a"), BinaryOperator::LessThan, Expression::regexp("script", ""));
    assert_eq!(render_expr(regexp), "a< /script/;");
}

#[test]
fn test_let_hazards_survive() {
    assert_eq!(
        render_expr(Expression::computed_member(ident("let"), ident("a"))),
        "(let[a]);"
    );
    assert_eq!(render_expr(ident("let")), "let;");
}

#[test]
fn test_numbers_are_compact() {
    assert_eq!(render_expr(Expression::number(1000.0)), "1e3;");
}

#[test]
fn test_per_root_entry_points() {
    let statements = vec![Statement::expression(Expression::string("ü"))];
    assert_eq!(
        web_safe_script(&Script::new(statements.clone())),
        "\"\\u00FC\";"
    );

    let module = Module::new(statements.into_iter().map(ModuleItem::Statement).collect());
    assert_eq!(web_safe_module(&module), "\"\\u00FC\";");
}
