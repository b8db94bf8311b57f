use super::*;
use crate::options::NewLineKind;

fn compact(tokens: &[&str]) -> String {
    let mut ts = TokenStream::compact();
    for token in tokens {
        ts.put(token);
    }
    ts.finish()
}

#[test]
fn test_identifiers_are_separated() {
    assert_eq!(compact(&["var", "a", "=", "b"]), "var a=b");
    assert_eq!(compact(&["typeof", "$x"]), "typeof $x");
    assert_eq!(compact(&["a", "\\u0062"]), "a \\u0062");
}

#[test]
fn test_operator_merges_are_separated() {
    assert_eq!(compact(&["a", "+", "+", "b"]), "a+ +b");
    assert_eq!(compact(&["a", "-", "--", "b"]), "a- --b");
    assert_eq!(compact(&["a", "+", "-", "b"]), "a+-b");
    assert_eq!(compact(&["/a/", "in", "b"]), "/a/ in b");
    assert_eq!(compact(&["/a/", "/", "b"]), "/a/ / b");
    assert_eq!(compact(&["/a/", "*", "b"]), "/a/ *b");
}

#[test]
fn test_html_comment_openers_are_separated() {
    assert_eq!(compact(&["a", "<", "!", "--", "b"]), "a< !--b");
    assert_eq!(compact(&["a", "--", ">", "b"]), "a-- >b");
    assert_eq!(compact(&["a", "-", ">", "b"]), "a->b");
}

#[test]
fn test_integer_member_access() {
    let mut ts = TokenStream::compact();
    ts.put_number(1.0);
    ts.put(".");
    ts.put("toString");
    assert_eq!(ts.finish(), "1 .toString");

    let mut ts = TokenStream::compact();
    ts.put_number(1.5);
    ts.put(".");
    ts.put("toFixed");
    assert_eq!(ts.finish(), "1.5.toFixed");
}

#[test]
fn test_compact_drops_semicolon_before_brace() {
    let mut ts = TokenStream::compact();
    ts.put("{");
    ts.put("a");
    ts.put_optional_semi();
    ts.put("b");
    ts.put_optional_semi();
    ts.put("}");
    ts.put("c");
    ts.put_optional_semi();
    assert_eq!(ts.finish(), "{a;b}c;");
}

#[test]
fn test_compact_ignores_layout() {
    let mut ts = TokenStream::compact();
    ts.put("a");
    ts.put_space();
    ts.put("=");
    ts.put_break();
    ts.indent();
    ts.put("b");
    assert_eq!(ts.finish(), "a=b");
}

#[test]
fn test_pretty_layout() {
    let mut ts = TokenStream::pretty();
    ts.put("if");
    ts.put_space();
    ts.put("(");
    ts.put("a");
    ts.put(")");
    ts.put_space();
    ts.put("{");
    ts.indent();
    ts.put_break();
    ts.put("b");
    ts.put_optional_semi();
    ts.dedent();
    ts.put_break();
    ts.put("}");
    assert_eq!(ts.finish(), "if (a) {\n  b;\n}\n");
}

#[test]
fn test_pretty_options() {
    let options = PrintOptions::pretty()
        .with_indent_width(4)
        .with_new_line(NewLineKind::CarriageReturnLineFeed);
    let mut ts = TokenStream::new(&options);
    ts.put("{");
    ts.indent();
    ts.put_break();
    ts.put("x");
    ts.dedent();
    ts.put_break();
    ts.put("}");
    assert_eq!(ts.finish(), "{\r\n    x\r\n}\r\n");
}

#[test]
fn test_pretty_leading_layout_is_dropped() {
    let mut ts = TokenStream::pretty();
    ts.put_break();
    ts.put_space();
    ts.put("a");
    assert_eq!(ts.finish(), "a\n");
    assert_eq!(TokenStream::pretty().finish(), "");
}

#[test]
fn test_web_safe_sanitizes_tokens() {
    let mut ts = WebSafeTokenStream::new();
    ts.put("\"</script>\"");
    ts.put_optional_semi();
    ts.put("\"é\"");
    assert_eq!(ts.finish(), "\"</\\x73cript>\";\"\\u00E9\"");
}

#[test]
fn test_web_safe_breaks_openers_across_tokens() {
    let mut ts = WebSafeTokenStream::new();
    for token in ["a", "<", "script", ">", "b"] {
        ts.put(token);
    }
    assert_eq!(ts.finish(), "a< script>b");

    let mut ts = WebSafeTokenStream::new();
    for token in ["a", "<", "/SCRIPT/"] {
        ts.put(token);
    }
    assert_eq!(ts.finish(), "a< /SCRIPT/");
}

#[test]
fn test_web_safe_ignores_layout() {
    let mut ts = WebSafeTokenStream::new();
    ts.put("a");
    ts.put_space();
    ts.put_break();
    ts.put("=");
    ts.put_number(1000.0);
    assert_eq!(ts.finish(), "a=1e3");
}
