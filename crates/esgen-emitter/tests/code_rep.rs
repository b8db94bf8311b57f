use super::*;
use crate::token_stream::TokenStream;

fn render(rep: &CodeRep, mut ts: TokenStream) -> String {
    rep.emit(&mut ts, false);
    ts.finish()
}

fn compact(rep: &CodeRep) -> String {
    render(rep, TokenStream::compact())
}

fn curly() -> CodeRep {
    CodeRep::brace(CodeRep::empty()).with_flags(RepFlags::STARTS_WITH_CURLY)
}

fn let_ident() -> CodeRep {
    CodeRep::token("let").with_flags(RepFlags::STARTS_WITH_LET)
}

#[test]
fn test_leaves_carry_no_flags() {
    assert!(CodeRep::token("a").flags().is_empty());
    assert!(CodeRep::number(1.0).flags().is_empty());
    assert!(CodeRep::empty().is_blank());
    assert!(CodeRep::space().is_blank());
    assert!(!CodeRep::semi().is_blank());
}

#[test]
fn test_seq_takes_leading_flags_from_first_child() {
    let rep = CodeRep::seq(vec![curly(), CodeRep::token("="), let_ident()]);
    assert!(rep.starts_with_curly());
    assert!(!rep.starts_with_let());

    // blank children do not occupy the leftmost position
    let rep = CodeRep::seq(vec![CodeRep::empty(), CodeRep::space(), let_ident()]);
    assert!(rep.starts_with_let());
}

#[test]
fn test_seq_takes_trailing_flags_from_last_child() {
    let missing_else = CodeRep::token("x").with_flags(RepFlags::ENDS_WITH_MISSING_ELSE);
    let rep = CodeRep::seq(vec![CodeRep::token("while"), missing_else.clone()]);
    assert!(rep.ends_with_missing_else());

    let rep = CodeRep::seq(vec![missing_else, CodeRep::token(";")]);
    assert!(!rep.ends_with_missing_else());
}

#[test]
fn test_delimiters_clear_flags() {
    assert!(CodeRep::paren(curly()).flags().is_empty());
    assert!(CodeRep::bracket(let_ident()).flags().is_empty());
    assert!(CodeRep::brace(let_ident()).flags().is_empty());
    assert!(CodeRep::block(vec![curly()]).flags().is_empty());
}

#[test]
fn test_statement_start_hazards() {
    assert!(curly().has(STATEMENT_START_HAZARDS));
    assert!(
        CodeRep::token("function")
            .with_flags(RepFlags::STARTS_WITH_FUNCTION_OR_CLASS)
            .has(STATEMENT_START_HAZARDS)
    );
    // a lone `let` is fine at statement start, `let [` is not
    assert!(!let_ident().has(STATEMENT_START_HAZARDS));
    assert!(
        let_ident()
            .with_flags(RepFlags::STARTS_WITH_LET_SQUARE_BRACKET)
            .has(STATEMENT_START_HAZARDS)
    );
}

#[test]
fn test_comma_sep_takes_first_item_flags() {
    let rep = CodeRep::comma_sep(vec![curly(), CodeRep::token("b")]);
    assert!(rep.starts_with_curly());
    assert_eq!(compact(&rep), "{},b");
}

#[test]
fn test_contains_in_is_parenthesized_under_no_in() {
    let in_expr = CodeRep::contains_in(CodeRep::seq(vec![
        CodeRep::token("a"),
        CodeRep::token("in"),
        CodeRep::token("b"),
    ]));
    assert_eq!(compact(&in_expr), "a in b");
    assert_eq!(compact(&CodeRep::no_in(in_expr.clone())), "(a in b)");

    // a delimiter ends the restricted context
    let call = CodeRep::seq(vec![CodeRep::token("f"), CodeRep::paren(in_expr)]);
    assert_eq!(compact(&CodeRep::no_in(call)), "f(a in b)");
}

#[test]
fn test_block_layout() {
    let block = CodeRep::block(vec![
        CodeRep::seq(vec![CodeRep::token("a"), CodeRep::semi_op()]),
        CodeRep::seq(vec![CodeRep::token("b"), CodeRep::semi_op()]),
    ]);
    assert_eq!(render(&block, TokenStream::pretty()), "{\n  a;\n  b;\n}\n");
    assert_eq!(compact(&block), "{a;b}");
    assert_eq!(compact(&CodeRep::block(Vec::new())), "{}");
}

#[test]
fn test_numbers_follow_stream_mode() {
    let rep = CodeRep::number(1000.0);
    assert_eq!(render(&rep, TokenStream::pretty()), "1000\n");
    assert_eq!(compact(&rep), "1e3");
}
