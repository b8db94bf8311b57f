//! Property-based tests for literal sanitization.
//!
//! Arbitrary text, and text built from fragments that are known to be
//! troublesome, must come out of the pipeline as web-safe, and must not
//! change when sanitized again.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::borrow::Cow;

use esgen_ast::{Expression, Program, Script, Statement};
use esgen_emitter::{is_web_safe, sanitize, web_safe};
use proptest::prelude::*;

const FRAGMENTS: &[&str] = &[
    "<script",
    "</script",
    "<SCRIPT",
    "</sCrIpT",
    ">",
    " ",
    "/",
    "\t",
    "\0",
    "\\",
    "$1",
    "${x}",
    "é",
    "\u{2028}",
    "\u{1F600}",
    "a",
    "<",
    "s",
];

/// Text assembled from troublesome fragments.
fn hostile_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..24).prop_map(|parts| parts.concat())
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![any::<String>(), hostile_text()]
}

fn render_expression(expression: Expression) -> String {
    web_safe(&Program::Script(Script::new(vec![Statement::expression(expression)])))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn sanitized_text_is_web_safe(text in any_text()) {
        let sanitized = sanitize(&text);
        prop_assert!(is_web_safe(&sanitized), "not web-safe: {:?}", sanitized);
    }

    #[test]
    fn sanitize_is_idempotent(text in any_text()) {
        let once = sanitize(&text).into_owned();
        let twice = sanitize(&once);
        prop_assert_eq!(twice.as_ref(), once.as_str());
    }

    #[test]
    fn safe_text_is_borrowed(text in prop::string::string_regex("[a-z0-9 ;=(){}<>/]{0,40}").expect("valid regex")) {
        prop_assume!(is_web_safe(&text));
        prop_assert!(matches!(sanitize(&text), Cow::Borrowed(_)));
    }

    #[test]
    fn string_literals_render_web_safe(text in any_text()) {
        let output = render_expression(Expression::string(text));
        prop_assert!(is_web_safe(&output), "not web-safe: {:?}", output);
    }

    #[test]
    fn regexp_literals_render_web_safe(pattern in hostile_text()) {
        let output = render_expression(Expression::regexp(pattern, "g"));
        prop_assert!(is_web_safe(&output), "not web-safe: {:?}", output);
    }

    #[test]
    fn templates_render_web_safe(head in any_text(), tail in any_text()) {
        let template = Expression::template(&[head.as_str(), tail.as_str()], vec![Expression::identifier("x")]);
        let output = render_expression(template);
        prop_assert!(is_web_safe(&output), "not web-safe: {:?}", output);
    }
}
