//! Literal sanitization for output embedded in an HTML `<script>` element.
//!
//! Three ordered rewrite passes turn arbitrary literal text into pure ASCII
//! that never contains a `<script` or `</script` tag opener:
//!
//! 1. NUL becomes `\x00`.
//! 2. Every code unit of a non-ASCII character becomes `\uXXXX` (astral
//!    characters become a surrogate pair).
//! 3. In `<script` / `</script` followed by a tag terminator, the `s` becomes
//!    `\x73` (or `\x53` for `S`), case-insensitively.
//!
//! Passes 1 and 2 run first so that pass 3 sees the final character set.
//! Every escape produced evaluates to the character it replaced, inside
//! string literals, regular expressions and template literals alike. An
//! identity escape (`\é`) is folded into the new escape so that the
//! backslash is not doubled into a literal one. A backslash before U+2028 or
//! U+2029 is a line continuation, not an identity escape; it is rewritten to
//! a backslash before LF, which is still a line continuation.
//!
//! Identifier names use `sanitize_identifier`: escape sequences inside an
//! identifier must denote whole code points, so astral characters become
//! `\u{XXXXX}` there instead of a surrogate pair.

use std::borrow::Cow;
use std::fmt::Write;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

static NUL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\\*)\x00").expect("valid regex"));

static NON_ASCII: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\\*)([^\x00-\x7F])").expect("valid regex"));

static ASTRAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{10000}-\x{10FFFF}]").expect("valid regex"));

static SCRIPT_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<(/?)(s)(cript[\t\n\x0C\r />])").expect("valid regex")
});

/// Tag opener without its terminator, used at token boundaries where the
/// terminator has not been written yet.
static SCRIPT_TAG_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?script").expect("valid regex"));

/// One rewrite pass: every match of `pattern` is replaced by the text
/// `replace` computes from it.
pub struct Pass {
    pub name: &'static str,
    pattern: &'static Lazy<Regex>,
    replace: fn(&Captures<'_>) -> String,
}

impl Pass {
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        replace_all(self.pattern, text, self.replace)
    }
}

impl std::fmt::Debug for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pass")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// The sanitization pipeline, in application order.
pub static PIPELINE: [Pass; 3] = [
    Pass {
        name: "nul",
        pattern: &NUL,
        replace: escape_nul,
    },
    Pass {
        name: "non-ascii",
        pattern: &NON_ASCII,
        replace: escape_non_ascii,
    },
    Pass {
        name: "script-tag",
        pattern: &SCRIPT_TAG,
        replace: defeat_script_tag,
    },
];

/// Run the whole pipeline over `text`. Borrows when nothing changes.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    let mut current = Cow::Borrowed(text);
    for pass in &PIPELINE {
        let rewritten = match pass.apply(&current) {
            Cow::Borrowed(_) => None,
            Cow::Owned(rewritten) => Some(rewritten),
        };
        if let Some(rewritten) = rewritten {
            trace!(pass = pass.name, "rewrote literal text");
            current = Cow::Owned(rewritten);
        }
    }
    current
}

/// Run the pipeline over an identifier name, escaping astral characters as
/// code point escapes first.
pub fn sanitize_identifier(name: &str) -> Cow<'_, str> {
    match replace_all(&ASTRAL, name, escape_code_point) {
        Cow::Borrowed(name) => sanitize(name),
        Cow::Owned(escaped) => Cow::Owned(sanitize(&escaped).into_owned()),
    }
}

/// True if `text` is pure ASCII without NUL and contains no script-tag
/// opener.
pub fn is_web_safe(text: &str) -> bool {
    text.is_ascii() && memchr::memchr(0, text.as_bytes()).is_none() && !SCRIPT_TAG.is_match(text)
}

/// True if writing `right` directly after `left` would form `<script` or
/// `</script` across the boundary, terminated or not.
pub fn forms_script_tag_across(left: &str, right: &str) -> bool {
    const OPENER_LEN: usize = "</script".len();
    let tail = suffix(left, OPENER_LEN - 1);
    let head = prefix(right, OPENER_LEN);
    let window = format!("{tail}{head}");
    SCRIPT_TAG_PREFIX
        .find_iter(&window)
        .any(|m| m.start() < tail.len() && m.end() > tail.len())
}

fn suffix(text: &str, max_chars: usize) -> &str {
    let start = text
        .char_indices()
        .rev()
        .take(max_chars)
        .last()
        .map_or(text.len(), |(i, _)| i);
    &text[start..]
}

fn prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Scan `text` and rewrite every match of `pattern`.
///
/// The computed replacement goes through the template expansion of
/// `Captures::expand` only after `literally` has escaped it, so text such as
/// `$1` in a payload is copied verbatim.
pub fn replace_all<'t>(
    pattern: &Regex,
    text: &'t str,
    replace: impl Fn(&Captures<'_>) -> String,
) -> Cow<'t, str> {
    let mut out: Option<String> = None;
    let mut last = 0;
    for caps in pattern.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let out = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
        out.push_str(&text[last..whole.start()]);
        caps.expand(&literally(&replace(&caps)), out);
        last = whole.end();
    }
    match out {
        None => Cow::Borrowed(text),
        Some(mut out) => {
            out.push_str(&text[last..]);
            Cow::Owned(out)
        }
    }
}

/// Escape `text` for use as a replacement template so that it expands to
/// itself. `$` is the only metacharacter of the template syntax.
pub fn literally(text: &str) -> Cow<'_, str> {
    if memchr::memchr(b'$', text.as_bytes()).is_none() {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.replace('$', "$$"))
    }
}

/// Leading backslashes of the match, minus one that formed an identity
/// escape of the matched character.
fn kept_backslashes<'c>(caps: &Captures<'c>) -> &'c str {
    let run = caps.get(1).map_or("", |m| m.as_str());
    if run.len() % 2 == 1 {
        &run[..run.len() - 1]
    } else {
        run
    }
}

fn escape_nul(caps: &Captures<'_>) -> String {
    format!(r"{}\x00", kept_backslashes(caps))
}

fn escape_non_ascii(caps: &Captures<'_>) -> String {
    let run = caps.get(1).map_or("", |m| m.as_str());
    let matched = caps.get(2).map_or("", |m| m.as_str());
    if run.len() % 2 == 1 && matches!(matched, "\u{2028}" | "\u{2029}") {
        return format!("{run}\n");
    }
    let mut out = kept_backslashes(caps).to_string();
    for c in matched.chars() {
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
            let _ = write!(out, "\\u{unit:04X}");
        }
    }
    out
}

fn escape_code_point(caps: &Captures<'_>) -> String {
    caps.get(0)
        .and_then(|m| m.as_str().chars().next())
        .map_or_else(String::new, |c| format!("\\u{{{:X}}}", u32::from(c)))
}

fn defeat_script_tag(caps: &Captures<'_>) -> String {
    let slash = caps.get(1).map_or("", |m| m.as_str());
    let s = if caps.get(2).is_some_and(|m| m.as_str() == "S") {
        r"\x53"
    } else {
        r"\x73"
    };
    let rest = caps.get(3).map_or("", |m| m.as_str());
    format!("<{slash}{s}{rest}")
}

#[cfg(test)]
#[path = "../tests/sanitize.rs"]
mod tests;
