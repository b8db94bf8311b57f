//! Token streams: the sinks `CodeRep` fragments are written into.
//!
//! A stream owns the output buffer and decides everything that is not a
//! token: where a space is needed to keep two tokens apart, where optional
//! whitespace goes in pretty output, and when a statement-terminating `;`
//! can be dropped in compact output.

use crate::literals::{is_identifier_part, number_to_js};
use crate::options::{PrintOptions, RenderMode};
use crate::sanitize::{forms_script_tag_across, sanitize};

pub trait TokenSink {
    fn put(&mut self, token: &str);
    fn put_number(&mut self, value: f64);
    /// `;` ending a statement. Compact output drops it before `}`.
    fn put_optional_semi(&mut self);
    /// Optional space; pretty output only.
    fn put_space(&mut self);
    /// Optional line break; pretty output only.
    fn put_break(&mut self);
    fn indent(&mut self);
    fn dedent(&mut self);
    fn finish(self) -> String
    where
        Self: Sized;
}

/// Pretty or compact token stream.
#[derive(Debug)]
pub struct TokenStream {
    out: String,
    compact: bool,
    indent_unit: String,
    new_line: &'static str,
    level: usize,
    pending_space: bool,
    pending_break: bool,
    pending_semi: bool,
    /// Last token written was an integer literal (`1.x` would lex as a
    /// fraction).
    last_integer: bool,
}

impl TokenStream {
    pub fn new(options: &PrintOptions) -> Self {
        Self {
            out: String::with_capacity(1024),
            compact: options.mode != RenderMode::Pretty,
            indent_unit: " ".repeat(options.indent_width),
            new_line: options.new_line.as_str(),
            level: 0,
            pending_space: false,
            pending_break: false,
            pending_semi: false,
            last_integer: false,
        }
    }

    pub fn pretty() -> Self {
        Self::new(&PrintOptions::pretty())
    }

    pub fn compact() -> Self {
        Self::new(&PrintOptions::compact())
    }

    pub const fn is_compact(&self) -> bool {
        self.compact
    }

    /// Output written so far, excluding pending whitespace and semicolons.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Write `token`, adding a separating space when the default merge rules
    /// or `separate` (given the output written so far) ask for one.
    pub(crate) fn write_token(&mut self, token: &str, separate: impl FnOnce(&str) -> bool) {
        if token.is_empty() {
            return;
        }
        if self.pending_semi {
            self.pending_semi = false;
            if token != "}" {
                self.write_raw(";");
            }
        }

        if self.pending_break && !self.out.is_empty() {
            self.out.push_str(self.new_line);
            for _ in 0..self.level {
                self.out.push_str(&self.indent_unit);
            }
        } else if (self.pending_space && !self.out.is_empty())
            || self.needs_separator(token)
            || separate(&self.out)
        {
            self.out.push(' ');
        }
        self.pending_break = false;
        self.pending_space = false;

        self.write_raw(token);
    }

    fn write_raw(&mut self, token: &str) {
        self.out.push_str(token);
        self.last_integer = token.bytes().all(|b| b.is_ascii_digit());
    }

    /// Tokens that would lex differently if written back to back.
    fn needs_separator(&self, token: &str) -> bool {
        let mut tail = self.out.chars().rev();
        let (Some(last), Some(next)) = (tail.next(), token.chars().next()) else {
            return false;
        };
        match (last, next) {
            _ if is_identifier_part(last) && is_identifier_part(next) => true,
            ('+', '+') | ('-', '-') => true,
            // `//` and `/*` open comments, `/re/ in x` would read `in` as flags
            ('/', '/' | '*') => true,
            ('/', c) if is_identifier_part(c) => true,
            (_, '.') if self.last_integer => true,
            // `<!--` and `-->` are HTML-like comments
            ('<', '!') => true,
            ('-', '>') => tail.next() == Some('-'),
            _ => false,
        }
    }
}

impl TokenSink for TokenStream {
    fn put(&mut self, token: &str) {
        self.write_token(token, |_| false);
    }

    fn put_number(&mut self, value: f64) {
        let text = number_to_js(value, self.compact);
        self.put(&text);
    }

    fn put_optional_semi(&mut self) {
        if self.compact {
            if self.pending_semi {
                self.write_raw(";");
            }
            self.pending_semi = true;
        } else {
            self.put(";");
        }
    }

    fn put_space(&mut self) {
        if !self.compact {
            self.pending_space = true;
        }
    }

    fn put_break(&mut self) {
        if !self.compact {
            self.pending_break = true;
        }
    }

    fn indent(&mut self) {
        self.level += 1;
    }

    fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    fn finish(mut self) -> String {
        if self.pending_semi {
            self.write_raw(";");
        }
        if !self.compact && !self.out.is_empty() {
            self.out.push_str(self.new_line);
        }
        self.out
    }
}

/// Compact stream for output inlined in an HTML `<script>` element.
///
/// Every token is sanitized, and a space is inserted wherever two tokens
/// would spell `<script` or `</script` across their boundary.
#[derive(Debug)]
pub struct WebSafeTokenStream {
    inner: TokenStream,
}

impl WebSafeTokenStream {
    pub fn new() -> Self {
        Self {
            inner: TokenStream::compact(),
        }
    }
}

impl Default for WebSafeTokenStream {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSink for WebSafeTokenStream {
    fn put(&mut self, token: &str) {
        let token = sanitize(token);
        self.inner
            .write_token(&token, |out| forms_script_tag_across(out, &token));
    }

    fn put_number(&mut self, value: f64) {
        self.inner.put_number(value);
    }

    fn put_optional_semi(&mut self) {
        self.inner.put_optional_semi();
    }

    fn put_space(&mut self) {}

    fn put_break(&mut self) {}

    fn indent(&mut self) {}

    fn dedent(&mut self) {}

    fn finish(self) -> String {
        self.inner.finish()
    }
}

#[cfg(test)]
#[path = "../tests/token_stream.rs"]
mod tests;
