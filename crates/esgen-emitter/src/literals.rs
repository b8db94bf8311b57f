//! Literal text helpers: string quoting, number formatting, identifier names.

use std::fmt::Write;

/// Quote a string value as a JavaScript string literal.
///
/// Picks the delimiter needing fewer escapes, preferring `"` on ties, and
/// escapes backslash, the delimiter, control characters and the two
/// line-terminator code points that are legal in JSON but not in ES5
/// string literals.
pub fn escape_string_literal(value: &str) -> String {
    let doubles = value.chars().filter(|&c| c == '"').count();
    let singles = value.chars().filter(|&c| c == '\'').count();
    let delimiter = if doubles > singles { '\'' } else { '"' };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(delimiter);
    for c in value.chars() {
        match c {
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{B}' => out.push_str("\\v"),
            '\u{C}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            // `\0` would read as a legacy octal escape before a digit
            '\0' => out.push_str("\\x00"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c == '\x7F' => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

/// Render a numeric literal.
///
/// Pretty output follows `Number.prototype.toString`: plain decimal notation
/// between `1e-6` and `1e21`, exponent notation outside. Compact output picks
/// the shortest of the decimal and exponent forms, dropping a leading zero.
/// Infinity has no literal form and renders as `2e308`.
pub fn number_to_js(value: f64, compact: bool) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "2e308" } else { "-2e308" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    if !compact {
        let magnitude = value.abs();
        if (1e-6..1e21).contains(&magnitude) {
            return format!("{value}");
        }
        let exponent = format!("{value:e}");
        return match exponent.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => exponent,
        };
    }

    let decimal = format!("{value}");
    let decimal = if let Some(rest) = decimal.strip_prefix("0.") {
        format!(".{rest}")
    } else if let Some(rest) = decimal.strip_prefix("-0.") {
        format!("-.{rest}")
    } else {
        decimal
    };
    let exponent = format!("{value:e}");
    if exponent.len() < decimal.len() {
        exponent
    } else {
        decimal
    }
}

/// True for characters that can continue an identifier or numeric token.
/// Non-ASCII characters and `\` (the start of a unicode escape) count.
pub fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '$' || c == '_' || c == '\\' || !c.is_ascii()
}

fn is_identifier_start_char(c: char) -> bool {
    c == '$' || c == '_' || c.is_alphabetic()
}

fn is_identifier_continue_char(c: char) -> bool {
    c == '$' || c == '_' || c == '\u{200C}' || c == '\u{200D}' || c.is_alphanumeric()
}

/// True if `name` can be written as a bare property name.
pub fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_identifier_start_char) && chars.all(is_identifier_continue_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_choice() {
        assert_eq!(escape_string_literal("plain"), r#""plain""#);
        assert_eq!(escape_string_literal(r#"say "hi""#), r#"'say "hi"'"#);
        assert_eq!(escape_string_literal("it's"), r#""it's""#);
        // tie goes to double quotes
        assert_eq!(escape_string_literal(r#"'""#), r#""'\"""#);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(escape_string_literal("a\nb\tc"), r#""a\nb\tc""#);
        assert_eq!(escape_string_literal("\\"), r#""\\""#);
        assert_eq!(escape_string_literal("\u{2028}"), r#""\u2028""#);
        assert_eq!(escape_string_literal("\u{0}1"), r#""\x001""#);
        assert_eq!(escape_string_literal("\u{1}"), r#""\u0001""#);
        assert_eq!(escape_string_literal("é"), "\"é\"");
    }

    #[test]
    fn test_pretty_numbers() {
        assert_eq!(number_to_js(0.0, false), "0");
        assert_eq!(number_to_js(-0.0, false), "0");
        assert_eq!(number_to_js(1.0, false), "1");
        assert_eq!(number_to_js(1000.0, false), "1000");
        assert_eq!(number_to_js(0.5, false), "0.5");
        assert_eq!(number_to_js(1e21, false), "1e+21");
        assert_eq!(number_to_js(1.5e-7, false), "1.5e-7");
        assert_eq!(number_to_js(f64::INFINITY, false), "2e308");
    }

    #[test]
    fn test_compact_numbers() {
        assert_eq!(number_to_js(1000.0, true), "1e3");
        assert_eq!(number_to_js(100.0, true), "100");
        assert_eq!(number_to_js(0.5, true), ".5");
        assert_eq!(number_to_js(0.0001, true), "1e-4");
        assert_eq!(number_to_js(123.25, true), "123.25");
        assert_eq!(number_to_js(f64::INFINITY, true), "2e308");
    }

    #[test]
    fn test_identifier_names() {
        assert!(is_identifier_name("foo"));
        assert!(is_identifier_name("$_1"));
        assert!(is_identifier_name("class"));
        assert!(is_identifier_name("café"));
        assert!(!is_identifier_name(""));
        assert!(!is_identifier_name("1a"));
        assert!(!is_identifier_name("a-b"));
        assert!(!is_identifier_name("a b"));
    }
}
