//! Output fragments.
//!
//! A `CodeRep` is an immutable tree of write operations produced for one AST
//! node. Besides the text it carries `RepFlags`: facts about the fragment's
//! leftmost token that an ancestor needs to decide whether extra tokens are
//! required, e.g. an expression statement starting with `{` must be
//! parenthesized or it would parse as a block.
//!
//! Flags are computed once, at construction:
//! - leaves (`token`, `number`) carry none;
//! - delimiters (`paren`, `bracket`, `brace`) carry none, their first token
//!   is the delimiter itself;
//! - `seq` takes the leading flags of its first non-blank child and the
//!   trailing flags of its last non-blank child;
//! - the generator sets a flag directly on the fragment of the node kind
//!   that introduces the hazard (`with_flags`).

use bitflags::bitflags;

use crate::token_stream::TokenSink;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RepFlags: u8 {
        /// First token is the identifier `let`.
        const STARTS_WITH_LET = 1 << 0;
        /// First token is `{`.
        const STARTS_WITH_CURLY = 1 << 1;
        /// Starts with `let` immediately followed by `[`.
        const STARTS_WITH_LET_SQUARE_BRACKET = 1 << 2;
        /// First token is `function`, `async function` or `class`.
        const STARTS_WITH_FUNCTION_OR_CLASS = 1 << 3;
        /// Ends with an `if` statement that has no `else`.
        const ENDS_WITH_MISSING_ELSE = 1 << 4;

        const LEADING = Self::STARTS_WITH_LET.bits()
            | Self::STARTS_WITH_CURLY.bits()
            | Self::STARTS_WITH_LET_SQUARE_BRACKET.bits()
            | Self::STARTS_WITH_FUNCTION_OR_CLASS.bits();
        const TRAILING = Self::ENDS_WITH_MISSING_ELSE.bits();
    }
}

/// Leading hazards that make an expression unusable as the start of an
/// expression statement.
pub const STATEMENT_START_HAZARDS: RepFlags = RepFlags::STARTS_WITH_CURLY
    .union(RepFlags::STARTS_WITH_LET_SQUARE_BRACKET)
    .union(RepFlags::STARTS_WITH_FUNCTION_OR_CLASS);

#[derive(Debug, Clone, PartialEq)]
enum RepKind {
    Empty,
    Token(String),
    Number(f64),
    Seq(Vec<CodeRep>),
    Paren(Box<CodeRep>),
    Bracket(Box<CodeRep>),
    Brace(Box<CodeRep>),
    /// Children separated by line breaks.
    Lines(Vec<CodeRep>),
    /// Child on a new, further indented line.
    Indent(Box<CodeRep>),
    CommaSep(Vec<CodeRep>),
    /// Child emitted where a bare `in` operator would be misparsed.
    NoIn(Box<CodeRep>),
    /// Child containing a bare `in` operator.
    ContainsIn(Box<CodeRep>),
    Semi,
    SemiOp,
    Space,
    Break,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeRep {
    kind: RepKind,
    flags: RepFlags,
}

// =============================================================================
// Constructors
// =============================================================================

impl CodeRep {
    const fn leaf(kind: RepKind) -> Self {
        Self {
            kind,
            flags: RepFlags::empty(),
        }
    }

    pub const fn empty() -> Self {
        Self::leaf(RepKind::Empty)
    }

    pub fn token(text: impl Into<String>) -> Self {
        Self::leaf(RepKind::Token(text.into()))
    }

    pub const fn number(value: f64) -> Self {
        Self::leaf(RepKind::Number(value))
    }

    /// Concatenate fragments in order.
    pub fn seq(children: Vec<Self>) -> Self {
        let mut flags = RepFlags::empty();
        if let Some(first) = children.iter().find(|c| !c.is_blank()) {
            flags |= first.flags & RepFlags::LEADING;
        }
        if let Some(last) = children.iter().rev().find(|c| !c.is_blank()) {
            flags |= last.flags & RepFlags::TRAILING;
        }
        Self {
            kind: RepKind::Seq(children),
            flags,
        }
    }

    pub fn paren(inner: Self) -> Self {
        Self::leaf(RepKind::Paren(Box::new(inner)))
    }

    pub fn bracket(inner: Self) -> Self {
        Self::leaf(RepKind::Bracket(Box::new(inner)))
    }

    /// Inline braces: `{a, b}`.
    pub fn brace(inner: Self) -> Self {
        Self::leaf(RepKind::Brace(Box::new(inner)))
    }

    /// Braces around indented lines: a statement block or class body.
    pub fn block(items: Vec<Self>) -> Self {
        let body = Self::lines(items);
        if body.is_blank() {
            return Self::brace(Self::empty());
        }
        Self::brace(Self::seq(vec![Self::indent(body), Self::brk()]))
    }

    pub fn lines(items: Vec<Self>) -> Self {
        Self::leaf(RepKind::Lines(items))
    }

    pub fn indent(inner: Self) -> Self {
        Self::leaf(RepKind::Indent(Box::new(inner)))
    }

    /// `a, b, c` with an optional space after each comma.
    pub fn comma_sep(items: Vec<Self>) -> Self {
        let flags = items
            .first()
            .map_or(RepFlags::empty(), |first| first.flags & RepFlags::LEADING);
        Self {
            kind: RepKind::CommaSep(items),
            flags,
        }
    }

    pub fn no_in(inner: Self) -> Self {
        let flags = inner.flags;
        Self {
            kind: RepKind::NoIn(Box::new(inner)),
            flags,
        }
    }

    pub fn contains_in(inner: Self) -> Self {
        let flags = inner.flags;
        Self {
            kind: RepKind::ContainsIn(Box::new(inner)),
            flags,
        }
    }

    /// Mandatory `;`, e.g. an empty statement.
    pub const fn semi() -> Self {
        Self::leaf(RepKind::Semi)
    }

    /// Statement terminator; compact output drops it before `}`.
    pub const fn semi_op() -> Self {
        Self::leaf(RepKind::SemiOp)
    }

    /// Space in pretty output, nothing in compact output.
    pub const fn space() -> Self {
        Self::leaf(RepKind::Space)
    }

    /// Line break in pretty output, nothing in compact output.
    pub const fn brk() -> Self {
        Self::leaf(RepKind::Break)
    }
}

// =============================================================================
// Flags
// =============================================================================

impl CodeRep {
    pub const fn flags(&self) -> RepFlags {
        self.flags
    }

    pub const fn has(&self, flags: RepFlags) -> bool {
        self.flags.intersects(flags)
    }

    pub const fn starts_with_let(&self) -> bool {
        self.flags.contains(RepFlags::STARTS_WITH_LET)
    }

    pub const fn starts_with_curly(&self) -> bool {
        self.flags.contains(RepFlags::STARTS_WITH_CURLY)
    }

    pub const fn starts_with_let_square_bracket(&self) -> bool {
        self.flags.contains(RepFlags::STARTS_WITH_LET_SQUARE_BRACKET)
    }

    pub const fn starts_with_function_or_class(&self) -> bool {
        self.flags.contains(RepFlags::STARTS_WITH_FUNCTION_OR_CLASS)
    }

    pub const fn ends_with_missing_else(&self) -> bool {
        self.flags.contains(RepFlags::ENDS_WITH_MISSING_ELSE)
    }

    /// Set hazard flags introduced by the node kind that built this fragment.
    #[must_use]
    pub fn with_flags(mut self, flags: RepFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// True when emitting this fragment writes no token.
    pub fn is_blank(&self) -> bool {
        match &self.kind {
            RepKind::Empty | RepKind::Space | RepKind::Break => true,
            RepKind::Token(text) => text.is_empty(),
            RepKind::Seq(children) | RepKind::Lines(children) => {
                children.iter().all(Self::is_blank)
            }
            RepKind::Indent(inner) | RepKind::NoIn(inner) | RepKind::ContainsIn(inner) => {
                inner.is_blank()
            }
            RepKind::CommaSep(items) => items.is_empty(),
            RepKind::Number(_)
            | RepKind::Paren(_)
            | RepKind::Bracket(_)
            | RepKind::Brace(_)
            | RepKind::Semi
            | RepKind::SemiOp => false,
        }
    }
}

// =============================================================================
// Emission
// =============================================================================

impl CodeRep {
    /// Write this fragment into a token stream. `no_in` is set inside a
    /// `for (init; ...)` head, where a bare `in` operator must be wrapped.
    pub fn emit(&self, ts: &mut dyn TokenSink, no_in: bool) {
        match &self.kind {
            RepKind::Empty => {}
            RepKind::Token(text) => ts.put(text),
            RepKind::Number(value) => ts.put_number(*value),
            RepKind::Seq(children) => {
                for child in children {
                    child.emit(ts, no_in);
                }
            }
            RepKind::Paren(inner) => {
                ts.put("(");
                inner.emit(ts, false);
                ts.put(")");
            }
            RepKind::Bracket(inner) => {
                ts.put("[");
                inner.emit(ts, false);
                ts.put("]");
            }
            RepKind::Brace(inner) => {
                ts.put("{");
                inner.emit(ts, false);
                ts.put("}");
            }
            RepKind::Lines(items) => {
                let mut first = true;
                for item in items.iter().filter(|item| !item.is_blank()) {
                    if !first {
                        ts.put_break();
                    }
                    first = false;
                    item.emit(ts, no_in);
                }
            }
            RepKind::Indent(inner) => {
                if !inner.is_blank() {
                    ts.indent();
                    ts.put_break();
                    inner.emit(ts, no_in);
                    ts.dedent();
                }
            }
            RepKind::CommaSep(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        ts.put(",");
                        ts.put_space();
                    }
                    item.emit(ts, no_in);
                }
            }
            RepKind::NoIn(inner) => inner.emit(ts, true),
            RepKind::ContainsIn(inner) => {
                if no_in {
                    ts.put("(");
                    inner.emit(ts, false);
                    ts.put(")");
                } else {
                    inner.emit(ts, no_in);
                }
            }
            RepKind::Semi => ts.put(";"),
            RepKind::SemiOp => ts.put_optional_semi(),
            RepKind::Space => ts.put_space(),
            RepKind::Break => ts.put_break(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/code_rep.rs"]
mod tests;
