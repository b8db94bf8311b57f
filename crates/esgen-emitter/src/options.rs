use serde::{Deserialize, Serialize};

/// Output flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Human-oriented layout with spaces, line breaks and indentation.
    #[default]
    Pretty,
    /// Minimal whitespace.
    Compact,
    /// Compact layout, pure ASCII, never forms a `<script` or `</script`
    /// sequence. Safe to inline in an HTML `<script>` element.
    WebSafe,
}

impl RenderMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::WebSafe => "web-safe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NewLineKind {
    #[default]
    LineFeed,
    CarriageReturnLineFeed,
}

impl NewLineKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LineFeed => "\n",
            Self::CarriageReturnLineFeed => "\r\n",
        }
    }
}

/// Printing options. Layout options only affect pretty output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrintOptions {
    pub mode: RenderMode,
    /// Spaces per indentation level.
    pub indent_width: usize,
    pub new_line: NewLineKind,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::Pretty,
            indent_width: 2,
            new_line: NewLineKind::LineFeed,
        }
    }
}

impl PrintOptions {
    pub fn pretty() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self {
            mode: RenderMode::Compact,
            ..Self::default()
        }
    }

    pub fn web_safe() -> Self {
        Self {
            mode: RenderMode::WebSafe,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    #[must_use]
    pub const fn with_new_line(mut self, new_line: NewLineKind) -> Self {
        self.new_line = new_line;
        self
    }
}
