use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use esgen_emitter::{NewLineKind, PrintOptions, RenderMode};

/// CLI arguments for the esgen binary.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "esgen",
    version,
    about = "Render a Shift-format JSON AST as JavaScript source"
)]
pub struct CliArgs {
    /// Output flavor.
    #[arg(short = 'm', long, value_enum, default_value_t = Mode::Pretty)]
    pub mode: Mode,

    /// Spaces per indentation level (pretty mode).
    #[arg(long, default_value_t = 2)]
    pub indent: usize,

    /// Line terminator (pretty mode).
    #[arg(long, value_enum, default_value_t = NewLine::Lf)]
    pub new_line: NewLine,

    /// Print the variable reference table instead of source text.
    #[arg(long)]
    pub references: bool,

    /// JSON AST to read; stdin when omitted.
    pub input: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Mode {
    Pretty,
    Compact,
    #[value(name = "web-safe", alias = "websafe")]
    WebSafe,
}

impl Mode {
    pub const fn to_render_mode(self) -> RenderMode {
        match self {
            Self::Pretty => RenderMode::Pretty,
            Self::Compact => RenderMode::Compact,
            Self::WebSafe => RenderMode::WebSafe,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum NewLine {
    Lf,
    Crlf,
}

impl NewLine {
    pub const fn to_new_line_kind(self) -> NewLineKind {
        match self {
            Self::Lf => NewLineKind::LineFeed,
            Self::Crlf => NewLineKind::CarriageReturnLineFeed,
        }
    }
}

impl CliArgs {
    pub fn print_options(&self) -> PrintOptions {
        PrintOptions {
            mode: self.mode.to_render_mode(),
            indent_width: self.indent,
            new_line: self.new_line.to_new_line_kind(),
        }
    }
}
