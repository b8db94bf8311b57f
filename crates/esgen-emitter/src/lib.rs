//! JavaScript code generation for esgen ASTs.
//!
//! A program is rendered in three steps:
//! 1. the director walks the tree and a `CodeGen` reduces every node to a
//!    `CodeRep` fragment;
//! 2. the root fragment writes itself into a `TokenSink`;
//! 3. the sink lays the tokens out and returns the text.
//!
//! Pretty and compact output share the base rules (`PrettyCodeGen`) and
//! differ only in the `TokenStream` layout. Web-safe output pairs
//! `WebSafeCodeGen` with `WebSafeTokenStream` so that the text can be
//! inlined in an HTML `<script>` element.

pub mod code_rep;
pub mod codegen;
pub mod literals;
pub mod options;
pub mod sanitize;
pub mod token_stream;

pub use code_rep::{CodeRep, RepFlags};
pub use codegen::{CodeGen, PrettyCodeGen, WebSafeCodeGen};
pub use options::{NewLineKind, PrintOptions, RenderMode};
pub use sanitize::{is_web_safe, sanitize};
pub use token_stream::{TokenSink, TokenStream, WebSafeTokenStream};

use esgen_ast::{Module, Program, Script};

/// Reduce `program` with `generator` and write the result into `sink`.
pub fn render<G, S>(generator: &G, program: &Program, sink: S) -> String
where
    G: CodeGen + ?Sized,
    S: TokenSink,
{
    write(codegen::director::program(generator, program), sink)
}

fn write<S: TokenSink>(rep: CodeRep, mut sink: S) -> String {
    rep.emit(&mut sink, false);
    sink.finish()
}

const fn root_kind(program: &Program) -> &'static str {
    match program {
        Program::Script(_) => "script",
        Program::Module(_) => "module",
    }
}

/// Render `program` as configured by `options`.
pub fn codegen(program: &Program, options: &PrintOptions) -> String {
    tracing::debug!(
        mode = options.mode.as_str(),
        root = root_kind(program),
        indent_width = options.indent_width,
        "rendering program"
    );
    match options.mode {
        RenderMode::Pretty | RenderMode::Compact => {
            render(&PrettyCodeGen, program, TokenStream::new(options))
        }
        RenderMode::WebSafe => render(&WebSafeCodeGen, program, WebSafeTokenStream::new()),
    }
}

/// Human-readable output with default layout.
pub fn pretty(program: &Program) -> String {
    codegen(program, &PrintOptions::pretty())
}

/// Output without optional whitespace.
pub fn compact(program: &Program) -> String {
    codegen(program, &PrintOptions::compact())
}

/// Pure ASCII output with no `<script` / `</script` tag opener.
pub fn web_safe(program: &Program) -> String {
    codegen(program, &PrintOptions::web_safe())
}

pub fn pretty_script(script: &Script) -> String {
    tracing::debug!(mode = "pretty", root = "script", "rendering program");
    write(
        codegen::director::script(&PrettyCodeGen, script),
        TokenStream::pretty(),
    )
}

pub fn pretty_module(module: &Module) -> String {
    tracing::debug!(mode = "pretty", root = "module", "rendering program");
    write(
        codegen::director::module(&PrettyCodeGen, module),
        TokenStream::pretty(),
    )
}

pub fn web_safe_script(script: &Script) -> String {
    tracing::debug!(mode = "web-safe", root = "script", "rendering program");
    write(
        codegen::director::script(&WebSafeCodeGen, script),
        WebSafeTokenStream::new(),
    )
}

pub fn web_safe_module(module: &Module) -> String {
    tracing::debug!(mode = "web-safe", root = "module", "rendering program");
    write(
        codegen::director::module(&WebSafeCodeGen, module),
        WebSafeTokenStream::new(),
    )
}
