use anyhow::{Context, Result};
use std::fmt::Write;
use std::path::Path;

use esgen_ast::Program;
use esgen_scope::ReferenceCollector;

use crate::cli::args::CliArgs;

/// Read and decode a JSON AST from `input`, or from stdin when `None`.
pub fn read_program(input: Option<&Path>) -> Result<Program> {
    let (text, source) = match input {
        Some(path) => (
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            path.display().to_string(),
        ),
        None => (
            std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?,
            "<stdin>".to_string(),
        ),
    };
    parse_program(&text).with_context(|| format!("failed to decode AST from {source}"))
}

pub fn parse_program(text: &str) -> Result<Program> {
    let program = Program::from_json(text)?;
    tracing::debug!(root = program.kind_name(), bytes = text.len(), "decoded AST");
    Ok(program)
}

/// One line per reference in source order: `name accessibility`.
pub fn reference_table(program: &Program) -> String {
    let references = ReferenceCollector::collect(program);
    let mut out = String::new();
    for reference in &references {
        let _ = writeln!(out, "{} {}", reference.name(), reference.accessibility.as_str());
    }
    out
}

/// Produce the binary's stdout for `args`.
pub fn run(args: &CliArgs) -> Result<String> {
    let program = read_program(args.input.as_deref())?;
    Ok(execute(&program, args))
}

pub fn execute(program: &Program, args: &CliArgs) -> String {
    if args.references {
        reference_table(program)
    } else {
        esgen_emitter::codegen(program, &args.print_options())
    }
}
