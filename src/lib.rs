//! esgen: JavaScript source generation for Shift-format ASTs.
//!
//! The workspace is split by concern:
//! - `esgen_ast`: node types, precedence table, JSON interchange
//! - `esgen_scope`: read / write classification of variable references
//! - `esgen_emitter`: pretty, compact and web-safe code generation
//!
//! This crate re-exports the three and hosts the `esgen` command line tool.

pub use esgen_ast as ast;
pub use esgen_emitter as emitter;
pub use esgen_scope as scope;

pub use esgen_ast::Program;
pub use esgen_emitter::{
    NewLineKind, PrintOptions, RenderMode, codegen, compact, is_web_safe, pretty, web_safe,
};
pub use esgen_scope::{Accessibility, Reference, ReferenceCollector};

pub mod cli;
pub mod tracing_config;
