//! ECMAScript AST for the esgen code generator.
//!
//! This crate provides the tree consumed by the emitter and the scope crate:
//! - Node types (`Script`, `Module`, `Statement`, `Expression`, ...)
//! - Operator enums and the `Precedence` table
//! - A read-only `Visit` trait for traversals
//! - JSON interchange in the Shift AST format

pub mod node;
pub use node::*;

pub mod operators;
pub use operators::{
    BinaryOperator, CompoundAssignmentOperator, UnaryOperator, UpdateOperator,
    VariableDeclarationKind,
};

pub mod precedence;
pub use precedence::Precedence;

pub mod visit;
pub use visit::Visit;

mod builders;
mod json;

#[cfg(test)]
#[path = "../tests/json_tests.rs"]
mod json_tests;

#[cfg(test)]
#[path = "../tests/precedence_tests.rs"]
mod precedence_tests;
