//! Variable reference classification for esgen ASTs.
//!
//! - `Accessibility`: the read / write / read-write lattice
//! - `Reference`: a reference node paired with its accessibility
//! - `ReferenceCollector`: records every reference in a program

pub mod accessibility;
pub use accessibility::Accessibility;

pub mod reference;
pub use reference::{Reference, ReferenceKind, VariableReference};

pub mod collector;
pub use collector::{ReferenceCollector, accessibility_of, references_by_name};
