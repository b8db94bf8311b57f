//! Reference collection.
//!
//! Walks a program and records every identifier that names a variable,
//! classified by how it is used. This does not resolve references to
//! declarations; it only annotates the occurrences.

use rustc_hash::FxHashMap;
use tracing::debug;

use esgen_ast::visit::{Visit, walk_expression};
use esgen_ast::{
    AssignmentTargetIdentifier, BindingIdentifier, Expression, IdentifierExpression, Program,
    SimpleAssignmentTarget,
};

use crate::accessibility::Accessibility;
use crate::reference::{Reference, ReferenceKind};

#[derive(Debug, Default)]
pub struct ReferenceCollector<'a> {
    references: Vec<Reference<'a>>,
}

impl<'a> ReferenceCollector<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the references of a whole program in source order.
    pub fn collect(program: &'a Program) -> Vec<Reference<'a>> {
        let mut collector = Self::new();
        collector.visit_program(program);
        debug!(
            root = program.kind_name(),
            count = collector.references.len(),
            "collected references"
        );
        collector.references
    }

    pub fn references(&self) -> &[Reference<'a>] {
        &self.references
    }

    pub fn into_references(self) -> Vec<Reference<'a>> {
        self.references
    }

    fn record(&mut self, reference: Reference<'a>) {
        self.references.push(reference);
    }
}

/// Group references by variable name, preserving source order per name.
pub fn references_by_name<'a>(
    references: &[Reference<'a>],
) -> FxHashMap<&'a str, Vec<Reference<'a>>> {
    let mut map: FxHashMap<&'a str, Vec<Reference<'a>>> = FxHashMap::default();
    for reference in references {
        map.entry(reference.name()).or_default().push(*reference);
    }
    map
}

/// Combined accessibility of every reference to `name`.
pub fn accessibility_of(references: &[Reference<'_>], name: &str) -> Option<Accessibility> {
    references
        .iter()
        .filter(|r| r.name() == name)
        .map(|r| r.accessibility)
        .reduce(Accessibility::join)
}

impl<'a> Visit<'a> for ReferenceCollector<'a> {
    fn visit_identifier_expression(&mut self, node: &'a IdentifierExpression) {
        self.record(Reference::from_identifier_expression(node));
    }

    fn visit_binding_identifier(&mut self, node: &'a BindingIdentifier) {
        self.record(Reference::from_binding(node));
    }

    fn visit_assignment_target_identifier(&mut self, node: &'a AssignmentTargetIdentifier) {
        self.record(Reference::from_assignment_target(
            node,
            ReferenceKind::AssignmentTarget.accessibility(),
        ));
    }

    fn visit_expression(&mut self, node: &'a Expression) {
        match node {
            Expression::CompoundAssignmentExpression(e) => {
                if let SimpleAssignmentTarget::AssignmentTargetIdentifier(target) = &e.binding {
                    self.record(Reference::from_assignment_target(
                        target,
                        ReferenceKind::CompoundAssignmentTarget.accessibility(),
                    ));
                    self.visit_expression(&e.expression);
                } else {
                    walk_expression(self, node);
                }
            }
            Expression::UpdateExpression(e) => {
                if let SimpleAssignmentTarget::AssignmentTargetIdentifier(target) = &e.operand {
                    self.record(Reference::from_assignment_target(
                        target,
                        ReferenceKind::UpdateTarget.accessibility(),
                    ));
                } else {
                    walk_expression(self, node);
                }
            }
            _ => walk_expression(self, node),
        }
    }
}
