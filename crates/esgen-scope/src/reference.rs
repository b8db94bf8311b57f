use esgen_ast::{AssignmentTargetIdentifier, BindingIdentifier, IdentifierExpression};

use crate::accessibility::Accessibility;

/// The AST node a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableReference<'a> {
    BindingIdentifier(&'a BindingIdentifier),
    IdentifierExpression(&'a IdentifierExpression),
    AssignmentTargetIdentifier(&'a AssignmentTargetIdentifier),
}

impl<'a> VariableReference<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            Self::BindingIdentifier(node) => &node.name,
            Self::IdentifierExpression(node) => &node.name,
            Self::AssignmentTargetIdentifier(node) => &node.name,
        }
    }
}

/// Syntactic position a reference was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Value is consumed (`x + 1`, `f(x)`).
    Expression,
    /// Declaration or parameter binding (`let x`, `function f(x)`).
    Binding,
    /// Plain assignment or destructuring target (`x = 1`, `[x] = a`).
    AssignmentTarget,
    /// Compound assignment target (`x += 1`).
    CompoundAssignmentTarget,
    /// Operand of `++` / `--`.
    UpdateTarget,
}

impl ReferenceKind {
    pub const fn accessibility(self) -> Accessibility {
        match self {
            Self::Expression => Accessibility::Read,
            Self::Binding | Self::AssignmentTarget => Accessibility::Write,
            Self::CompoundAssignmentTarget | Self::UpdateTarget => Accessibility::ReadWrite,
        }
    }
}

/// A variable reference together with how it is used.
///
/// References are immutable; escalation returns a new reference to the same
/// node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference<'a> {
    pub node: VariableReference<'a>,
    pub accessibility: Accessibility,
}

impl<'a> Reference<'a> {
    /// A binding identifier is always written.
    pub const fn from_binding(node: &'a BindingIdentifier) -> Self {
        Self {
            node: VariableReference::BindingIdentifier(node),
            accessibility: Accessibility::Write,
        }
    }

    /// An identifier expression is always read.
    pub const fn from_identifier_expression(node: &'a IdentifierExpression) -> Self {
        Self {
            node: VariableReference::IdentifierExpression(node),
            accessibility: Accessibility::Read,
        }
    }

    /// Assignment targets are written, or read and written by compound
    /// assignment and update expressions; the caller decides.
    pub const fn from_assignment_target(
        node: &'a AssignmentTargetIdentifier,
        accessibility: Accessibility,
    ) -> Self {
        Self {
            node: VariableReference::AssignmentTargetIdentifier(node),
            accessibility,
        }
    }

    #[must_use]
    pub const fn with_readability(self) -> Self {
        Self {
            node: self.node,
            accessibility: self.accessibility.with_readability(),
        }
    }

    #[must_use]
    pub const fn with_writability(self) -> Self {
        Self {
            node: self.node,
            accessibility: self.accessibility.with_writability(),
        }
    }

    pub fn name(&self) -> &'a str {
        self.node.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_defaults() {
        let binding = BindingIdentifier {
            name: "x".to_string(),
        };
        let read = IdentifierExpression {
            name: "y".to_string(),
        };
        assert_eq!(
            Reference::from_binding(&binding).accessibility,
            Accessibility::Write
        );
        assert_eq!(
            Reference::from_identifier_expression(&read).accessibility,
            Accessibility::Read
        );
        assert_eq!(Reference::from_binding(&binding).name(), "x");
    }

    #[test]
    fn test_write_with_readability_escalates_once() {
        let target = AssignmentTargetIdentifier {
            name: "z".to_string(),
        };
        let write = Reference::from_assignment_target(&target, Accessibility::Write);
        let read_write = write.with_readability();
        assert_eq!(read_write.accessibility, Accessibility::ReadWrite);
        assert_eq!(read_write.with_readability(), read_write);
        assert_eq!(read_write.node, write.node);
        // the original is untouched
        assert_eq!(write.accessibility, Accessibility::Write);
    }

    #[test]
    fn test_read_with_writability() {
        let read = IdentifierExpression {
            name: "y".to_string(),
        };
        let reference = Reference::from_identifier_expression(&read);
        assert_eq!(reference.with_readability(), reference);
        assert_eq!(
            reference.with_writability().accessibility,
            Accessibility::ReadWrite
        );
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(ReferenceKind::Expression.accessibility(), Accessibility::Read);
        assert_eq!(ReferenceKind::Binding.accessibility(), Accessibility::Write);
        assert_eq!(
            ReferenceKind::AssignmentTarget.accessibility(),
            Accessibility::Write
        );
        assert_eq!(
            ReferenceKind::CompoundAssignmentTarget.accessibility(),
            Accessibility::ReadWrite
        );
        assert_eq!(
            ReferenceKind::UpdateTarget.accessibility(),
            Accessibility::ReadWrite
        );
    }
}
