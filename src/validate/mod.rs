// SPDX-FileCopyrightText: 2026 Galatea Contributors
// SPDX-License-Identifier: MIT

//! The validator facade and its typed violation result.
//!
//! Structural checks run first; only if they pass does semantic validation
//! run. The same constraint machinery gates a prospective edge before the
//! edit subsystem commits it.

mod semantics;
mod structure;

use serde::Serialize;
use std::fmt;

use crate::geometry::{HeaderBand, Point, RegionClassifier};
use crate::model::{Diagram, DiagramKind, EdgeKind, NodeId, NodeKind};
use crate::rules::{Constraint, EdgeCandidate, RuleSet};

/// A broken structural rule: the diagram itself is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StructuralRule {
    DiagramKindMismatch {
        expected: DiagramKind,
        found: DiagramKind,
    },
    NodeKindNotAllowed(NodeKind),
    EdgeKindNotAllowed(EdgeKind),
    RootKindNotAllowed(NodeKind),
    ChildKindNotAllowed {
        parent: NodeKind,
        child: NodeKind,
    },
}

impl fmt::Display for StructuralRule {
    /// Stable dotted key, used verbatim in violation descriptors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiagramKindMismatch { .. } => f.write_str("diagram_kind_mismatch"),
            Self::NodeKindNotAllowed(kind) => write!(f, "node_kind_not_allowed.{kind}"),
            Self::EdgeKindNotAllowed(kind) => write!(f, "edge_kind_not_allowed.{kind}"),
            Self::RootKindNotAllowed(kind) => write!(f, "root_kind_not_allowed.{kind}"),
            Self::ChildKindNotAllowed { parent, child } => {
                write!(f, "child_kind_not_allowed.{parent}.{child}")
            }
        }
    }
}

/// The typed, categorized result of a failed check.
///
/// Structural violations block semantic checking entirely and indicate a
/// malformed diagram (a load-time error). Semantic violations block one
/// edge-creation action; the user may retry. The `descriptor` is a stable
/// key for externalized message lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Violation {
    Structural(StructuralRule),
    Semantic(Constraint),
}

impl Violation {
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Structural(_))
    }

    pub fn is_semantic(&self) -> bool {
        matches!(self, Self::Semantic(_))
    }

    pub fn descriptor(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structural(rule) => write!(f, "structural.{rule}"),
            Self::Semantic(constraint) => write!(f, "semantic.{constraint}"),
        }
    }
}

impl std::error::Error for Violation {}

/// Stateless validator bound to one diagram kind.
///
/// Construction binds the kind's legal kind sets and constraint list once;
/// the region classifier is the only injected collaborator. The validator
/// never mutates the diagram, and every call is a fresh function of the
/// diagram's current state.
#[derive(Debug)]
pub struct DiagramValidator<C: RegionClassifier = HeaderBand> {
    rules: &'static RuleSet,
    classifier: C,
}

impl DiagramValidator<HeaderBand> {
    /// Validator with the stock header-band classifier.
    pub fn standard(kind: DiagramKind) -> Self {
        Self::new(kind, HeaderBand::default())
    }
}

impl<C: RegionClassifier> DiagramValidator<C> {
    pub fn new(kind: DiagramKind, classifier: C) -> Self {
        Self {
            rules: RuleSet::for_kind(kind),
            classifier,
        }
    }

    pub fn kind(&self) -> DiagramKind {
        self.rules.kind()
    }

    /// Structural-then-semantic check, surfacing the first violation.
    pub fn validate(&self, diagram: &Diagram) -> Result<(), Violation> {
        structure::check_structure(self.rules, diagram)?;
        semantics::check_semantics(self.rules, &self.classifier, diagram)
    }

    pub fn is_valid(&self, diagram: &Diagram) -> bool {
        self.validate(diagram).is_ok()
    }

    pub fn has_valid_structure(&self, diagram: &Diagram) -> bool {
        structure::check_structure(self.rules, diagram).is_ok()
    }

    /// Precondition: `has_valid_structure(diagram)`.
    pub fn has_valid_semantics(&self, diagram: &Diagram) -> bool {
        semantics::check_semantics(self.rules, &self.classifier, diagram).is_ok()
    }

    /// Gates a prospective edge before the edit subsystem commits it.
    ///
    /// Gives the same answer as inserting the edge and revalidating, for any
    /// diagram state.
    pub fn can_add_edge(
        &self,
        kind: EdgeKind,
        start: &NodeId,
        end: &NodeId,
        start_point: Point,
        end_point: Point,
        diagram: &Diagram,
    ) -> Result<(), Violation> {
        if !self.rules.allows_edge(kind) {
            return Err(Violation::Structural(StructuralRule::EdgeKindNotAllowed(
                kind,
            )));
        }
        let candidate = EdgeCandidate::prospective(kind, start, end, start_point, end_point);
        semantics::check_candidate(self.rules, &self.classifier, &candidate, diagram)
    }
}

/// Validates a diagram under its own kind, with the stock classifier. Used
/// after loading a diagram from storage.
pub fn is_diagram_valid(diagram: &Diagram) -> bool {
    DiagramValidator::standard(diagram.kind()).is_valid(diagram)
}

/// Gates a user-drawn edge against the diagram's own kind, with the stock
/// classifier.
pub fn can_add_edge(
    kind: EdgeKind,
    start: &NodeId,
    end: &NodeId,
    start_point: Point,
    end_point: Point,
    diagram: &Diagram,
) -> Result<(), Violation> {
    DiagramValidator::standard(diagram.kind()).can_add_edge(
        kind,
        start,
        end,
        start_point,
        end_point,
        diagram,
    )
}

#[cfg(test)]
mod tests {
    use super::{DiagramValidator, StructuralRule, Violation};
    use crate::geometry::Point;
    use crate::model::fixtures::{nid, sequence_call_chain};
    use crate::model::{Diagram, DiagramKind, EdgeKind, NodeKind};
    use crate::rules::Constraint;

    #[test]
    fn violations_carry_category_and_descriptor() {
        let structural =
            Violation::Structural(StructuralRule::RootKindNotAllowed(NodeKind::Field));
        assert!(structural.is_structural());
        assert!(!structural.is_semantic());
        assert_eq!(structural.descriptor(), "structural.root_kind_not_allowed.field");

        let semantic = Violation::Semantic(Constraint::NoDirectCycle(EdgeKind::Dependency));
        assert!(semantic.is_semantic());
        assert_eq!(semantic.descriptor(), "semantic.no_direct_cycle.dependency");
    }

    #[test]
    fn violations_serialize_for_the_presentation_layer() {
        let violation = Violation::Semantic(Constraint::MaxEdges(1));
        let json = serde_json::to_value(&violation).expect("serialize violation");
        assert_eq!(json, serde_json::json!({ "Semantic": { "MaxEdges": 1 } }));
    }

    #[test]
    fn validator_is_bound_to_one_kind() {
        let validator = DiagramValidator::standard(DiagramKind::Class);
        assert_eq!(validator.kind(), DiagramKind::Class);

        let wrong_kind = Diagram::new(DiagramKind::UseCase);
        assert_eq!(
            validator.validate(&wrong_kind),
            Err(Violation::Structural(StructuralRule::DiagramKindMismatch {
                expected: DiagramKind::Class,
                found: DiagramKind::UseCase,
            }))
        );
    }

    #[test]
    fn can_add_edge_rejects_foreign_edge_kinds_structurally() {
        let diagram = sequence_call_chain();
        let validator = DiagramValidator::standard(DiagramKind::Sequence);
        let result = validator.can_add_edge(
            EdgeKind::Association,
            &nid("c:first"),
            &nid("c:second"),
            Point::new(120, 110),
            Point::new(310, 120),
            &diagram,
        );
        assert_eq!(
            result,
            Err(Violation::Structural(StructuralRule::EdgeKindNotAllowed(
                EdgeKind::Association
            )))
        );
    }

    #[test]
    fn validate_is_idempotent() {
        let diagram = sequence_call_chain();
        let validator = DiagramValidator::standard(DiagramKind::Sequence);
        assert_eq!(validator.is_valid(&diagram), validator.is_valid(&diagram));
        assert!(validator.is_valid(&diagram));
    }
}
