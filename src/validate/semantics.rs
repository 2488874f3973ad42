// SPDX-FileCopyrightText: 2026 Galatea Contributors
// SPDX-License-Identifier: MIT

//! Semantic validation: the diagram kind's ordered constraint set, evaluated
//! against every stored edge or one candidate edge.
//!
//! Precondition: structural validity holds (endpoints resolve and all kinds
//! are legal for the diagram).

use super::Violation;
use crate::geometry::RegionClassifier;
use crate::model::Diagram;
use crate::rules::{EdgeCandidate, RuleSet};

pub(crate) fn check_semantics(
    rules: &RuleSet,
    classifier: &dyn RegionClassifier,
    diagram: &Diagram,
) -> Result<(), Violation> {
    for (edge_id, edge) in diagram.edges() {
        let candidate = EdgeCandidate::stored(edge_id, edge);
        check_candidate(rules, classifier, &candidate, diagram)?;
    }
    Ok(())
}

/// Evaluates the constraint list in declared order and surfaces the first
/// failing constraint.
pub(crate) fn check_candidate(
    rules: &RuleSet,
    classifier: &dyn RegionClassifier,
    candidate: &EdgeCandidate<'_>,
    diagram: &Diagram,
) -> Result<(), Violation> {
    for constraint in rules.constraints() {
        if !constraint.satisfied(candidate, diagram, classifier) {
            return Err(Violation::Semantic(*constraint));
        }
    }
    Ok(())
}
