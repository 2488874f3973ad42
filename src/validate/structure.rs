// SPDX-FileCopyrightText: 2026 Galatea Contributors
// SPDX-License-Identifier: MIT

//! Structural validation: kind membership and the containment hierarchy.
//!
//! This never inspects edge semantics. It must pass before semantic
//! validation is attempted.

use super::{StructuralRule, Violation};
use crate::model::Diagram;
use crate::rules::RuleSet;

pub(crate) fn check_structure(rules: &RuleSet, diagram: &Diagram) -> Result<(), Violation> {
    if diagram.kind() != rules.kind() {
        return Err(Violation::Structural(StructuralRule::DiagramKindMismatch {
            expected: rules.kind(),
            found: diagram.kind(),
        }));
    }

    for node in diagram.nodes().values() {
        if !rules.allows_node(node.kind()) {
            return Err(Violation::Structural(StructuralRule::NodeKindNotAllowed(
                node.kind(),
            )));
        }
        match node.parent().and_then(|parent_id| diagram.node(parent_id)) {
            Some(parent) => {
                if !rules.allows_child(parent.kind(), node.kind()) {
                    return Err(Violation::Structural(StructuralRule::ChildKindNotAllowed {
                        parent: parent.kind(),
                        child: node.kind(),
                    }));
                }
            }
            None => {
                if !rules.allows_root(node.kind()) {
                    return Err(Violation::Structural(StructuralRule::RootKindNotAllowed(
                        node.kind(),
                    )));
                }
            }
        }
    }

    for edge in diagram.edges().values() {
        if !rules.allows_edge(edge.kind()) {
            return Err(Violation::Structural(StructuralRule::EdgeKindNotAllowed(
                edge.kind(),
            )));
        }
    }

    Ok(())
}
