// SPDX-FileCopyrightText: 2026 Galatea Contributors
// SPDX-License-Identifier: MIT

//! Sequence-diagram constraints: these are the only hierarchy- and
//! geometry-aware predicates, fed by the control-flow analyzer and the
//! injected region classifier.

use super::EdgeCandidate;
use crate::geometry::{Region, RegionClassifier};
use crate::model::{Diagram, EdgeKind, NodeKind};
use crate::query::control_flow;

/// No edge of any kind may start in the header band of a container node.
pub(crate) fn no_edge_from_container_header(
    candidate: &EdgeCandidate<'_>,
    diagram: &Diagram,
    classifier: &dyn RegionClassifier,
) -> bool {
    let Some(start) = diagram.node(candidate.start()) else {
        return true;
    };
    !(start.kind().is_container()
        && classifier.region_of(start, candidate.start_point()) == Region::Header)
}

/// A call edge may originate directly from a container node only while the
/// diagram has no entry point yet: exactly one first call per conversation.
pub(crate) fn single_entry_point(candidate: &EdgeCandidate<'_>, diagram: &Diagram) -> bool {
    if candidate.kind() != EdgeKind::Call {
        return true;
    }
    let Some(start) = diagram.node(candidate.start()) else {
        return true;
    };
    if !start.kind().is_container() {
        return true;
    }
    !control_flow::has_entry_point_besides(diagram, candidate.edge_id())
}

/// A node takes at most one incoming call edge. The caller relation the
/// return rule relies on stays unambiguous, and inserting an accepted call
/// edge can never retroactively invalidate an existing return edge.
pub(crate) fn single_caller(candidate: &EdgeCandidate<'_>, diagram: &Diagram) -> bool {
    if candidate.kind() != EdgeKind::Call {
        return true;
    }
    !diagram.edges().iter().any(|(edge_id, edge)| {
        Some(edge_id) != candidate.edge_id()
            && edge.kind() == EdgeKind::Call
            && edge.end() == candidate.end()
    })
}

/// A call edge landing in a container's header is a constructor call: the
/// target must still be empty and the origin must be a call or container
/// node. Landing in the body is always fine here.
pub(crate) fn call_on_header_creates(
    candidate: &EdgeCandidate<'_>,
    diagram: &Diagram,
    classifier: &dyn RegionClassifier,
) -> bool {
    if candidate.kind() != EdgeKind::Call {
        return true;
    }
    let Some(end) = diagram.node(candidate.end()) else {
        return true;
    };
    if !end.kind().is_container() {
        return true;
    }
    if classifier.region_of(end, candidate.end_point()) != Region::Header {
        return true;
    }
    let Some(start) = diagram.node(candidate.start()) else {
        return true;
    };
    end.children().is_empty()
        && (start.kind() == NodeKind::Call || start.kind().is_container())
}

/// A return edge must end at the caller of its start node, and may not
/// return within a single container (no self-call returns).
pub(crate) fn return_matches_caller(candidate: &EdgeCandidate<'_>, diagram: &Diagram) -> bool {
    if candidate.kind() != EdgeKind::Return {
        return true;
    }
    let Some(caller) = control_flow::caller_of(diagram, candidate.start()) else {
        return false;
    };
    if caller != candidate.end() {
        return false;
    }
    let start_parent = diagram.node(candidate.start()).and_then(|node| node.parent());
    let end_parent = diagram.node(candidate.end()).and_then(|node| node.parent());
    !(start_parent.is_some() && start_parent == end_parent)
}
