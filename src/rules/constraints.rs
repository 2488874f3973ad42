// SPDX-FileCopyrightText: 2026 Galatea Contributors
// SPDX-License-Identifier: MIT

//! Generic constraint predicates shared by several diagram kinds.
//!
//! Every predicate is a pure function of the candidate edge and the diagram,
//! evaluated only once structural validity holds. A candidate that is already
//! stored in the diagram is excluded from every scan via its id.

use super::EdgeCandidate;
use crate::model::{Diagram, Edge, EdgeId, EdgeKind, NodeKind};

fn other_edges<'a>(
    diagram: &'a Diagram,
    candidate: &EdgeCandidate<'a>,
) -> impl Iterator<Item = (&'a EdgeId, &'a Edge)> {
    let skip = candidate.edge_id();
    diagram
        .edges()
        .iter()
        .filter(move |(edge_id, _)| Some(*edge_id) != skip)
}

fn start_kind(diagram: &Diagram, candidate: &EdgeCandidate<'_>) -> Option<NodeKind> {
    diagram.node(candidate.start()).map(|node| node.kind())
}

fn end_kind(diagram: &Diagram, candidate: &EdgeCandidate<'_>) -> Option<NodeKind> {
    diagram.node(candidate.end()).map(|node| node.kind())
}

pub(crate) fn no_self_edge(candidate: &EdgeCandidate<'_>) -> bool {
    candidate.start() != candidate.end()
}

pub(crate) fn no_self_edge_of_kind(candidate: &EdgeCandidate<'_>, kind: EdgeKind) -> bool {
    candidate.kind() != kind || candidate.start() != candidate.end()
}

/// Fails only on the exact reverse pair of the same kind; other kinds between
/// the same nodes are unaffected.
pub(crate) fn no_direct_cycle(
    candidate: &EdgeCandidate<'_>,
    diagram: &Diagram,
    kind: EdgeKind,
) -> bool {
    if candidate.kind() != kind {
        return true;
    }
    !other_edges(diagram, candidate).any(|(_, edge)| {
        edge.kind() == kind && edge.start() == candidate.end() && edge.end() == candidate.start()
    })
}

/// The two kinds exclude each other between the same unordered node pair.
///
/// Only the mix is forbidden: an existing edge of the candidate's own kind
/// is left to the max-edges rule, which is direction-sensitive.
pub(crate) fn no_combined(
    candidate: &EdgeCandidate<'_>,
    diagram: &Diagram,
    first: EdgeKind,
    second: EdgeKind,
) -> bool {
    let other_kind = match candidate.kind() {
        kind if kind == first => second,
        kind if kind == second => first,
        _ => return true,
    };
    !other_edges(diagram, candidate).any(|(_, edge)| {
        edge.kind() == other_kind
            && ((edge.start() == candidate.start() && edge.end() == candidate.end())
                || (edge.start() == candidate.end() && edge.end() == candidate.start()))
    })
}

/// Counts existing edges with the same kind, start, and end. Direction
/// matters: the opposite ordered pair is counted separately.
pub(crate) fn max_edges(candidate: &EdgeCandidate<'_>, diagram: &Diagram, limit: usize) -> bool {
    other_edges(diagram, candidate)
        .filter(|(_, edge)| {
            edge.kind() == candidate.kind()
                && edge.start() == candidate.start()
                && edge.end() == candidate.end()
        })
        .count()
        < limit
}

/// A note edge is legal only note→point or anything→note; conversely, any
/// edge touching a note node must be a note edge.
pub(crate) fn note_edge_placement(candidate: &EdgeCandidate<'_>, diagram: &Diagram) -> bool {
    let Some(start) = start_kind(diagram, candidate) else {
        return true;
    };
    let Some(end) = end_kind(diagram, candidate) else {
        return true;
    };

    if candidate.kind() == EdgeKind::Note {
        (start == NodeKind::Note && end == NodeKind::Point) || end == NodeKind::Note
    } else {
        start != NodeKind::Note && end != NodeKind::Note
    }
}

pub(crate) fn reference_endpoints(candidate: &EdgeCandidate<'_>, diagram: &Diagram) -> bool {
    if candidate.kind() != EdgeKind::Reference {
        return true;
    }
    start_kind(diagram, candidate) == Some(NodeKind::Field)
        && end_kind(diagram, candidate) == Some(NodeKind::Object)
}

pub(crate) fn collaboration_endpoints(candidate: &EdgeCandidate<'_>, diagram: &Diagram) -> bool {
    if candidate.kind() != EdgeKind::Collaboration {
        return true;
    }
    start_kind(diagram, candidate) == Some(NodeKind::Object)
        && end_kind(diagram, candidate) == Some(NodeKind::Object)
}
