// SPDX-FileCopyrightText: 2026 Galatea Contributors
// SPDX-License-Identifier: MIT

//! Caller/callee and entry-point facts for sequence diagrams.

use crate::model::{Diagram, EdgeId, EdgeKind, NodeId};

/// The caller of a call-stack node: the start of the call edge whose end is
/// that node. `None` when no call edge targets the node. The single-caller
/// rule keeps at most one such edge per node in a valid diagram.
pub fn caller_of<'a>(diagram: &'a Diagram, node_id: &NodeId) -> Option<&'a NodeId> {
    diagram
        .edges()
        .values()
        .find(|edge| edge.kind() == EdgeKind::Call && edge.end() == node_id)
        .map(|edge| edge.start())
}

/// True when a conversation has already been started: some call edge
/// originates directly from a container (activation) node.
pub fn has_entry_point(diagram: &Diagram) -> bool {
    has_entry_point_besides(diagram, None)
}

/// Entry-point scan that ignores one edge, so an already-inserted edge can be
/// revalidated without counting itself as the existing entry point.
pub fn has_entry_point_besides(diagram: &Diagram, skip: Option<&EdgeId>) -> bool {
    diagram.edges().iter().any(|(edge_id, edge)| {
        if Some(edge_id) == skip {
            return false;
        }
        edge.kind() == EdgeKind::Call
            && diagram
                .node(edge.start())
                .is_some_and(|start| start.kind().is_container())
    })
}
