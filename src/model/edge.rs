// SPDX-FileCopyrightText: 2026 Galatea Contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::NodeId;
use crate::geometry::Point;

/// The closed set of edge variants across all diagram kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    Dependency,
    Generalization,
    Association,
    Aggregation,
    Call,
    Return,
    Transition,
    Reference,
    Collaboration,
    Include,
    Extend,
    Note,
}

impl EdgeKind {
    /// Stable lower-snake key used in violation descriptors.
    pub fn key(self) -> &'static str {
        match self {
            Self::Dependency => "dependency",
            Self::Generalization => "generalization",
            Self::Association => "association",
            Self::Aggregation => "aggregation",
            Self::Call => "call",
            Self::Return => "return",
            Self::Transition => "transition",
            Self::Reference => "reference",
            Self::Collaboration => "collaboration",
            Self::Include => "include",
            Self::Extend => "extend",
            Self::Note => "note",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A typed edge between two nodes of the same diagram.
///
/// The attachment points are captured when the edge is created, so that
/// point-sensitive rules can be re-evaluated on a loaded diagram and give the
/// same answer as the pre-commit gate did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    kind: EdgeKind,
    start: NodeId,
    end: NodeId,
    start_point: Point,
    end_point: Point,
}

impl Edge {
    pub(crate) fn new(
        kind: EdgeKind,
        start: NodeId,
        end: NodeId,
        start_point: Point,
        end_point: Point,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            start_point,
            end_point,
        }
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn start(&self) -> &NodeId {
        &self.start
    }

    pub fn end(&self) -> &NodeId {
        &self.end
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn end_point(&self) -> Point {
        self.end_point
    }

    /// True when either endpoint is the given node.
    pub fn connects(&self, node_id: &NodeId) -> bool {
        &self.start == node_id || &self.end == node_id
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, EdgeKind};
    use crate::geometry::Point;
    use crate::model::NodeId;

    #[test]
    fn edge_reports_both_endpoints_as_connected() {
        let start = NodeId::new("n:a").expect("node id");
        let end = NodeId::new("n:b").expect("node id");
        let other = NodeId::new("n:c").expect("node id");
        let edge = Edge::new(
            EdgeKind::Association,
            start.clone(),
            end.clone(),
            Point::new(0, 0),
            Point::new(10, 10),
        );

        assert!(edge.connects(&start));
        assert!(edge.connects(&end));
        assert!(!edge.connects(&other));
        assert_eq!(edge.kind(), EdgeKind::Association);
        assert_eq!(edge.start_point(), Point::new(0, 0));
        assert_eq!(edge.end_point(), Point::new(10, 10));
    }
}
