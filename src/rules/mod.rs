// SPDX-FileCopyrightText: 2026 Galatea Contributors
// SPDX-License-Identifier: MIT

//! The rule catalog: per-diagram-kind legal kind sets, containment tables,
//! and ordered constraint lists.
//!
//! Everything here is static configuration. Keeping the whole catalog in one
//! table makes the rules auditable in one place and fixes the evaluation
//! order, so the same diagram always reports the same first violation.

pub mod constraints;
pub mod sequence;

use serde::Serialize;
use std::fmt;

use crate::geometry::{Point, RegionClassifier};
use crate::model::{Diagram, DiagramKind, Edge, EdgeId, EdgeKind, NodeId, NodeKind};

/// An edge to check: either a prospective edge the user is about to commit,
/// or a stored edge being revalidated.
///
/// When the candidate carries its own `EdgeId`, every scanning predicate
/// skips that edge, so gating before insertion and revalidating after
/// insertion give identical answers.
#[derive(Debug, Clone, Copy)]
pub struct EdgeCandidate<'a> {
    edge_id: Option<&'a EdgeId>,
    kind: EdgeKind,
    start: &'a NodeId,
    end: &'a NodeId,
    start_point: Point,
    end_point: Point,
}

impl<'a> EdgeCandidate<'a> {
    /// A not-yet-inserted edge, used to gate interactive edge creation.
    pub fn prospective(
        kind: EdgeKind,
        start: &'a NodeId,
        end: &'a NodeId,
        start_point: Point,
        end_point: Point,
    ) -> Self {
        Self {
            edge_id: None,
            kind,
            start,
            end,
            start_point,
            end_point,
        }
    }

    /// An edge already present in the diagram.
    pub fn stored(edge_id: &'a EdgeId, edge: &'a Edge) -> Self {
        Self {
            edge_id: Some(edge_id),
            kind: edge.kind(),
            start: edge.start(),
            end: edge.end(),
            start_point: edge.start_point(),
            end_point: edge.end_point(),
        }
    }

    pub fn edge_id(&self) -> Option<&'a EdgeId> {
        self.edge_id
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn start(&self) -> &'a NodeId {
        self.start
    }

    pub fn end(&self) -> &'a NodeId {
        self.end
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn end_point(&self) -> Point {
        self.end_point
    }
}

/// A pure boolean predicate over a candidate edge and its diagram.
///
/// The closed enum keeps dispatch exhaustive: adding a constraint without
/// wiring its predicate fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Constraint {
    /// A note edge only runs note→point or anything→note; nothing else may
    /// touch a note node.
    NoteEdgePlacement,
    /// At most `n` edges with the same kind, start, and end (direction
    /// matters).
    MaxEdges(usize),
    /// No self-loop for any edge kind.
    NoSelfEdge,
    /// No self-loop for one specific edge kind.
    NoSelfEdgeOfKind(EdgeKind),
    /// No edge of this kind may close the exact reverse of an existing edge
    /// of the same kind.
    NoDirectCycle(EdgeKind),
    /// The two kinds are mutually exclusive between an unordered node pair.
    NoCombined(EdgeKind, EdgeKind),
    /// Reference edges run field → object.
    ReferenceEndpoints,
    /// Collaboration edges run object → object.
    CollaborationEndpoints,
    /// No edge may start in the header band of a container node.
    NoEdgeFromContainerHeader,
    /// Only one call edge may originate directly from a container node.
    SingleEntryPoint,
    /// A node may be the target of at most one call edge, keeping the caller
    /// relation unambiguous.
    SingleCaller,
    /// A call edge ending in a container's header is a constructor call and
    /// needs an empty container plus a call/container start.
    CallOnHeaderCreates,
    /// A return edge must go back to the caller of its start node.
    ReturnMatchesCaller,
}

impl Constraint {
    pub fn satisfied(
        self,
        candidate: &EdgeCandidate<'_>,
        diagram: &Diagram,
        classifier: &dyn RegionClassifier,
    ) -> bool {
        match self {
            Self::NoteEdgePlacement => constraints::note_edge_placement(candidate, diagram),
            Self::MaxEdges(limit) => constraints::max_edges(candidate, diagram, limit),
            Self::NoSelfEdge => constraints::no_self_edge(candidate),
            Self::NoSelfEdgeOfKind(kind) => constraints::no_self_edge_of_kind(candidate, kind),
            Self::NoDirectCycle(kind) => constraints::no_direct_cycle(candidate, diagram, kind),
            Self::NoCombined(first, second) => {
                constraints::no_combined(candidate, diagram, first, second)
            }
            Self::ReferenceEndpoints => constraints::reference_endpoints(candidate, diagram),
            Self::CollaborationEndpoints => {
                constraints::collaboration_endpoints(candidate, diagram)
            }
            Self::NoEdgeFromContainerHeader => {
                sequence::no_edge_from_container_header(candidate, diagram, classifier)
            }
            Self::SingleEntryPoint => sequence::single_entry_point(candidate, diagram),
            Self::SingleCaller => sequence::single_caller(candidate, diagram),
            Self::CallOnHeaderCreates => {
                sequence::call_on_header_creates(candidate, diagram, classifier)
            }
            Self::ReturnMatchesCaller => sequence::return_matches_caller(candidate, diagram),
        }
    }
}

impl fmt::Display for Constraint {
    /// Stable dotted key, used verbatim in violation descriptors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoteEdgePlacement => f.write_str("note_edge_placement"),
            Self::MaxEdges(limit) => write!(f, "max_edges.{limit}"),
            Self::NoSelfEdge => f.write_str("no_self_edge"),
            Self::NoSelfEdgeOfKind(kind) => write!(f, "no_self_edge.{kind}"),
            Self::NoDirectCycle(kind) => write!(f, "no_direct_cycle.{kind}"),
            Self::NoCombined(first, second) => write!(f, "no_combined.{first}.{second}"),
            Self::ReferenceEndpoints => f.write_str("reference_endpoints"),
            Self::CollaborationEndpoints => f.write_str("collaboration_endpoints"),
            Self::NoEdgeFromContainerHeader => f.write_str("no_edge_from_container_header"),
            Self::SingleEntryPoint => f.write_str("single_entry_point"),
            Self::SingleCaller => f.write_str("single_caller"),
            Self::CallOnHeaderCreates => f.write_str("call_on_header_creates"),
            Self::ReturnMatchesCaller => f.write_str("return_matches_caller"),
        }
    }
}

/// The rules bound to one diagram kind: legal node/edge kind sets, the
/// containment tables, and the ordered constraint list.
#[derive(Debug)]
pub struct RuleSet {
    kind: DiagramKind,
    node_kinds: &'static [NodeKind],
    edge_kinds: &'static [EdgeKind],
    constraints: &'static [Constraint],
}

impl RuleSet {
    pub fn for_kind(kind: DiagramKind) -> &'static RuleSet {
        match kind {
            DiagramKind::Class => &CLASS_RULES,
            DiagramKind::Sequence => &SEQUENCE_RULES,
            DiagramKind::State => &STATE_RULES,
            DiagramKind::Object => &OBJECT_RULES,
            DiagramKind::UseCase => &USE_CASE_RULES,
        }
    }

    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    pub fn node_kinds(&self) -> &'static [NodeKind] {
        self.node_kinds
    }

    pub fn edge_kinds(&self) -> &'static [EdgeKind] {
        self.edge_kinds
    }

    /// Constraints in declared evaluation order.
    pub fn constraints(&self) -> &'static [Constraint] {
        self.constraints
    }

    pub fn allows_node(&self, kind: NodeKind) -> bool {
        self.node_kinds.contains(&kind)
    }

    pub fn allows_edge(&self, kind: EdgeKind) -> bool {
        self.edge_kinds.contains(&kind)
    }

    /// Whether a node of this kind may sit at the top level of the diagram.
    pub fn allows_root(&self, node_kind: NodeKind) -> bool {
        !matches!(
            (self.kind, node_kind),
            (DiagramKind::Object, NodeKind::Field) | (DiagramKind::Sequence, NodeKind::Call)
        )
    }

    /// The containment table: which child kinds a parent kind may own.
    pub fn allows_child(&self, parent: NodeKind, child: NodeKind) -> bool {
        match (self.kind, parent, child) {
            (
                DiagramKind::Class,
                NodeKind::Package,
                NodeKind::Class | NodeKind::Interface | NodeKind::Package,
            ) => true,
            (DiagramKind::Sequence, NodeKind::ImplicitParameter, NodeKind::Call) => true,
            (DiagramKind::Object, NodeKind::Object, NodeKind::Field) => true,
            _ => false,
        }
    }
}

static CLASS_RULES: RuleSet = RuleSet {
    kind: DiagramKind::Class,
    node_kinds: &[
        NodeKind::Class,
        NodeKind::Interface,
        NodeKind::Package,
        NodeKind::Note,
        NodeKind::Point,
    ],
    edge_kinds: &[
        EdgeKind::Dependency,
        EdgeKind::Generalization,
        EdgeKind::Association,
        EdgeKind::Aggregation,
        EdgeKind::Note,
    ],
    constraints: &[
        Constraint::NoteEdgePlacement,
        Constraint::MaxEdges(1),
        Constraint::NoSelfEdgeOfKind(EdgeKind::Generalization),
        Constraint::NoSelfEdgeOfKind(EdgeKind::Dependency),
        Constraint::NoDirectCycle(EdgeKind::Generalization),
        Constraint::NoDirectCycle(EdgeKind::Dependency),
        Constraint::NoCombined(EdgeKind::Association, EdgeKind::Aggregation),
    ],
};

static SEQUENCE_RULES: RuleSet = RuleSet {
    kind: DiagramKind::Sequence,
    node_kinds: &[
        NodeKind::ImplicitParameter,
        NodeKind::Call,
        NodeKind::Note,
        NodeKind::Point,
    ],
    edge_kinds: &[EdgeKind::Call, EdgeKind::Return, EdgeKind::Note],
    constraints: &[
        Constraint::NoteEdgePlacement,
        Constraint::MaxEdges(1),
        Constraint::NoEdgeFromContainerHeader,
        Constraint::SingleEntryPoint,
        Constraint::SingleCaller,
        Constraint::CallOnHeaderCreates,
        Constraint::ReturnMatchesCaller,
    ],
};

static STATE_RULES: RuleSet = RuleSet {
    kind: DiagramKind::State,
    node_kinds: &[
        NodeKind::State,
        NodeKind::InitialState,
        NodeKind::FinalState,
        NodeKind::Note,
        NodeKind::Point,
    ],
    edge_kinds: &[EdgeKind::Transition, EdgeKind::Note],
    constraints: &[Constraint::NoteEdgePlacement, Constraint::MaxEdges(1)],
};

static OBJECT_RULES: RuleSet = RuleSet {
    kind: DiagramKind::Object,
    node_kinds: &[
        NodeKind::Object,
        NodeKind::Field,
        NodeKind::Note,
        NodeKind::Point,
    ],
    edge_kinds: &[EdgeKind::Reference, EdgeKind::Collaboration, EdgeKind::Note],
    constraints: &[
        Constraint::NoteEdgePlacement,
        Constraint::MaxEdges(1),
        Constraint::ReferenceEndpoints,
        Constraint::CollaborationEndpoints,
    ],
};

static USE_CASE_RULES: RuleSet = RuleSet {
    kind: DiagramKind::UseCase,
    node_kinds: &[
        NodeKind::Actor,
        NodeKind::UseCase,
        NodeKind::Note,
        NodeKind::Point,
    ],
    edge_kinds: &[
        EdgeKind::Association,
        EdgeKind::Include,
        EdgeKind::Extend,
        EdgeKind::Generalization,
        EdgeKind::Note,
    ],
    constraints: &[
        Constraint::NoteEdgePlacement,
        Constraint::MaxEdges(1),
        Constraint::NoSelfEdge,
    ],
};
