// SPDX-FileCopyrightText: 2026 Galatea Contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::NodeId;
use crate::geometry::Point;

/// The closed set of node variants across all diagram kinds.
///
/// Which kinds are legal in a given diagram is decided by the rule catalog,
/// not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Class,
    Interface,
    Package,
    ImplicitParameter,
    Call,
    State,
    InitialState,
    FinalState,
    Object,
    Field,
    Actor,
    UseCase,
    Note,
    Point,
}

impl NodeKind {
    /// Container kinds may own child nodes.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Package | Self::ImplicitParameter | Self::Object)
    }

    /// Stable lower-snake key used in violation descriptors.
    pub fn key(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Package => "package",
            Self::ImplicitParameter => "implicit_parameter",
            Self::Call => "call",
            Self::State => "state",
            Self::InitialState => "initial_state",
            Self::FinalState => "final_state",
            Self::Object => "object",
            Self::Field => "field",
            Self::Actor => "actor",
            Self::UseCase => "use_case",
            Self::Note => "note",
            Self::Point => "point",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A typed node. Containment links are maintained by [`super::Diagram`] so
/// that parent/children stay symmetric and acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    position: Point,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, position: Point) -> Self {
        Self {
            kind,
            position,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn parent(&self) -> Option<&NodeId> {
        self.parent.as_ref()
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    /// Children in insertion order. Empty for non-container kinds.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(crate) fn remove_child(&mut self, child: &NodeId) {
        self.children.retain(|existing| existing != child);
    }
}
