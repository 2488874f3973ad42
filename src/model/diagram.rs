// SPDX-FileCopyrightText: 2026 Galatea Contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::edge::{Edge, EdgeKind};
use super::ids::{EdgeId, NodeId};
use super::node::{Node, NodeKind};
use crate::geometry::Point;

/// The kind of diagram. Each kind binds its own legal node/edge kind sets and
/// constraint list in the rule catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagramKind {
    Class,
    Sequence,
    State,
    Object,
    UseCase,
}

/// A typed container of nodes and edges of one fixed kind.
///
/// Nodes and edges live in id-keyed `BTreeMap`s so every traversal is
/// deterministic; validators therefore always report the same first violation
/// for the same diagram state.
///
/// The mutation API maintains two invariants the validators rely on:
/// a node's parent always lists that node among its children, and a node
/// never contains itself, directly or transitively. Edge endpoints always
/// resolve to nodes of this diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    kind: DiagramKind,
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
}

impl Diagram {
    pub fn new(kind: DiagramKind) -> Self {
        Self {
            kind,
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub fn edges(&self) -> &BTreeMap<EdgeId, Edge> {
        &self.edges
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn edge(&self, edge_id: &EdgeId) -> Option<&Edge> {
        self.edges.get(edge_id)
    }

    /// Top-level nodes (no parent), in id order.
    pub fn root_node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.parent().is_none())
            .map(|(node_id, _)| node_id)
    }

    /// All edges whose start or end is the given node, in id order.
    pub fn edges_connected_to<'a>(
        &'a self,
        node_id: &'a NodeId,
    ) -> impl Iterator<Item = (&'a EdgeId, &'a Edge)> {
        self.edges
            .iter()
            .filter(move |(_, edge)| edge.connects(node_id))
    }

    pub fn add_node(
        &mut self,
        node_id: NodeId,
        kind: NodeKind,
        position: Point,
    ) -> Result<(), ModelError> {
        if self.nodes.contains_key(&node_id) {
            return Err(ModelError::NodeAlreadyExists(node_id));
        }
        self.nodes.insert(node_id, Node::new(kind, position));
        Ok(())
    }

    pub fn set_position(&mut self, node_id: &NodeId, position: Point) -> Result<(), ModelError> {
        let Some(node) = self.nodes.get_mut(node_id) else {
            return Err(ModelError::UnknownNode(node_id.clone()));
        };
        node.set_position(position);
        Ok(())
    }

    /// Makes `child_id` a child of `parent_id`, keeping the back-reference
    /// symmetric. Rejects attaching a node to itself or to one of its own
    /// descendants.
    pub fn attach_child(&mut self, parent_id: &NodeId, child_id: &NodeId) -> Result<(), ModelError> {
        if !self.nodes.contains_key(parent_id) {
            return Err(ModelError::UnknownNode(parent_id.clone()));
        }
        let Some(child) = self.nodes.get(child_id) else {
            return Err(ModelError::UnknownNode(child_id.clone()));
        };
        if let Some(existing) = child.parent() {
            return Err(ModelError::AlreadyAttached {
                child: child_id.clone(),
                parent: existing.clone(),
            });
        }
        if parent_id == child_id || self.is_ancestor(child_id, parent_id) {
            return Err(ModelError::SelfContainment(child_id.clone()));
        }

        self.nodes
            .get_mut(parent_id)
            .expect("parent presence checked above")
            .push_child(child_id.clone());
        self.nodes
            .get_mut(child_id)
            .expect("child presence checked above")
            .set_parent(Some(parent_id.clone()));
        Ok(())
    }

    pub fn detach_child(&mut self, child_id: &NodeId) -> Result<(), ModelError> {
        let Some(child) = self.nodes.get(child_id) else {
            return Err(ModelError::UnknownNode(child_id.clone()));
        };
        let Some(parent_id) = child.parent().cloned() else {
            return Err(ModelError::NotAttached(child_id.clone()));
        };

        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.remove_child(child_id);
        }
        self.nodes
            .get_mut(child_id)
            .expect("child presence checked above")
            .set_parent(None);
        Ok(())
    }

    pub fn add_edge(
        &mut self,
        edge_id: EdgeId,
        kind: EdgeKind,
        start: NodeId,
        end: NodeId,
        start_point: Point,
        end_point: Point,
    ) -> Result<(), ModelError> {
        if self.edges.contains_key(&edge_id) {
            return Err(ModelError::EdgeAlreadyExists(edge_id));
        }
        if !self.nodes.contains_key(&start) {
            return Err(ModelError::UnknownNode(start));
        }
        if !self.nodes.contains_key(&end) {
            return Err(ModelError::UnknownNode(end));
        }
        self.edges
            .insert(edge_id, Edge::new(kind, start, end, start_point, end_point));
        Ok(())
    }

    pub fn remove_edge(&mut self, edge_id: &EdgeId) -> Result<Edge, ModelError> {
        self.edges
            .remove(edge_id)
            .ok_or_else(|| ModelError::UnknownEdge(edge_id.clone()))
    }

    /// Removes a node, its whole subtree, and every edge connected to any
    /// removed node.
    pub fn remove_node(&mut self, node_id: &NodeId) -> Result<(), ModelError> {
        if !self.nodes.contains_key(node_id) {
            return Err(ModelError::UnknownNode(node_id.clone()));
        }

        let mut doomed = vec![node_id.clone()];
        let mut index = 0;
        while index < doomed.len() {
            let current = doomed[index].clone();
            if let Some(node) = self.nodes.get(&current) {
                doomed.extend(node.children().iter().cloned());
            }
            index += 1;
        }

        if let Some(parent_id) = self
            .nodes
            .get(node_id)
            .and_then(|node| node.parent().cloned())
        {
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                parent.remove_child(node_id);
            }
        }

        self.edges
            .retain(|_, edge| !doomed.iter().any(|removed| edge.connects(removed)));
        for removed in &doomed {
            self.nodes.remove(removed);
        }
        Ok(())
    }

    /// True when `ancestor_id` appears on `node_id`'s parent chain, or when
    /// the two are equal.
    fn is_ancestor(&self, ancestor_id: &NodeId, node_id: &NodeId) -> bool {
        let mut current = Some(node_id);
        while let Some(current_id) = current {
            if current_id == ancestor_id {
                return true;
            }
            current = self.nodes.get(current_id).and_then(Node::parent);
        }
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    NodeAlreadyExists(NodeId),
    EdgeAlreadyExists(EdgeId),
    UnknownNode(NodeId),
    UnknownEdge(EdgeId),
    AlreadyAttached { child: NodeId, parent: NodeId },
    NotAttached(NodeId),
    SelfContainment(NodeId),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeAlreadyExists(node_id) => write!(f, "node already exists (id={node_id})"),
            Self::EdgeAlreadyExists(edge_id) => write!(f, "edge already exists (id={edge_id})"),
            Self::UnknownNode(node_id) => write!(f, "node not found (id={node_id})"),
            Self::UnknownEdge(edge_id) => write!(f, "edge not found (id={edge_id})"),
            Self::AlreadyAttached { child, parent } => {
                write!(f, "node {child} is already attached to {parent}")
            }
            Self::NotAttached(node_id) => write!(f, "node {node_id} has no parent"),
            Self::SelfContainment(node_id) => {
                write!(f, "node {node_id} cannot contain itself")
            }
        }
    }
}

impl std::error::Error for ModelError {}

#[cfg(test)]
mod tests {
    use super::{Diagram, DiagramKind, ModelError};
    use crate::geometry::Point;
    use crate::model::{EdgeId, EdgeKind, NodeId, NodeKind};

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    fn eid(value: &str) -> EdgeId {
        EdgeId::new(value).expect("edge id")
    }

    fn class_diagram_with_package() -> Diagram {
        let mut diagram = Diagram::new(DiagramKind::Class);
        diagram
            .add_node(nid("n:pkg"), NodeKind::Package, Point::new(0, 0))
            .expect("add package");
        diagram
            .add_node(nid("n:a"), NodeKind::Class, Point::new(20, 40))
            .expect("add class a");
        diagram
            .add_node(nid("n:b"), NodeKind::Class, Point::new(200, 40))
            .expect("add class b");
        diagram
    }

    #[test]
    fn attach_child_keeps_back_reference_symmetry() {
        let mut diagram = class_diagram_with_package();
        diagram
            .attach_child(&nid("n:pkg"), &nid("n:a"))
            .expect("attach");

        let parent = diagram.node(&nid("n:pkg")).expect("package");
        let child = diagram.node(&nid("n:a")).expect("class");
        assert_eq!(parent.children(), &[nid("n:a")]);
        assert_eq!(child.parent(), Some(&nid("n:pkg")));

        let roots = diagram.root_node_ids().cloned().collect::<Vec<_>>();
        assert_eq!(roots, vec![nid("n:b"), nid("n:pkg")]);
    }

    #[test]
    fn attach_child_rejects_self_and_cycles() {
        let mut diagram = class_diagram_with_package();
        diagram
            .add_node(nid("n:inner"), NodeKind::Package, Point::new(10, 10))
            .expect("add inner package");
        diagram
            .attach_child(&nid("n:pkg"), &nid("n:inner"))
            .expect("attach inner");

        assert_eq!(
            diagram.attach_child(&nid("n:pkg"), &nid("n:pkg")),
            Err(ModelError::SelfContainment(nid("n:pkg")))
        );
        assert_eq!(
            diagram.attach_child(&nid("n:inner"), &nid("n:pkg")),
            Err(ModelError::SelfContainment(nid("n:pkg")))
        );
    }

    #[test]
    fn attach_child_rejects_second_parent() {
        let mut diagram = class_diagram_with_package();
        diagram
            .add_node(nid("n:pkg2"), NodeKind::Package, Point::new(300, 0))
            .expect("add second package");
        diagram
            .attach_child(&nid("n:pkg"), &nid("n:a"))
            .expect("attach");

        assert_eq!(
            diagram.attach_child(&nid("n:pkg2"), &nid("n:a")),
            Err(ModelError::AlreadyAttached {
                child: nid("n:a"),
                parent: nid("n:pkg"),
            })
        );
    }

    #[test]
    fn detach_child_clears_both_sides() {
        let mut diagram = class_diagram_with_package();
        diagram
            .attach_child(&nid("n:pkg"), &nid("n:a"))
            .expect("attach");
        diagram.detach_child(&nid("n:a")).expect("detach");

        assert!(diagram
            .node(&nid("n:pkg"))
            .expect("package")
            .children()
            .is_empty());
        assert_eq!(diagram.node(&nid("n:a")).expect("class").parent(), None);
        assert_eq!(
            diagram.detach_child(&nid("n:a")),
            Err(ModelError::NotAttached(nid("n:a")))
        );
    }

    #[test]
    fn add_edge_requires_resolvable_endpoints() {
        let mut diagram = class_diagram_with_package();
        assert_eq!(
            diagram.add_edge(
                eid("e:dangling"),
                EdgeKind::Association,
                nid("n:a"),
                nid("n:missing"),
                Point::new(0, 0),
                Point::new(0, 0),
            ),
            Err(ModelError::UnknownNode(nid("n:missing")))
        );
    }

    #[test]
    fn edges_connected_to_scans_both_directions() {
        let mut diagram = class_diagram_with_package();
        diagram
            .add_edge(
                eid("e:ab"),
                EdgeKind::Association,
                nid("n:a"),
                nid("n:b"),
                Point::new(60, 50),
                Point::new(200, 50),
            )
            .expect("add edge");
        diagram
            .add_edge(
                eid("e:ba"),
                EdgeKind::Dependency,
                nid("n:b"),
                nid("n:a"),
                Point::new(200, 60),
                Point::new(60, 60),
            )
            .expect("add edge");

        let node_a = nid("n:a");
        let connected = diagram
            .edges_connected_to(&node_a)
            .map(|(edge_id, _)| edge_id.clone())
            .collect::<Vec<_>>();
        assert_eq!(connected, vec![eid("e:ab"), eid("e:ba")]);
    }

    #[test]
    fn remove_node_cascades_to_subtree_and_edges() {
        let mut diagram = Diagram::new(DiagramKind::Object);
        diagram
            .add_node(nid("n:obj"), NodeKind::Object, Point::new(0, 0))
            .expect("add object");
        diagram
            .add_node(nid("n:field"), NodeKind::Field, Point::new(10, 70))
            .expect("add field");
        diagram
            .add_node(nid("n:other"), NodeKind::Object, Point::new(300, 0))
            .expect("add other");
        diagram
            .attach_child(&nid("n:obj"), &nid("n:field"))
            .expect("attach field");
        diagram
            .add_edge(
                eid("e:ref"),
                EdgeKind::Reference,
                nid("n:field"),
                nid("n:other"),
                Point::new(20, 75),
                Point::new(300, 30),
            )
            .expect("add reference");

        diagram.remove_node(&nid("n:obj")).expect("remove object");

        assert_eq!(diagram.node(&nid("n:obj")), None);
        assert_eq!(diagram.node(&nid("n:field")), None);
        assert!(diagram.edges().is_empty());
        assert!(diagram.node(&nid("n:other")).is_some());
    }
}
