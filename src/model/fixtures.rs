// SPDX-FileCopyrightText: 2026 Galatea Contributors
// SPDX-License-Identifier: MIT

use super::diagram::{Diagram, DiagramKind};
use super::edge::EdgeKind;
use super::ids::{EdgeId, NodeId};
use super::node::NodeKind;
use crate::geometry::Point;

pub(crate) fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

pub(crate) fn eid(value: &str) -> EdgeId {
    EdgeId::new(value).expect("edge id")
}

/// Class diagram with two class nodes `n:a` and `n:b` and no edges.
pub(crate) fn class_pair() -> Diagram {
    let mut diagram = Diagram::new(DiagramKind::Class);
    diagram
        .add_node(nid("n:a"), NodeKind::Class, Point::new(40, 40))
        .expect("add class a");
    diagram
        .add_node(nid("n:b"), NodeKind::Class, Point::new(280, 40))
        .expect("add class b");
    diagram
}

/// Valid sequence diagram: two lifelines with one call chain.
///
/// `o:left` is the entry point (call edge from its body to `c:first`), and
/// `c:first` calls `c:second` on `o:right`. Header band is the default 60px,
/// so all fixture attachment points sit below y=60.
pub(crate) fn sequence_call_chain() -> Diagram {
    let mut diagram = Diagram::new(DiagramKind::Sequence);
    diagram
        .add_node(nid("o:left"), NodeKind::ImplicitParameter, Point::new(100, 0))
        .expect("add left lifeline");
    diagram
        .add_node(
            nid("o:right"),
            NodeKind::ImplicitParameter,
            Point::new(300, 0),
        )
        .expect("add right lifeline");
    diagram
        .add_node(nid("c:first"), NodeKind::Call, Point::new(110, 80))
        .expect("add first call node");
    diagram
        .add_node(nid("c:second"), NodeKind::Call, Point::new(310, 120))
        .expect("add second call node");
    diagram
        .attach_child(&nid("o:left"), &nid("c:first"))
        .expect("attach first call node");
    diagram
        .attach_child(&nid("o:right"), &nid("c:second"))
        .expect("attach second call node");
    diagram
        .add_edge(
            eid("e:entry"),
            EdgeKind::Call,
            nid("o:left"),
            nid("c:first"),
            Point::new(100, 80),
            Point::new(110, 80),
        )
        .expect("add entry call");
    diagram
        .add_edge(
            eid("e:call"),
            EdgeKind::Call,
            nid("c:first"),
            nid("c:second"),
            Point::new(120, 110),
            Point::new(310, 120),
        )
        .expect("add call");
    diagram
}

/// Object diagram with one object owning a field, plus a second object.
pub(crate) fn object_with_field() -> Diagram {
    let mut diagram = Diagram::new(DiagramKind::Object);
    diagram
        .add_node(nid("n:order"), NodeKind::Object, Point::new(40, 40))
        .expect("add order object");
    diagram
        .add_node(nid("n:customer"), NodeKind::Object, Point::new(320, 40))
        .expect("add customer object");
    diagram
        .add_node(nid("n:total"), NodeKind::Field, Point::new(60, 120))
        .expect("add field");
    diagram
        .attach_child(&nid("n:order"), &nid("n:total"))
        .expect("attach field");
    diagram
}
