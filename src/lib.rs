// SPDX-FileCopyrightText: 2026 Galatea Contributors
// SPDX-License-Identifier: MIT

//! Galatea — validity engine for typed UML-style diagrams.
//!
//! Five diagram kinds (class, sequence, state, object, use case), each with
//! its own legal node/edge kinds, containment rules, and ordered semantic
//! constraint set. The engine answers two questions for the editor: is this
//! diagram well-formed, and may this edge be added? It never mutates the
//! diagram, never repairs anything, and recomputes every derived fact per
//! call.

pub mod geometry;
pub mod model;
pub mod query;
pub mod rules;
pub mod validate;

pub use geometry::{HeaderBand, Point, Region, RegionClassifier};
pub use model::{
    Diagram, DiagramKind, Edge, EdgeId, EdgeKind, Id, IdError, ModelError, Node, NodeId, NodeKind,
};
pub use rules::{Constraint, EdgeCandidate, RuleSet};
pub use validate::{can_add_edge, is_diagram_valid, DiagramValidator, StructuralRule, Violation};
