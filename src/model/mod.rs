// SPDX-FileCopyrightText: 2026 Galatea Contributors
// SPDX-License-Identifier: MIT

//! Core diagram model: typed nodes and edges, containment, traversal queries.
//!
//! The model holds no validation logic. It exposes the traversal primitives
//! the validators need and maintains the structural invariants (parent/child
//! symmetry, resolvable endpoints) that make validation a total function.

pub mod diagram;
pub mod edge;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod node;

pub use diagram::{Diagram, DiagramKind, ModelError};
pub use edge::{Edge, EdgeKind};
pub use ids::{EdgeId, Id, IdError, NodeId};
pub use node::{Node, NodeKind};
