// SPDX-FileCopyrightText: 2026 Galatea Contributors
// SPDX-License-Identifier: MIT

//! Derived facts computed from a diagram on demand.
//!
//! Nothing here is cached: the diagram may change between edits, so every
//! query recomputes from the current state.

pub mod control_flow;

pub use control_flow::{caller_of, has_entry_point, has_entry_point_besides};
