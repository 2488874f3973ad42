// SPDX-FileCopyrightText: 2026 Galatea Contributors
// SPDX-License-Identifier: MIT

//! The narrow geometry surface the validity engine consumes.
//!
//! Everything else about canvas geometry (bounds, hit testing, routing) lives
//! with the rendering collaborator. The engine only needs to know whether a
//! candidate attachment point falls into the header band or the body of a
//! container node, and receives that answer through an injected
//! [`RegionClassifier`].

use serde::{Deserialize, Serialize};

use crate::model::Node;

/// An integer canvas coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The two classifiable sub-areas of a container node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Header,
    Body,
}

/// Classifies a candidate point relative to a node.
///
/// Injected into the semantic validator so the sequence-diagram constraints
/// stay pure functions of their declared inputs.
pub trait RegionClassifier {
    fn region_of(&self, node: &Node, point: Point) -> Region;
}

impl<T: RegionClassifier + ?Sized> RegionClassifier for &T {
    fn region_of(&self, node: &Node, point: Point) -> Region {
        (**self).region_of(node, point)
    }
}

/// Stock classifier: the header is a fixed-height band below the node's top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderBand {
    height: i32,
}

impl HeaderBand {
    pub const DEFAULT_HEIGHT: i32 = 60;

    pub fn new(height: i32) -> Self {
        Self { height }
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Default for HeaderBand {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HEIGHT)
    }
}

impl RegionClassifier for HeaderBand {
    fn region_of(&self, node: &Node, point: Point) -> Region {
        if point.y < node.position().y.saturating_add(self.height) {
            Region::Header
        } else {
            Region::Body
        }
    }
}
