//! Layout state: the current coordinate of every node.
//!
//! A [`Layout`] is created empty and uninitialized. The first simulation step
//! fills in missing coordinates with the randomized initializer and marks the
//! layout initialized; every later step replaces all coordinates at once.
//!
//! During a step, forces receive a shared reference to the layout and so see
//! one consistent snapshot. Only the simulation writes coordinates back, after
//! every force has been evaluated.

use std::collections::HashMap;

use coulomb_core::{
    geometry::{Bounds, Vec2},
    identifier::NodeId,
};

/// Mapping from node to its current position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    coords: HashMap<NodeId, Vec2>,
    initialized: bool,
}

impl Layout {
    /// Creates an empty, uninitialized layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once starting coordinates have been assigned.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Marks the layout as initialized so the randomized initializer is skipped.
    ///
    /// Use this after placing every node manually with [`Layout::set_coord`].
    pub fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    /// Returns the position of a node, if one has been assigned.
    pub fn get(&self, node: NodeId) -> Option<Vec2> {
        self.coords.get(&node).copied()
    }

    /// Returns the position of a node, or the origin if none has been assigned.
    pub fn coord(&self, node: NodeId) -> Vec2 {
        self.get(node).unwrap_or_default()
    }

    /// Sets the position of a node.
    ///
    /// Setting coordinates does not mark the layout initialized: nodes left
    /// unplaced are still randomized on the first step.
    pub fn set_coord(&mut self, node: NodeId, position: Vec2) {
        self.coords.insert(node, position);
    }

    /// Returns the number of placed nodes.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if no node has been placed.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns all placed nodes and their positions in ascending node order.
    pub fn positions(&self) -> Vec<(NodeId, Vec2)> {
        let mut positions: Vec<(NodeId, Vec2)> = self
            .coords
            .iter()
            .map(|(node, position)| (*node, *position))
            .collect();
        positions.sort_unstable_by_key(|(node, _)| *node);
        positions
    }

    /// Returns the bounding box of all placed nodes.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.coords.values().copied())
    }

    /// Returns the mean position of all placed nodes.
    pub fn centroid(&self) -> Option<Vec2> {
        if self.coords.is_empty() {
            return None;
        }
        let sum = self
            .positions()
            .into_iter()
            .fold(Vec2::zero(), |acc, (_, position)| acc.add_vec(position));
        Some(sum.scale(1.0 / self.coords.len() as f64))
    }

    /// Writes a full set of new positions.
    pub(crate) fn commit(&mut self, positions: impl IntoIterator<Item = (NodeId, Vec2)>) {
        self.coords.extend(positions);
    }
}
