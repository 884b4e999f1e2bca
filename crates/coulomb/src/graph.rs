//! Graph access for the layout engine.
//!
//! The simulation never owns the graph it lays out. It reads topology through
//! the [`LayoutGraph`] trait, which any host graph structure can implement.
//! [`WeightedGraph`] is a ready-made implementation backed by petgraph.
//!
//! # Architecture
//!
//! The trait exposes exactly what the forces and the integrator need:
//! - a stable, ascending enumeration of node identifiers
//! - directed edge lookup returning the edge weight
//! - an optional per-node mass
//!
//! Implementations must be [`Sync`] because forces may evaluate nodes in
//! parallel against a shared reference to the graph.

use std::{collections::HashMap, fmt};

use log::trace;
use petgraph::graphmap::DiGraphMap;

use coulomb_core::identifier::NodeId;

use crate::error::GraphError;

/// Mass assumed for nodes that do not carry one.
pub const DEFAULT_MASS: f64 = 1.0;

/// Weight assumed for edges added without one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Read-only view of a graph as seen by the layout engine.
pub trait LayoutGraph: Sync {
    /// Returns every node identifier in ascending order.
    ///
    /// The order must be stable for the lifetime of a run; the randomized
    /// initializer draws coordinates in this order.
    fn node_ids(&self) -> Vec<NodeId>;

    /// Returns the number of nodes.
    fn node_count(&self) -> usize {
        self.node_ids().len()
    }

    /// Returns the weight of the directed edge `from -> to`, if it exists.
    fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64>;

    /// Returns the mass of a node, or `None` when the node carries no mass.
    fn mass(&self, _node: NodeId) -> Option<f64> {
        None
    }
}

impl fmt::Debug for dyn LayoutGraph + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutGraph")
            .field("node_count", &self.node_count())
            .finish()
    }
}

/// Weight of the connection between two nodes regardless of direction.
///
/// The edge from the lower identifier to the higher one is consulted first,
/// then the reverse edge, so both nodes of a pair always see the same weight.
pub(crate) fn pair_weight(graph: &dyn LayoutGraph, u: NodeId, v: NodeId) -> Option<f64> {
    let (low, high) = if u < v { (u, v) } else { (v, u) };
    graph
        .edge_weight(low, high)
        .or_else(|| graph.edge_weight(high, low))
}

/// Directed weighted graph with optional node masses.
///
/// # Examples
///
/// ```
/// # use coulomb::graph::{LayoutGraph, WeightedGraph};
/// # use coulomb::identifier::NodeId;
/// let mut graph = WeightedGraph::new();
/// let a = NodeId::new(1);
/// let b = NodeId::new(2);
///
/// graph.add_node(a).unwrap();
/// graph.add_node_with_mass(b, 2.0).unwrap();
/// graph.add_edge(a, b).unwrap();
///
/// assert_eq!(graph.node_ids(), vec![a, b]);
/// assert_eq!(graph.edge_weight(a, b), Some(1.0));
/// assert_eq!(graph.edge_weight(b, a), None);
/// assert_eq!(graph.mass(b), Some(2.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    graph: DiGraphMap<NodeId, f64>,
    masses: HashMap<NodeId, f64>,
}

impl WeightedGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node without mass.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if the node already exists.
    pub fn add_node(&mut self, node: NodeId) -> Result<(), GraphError> {
        if self.graph.contains_node(node) {
            return Err(GraphError::DuplicateNode(node));
        }
        self.graph.add_node(node);
        Ok(())
    }

    /// Adds a node carrying a mass.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidMass`] if the mass is not positive and
    /// finite, or [`GraphError::DuplicateNode`] if the node already exists.
    pub fn add_node_with_mass(&mut self, node: NodeId, mass: f64) -> Result<(), GraphError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(GraphError::InvalidMass { node, mass });
        }
        self.add_node(node)?;
        self.masses.insert(node, mass);
        Ok(())
    }

    /// Adds a directed edge with [`DEFAULT_WEIGHT`].
    ///
    /// # Errors
    ///
    /// See [`WeightedGraph::add_weighted_edge`].
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        self.add_weighted_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Adds a directed edge, replacing the weight of an existing edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownEndpoint`] if either node is missing, or
    /// [`GraphError::InvalidWeight`] if the weight is not finite.
    pub fn add_weighted_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: f64,
    ) -> Result<(), GraphError> {
        if !self.graph.contains_node(from) || !self.graph.contains_node(to) {
            return Err(GraphError::UnknownEndpoint { from, to });
        }
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }
        if let Some(previous) = self.graph.add_edge(from, to, weight) {
            trace!(from:% = from, to:% = to, previous, weight; "Replaced edge weight");
        }
        Ok(())
    }

    /// Returns the number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the node exists.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }

    /// Returns an iterator over all edges as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.graph
            .all_edges()
            .map(|(from, to, weight)| (from, to, *weight))
    }
}

impl LayoutGraph for WeightedGraph {
    fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.graph.nodes().collect();
        ids.sort_unstable();
        ids
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.graph.edge_weight(from, to).copied()
    }

    fn mass(&self, node: NodeId) -> Option<f64> {
        self.masses.get(&node).copied()
    }
}
