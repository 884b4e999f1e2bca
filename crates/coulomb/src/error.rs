//! Error types for Coulomb operations.
//!
//! This module provides the main error type [`LayoutError`] which wraps the
//! three families of faults the engine reports:
//!
//! - [`ConfigError`] - rejected parameters, raised at construction time
//! - [`GraphError`] - malformed input while building a [`crate::graph::WeightedGraph`]
//! - [`SimulationError`] - faults detected while running a step
//!
//! Faults are never retried. A step that reports a [`SimulationError`] leaves
//! the layout, the remaining budget and the iteration counter untouched.

use thiserror::Error;

use coulomb_core::identifier::NodeId;

/// Invalid simulation or force parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("optimal distance must be positive and finite, got {0}")]
    OptimalDistance(f64),

    #[error("cooling rate must be within [0, 1), got {0}")]
    CoolingRate(f64),

    #[error("minimum distance must be positive and finite, got {0}")]
    MinDistance(f64),

    #[error("initial scale must be positive and finite, got {0}")]
    InitialScale(f64),

    #[error("`{name}` must be non-negative and finite, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("`{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Malformed graph input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("node {0} is defined more than once")]
    DuplicateNode(NodeId),

    #[error("edge {from} -> {to} references an unknown node")]
    UnknownEndpoint { from: NodeId, to: NodeId },

    #[error("node {node} has invalid mass {mass}; mass must be positive and finite")]
    InvalidMass { node: NodeId, mass: f64 },

    #[error("edge {from} -> {to} has non-finite weight {weight}")]
    InvalidWeight { from: NodeId, to: NodeId, weight: f64 },
}

/// Faults detected while running a simulation step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("force `{provider}` produced a non-finite value for node {node}")]
    NonFiniteForce { provider: String, node: NodeId },

    #[error("integration moved node {node} to a non-finite position")]
    NonFinitePosition { node: NodeId },

    #[error("node {node} has invalid mass {mass}; mass must be positive and finite")]
    InvalidMass { node: NodeId, mass: f64 },
}

/// The main error type for Coulomb operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),
}
