//! Coulomb - spring-electrical force-directed layout for weighted graphs.
//!
//! Nodes repel each other like charged particles and edges pull their
//! endpoints together like springs. An optional central gravity keeps
//! disconnected parts of the graph from drifting apart. Each step sums the
//! forces, moves every node by a geometrically cooled step size scaled by its
//! mass, and stops once the total movement falls below a threshold or the
//! update budget is spent.
//!
//! The engine reads topology through the [`graph::LayoutGraph`] trait and
//! never mutates the graph. Runs are reproducible: the starting coordinates
//! come from a seeded generator and forces are summed in a fixed order.

pub mod config;
pub mod force;
pub mod graph;
pub mod init;
pub mod layout;
pub mod optimizer;
pub mod simulation;

mod error;

pub use coulomb_core::{geometry, identifier};

pub use error::{ConfigError, GraphError, LayoutError, SimulationError};

use log::{debug, info};

use config::AppConfig;
use graph::LayoutGraph;
use layout::Layout;
use optimizer::{Optimizer, RunSummary};
use simulation::Simulation;

/// Builder for running a configured layout over a graph.
///
/// # Examples
///
/// ```rust
/// use coulomb::{LayoutBuilder, config::AppConfig, graph::WeightedGraph, identifier::NodeId};
///
/// let mut graph = WeightedGraph::new();
/// for raw in 0..4 {
///     graph.add_node(NodeId::new(raw)).unwrap();
/// }
/// graph.add_edge(NodeId::new(0), NodeId::new(1)).unwrap();
/// graph.add_edge(NodeId::new(2), NodeId::new(3)).unwrap();
///
/// let builder = LayoutBuilder::new(AppConfig::default());
/// let layout = builder.run(&graph).expect("Failed to lay out graph");
///
/// assert_eq!(layout.len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    config: AppConfig,
}

impl LayoutBuilder {
    /// Create a new layout builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulation and force settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Builds a fresh simulation with the configured forces.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Config`] if the configuration is invalid.
    pub fn build_simulation(&self) -> Result<Simulation, LayoutError> {
        Ok(Simulation::from_config(&self.config)?)
    }

    /// Lays out a graph from scratch and returns the final coordinates.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError` for invalid configuration or a failed step.
    pub fn run(&self, graph: &dyn LayoutGraph) -> Result<Layout, LayoutError> {
        self.run_with_summary(graph).map(|(layout, _)| layout)
    }

    /// Lays out a graph from scratch and returns the final coordinates along
    /// with run statistics.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError` for invalid configuration or a failed step.
    pub fn run_with_summary(
        &self,
        graph: &dyn LayoutGraph,
    ) -> Result<(Layout, RunSummary), LayoutError> {
        info!(node_count = graph.node_count(); "Laying out graph");

        let simulation = self.build_simulation()?;
        debug!(force_count = simulation.force_count(); "Simulation built");

        let mut optimizer = Optimizer::new(graph, simulation);
        let summary = optimizer.run()?;

        info!(steps = summary.steps(), converged = summary.converged(); "Layout complete");
        Ok((optimizer.into_layout(), summary))
    }
}
