//! Driver that steps a simulation until it reports stop.

use log::{debug, info};

use crate::{
    error::SimulationError,
    graph::LayoutGraph,
    layout::Layout,
    simulation::{Simulation, SimulationState},
};

/// Outcome of [`Optimizer::run`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    steps: u32,
    final_step_size: f64,
    last_displacement: Option<f64>,
    state: SimulationState,
}

impl RunSummary {
    /// Number of steps committed during the run.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Step size the next step would have used.
    pub fn final_step_size(&self) -> f64 {
        self.final_step_size
    }

    /// Total displacement of the last committed step.
    pub fn last_displacement(&self) -> Option<f64> {
        self.last_displacement
    }

    /// Why the run stopped.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Returns true if the run stopped below the displacement threshold.
    pub fn converged(&self) -> bool {
        self.state == SimulationState::Converged
    }
}

/// Owns a layout and a simulation over a borrowed graph.
///
/// # Examples
///
/// ```
/// # use coulomb::config::{SimulationConfig, SpringElectricConfig};
/// # use coulomb::force::SpringElectric;
/// # use coulomb::graph::WeightedGraph;
/// # use coulomb::identifier::NodeId;
/// # use coulomb::optimizer::Optimizer;
/// # use coulomb::simulation::Simulation;
/// let mut graph = WeightedGraph::new();
/// graph.add_node(NodeId::new(1)).unwrap();
/// graph.add_node(NodeId::new(2)).unwrap();
/// graph.add_edge(NodeId::new(1), NodeId::new(2)).unwrap();
///
/// let mut simulation = Simulation::new(SimulationConfig::default()).unwrap();
/// simulation.add_force(SpringElectric::new(SpringElectricConfig::default()).unwrap());
///
/// let mut optimizer = Optimizer::new(&graph, simulation);
/// let summary = optimizer.run().unwrap();
///
/// assert!(summary.steps() > 0);
/// assert_eq!(optimizer.layout().len(), 2);
/// ```
#[derive(Debug)]
pub struct Optimizer<'g> {
    graph: &'g dyn LayoutGraph,
    layout: Layout,
    simulation: Simulation,
}

impl<'g> Optimizer<'g> {
    /// Creates an optimizer starting from an empty, uninitialized layout.
    pub fn new(graph: &'g dyn LayoutGraph, simulation: Simulation) -> Self {
        Self::with_layout(graph, simulation, Layout::new())
    }

    /// Creates an optimizer starting from an existing layout.
    ///
    /// Nodes missing from an uninitialized layout are placed randomly on the
    /// first step; an initialized layout is used as is.
    pub fn with_layout(graph: &'g dyn LayoutGraph, simulation: Simulation, layout: Layout) -> Self {
        Self {
            graph,
            layout,
            simulation,
        }
    }

    /// Runs one step and returns whether to continue.
    ///
    /// # Errors
    ///
    /// Propagates the [`SimulationError`] of the failed step.
    pub fn update(&mut self) -> Result<bool, SimulationError> {
        self.simulation.step(self.graph, &mut self.layout)
    }

    /// Steps until the simulation reports stop.
    ///
    /// # Errors
    ///
    /// Stops at the first failed step. Steps committed before it remain in
    /// the layout.
    pub fn run(&mut self) -> Result<RunSummary, SimulationError> {
        let start = self.simulation.iterations_completed();
        debug!(
            node_count = self.graph.node_count(),
            budget = self.simulation.remaining_updates();
            "Starting layout run"
        );

        while self.update()? {}

        let summary = RunSummary {
            steps: self.simulation.iterations_completed() - start,
            final_step_size: self.simulation.current_step_size(),
            last_displacement: self.simulation.last_displacement(),
            state: self.simulation.state(),
        };
        info!(
            steps = summary.steps,
            state:? = summary.state,
            displacement:? = summary.last_displacement;
            "Layout run finished"
        );
        Ok(summary)
    }

    /// Returns the current layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the simulation.
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Returns the simulation for registering further forces.
    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }

    /// Consumes the optimizer and returns the layout.
    pub fn into_layout(self) -> Layout {
        self.layout
    }
}
