//! The simulation step: force composition, cooling and integration.
//!
//! A [`Simulation`] holds an ordered stack of [`Force`]s and the integration
//! parameters of a single run. Each call to [`Simulation::step`]:
//!
//! 1. stops immediately if the update budget is spent or the graph is empty,
//! 2. randomizes starting coordinates if the layout is uninitialized,
//! 3. evaluates every force against the same layout snapshot and sums the
//!    results per node in registration order,
//! 4. cools the step size geometrically,
//! 5. moves every node by `step_size / mass * force`,
//! 6. commits all new positions at once and reports whether to continue.
//!
//! The run continues while budget remains **and** the total displacement of
//! the step exceeds the stop threshold; either condition alone halts it.
//!
//! # State machine
//!
//! ```text
//! Uninitialized ──► Running ──► Converged
//!                      │
//!                      └──────► Exhausted
//! ```
//!
//! `Converged` and `Exhausted` are terminal: later calls return `false`
//! without touching the layout.

use std::collections::HashMap;

use log::{debug, info, trace};

use coulomb_core::{geometry::Vec2, identifier::NodeId};

use crate::{
    config::{AppConfig, DEFAULT_INITIAL_SCALE, SimulationConfig},
    error::{ConfigError, SimulationError},
    force::{CentralGravity, Force, SpringElectric},
    graph::{DEFAULT_MASS, LayoutGraph},
    init::RandomInitializer,
    layout::Layout,
};

/// Lifecycle of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    /// No step has run yet.
    Uninitialized,
    /// Steps are being taken.
    Running,
    /// Total displacement fell to the stop threshold, or there was nothing to move.
    Converged,
    /// The update budget is spent.
    Exhausted,
}

impl SimulationState {
    /// Returns true for `Converged` and `Exhausted`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Converged | Self::Exhausted)
    }
}

/// A force-directed layout run.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    forces: Vec<Box<dyn Force>>,
    remaining_updates: u32,
    iterations_completed: u32,
    last_displacement: Option<f64>,
    state: SimulationState,
}

impl Simulation {
    /// Creates a simulation with no forces.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the parameters are invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            remaining_updates: config.update_budget(),
            config,
            forces: Vec::new(),
            iterations_completed: 0,
            last_displacement: None,
            state: SimulationState::Uninitialized,
        })
    }

    /// Creates a simulation with the forces described by an [`AppConfig`].
    ///
    /// The spring-electric force is registered before central gravity.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any section is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut simulation = Self::new(config.simulation().clone())?;

        if let Some(spring_electric) = config.spring_electric() {
            simulation.add_force(SpringElectric::new(spring_electric.clone())?);
        }
        if let Some(gravity) = config.gravity() {
            simulation.add_force(CentralGravity::new(gravity.clone())?);
        }

        debug!(
            force_count = simulation.forces.len(),
            update_budget = config.simulation().update_budget(),
            initial_scale = simulation.initial_scale();
            "Simulation configured"
        );
        Ok(simulation)
    }

    /// Appends a force to the stack.
    ///
    /// Forces may be added before the first step or between steps.
    pub fn add_force(&mut self, force: impl Force + 'static) {
        self.add_boxed_force(Box::new(force));
    }

    /// Appends an already boxed force to the stack.
    pub fn add_boxed_force(&mut self, force: Box<dyn Force>) {
        debug!(force = force.name(); "Registered force");
        self.forces.push(force);
    }

    /// Returns the number of registered forces.
    pub fn force_count(&self) -> usize {
        self.forces.len()
    }

    /// Returns the integration parameters.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Returns the number of steps still allowed.
    pub fn remaining_updates(&self) -> u32 {
        self.remaining_updates
    }

    /// Returns the number of steps that have committed.
    pub fn iterations_completed(&self) -> u32 {
        self.iterations_completed
    }

    /// Returns the total displacement of the last committed step.
    pub fn last_displacement(&self) -> Option<f64> {
        self.last_displacement
    }

    /// Per-node side length of the square the initializer samples from.
    ///
    /// An explicit `initial_scale` in the config wins. Otherwise the first
    /// registered force with a characteristic scale provides it, and
    /// [`DEFAULT_INITIAL_SCALE`] applies when none does.
    pub fn initial_scale(&self) -> f64 {
        self.config.initial_scale().unwrap_or_else(|| {
            self.forces
                .iter()
                .find_map(|force| force.characteristic_scale())
                .unwrap_or(DEFAULT_INITIAL_SCALE)
        })
    }

    /// Step size after `iterations` cooled steps:
    /// `step_size * (1 - cooling_rate)^iterations`.
    pub fn step_size_at(&self, iterations: u32) -> f64 {
        let retention = 1.0 - self.config.cooling_rate();
        self.config.step_size() * retention.powf(f64::from(iterations))
    }

    /// Step size the next step will use.
    pub fn current_step_size(&self) -> f64 {
        self.step_size_at(self.iterations_completed)
    }

    /// Runs one simulation step.
    ///
    /// Returns `Ok(true)` if the caller should keep stepping.
    ///
    /// # Errors
    ///
    /// Returns a [`SimulationError`] if a force yields a non-finite vector, a
    /// node has an invalid mass, or integration produces a non-finite
    /// position. The layout and all counters are left unchanged in that case.
    pub fn step(
        &mut self,
        graph: &dyn LayoutGraph,
        layout: &mut Layout,
    ) -> Result<bool, SimulationError> {
        if self.state.is_terminal() {
            return Ok(false);
        }
        if self.remaining_updates == 0 {
            debug!("Update budget exhausted before stepping");
            self.state = SimulationState::Exhausted;
            return Ok(false);
        }

        let ids = graph.node_ids();
        if ids.is_empty() {
            debug!("Graph has no nodes, nothing to lay out");
            self.state = SimulationState::Converged;
            return Ok(false);
        }

        // Seed a copy so a failed step leaves the caller's layout untouched
        let seeded = (!layout.is_initialized()).then(|| {
            let mut seeded = layout.clone();
            RandomInitializer::new(self.config.random_seed(), self.initial_scale())
                .assign(graph, &mut seeded);
            seeded
        });
        let snapshot = seeded.as_ref().unwrap_or(&*layout);

        let totals = self.combined_forces(graph, snapshot, &ids)?;
        let step_size = self.current_step_size();
        let (updates, displacement) = integrate(graph, snapshot, &ids, &totals, step_size)?;

        if let Some(seeded) = seeded {
            *layout = seeded;
        }
        layout.commit(updates);

        self.remaining_updates -= 1;
        self.iterations_completed += 1;
        self.last_displacement = Some(displacement);

        let converged = displacement <= self.config.stop_threshold();
        self.state = if converged {
            SimulationState::Converged
        } else if self.remaining_updates == 0 {
            SimulationState::Exhausted
        } else {
            SimulationState::Running
        };

        trace!(
            iteration = self.iterations_completed,
            step_size,
            displacement,
            remaining = self.remaining_updates;
            "Step committed"
        );
        if self.state.is_terminal() {
            info!(
                iterations = self.iterations_completed,
                displacement,
                state:? = self.state;
                "Simulation stopped"
            );
        }

        Ok(self.state == SimulationState::Running)
    }

    /// Sums the output of every force per node, in registration order.
    fn combined_forces(
        &self,
        graph: &dyn LayoutGraph,
        snapshot: &Layout,
        ids: &[NodeId],
    ) -> Result<HashMap<NodeId, Vec2>, SimulationError> {
        let mut totals: HashMap<NodeId, Vec2> =
            ids.iter().map(|&id| (id, Vec2::zero())).collect();

        for force in &self.forces {
            let contribution = force.calculate(graph, snapshot);
            for &id in ids {
                let Some(&value) = contribution.get(&id) else {
                    continue;
                };
                if !value.is_finite() {
                    return Err(SimulationError::NonFiniteForce {
                        provider: force.name().to_string(),
                        node: id,
                    });
                }
                if let Some(total) = totals.get_mut(&id) {
                    *total = total.add_vec(value);
                }
            }
        }

        Ok(totals)
    }
}

/// Computes the new position of every node and the total displacement.
fn integrate(
    graph: &dyn LayoutGraph,
    snapshot: &Layout,
    ids: &[NodeId],
    totals: &HashMap<NodeId, Vec2>,
    step_size: f64,
) -> Result<(Vec<(NodeId, Vec2)>, f64), SimulationError> {
    let mut updates = Vec::with_capacity(ids.len());
    let mut displacement = 0.0;

    for &id in ids {
        let mass = graph.mass(id).unwrap_or(DEFAULT_MASS);
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimulationError::InvalidMass { node: id, mass });
        }

        let old = snapshot.coord(id);
        let force = totals.get(&id).copied().unwrap_or_default();
        let new = old.add_vec(force.scale(step_size / mass));
        if !new.is_finite() {
            return Err(SimulationError::NonFinitePosition { node: id });
        }

        displacement += old.distance(new);
        updates.push((id, new));
    }

    Ok((updates, displacement))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::{
        config::{CentralGravityConfig, SpringElectricConfig},
        force::Forces,
        graph::WeightedGraph,
    };

    fn node(raw: u64) -> NodeId {
        NodeId::new(raw)
    }

    fn graph_with(nodes: &[u64]) -> WeightedGraph {
        let mut graph = WeightedGraph::new();
        for raw in nodes {
            graph.add_node(node(*raw)).unwrap();
        }
        graph
    }

    fn placed(positions: &[(u64, f64, f64)]) -> Layout {
        let mut layout = Layout::new();
        for &(raw, x, y) in positions {
            layout.set_coord(node(raw), Vec2::new(x, y));
        }
        layout.mark_initialized();
        layout
    }

    /// Pushes every node by a fixed vector.
    #[derive(Debug)]
    struct Constant(Vec2);

    impl Force for Constant {
        fn name(&self) -> &str {
            "constant"
        }

        fn calculate(&self, graph: &dyn LayoutGraph, _layout: &Layout) -> Forces {
            graph.node_ids().into_iter().map(|id| (id, self.0)).collect()
        }
    }

    /// Returns NaN for a single node.
    #[derive(Debug)]
    struct Broken(NodeId);

    impl Force for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn calculate(&self, _graph: &dyn LayoutGraph, _layout: &Layout) -> Forces {
            Forces::from([(self.0, Vec2::new(f64::NAN, 0.0))])
        }
    }

    fn unit_step_config() -> SimulationConfig {
        SimulationConfig::default()
            .with_step_size(1.0)
            .with_cooling_rate(0.0)
            .with_stop_threshold(0.0)
            .with_update_budget(10)
    }

    #[test]
    fn test_zero_budget_stops_without_mutation() {
        let graph = graph_with(&[1, 2]);
        let mut simulation =
            Simulation::new(SimulationConfig::default().with_update_budget(0)).unwrap();
        simulation.add_force(SpringElectric::new(SpringElectricConfig::default()).unwrap());
        let mut layout = Layout::new();

        assert_eq!(simulation.step(&graph, &mut layout), Ok(false));
        assert_eq!(layout, Layout::new());
        assert_eq!(simulation.state(), SimulationState::Exhausted);
        assert_eq!(simulation.iterations_completed(), 0);
    }

    #[test]
    fn test_empty_graph_stops() {
        let graph = WeightedGraph::new();
        let mut simulation = Simulation::new(SimulationConfig::default()).unwrap();
        let mut layout = Layout::new();

        assert_eq!(simulation.step(&graph, &mut layout), Ok(false));
        assert_eq!(simulation.state(), SimulationState::Converged);
        assert_eq!(simulation.remaining_updates(), 100);
        assert!(!layout.is_initialized());
    }

    #[test]
    fn test_first_step_initializes_layout() {
        let graph = graph_with(&[1, 2, 3]);
        let mut simulation = Simulation::new(unit_step_config()).unwrap();
        let mut layout = Layout::new();

        simulation.step(&graph, &mut layout).unwrap();

        assert!(layout.is_initialized());
        assert_eq!(layout.len(), 3);
        assert_eq!(simulation.iterations_completed(), 1);
    }

    #[test]
    fn test_two_node_repulsion_step() {
        let graph = graph_with(&[0, 1]);
        let config = SimulationConfig::default().with_update_budget(1);
        let mut simulation = Simulation::new(config).unwrap();
        simulation.add_force(SpringElectric::new(SpringElectricConfig::default()).unwrap());
        let mut layout = placed(&[(0, 0.0, 0.0), (1, 1.0, 0.0)]);

        // Force magnitude C * K^(1+p) / d = 100000, scaled by a step of 0.001
        assert_eq!(simulation.step(&graph, &mut layout), Ok(false));

        assert_approx_eq!(f64, layout.coord(node(0)).x(), -100.0, epsilon = 1e-9);
        assert_approx_eq!(f64, layout.coord(node(1)).x(), 101.0, epsilon = 1e-9);
        assert_eq!(layout.coord(node(0)).y(), 0.0);
        assert_approx_eq!(
            f64,
            simulation.last_displacement().unwrap(),
            200.0,
            epsilon = 1e-9
        );
        assert_eq!(simulation.state(), SimulationState::Exhausted);
    }

    #[test]
    fn test_forces_are_summed_across_providers() {
        let graph = graph_with(&[1]);
        let mut simulation = Simulation::new(unit_step_config()).unwrap();
        simulation.add_force(Constant(Vec2::new(1.0, 0.0)));
        simulation.add_force(Constant(Vec2::new(0.5, -2.0)));
        let mut layout = placed(&[(1, 0.0, 0.0)]);

        assert_eq!(simulation.step(&graph, &mut layout), Ok(true));

        assert_eq!(layout.coord(node(1)), Vec2::new(1.5, -2.0));
        assert_approx_eq!(
            f64,
            simulation.last_displacement().unwrap(),
            Vec2::new(1.5, -2.0).norm()
        );
    }

    #[test]
    fn test_mass_scales_displacement() {
        let mut graph = WeightedGraph::new();
        graph.add_node(node(1)).unwrap();
        graph.add_node_with_mass(node(2), 4.0).unwrap();
        let mut simulation = Simulation::new(unit_step_config()).unwrap();
        simulation.add_force(Constant(Vec2::new(2.0, 0.0)));
        let mut layout = placed(&[(1, 0.0, 0.0), (2, 0.0, 0.0)]);

        simulation.step(&graph, &mut layout).unwrap();

        assert_eq!(layout.coord(node(1)), Vec2::new(2.0, 0.0));
        assert_eq!(layout.coord(node(2)), Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_cooling_schedule() {
        let graph = graph_with(&[1]);
        let config = unit_step_config()
            .with_step_size(2.0)
            .with_cooling_rate(0.5);
        let mut simulation = Simulation::new(config).unwrap();
        simulation.add_force(Constant(Vec2::new(1.0, 0.0)));
        let mut layout = placed(&[(1, 0.0, 0.0)]);

        assert_eq!(simulation.current_step_size(), 2.0);
        simulation.step(&graph, &mut layout).unwrap();
        assert_eq!(layout.coord(node(1)).x(), 2.0);

        assert_eq!(simulation.current_step_size(), 1.0);
        simulation.step(&graph, &mut layout).unwrap();
        assert_eq!(layout.coord(node(1)).x(), 3.0);

        assert_eq!(simulation.current_step_size(), 0.5);
    }

    #[test]
    fn test_step_size_is_non_increasing() {
        let simulation = Simulation::new(
            SimulationConfig::default()
                .with_step_size(0.7)
                .with_cooling_rate(0.13),
        )
        .unwrap();

        let sizes: Vec<f64> = (0..200).map(|t| simulation.step_size_at(t)).collect();
        assert!(sizes.windows(2).all(|pair| pair[1] <= pair[0]));
        assert_eq!(sizes[0], 0.7);
    }

    #[test]
    fn test_zero_cooling_keeps_step_size() {
        let simulation = Simulation::new(
            SimulationConfig::default()
                .with_step_size(0.25)
                .with_cooling_rate(0.0),
        )
        .unwrap();

        assert_eq!(simulation.step_size_at(0), 0.25);
        assert_eq!(simulation.step_size_at(50), 0.25);
    }

    #[test]
    fn test_budget_exhaustion_stops_run() {
        let graph = graph_with(&[1]);
        let mut simulation = Simulation::new(unit_step_config().with_update_budget(2)).unwrap();
        simulation.add_force(Constant(Vec2::new(1.0, 0.0)));
        let mut layout = placed(&[(1, 0.0, 0.0)]);

        assert_eq!(simulation.step(&graph, &mut layout), Ok(true));
        assert_eq!(simulation.step(&graph, &mut layout), Ok(false));
        assert_eq!(simulation.state(), SimulationState::Exhausted);

        // Terminal: no further movement
        assert_eq!(simulation.step(&graph, &mut layout), Ok(false));
        assert_eq!(layout.coord(node(1)), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_threshold_boundary() {
        let graph = graph_with(&[1]);
        let mut layout = placed(&[(1, 0.0, 0.0)]);

        // Displacement exactly at the threshold converges
        let mut simulation =
            Simulation::new(unit_step_config().with_stop_threshold(1.0)).unwrap();
        simulation.add_force(Constant(Vec2::new(1.0, 0.0)));
        assert_eq!(simulation.step(&graph, &mut layout), Ok(false));
        assert_eq!(simulation.state(), SimulationState::Converged);

        // Just above the threshold continues
        let mut simulation =
            Simulation::new(unit_step_config().with_stop_threshold(0.999)).unwrap();
        simulation.add_force(Constant(Vec2::new(1.0, 0.0)));
        assert_eq!(simulation.step(&graph, &mut layout), Ok(true));
        assert_eq!(simulation.state(), SimulationState::Running);
    }

    #[test]
    fn test_no_forces_converges_immediately() {
        let graph = graph_with(&[1, 2]);
        let mut simulation = Simulation::new(unit_step_config()).unwrap();
        let mut layout = placed(&[(1, 0.0, 0.0), (2, 5.0, 5.0)]);

        assert_eq!(simulation.step(&graph, &mut layout), Ok(false));
        assert_eq!(simulation.last_displacement(), Some(0.0));
        assert_eq!(layout.coord(node(2)), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_non_finite_force_is_rejected_without_mutation() {
        let graph = graph_with(&[1, 2]);
        let mut simulation = Simulation::new(unit_step_config()).unwrap();
        simulation.add_force(Constant(Vec2::new(1.0, 1.0)));
        simulation.add_force(Broken(node(2)));
        let mut layout = placed(&[(1, 0.0, 0.0), (2, 1.0, 1.0)]);
        let before = layout.clone();

        let result = simulation.step(&graph, &mut layout);

        assert_eq!(
            result,
            Err(SimulationError::NonFiniteForce {
                provider: "broken".to_string(),
                node: node(2)
            })
        );
        assert_eq!(layout, before);
        assert_eq!(simulation.remaining_updates(), 10);
        assert_eq!(simulation.iterations_completed(), 0);
    }

    #[test]
    fn test_fault_on_first_step_leaves_layout_uninitialized() {
        let graph = graph_with(&[1]);
        let mut simulation = Simulation::new(unit_step_config()).unwrap();
        simulation.add_force(Broken(node(1)));
        let mut layout = Layout::new();

        assert!(simulation.step(&graph, &mut layout).is_err());
        assert!(!layout.is_initialized());
        assert!(layout.is_empty());
    }

    #[test]
    fn test_overflowing_position_is_rejected() {
        let graph = graph_with(&[1]);
        let mut simulation = Simulation::new(unit_step_config()).unwrap();
        simulation.add_force(Constant(Vec2::new(f64::MAX, 0.0)));
        simulation.add_force(Constant(Vec2::new(f64::MAX, 0.0)));
        let mut layout = placed(&[(1, 0.0, 0.0)]);

        let result = simulation.step(&graph, &mut layout);

        // The summed force overflows, which the position check catches
        assert_eq!(
            result,
            Err(SimulationError::NonFinitePosition { node: node(1) })
        );
    }

    /// Reports a mass of zero for every node.
    struct Massless(WeightedGraph);

    impl LayoutGraph for Massless {
        fn node_ids(&self) -> Vec<NodeId> {
            self.0.node_ids()
        }

        fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
            self.0.edge_weight(from, to)
        }

        fn mass(&self, _node: NodeId) -> Option<f64> {
            Some(0.0)
        }
    }

    #[test]
    fn test_invalid_mass_is_rejected() {
        let graph = Massless(graph_with(&[1]));
        let mut simulation = Simulation::new(unit_step_config()).unwrap();
        let mut layout = placed(&[(1, 0.0, 0.0)]);

        assert_eq!(
            simulation.step(&graph, &mut layout),
            Err(SimulationError::InvalidMass {
                node: node(1),
                mass: 0.0
            })
        );
    }

    #[test]
    fn test_forces_can_be_added_between_steps() {
        let graph = graph_with(&[1]);
        let mut simulation = Simulation::new(unit_step_config()).unwrap();
        simulation.add_force(Constant(Vec2::new(1.0, 0.0)));
        let mut layout = placed(&[(1, 0.0, 0.0)]);

        simulation.step(&graph, &mut layout).unwrap();
        simulation.add_force(Constant(Vec2::new(0.0, 1.0)));
        simulation.step(&graph, &mut layout).unwrap();

        assert_eq!(simulation.force_count(), 2);
        assert_eq!(layout.coord(node(1)), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_from_config_registers_configured_forces() {
        let config = AppConfig::default();
        assert_eq!(Simulation::from_config(&config).unwrap().force_count(), 1);

        let config = config.with_gravity(Some(CentralGravityConfig::default()));
        assert_eq!(Simulation::from_config(&config).unwrap().force_count(), 2);

        let config = config.with_spring_electric(None).with_gravity(None);
        assert_eq!(Simulation::from_config(&config).unwrap().force_count(), 0);
    }

    #[test]
    fn test_initial_scale_follows_registered_forces() {
        let mut simulation = Simulation::new(SimulationConfig::default()).unwrap();
        assert_eq!(simulation.initial_scale(), DEFAULT_INITIAL_SCALE);

        simulation.add_force(Constant(Vec2::zero()));
        assert_eq!(simulation.initial_scale(), DEFAULT_INITIAL_SCALE);

        simulation.add_force(
            SpringElectric::new(SpringElectricConfig::default().with_optimal_distance(250.0))
                .unwrap(),
        );
        assert_eq!(simulation.initial_scale(), 250.0);

        let config = SimulationConfig::default().with_initial_scale(Some(3.0));
        let mut simulation = Simulation::new(config).unwrap();
        simulation.add_force(SpringElectric::new(SpringElectricConfig::default()).unwrap());
        assert_eq!(simulation.initial_scale(), 3.0);
    }

    #[test]
    fn test_manual_and_configured_simulations_seed_alike() {
        let graph = graph_with(&[0, 1, 2, 3]);
        let spring = SpringElectricConfig::default().with_optimal_distance(1000.0);
        let simulation_config = SimulationConfig::default().with_step_size(0.0);

        let mut manual = Simulation::new(simulation_config.clone()).unwrap();
        manual.add_force(SpringElectric::new(spring.clone()).unwrap());
        let mut manual_layout = Layout::new();
        manual.step(&graph, &mut manual_layout).unwrap();

        let config = AppConfig::default()
            .with_simulation(simulation_config.clone())
            .with_spring_electric(Some(spring));
        let mut configured = Simulation::from_config(&config).unwrap();
        let mut configured_layout = Layout::new();
        configured.step(&graph, &mut configured_layout).unwrap();

        let mut expected = Layout::new();
        RandomInitializer::new(simulation_config.random_seed(), 1000.0)
            .assign(&graph, &mut expected);

        assert_eq!(manual_layout, configured_layout);
        assert_eq!(manual_layout.positions(), expected.positions());
        assert!(manual_layout.bounds().unwrap().width() > DEFAULT_INITIAL_SCALE);
    }

    #[test]
    fn test_gated_forces_converge_without_motion() {
        let mut graph = graph_with(&[0, 1]);
        graph.add_edge(node(0), node(1)).unwrap();
        let mut simulation = Simulation::new(SimulationConfig::default()).unwrap();
        simulation.add_force(
            SpringElectric::new(
                SpringElectricConfig::default()
                    .with_optimal_distance(1.0)
                    .with_repulsion_strength(1e-6)
                    .with_attraction_exponent(0.0)
                    .with_epsilon(1.5),
            )
            .unwrap(),
        );
        let mut layout = placed(&[(0, 0.0, 0.0), (1, 1.0, 0.0)]);
        let before = layout.clone();

        assert_eq!(simulation.step(&graph, &mut layout), Ok(false));

        assert_eq!(layout, before);
        assert_eq!(simulation.last_displacement(), Some(0.0));
        assert_eq!(simulation.state(), SimulationState::Converged);
        assert_eq!(simulation.iterations_completed(), 1);
    }

    #[test]
    fn test_coincident_nodes_separate() {
        let graph = graph_with(&[0, 1, 2]);
        let config = SimulationConfig::default().with_update_budget(1);
        let mut simulation = Simulation::new(config).unwrap();
        simulation.add_force(SpringElectric::new(SpringElectricConfig::default()).unwrap());
        let mut layout = placed(&[(0, 1.0, 1.0), (1, 1.0, 1.0), (2, 20.0, 0.0)]);

        simulation.step(&graph, &mut layout).unwrap();

        assert_ne!(layout.coord(node(0)), layout.coord(node(1)));
        assert!(layout.positions().iter().all(|(_, position)| position.is_finite()));
    }

    #[test]
    fn test_from_config_rejects_invalid_sections() {
        let config = AppConfig::default().with_spring_electric(Some(
            SpringElectricConfig::default().with_optimal_distance(-1.0),
        ));

        assert_eq!(
            Simulation::from_config(&config).unwrap_err(),
            ConfigError::OptimalDistance(-1.0)
        );
    }
}
