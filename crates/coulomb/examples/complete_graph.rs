//! Example: Laying out a weighted complete graph
//!
//! Builds ten nodes with increasing masses, connects every ordered pair with
//! a weight equal to the sum of the endpoint indices, and runs the
//! spring-electric force together with central gravity.

use coulomb::{
    LayoutBuilder,
    config::{AppConfig, CentralGravityConfig, SimulationConfig, SpringElectricConfig},
    geometry::Vec2,
    graph::{LayoutGraph, WeightedGraph},
    identifier::NodeId,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut graph = WeightedGraph::new();
    for i in 0..10u64 {
        // Heavier nodes move less per unit force
        graph.add_node_with_mass(NodeId::new(i), (i + 1) as f64)?;
    }
    for i in 0..10u64 {
        for j in 0..10u64 {
            if i != j {
                graph.add_weighted_edge(NodeId::new(i), NodeId::new(j), (i + j) as f64)?;
            }
        }
    }
    println!(
        "Graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let config = AppConfig::new(
        SimulationConfig::default()
            .with_step_size(0.001)
            .with_cooling_rate(0.4)
            .with_stop_threshold(0.2)
            .with_update_budget(100)
            .with_random_seed(42),
        Some(
            SpringElectricConfig::default()
                .with_optimal_distance(10.0)
                .with_repulsion_strength(10.0)
                .with_repulsion_exponent(3.0),
        ),
        Some(CentralGravityConfig::new(Vec2::zero(), 10.0)),
    );

    let (layout, summary) = LayoutBuilder::new(config).run_with_summary(&graph)?;

    println!(
        "Stopped after {} steps ({:?}), last displacement {:?}\n",
        summary.steps(),
        summary.state(),
        summary.last_displacement()
    );
    for (node, position) in layout.positions() {
        println!("{node}: ({:.4}, {:.4})", position.x(), position.y());
    }

    Ok(())
}
