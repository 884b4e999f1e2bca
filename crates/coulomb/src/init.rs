//! Seeded placement of starting coordinates.
//!
//! Coordinates are drawn uniformly from a square centered on the origin whose
//! side is `node_count * scale`. The generator is a [`ChaCha8Rng`] created per
//! call from an explicit seed, so placements are reproducible across runs,
//! platforms and graph implementations that enumerate the same identifiers.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use coulomb_core::geometry::Vec2;

use crate::{graph::LayoutGraph, layout::Layout};

/// Assigns random starting coordinates to unplaced nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomInitializer {
    seed: u64,
    scale: f64,
}

impl RandomInitializer {
    /// Creates an initializer.
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed for the pseudo-random generator.
    /// * `scale` - Per-node side length of the sampling square.
    pub fn new(seed: u64, scale: f64) -> Self {
        Self { seed, scale }
    }

    /// Half of the side length of the sampling square for `node_count` nodes.
    pub fn half_extent(&self, node_count: usize) -> f64 {
        0.5 * node_count as f64 * self.scale
    }

    /// Places every node that has no coordinate yet and marks the layout
    /// initialized.
    ///
    /// Nodes are visited in the graph's ascending order and each placed node
    /// draws its x coordinate, then its y coordinate. Nodes that already hold
    /// a coordinate keep it and consume no draws.
    pub fn assign(&self, graph: &dyn LayoutGraph, layout: &mut Layout) {
        let ids = graph.node_ids();
        let range = ids.len() as f64 * self.scale;
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        let mut placed = 0usize;
        for id in ids {
            if layout.get(id).is_some() {
                continue;
            }
            let x = rng.random::<f64>() * range - 0.5 * range;
            let y = rng.random::<f64>() * range - 0.5 * range;
            layout.set_coord(id, Vec2::new(x, y));
            placed += 1;
        }

        layout.mark_initialized();
        debug!(seed = self.seed, range, placed; "Assigned random starting coordinates");
    }
}

#[cfg(test)]
mod tests {
    use coulomb_core::identifier::NodeId;

    use super::*;
    use crate::graph::WeightedGraph;

    fn graph_with(nodes: &[u64]) -> WeightedGraph {
        let mut graph = WeightedGraph::new();
        for raw in nodes {
            graph.add_node(NodeId::new(*raw)).unwrap();
        }
        graph
    }

    #[test]
    fn test_same_seed_same_coordinates() {
        let graph = graph_with(&[0, 1, 2, 3, 4]);
        let initializer = RandomInitializer::new(42, 10.0);

        let mut first = Layout::new();
        let mut second = Layout::new();
        initializer.assign(&graph, &mut first);
        initializer.assign(&graph, &mut second);

        assert_eq!(first, second);
        assert!(first.is_initialized());
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_different_seed_different_coordinates() {
        let graph = graph_with(&[0, 1, 2]);

        let mut first = Layout::new();
        let mut second = Layout::new();
        RandomInitializer::new(1, 10.0).assign(&graph, &mut first);
        RandomInitializer::new(2, 10.0).assign(&graph, &mut second);

        assert_ne!(first, second);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let forward = graph_with(&[1, 2, 3, 4]);
        let backward = graph_with(&[4, 3, 2, 1]);
        let initializer = RandomInitializer::new(7, 5.0);

        let mut first = Layout::new();
        let mut second = Layout::new();
        initializer.assign(&forward, &mut first);
        initializer.assign(&backward, &mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_coordinates_stay_within_square() {
        let graph = graph_with(&(0..50).collect::<Vec<_>>());
        let initializer = RandomInitializer::new(3, 2.0);
        let half = initializer.half_extent(50);
        assert_eq!(half, 50.0);

        let mut layout = Layout::new();
        initializer.assign(&graph, &mut layout);

        for (_, position) in layout.positions() {
            assert!(position.x() >= -half && position.x() < half);
            assert!(position.y() >= -half && position.y() < half);
        }
    }

    #[test]
    fn test_existing_coordinates_are_kept() {
        let graph = graph_with(&[1, 2, 3]);
        let initializer = RandomInitializer::new(9, 10.0);

        let mut full = Layout::new();
        initializer.assign(&graph, &mut full);

        let pinned = Vec2::new(100.0, -100.0);
        let mut partial = Layout::new();
        partial.set_coord(NodeId::new(2), pinned);
        initializer.assign(&graph, &mut partial);

        assert_eq!(partial.coord(NodeId::new(2)), pinned);
        // Node 1 draws first in both runs, so it lands in the same place
        assert_eq!(
            partial.coord(NodeId::new(1)),
            full.coord(NodeId::new(1))
        );
        // Node 3 takes the draws node 2 would have used
        assert_eq!(
            partial.coord(NodeId::new(3)),
            full.coord(NodeId::new(2))
        );
    }

    #[test]
    fn test_empty_graph_only_marks_initialized() {
        let graph = WeightedGraph::new();
        let mut layout = Layout::new();
        RandomInitializer::new(0, 10.0).assign(&graph, &mut layout);

        assert!(layout.is_initialized());
        assert!(layout.is_empty());
    }
}
