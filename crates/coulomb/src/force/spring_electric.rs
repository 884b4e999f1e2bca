//! Spring-electrical force: all-pairs repulsion plus attraction along edges.
//!
//! For a node `u` and every other node `v` at distance `d`:
//!
//! ```text
//! repulsive  = -C * K^(1+p) / d^p
//! attractive =  w * d^a / K          (only if an edge joins u and v)
//! force(u)  += ((repulsive + attractive) / d) * (pos(v) - pos(u))
//! ```
//!
//! A negative coefficient moves `u` away from `v` and a positive one toward it.
//! Each term whose magnitude is below `epsilon` is dropped before summing, and
//! `d` is clamped to `min_distance` so nodes never divide by zero.
//!
//! When the direct evaluation of a term overflows, the repulsive term is
//! recomputed in log space and both terms are capped at
//! [`MAX_TERM_MAGNITUDE`], so any valid configuration yields finite forces.
//!
//! Two nodes at exactly the same position have no direction between them. Such
//! a pair is pushed apart along a direction drawn from a generator seeded by
//! the pair's identifiers, so the split is reproducible and the two forces
//! stay exactly opposite.

use std::f64::consts::TAU;

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use coulomb_core::{geometry::Vec2, identifier::NodeId};

use crate::{
    config::SpringElectricConfig,
    error::ConfigError,
    force::{Force, Forces},
    graph::{LayoutGraph, pair_weight},
    layout::Layout,
};

/// Largest magnitude either term may take.
pub const MAX_TERM_MAGNITUDE: f64 = 1e100;

/// Keeps a term finite: overflow saturates at [`MAX_TERM_MAGNITUDE`].
fn bounded(term: f64) -> f64 {
    if term.is_nan() {
        0.0
    } else {
        term.clamp(-MAX_TERM_MAGNITUDE, MAX_TERM_MAGNITUDE)
    }
}

/// Unit vector from `u` toward `v` for a pair sharing one position.
///
/// The lower identifier gets the drawn direction and the higher one its exact
/// negation.
fn coincident_direction(u: NodeId, v: NodeId) -> Vec2 {
    let (low, high) = if u < v { (u, v) } else { (v, u) };
    let mut rng = ChaCha8Rng::seed_from_u64(low.get() ^ high.get().rotate_left(32));
    let angle = rng.random::<f64>() * TAU;
    let direction = Vec2::new(angle.cos(), angle.sin());
    if u == low { direction } else { direction.negate() }
}

/// Repulsion between every pair of nodes combined with spring attraction
/// between connected nodes.
#[derive(Debug, Clone)]
pub struct SpringElectric {
    config: SpringElectricConfig,
    /// `C * K^(1+p)`, shared by every pair.
    repulsion_numerator: f64,
    /// `ln C + (1+p) ln K`, used when the direct quotient overflows.
    ln_repulsion_numerator: f64,
}

impl SpringElectric {
    /// Creates the force from validated parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the parameters are invalid.
    pub fn new(config: SpringElectricConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let exponent = 1.0 + config.repulsion_exponent();
        let repulsion_numerator =
            config.repulsion_strength() * config.optimal_distance().powf(exponent);
        let ln_repulsion_numerator =
            config.repulsion_strength().ln() + exponent * config.optimal_distance().ln();
        Ok(Self {
            config,
            repulsion_numerator,
            ln_repulsion_numerator,
        })
    }

    /// Returns the parameters of this force.
    pub fn config(&self) -> &SpringElectricConfig {
        &self.config
    }

    fn gate(&self, term: f64) -> f64 {
        if term.abs() < self.config.epsilon() {
            0.0
        } else {
            term
        }
    }

    /// Magnitude of the repulsive term at `distance`.
    fn repulsion(&self, distance: f64) -> f64 {
        let exponent = self.config.repulsion_exponent();
        let direct = self.repulsion_numerator / distance.powf(exponent);
        if direct.is_finite() {
            return direct;
        }
        bounded((self.ln_repulsion_numerator - exponent * distance.ln()).exp())
    }

    /// Force exerted on `u` by `v`.
    fn pair_force(
        &self,
        weight: Option<f64>,
        u: NodeId,
        pos_u: Vec2,
        v: NodeId,
        pos_v: Vec2,
    ) -> Vec2 {
        let mut delta = pos_v.sub_vec(pos_u);
        let distance = delta.norm().max(self.config.min_distance());
        if delta.is_zero() {
            debug!(u:% = u, v:% = v; "Separating coincident nodes");
            delta = coincident_direction(u, v).scale(distance);
        }

        let repulsive = self.gate(-self.repulsion(distance));
        let attractive = self.gate(weight.map_or(0.0, |weight| {
            bounded(
                weight * distance.powf(self.config.attraction_exponent())
                    / self.config.optimal_distance(),
            )
        }));

        delta.scale((repulsive + attractive) / distance)
    }

    /// Total force on `u`, summed over the other nodes in ascending order.
    fn node_force(
        &self,
        graph: &dyn LayoutGraph,
        positions: &[(NodeId, Vec2)],
        u: NodeId,
        pos_u: Vec2,
    ) -> Vec2 {
        positions
            .iter()
            .filter(|(v, _)| *v != u)
            .fold(Vec2::zero(), |total, &(v, pos_v)| {
                total.add_vec(self.pair_force(pair_weight(graph, u, v), u, pos_u, v, pos_v))
            })
    }
}

impl Force for SpringElectric {
    fn name(&self) -> &str {
        "spring_electric"
    }

    fn calculate(&self, graph: &dyn LayoutGraph, layout: &Layout) -> Forces {
        let positions: Vec<(NodeId, Vec2)> = graph
            .node_ids()
            .into_iter()
            .map(|id| (id, layout.coord(id)))
            .collect();
        trace!(node_count = positions.len(); "Calculating spring-electric forces");

        #[cfg(feature = "parallel")]
        let forces = positions
            .par_iter()
            .map(|&(u, pos_u)| (u, self.node_force(graph, &positions, u, pos_u)))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let forces = positions
            .iter()
            .map(|&(u, pos_u)| (u, self.node_force(graph, &positions, u, pos_u)))
            .collect();

        forces
    }

    /// The optimal distance `K`.
    fn characteristic_scale(&self) -> Option<f64> {
        Some(self.config.optimal_distance())
    }
}
