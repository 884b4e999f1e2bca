//! Central gravity: an inverse-distance pull toward a fixed centre.
//!
//! ```text
//! to_centre = centre - pos(u)
//! force(u)  = (G / |to_centre|^2) * to_centre
//! ```
//!
//! With a positive constant `G` the force points toward the centre. A node
//! sitting exactly on the centre has no defined direction and receives the
//! zero vector.

use log::trace;

use coulomb_core::geometry::Vec2;

use crate::{
    config::CentralGravityConfig,
    error::ConfigError,
    force::{Force, Forces},
    graph::LayoutGraph,
    layout::Layout,
};

/// Gravity toward a fixed point.
#[derive(Debug, Clone)]
pub struct CentralGravity {
    config: CentralGravityConfig,
}

impl CentralGravity {
    /// Creates the force from validated parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the centre or the constant is non-finite.
    pub fn new(config: CentralGravityConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the parameters of this force.
    pub fn config(&self) -> &CentralGravityConfig {
        &self.config
    }

    fn force_at(&self, position: Vec2) -> Vec2 {
        let to_centre = self.config.centre().sub_vec(position);
        let distance_squared = to_centre.norm_squared();
        if distance_squared == 0.0 {
            return Vec2::zero();
        }
        to_centre.scale(self.config.gravitational_constant() / distance_squared)
    }
}

impl Force for CentralGravity {
    fn name(&self) -> &str {
        "central_gravity"
    }

    fn calculate(&self, graph: &dyn LayoutGraph, layout: &Layout) -> Forces {
        let ids = graph.node_ids();
        trace!(node_count = ids.len(); "Calculating central gravity forces");
        ids.into_iter()
            .map(|id| (id, self.force_at(layout.coord(id))))
            .collect()
    }
}
