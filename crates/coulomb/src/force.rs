//! Pluggable force providers.
//!
//! A force reads the graph topology and a frozen layout snapshot and returns
//! one force vector per node. The simulation sums the outputs of all
//! registered forces without knowing their concrete types, so new forces plug
//! in by implementing [`Force`].
//!
//! Two forces are provided:
//! - [`SpringElectric`] - pairwise repulsion plus attraction along edges
//! - [`CentralGravity`] - a pull toward (or push away from) a fixed point

mod central_gravity;
mod spring_electric;

pub use central_gravity::CentralGravity;
pub use spring_electric::SpringElectric;

use std::{collections::HashMap, fmt};

use coulomb_core::{geometry::Vec2, identifier::NodeId};

use crate::{graph::LayoutGraph, layout::Layout};

/// Per-node force vectors produced by a single force.
pub type Forces = HashMap<NodeId, Vec2>;

/// A force calculator.
///
/// Implementations must only read the graph and the layout they are given.
/// A node missing from the returned map is treated as receiving no force.
/// Returning a non-finite vector for any node is a contract violation that
/// the simulation reports as an error.
pub trait Force: fmt::Debug {
    /// Short name used in logs and error reports.
    fn name(&self) -> &str;

    /// Computes the force acting on every node of `graph` for the given layout.
    fn calculate(&self, graph: &dyn LayoutGraph, layout: &Layout) -> Forces;

    /// Natural length scale of this force, if it has one.
    ///
    /// The simulation sizes the random starting square from the first
    /// registered force that reports a scale.
    fn characteristic_scale(&self) -> Option<f64> {
        None
    }
}
