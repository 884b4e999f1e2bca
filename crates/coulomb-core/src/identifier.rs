//! Node identifiers for layout graphs.
//!
//! This module provides the [`NodeId`] type used as the key for positions,
//! forces, and masses throughout the layout engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, copyable identifier of a graph node.
///
/// Identifiers are totally ordered. The layout engine relies on that order to
/// enumerate nodes deterministically, so two graphs holding the same set of
/// identifiers always produce the same layout for the same seed.
///
/// # Examples
///
/// ```
/// use coulomb_core::identifier::NodeId;
///
/// let a = NodeId::new(1);
/// let b = NodeId::from(2);
///
/// assert!(a < b);
/// assert_eq!(a.get(), 1);
/// assert_eq!(b.to_string(), "2");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a `NodeId` from its raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value of this identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
