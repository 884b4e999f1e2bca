//! Coulomb Core Types
//!
//! This crate provides the foundational types shared by the Coulomb layout
//! engine and its command-line front end:
//!
//! - **Geometry**: 2D vectors and bounding boxes ([`geometry`] module)
//! - **Identifiers**: Ordered node identifiers ([`identifier::NodeId`])

pub mod geometry;
pub mod identifier;
