//! Graph input and layout output files.
//!
//! Graphs are read from TOML:
//!
//! ```toml
//! [[node]]
//! id = 1
//! mass = 2.0      # optional, defaults to 1.0
//!
//! [[node]]
//! id = 2
//!
//! [[edge]]
//! from = 1
//! to = 2
//! weight = 3.0    # optional, defaults to 1.0
//! ```
//!
//! Layouts are written as one `[[position]]` table per node, in ascending
//! node order.

use std::{fs, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use coulomb::{
    GraphError, LayoutError,
    graph::{DEFAULT_WEIGHT, WeightedGraph},
    identifier::NodeId,
    layout::Layout,
};

use crate::error::CliError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeEntry {
    id: u64,
    mass: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeEntry {
    from: u64,
    to: u64,
    weight: Option<f64>,
}

/// Parsed contents of a graph file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    #[serde(default, rename = "node")]
    nodes: Vec<NodeEntry>,

    #[serde(default, rename = "edge")]
    edges: Vec<EdgeEntry>,
}

impl GraphFile {
    /// Builds a [`WeightedGraph`] from the parsed entries.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] for duplicate nodes, edges that reference
    /// unknown nodes, or invalid masses and weights.
    pub fn into_graph(self) -> Result<WeightedGraph, GraphError> {
        let mut graph = WeightedGraph::new();
        for node in self.nodes {
            let id = NodeId::new(node.id);
            match node.mass {
                Some(mass) => graph.add_node_with_mass(id, mass)?,
                None => graph.add_node(id)?,
            }
        }
        for edge in self.edges {
            graph.add_weighted_edge(
                NodeId::new(edge.from),
                NodeId::new(edge.to),
                edge.weight.unwrap_or(DEFAULT_WEIGHT),
            )?;
        }
        Ok(graph)
    }
}

/// Reads and builds the graph stored at `path`.
pub fn read_graph(path: impl AsRef<Path>) -> Result<WeightedGraph, CliError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let file: GraphFile = match toml::from_str(&content) {
        Ok(file) => file,
        Err(err) => return Err(CliError::parse(path, content, &err)),
    };
    debug!(nodes = file.nodes.len(), edges = file.edges.len(); "Graph file parsed");
    Ok(file.into_graph().map_err(LayoutError::from)?)
}

#[derive(Debug, Serialize)]
struct PositionEntry {
    id: u64,
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize)]
struct LayoutFile {
    position: Vec<PositionEntry>,
}

/// Renders a layout as TOML.
pub fn layout_to_toml(layout: &Layout) -> Result<String, CliError> {
    let file = LayoutFile {
        position: layout
            .positions()
            .into_iter()
            .map(|(node, position)| PositionEntry {
                id: node.get(),
                x: position.x(),
                y: position.y(),
            })
            .collect(),
    };
    toml::to_string(&file).map_err(|err| CliError::Serialize(err.to_string()))
}

/// Writes a layout to `path` as TOML.
pub fn write_layout(path: impl AsRef<Path>, layout: &Layout) -> Result<(), CliError> {
    fs::write(path, layout_to_toml(layout)?)?;
    Ok(())
}
