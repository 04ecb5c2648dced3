use tracing::debug;

use crate::error::{NetworkError, Result};
use crate::triangulation::{IndexedEdge, Triangulation};

use super::{Barrier, CapacityGraph, NodeId};

/// Builds a [`CapacityGraph`] from the unmasked triangles of a triangulation.
///
/// Every triangle edge becomes a link in both directions whose distance is
/// the Euclidean length of the edge. Links crossing a barrier are then
/// removed in both directions. Node capacities are left unset.
#[derive(Debug)]
pub struct BuildNetwork<'a> {
    triangulation: &'a Triangulation,
    barriers: &'a [Barrier],
    nodes: Vec<NodeId>,
}

impl<'a> BuildNetwork<'a> {
    /// Creates a new `BuildNetwork` operation.
    ///
    /// `nodes[i]` names what triangulation vertex `i` stands for.
    #[must_use]
    pub fn new(triangulation: &'a Triangulation, barriers: &'a [Barrier], nodes: Vec<NodeId>) -> Self {
        Self {
            triangulation,
            barriers,
            nodes,
        }
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::NodeCountMismatch` if the node table does not
    /// have one entry per triangulation vertex.
    pub fn execute(&self) -> Result<CapacityGraph> {
        let vertices = self.triangulation.vertices();
        if self.nodes.len() != vertices.len() {
            return Err(NetworkError::NodeCountMismatch {
                nodes: self.nodes.len(),
                vertices: vertices.len(),
            }
            .into());
        }

        let mut graph = CapacityGraph::new(self.nodes.clone());
        for tri in self.triangulation.unmasked_triangles() {
            for edge in tri.edges() {
                let distance = (vertices[edge.b] - vertices[edge.a]).norm();
                graph.add_edge(edge, distance);
            }
        }

        let blocked: Vec<IndexedEdge> = graph
            .edges()
            .into_iter()
            .filter(|e| e.a < e.b)
            .filter(|e| {
                self.barriers
                    .iter()
                    .any(|barrier| barrier.blocks(&vertices[e.a], &vertices[e.b]))
            })
            .collect();
        for edge in &blocked {
            graph.remove_edge(*edge);
        }

        debug!(
            links = graph.edges().len() / 2,
            blocked = blocked.len(),
            "built network graph"
        );
        Ok(graph)
    }
}
