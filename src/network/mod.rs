//! The capacity graph that cargo is routed over.
//!
//! Nodes share the triangulation's flat index space: industries first,
//! towns after them. [`NodeId`] records which is which so routing code
//! never has to infer it from an index range.

mod barrier;
mod build;
mod graph;

pub use barrier::Barrier;
pub use build::BuildNetwork;
pub use graph::{CapacityGraph, Link};

/// What a graph node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    /// Index into the map's industry list.
    Industry(usize),
    /// Index into the map's town list.
    Town(usize),
}

impl NodeId {
    /// Builds the flat node table for `industries` industries followed by `towns` towns.
    #[must_use]
    pub fn table(industries: usize, towns: usize) -> Vec<NodeId> {
        (0..industries)
            .map(NodeId::Industry)
            .chain((0..towns).map(NodeId::Town))
            .collect()
    }
}
