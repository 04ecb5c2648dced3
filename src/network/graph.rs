use std::collections::BTreeMap;

use crate::cargo::{WagonType, WAGON_TYPE_COUNT};
use crate::error::{NetworkError, Result};
use crate::triangulation::IndexedEdge;

use super::NodeId;

/// Payload of a directed link.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Cost of moving one unit of cargo along the link.
    pub distance: f64,
    /// Committed flow per wagon type, indexed by [`WagonType::index`].
    ///
    /// Recorded against the direction of travel: flow on `a → b` is loaded
    /// cargo moving from `b` to `a`.
    pub flow: [f64; WAGON_TYPE_COUNT],
}

impl Link {
    /// A link with no committed flow.
    #[must_use]
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            flow: [0.0; WAGON_TYPE_COUNT],
        }
    }

    /// Committed flow for one wagon type.
    #[must_use]
    pub fn flow_of(&self, wagon: WagonType) -> f64 {
        self.flow[wagon.index()]
    }
}

/// Directed graph over flat node indices with per-link flow vectors and
/// per-node remaining production capacity.
///
/// Ordered maps keep iteration, and therefore routing tie-breaks and
/// reports, deterministic.
#[derive(Debug, Clone, Default)]
pub struct CapacityGraph {
    adjacency: BTreeMap<usize, BTreeMap<usize, Link>>,
    capacity: BTreeMap<usize, f64>,
    nodes: Vec<NodeId>,
}

impl CapacityGraph {
    /// Creates a graph without links over the given node table.
    #[must_use]
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self {
            adjacency: BTreeMap::new(),
            capacity: BTreeMap::new(),
            nodes,
        }
    }

    /// Number of nodes in the table, linked or not.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// What flat index `index` stands for.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    /// Adds `edge` in both directions with the given distance.
    ///
    /// An existing link keeps its committed flow and takes the new distance.
    pub fn add_edge(&mut self, edge: IndexedEdge, distance: f64) {
        for e in [edge, edge.reversed()] {
            self.adjacency
                .entry(e.a)
                .or_default()
                .entry(e.b)
                .and_modify(|link| link.distance = distance)
                .or_insert_with(|| Link::new(distance));
        }
    }

    /// Removes `edge` in both directions. Missing links are ignored.
    pub fn remove_edge(&mut self, edge: IndexedEdge) {
        for e in [edge, edge.reversed()] {
            if let Some(out) = self.adjacency.get_mut(&e.a) {
                out.remove(&e.b);
            }
        }
    }

    /// The link from `from` to `to`, if present.
    #[must_use]
    pub fn link(&self, from: usize, to: usize) -> Option<&Link> {
        self.adjacency.get(&from)?.get(&to)
    }

    /// Outgoing links of `node`, in neighbour order.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, &Link)> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|out| out.iter().map(|(&to, link)| (to, link)))
    }

    /// Every directed link, sorted.
    #[must_use]
    pub fn edges(&self) -> Vec<IndexedEdge> {
        self.adjacency
            .iter()
            .flat_map(|(&a, out)| out.keys().map(move |&b| IndexedEdge::new(a, b)))
            .collect()
    }

    /// Committed flow of `wagon` from `from` to `to`; zero when there is no link.
    #[must_use]
    pub fn flow(&self, from: usize, to: usize, wagon: WagonType) -> f64 {
        self.link(from, to).map_or(0.0, |link| link.flow_of(wagon))
    }

    /// Adds `quantity` to the committed flow of `wagon` on link `from → to`.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::MissingLink` if the link does not exist.
    pub fn add_flow(
        &mut self,
        from: usize,
        to: usize,
        wagon: WagonType,
        quantity: f64,
    ) -> Result<()> {
        let link = self
            .adjacency
            .get_mut(&from)
            .and_then(|out| out.get_mut(&to))
            .ok_or(NetworkError::MissingLink { from, to })?;
        link.flow[wagon.index()] += quantity;
        Ok(())
    }

    /// Remaining production capacity of `node`, if it has any.
    #[must_use]
    pub fn capacity(&self, node: usize) -> Option<f64> {
        self.capacity.get(&node).copied()
    }

    /// Sets the remaining production capacity of `node`.
    pub fn set_capacity(&mut self, node: usize, capacity: f64) {
        self.capacity.insert(node, capacity);
    }

    /// Takes `quantity` from the remaining capacity of `node`.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::UnknownNode` if `node` has no capacity entry.
    pub fn consume_capacity(&mut self, node: usize, quantity: f64) -> Result<()> {
        let remaining = self
            .capacity
            .get_mut(&node)
            .ok_or(NetworkError::UnknownNode(node))?;
        *remaining -= quantity;
        Ok(())
    }

    /// Sum of link distances along `path`, or `None` if a link is missing.
    #[must_use]
    pub fn path_length(&self, path: &[usize]) -> Option<f64> {
        path.windows(2)
            .map(|w| self.link(w[0], w[1]).map(|link| link.distance))
            .sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::NetgenError;

    fn triangle_graph() -> CapacityGraph {
        let mut g = CapacityGraph::new(NodeId::table(1, 2));
        g.add_edge(IndexedEdge::new(0, 1), 3.0);
        g.add_edge(IndexedEdge::new(1, 2), 4.0);
        g.add_edge(IndexedEdge::new(2, 0), 5.0);
        g
    }

    #[test]
    fn edges_are_added_both_ways() {
        let g = triangle_graph();
        assert_eq!(g.edges().len(), 6);
        for e in g.edges() {
            let forward = g.link(e.a, e.b).unwrap();
            let back = g.link(e.b, e.a).unwrap();
            assert_relative_eq!(forward.distance, back.distance);
        }
        assert_eq!(g.neighbors(0).map(|(n, _)| n).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn remove_edge_drops_both_directions() {
        let mut g = triangle_graph();
        g.remove_edge(IndexedEdge::new(1, 0));
        assert!(g.link(0, 1).is_none());
        assert!(g.link(1, 0).is_none());
        assert_eq!(g.edges().len(), 4);
        g.remove_edge(IndexedEdge::new(0, 1));
        assert_eq!(g.edges().len(), 4);
    }

    #[test]
    fn re_adding_keeps_flow() {
        let mut g = triangle_graph();
        g.add_flow(0, 1, WagonType::Boxcar, 7.0).unwrap();
        g.add_edge(IndexedEdge::new(1, 0), 3.5);
        assert_relative_eq!(g.flow(0, 1, WagonType::Boxcar), 7.0);
        assert_relative_eq!(g.link(0, 1).unwrap().distance, 3.5);
    }

    #[test]
    fn flow_is_per_direction_and_wagon() {
        let mut g = triangle_graph();
        g.add_flow(1, 2, WagonType::TankCar, 10.0).unwrap();
        g.add_flow(1, 2, WagonType::TankCar, 5.0).unwrap();
        assert_relative_eq!(g.flow(1, 2, WagonType::TankCar), 15.0);
        assert_relative_eq!(g.flow(2, 1, WagonType::TankCar), 0.0);
        assert_relative_eq!(g.flow(1, 2, WagonType::Gondola), 0.0);
        assert_relative_eq!(g.flow(0, 9, WagonType::Gondola), 0.0);
    }

    #[test]
    fn flow_on_missing_link_is_an_error() {
        let mut g = triangle_graph();
        let err = g.add_flow(0, 9, WagonType::Gondola, 1.0).unwrap_err();
        assert!(matches!(
            err,
            NetgenError::Network(NetworkError::MissingLink { from: 0, to: 9 })
        ));
    }

    #[test]
    fn capacity_bookkeeping() {
        let mut g = triangle_graph();
        assert!(g.capacity(0).is_none());
        g.set_capacity(0, 400.0);
        g.consume_capacity(0, 150.0).unwrap();
        assert_relative_eq!(g.capacity(0).unwrap(), 250.0);
        assert!(g.consume_capacity(1, 1.0).is_err());
    }

    #[test]
    fn path_length_sums_links() {
        let g = triangle_graph();
        assert_relative_eq!(g.path_length(&[0, 1, 2]).unwrap(), 7.0);
        assert_relative_eq!(g.path_length(&[2]).unwrap(), 0.0);
        assert!(g.path_length(&[0, 1, 5]).is_none());
    }

    #[test]
    fn node_table_lookup() {
        let g = triangle_graph();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.node(0), Some(NodeId::Industry(0)));
        assert_eq!(g.node(2), Some(NodeId::Town(1)));
        assert_eq!(g.node(3), None);
    }
}
