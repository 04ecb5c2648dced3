use crate::network::CapacityGraph;

use super::CommittedPath;

/// How much reverse-flow reuse saved across a set of committed paths.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EfficiencyStats {
    /// Total cargo moved.
    pub total_quantity: f64,
    /// Cost if every unit paid the full path length.
    pub naive_cost: f64,
    /// Cost actually charged.
    pub actual_cost: f64,
}

impl EfficiencyStats {
    /// Sums the statistics over `paths`, using `graph` for path lengths.
    ///
    /// Paths whose links are no longer in the graph count as zero length.
    #[must_use]
    pub fn compute(paths: &[CommittedPath], graph: &CapacityGraph) -> Self {
        paths.iter().fold(Self::default(), |acc, p| {
            let length = graph.path_length(&p.path).unwrap_or(0.0);
            Self {
                total_quantity: acc.total_quantity + p.quantity,
                naive_cost: acc.naive_cost + length * p.quantity,
                actual_cost: acc.actual_cost + p.cost,
            }
        })
    }

    /// Fraction of the naive cost saved, `None` when nothing had a cost.
    #[must_use]
    pub fn saving(&self) -> Option<f64> {
        (self.naive_cost > 0.0).then(|| (self.naive_cost - self.actual_cost) / self.naive_cost)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::cargo::{CargoType, WagonType};
    use crate::network::NodeId;
    use crate::triangulation::IndexedEdge;

    fn committed(cargo: CargoType, quantity: f64, cost: f64, path: Vec<usize>) -> CommittedPath {
        CommittedPath {
            cargo,
            wagon: WagonType::Gondola,
            quantity,
            cost,
            path,
        }
    }

    #[test]
    fn sums_naive_and_actual_cost() {
        let mut g = CapacityGraph::new(NodeId::table(2, 1));
        g.add_edge(IndexedEdge::new(0, 2), 10.0);
        g.add_edge(IndexedEdge::new(1, 2), 4.0);
        let paths = [
            committed(CargoType::Coal, 30.0, 300.0, vec![0, 2]),
            committed(CargoType::IronOre, 50.0, 100.0, vec![1, 2]),
        ];

        let stats = EfficiencyStats::compute(&paths, &g);
        assert_relative_eq!(stats.total_quantity, 80.0);
        assert_relative_eq!(stats.naive_cost, 500.0);
        assert_relative_eq!(stats.actual_cost, 400.0);
        assert_relative_eq!(stats.saving().unwrap(), 0.2);
    }

    #[test]
    fn no_cost_means_no_saving() {
        let g = CapacityGraph::new(NodeId::table(1, 0));
        let stats = EfficiencyStats::compute(&[committed(CargoType::Coal, 5.0, 0.0, vec![0])], &g);
        assert_relative_eq!(stats.total_quantity, 5.0);
        assert!(stats.saving().is_none());
        assert!(EfficiencyStats::compute(&[], &g).saving().is_none());
    }
}
