use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use crate::cargo::{CargoType, WagonType};
use crate::network::{CapacityGraph, NodeId};

/// A priced route from a supplier to a consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Total cost after reverse-flow reuse.
    pub cost: f64,
    /// Node indices, supplier first and consumer last.
    pub path: Vec<usize>,
}

impl Route {
    /// The supplying industry node.
    #[must_use]
    pub fn supplier(&self) -> Option<usize> {
        self.path.first().copied()
    }
}

/// Heap entry ordered by cost, then node index.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    cost: f64,
    node: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Cost of carrying `quantity` of cargo in `wagon` from `v` to `u`, found
/// while searching outward over link `u → v`.
///
/// Wagons already committed to carry cargo from `u` to `v` come back empty,
/// so up to their net amount rides for free.
#[must_use]
pub fn link_cost(
    graph: &CapacityGraph,
    u: usize,
    v: usize,
    wagon: WagonType,
    quantity: f64,
) -> Option<f64> {
    let distance = graph.link(u, v)?.distance;
    let net_return = graph.flow(v, u, wagon) - graph.flow(u, v, wagon);
    let reusable = net_return.clamp(0.0, quantity.max(0.0));
    Some((quantity - reusable) * distance)
}

/// Finds the cheapest industry that produces `cargo` with at least
/// `quantity` of remaining capacity, searching outward from `consumer`.
///
/// `industry_outputs[i]` is the cargo produced by `NodeId::Industry(i)`.
/// Returns `None` when no such industry is reachable.
#[must_use]
pub fn cheapest_supply_route(
    graph: &CapacityGraph,
    industry_outputs: &[CargoType],
    wagon: WagonType,
    consumer: usize,
    cargo: CargoType,
    quantity: f64,
) -> Option<Route> {
    let mut best: BTreeMap<usize, f64> = BTreeMap::new();
    let mut previous: BTreeMap<usize, usize> = BTreeMap::new();
    let mut visited: BTreeSet<usize> = BTreeSet::new();
    let mut heap = BinaryHeap::new();

    best.insert(consumer, 0.0);
    heap.push(Reverse(Frontier {
        cost: 0.0,
        node: consumer,
    }));

    while let Some(Reverse(Frontier { cost, node })) = heap.pop() {
        if visited.contains(&node) {
            continue;
        }

        if supplies(graph, industry_outputs, node, cargo, quantity) {
            return Some(Route {
                cost,
                path: walk_back(&previous, node, consumer),
            });
        }

        visited.insert(node);

        for (next, _) in graph.neighbors(node) {
            if visited.contains(&next) {
                continue;
            }
            let Some(step) = link_cost(graph, node, next, wagon, quantity) else {
                continue;
            };
            let tentative = cost + step;
            if best.get(&next).is_some_and(|&known| tentative >= known) {
                continue;
            }
            best.insert(next, tentative);
            previous.insert(next, node);
            heap.push(Reverse(Frontier {
                cost: tentative,
                node: next,
            }));
        }
    }

    None
}

fn supplies(
    graph: &CapacityGraph,
    industry_outputs: &[CargoType],
    node: usize,
    cargo: CargoType,
    quantity: f64,
) -> bool {
    let Some(NodeId::Industry(i)) = graph.node(node) else {
        return false;
    };
    industry_outputs.get(i) == Some(&cargo)
        && graph.capacity(node).is_some_and(|remaining| remaining >= quantity)
}

/// Follows predecessors from `supplier` back to `consumer`.
///
/// Predecessors point toward the consumer, so the walk yields the path
/// already in supplier-to-consumer order.
fn walk_back(previous: &BTreeMap<usize, usize>, supplier: usize, consumer: usize) -> Vec<usize> {
    let mut path = vec![supplier];
    let mut node = supplier;
    while node != consumer {
        match previous.get(&node) {
            Some(&p) => {
                path.push(p);
                node = p;
            }
            None => break,
        }
    }
    path
}
