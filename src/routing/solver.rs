use tracing::{info, trace, warn};

use crate::cargo::{CargoType, SupplyChainRules, WagonType};
use crate::error::Result;
use crate::network::CapacityGraph;

use super::ledger::{DemandKey, DemandLedger};
use super::shortest_path::{cheapest_supply_route, Route};
use super::RoutingParams;

/// A flow committed to the network.
#[derive(Debug, Clone, PartialEq)]
pub struct CommittedPath {
    pub cargo: CargoType,
    pub wagon: WagonType,
    pub quantity: f64,
    /// Cost actually charged, after reverse-flow reuse.
    pub cost: f64,
    /// Node indices, supplier first and consumer last.
    pub path: Vec<usize>,
}

impl CommittedPath {
    /// The supplying industry node.
    #[must_use]
    pub fn supplier(&self) -> Option<usize> {
        self.path.first().copied()
    }

    /// The consuming node.
    #[must_use]
    pub fn consumer(&self) -> Option<usize> {
        self.path.last().copied()
    }
}

/// How a solver run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    /// Every demand was routed.
    Complete,
    /// Demand remains but none of it can reach a supplier.
    Stalled { unmet: usize },
    /// The step budget ran out with demand left.
    BudgetExhausted { remaining: usize },
}

/// Result of a solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub status: SolveStatus,
    /// Number of routes committed.
    pub steps: usize,
}

impl SolveOutcome {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == SolveStatus::Complete
    }
}

/// Greedy supply-chain router.
///
/// Each step routes the cheapest outstanding request (capped at
/// [`RoutingParams::request_cap`]), commits its flow and adds the
/// supplier's own inputs to the ledger. Upstream chains are discovered as
/// they are needed.
pub struct SupplyChainSolver<'a, R: SupplyChainRules> {
    graph: &'a mut CapacityGraph,
    ledger: &'a mut DemandLedger,
    rules: &'a R,
    industry_outputs: &'a [CargoType],
    params: &'a RoutingParams,
}

struct Candidate {
    key: DemandKey,
    quantity: f64,
    wagon: WagonType,
    route: Route,
}

impl<'a, R: SupplyChainRules> SupplyChainSolver<'a, R> {
    #[must_use]
    pub fn new(
        graph: &'a mut CapacityGraph,
        ledger: &'a mut DemandLedger,
        rules: &'a R,
        industry_outputs: &'a [CargoType],
        params: &'a RoutingParams,
    ) -> Self {
        Self {
            graph,
            ledger,
            rules,
            industry_outputs,
            params,
        }
    }

    /// Drains the ledger, appending committed flows to `paths`.
    ///
    /// # Errors
    ///
    /// Returns `RoutingError::InvalidParameters` before routing anything if
    /// the parameters fail [`RoutingParams::validate`]. Returns a
    /// `NetworkError` if a route refers to a link or industry the graph does
    /// not have, which means the graph was modified outside the solver's
    /// view.
    pub fn run(&mut self, paths: &mut Vec<CommittedPath>) -> Result<SolveOutcome> {
        self.params.validate()?;
        let mut steps = 0;
        loop {
            if self.ledger.is_empty() {
                info!(steps, paths = paths.len(), "all demand routed");
                return Ok(SolveOutcome {
                    status: SolveStatus::Complete,
                    steps,
                });
            }
            if self.params.max_steps.is_some_and(|max| steps >= max) {
                let remaining = self.ledger.len();
                warn!(steps, remaining, "routing step budget exhausted");
                return Ok(SolveOutcome {
                    status: SolveStatus::BudgetExhausted { remaining },
                    steps,
                });
            }
            let Some(candidate) = self.cheapest_candidate() else {
                let unmet = self.ledger.len();
                warn!(steps, unmet, "remaining demand has no supplier");
                return Ok(SolveOutcome {
                    status: SolveStatus::Stalled { unmet },
                    steps,
                });
            };

            trace!(
                step = steps,
                node = candidate.key.node,
                cargo = ?candidate.key.cargo,
                quantity = candidate.quantity,
                cost = candidate.route.cost,
                "routing request"
            );
            self.commit(candidate, paths)?;
            steps += 1;
        }
    }

    /// Minimum-cost route over all outstanding requests, first in ledger
    /// order on ties.
    fn cheapest_candidate(&self) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;
        for (key, outstanding) in self.ledger.outstanding() {
            let quantity = outstanding.min(self.params.request_cap);
            let wagon = self.rules.wagon_type(key.cargo);
            let Some(route) = cheapest_supply_route(
                self.graph,
                self.industry_outputs,
                wagon,
                key.node,
                key.cargo,
                quantity,
            ) else {
                continue;
            };
            if best.as_ref().is_none_or(|b| route.cost < b.route.cost) {
                best = Some(Candidate {
                    key,
                    quantity,
                    wagon,
                    route,
                });
            }
        }
        best
    }

    fn commit(&mut self, candidate: Candidate, paths: &mut Vec<CommittedPath>) -> Result<()> {
        let Candidate {
            key,
            quantity,
            wagon,
            route,
        } = candidate;

        self.ledger.fulfil(key, quantity);

        for w in route.path.windows(2) {
            self.graph.add_flow(w[1], w[0], wagon, quantity)?;
        }
        let Some(supplier) = route.supplier() else {
            return Ok(());
        };
        self.graph.consume_capacity(supplier, quantity)?;

        for input in self.rules.requirements(key.cargo) {
            self.ledger
                .add(DemandKey::new(supplier, input.cargo), quantity * input.quantity);
        }

        match paths
            .iter_mut()
            .find(|p| p.cargo == key.cargo && p.path == route.path)
        {
            Some(existing) => {
                existing.quantity += quantity;
                existing.cost += route.cost;
            }
            None => paths.push(CommittedPath {
                cargo: key.cargo,
                wagon,
                quantity,
                cost: route.cost,
                path: route.path,
            }),
        }
        Ok(())
    }
}
