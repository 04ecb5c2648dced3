//! Capacity-aware routing of cargo demand over a [`CapacityGraph`].
//!
//! Demand is held in a [`DemandLedger`] keyed by consumer node and cargo.
//! The [`SupplyChainSolver`] repeatedly routes the cheapest outstanding
//! request, commits its flow, and asks the supplier for its own inputs.
//! Wagons committed in one direction make the opposite direction cheaper
//! for cargo carried by the same wagon type.
//!
//! [`CapacityGraph`]: crate::network::CapacityGraph

mod efficiency;
mod ledger;
mod shortest_path;
mod solver;

pub use efficiency::EfficiencyStats;
pub use ledger::{DemandKey, DemandLedger};
pub use shortest_path::{cheapest_supply_route, link_cost, Route};
pub use solver::{CommittedPath, SolveOutcome, SolveStatus, SupplyChainSolver};

use crate::error::{Result, RoutingError};

/// Parameters controlling the supply-chain solver.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingParams {
    /// Largest quantity routed in a single step.
    pub request_cap: f64,
    /// Ledger entries at or below this quantity count as fulfilled.
    pub demand_tolerance: f64,
    /// Upper bound on solver steps; `None` runs until the ledger drains
    /// or stalls.
    pub max_steps: Option<usize>,
}

impl Default for RoutingParams {
    fn default() -> Self {
        Self {
            request_cap: 100.0,
            demand_tolerance: 1e-6,
            max_steps: None,
        }
    }
}

impl RoutingParams {
    /// Checks that every request moves cargo and the tolerance is usable.
    ///
    /// # Errors
    ///
    /// Returns `RoutingError::InvalidParameters` if `request_cap` is not a
    /// positive finite number or `demand_tolerance` is negative or not
    /// finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.request_cap.is_finite() && self.request_cap > 0.0) {
            return Err(RoutingError::InvalidParameters(format!(
                "request cap must be positive and finite, got {}",
                self.request_cap
            ))
            .into());
        }
        if !(self.demand_tolerance.is_finite() && self.demand_tolerance >= 0.0) {
            return Err(RoutingError::InvalidParameters(format!(
                "demand tolerance must be non-negative and finite, got {}",
                self.demand_tolerance
            ))
            .into());
        }
        Ok(())
    }
}
