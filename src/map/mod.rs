//! The map facade: locations in, network and committed flows out.
//!
//! A [`GameMap`] collects industries, towns and barriers, then runs the
//! pipeline in three stages: [`GameMap::triangulate_all_locations`],
//! [`GameMap::build_network_graph`] and [`GameMap::make_all_connections`].
//! Industries occupy the first node indices, towns follow.

mod location;

pub use location::{Industry, Town};

use tracing::info;

use crate::cargo::{CargoType, StandardRules, SupplyChainRules};
use crate::error::{Result, RoutingError};
use crate::math::Point2;
use crate::network::{Barrier, BuildNetwork, CapacityGraph, NodeId};
use crate::routing::{
    CommittedPath, DemandKey, DemandLedger, EfficiencyStats, RoutingParams, SolveOutcome,
    SupplyChainSolver,
};
use crate::triangulation::{Triangulate, Triangulation, TriangulationParams};

/// Industries, towns and barriers plus everything derived from them.
#[derive(Debug)]
pub struct GameMap<R: SupplyChainRules = StandardRules> {
    industries: Vec<Industry>,
    towns: Vec<Town>,
    barriers: Vec<Barrier>,
    triangulation: Option<Triangulation>,
    network: Option<CapacityGraph>,
    ledger: DemandLedger,
    paths: Vec<CommittedPath>,
    rules: R,
    triangulation_params: TriangulationParams,
    routing_params: RoutingParams,
}

impl GameMap<StandardRules> {
    /// An empty map using the built-in cargo tables and default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(StandardRules)
    }
}

impl Default for GameMap<StandardRules> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SupplyChainRules> GameMap<R> {
    /// An empty map using custom cargo tables.
    #[must_use]
    pub fn with_rules(rules: R) -> Self {
        let routing_params = RoutingParams::default();
        Self {
            industries: Vec::new(),
            towns: Vec::new(),
            barriers: Vec::new(),
            triangulation: None,
            network: None,
            ledger: DemandLedger::new(routing_params.demand_tolerance),
            paths: Vec::new(),
            rules,
            triangulation_params: TriangulationParams::default(),
            routing_params,
        }
    }

    /// Replaces the triangulation and routing parameters.
    ///
    /// Demand already set is kept under the new tolerance.
    #[must_use]
    pub fn with_params(mut self, triangulation: TriangulationParams, routing: RoutingParams) -> Self {
        let mut ledger = DemandLedger::new(routing.demand_tolerance);
        for (key, quantity) in self.ledger.outstanding() {
            ledger.set(key, quantity);
        }
        self.ledger = ledger;
        self.triangulation_params = triangulation;
        self.routing_params = routing;
        self
    }

    /// Adds an industry; its node index is its position among industries.
    pub fn add_industry(&mut self, industry: Industry) {
        self.industries.push(industry);
    }

    /// Adds a town; towns are numbered after all industries.
    pub fn add_town(&mut self, town: Town) {
        self.towns.push(town);
    }

    /// Adds a polyline that no network link may cross.
    pub fn add_impassable_line(&mut self, points: Vec<Point2>) {
        self.barriers.push(Barrier::new(points));
    }

    /// Sets every town's demand for each of its required cargo types to
    /// `quantity`.
    pub fn set_uniform_town_cargo_requirement(&mut self, quantity: f64) {
        let first_town = self.industries.len();
        for (i, town) in self.towns.iter().enumerate() {
            for cargo in town.requires {
                self.ledger.set(DemandKey::new(first_town + i, cargo), quantity);
            }
        }
    }

    /// Triangulates all industry and town locations and masks boundary
    /// slivers. Any previously built network is discarded.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFiniteCoordinate` if a location is not finite.
    pub fn triangulate_all_locations(&mut self) -> Result<()> {
        let points: Vec<Point2> = self
            .industries
            .iter()
            .map(|industry| industry.location)
            .chain(self.towns.iter().map(|town| town.location))
            .collect();
        let mut triangulation = Triangulate::new(points, self.triangulation_params).execute()?;
        triangulation.mask_boundary_slivers(self.triangulation_params.sliver_angle);
        self.triangulation = Some(triangulation);
        self.network = None;
        Ok(())
    }

    /// Builds the capacity graph from the triangulation and barriers and
    /// gives each industry its full production capacity.
    ///
    /// # Errors
    ///
    /// Returns `RoutingError::NotTriangulated` if
    /// [`triangulate_all_locations`](Self::triangulate_all_locations) has not
    /// run, or a `NetworkError` if locations were added since it ran.
    pub fn build_network_graph(&mut self) -> Result<()> {
        let triangulation = self
            .triangulation
            .as_ref()
            .ok_or(RoutingError::NotTriangulated)?;
        let nodes = NodeId::table(self.industries.len(), self.towns.len());
        let mut graph = BuildNetwork::new(triangulation, &self.barriers, nodes).execute()?;
        for (i, industry) in self.industries.iter().enumerate() {
            graph.set_capacity(i, self.rules.max_production(industry.output));
        }
        self.network = Some(graph);
        Ok(())
    }

    /// Routes all outstanding demand, including the upstream supply chains
    /// it pulls in.
    ///
    /// # Errors
    ///
    /// Returns `RoutingError::NetworkNotBuilt` if
    /// [`build_network_graph`](Self::build_network_graph) has not run, or
    /// `RoutingError::InvalidParameters` if the routing parameters fail
    /// [`RoutingParams::validate`].
    pub fn make_all_connections(&mut self) -> Result<SolveOutcome> {
        let graph = self.network.as_mut().ok_or(RoutingError::NetworkNotBuilt)?;
        let outputs: Vec<CargoType> = self.industries.iter().map(|i| i.output).collect();
        let outcome = SupplyChainSolver::new(
            graph,
            &mut self.ledger,
            &self.rules,
            &outputs,
            &self.routing_params,
        )
        .run(&mut self.paths)?;
        info!(
            industries = self.industries.len(),
            towns = self.towns.len(),
            paths = self.paths.len(),
            status = ?outcome.status,
            "connections made"
        );
        Ok(outcome)
    }

    /// Industries in node order.
    #[must_use]
    pub fn industries(&self) -> &[Industry] {
        &self.industries
    }

    /// Towns in insertion order.
    #[must_use]
    pub fn towns(&self) -> &[Town] {
        &self.towns
    }

    /// Impassable lines added so far.
    #[must_use]
    pub fn barriers(&self) -> &[Barrier] {
        &self.barriers
    }

    /// Cargo tables used for capacities and requirements.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn triangulation(&self) -> Option<&Triangulation> {
        self.triangulation.as_ref()
    }

    #[must_use]
    pub fn network(&self) -> Option<&CapacityGraph> {
        self.network.as_ref()
    }

    /// Demand not yet routed.
    #[must_use]
    pub fn ledger(&self) -> &DemandLedger {
        &self.ledger
    }

    /// Routes committed by [`make_all_connections`](Self::make_all_connections).
    #[must_use]
    pub fn paths(&self) -> &[CommittedPath] {
        &self.paths
    }

    /// What flat node index `index` stands for.
    #[must_use]
    pub fn node_id(&self, index: usize) -> Option<NodeId> {
        let industries = self.industries.len();
        if index < industries {
            Some(NodeId::Industry(index))
        } else if index < industries + self.towns.len() {
            Some(NodeId::Town(index - industries))
        } else {
            None
        }
    }

    /// Reuse statistics over the committed paths, once the network exists.
    #[must_use]
    pub fn efficiency(&self) -> Option<EfficiencyStats> {
        self.network
            .as_ref()
            .map(|graph| EfficiencyStats::compute(&self.paths, graph))
    }
}
