use thiserror::Error;

/// Top-level error type for network generation and routing.
#[derive(Debug, Error)]
pub enum NetgenError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Routing(#[from] RoutingError),
}

/// Errors related to geometric input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },
}

/// Errors raised while building or querying the capacity graph.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("node table has {nodes} entries but the triangulation has {vertices} vertices")]
    NodeCountMismatch { nodes: usize, vertices: usize },

    #[error("node {0} is not part of the network")]
    UnknownNode(usize),

    #[error("no link from node {from} to node {to}")]
    MissingLink { from: usize, to: usize },
}

/// Errors raised by the map pipeline and the supply-chain solver.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("locations have not been triangulated")]
    NotTriangulated,

    #[error("network graph has not been built")]
    NetworkNotBuilt,

    #[error("invalid routing parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`NetgenError`].
pub type Result<T> = std::result::Result<T, NetgenError>;
