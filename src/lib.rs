//! Procedural transport networks for industry and town maps.
//!
//! Locations are triangulated, the triangulation becomes a capacity graph
//! (minus links crossing impassable lines), and cargo demand is routed
//! over it greedily so that wagons returning empty can be reused.

pub mod cargo;
pub mod error;
pub mod map;
pub mod math;
pub mod network;
pub mod report;
pub mod routing;
pub mod triangulation;

#[cfg(test)]
mod test_support;

pub use error::{NetgenError, Result};
