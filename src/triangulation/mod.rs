//! Delaunay triangulation of point locations.
//!
//! [`Triangulate`] runs the incremental Bowyer–Watson algorithm over a
//! point set; the resulting [`Triangulation`] keeps a mask so that thin
//! triangles on the boundary can be dropped without renumbering.

mod delaunay;
mod primitives;
mod sliver;

pub use delaunay::{Triangulate, Triangulation};
pub use primitives::{IndexedEdge, IndexedTriangle};

/// Parameters controlling triangulation.
#[derive(Debug, Clone, Copy)]
pub struct TriangulationParams {
    /// Distance from the bounding box centre to the super-triangle's
    /// sides, in multiples of the box diagonal.
    pub super_triangle_scale: f64,
    /// Absolute distance added to that, so that a single point or a tiny
    /// box still gets a usable super-triangle.
    pub super_triangle_margin: f64,
    /// Corners sharper than this angle (radians) make a boundary triangle a sliver.
    pub sliver_angle: f64,
}

impl Default for TriangulationParams {
    fn default() -> Self {
        Self {
            super_triangle_scale: 500.0,
            super_triangle_margin: 10.0,
            sliver_angle: 0.15,
        }
    }
}
