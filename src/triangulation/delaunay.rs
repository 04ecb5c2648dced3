use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::triangle_2d::in_circumcircle;
use crate::math::{points_are_ccw, Bbox2, Point2, Vector2};

use super::{IndexedEdge, IndexedTriangle, TriangulationParams};

/// Builds a Delaunay triangulation with the Bowyer–Watson algorithm.
///
/// Points are inserted in input order into a super-triangle far outside
/// the bounding box. Afterwards every triangle touching a super-triangle
/// corner is discarded.
///
/// Duplicate points and fully collinear input are not supported. Fewer
/// than three points produce a triangulation without triangles.
#[derive(Debug)]
pub struct Triangulate {
    points: Vec<Point2>,
    params: TriangulationParams,
}

impl Triangulate {
    /// Creates a new `Triangulate` operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, params: TriangulationParams) -> Self {
        Self { points, params }
    }

    /// Executes the triangulation.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFiniteCoordinate` if any point has a NaN
    /// or infinite coordinate.
    pub fn execute(&self) -> Result<Triangulation> {
        if let Some((index, p)) = self
            .points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(GeometryError::NonFiniteCoordinate {
                index,
                x: p.x,
                y: p.y,
            }
            .into());
        }

        let Some(bbox) = Bbox2::from_points(&self.points) else {
            return Ok(Triangulation::default());
        };

        let first_helper = self.points.len();
        let mut vertices = self.points.clone();
        vertices.extend(super_triangle(&bbox, &self.params));

        let mut triangles = vec![ccw_triangle(
            &vertices,
            first_helper,
            first_helper + 1,
            first_helper + 2,
        )];
        for i in 0..first_helper {
            insert_vertex(&vertices, &mut triangles, i);
        }

        triangles.retain(|tri| !tri.uses_vertex_from(first_helper));
        vertices.truncate(first_helper);

        debug!(
            points = vertices.len(),
            triangles = triangles.len(),
            "triangulated locations"
        );

        let mask = vec![false; triangles.len()];
        Ok(Triangulation {
            vertices,
            triangles,
            mask,
        })
    }
}

/// A Delaunay triangulation over a fixed vertex list.
///
/// Vertex `i` is the `i`-th input point. Triangles are counter-clockwise.
/// Masked triangles are logically removed but keep their index.
#[derive(Debug, Clone, Default)]
pub struct Triangulation {
    pub(super) vertices: Vec<Point2>,
    pub(super) triangles: Vec<IndexedTriangle>,
    pub(super) mask: Vec<bool>,
}

impl Triangulation {
    /// The triangulated points, in input order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// All triangles, including masked ones.
    #[must_use]
    pub fn triangles(&self) -> &[IndexedTriangle] {
        &self.triangles
    }

    /// Number of triangles, including masked ones.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if triangle `i` has been masked out.
    #[must_use]
    pub fn is_masked(&self, i: usize) -> bool {
        self.mask.get(i).copied().unwrap_or(false)
    }

    /// Iterates over the triangles that are not masked.
    pub fn unmasked_triangles(&self) -> impl Iterator<Item = &IndexedTriangle> + '_ {
        self.triangles
            .iter()
            .zip(&self.mask)
            .filter(|(_, &masked)| !masked)
            .map(|(tri, _)| tri)
    }
}

/// An equilateral triangle centred on `bbox` whose inscribed circle has
/// radius `scale × diagonal + margin`.
///
/// Helper corners must lie outside the circumcircle of every real Delaunay
/// triangle, including the thin ones along the hull.
fn super_triangle(bbox: &Bbox2, params: &TriangulationParams) -> [Point2; 3] {
    let center = bbox.center();
    let r = params.super_triangle_scale * bbox.diagonal() + params.super_triangle_margin;
    let half_base = 3.0_f64.sqrt() * r;
    [
        center + Vector2::new(0.0, 2.0 * r),
        center + Vector2::new(-half_base, -r),
        center + Vector2::new(half_base, -r),
    ]
}

fn ccw_triangle(vertices: &[Point2], a: usize, b: usize, c: usize) -> IndexedTriangle {
    let tri = IndexedTriangle::new(a, b, c);
    if points_are_ccw(&vertices[a], &vertices[b], &vertices[c]) {
        tri
    } else {
        tri.flipped()
    }
}

/// Inserts vertex `i`, replacing every triangle whose circumcircle contains
/// it with a fan around the new vertex.
fn insert_vertex(vertices: &[Point2], triangles: &mut Vec<IndexedTriangle>, i: usize) {
    let p = &vertices[i];
    let (bad, good): (Vec<_>, Vec<_>) = triangles
        .drain(..)
        .partition(|t| in_circumcircle(&vertices[t.a], &vertices[t.b], &vertices[t.c], p));

    *triangles = good;
    for edge in cavity_boundary(&bad) {
        triangles.push(ccw_triangle(vertices, edge.a, edge.b, i));
    }
}

/// Edges of `bad` that no other triangle of `bad` contains.
fn cavity_boundary(bad: &[IndexedTriangle]) -> Vec<IndexedEdge> {
    bad.iter()
        .enumerate()
        .flat_map(|(k, tri)| {
            tri.edges().into_iter().filter(move |edge| {
                !bad.iter()
                    .enumerate()
                    .any(|(j, other)| j != k && other.contains_edge(*edge))
            })
        })
        .collect()
}
