use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::math::triangle_2d::has_sharp_corner;

use super::{IndexedEdge, Triangulation};

impl Triangulation {
    /// Indices of unmasked triangles with fewer than three unmasked neighbours.
    #[must_use]
    pub fn boundary_triangle_indices(&self) -> Vec<usize> {
        self.boundary_among(&self.neighbour_lists())
    }

    /// Masks sliver triangles on the boundary until none remain.
    ///
    /// A triangle is a sliver if any corner is sharper than `max_angle`
    /// (radians). Masking a triangle exposes its neighbours, which are then
    /// examined in turn. Returns the number of triangles masked.
    pub fn mask_boundary_slivers(&mut self, max_angle: f64) -> usize {
        let cos = max_angle.cos();
        let cos_sq = cos * cos;
        let neighbours = self.neighbour_lists();
        let mut queue: VecDeque<usize> = self.boundary_among(&neighbours).into();

        let mut masked = 0;
        while let Some(i) = queue.pop_front() {
            if self.mask[i] || !self.is_sliver(i, cos_sq) {
                continue;
            }
            self.mask[i] = true;
            masked += 1;
            queue.extend(neighbours[i].iter().copied().filter(|&j| !self.mask[j]));
        }

        debug!(masked, "masked boundary slivers");
        masked
    }

    fn is_sliver(&self, i: usize, cos_sq: f64) -> bool {
        let tri = &self.triangles[i];
        has_sharp_corner(
            &self.vertices[tri.a],
            &self.vertices[tri.b],
            &self.vertices[tri.c],
            cos_sq,
        )
    }

    fn boundary_among(&self, neighbours: &[Vec<usize>]) -> Vec<usize> {
        (0..self.triangle_count())
            .filter(|&i| !self.is_masked(i) && self.unmasked_count(&neighbours[i]) < 3)
            .collect()
    }

    fn unmasked_count(&self, triangles: &[usize]) -> usize {
        triangles.iter().filter(|&&j| !self.is_masked(j)).count()
    }

    /// For each triangle, the indices of the triangles sharing an edge with it.
    fn neighbour_lists(&self) -> Vec<Vec<usize>> {
        let mut by_edge: HashMap<IndexedEdge, Vec<usize>> = HashMap::new();
        for (i, tri) in self.triangles.iter().enumerate() {
            for e in tri.edges() {
                let key = IndexedEdge::new(e.a.min(e.b), e.a.max(e.b));
                by_edge.entry(key).or_default().push(i);
            }
        }

        let mut neighbours = vec![Vec::new(); self.triangle_count()];
        for sharing in by_edge.values() {
            for &i in sharing {
                neighbours[i].extend(sharing.iter().copied().filter(|&j| j != i));
            }
        }
        neighbours
    }
}
