/// An edge given by the indices of its two ends.
///
/// Ordered: `(a, b)` and `(b, a)` are different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexedEdge {
    pub a: usize,
    pub b: usize,
}

impl IndexedEdge {
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// The same edge traversed in the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Returns `true` if both edges join the same two vertices, in either direction.
    #[must_use]
    pub fn same_endpoints(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

/// A triangle given by the indices of its corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexedTriangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl IndexedTriangle {
    #[must_use]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// The three boundary edges `(a, b)`, `(b, c)`, `(c, a)`.
    #[must_use]
    pub fn edges(&self) -> [IndexedEdge; 3] {
        [
            IndexedEdge::new(self.a, self.b),
            IndexedEdge::new(self.b, self.c),
            IndexedEdge::new(self.c, self.a),
        ]
    }

    /// The corner indices in order.
    #[must_use]
    pub fn corners(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns `true` if `edge` joins two corners of this triangle, in either direction.
    #[must_use]
    pub fn contains_edge(&self, edge: IndexedEdge) -> bool {
        self.edges().iter().any(|e| e.same_endpoints(&edge))
    }

    /// Returns `true` if any corner index is at least `first`.
    #[must_use]
    pub fn uses_vertex_from(&self, first: usize) -> bool {
        self.corners().iter().any(|&v| v >= first)
    }

    /// The same triangle with the opposite winding.
    #[must_use]
    pub fn flipped(self) -> Self {
        Self {
            a: self.a,
            b: self.c,
            c: self.b,
        }
    }
}
