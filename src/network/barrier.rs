use crate::math::intersect_2d::segment_crosses_polyline;
use crate::math::{Bbox2, Point2};

/// An impassable open polyline, such as a river or a mountain ridge.
///
/// No network link may cross it.
#[derive(Debug, Clone)]
pub struct Barrier {
    points: Vec<Point2>,
    bbox: Option<Bbox2>,
}

impl Barrier {
    /// Creates a barrier through `points`, in order.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        let bbox = Bbox2::from_points(&points);
        Self { points, bbox }
    }

    /// The polyline vertices.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns `true` if segment `a → b` crosses the barrier.
    #[must_use]
    pub fn blocks(&self, a: &Point2, b: &Point2) -> bool {
        match &self.bbox {
            Some(bbox) if bbox.intersects(&Bbox2::from_segment(a, b)) => {
                segment_crosses_polyline(a, b, &self.points)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn river() -> Barrier {
        Barrier::new(vec![
            Point2::new(5.0, -10.0),
            Point2::new(5.0, 0.0),
            Point2::new(6.0, 10.0),
        ])
    }

    #[test]
    fn crossing_segment_is_blocked() {
        let r = river();
        assert!(r.blocks(&Point2::new(0.0, 5.0), &Point2::new(10.0, 5.0)));
        assert!(r.blocks(&Point2::new(10.0, -5.0), &Point2::new(0.0, -5.0)));
    }

    #[test]
    fn segment_on_one_side_passes() {
        let r = river();
        assert!(!r.blocks(&Point2::new(0.0, -5.0), &Point2::new(0.0, 5.0)));
        assert!(!r.blocks(&Point2::new(20.0, 0.0), &Point2::new(30.0, 0.0)));
    }

    #[test]
    fn segment_past_the_end_passes() {
        let r = river();
        assert!(!r.blocks(&Point2::new(0.0, 20.0), &Point2::new(10.0, 20.0)));
    }

    #[test]
    fn empty_barrier_blocks_nothing() {
        let r = Barrier::new(Vec::new());
        assert!(!r.blocks(&Point2::new(0.0, 0.0), &Point2::new(1.0, 1.0)));
        assert!(r.points().is_empty());
    }
}
