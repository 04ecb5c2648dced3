use super::{points_are_ccw, Point2};

/// Returns `true` if segment `a0 → a1` crosses segment `b0 → b1`.
///
/// Each segment's endpoints must lie on opposite sides of the other
/// segment's supporting line. Collinear overlaps are not crossings.
#[must_use]
pub fn segments_cross(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    points_are_ccw(a0, b0, b1) != points_are_ccw(a1, b0, b1)
        && points_are_ccw(a0, a1, b0) != points_are_ccw(a0, a1, b1)
}

/// Returns `true` if segment `a → b` crosses any segment of an open polyline.
#[must_use]
pub fn segment_crosses_polyline(a: &Point2, b: &Point2, line: &[Point2]) -> bool {
    line.windows(2)
        .any(|seg| segments_cross(a, b, &seg[0], &seg[1]))
}
