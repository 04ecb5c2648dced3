pub mod bbox_2d;
pub mod intersect_2d;
pub mod triangle_2d;

pub use bbox_2d::Bbox2;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Returns `true` if `a`, `b`, `c` turn strictly counter-clockwise.
///
/// Collinear points are not counter-clockwise.
#[must_use]
pub fn points_are_ccw(a: &Point2, b: &Point2, c: &Point2) -> bool {
    (b - a).perp(&(c - a)) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccw_turn() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        assert!(points_are_ccw(&a, &b, &c));
        assert!(!points_are_ccw(&a, &c, &b));
    }

    #[test]
    fn collinear_is_not_ccw() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(2.0, 2.0);
        assert!(!points_are_ccw(&a, &b, &c));
        assert!(!points_are_ccw(&c, &b, &a));
    }
}
